// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rules for the message body.

use crate::config::RulesConfig;
use lazy_static::lazy_static;
use regex::Regex;

use super::validator::{IssueKind, ValidationIssue};
use super::words::{char_len, first_word, quote};

/// Lines before the body: the subject and the blank separator.
const BODY_OFFSET: usize = 2;

lazy_static! {
    /// A line that is nothing but a URL.
    static ref URL_LINE: Regex = Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.-]*://\S+$").unwrap();

    /// A markdown link reference definition, e.g. `[1]: https://example.com`.
    static ref LINK_REFERENCE: Regex =
        Regex::new(r"^\[[^\]]+\]: [a-zA-Z][a-zA-Z0-9+.-]*://\S+$").unwrap();
}

/// Apply the body rules.
///
/// An empty body, or a body of a single blank line, is reported on its own
/// and nothing else is checked.
pub fn check_body(subject: &str, body: &[String], rules: &RulesConfig) -> Vec<ValidationIssue> {
    let Some(first_line) = body.first() else {
        return vec![ValidationIssue::new(
            IssueKind::BodyEmpty,
            "At least one line of body was expected after the blank line, but the body is empty. \
             Please describe the change in the body.",
        )];
    };

    if body.len() == 1 && first_line.trim().is_empty() {
        return vec![ValidationIssue::new(
            IssueKind::BodyBlank,
            "Unexpected empty body: the only line of the body is blank. \
             Please describe the change in the body.",
        )
        .at_line(BODY_OFFSET + 1)];
    }

    let mut issues: Vec<ValidationIssue> = body
        .iter()
        .enumerate()
        .filter_map(|(i, line)| check_line_length(i, line, rules.max_body_line_length))
        .collect();

    if let Some(issue) = check_repeats_subject(subject, first_line) {
        issues.push(issue);
    }

    issues
}

/// Whether a line is exempt from the length limit because it cannot be
/// wrapped.
pub fn is_unbreakable(line: &str) -> bool {
    let trimmed = line.trim();
    URL_LINE.is_match(trimmed) || LINK_REFERENCE.is_match(trimmed)
}

fn check_line_length(index: usize, line: &str, max: usize) -> Option<ValidationIssue> {
    if is_unbreakable(line) {
        return None;
    }

    let len = char_len(line);
    if len <= max {
        return None;
    }

    let line_number = index + BODY_OFFSET + 1;
    Some(
        ValidationIssue::new(
            IssueKind::BodyLineTooLong,
            format!(
                "The line {} of the message (line {} of the body) exceeds the limit of {} characters. \
                 The line contains {} characters: {}. \
                 Please reformat the body so that all the lines fit {} characters.",
                line_number,
                index + 1,
                max,
                len,
                quote(line),
                max
            ),
        )
        .at_line(line_number),
    )
}

fn check_repeats_subject(subject: &str, first_line: &str) -> Option<ValidationIssue> {
    let subject_word = first_word(subject)?;
    let body_word = first_word(first_line)?;

    if subject_word.to_lowercase() != body_word.to_lowercase() {
        return None;
    }

    Some(
        ValidationIssue::new(
            IssueKind::BodyRepeatsSubject,
            format!(
                "The first word of the subject ({}) must not match the first word of the body. \
                 Please make the body more informative by adding more information \
                 instead of repeating the subject. \
                 For example, start with \"Previously, ...\" or \"Before, ...\".",
                quote(subject_word)
            ),
        )
        .at_line(BODY_OFFSET + 1),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(subject: &str, body: &[&str]) -> Vec<ValidationIssue> {
        let body: Vec<String> = body.iter().map(|s| s.to_string()).collect();
        check_body(subject, &body, &RulesConfig::default())
    }

    fn kinds(issues: &[ValidationIssue]) -> Vec<IssueKind> {
        issues.iter().map(|i| i.kind).collect()
    }

    #[test]
    fn test_valid_body() {
        assert!(check("Fix bug", &["Previously, nothing was fixed."]).is_empty());
    }

    #[test]
    fn test_empty_body() {
        let issues = check("Fix bug", &[]);
        assert_eq!(kinds(&issues), vec![IssueKind::BodyEmpty]);
    }

    #[test]
    fn test_blank_body_short_circuits() {
        assert_eq!(kinds(&check("Fix bug", &[""])), vec![IssueKind::BodyBlank]);
        assert_eq!(kinds(&check("Fix bug", &["   "])), vec![IssueKind::BodyBlank]);
    }

    #[test]
    fn test_blank_first_of_many_lines_is_not_blank_body() {
        assert!(check("Fix bug", &["", "Previously, nothing was fixed."]).is_empty());
    }

    #[test]
    fn test_long_line() {
        let long = "x".repeat(73);
        let issues = check("Fix bug", &["Previously, nothing was fixed.", &long]);
        assert_eq!(kinds(&issues), vec![IssueKind::BodyLineTooLong]);
        assert_eq!(issues[0].line, Some(4));
        assert!(issues[0].message.contains("The line 4 of the message (line 2 of the body)"));
        assert!(issues[0].message.contains("contains 73 characters"));
    }

    #[test]
    fn test_line_at_limit() {
        let exact = "x".repeat(72);
        assert!(check("Fix bug", &[&exact]).is_empty());
    }

    #[test]
    fn test_configured_body_limit() {
        let rules = RulesConfig {
            max_body_line_length: 20,
            ..RulesConfig::default()
        };
        let body = vec!["Previously, nothing was fixed.".to_string()];
        let issues = check_body("Fix bug", &body, &rules);
        assert_eq!(kinds(&issues), vec![IssueKind::BodyLineTooLong]);
        assert!(issues[0].message.contains("limit of 20"));
    }

    #[test]
    fn test_url_line_exempt() {
        let url = format!("https://example.com/very/long/path/{}", "a".repeat(80));
        assert!(check("Fix bug", &["Previously, see:", &url]).is_empty());
        let indented = format!("  {}", url);
        assert!(check("Fix bug", &["Previously, see:", &indented]).is_empty());
    }

    #[test]
    fn test_link_reference_exempt() {
        let reference = format!("[1]: https://example.com/{}", "a".repeat(80));
        assert!(check("Fix bug", &["Previously, see [1].", &reference]).is_empty());
    }

    #[test]
    fn test_url_with_text_not_exempt() {
        let line = format!("See https://example.com/{}", "a".repeat(80));
        let issues = check("Fix bug", &[&line]);
        assert_eq!(kinds(&issues), vec![IssueKind::BodyLineTooLong]);
    }

    #[test]
    fn test_is_unbreakable() {
        assert!(is_unbreakable("https://example.com"));
        assert!(is_unbreakable("[label]: ftp://example.com/x"));
        assert!(!is_unbreakable("https://example.com and more"));
        assert!(!is_unbreakable("[label] https://example.com"));
        assert!(!is_unbreakable("example.com/path"));
    }

    #[test]
    fn test_body_repeats_subject() {
        let issues = check("Fix bug", &["fix the bug by checking bounds."]);
        assert_eq!(kinds(&issues), vec![IssueKind::BodyRepeatsSubject]);
        assert!(issues[0].message.contains("\"Fix\""));
    }

    #[test]
    fn test_line_issues_precede_repeat_issue() {
        let long = format!("Fix {}", "x".repeat(80));
        let issues = check("Fix bug", &[&long]);
        assert_eq!(
            kinds(&issues),
            vec![IssueKind::BodyLineTooLong, IssueKind::BodyRepeatsSubject]
        );
        assert_eq!(issues[0].line, Some(3));
    }
}
