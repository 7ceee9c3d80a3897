// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit validation.

use crate::commit::{is_merge_commit, split_lines, CommitMessage};
use crate::config::{OcmConfig, RulesConfig};
use crate::error::Result;
use crate::verbs::VerbLexicon;

use super::body::check_body;
use super::sign_off::check_sign_off;
use super::subject::check_subject;
use super::validator::{IssueKind, ValidationIssue, ValidationResult};
use super::words::quote;

/// Rule engine for validating commit messages.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    rules: RulesConfig,
    lexicon: VerbLexicon,
}

impl RuleEngine {
    /// Create a new rule engine.
    pub fn new(rules: RulesConfig, lexicon: VerbLexicon) -> Self {
        Self { rules, lexicon }
    }

    /// Build the engine from a loaded configuration, reading the verbs file
    /// if one is configured.
    pub fn from_config(config: &OcmConfig) -> Result<Self> {
        let inline = config.verbs.additional.to_delimited();
        let lexicon = VerbLexicon::assemble(Some(&inline), config.verbs.path.as_deref())?;
        Ok(Self::new(config.rules.clone(), lexicon))
    }

    /// The verbs the subject may start with.
    pub fn lexicon(&self) -> &VerbLexicon {
        &self.lexicon
    }

    /// Validate a raw commit message.
    pub fn validate_string(&self, text: &str) -> ValidationResult {
        let mut result = ValidationResult::new(text);
        result.errors = self.check(text);
        result
    }

    /// Check raw text and return the issues in the order they were found.
    pub fn check(&self, text: &str) -> Vec<ValidationIssue> {
        if is_merge_commit(text) {
            tracing::debug!("Merge commit, skipping all checks");
            return Vec::new();
        }

        let lines = split_lines(text);
        tracing::debug!("Checking message of {} line(s)", lines.len());

        match lines.as_slice() {
            [] => vec![ValidationIssue::new(
                IssueKind::MessageEmpty,
                "The message is empty.",
            )],
            [subject] if self.rules.allow_one_liners => {
                check_subject(subject, &self.lexicon, &self.rules)
            }
            [_] | [_, _] => vec![too_few_lines(lines.len())],
            [_, separator, ..] if !separator.is_empty() => vec![missing_separator(separator)],
            [subject, _, body @ ..] => {
                let message = CommitMessage::new(*subject).with_body(body.iter().copied());
                self.validate(&message)
            }
        }
    }

    /// Validate a message that is already split into subject and body.
    pub fn validate(&self, message: &CommitMessage) -> Vec<ValidationIssue> {
        let mut issues = check_subject(&message.subject, &self.lexicon, &self.rules);
        issues.extend(check_body(&message.subject, &message.body, &self.rules));

        if self.rules.enforce_sign_off {
            if let Some(issue) = check_sign_off(&message.body) {
                issues.push(issue);
            }
        }

        issues
    }
}

fn too_few_lines(count: usize) -> ValidationIssue {
    let mut message = format!(
        "Expected at least three lines (subject, empty line, body), but got {} line(s).",
        count
    );
    if count == 1 {
        message.push_str(" Use --allow-one-liners if a subject alone should be accepted.");
    } else {
        message.push_str(" Please separate the subject from the body with an empty line.");
    }

    ValidationIssue::new(IssueKind::TooFewLines, message)
}

fn missing_separator(separator: &str) -> ValidationIssue {
    ValidationIssue::new(
        IssueKind::MissingSeparator,
        format!(
            "Expected an empty line between the subject and the body, \
             but got a second line of {} character(s): {}. \
             Please separate the subject from the body with an empty line.",
            separator.chars().count(),
            quote(separator)
        ),
    )
    .at_line(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> RuleEngine {
        RuleEngine::new(RulesConfig::default(), VerbLexicon::builtin())
    }

    fn engine_with(rules: RulesConfig) -> RuleEngine {
        RuleEngine::new(rules, VerbLexicon::builtin())
    }

    fn kinds(issues: &[ValidationIssue]) -> Vec<IssueKind> {
        issues.iter().map(|i| i.kind).collect()
    }

    #[test]
    fn test_valid_message() {
        let issues = engine().check("Fix bug\n\nPreviously, nothing was fixed.");
        assert!(issues.is_empty(), "{:?}", issues);
    }

    #[test]
    fn test_valid_message_crlf_and_trailing_newline() {
        let issues = engine().check("Fix bug\r\n\r\nPreviously, nothing was fixed.\r\n");
        assert!(issues.is_empty(), "{:?}", issues);
    }

    #[test]
    fn test_merge_commit_exempt() {
        assert!(engine().check("Merge branch 'main' into topic").is_empty());
        assert!(engine()
            .check("Merge branch 'x'\nnot blank\nfixed stuff. way too long and lowercase")
            .is_empty());
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(kinds(&engine().check("")), vec![IssueKind::MessageEmpty]);
    }

    #[test]
    fn test_one_liner_rejected_by_default() {
        let issues = engine().check("Fix bug");
        assert_eq!(kinds(&issues), vec![IssueKind::TooFewLines]);
        assert!(issues[0].message.contains("--allow-one-liners"));
    }

    #[test]
    fn test_one_liner_allowed() {
        let rules = RulesConfig {
            allow_one_liners: true,
            ..RulesConfig::default()
        };
        assert!(engine_with(rules.clone()).check("Fix bug").is_empty());

        let issues = engine_with(rules).check("fix bug.");
        assert_eq!(
            kinds(&issues),
            vec![IssueKind::SubjectCapitalization, IssueKind::SubjectTrailingPeriod]
        );
    }

    #[test]
    fn test_one_liner_skips_sign_off() {
        let rules = RulesConfig {
            allow_one_liners: true,
            enforce_sign_off: true,
            ..RulesConfig::default()
        };
        assert!(engine_with(rules).check("Fix bug").is_empty());
    }

    #[test]
    fn test_two_lines() {
        let issues = engine().check("Subject\nBody line");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::TooFewLines);
    }

    #[test]
    fn test_missing_separator_aborts() {
        let issues = engine().check("fixed bug.\nNot blank\n\nfixed it");
        assert_eq!(kinds(&issues), vec![IssueKind::MissingSeparator]);
        assert_eq!(issues[0].line, Some(2));
        assert!(issues[0].message.contains("\"Not blank\""));
    }

    #[test]
    fn test_whitespace_separator_is_not_empty() {
        let issues = engine().check("Fix bug\n \nPreviously, nothing was fixed.");
        assert_eq!(kinds(&issues), vec![IssueKind::MissingSeparator]);
    }

    #[test]
    fn test_blank_body() {
        let issues = engine().check("Fix bug\n\n   ");
        assert_eq!(kinds(&issues), vec![IssueKind::BodyBlank]);
    }

    #[test]
    fn test_separator_without_body_is_blank_body() {
        let issues = engine().check("Fix bug\n\n\n");
        assert_eq!(kinds(&issues), vec![IssueKind::BodyBlank]);
        assert_eq!(issues[0].line, Some(3));

        let rules = RulesConfig {
            allow_one_liners: true,
            ..RulesConfig::default()
        };
        let issues = engine_with(rules).check("Fix bug\n\n\n");
        assert_eq!(kinds(&issues), vec![IssueKind::BodyBlank]);
    }

    #[test]
    fn test_trailing_blank_line_after_body() {
        let issues = engine().check("Fix bug\n\nPreviously, nothing was fixed.\n\n");
        assert!(issues.is_empty(), "{:?}", issues);
    }

    #[test]
    fn test_subject_and_body_issues_accumulate() {
        let long = "x".repeat(80);
        let text = format!("fix bug.\n\nFix it properly.\n{}", long);
        let issues = engine().check(&text);
        assert_eq!(
            kinds(&issues),
            vec![
                IssueKind::SubjectCapitalization,
                IssueKind::SubjectTrailingPeriod,
                IssueKind::BodyLineTooLong,
                IssueKind::BodyRepeatsSubject,
            ]
        );
    }

    #[test]
    fn test_sign_off_enforced() {
        let rules = RulesConfig {
            enforce_sign_off: true,
            ..RulesConfig::default()
        };
        let engine = engine_with(rules);

        let issues = engine.check("Fix bug\n\nPreviously, nothing was fixed.");
        assert_eq!(kinds(&issues), vec![IssueKind::SignOffMissing]);

        let signed = "Fix bug\n\nPreviously, nothing was fixed.\n\n\
                      Signed-off-by: Jane Doe <jane@example.com>";
        assert!(engine.check(signed).is_empty());
    }

    #[test]
    fn test_sign_off_comes_last() {
        let rules = RulesConfig {
            enforce_sign_off: true,
            ..RulesConfig::default()
        };
        let issues = engine_with(rules).check("Fix bug.\n\nPreviously, nothing was fixed.");
        assert_eq!(
            kinds(&issues),
            vec![IssueKind::SubjectTrailingPeriod, IssueKind::SignOffMissing]
        );
    }

    #[test]
    fn test_check_is_idempotent() {
        let engine = engine();
        let text = "fixed bug.\n\nfixed it";
        assert_eq!(engine.check(text), engine.check(text));
    }

    #[test]
    fn test_validate_string() {
        let result = engine().validate_string("Fix bug");
        assert!(!result.is_valid());
        assert_eq!(result.message, "Fix bug");
    }

    #[test]
    fn test_from_config_reads_verbs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("verbs.txt");
        std::fs::write(&path, "rewire\n").unwrap();

        let mut config = OcmConfig::default();
        config.verbs.path = Some(path);
        let engine = RuleEngine::from_config(&config).unwrap();

        assert!(engine.lexicon().contains("rewire"));
        assert!(engine.check("Rewire pipes\n\nPreviously, leaky.").is_empty());
    }

    #[test]
    fn test_from_config_missing_verbs_file() {
        let mut config = OcmConfig::default();
        config.verbs.path = Some("/no/such/verbs.txt".into());
        assert!(RuleEngine::from_config(&config).is_err());
    }
}
