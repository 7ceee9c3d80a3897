// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rules for the subject line.

use crate::config::RulesConfig;
use crate::verbs::VerbLexicon;

use super::validator::{IssueKind, ValidationIssue};
use super::words::{capitalize, char_len, first_word, quote, strip_reference};

/// Apply all subject rules. Every rule runs, regardless of earlier failures.
pub fn check_subject(
    subject: &str,
    lexicon: &VerbLexicon,
    rules: &RulesConfig,
) -> Vec<ValidationIssue> {
    debug_assert!(
        lexicon.keys().all(|k| !k.is_empty() && k == k.to_lowercase()),
        "verb lexicon keys must be non-empty and lowercase"
    );

    let stripped = strip_reference(subject);
    let mut issues = Vec::new();

    if let Some(issue) = check_subject_length(stripped, rules.max_subject_length) {
        issues.push(issue);
    }

    match first_word(stripped) {
        Some(word) => {
            if let Some(issue) = check_capitalization(word) {
                issues.push(issue);
            }
            if let Some(issue) = check_imperative_verb(word, lexicon) {
                issues.push(issue);
            }
        }
        None => issues.push(no_verb(stripped)),
    }

    if let Some(issue) = check_trailing_period(stripped) {
        issues.push(issue);
    }

    issues
}

/// The subject, without its issue reference, must fit the limit.
fn check_subject_length(stripped: &str, max: usize) -> Option<ValidationIssue> {
    let len = char_len(stripped);
    if len <= max {
        return None;
    }

    Some(
        ValidationIssue::new(
            IssueKind::SubjectTooLong,
            format!(
                "The subject exceeds the limit of {} characters (got: {}, JSON: {}). \
                 Please shorten the subject to make it more succinct.",
                max,
                len,
                quote(stripped)
            ),
        )
        .at_line(1),
    )
}

fn no_verb(stripped: &str) -> ValidationIssue {
    ValidationIssue::new(
        IssueKind::SubjectNoVerb,
        format!(
            "The subject must start with a verb in imperative mood (e.g., \"Add\" or \"Fix\"), \
             but no leading word could be found in the subject: {}. \
             Please start the subject with a capitalized verb followed by a space.",
            quote(stripped)
        ),
    )
    .at_line(1)
}

fn check_capitalization(word: &str) -> Option<ValidationIssue> {
    let capitalized = capitalize(word);
    if word == capitalized {
        return None;
    }

    Some(
        ValidationIssue::new(
            IssueKind::SubjectCapitalization,
            format!(
                "The subject must start with a capitalized word, but the current first word is: {}. \
                 Please capitalize to: {}.",
                quote(word),
                quote(&capitalized)
            ),
        )
        .at_line(1),
    )
}

fn check_imperative_verb(word: &str, lexicon: &VerbLexicon) -> Option<ValidationIssue> {
    if lexicon.contains(word) {
        return None;
    }

    let inline = match lexicon.inline_count() {
        0 => "currently no additional verbs were given".to_string(),
        n => format!("currently {} additional verb(s) were given", n),
    };
    let file = match lexicon.path() {
        Some(path) => format!("currently the file {} is used", quote(&path.display().to_string())),
        None => "currently no such file was given".to_string(),
    };

    Some(
        ValidationIssue::new(
            IssueKind::SubjectUnknownVerb,
            format!(
                "The subject must start with a verb in imperative mood, but it started with: {}. \
                 Whether the word is in imperative mood is determined by a whitelist of verbs. \
                 You can whitelist additional verbs with --additional-verbs ({}). \
                 Moreover, you can whitelist additional verbs in a file given with \
                 --path-to-additional-verbs ({}). \
                 Please check the whitelist and either change the first word of the subject \
                 or whitelist the verb.",
                quote(word),
                inline,
                file
            ),
        )
        .at_line(1),
    )
}

fn check_trailing_period(stripped: &str) -> Option<ValidationIssue> {
    if !stripped.ends_with('.') {
        return None;
    }

    Some(
        ValidationIssue::new(
            IssueKind::SubjectTrailingPeriod,
            "The subject must not end with a dot ('.'). Please remove the trailing dot(s).",
        )
        .at_line(1),
    )
}
