// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Word-level helpers shared by the subject and body rules.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Trailing issue or pull request reference, e.g. ` (#123)`.
    static ref REFERENCE_SUFFIX: Regex = Regex::new(r"\s*\(#[a-zA-Z0-9_]+\)$").unwrap();

    /// A text that is a single word of letters and dashes.
    static ref WHOLE_WORD: Regex = Regex::new(r"^[a-zA-Z][a-zA-Z-]+$").unwrap();

    /// A word of letters and dashes at the start, followed by a space.
    static ref LEADING_WORD: Regex = Regex::new(r"^([a-zA-Z][a-zA-Z-]+) ").unwrap();
}

/// Remove a trailing issue reference so it does not count against the
/// subject length.
pub fn strip_reference(subject: &str) -> &str {
    match REFERENCE_SUFFIX.find(subject) {
        Some(m) => &subject[..m.start()],
        None => subject,
    }
}

/// The first word of a line, if the line starts with one.
pub fn first_word(text: &str) -> Option<&str> {
    if WHOLE_WORD.is_match(text) {
        return Some(text);
    }

    LEADING_WORD
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

/// First character uppercase, the rest lowercase.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Length in characters, which is what the limits are expressed in.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Quote an excerpt as a JSON string literal so that quotes, tabs and other
/// invisible characters show up in the report.
pub fn quote(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| format!("{:?}", text))
}
