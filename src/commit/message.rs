// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure and line splitting.

/// Prefix of the messages git writes for branch merges.
pub const MERGE_PREFIX: &str = "Merge branch";

/// Whether the message is a merge commit, which is exempt from all checks.
pub fn is_merge_commit(text: &str) -> bool {
    text.starts_with(MERGE_PREFIX)
}

/// Split raw text into lines, dropping the carriage return of CRLF endings.
///
/// Empty text has no lines. A single final line terminator does not produce
/// a trailing empty line, so `"Subject\n\nBody\n"` splits the same way as
/// `"Subject\n\nBody"`. Any further terminators are kept as empty lines.
pub fn split_lines(text: &str) -> Vec<&str> {
    let text = text
        .strip_suffix('\n')
        .map(|t| t.strip_suffix('\r').unwrap_or(t))
        .unwrap_or(text);
    if text.is_empty() {
        return Vec::new();
    }

    text.split('\n')
        .map(|line| line.trim_end_matches('\r'))
        .collect()
}

/// A commit message split into subject and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    /// Subject line.
    pub subject: String,
    /// Lines after the blank separator; empty when there is no body.
    pub body: Vec<String>,
}

impl CommitMessage {
    /// Create a message without a body.
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            body: Vec::new(),
        }
    }

    /// Set the body lines.
    pub fn with_body<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.body = lines.into_iter().map(Into::into).collect();
        self
    }
}
