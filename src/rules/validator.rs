// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation result types.

use console::style;

/// What a validation issue is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueKind {
    MessageEmpty,
    TooFewLines,
    MissingSeparator,
    SubjectTooLong,
    SubjectNoVerb,
    SubjectCapitalization,
    SubjectUnknownVerb,
    SubjectTrailingPeriod,
    BodyEmpty,
    BodyBlank,
    BodyLineTooLong,
    BodyRepeatsSubject,
    SignOffMissing,
}

impl IssueKind {
    /// Stable code used in the JSON report.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::MessageEmpty => "message-empty",
            IssueKind::TooFewLines => "too-few-lines",
            IssueKind::MissingSeparator => "missing-separator",
            IssueKind::SubjectTooLong => "subject-too-long",
            IssueKind::SubjectNoVerb => "subject-no-verb",
            IssueKind::SubjectCapitalization => "subject-capitalization",
            IssueKind::SubjectUnknownVerb => "subject-unknown-verb",
            IssueKind::SubjectTrailingPeriod => "subject-trailing-period",
            IssueKind::BodyEmpty => "body-empty",
            IssueKind::BodyBlank => "body-blank",
            IssueKind::BodyLineTooLong => "body-line-too-long",
            IssueKind::BodyRepeatsSubject => "body-repeats-subject",
            IssueKind::SignOffMissing => "sign-off-missing",
        }
    }
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single validation issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Kind of the issue.
    pub kind: IssueKind,
    /// Human-readable message, including the remedy.
    pub message: String,
    /// 1-based line of the message the issue refers to.
    pub line: Option<usize>,
}

impl ValidationIssue {
    /// Create an issue.
    pub fn new(kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            line: None,
        }
    }

    /// Attach the line number.
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        self.kind.as_str()
    }

    /// Format the issue as a bulleted line for terminal output.
    pub fn format(&self) -> String {
        format!("{} {}", style("*").red().bold(), self.message)
    }
}

/// Result of checking a commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// The message as it was given.
    pub message: String,
    /// Issues in the order the checks ran.
    pub errors: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Create an empty validation result.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: Vec::new(),
        }
    }

    /// Check if the validation passed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the total number of issues.
    pub fn issue_count(&self) -> usize {
        self.errors.len()
    }

    /// Render the human-readable report.
    pub fn render_text(&self) -> String {
        if self.is_valid() {
            return format!("{} The commit message is OK.", style("✓").green().bold());
        }

        let mut output = format!(
            "{} The commit message has {} issue(s):",
            style("✗").red().bold(),
            self.errors.len()
        );
        for error in &self.errors {
            output.push('\n');
            output.push_str(&error.format());
        }
        output
    }

    /// Render the machine-readable report.
    pub fn render_json(&self) -> String {
        let json = serde_json::json!({
            "valid": self.is_valid(),
            "message": self.message,
            "errors": self.errors.iter().map(|e| {
                serde_json::json!({
                    "code": e.code(),
                    "message": e.message,
                    "line": e.line,
                })
            }).collect::<Vec<_>>(),
        });

        serde_json::to_string_pretty(&json).unwrap_or_default()
    }
}
