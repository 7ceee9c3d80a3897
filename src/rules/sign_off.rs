// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Sign-off rule.

use lazy_static::lazy_static;
use regex::Regex;

use super::validator::{IssueKind, ValidationIssue};

lazy_static! {
    /// `Signed-off-by: Name <user@example.com>`
    static ref SIGN_OFF: Regex =
        Regex::new(r"^\s*Signed-off-by:\s*[^<]+\s*<[^@>, ]+@[^@>, ]+>\s*$").unwrap();
}

/// Whether the line is a well-formed sign-off.
pub fn is_sign_off(line: &str) -> bool {
    SIGN_OFF.is_match(line)
}

/// The body must contain at least one sign-off line.
pub fn check_sign_off(body: &[String]) -> Option<ValidationIssue> {
    let count = body.iter().filter(|line| is_sign_off(line)).count();
    tracing::trace!("{} sign-off line(s) found", count);

    if count > 0 {
        return None;
    }

    Some(ValidationIssue::new(
        IssueKind::SignOffMissing,
        "The body does not contain any 'Signed-off-by: Name <email>' line. \
         Did you sign off the commit with `git commit --signoff`?",
    ))
}
