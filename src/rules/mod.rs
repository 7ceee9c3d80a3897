// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! The engine splits a message into subject and body, enforces the
//! structural layout and runs the subject, body and sign-off rules,
//! collecting every issue it finds.

mod body;
mod engine;
mod sign_off;
mod subject;
mod validator;
mod words;

pub use body::{check_body, is_unbreakable};
pub use engine::RuleEngine;
pub use sign_off::{check_sign_off, is_sign_off};
pub use subject::check_subject;
pub use validator::{IssueKind, ValidationIssue, ValidationResult};
pub use words::{capitalize, first_word, strip_reference};
