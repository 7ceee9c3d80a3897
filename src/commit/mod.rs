// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message handling.

mod message;

pub use message::{is_merge_commit, split_lines, CommitMessage, MERGE_PREFIX};
