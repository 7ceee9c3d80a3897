// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Verb whitelist used by the imperative-mood check.

mod builtin;
mod lexicon;

pub use builtin::FREQUENT_VERBS;
pub use lexicon::{parse_verbs, VerbLexicon};
