// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! ocm - Opinionated commit message checker
//!
//! Validates the layout of a commit message: a short, capitalized subject
//! that starts with a verb in imperative mood, an empty line, and a body
//! wrapped at a fixed width. Optionally requires a sign-off line.
//!
//! # Example
//!
//! ```
//! use ocm::config::RulesConfig;
//! use ocm::rules::RuleEngine;
//! use ocm::verbs::VerbLexicon;
//!
//! let engine = RuleEngine::new(RulesConfig::default(), VerbLexicon::builtin());
//!
//! assert!(engine.check("Fix bug\n\nPreviously, nothing was fixed.").is_empty());
//! assert_eq!(engine.check("fix bug\n\nPreviously, nothing was fixed.").len(), 1);
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod rules;
pub mod verbs;

// Re-exports for convenience
pub use config::OcmConfig;
pub use error::{OcmError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of ocm.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => format!("{} ({} {})", VERSION, short_sha(sha), date),
            (Some(sha), None) => format!("{} ({})", VERSION, short_sha(sha)),
            _ => VERSION.to_string(),
        }
    }

    fn short_sha(sha: &str) -> &str {
        sha.get(..7).unwrap_or(sha)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_version_string_starts_with_version() {
            assert!(version_string().starts_with(VERSION));
        }
    }
}
