// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from ocm.toml.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default limit for the subject line, in characters.
pub const DEFAULT_MAX_SUBJECT_LENGTH: usize = 50;

/// Default limit for a body line, in characters.
pub const DEFAULT_MAX_BODY_LINE_LENGTH: usize = 72;

/// The main configuration structure for ocm.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct OcmConfig {
    /// Rule configuration.
    pub rules: RulesConfig,

    /// Additional imperative verbs.
    pub verbs: VerbsConfig,

    /// Reporting configuration.
    pub output: OutputConfig,
}

impl OcmConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}

/// Rule configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RulesConfig {
    /// Accept a message that consists of the subject alone.
    pub allow_one_liners: bool,

    /// Require a `Signed-off-by:` line in the body.
    pub enforce_sign_off: bool,

    /// Maximum length of the subject line.
    pub max_subject_length: usize,

    /// Maximum length of a body line.
    pub max_body_line_length: usize,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            allow_one_liners: false,
            enforce_sign_off: false,
            max_subject_length: DEFAULT_MAX_SUBJECT_LENGTH,
            max_body_line_length: DEFAULT_MAX_BODY_LINE_LENGTH,
        }
    }
}

/// Sources of additional verbs on top of the built-in list.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct VerbsConfig {
    /// Verbs given inline.
    pub additional: VerbList,

    /// File with one or more delimited verbs.
    pub path: Option<PathBuf>,
}

/// Inline verbs, either as a TOML array or a single delimited string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum VerbList {
    /// `"rewire, untangle; reword"`
    Delimited(String),
    /// `["rewire", "untangle"]`
    List(Vec<String>),
}

impl Default for VerbList {
    fn default() -> Self {
        VerbList::List(Vec::new())
    }
}

impl VerbList {
    /// Render as the newline-delimited text the verb parser understands.
    pub fn to_delimited(&self) -> String {
        match self {
            VerbList::Delimited(text) => text.clone(),
            VerbList::List(items) => items.join("\n"),
        }
    }

    /// Whether no verbs were given at all.
    pub fn is_empty(&self) -> bool {
        match self {
            VerbList::Delimited(text) => text.trim().is_empty(),
            VerbList::List(items) => items.iter().all(|s| s.trim().is_empty()),
        }
    }
}

/// Reporting configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Report violations but exit successfully.
    pub dont_throw: bool,

    /// Whether to use colors.
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dont_throw: false,
            color: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OcmConfig::default();
        assert_eq!(config.rules.max_subject_length, 50);
        assert_eq!(config.rules.max_body_line_length, 72);
        assert!(!config.rules.allow_one_liners);
        assert!(!config.rules.enforce_sign_off);
        assert!(!config.output.dont_throw);
        assert!(config.verbs.additional.is_empty());
    }

    #[test]
    fn test_verb_list_forms() {
        let list = VerbList::List(vec!["rewire".to_string(), "untangle".to_string()]);
        assert_eq!(list.to_delimited(), "rewire\nuntangle");

        let text = VerbList::Delimited("rewire; untangle".to_string());
        assert_eq!(text.to_delimited(), "rewire; untangle");
        assert!(!text.is_empty());
        assert!(VerbList::Delimited("  ".to_string()).is_empty());
    }

    #[test]
    fn test_config_serialization() {
        let config = OcmConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("max_subject_length"));
        assert!(toml_str.contains("dont_throw"));
    }
}
