// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading and merging.

use crate::error::{ConfigError, OcmError, Result};
use std::path::{Path, PathBuf};

use super::schema::{OcmConfig, RulesConfig, VerbList, VerbsConfig};
use super::schema::{DEFAULT_MAX_BODY_LINE_LENGTH, DEFAULT_MAX_SUBJECT_LENGTH};

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &["ocm.toml", ".ocm.toml", ".config/ocm.toml"];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for config_name in CONFIG_FILES {
            let config_path = current.join(config_name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    if let Some(home) = dirs::home_dir() {
        for config_name in CONFIG_FILES {
            let config_path = home.join(config_name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }
    }

    // $XDG_CONFIG_HOME/ocm/config.toml
    let xdg = dirs::config_dir()?.join("ocm").join("config.toml");
    xdg.is_file().then_some(xdg)
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<OcmConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(OcmConfig::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<OcmConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(OcmError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        OcmError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    let mut config = parse_config(&content)?;

    // A relative verbs path is relative to the file that names it.
    if let (Some(verbs_path), Some(dir)) = (config.verbs.path.as_ref(), path.parent()) {
        if verbs_path.is_relative() && !verbs_path.as_os_str().is_empty() {
            config.verbs.path = Some(dir.join(verbs_path));
        }
    }

    Ok(config)
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<OcmConfig> {
    let config: OcmConfig = toml::from_str(content).map_err(|e| {
        OcmError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })?;

    validate_config(&config)?;
    Ok(config)
}

/// Reject values the checker cannot work with.
pub fn validate_config(config: &OcmConfig) -> Result<()> {
    if config.rules.max_subject_length == 0 {
        return Err(ConfigError::InvalidValue {
            key: "rules.max_subject_length".to_string(),
            message: "must be greater than zero".to_string(),
        }
        .into());
    }
    if config.rules.max_body_line_length == 0 {
        return Err(ConfigError::InvalidValue {
            key: "rules.max_body_line_length".to_string(),
            message: "must be greater than zero".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Merge two configurations, with the overlay taking precedence.
///
/// Flags are OR-ed, inline verbs accumulate, and an overlay verbs path
/// replaces the base one.
pub fn merge_configs(base: OcmConfig, overlay: OcmConfig) -> OcmConfig {
    OcmConfig {
        rules: merge_rules_config(base.rules, overlay.rules),
        verbs: merge_verbs_config(base.verbs, overlay.verbs),
        output: super::schema::OutputConfig {
            dont_throw: base.output.dont_throw || overlay.output.dont_throw,
            color: base.output.color && overlay.output.color,
        },
    }
}

fn merge_rules_config(base: RulesConfig, overlay: RulesConfig) -> RulesConfig {
    RulesConfig {
        allow_one_liners: base.allow_one_liners || overlay.allow_one_liners,
        enforce_sign_off: base.enforce_sign_off || overlay.enforce_sign_off,
        max_subject_length: if overlay.max_subject_length != DEFAULT_MAX_SUBJECT_LENGTH {
            overlay.max_subject_length
        } else {
            base.max_subject_length
        },
        max_body_line_length: if overlay.max_body_line_length != DEFAULT_MAX_BODY_LINE_LENGTH {
            overlay.max_body_line_length
        } else {
            base.max_body_line_length
        },
    }
}

fn merge_verbs_config(base: VerbsConfig, overlay: VerbsConfig) -> VerbsConfig {
    let additional = match (base.additional.is_empty(), overlay.additional.is_empty()) {
        (_, true) => base.additional,
        (true, false) => overlay.additional,
        (false, false) => VerbList::List(vec![
            base.additional.to_delimited(),
            overlay.additional.to_delimited(),
        ]),
    };

    // An empty path means "not given" and must not hide the base file.
    let overlay_path = overlay.path.filter(|p| !p.as_os_str().is_empty());

    VerbsConfig {
        additional,
        path: overlay_path.or(base.path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let config = parse_config("").unwrap();
        assert_eq!(config, OcmConfig::default());
    }

    #[test]
    fn test_parse_custom_config() {
        let toml = r#"
[rules]
allow_one_liners = true
max_subject_length = 60

[verbs]
additional = ["rewire", "untangle"]
path = "/etc/ocm/verbs.txt"

[output]
dont_throw = true
"#;
        let config = parse_config(toml).unwrap();
        assert!(config.rules.allow_one_liners);
        assert!(!config.rules.enforce_sign_off);
        assert_eq!(config.rules.max_subject_length, 60);
        assert_eq!(config.rules.max_body_line_length, 72);
        assert_eq!(config.verbs.additional.to_delimited(), "rewire\nuntangle");
        assert_eq!(config.verbs.path, Some(PathBuf::from("/etc/ocm/verbs.txt")));
        assert!(config.output.dont_throw);
    }

    #[test]
    fn test_parse_delimited_verbs() {
        let config = parse_config("[verbs]\nadditional = \"rewire, untangle\"\n").unwrap();
        assert_eq!(
            config.verbs.additional,
            VerbList::Delimited("rewire, untangle".to_string())
        );
    }

    #[test]
    fn test_parse_rejects_zero_limit() {
        let err = parse_config("[rules]\nmax_body_line_length = 0\n").unwrap_err();
        assert!(err.to_string().contains("max_body_line_length"));
    }

    #[test]
    fn test_parse_rejects_bad_toml() {
        let err = parse_config("[rules\n").unwrap_err();
        assert!(matches!(err, OcmError::Config(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config_from(Path::new("/definitely/not/here/ocm.toml")).unwrap_err();
        assert!(matches!(err, OcmError::Config(ConfigError::NotFound { .. })));
    }

    #[test]
    fn test_load_resolves_relative_verbs_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ocm.toml");
        std::fs::write(&path, "[verbs]\npath = \"verbs.txt\"\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.verbs.path, Some(dir.path().join("verbs.txt")));
    }

    #[test]
    fn test_find_config_file_from_parent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(".ocm.toml"), "").unwrap();

        let found = find_config_file_from(&nested).unwrap();
        assert_eq!(found, dir.path().join(".ocm.toml"));
    }

    #[test]
    fn test_merge_configs() {
        let base = parse_config(
            r#"
[rules]
max_subject_length = 60

[verbs]
additional = "rewire"
path = "/base/verbs.txt"
"#,
        )
        .unwrap();

        let mut overlay = OcmConfig::default();
        overlay.rules.enforce_sign_off = true;
        overlay.verbs.additional = VerbList::Delimited("untangle".to_string());
        overlay.verbs.path = Some(PathBuf::from("/cli/verbs.txt"));
        overlay.output.dont_throw = true;

        let merged = merge_configs(base, overlay);
        assert_eq!(merged.rules.max_subject_length, 60);
        assert!(merged.rules.enforce_sign_off);
        assert!(merged.output.dont_throw);
        assert_eq!(merged.verbs.additional.to_delimited(), "rewire\nuntangle");
        assert_eq!(merged.verbs.path, Some(PathBuf::from("/cli/verbs.txt")));
    }

    #[test]
    fn test_merge_configs_empty_verbs_path() {
        let mut base = OcmConfig::default();
        base.verbs.path = Some(PathBuf::from("/base/verbs.txt"));

        let mut overlay = OcmConfig::default();
        overlay.verbs.path = Some(PathBuf::new());

        let merged = merge_configs(base, overlay);
        assert_eq!(merged.verbs.path, Some(PathBuf::from("/base/verbs.txt")));
    }
}
