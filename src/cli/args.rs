// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::builder::{FalseyValueParser, OsStringValueParser, TypedValueParser};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{OcmConfig, VerbList};

/// ocm - Opinionated commit message checker
///
/// Checks that a commit message has a short capitalized subject in
/// imperative mood, a blank line, and a wrapped body.
#[derive(Parser, Debug)]
#[command(name = "ocm")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Opinionated commit message checker", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to check if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Arguments of the default check command
    #[command(flatten)]
    pub check: CheckArgs,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Check a commit message (default command)
    Check(CheckArgs),

    /// Print the accepted imperative verbs
    Verbs(VerbsArgs),

    /// Write an example ocm.toml
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Where additional verbs come from.
#[derive(Args, Debug, Default, Clone)]
pub struct VerbSources {
    /// Additional verbs, delimited by newlines, commas or semicolons
    #[arg(long, env = "OCM_ADDITIONAL_VERBS", value_name = "VERBS")]
    pub additional_verbs: Option<String>,

    /// File with additional verbs in the same format (empty means none)
    #[arg(
        long,
        env = "OCM_PATH_TO_ADDITIONAL_VERBS",
        value_name = "PATH",
        value_parser = OsStringValueParser::new().map(PathBuf::from)
    )]
    pub path_to_additional_verbs: Option<PathBuf>,
}

/// Arguments for the check command.
#[derive(Args, Debug, Default, Clone)]
pub struct CheckArgs {
    /// The commit message
    #[arg(short, long, env = "OCM_MESSAGE", conflicts_with = "file")]
    pub message: Option<String>,

    /// Read the commit message from a file ("-" for stdin), e.g. from a commit-msg hook
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub verbs: VerbSources,

    /// Accept a message that consists of the subject alone
    #[arg(long, env = "OCM_ALLOW_ONE_LINERS", value_parser = FalseyValueParser::new())]
    pub allow_one_liners: bool,

    /// Require a "Signed-off-by: Name <email>" line in the body
    #[arg(long, env = "OCM_ENFORCE_SIGN_OFF", value_parser = FalseyValueParser::new())]
    pub enforce_sign_off: bool,

    /// Report violations but exit successfully
    #[arg(long, env = "OCM_DONT_THROW", value_parser = FalseyValueParser::new())]
    pub dont_throw: bool,
}

/// Arguments for the verbs command.
#[derive(Args, Debug, Default, Clone)]
pub struct VerbsArgs {
    #[command(flatten)]
    pub verbs: VerbSources,
}

/// Arguments for the init command.
#[derive(Args, Debug, Default, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// Get the effective command, defaulting to Check with the top-level
    /// arguments if none specified.
    pub fn effective_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Check(self.check.clone()))
    }
}

impl VerbSources {
    /// Configuration holding only what was given on the command line.
    pub fn overlay(&self) -> OcmConfig {
        let mut config = OcmConfig::default();
        if let Some(ref verbs) = self.additional_verbs {
            config.verbs.additional = VerbList::Delimited(verbs.clone());
        }
        config.verbs.path = self
            .path_to_additional_verbs
            .clone()
            .filter(|p| !p.as_os_str().is_empty());
        config
    }
}

impl CheckArgs {
    /// Configuration holding only what was given on the command line.
    pub fn overlay(&self) -> OcmConfig {
        let mut config = self.verbs.overlay();
        config.rules.allow_one_liners = self.allow_one_liners;
        config.rules.enforce_sign_off = self.enforce_sign_off;
        config.output.dont_throw = self.dont_throw;
        config
    }
}
