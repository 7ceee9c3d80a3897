// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use std::io::{IsTerminal, Read};
use std::path::Path;

use crate::config::{merge_configs, validate_config, OcmConfig};
use crate::error::{ConfigError, OcmError, Result, ResultExt, ValidationError};
use crate::rules::RuleEngine;

use super::args::{CheckArgs, Cli, Commands, InitArgs, OutputFormat, VerbsArgs};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        OcmConfig::load_from(config_path)?
    } else {
        OcmConfig::load()?
    };

    if cli.no_color || !config.output.color {
        console::set_colors_enabled(false);
    }

    // Dispatch to the appropriate command handler
    match cli.effective_command() {
        Commands::Check(args) => run_check(&cli, config, args),
        Commands::Verbs(args) => run_verbs(config, args),
        Commands::Init(args) => run_init(args),
        Commands::Version => run_version(),
    }
}

/// Run the check command.
fn run_check(cli: &Cli, config: OcmConfig, args: CheckArgs) -> Result<()> {
    tracing::debug!("Running check command with args: {:?}", args);

    let config = merge_configs(config, args.overlay());
    validate_config(&config)?;

    // Configuration problems surface before the message is even read.
    let engine = RuleEngine::from_config(&config)?;
    let text = read_message(&args)?;

    let result = engine.validate_string(&text);
    match cli.format {
        Some(OutputFormat::Json) => println!("{}", result.render_json()),
        _ => println!("{}", result.render_text()),
    }

    if result.is_valid() {
        return Ok(());
    }

    if config.output.dont_throw {
        tracing::debug!(
            "{} issue(s) found, not failing because of --dont-throw",
            result.issue_count()
        );
        return Ok(());
    }

    Err(OcmError::Validation(ValidationError::Failed {
        count: result.issue_count(),
    }))
}

/// Get the message text from --message, --file or stdin.
fn read_message(args: &CheckArgs) -> Result<String> {
    if let Some(ref message) = args.message {
        return Ok(message.clone());
    }

    match args.file.as_deref() {
        Some(path) if path != Path::new("-") => {
            tracing::debug!("Reading commit message from {:?}", path);
            std::fs::read_to_string(path).map_err(|e| {
                OcmError::Config(ConfigError::MessageUnreadable {
                    source_name: path.display().to_string(),
                    message: e.to_string(),
                })
            })
        }
        Some(_) => read_stdin(),
        None if std::io::stdin().is_terminal() => {
            Err(OcmError::Config(ConfigError::MessageUnreadable {
                source_name: "stdin".to_string(),
                message: "no message given; use --message, --file or pipe it in".to_string(),
            }))
        }
        None => read_stdin(),
    }
}

fn read_stdin() -> Result<String> {
    tracing::debug!("Reading commit message from stdin");
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text).map_err(|e| {
        OcmError::Config(ConfigError::MessageUnreadable {
            source_name: "stdin".to_string(),
            message: e.to_string(),
        })
    })?;
    Ok(text)
}

/// Run the verbs command.
fn run_verbs(config: OcmConfig, args: VerbsArgs) -> Result<()> {
    tracing::debug!("Running verbs command with args: {:?}", args);

    let config = merge_configs(config, args.verbs.overlay());
    let engine = RuleEngine::from_config(&config)?;

    for verb in engine.lexicon().sorted() {
        println!("{}", verb);
    }

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("ocm {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    use crate::config::default::example_config;

    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = Path::new("ocm.toml");

    if config_path.exists() && !args.force {
        return Err(OcmError::Config(ConfigError::InvalidValue {
            key: "ocm.toml".to_string(),
            message: "Configuration file already exists. Use --force to overwrite.".to_string(),
        }));
    }

    std::fs::write(config_path, example_config()).context("Failed to write ocm.toml")?;

    println!("✓ Created ocm.toml");

    Ok(())
}
