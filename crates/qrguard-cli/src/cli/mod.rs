//! CLI for the qrguard URL risk classifier.

mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use qrguard_core::config::{self, QrGuardConfig};
use qrguard_core::{Classifier, VerdictPolicy};
use std::path::{Path, PathBuf};

use commands::{run_batch, run_completions, run_distance, run_man, run_scan, run_trusted};

/// Exit status when `--fail-on-danger` is set and a URL was classified as danger.
pub const EXIT_DANGER: i32 = 2;

/// Top-level CLI for qrguard.
#[derive(Debug, Parser)]
#[command(name = "qrguard")]
#[command(about = "qrguard: offline heuristic URL risk classifier", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/qrguard/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the verdict policy (any-signal or flagged-only).
    #[arg(long, global = true, value_name = "POLICY")]
    pub policy: Option<VerdictPolicy>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Classify one or more URLs and print a report for each.
    Scan {
        /// URLs (or bare domains) to classify.
        #[arg(required = true)]
        urls: Vec<String>,

        /// Print one JSON object per URL instead of a text report.
        #[arg(long)]
        json: bool,

        /// Exit with status 2 if any URL is classified as danger.
        #[arg(long)]
        fail_on_danger: bool,
    },

    /// Classify URLs read line by line from a file ("-" for stdin).
    Batch {
        /// Input file with one URL per line; blank lines and '#' comments are skipped.
        path: String,

        /// Print one JSON object per line instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// List the trusted domains in the order the typosquatting check uses.
    Trusted,

    /// Print the edit distance between two strings.
    Distance {
        a: String,
        b: String,
    },

    /// Generate shell completions on stdout.
    Completions {
        /// Target shell.
        shell: clap_complete::Shell,
    },

    /// Print the man page (roff) on stdout.
    Man,
}

impl CliCommand {
    /// Parses the process arguments and runs the command; returns the exit status.
    pub fn run_from_args() -> Result<i32> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Scan {
                urls,
                json,
                fail_on_danger,
            } => {
                let classifier = build_classifier(cli.config.as_deref(), cli.policy)?;
                let any_danger = run_scan(&classifier, &urls, json)?;
                if fail_on_danger && any_danger {
                    return Ok(EXIT_DANGER);
                }
            }
            CliCommand::Batch { path, json } => {
                let classifier = build_classifier(cli.config.as_deref(), cli.policy)?;
                run_batch(&classifier, &path, json)?;
            }
            CliCommand::Trusted => {
                let classifier = build_classifier(cli.config.as_deref(), cli.policy)?;
                run_trusted(&classifier)?;
            }
            CliCommand::Distance { a, b } => run_distance(&a, &b)?,
            CliCommand::Completions { shell } => run_completions(shell)?,
            CliCommand::Man => run_man()?,
        }

        Ok(0)
    }
}

/// Loads configuration (explicit path or the XDG default) and applies the policy override.
fn build_classifier(
    config_path: Option<&Path>,
    policy: Option<VerdictPolicy>,
) -> Result<Classifier> {
    let cfg = resolve_config(config_path, config::load_or_init)?;
    tracing::debug!("loaded config: {:?}", cfg);

    let classifier = Classifier::from_config(&cfg);
    Ok(match policy {
        Some(p) => classifier.with_policy(p),
        None => classifier,
    })
}

/// An explicit `--config` must load. The default location is best effort: the
/// classifier is offline and still runs on built-in data when it is unusable.
fn resolve_config(
    config_path: Option<&Path>,
    load_default: impl FnOnce() -> Result<QrGuardConfig>,
) -> Result<QrGuardConfig> {
    match config_path {
        Some(path) => config::load_from(path),
        None => Ok(load_default().unwrap_or_else(|e| {
            tracing::warn!("using built-in defaults, config unavailable: {:#}", e);
            QrGuardConfig::default()
        })),
    }
}

#[cfg(test)]
mod tests;
