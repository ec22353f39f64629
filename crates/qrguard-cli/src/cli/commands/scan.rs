//! `qrguard scan <url>...` – classify URLs given on the command line.

use anyhow::{Context, Result};
use qrguard_core::{Classifier, RiskLevel};

use crate::cli::render;

/// Prints a report per URL. Returns whether any URL was classified as danger.
/// A malformed URL aborts the command.
pub fn run_scan(classifier: &Classifier, urls: &[String], json: bool) -> Result<bool> {
    let mut any_danger = false;

    for (i, raw) in urls.iter().enumerate() {
        let url = raw.trim();
        let verdict = classifier
            .classify(url)
            .with_context(|| format!("cannot scan {url:?}"))?;
        any_danger |= verdict.level == RiskLevel::Danger;

        if json {
            println!("{}", serde_json::to_string(&verdict)?);
        } else {
            if i > 0 {
                println!();
            }
            print!("{}", render::verdict_report(&verdict));
        }
    }

    Ok(any_danger)
}
