//! `qrguard batch <path>` – classify URLs read line by line.

use anyhow::{Context, Result};
use qrguard_core::{Classifier, RiskLevel};
use std::fs::File;
use std::io::{self, BufRead, BufReader};

use crate::cli::render;

/// Totals printed at the end of a batch.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchTotals {
    pub safe: usize,
    pub danger: usize,
    pub invalid: usize,
}

/// Non-empty, non-comment lines, trimmed.
pub fn urls_from_reader(reader: impl BufRead) -> Result<Vec<String>> {
    let mut urls = Vec::new();
    for line in reader.lines() {
        let line = line.context("read batch input")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        urls.push(line.to_string());
    }
    Ok(urls)
}

fn open_input(path: &str) -> Result<Box<dyn BufRead>> {
    if path == "-" {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    let file = File::open(path).with_context(|| format!("open {path}"))?;
    Ok(Box::new(BufReader::new(file)))
}

pub fn run_batch(classifier: &Classifier, path: &str, json: bool) -> Result<BatchTotals> {
    let urls = urls_from_reader(open_input(path)?)?;
    tracing::info!("batch: {} url(s) from {}", urls.len(), path);

    let mut totals = BatchTotals::default();
    if !json {
        println!("{}", render::summary_header());
    }

    for url in &urls {
        match classifier.classify(url) {
            Ok(verdict) => {
                match verdict.level {
                    RiskLevel::Safe => totals.safe += 1,
                    RiskLevel::Danger => totals.danger += 1,
                }
                if json {
                    println!("{}", serde_json::to_string(&verdict)?);
                } else {
                    println!("{}", render::summary_row(&verdict));
                }
            }
            Err(e) => {
                totals.invalid += 1;
                tracing::warn!("batch: {}: {:?}", e, url);
                if json {
                    let obj = serde_json::json!({ "url": url, "error": e.to_string() });
                    println!("{obj}");
                } else {
                    println!("{:<8} {:<8} {:?}", "invalid", "-", url);
                }
            }
        }
    }

    if !json {
        println!(
            "\n{} scanned: {} safe, {} danger, {} invalid",
            urls.len(),
            totals.safe,
            totals.danger,
            totals.invalid
        );
    }
    Ok(totals)
}
