//! Text rendering of verdicts for the terminal.

use qrguard_core::{RiskLevel, Verdict};
use std::fmt::Write;

/// Multi-line report for a single verdict.
pub fn verdict_report(v: &Verdict) -> String {
    let d = &v.descriptor;
    let mut out = String::new();

    let status = match v.level {
        RiskLevel::Safe => "SAFE",
        RiskLevel::Danger => "DANGER",
    };
    let _ = writeln!(out, "Status:    {status}");
    let _ = writeln!(out, "URL:       {}", d.full_url);
    let _ = writeln!(out, "Protocol:  {}", d.protocol.to_uppercase());
    let _ = writeln!(out, "Domain:    {}", d.domain);
    let _ = writeln!(out, "Length:    {} characters", d.length);
    let _ = writeln!(
        out,
        "Shortened: {}",
        if d.is_shortened { "yes (suspicious)" } else { "no" }
    );

    if v.signals.is_empty() {
        let _ = writeln!(out, "No risk indicators found.");
    } else {
        let _ = writeln!(out, "Risk indicators ({}):", v.signals.len());
        for (i, s) in v.signals.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", i + 1, s);
        }
    }
    out
}

/// One table row: level, signal count, raw URL.
pub fn summary_row(v: &Verdict) -> String {
    format!(
        "{:<8} {:<8} {}",
        v.level.to_string(),
        v.signals.len(),
        v.descriptor.full_url
    )
}

pub fn summary_header() -> String {
    format!("{:<8} {:<8} {}", "LEVEL", "SIGNALS", "URL")
}
