//! Rule 7: path anomalies on exactly-trusted domains.
//!
//! A long URL alone is informational; traversal sequences and a tampered
//! government portal path flag danger.

use super::{RuleOutcome, ScanContext, SignalKind};
use crate::distance::edit_distance;

const PORTAL_DOMAIN: &str = "absher.sa";
const PORTAL_PATH: &str = "/wps/portal/business";
/// Only this many leading characters of the path are compared.
const PORTAL_PREFIX_CHARS: usize = 20;

pub fn check(ctx: &ScanContext<'_>) -> RuleOutcome {
    let path = ctx.url.path.as_str();
    if !ctx.trusted_match || path == "/" {
        return RuleOutcome::none();
    }

    let raw = ctx.url.full_url.as_str();
    let mut out = RuleOutcome::none();

    if ctx.url.length > ctx.reference.thresholds.long_url_length
        && !raw.contains("watch?v=")
        && !raw.contains("/aclk?")
    {
        out.push(SignalKind::LongUrlOnTrustedDomain);
    }

    if path.contains("../") || path.contains("//") {
        out.push(SignalKind::PathTraversal);
        out.flagged = true;
    }

    if ctx.clean_domain.contains(PORTAL_DOMAIN) {
        let seen = prefix(path, PORTAL_PREFIX_CHARS);
        let expected = prefix(PORTAL_PATH, PORTAL_PREFIX_CHARS);
        if edit_distance(seen, expected) > ctx.reference.thresholds.portal_path_tolerance {
            out.push(SignalKind::PortalTampering);
            out.flagged = true;
        }
    }

    out
}

/// First `n` characters of `s`.
fn prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
