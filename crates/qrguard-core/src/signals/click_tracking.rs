//! Rule 6: structural checks on Google ad click-tracking redirects (`/aclk?`).

use super::{RuleOutcome, ScanContext, SignalKind};

const TRACKING_HOST: &str = "google.com";
const TRACKING_MARKER: &str = "/aclk?";
const SIGNATURE_PARAM: &str = "&sig=";

pub fn check(ctx: &ScanContext<'_>) -> RuleOutcome {
    if !ctx.domain.contains(TRACKING_HOST) || !ctx.url.full_url.contains(TRACKING_MARKER) {
        return RuleOutcome::none();
    }

    let path = ctx.url.path.as_str();
    let thresholds = &ctx.reference.thresholds;
    let mut out = RuleOutcome::none();

    let len = path.chars().count();
    if len < thresholds.tracking_path_min || len > thresholds.tracking_path_max {
        out.push(SignalKind::TrackingPathLength);
    }
    if path.contains("//") || path.contains("..") || !path.contains(SIGNATURE_PARAM) {
        out.push(SignalKind::TrackingSignature);
    }

    out.flagged = !out.signals.is_empty();
    out
}
