//! Rule 1: plain HTTP.

use super::{RuleOutcome, ScanContext, SignalKind};

pub fn check(ctx: &ScanContext<'_>) -> RuleOutcome {
    if ctx.url.protocol == "http" {
        RuleOutcome::note(SignalKind::InsecureProtocol)
    } else {
        RuleOutcome::none()
    }
}
