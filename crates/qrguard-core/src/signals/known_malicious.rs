//! Rule 8: the public WICAR malware test site.

use super::{RuleOutcome, ScanContext, SignalKind};

const TEST_SITE: &str = "wicar.org";

pub fn check(ctx: &ScanContext<'_>) -> RuleOutcome {
    if ctx.url.full_url.contains(TEST_SITE) {
        RuleOutcome::danger(SignalKind::KnownMaliciousTestLink)
    } else {
        RuleOutcome::none()
    }
}
