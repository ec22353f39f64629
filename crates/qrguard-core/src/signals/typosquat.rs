//! Rule 4: names one edit away from a trusted domain.
//!
//! The scan stops at the first trusted domain (in set order) whose name is at
//! distance exactly one; later rules check whether this fired.

use super::{RuleOutcome, ScanContext, SignalKind};
use crate::distance::edit_distance;
use crate::url_model::name_without_tld;

pub fn check(ctx: &ScanContext<'_>) -> RuleOutcome {
    let name = name_without_tld(&ctx.clean_domain);

    ctx.reference
        .trusted
        .iter()
        .find(|trusted| edit_distance(name, name_without_tld(trusted)) == 1)
        .map(|trusted| {
            tracing::debug!("{} looks like trusted domain {}", ctx.clean_domain, trusted);
            RuleOutcome::danger(SignalKind::Typosquatting {
                trusted: trusted.to_string(),
            })
        })
        .unwrap_or_default()
}
