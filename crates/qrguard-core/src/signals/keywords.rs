//! Rule 3: suspicious keywords anywhere in the raw URL.

use super::{RuleOutcome, ScanContext, SignalKind};

/// One signal per keyword found, in keyword-list order.
pub fn check(ctx: &ScanContext<'_>) -> RuleOutcome {
    let mut out = RuleOutcome::none();
    for keyword in &ctx.reference.keywords {
        if ctx.lower_url.contains(keyword.as_str()) {
            out.push(SignalKind::SuspiciousKeyword {
                keyword: keyword.clone(),
            });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::run_rule;

    fn keywords(raw: &str) -> Vec<String> {
        run_rule(raw, check)
            .signals
            .into_iter()
            .filter_map(|s| match s.kind {
                SignalKind::SuspiciousKeyword { keyword } => Some(keyword),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn matches_case_insensitively() {
        assert_eq!(keywords("https://example.org/SCAM"), vec!["scam"]);
    }

    #[test]
    fn one_signal_per_keyword_in_list_order() {
        assert_eq!(
            keywords("https://update-now.example.org/account-sync/login-verify"),
            vec!["login-verify", "update-now", "account-sync"]
        );
    }

    #[test]
    fn repeated_keyword_counts_once() {
        assert_eq!(keywords("https://scam.example.org/scam/scam"), vec!["scam"]);
    }

    #[test]
    fn clean_url_has_none() {
        assert!(keywords("https://github.com/rust-lang/rust").is_empty());
    }
}
