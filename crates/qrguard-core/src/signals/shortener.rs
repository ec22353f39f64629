//! Rule 2: known URL shorteners.

use super::{RuleOutcome, ScanContext, SignalKind};

pub fn check(ctx: &ScanContext<'_>) -> RuleOutcome {
    if ctx.url.is_shortened {
        RuleOutcome::note(SignalKind::ShortenedUrl)
    } else {
        RuleOutcome::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::run_rule;

    #[test]
    fn shortener_fires() {
        let out = run_rule("https://bit.ly/abc123", check);
        assert_eq!(out.signals[0].kind, SignalKind::ShortenedUrl);
        assert!(!out.flagged);
    }

    #[test]
    fn regular_domain_is_quiet() {
        assert!(run_rule("https://github.com/rust-lang", check).is_empty());
    }
}
