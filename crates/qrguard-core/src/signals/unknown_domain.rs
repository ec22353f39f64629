//! Rule 5: heuristics for domains outside the trusted list.

use super::{RuleOutcome, ScanContext, SignalKind};
use crate::url_model::name_before_last_dot;

/// Characters a plain (non-IDN) hostname is made of.
fn is_standard_host_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '.'
}

/// Skips trusted domains. Otherwise always reports the domain as untrusted,
/// adds the digit/hyphen/length checks when typosquatting has not already
/// fired, and always checks for non-standard characters.
pub fn check(ctx: &ScanContext<'_>, typosquat_fired: bool) -> RuleOutcome {
    if ctx.trusted_match {
        return RuleOutcome::none();
    }

    let mut out = RuleOutcome::danger(SignalKind::UntrustedDomain);
    let domain = ctx.clean_domain.as_str();

    if !typosquat_fired {
        let name = name_before_last_dot(domain);
        if name.chars().any(|c| c.is_ascii_digit()) {
            out.push(SignalKind::DigitsInDomain);
        }
        if name.contains('-') {
            out.push(SignalKind::HyphensInDomain);
        }
        if domain.chars().count() > ctx.reference.thresholds.max_domain_length {
            out.push(SignalKind::LongDomain);
        }
    }

    if !domain.chars().all(is_standard_host_char) {
        out.push(SignalKind::NonStandardCharacters);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::run_rule;

    fn kinds(raw: &str, typosquat_fired: bool) -> Vec<SignalKind> {
        run_rule(raw, |ctx| check(ctx, typosquat_fired))
            .signals
            .into_iter()
            .map(|s| s.kind)
            .collect()
    }

    #[test]
    fn trusted_domain_is_skipped() {
        assert!(kinds("https://www.github.com/x", false).is_empty());
        assert!(kinds("https://absher.sa", false).is_empty());
    }

    #[test]
    fn subdomain_of_trusted_is_not_trusted() {
        assert_eq!(
            kinds("https://mail.google.com", false),
            vec![SignalKind::UntrustedDomain]
        );
    }

    #[test]
    fn plain_unknown_domain() {
        let out = run_rule("https://example.org/", |ctx| check(ctx, false));
        assert!(out.flagged);
        assert_eq!(out.signals.len(), 1);
        assert_eq!(out.signals[0].kind, SignalKind::UntrustedDomain);
    }

    #[test]
    fn digits_hyphens_and_length() {
        assert_eq!(
            kinds(
                "https://secure-login-portal-2024-accounts-center.com",
                false
            ),
            vec![
                SignalKind::UntrustedDomain,
                SignalKind::DigitsInDomain,
                SignalKind::HyphensInDomain,
                SignalKind::LongDomain,
            ]
        );
    }

    #[test]
    fn length_boundary() {
        // 35 characters: not reported.
        let at_limit = format!("https://{}.com", "a".repeat(31));
        assert_eq!(kinds(&at_limit, false), vec![SignalKind::UntrustedDomain]);
        let over = format!("https://{}.com", "a".repeat(32));
        assert_eq!(
            kinds(&over, false),
            vec![SignalKind::UntrustedDomain, SignalKind::LongDomain]
        );
    }

    #[test]
    fn digits_in_tld_only_do_not_count() {
        assert_eq!(
            kinds("https://example.c0m", false),
            vec![SignalKind::UntrustedDomain]
        );
    }

    #[test]
    fn typosquat_suppresses_character_checks() {
        assert_eq!(
            kinds("https://pay-pa1.com", true),
            vec![SignalKind::UntrustedDomain]
        );
    }

    #[test]
    fn non_standard_characters_always_checked() {
        assert_eq!(
            kinds("https://my_site.example.org", true),
            vec![
                SignalKind::UntrustedDomain,
                SignalKind::NonStandardCharacters
            ]
        );
        assert_eq!(
            kinds("http://[::1]/", false),
            vec![
                SignalKind::UntrustedDomain,
                SignalKind::NonStandardCharacters
            ]
        );
    }

    #[test]
    fn host_without_dot_has_empty_name() {
        assert_eq!(
            kinds("http://host-1/", false),
            vec![SignalKind::UntrustedDomain]
        );
    }
}
