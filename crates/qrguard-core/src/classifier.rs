//! Classifier facade: parse, run the signal engine, apply the verdict policy.

use crate::config::QrGuardConfig;
use crate::error::ParseError;
use crate::reference::ReferenceData;
use crate::signals;
use crate::url_model::UrlDescriptor;
use crate::verdict::{Verdict, VerdictPolicy};

/// Owns the read-only reference data and policy; cheap to share across threads.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    reference: ReferenceData,
    policy: VerdictPolicy,
}

impl Classifier {
    pub fn new(reference: ReferenceData, policy: VerdictPolicy) -> Self {
        Self { reference, policy }
    }

    /// Built-in lists extended with the configured extras.
    pub fn from_config(cfg: &QrGuardConfig) -> Self {
        let mut reference = ReferenceData::default();
        reference
            .trusted
            .extend(cfg.extra_trusted_domains.iter().map(String::as_str));
        reference.add_shorteners(cfg.extra_shorteners.iter().map(String::as_str));
        reference.add_keywords(cfg.extra_keywords.iter().map(String::as_str));
        if let Some(thresholds) = cfg.thresholds {
            reference.thresholds = thresholds;
        }
        Self::new(reference, cfg.policy.unwrap_or_default())
    }

    pub fn with_policy(mut self, policy: VerdictPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn policy(&self) -> VerdictPolicy {
        self.policy
    }

    /// Classifies one raw URL. Malformed input is the only error.
    pub fn classify(&self, raw: &str) -> Result<Verdict, ParseError> {
        let descriptor = UrlDescriptor::parse(raw, &self.reference)?;
        let report = signals::evaluate(&descriptor, &self.reference);
        let verdict = Verdict::new(descriptor, report, self.policy);
        tracing::debug!(
            "scanned {} -> {} ({} signal(s))",
            verdict.descriptor.domain,
            verdict.level,
            verdict.signals.len()
        );
        Ok(verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::Thresholds;
    use crate::signals::SignalKind;
    use crate::verdict::RiskLevel;

    #[test]
    fn config_extras_are_applied() {
        let cfg = QrGuardConfig {
            extra_trusted_domains: vec!["Example.org".to_string()],
            extra_keywords: vec!["wallet-drain".to_string()],
            ..QrGuardConfig::default()
        };
        let classifier = Classifier::from_config(&cfg);

        let v = classifier.classify("https://example.org/").unwrap();
        assert_eq!(v.level, RiskLevel::Safe);

        let v = classifier
            .classify("https://example.org/wallet-drain")
            .unwrap();
        assert_eq!(
            v.signals[0].kind,
            SignalKind::SuspiciousKeyword {
                keyword: "wallet-drain".to_string()
            }
        );
    }

    #[test]
    fn flagged_only_policy_allows_informational_notes() {
        let raw = format!("https://github.com/{}", "a".repeat(70));
        let default = Classifier::default().classify(&raw).unwrap();
        assert_eq!(default.level, RiskLevel::Danger);
        assert!(!default.flagged);

        let lenient = Classifier::default()
            .with_policy(VerdictPolicy::FlaggedOnly)
            .classify(&raw)
            .unwrap();
        assert_eq!(lenient.level, RiskLevel::Safe);
        assert_eq!(lenient.signals.len(), 1);
    }

    #[test]
    fn flagged_only_policy_keeps_risky_trusted_links_dangerous() {
        let lenient = Classifier::default().with_policy(VerdictPolicy::FlaggedOnly);
        for raw in [
            "http://paypal.com/login-verify/scam",
            "http://google.com/",
            "https://microsoft.com/",
        ] {
            let v = lenient.classify(raw).unwrap();
            assert!(!v.flagged, "{raw}");
            assert_eq!(v.level, RiskLevel::Danger, "{raw}");
        }
    }

    #[test]
    fn custom_thresholds() {
        let cfg = QrGuardConfig {
            thresholds: Some(Thresholds {
                max_domain_length: 10,
                ..Thresholds::default()
            }),
            ..QrGuardConfig::default()
        };
        let v = Classifier::from_config(&cfg)
            .classify("https://longdomainname.org/")
            .unwrap();
        assert!(v.signals.iter().any(|s| s.kind == SignalKind::LongDomain));
    }

    #[test]
    fn classifier_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Classifier>();
    }
}
