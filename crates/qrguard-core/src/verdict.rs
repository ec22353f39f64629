//! Verdict policy: folds the signal report into a final risk level.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::signals::{Severity, Signal, SignalReport};
use crate::url_model::UrlDescriptor;

/// Final classification of one URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Safe,
    Danger,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Safe => f.write_str("safe"),
            RiskLevel::Danger => f.write_str("danger"),
        }
    }
}

/// How the signal report turns into a risk level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VerdictPolicy {
    /// Danger when any rule flagged danger or any signal was emitted at all.
    /// Informational notes therefore also produce danger.
    #[default]
    AnySignal,
    /// Danger when a rule explicitly flagged danger or emitted anything above
    /// [`Severity::Info`]; informational notes alone stay safe.
    FlaggedOnly,
}

impl VerdictPolicy {
    pub fn decide(self, report: &SignalReport) -> RiskLevel {
        let danger = match self {
            VerdictPolicy::AnySignal => report.flagged || !report.signals.is_empty(),
            VerdictPolicy::FlaggedOnly => {
                report.flagged || report.signals.iter().any(|s| s.severity > Severity::Info)
            }
        };
        if danger {
            RiskLevel::Danger
        } else {
            RiskLevel::Safe
        }
    }
}

impl fmt::Display for VerdictPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerdictPolicy::AnySignal => f.write_str("any-signal"),
            VerdictPolicy::FlaggedOnly => f.write_str("flagged-only"),
        }
    }
}

impl std::str::FromStr for VerdictPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "any-signal" => Ok(VerdictPolicy::AnySignal),
            "flagged-only" => Ok(VerdictPolicy::FlaggedOnly),
            other => Err(format!(
                "unknown verdict policy {other:?} (expected any-signal or flagged-only)"
            )),
        }
    }
}

/// Result of one scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub level: RiskLevel,
    pub signals: Vec<Signal>,
    pub descriptor: UrlDescriptor,
    /// Some rule explicitly flagged danger (as opposed to danger by signal count).
    pub flagged: bool,
}

impl Verdict {
    pub fn new(descriptor: UrlDescriptor, report: SignalReport, policy: VerdictPolicy) -> Self {
        Self {
            level: policy.decide(&report),
            flagged: report.flagged,
            signals: report.signals,
            descriptor,
        }
    }

    pub fn is_safe(&self) -> bool {
        self.level == RiskLevel::Safe
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::SignalKind;

    fn report(kinds: &[SignalKind], flagged: bool) -> SignalReport {
        SignalReport {
            signals: kinds.iter().cloned().map(Signal::new).collect(),
            flagged,
        }
    }

    #[test]
    fn empty_report_is_safe_under_both_policies() {
        let r = report(&[], false);
        assert_eq!(VerdictPolicy::AnySignal.decide(&r), RiskLevel::Safe);
        assert_eq!(VerdictPolicy::FlaggedOnly.decide(&r), RiskLevel::Safe);
    }

    #[test]
    fn any_signal_counts_informational_notes() {
        let r = report(&[SignalKind::LongUrlOnTrustedDomain], false);
        assert_eq!(VerdictPolicy::AnySignal.decide(&r), RiskLevel::Danger);
        assert_eq!(VerdictPolicy::FlaggedOnly.decide(&r), RiskLevel::Safe);
    }

    #[test]
    fn flagged_only_still_counts_unflagged_warnings() {
        let r = report(
            &[
                SignalKind::InsecureProtocol,
                SignalKind::SuspiciousKeyword {
                    keyword: "scam".to_string(),
                },
            ],
            false,
        );
        assert_eq!(VerdictPolicy::FlaggedOnly.decide(&r), RiskLevel::Danger);
        let r = report(&[SignalKind::ShortenedUrl], false);
        assert_eq!(VerdictPolicy::FlaggedOnly.decide(&r), RiskLevel::Danger);
    }

    #[test]
    fn flagged_report_is_danger() {
        let r = report(&[SignalKind::KnownMaliciousTestLink], true);
        assert_eq!(VerdictPolicy::AnySignal.decide(&r), RiskLevel::Danger);
        assert_eq!(VerdictPolicy::FlaggedOnly.decide(&r), RiskLevel::Danger);
    }

    #[test]
    fn policy_names_parse() {
        assert_eq!(
            "any-signal".parse::<VerdictPolicy>().unwrap(),
            VerdictPolicy::AnySignal
        );
        assert_eq!(
            "flagged-only".parse::<VerdictPolicy>().unwrap(),
            VerdictPolicy::FlaggedOnly
        );
        assert!("strict".parse::<VerdictPolicy>().is_err());
        assert_eq!(VerdictPolicy::FlaggedOnly.to_string(), "flagged-only");
    }
}
