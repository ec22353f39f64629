//! Signal types and their human-readable descriptions.

use serde::Serialize;
use std::fmt;

/// How serious a signal is on its own. Display-only; the verdict policy works
/// on the rule flags and the signal count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::High => "high",
        };
        f.write_str(s)
    }
}

/// Which indicator fired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    InsecureProtocol,
    ShortenedUrl,
    SuspiciousKeyword { keyword: String },
    Typosquatting { trusted: String },
    UntrustedDomain,
    DigitsInDomain,
    HyphensInDomain,
    LongDomain,
    NonStandardCharacters,
    TrackingPathLength,
    TrackingSignature,
    LongUrlOnTrustedDomain,
    PathTraversal,
    PortalTampering,
    KnownMaliciousTestLink,
}

impl SignalKind {
    pub fn severity(&self) -> Severity {
        match self {
            SignalKind::InsecureProtocol
            | SignalKind::ShortenedUrl
            | SignalKind::Typosquatting { .. }
            | SignalKind::NonStandardCharacters
            | SignalKind::TrackingPathLength
            | SignalKind::TrackingSignature
            | SignalKind::PathTraversal
            | SignalKind::PortalTampering
            | SignalKind::KnownMaliciousTestLink => Severity::High,
            SignalKind::SuspiciousKeyword { .. }
            | SignalKind::UntrustedDomain
            | SignalKind::DigitsInDomain
            | SignalKind::HyphensInDomain
            | SignalKind::LongDomain => Severity::Warning,
            SignalKind::LongUrlOnTrustedDomain => Severity::Info,
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalKind::InsecureProtocol => {
                write!(f, "unencrypted connection (HTTP); traffic can be intercepted")
            }
            SignalKind::ShortenedUrl => write!(
                f,
                "shortened link; the final destination cannot be verified"
            ),
            SignalKind::SuspiciousKeyword { keyword } => {
                write!(f, "link contains a suspicious keyword: \"{}\"", keyword)
            }
            SignalKind::Typosquatting { trusted } => write!(
                f,
                "domain differs by one character from the well-known domain {} (possible typosquatting)",
                trusted
            ),
            SignalKind::UntrustedDomain => {
                write!(f, "domain is not in the trusted list; proceed with caution")
            }
            SignalKind::DigitsInDomain => write!(f, "unknown domain contains digits in its name"),
            SignalKind::HyphensInDomain => write!(f, "unknown domain contains hyphens (-)"),
            SignalKind::LongDomain => write!(f, "unknown domain is unusually long"),
            SignalKind::NonStandardCharacters => write!(
                f,
                "domain contains non-standard characters (possible Punycode/Unicode deception)"
            ),
            SignalKind::TrackingPathLength => write!(
                f,
                "Google click-tracking path has an abnormal length (signature added or removed)"
            ),
            SignalKind::TrackingSignature => write!(
                f,
                "Google click-tracking path has unusual sequences or is missing its &sig= signature"
            ),
            SignalKind::LongUrlOnTrustedDomain => write!(
                f,
                "trusted domain but unusually long link; may carry tracking or untrusted content"
            ),
            SignalKind::PathTraversal => write!(
                f,
                "path contains traversal sequences (// or ../)"
            ),
            SignalKind::PortalTampering => write!(
                f,
                "path of a known government portal (Absher) appears tampered with"
            ),
            SignalKind::KnownMaliciousTestLink => write!(
                f,
                "link recognised as a malware test page (EICAR/WICAR)"
            ),
        }
    }
}

/// One detected risk indicator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Signal {
    pub kind: SignalKind,
    pub severity: Severity,
    pub message: String,
}

impl Signal {
    pub fn new(kind: SignalKind) -> Self {
        Self {
            severity: kind.severity(),
            message: kind.to_string(),
            kind,
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}
