//! Signal engine: a fixed-order pipeline of independent lexical rules.
//!
//! Each rule is a pure function of a [`ScanContext`] and returns a
//! [`RuleOutcome`]: the signals it emitted and whether it explicitly marked the
//! URL as dangerous. [`evaluate`] runs the rules in order and folds their
//! outcomes into a [`SignalReport`]; the verdict policy decides from there.

mod click_tracking;
mod keywords;
mod known_malicious;
mod protocol;
mod shortener;
mod trusted_path;
mod typosquat;
mod unknown_domain;

mod kind;

pub use kind::{Severity, Signal, SignalKind};

use crate::reference::ReferenceData;
use crate::url_model::{clean_domain, UrlDescriptor};

/// Per-scan view shared by all rules. Derived once from the descriptor.
#[derive(Debug)]
pub struct ScanContext<'a> {
    pub url: &'a UrlDescriptor,
    pub reference: &'a ReferenceData,
    /// Lowercased host.
    pub domain: String,
    /// Lowercased host without a leading `www.`.
    pub clean_domain: String,
    /// `clean_domain` is exactly one of the trusted domains.
    pub trusted_match: bool,
    /// Lowercased raw input.
    pub lower_url: String,
}

impl<'a> ScanContext<'a> {
    pub fn new(url: &'a UrlDescriptor, reference: &'a ReferenceData) -> Self {
        let clean = clean_domain(&url.domain);
        Self {
            trusted_match: reference.trusted.contains(&clean),
            domain: url.domain.to_lowercase(),
            clean_domain: clean,
            lower_url: url.full_url.to_lowercase(),
            url,
            reference,
        }
    }
}

/// What a single rule produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleOutcome {
    pub signals: Vec<Signal>,
    /// The rule explicitly marked the URL as dangerous.
    pub flagged: bool,
}

impl RuleOutcome {
    pub fn none() -> Self {
        Self::default()
    }

    /// A single signal that also flags danger.
    pub fn danger(kind: SignalKind) -> Self {
        Self {
            signals: vec![Signal::new(kind)],
            flagged: true,
        }
    }

    /// A single signal without an explicit danger flag.
    pub fn note(kind: SignalKind) -> Self {
        Self {
            signals: vec![Signal::new(kind)],
            flagged: false,
        }
    }

    pub fn push(&mut self, kind: SignalKind) {
        self.signals.push(Signal::new(kind));
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty() && !self.flagged
    }
}

/// Accumulated result of the whole pipeline for one URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignalReport {
    /// Signals in emission order.
    pub signals: Vec<Signal>,
    /// At least one rule explicitly flagged danger.
    pub flagged: bool,
}

impl SignalReport {
    fn absorb(&mut self, rule: &str, outcome: RuleOutcome) {
        if !outcome.is_empty() {
            tracing::trace!(
                "rule {} fired: {} signal(s), flagged={}",
                rule,
                outcome.signals.len(),
                outcome.flagged
            );
        }
        self.flagged |= outcome.flagged;
        self.signals.extend(outcome.signals);
    }
}

/// Runs every rule, in order, against `url`.
pub fn evaluate(url: &UrlDescriptor, reference: &ReferenceData) -> SignalReport {
    let ctx = ScanContext::new(url, reference);
    let mut report = SignalReport::default();

    report.absorb("insecure-protocol", protocol::check(&ctx));
    report.absorb("shortened-url", shortener::check(&ctx));
    report.absorb("suspicious-keywords", keywords::check(&ctx));

    let typo = typosquat::check(&ctx);
    let typosquat_fired = typo.flagged;
    report.absorb("typosquatting", typo);

    report.absorb(
        "unknown-domain",
        unknown_domain::check(&ctx, typosquat_fired),
    );
    report.absorb("click-tracking", click_tracking::check(&ctx));
    report.absorb("trusted-path", trusted_path::check(&ctx));
    report.absorb("known-malicious", known_malicious::check(&ctx));

    report
}

#[cfg(test)]
pub(crate) fn run_rule(raw: &str, rule: impl Fn(&ScanContext<'_>) -> RuleOutcome) -> RuleOutcome {
    let reference = ReferenceData::default();
    let url = UrlDescriptor::parse(raw, &reference).expect("test URL parses");
    let ctx = ScanContext::new(&url, &reference);
    rule(&ctx)
}
