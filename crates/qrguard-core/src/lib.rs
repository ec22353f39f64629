//! Offline heuristic URL risk classifier.
//!
//! A scan parses the raw input into a [`UrlDescriptor`], runs the lexical rule
//! pipeline in [`signals`] and folds the result into a [`Verdict`]. Nothing
//! here touches the network.

pub mod config;
pub mod logging;

pub mod classifier;
pub mod distance;
pub mod error;
pub mod reference;
pub mod signals;
pub mod url_model;
pub mod verdict;

pub use classifier::Classifier;
pub use distance::edit_distance;
pub use error::ParseError;
pub use reference::{ReferenceData, Thresholds, TrustedDomainSet};
pub use signals::{Severity, Signal, SignalKind};
pub use url_model::UrlDescriptor;
pub use verdict::{RiskLevel, Verdict, VerdictPolicy};

/// Classifies `raw` with the built-in reference data and the default policy.
pub fn classify(raw: &str) -> Result<Verdict, ParseError> {
    Classifier::default().classify(raw)
}
