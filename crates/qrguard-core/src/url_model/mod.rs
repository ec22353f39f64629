//! URL modeling: turns a raw scan input into an immutable [`UrlDescriptor`].
//!
//! Bare inputs such as `example.com/login` are parsed as `https://` URLs; the
//! descriptor still reports the scheme that actually resulted from parsing.

mod domain;

pub use domain::{clean_domain, name_before_last_dot, name_without_tld};

use serde::Serialize;

use crate::error::ParseError;
use crate::reference::ReferenceData;

/// Scheme prefix added to inputs that do not start with `http`.
const FALLBACK_SCHEME: &str = "https://";

/// Structured view of one scanned URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlDescriptor {
    /// Raw input, unmodified.
    pub full_url: String,
    /// Lowercase scheme without the trailing `:`.
    pub protocol: String,
    /// Host as produced by the parser; empty for host-less URLs.
    pub domain: String,
    /// Path, then `?query` and `#fragment` when present.
    pub path: String,
    /// Character count of `full_url`.
    pub length: usize,
    pub is_https: bool,
    pub is_shortened: bool,
}

impl UrlDescriptor {
    /// Parses `raw`, consulting `reference` for the shortener patterns.
    pub fn parse(raw: &str, reference: &ReferenceData) -> Result<Self, ParseError> {
        let candidate = if raw.starts_with("http") {
            raw.to_string()
        } else {
            format!("{FALLBACK_SCHEME}{raw}")
        };

        let parsed = url::Url::parse(&candidate).map_err(|e| {
            tracing::debug!("rejecting {:?}: {}", raw, e);
            ParseError::new(raw)
        })?;

        let protocol = parsed.scheme().to_lowercase();
        let domain = parsed.host_str().unwrap_or_default().to_string();

        Ok(Self {
            full_url: raw.to_string(),
            is_https: protocol == "https",
            protocol,
            domain,
            path: path_query_fragment(&parsed),
            length: raw.chars().count(),
            is_shortened: reference.is_shortened(raw),
        })
    }
}

/// Concatenates path, `?query` and `#fragment`, leaving out empty query/fragment
/// parts the way a browser's `search` and `hash` do.
fn path_query_fragment(parsed: &url::Url) -> String {
    let mut out = parsed.path().to_string();
    if let Some(q) = parsed.query().filter(|q| !q.is_empty()) {
        out.push('?');
        out.push_str(q);
    }
    if let Some(f) = parsed.fragment().filter(|f| !f.is_empty()) {
        out.push('#');
        out.push_str(f);
    }
    out
}
