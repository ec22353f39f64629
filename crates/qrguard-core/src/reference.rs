//! Read-only reference data shared by every scan: trusted domains, shortener
//! patterns, suspicious keywords and numeric thresholds.

use serde::{Deserialize, Serialize};

/// Apex domains treated as pre-vetted. Order matters: the typosquatting scan
/// reports the first entry at distance one.
pub const BUILTIN_TRUSTED_DOMAINS: &[&str] = &[
    "google.com",
    "youtube.com",
    "facebook.com",
    "twitter.com",
    "instagram.com",
    "wikipedia.org",
    "tiktok.com",
    "apple.com",
    "samsung.com",
    "huawei.com",
    "amazon.sa",
    "amazon.com",
    "whatsapp.com",
    "github.com",
    "microsoft.com",
    "speedtest.net",
    "linkedin.com",
    "reddit.com",
    "cisco.com",
    "bing.com",
    "yahoo.com",
    "netflix.com",
    "paypal.com",
    "ebay.com",
    "adobe.com",
    "oracle.com",
    "ibm.com",
    "dell.com",
    "hp.com",
    "alipay.com",
    "tencent.com",
    "baidu.com",
    "weibo.com",
    "vk.com",
    "gov.sa",
    "edu.sa",
    "saudibanks.sa",
    "stc.com.sa",
    "mobily.com.sa",
    "zeker.sa",
    "absher.sa",
    "elm.sa",
    "mof.gov.sa",
    "cma.org.sa",
    "sama.gov.sa",
    "moe.gov.sa",
    "ksu.edu.sa",
    "tuwaiq.edu.sa",
    "mcit.gov.sa",
    "nic.gov.sa",
    "yesser.gov.sa",
    "saudi.gov.sa",
];

/// Substrings identifying URL-shortening redirectors (matched anywhere in the raw URL).
pub const BUILTIN_SHORTENERS: &[&str] = &[
    "bit.ly", "t.co", "tinyurl", "goo.gl", "cutt.ly", "cli.gs", "t.ly",
];

/// Lowercase substrings commonly seen in phishing and malware links.
pub const BUILTIN_KEYWORDS: &[&str] = &[
    "scam",
    "login-verify",
    "free-soft",
    "update-now",
    "payment-failed",
    "security-alert",
    "download-exe",
    "account-sync",
    "support-fix",
];

/// Ordered, duplicate-free set of lowercase apex domains.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrustedDomainSet {
    domains: Vec<String>,
}

impl TrustedDomainSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in list in its canonical order.
    pub fn builtin() -> Self {
        let mut set = Self::new();
        set.extend(BUILTIN_TRUSTED_DOMAINS.iter().copied());
        set
    }

    /// Adds a domain (lowercased, trimmed). Returns false when it was already present
    /// or empty; the existing position is kept.
    pub fn insert(&mut self, domain: &str) -> bool {
        let domain = domain.trim().to_lowercase();
        if domain.is_empty() || self.contains(&domain) {
            return false;
        }
        self.domains.push(domain);
        true
    }

    pub fn extend<'a>(&mut self, domains: impl IntoIterator<Item = &'a str>) {
        for d in domains {
            self.insert(d);
        }
    }

    /// Exact, case-insensitive membership.
    pub fn contains(&self, domain: &str) -> bool {
        self.domains.iter().any(|d| d.eq_ignore_ascii_case(domain))
    }

    /// Domains in scan order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.domains.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

/// Numeric cut-offs used by the rules. Defaults reproduce the stock behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Unknown domains longer than this (in characters) are reported.
    pub max_domain_length: usize,
    /// Google `/aclk?` paths shorter than this are reported.
    pub tracking_path_min: usize,
    /// Google `/aclk?` paths longer than this are reported.
    pub tracking_path_max: usize,
    /// URLs on trusted domains longer than this get the informational long-URL note.
    pub long_url_length: usize,
    /// Maximum edit distance tolerated between a government portal path prefix and the
    /// known-good one.
    pub portal_path_tolerance: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            max_domain_length: 35,
            tracking_path_min: 50,
            tracking_path_max: 700,
            long_url_length: 80,
            portal_path_tolerance: 3,
        }
    }
}

/// Everything the rule pipeline reads besides the URL itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceData {
    pub trusted: TrustedDomainSet,
    /// Lowercase shortener substrings.
    pub shorteners: Vec<String>,
    /// Lowercase keyword substrings, reported in this order.
    pub keywords: Vec<String>,
    pub thresholds: Thresholds,
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self {
            trusted: TrustedDomainSet::builtin(),
            shorteners: BUILTIN_SHORTENERS.iter().map(|s| s.to_string()).collect(),
            keywords: BUILTIN_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            thresholds: Thresholds::default(),
        }
    }
}

impl ReferenceData {
    /// Appends shortener patterns, skipping blanks and duplicates.
    pub fn add_shorteners<'a>(&mut self, patterns: impl IntoIterator<Item = &'a str>) {
        push_unique_lowercase(&mut self.shorteners, patterns);
    }

    /// Appends keywords, skipping blanks and duplicates.
    pub fn add_keywords<'a>(&mut self, keywords: impl IntoIterator<Item = &'a str>) {
        push_unique_lowercase(&mut self.keywords, keywords);
    }

    /// Case-insensitive substring match of `raw` against the shortener list.
    pub fn is_shortened(&self, raw: &str) -> bool {
        let lower = raw.to_lowercase();
        self.shorteners.iter().any(|s| lower.contains(s.as_str()))
    }
}

fn push_unique_lowercase<'a>(list: &mut Vec<String>, items: impl IntoIterator<Item = &'a str>) {
    for item in items {
        let item = item.trim().to_lowercase();
        if !item.is_empty() && !list.contains(&item) {
            list.push(item);
        }
    }
}
