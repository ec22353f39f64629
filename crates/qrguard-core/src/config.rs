use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::reference::Thresholds;
use crate::verdict::VerdictPolicy;

/// Global configuration loaded from `~/.config/qrguard/config.toml`.
///
/// Every list extends the built-in reference data; nothing here can remove a
/// built-in entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QrGuardConfig {
    /// Extra apex domains to treat as trusted, scanned after the built-in ones.
    #[serde(default)]
    pub extra_trusted_domains: Vec<String>,
    /// Extra shortener substrings.
    #[serde(default)]
    pub extra_shorteners: Vec<String>,
    /// Extra suspicious keywords.
    #[serde(default)]
    pub extra_keywords: Vec<String>,
    /// Verdict policy: "any-signal" (default) or "flagged-only".
    #[serde(default)]
    pub policy: Option<VerdictPolicy>,
    /// Optional rule thresholds; if missing, built-in defaults are used.
    #[serde(default)]
    pub thresholds: Option<Thresholds>,
}

/// Default config location; the directory is not created here.
pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("qrguard")
        .context("resolve XDG config dir for qrguard")?;
    Ok(xdg_dirs.get_config_file("config.toml"))
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<QrGuardConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`], for an explicit location.
pub fn load_or_init_at(path: &Path) -> Result<QrGuardConfig> {
    if path.exists() {
        return load_from(path);
    }

    let default_cfg = QrGuardConfig::default();
    let toml = toml::to_string_pretty(&default_cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config dir for {}", path.display()))?;
    }
    fs::write(path, toml).with_context(|| format!("write default config {}", path.display()))?;
    tracing::info!("created default config at {}", path.display());
    Ok(default_cfg)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<QrGuardConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: QrGuardConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
