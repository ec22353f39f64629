//! `qrguard trusted` – list the effective trusted domains.

use anyhow::Result;
use qrguard_core::Classifier;

pub fn run_trusted(classifier: &Classifier) -> Result<()> {
    let trusted = &classifier.reference().trusted;
    for domain in trusted.iter() {
        println!("{domain}");
    }
    tracing::debug!("listed {} trusted domain(s)", trusted.len());
    Ok(())
}
