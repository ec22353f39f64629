//! `qrguard distance <a> <b>` – edit distance between two strings.

use anyhow::Result;
use qrguard_core::edit_distance;

pub fn run_distance(a: &str, b: &str) -> Result<()> {
    println!("{}", edit_distance(a, b));
    Ok(())
}
