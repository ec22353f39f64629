//! Logging init: scan log under the XDG state dir, or stderr when that is unusable.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,qrguard=debug,qrguard_core=debug";
const LOG_FILE_NAME: &str = "qrguard.log";

/// Destination of one log event. Falls back to stderr for that event when the
/// scan log handle cannot be duplicated.
enum ScanLogSink {
    Log(File),
    Stderr,
}

impl io::Write for ScanLogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            ScanLogSink::Log(f) => f.write(buf),
            ScanLogSink::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            ScanLogSink::Log(f) => f.flush(),
            ScanLogSink::Stderr => io::stderr().lock().flush(),
        }
    }
}

/// Append-only scan log shared by every event.
struct ScanLog(File);

impl<'a> MakeWriter<'a> for ScanLog {
    type Writer = ScanLogSink;

    fn make_writer(&'a self) -> Self::Writer {
        match self.0.try_clone() {
            Ok(f) => ScanLogSink::Log(f),
            Err(_) => ScanLogSink::Stderr,
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Opens (creating if needed) `<dir>/qrguard.log` for appending.
fn open_scan_log(dir: &Path) -> Result<(File, PathBuf)> {
    fs::create_dir_all(dir).with_context(|| format!("create log dir {}", dir.display()))?;
    let path = dir.join(LOG_FILE_NAME);
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open scan log {}", path.display()))?;
    Ok((file, path))
}

/// Sends scan and verdict events to `~/.local/state/qrguard/qrguard.log`.
/// Returns Err when the log cannot be opened; callers then use [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("qrguard")
        .context("resolve XDG state dir for qrguard")?;
    let (file, path) = open_scan_log(&xdg_dirs.get_state_home().join("qrguard"))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(BoxMakeWriter::new(ScanLog(file)))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!("qrguard scan log at {}", path.display());
    Ok(())
}

/// Stderr-only logging, used when the scan log is unavailable.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn scan_log_is_created_and_appended() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("state/qrguard");

        let (mut file, path) = open_scan_log(&log_dir).unwrap();
        assert_eq!(path, log_dir.join("qrguard.log"));
        writeln!(file, "first").unwrap();

        let (mut again, _) = open_scan_log(&log_dir).unwrap();
        writeln!(again, "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn unusable_log_dir_is_reported() {
        let blocker = tempfile::NamedTempFile::new().unwrap();
        let err = open_scan_log(&blocker.path().join("qrguard")).unwrap_err();
        assert!(format!("{err:#}").contains("create log dir"));
    }

    #[test]
    fn sink_writes_through_to_the_log() {
        let dir = tempfile::tempdir().unwrap();
        let (file, path) = open_scan_log(dir.path()).unwrap();
        let log = ScanLog(file);
        let mut sink = log.make_writer();
        sink.write_all(b"verdict=danger\n").unwrap();
        sink.flush().unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "verdict=danger\n");
    }
}
