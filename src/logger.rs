// src/logger.rs
//! File sink for the `log` facade.
//!
//! Lines look like `[00:00:01.250][WARN] message`, timed from logger start.
//! Everything at or above the configured level goes to the log file;
//! warnings and errors are echoed to stderr as well.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::Instant;

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::error::Result;
use crate::file::ensure_directory;

struct FileLogger {
    level: LevelFilter,
    file: Option<Mutex<File>>,
    start: Instant,
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let elapsed = fmt_elapsed(self.start.elapsed().as_millis());
        let line = format!("[{elapsed}][{}] {}\n", record.level(), record.args());

        match &self.file {
            Some(file) => {
                if let Ok(mut f) = file.lock() {
                    let _ = f.write_all(line.as_bytes());
                }
                if record.level() <= Level::Warn {
                    eprint!("{line}");
                }
            }
            None => eprint!("{line}"),
        }
    }

    fn flush(&self) {
        if let Some(file) = &self.file {
            if let Ok(mut f) = file.lock() {
                let _ = f.flush();
            }
        }
    }
}

/// Install the global logger. `path = None` logs to stderr only.
/// Fails if a logger is already installed.
pub fn init(path: Option<&Path>, level: LevelFilter) -> Result<()> {
    let file = match path {
        Some(p) => {
            if let Some(parent) = p.parent() {
                if !parent.as_os_str().is_empty() {
                    ensure_directory(parent)?;
                }
            }
            Some(Mutex::new(OpenOptions::new().create(true).append(true).open(p)?))
        }
        None => None,
    };

    let logger = FileLogger { level, file, start: Instant::now() };
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_zero_padded() {
        assert_eq!(fmt_elapsed(0), "00:00:00.000");
        assert_eq!(fmt_elapsed(3_723_004), "01:02:03.004");
    }

    // The only test in this binary that installs the global logger.
    #[test]
    fn installs_once_and_writes_prefixed_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("log.txt");
        init(Some(&path), LevelFilter::Info).unwrap();

        log::info!("written by the logger test");
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(
            text.lines()
                .any(|l| l.starts_with('[') && l.ends_with("][INFO] written by the logger test"))
        );

        assert!(matches!(init(None, LevelFilter::Info), Err(crate::error::Error::LoggerInit(_))));
    }
}
