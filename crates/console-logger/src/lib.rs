//! Console Logger
//!
//! `tracing` subscriber for browser apps: every formatted event is written
//! to the devtools console on wasm32 and to stderr everywhere else.

use std::fmt::{self, Write as _};
use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Filter used when `TODO_LOG` is not set at build time
pub const DEFAULT_FILTER: &str = "info";

const TIME_FORMAT: &str = "%H:%M:%S%.3f";

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("invalid log filter `{directive}`: {reason}")]
    InvalidFilter { directive: String, reason: String },
    #[error("logger already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Install the global subscriber using the build-time `TODO_LOG` filter.
pub fn init_logger(app_name: &str) -> Result<(), LoggerError> {
    let directive = option_env!("TODO_LOG").unwrap_or(DEFAULT_FILTER);
    init_with_filter(app_name, directive)
}

/// Install the global subscriber with an explicit filter directive.
///
/// Fails instead of panicking when a subscriber is already installed.
pub fn init_with_filter(app_name: &str, directive: &str) -> Result<(), LoggerError> {
    let filter = EnvFilter::try_new(directive).map_err(|e| LoggerError::InvalidFilter {
        directive: directive.to_string(),
        reason: e.to_string(),
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(ConsoleMakeWriter)
        .with_timer(LocalClock)
        .with_ansi(false)
        .try_init()
        .map_err(|e| LoggerError::AlreadyInitialized(e.to_string()))?;

    tracing::info!(app = app_name, "logger initialized");
    Ok(())
}

/// Local wall-clock timestamps
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl FormatTime for LocalClock {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Local::now().format(TIME_FORMAT))
    }
}

/// Hands out one [`ConsoleWriter`] per event, tagged with the event level
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers a single formatted event and emits it when dropped
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self { level, buf: Vec::new() }
    }

    fn line(&self) -> String {
        String::from_utf8_lossy(&self.buf).trim_end().to_string()
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if !self.buf.is_empty() {
            emit(self.level, &self.line());
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use web_sys::console;

    if level == Level::ERROR {
        console::error_1(&line.into());
    } else if level == Level::WARN {
        console::warn_1(&line.into());
    } else if level == Level::INFO {
        console::info_1(&line.into());
    } else if level == Level::DEBUG {
        console::log_1(&line.into());
    } else {
        console::debug_1(&line.into());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_writer_trims_trailing_newline() {
        let mut writer = ConsoleWriter::new(Level::WARN);
        writer.write_all(b"12:00:00.000  WARN sync: ").unwrap();
        writer.write_all(b"failed\n").unwrap();
        assert_eq!(writer.line(), "12:00:00.000  WARN sync: failed");
    }

    #[test]
    fn test_default_writer_level_is_info() {
        let make = ConsoleMakeWriter;
        assert_eq!(make.make_writer().level, Level::INFO);
    }

    #[test]
    fn test_invalid_filter_is_rejected() {
        let err = init_with_filter("test", "sync=loudest").unwrap_err();
        assert!(matches!(err, LoggerError::InvalidFilter { .. }));
    }

    #[test]
    fn test_second_init_fails() {
        init_with_filter("test", "debug").expect("first init");
        let err = init_with_filter("test", "debug").unwrap_err();
        assert!(matches!(err, LoggerError::AlreadyInitialized(_)));
    }
}
