//! Console Logger
//!
//! `tracing` subscriber for a browser app: every formatted event goes to
//! the matching `console.*` method (`error`, `warn`, `info`, `log`,
//! `debug`). Off-wasm (tests, native tools) lines go to stderr instead.
//!
//! ```ignore
//! console_logger::init("debug")?;
//! tracing::info!(count = 3, "task list refreshed");
//! ```

use std::io;

use chrono::Local;
use tracing::{Level, Metadata};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Not one of `off`, `error`, `warn`, `info`, `debug`, `trace`
    #[error("Invalid log filter '{0}'")]
    InvalidFilter(String),

    #[error("A global tracing subscriber is already installed")]
    AlreadyInitialized,
}

/// Install the console subscriber as the global default
pub fn init(filter: &str) -> Result<(), LoggerError> {
    let level = parse_filter(filter)?;

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_target(false)
        .with_timer(ClockTime)
        .with_writer(ConsoleMakeWriter)
        .try_init()
        .map_err(|_| LoggerError::AlreadyInitialized)
}

/// Parse a level name; surrounding whitespace and case are ignored
pub fn parse_filter(filter: &str) -> Result<LevelFilter, LoggerError> {
    filter
        .trim()
        .parse::<LevelFilter>()
        .map_err(|_| LoggerError::InvalidFilter(filter.to_string()))
}

/// Wall-clock `HH:MM:SS.mmm`
struct ClockTime;

impl FormatTime for ClockTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", Local::now().format("%H:%M:%S%.3f"))
    }
}

/// Which `console.*` method an event is written with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
    Error,
    Warn,
    Info,
    Log,
    Debug,
}

impl ConsoleMethod {
    pub fn for_level(level: &Level) -> Self {
        if *level == Level::ERROR {
            ConsoleMethod::Error
        } else if *level == Level::WARN {
            ConsoleMethod::Warn
        } else if *level == Level::INFO {
            ConsoleMethod::Info
        } else if *level == Level::DEBUG {
            ConsoleMethod::Log
        } else {
            ConsoleMethod::Debug
        }
    }
}

/// Hands the fmt layer one `ConsoleWriter` per event
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::Log)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::for_level(meta.level()))
    }
}

/// Buffers one formatted event and emits it on drop
pub struct ConsoleWriter {
    method: ConsoleMethod,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(method: ConsoleMethod) -> Self {
        Self {
            method,
            buf: Vec::new(),
        }
    }

    /// Buffered text without the trailing newline; empties the buffer
    fn take_line(&mut self) -> Option<String> {
        if self.buf.is_empty() {
            return None;
        }
        let line = String::from_utf8_lossy(&self.buf).trim_end().to_string();
        self.buf.clear();
        Some(line)
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
        if let Some(line) = self.take_line() {
            emit(self.method, &line);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(method: ConsoleMethod, line: &str) {
    use web_sys::console;

    let value = line.into();
    match method {
        ConsoleMethod::Error => console::error_1(&value),
        ConsoleMethod::Warn => console::warn_1(&value),
        ConsoleMethod::Info => console::info_1(&value),
        ConsoleMethod::Log => console::log_1(&value),
        ConsoleMethod::Debug => console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_method: ConsoleMethod, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_filter() {
        assert_eq!(parse_filter("debug").unwrap(), LevelFilter::DEBUG);
        assert_eq!(parse_filter(" WARN ").unwrap(), LevelFilter::WARN);
        assert_eq!(parse_filter("off").unwrap(), LevelFilter::OFF);
        assert!(matches!(parse_filter("loud"), Err(LoggerError::InvalidFilter(_))));
    }

    #[test]
    fn test_level_to_console_method() {
        assert_eq!(ConsoleMethod::for_level(&Level::ERROR), ConsoleMethod::Error);
        assert_eq!(ConsoleMethod::for_level(&Level::WARN), ConsoleMethod::Warn);
        assert_eq!(ConsoleMethod::for_level(&Level::INFO), ConsoleMethod::Info);
        assert_eq!(ConsoleMethod::for_level(&Level::DEBUG), ConsoleMethod::Log);
        assert_eq!(ConsoleMethod::for_level(&Level::TRACE), ConsoleMethod::Debug);
    }

    #[test]
    fn test_writer_buffers_one_line() {
        let mut writer = ConsoleWriter::new(ConsoleMethod::Info);
        write!(writer, "12:00:00.000  INFO ").unwrap();
        writeln!(writer, "task list refreshed count=3").unwrap();

        assert_eq!(
            writer.take_line().as_deref(),
            Some("12:00:00.000  INFO task list refreshed count=3")
        );
        assert_eq!(writer.take_line(), None);
    }

    #[test]
    fn test_clock_format() {
        let mut out = String::new();
        ClockTime.format_time(&mut Writer::new(&mut out)).unwrap();
        // HH:MM:SS.mmm
        assert_eq!(out.len(), 12);
        assert_eq!(&out[2..3], ":");
        assert_eq!(&out[8..9], ".");
    }

    #[test]
    fn test_init_once() {
        assert!(init("trace").is_ok());
        tracing::info!("console logger installed");
        assert!(matches!(init("info"), Err(LoggerError::AlreadyInitialized)));
    }
}
