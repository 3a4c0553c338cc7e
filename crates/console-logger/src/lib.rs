//! Console Logger
//!
//! A `log` backend for browser frontends. Lines go to the browser console
//! (stderr on native targets) and the most recent ones are kept in a
//! circular buffer so they can be inspected from the UI or dumped on demand.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Default number of lines kept in the buffer
pub const DEFAULT_CAPACITY: usize = 256;

/// Upper bound on the buffer, whatever the caller asks for
pub const MAX_CAPACITY: usize = 4096;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Logger writing to the console with a bounded history
pub struct ConsoleLogger {
    level: LevelFilter,
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        let capacity = capacity.clamp(1, MAX_CAPACITY);
        Self {
            level,
            capacity,
            lines: Mutex::new(VecDeque::new()),
        }
    }

    /// Snapshot of buffered lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    fn remember(&self, line: String) {
        let mut lines = match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        };
        while lines.len() >= self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }
}

/// Format a record as `HH:MM:SS.mmm [LEVEL] target: message`
pub fn format_line(record: &Record) -> String {
    format!(
        "{} [{}] {}: {}",
        chrono::Utc::now().format("%H:%M:%S%.3f"),
        record.level(),
        record.target(),
        record.args()
    )
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record);
        emit(record.level(), &line);
        self.remember(line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the global logger. Calling it twice returns the error from `log`.
pub fn init(level: LevelFilter, capacity: usize) -> Result<&'static ConsoleLogger, SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(logger)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_at<'a>(level: Level, args: std::fmt::Arguments<'a>) -> Record<'a> {
        Record::builder()
            .level(level)
            .target("outfit::test")
            .args(args)
            .build()
    }

    #[test]
    fn test_buffer_drops_oldest_lines() {
        let logger = ConsoleLogger::new(LevelFilter::Debug, 2);

        logger.log(&record_at(Level::Info, format_args!("first")));
        logger.log(&record_at(Level::Info, format_args!("second")));
        logger.log(&record_at(Level::Info, format_args!("third")));

        let lines = logger.recent();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("outfit::test: second"));
        assert!(lines[1].ends_with("outfit::test: third"));
    }

    #[test]
    fn test_level_filter() {
        let logger = ConsoleLogger::new(LevelFilter::Warn, 8);

        logger.log(&record_at(Level::Debug, format_args!("hidden")));
        logger.log(&record_at(Level::Warn, format_args!("shown")));

        let lines = logger.recent();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("[WARN]"));
    }

    #[test]
    fn test_zero_capacity_keeps_one_line() {
        let logger = ConsoleLogger::new(LevelFilter::Info, 0);
        logger.log(&record_at(Level::Info, format_args!("a")));
        logger.log(&record_at(Level::Info, format_args!("b")));
        assert_eq!(logger.recent().len(), 1);
    }

    #[test]
    fn test_oversized_capacity_is_clamped() {
        let logger = ConsoleLogger::new(LevelFilter::Info, usize::MAX);
        assert_eq!(logger.capacity, MAX_CAPACITY);

        for i in 0..MAX_CAPACITY + 10 {
            logger.log(&record_at(Level::Info, format_args!("line {}", i)));
        }
        let lines = logger.recent();
        assert_eq!(lines.len(), MAX_CAPACITY);
        assert!(lines[0].ends_with("line 10"));
    }
}
