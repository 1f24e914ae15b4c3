//! Verbose logging for the analysis
//!
//! Structured logging of abstract states per program point, useful for
//! understanding why a program was accepted or rejected. The transfer
//! functions themselves stay pure; the driver decides what to record.

use alloc::format;
use alloc::string::String;

use crate::state::abs_state::AbsState;

/// Log level for analysis output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    /// No logging
    #[default]
    Off = 0,
    /// Only errors
    Error = 1,
    /// Errors and warnings
    Warn = 2,
    /// General information (joins, verdicts)
    Info = 3,
    /// Detailed debugging info
    Debug = 4,
    /// Very verbose (every program point)
    Trace = 5,
}

/// Bounded append-only log buffer
#[derive(Debug, Clone, Default)]
pub struct VerifierLog {
    /// Log level threshold
    pub level: LogLevel,
    /// Log buffer
    pub buffer: String,
    /// Maximum buffer size
    pub max_size: usize,
    /// Whether the buffer has been truncated
    pub truncated: bool,
}

impl VerifierLog {
    /// Create a new log with the specified level
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            buffer: String::new(),
            max_size: 1024 * 1024,
            truncated: false,
        }
    }

    /// Check if logging is enabled at the given level
    pub fn enabled(&self, level: LogLevel) -> bool {
        level <= self.level && level != LogLevel::Off
    }

    /// Log a message at the given level
    pub fn log(&mut self, level: LogLevel, msg: &str) {
        if !self.enabled(level) || self.truncated {
            return;
        }
        if self.buffer.len() + msg.len() + 1 > self.max_size {
            self.truncated = true;
            self.buffer.push_str("\n... log truncated ...\n");
            return;
        }
        self.buffer.push_str(msg);
        self.buffer.push('\n');
    }

    /// Log an error
    pub fn error(&mut self, msg: &str) {
        self.log(LogLevel::Error, msg);
    }

    /// Log info
    pub fn info(&mut self, msg: &str) {
        self.log(LogLevel::Info, msg);
    }

    /// Log trace
    pub fn trace(&mut self, msg: &str) {
        self.log(LogLevel::Trace, msg);
    }

    /// Get the log contents
    pub fn contents(&self) -> &str {
        &self.buffer
    }

    /// Clear the log
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.truncated = false;
    }
}

/// Record the abstract state at one program point
pub fn log_state(log: &mut VerifierLog, pc: usize, state: &AbsState) {
    if log.enabled(LogLevel::Trace) {
        let msg = format!("{}: {}", pc, state);
        log.trace(&msg);
    }
}
