//! Application messages for inter-thread communication.

use std::path::PathBuf;
use std::time::SystemTime;

use brewmap_core::Directory;

/// Messages sent from the loader thread to the main UI loop.
pub enum AppMessage {
    /// The directory file was read and parsed.
    DirectoryLoaded {
        path: PathBuf,
        directory: Directory,
    },
    /// Reading the directory file failed. Terminal for this session.
    LoadFailed { path: PathBuf, message: String },
    /// A log message for the console.
    Log(LogEntry),
}

/// Log level for console messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
    Success,
}

/// A log entry for the console panel.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: SystemTime,
}

impl LogEntry {
    pub fn info(msg: impl Into<String>) -> Self {
        Self::with_level(LogLevel::Info, msg)
    }

    pub fn warning(msg: impl Into<String>) -> Self {
        Self::with_level(LogLevel::Warning, msg)
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self::with_level(LogLevel::Error, msg)
    }

    pub fn success(msg: impl Into<String>) -> Self {
        Self::with_level(LogLevel::Success, msg)
    }

    fn with_level(level: LogLevel, msg: impl Into<String>) -> Self {
        Self {
            level,
            message: msg.into(),
            timestamp: SystemTime::now(),
        }
    }
}
