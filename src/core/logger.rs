//! Main logger implementation
//!
//! A [`Logger`] owns both sinks and the filtering state, and can be used as
//! an explicit instance. The process-wide singleton behind the crate-level
//! [`init`]/[`log`] functions wraps one `Logger` in a mutex; a single lock
//! acquisition covers the whole state-check-and-write sequence of a log
//! call, so concurrent use is well-defined.

use super::{
    appender::Appender,
    config::Config,
    entry::Entry,
    error::{LoggerError, Result},
    level::Level,
};
use crate::appenders::{ConsoleAppender, FileAppender};
use parking_lot::Mutex;
use std::fmt;

static GLOBAL: Mutex<Logger> = Mutex::new(Logger::new());

pub struct Logger {
    console: ConsoleAppender,
    file: Option<FileAppender>,
    level: Level,
    muted: bool,
}

impl Logger {
    /// A logger with no file sink, minimum level [`Level::Trace`] and the
    /// mute flag clear. Logging through it goes to the console only until
    /// [`init`](Logger::init) opens a file.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            console: ConsoleAppender::new(),
            file: None,
            level: Level::Trace,
            muted: false,
        }
    }

    /// Open the log file named by `config` and adopt its minimum level.
    ///
    /// On success the mute flag is cleared. If the file cannot be opened,
    /// [`LoggerError::FileOpen`] is returned and the logger is left exactly
    /// as it was, so the caller may retry or carry on console-only. Calling
    /// `init` while a file is already open returns
    /// [`LoggerError::AlreadyInitialized`] without touching any state.
    pub fn init(&mut self, config: Config) -> Result<()> {
        if self.file.is_some() {
            return Err(LoggerError::AlreadyInitialized);
        }

        let file = FileAppender::new(config.file_path)?;
        self.file = Some(file);
        self.level = config.level;
        self.muted = false;
        Ok(())
    }

    /// Flush and close the log file. Safe to call when no file is open, and
    /// safe to call repeatedly. The minimum level and mute flag survive, and
    /// a later `init` starts a new cycle.
    pub fn deinit(&mut self) {
        self.file = None;
    }

    /// Suppress all output regardless of level. Idempotent.
    pub fn mute(&mut self) {
        self.muted = true;
    }

    /// Revert to level-based filtering. Idempotent.
    pub fn unmute(&mut self) {
        self.muted = false;
    }

    /// Overwrite the minimum level; takes effect on the next log call.
    pub fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Whether a log file is currently open.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.file.is_some()
    }

    /// Write one entry through both sinks.
    ///
    /// Muted or below-level entries are dropped silently. The console sink
    /// always receives accepted entries; the file sink only while a file is
    /// open. Sink write failures are swallowed, so this never fails
    /// observably.
    pub fn log(&mut self, entry: &Entry, args: fmt::Arguments<'_>) {
        if self.muted || entry.level < self.level {
            return;
        }

        let _ = self.console.append(entry, args);

        if let Some(file) = self.file.as_mut() {
            let _ = file.append(entry, args);
        }
    }

    /// Flush both sinks, surfacing IO errors the log path swallows.
    pub fn flush(&mut self) -> Result<()> {
        self.console.flush()?;
        if let Some(file) = self.file.as_mut() {
            file.flush()?;
        }
        Ok(())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialize the process-wide logger: open the log file and set the
/// minimum level. See [`Logger::init`] for the failure contract.
pub fn init(config: Config) -> Result<()> {
    GLOBAL.lock().init(config)
}

/// Close the process-wide logger's file. Safe no-op without a prior `init`.
pub fn deinit() {
    GLOBAL.lock().deinit();
}

/// Suppress all process-wide logging output.
pub fn mute() {
    GLOBAL.lock().mute();
}

/// Restore level-based filtering after [`mute`].
pub fn unmute() {
    GLOBAL.lock().unmute();
}

/// Overwrite the process-wide minimum level.
pub fn set_level(level: Level) {
    GLOBAL.lock().set_level(level);
}

/// Log one entry through the process-wide logger.
///
/// This is the explicit-argument-list entry point; the
/// [`log!`](macro@crate::log) macro and the per-level macros build the
/// `Entry` and the argument pack at the call site and end up here.
pub fn log(entry: &Entry, args: fmt::Arguments<'_>) {
    GLOBAL.lock().log(entry, args);
}
