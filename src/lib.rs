//! # Duolog
//!
//! A minimal process-wide logging facility that writes every accepted entry
//! to two sinks: a colored console stream and an append-only log file.
//!
//! ## Features
//!
//! - **Dual Sinks**: ANSI-styled console output plus plain-text file output
//! - **Call-Site Capture**: per-level macros record file, module and line
//! - **Level Filtering and Mute**: a minimum level and a global mute switch
//! - **Thread Safe**: the process-wide logger is mutex-guarded end to end
//!
//! ## Usage
//!
//! ```no_run
//! use duolog::{info, warn, Config, Level};
//!
//! duolog::init(Config::new("logs.txt", Level::Trace))?;
//!
//! info!("Server listening on port {}", 8080);
//! warn!("Low disk space");
//!
//! duolog::deinit();
//! # Ok::<(), duolog::LoggerError>(())
//! ```
//!
//! Without [`init`], logging still reaches the console; the file sink only
//! writes between a successful [`init`] and the matching [`deinit`].

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender};
    pub use crate::core::{Appender, Config, Entry, Level, Logger, LoggerError, Result};
}

pub use appenders::{ConsoleAppender, FileAppender};
pub use core::{
    deinit, init, log, mute, set_level, unmute, Appender, Config, Entry, Level, Logger,
    LoggerError, Result, CONSOLE_TIME_FORMAT, FILE_TIME_FORMAT,
};
