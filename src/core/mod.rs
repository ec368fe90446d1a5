//! Core logger types and traits

pub mod appender;
pub mod config;
pub mod entry;
pub mod error;
pub mod level;
pub mod logger;
pub mod timestamp;

pub use appender::Appender;
pub use config::Config;
pub use entry::Entry;
pub use error::{LoggerError, Result};
pub use level::Level;
pub use logger::{deinit, init, log, mute, set_level, unmute, Logger};
pub use timestamp::{CONSOLE_TIME_FORMAT, FILE_TIME_FORMAT};
