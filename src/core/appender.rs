//! Appender trait for log output destinations

use super::{entry::Entry, error::Result};
use std::fmt;

pub trait Appender: Send + Sync {
    fn append(&mut self, entry: &Entry, message: fmt::Arguments<'_>) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
