//! File appender implementation

use crate::core::timestamp::{self, FILE_TIME_FORMAT};
use crate::core::{Appender, Entry, LoggerError, Result};
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Plain-text level prefixes, padded so messages align across levels.
const LEVEL_PREFIXES: [&str; 6] = [
    "trace: ",
    "debug: ",
    "info:  ",
    "warn:  ",
    "error: ",
    "fatal: ",
];

#[derive(Debug)]
pub struct FileAppender {
    writer: BufWriter<File>,
}

impl FileAppender {
    /// Open `path` for appending, creating the file if absent.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| LoggerError::file_open(path.display().to_string(), source))?;

        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl Appender for FileAppender {
    fn append(&mut self, entry: &Entry, message: fmt::Arguments<'_>) -> Result<()> {
        writeln!(self.writer, "{}", entry.location())?;
        write!(
            self.writer,
            "[{}] {}",
            timestamp::render_now(FILE_TIME_FORMAT),
            LEVEL_PREFIXES[entry.level as usize]
        )?;
        writeln!(self.writer, "{}", message)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        // Ensure all buffered data reaches the file before the handle closes
        let _ = self.flush();
    }
}
