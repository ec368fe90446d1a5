//! Console appender implementation

use crate::core::timestamp::{self, CONSOLE_TIME_FORMAT};
use crate::core::{Appender, Entry, Level, Result};
use colored::Colorize;
use std::fmt;
use std::io::{self, Write};

pub struct ConsoleAppender {
    use_colors: bool,
}

impl ConsoleAppender {
    pub const fn new() -> Self {
        Self { use_colors: true }
    }

    /// Create an appender with ANSI styling switched on or off.
    ///
    /// With colors off the layout is unchanged but no escape sequences and
    /// no terminal bell are emitted, for pipes and dumb terminals.
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Format a full console entry, excluding the trailing blank-line
    /// separator: the dimmed call-site line, the `[HH:MM:SS]` timestamp,
    /// the level prefix and the message.
    pub fn format_text(&self, entry: &Entry, message: fmt::Arguments<'_>) -> String {
        let timestamp = timestamp::render_now(CONSOLE_TIME_FORMAT);

        if !self.use_colors {
            return format!(
                "{}\n[{}] {}: {}",
                entry.location(),
                timestamp,
                entry.level.as_str(),
                message
            );
        }

        let location = entry.location().white().dimmed().italic();
        let timestamp = format!("[{}]", timestamp).white().dimmed();

        // Trace and debug messages render italic, the rest unstyled.
        let message = match entry.level {
            Level::Trace | Level::Debug => message.to_string().white().italic().to_string(),
            _ => message.to_string(),
        };

        format!(
            "{}\n{} {}{}",
            location,
            timestamp,
            Self::level_prefix(entry.level),
            message
        )
    }

    /// Level prefix including the `: ` separator. Warn and above lead with
    /// a terminal bell to alert interactive terminals.
    fn level_prefix(level: Level) -> String {
        let label = match level {
            Level::Fatal => " fatal ",
            _ => level.as_str(),
        };

        let mut styled = label.color(level.color_code()).bold();
        match level {
            Level::Warn => styled = styled.blink(),
            Level::Fatal => styled = styled.on_red(),
            _ => {}
        }

        let bell = if level >= Level::Warn { "\x07" } else { "" };
        format!("{}{}: ", bell, styled)
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, entry: &Entry, message: fmt::Arguments<'_>) -> Result<()> {
        let output = self.format_text(entry, message);
        let mut stdout = io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        // Blank-line separator between entries; the trailing newlines also
        // trigger the flush of a line-buffered interactive stdout.
        stdout.write_all(b"\n\n")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        io::stdout().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
