//! Timestamp rendering for log output
//!
//! Renders the local wall-clock time into strftime-style patterns. Each sink
//! supplies its own pattern; the rendered text carries no trailing separator,
//! so surrounding punctuation belongs in the pattern or in subsequent writes.

use chrono::{DateTime, Local};

/// Pattern used by the console sink: `14:03:07`
pub const CONSOLE_TIME_FORMAT: &str = "%H:%M:%S";

/// Pattern used by the file sink: `08.01.2025 14:03:07`
pub const FILE_TIME_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Render `at` according to a strftime-style pattern.
///
/// A pattern containing directives chrono cannot render falls back to the
/// literal pattern text, keeping the log path infallible.
pub fn render(pattern: &str, at: DateTime<Local>) -> String {
    use std::fmt::Write;

    let mut out = String::with_capacity(pattern.len() + 16);
    if write!(out, "{}", at.format(pattern)).is_err() {
        out.clear();
        out.push_str(pattern);
    }
    out
}

/// Render the current local time according to a strftime-style pattern.
pub fn render_now(pattern: &str) -> String {
    render(pattern, Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Local> {
        // 2025-01-08 10:30:45 local time
        Local
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
    }

    #[test]
    fn test_console_pattern() {
        assert_eq!(render(CONSOLE_TIME_FORMAT, fixed_datetime()), "10:30:45");
    }

    #[test]
    fn test_file_pattern() {
        assert_eq!(
            render(FILE_TIME_FORMAT, fixed_datetime()),
            "08.01.2025 10:30:45"
        );
    }

    #[test]
    fn test_literal_text_passes_through() {
        assert_eq!(render("at %H o'clock", fixed_datetime()), "at 10 o'clock");
    }

    #[test]
    fn test_unrenderable_pattern_falls_back_to_literal() {
        assert_eq!(render("%Q", fixed_datetime()), "%Q");
    }

    #[test]
    fn test_render_now_shape() {
        let rendered = render_now(CONSOLE_TIME_FORMAT);
        let fields: Vec<&str> = rendered.split(':').collect();
        assert_eq!(fields.len(), 3, "expected HH:MM:SS, got {rendered}");
        let (h, m, s) = (
            fields[0].parse::<u8>().expect("hours"),
            fields[1].parse::<u8>().expect("minutes"),
            fields[2].parse::<u8>().expect("seconds"),
        );
        assert!(fields.iter().all(|f| f.len() == 2));
        assert!(h < 24 && m < 60 && s < 61);
    }
}
