//! Logging macros with automatic call-site capture.
//!
//! Each macro records the calling file, module path and line into an
//! [`Entry`](crate::Entry) and forwards the message through `format_args!`,
//! so the format string and its arguments are rendered at most once.
//!
//! # Examples
//!
//! ```
//! use duolog::info;
//!
//! // Basic logging
//! info!("Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!("Server listening on port {}", port);
//! ```

/// Log a message at an explicit level, capturing the call site.
///
/// # Examples
///
/// ```
/// use duolog::{log, Level};
/// log!(Level::Info, "Simple message");
/// log!(Level::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr, $($arg:tt)+) => {
        $crate::log(
            &$crate::Entry::new($level, file!(), module_path!(), line!()),
            format_args!($($arg)+),
        )
    };
}

/// Log a trace-level message.
///
/// # Examples
///
/// ```
/// use duolog::trace;
/// trace!("Entering function: calculate()");
/// trace!("Variable value: {}", 42);
/// ```
#[macro_export]
macro_rules! trace {
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// use duolog::debug;
/// debug!("Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// use duolog::info;
/// info!("Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// use duolog::warn;
/// warn!("Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// use duolog::error;
/// error!("Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
///
/// # Examples
///
/// ```
/// use duolog::fatal;
/// fatal!("Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Fatal, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    // The macros route through the process-wide logger, which starts
    // console-only at trace level, so these exercise capture and formatting
    // without touching the filesystem.

    #[test]
    fn test_log_macro() {
        log!(crate::Level::Info, "Test message");
        log!(crate::Level::Info, "Formatted: {}", 42);
    }

    #[test]
    fn test_per_level_macros() {
        trace!("Trace message");
        debug!("Count: {}", 5);
        info!("Items: {}", 100);
        warn!("Retry {} of {}", 1, 3);
        error!("Code: {}", 500);
        fatal!("Critical failure: {}", "system");
    }

    #[test]
    fn test_macro_expands_in_expression_position() {
        let () = info!("expression form");
    }
}
