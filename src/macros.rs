//! Logging macros for ergonomic log message formatting.
//!
//! Each macro packs its arguments with `format_args!` and hands them to the
//! logger's `*_args` method, so nothing is allocated on the way to the
//! bounded renderer. They work with both [`Logger`](crate::Logger) and
//! [`SyncLogger`](crate::SyncLogger).
//!
//! # Examples
//!
//! ```
//! use tinted_logger::prelude::*;
//! use tinted_logger::{info, warning};
//!
//! let mut out: Vec<u8> = Vec::new();
//! let mut logger = Logger::new(Sink::borrowed(&mut out), "server", StyleRegistry::default())?;
//!
//! info!(logger, "Server started");
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! warning!(logger, "{} connections pending", 3);
//! # Ok::<(), LoggerError>(())
//! ```

/// Log a message at an explicit level.
///
/// ```
/// # use tinted_logger::prelude::*;
/// # let mut out: Vec<u8> = Vec::new();
/// # let mut logger = Logger::new(Sink::borrowed(&mut out), "t", StyleRegistry::default()).unwrap();
/// use tinted_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_args($level, ::core::format_args!($($arg)+))
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
///
/// ```
/// # use tinted_logger::prelude::*;
/// # let mut out: Vec<u8> = Vec::new();
/// # let mut logger = Logger::new(Sink::borrowed(&mut out), "t", StyleRegistry::default()).unwrap();
/// use tinted_logger::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}
