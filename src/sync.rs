//! Mutex-wrapped logger for sharing across threads
//!
//! [`Logger`] itself has no internal synchronization. [`SyncLogger`] puts
//! one behind a `parking_lot::Mutex` so clones can log from any thread; each
//! line is rendered and written while the lock is held, so lines from
//! different threads never interleave within the sink.

use crate::core::{LogLevel, Logger, LoggerMetrics};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// A cloneable, thread-safe handle to a [`Logger`]
///
/// # Example
///
/// ```
/// use tinted_logger::prelude::*;
/// use tinted_logger::info;
///
/// let logger = SyncLogger::new(Logger::builder().sink(Sink::owned(Vec::<u8>::new())).build()?);
///
/// let handles: Vec<_> = (0..4)
///     .map(|i| {
///         let logger = logger.clone();
///         std::thread::spawn(move || info!(logger, "worker {} done", i))
///     })
///     .collect();
/// for handle in handles {
///     handle.join().unwrap();
/// }
///
/// assert_eq!(logger.with_logger(|l| l.metrics().lines_written()), 4);
/// # Ok::<(), LoggerError>(())
/// ```
#[derive(Clone)]
pub struct SyncLogger {
    inner: Arc<Mutex<Logger<'static>>>,
}

impl SyncLogger {
    pub fn new(logger: Logger<'static>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(logger)),
        }
    }

    pub fn log_args(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        self.inner.lock().log_args(level, args);
    }

    pub fn log(&self, level: LogLevel, message: &str) {
        self.inner.lock().log(level, message);
    }

    #[inline]
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warning(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    #[inline]
    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    pub fn fatal(&self, message: &str) {
        self.log(LogLevel::Fatal, message);
    }

    #[inline]
    pub fn info_args(&self, args: fmt::Arguments<'_>) {
        self.log_args(LogLevel::Info, args);
    }

    #[inline]
    pub fn warning_args(&self, args: fmt::Arguments<'_>) {
        self.log_args(LogLevel::Warning, args);
    }

    #[inline]
    pub fn error_args(&self, args: fmt::Arguments<'_>) {
        self.log_args(LogLevel::Error, args);
    }

    #[inline]
    pub fn fatal_args(&self, args: fmt::Arguments<'_>) {
        self.log_args(LogLevel::Fatal, args);
    }

    /// Run `f` against the wrapped logger while holding the lock
    pub fn with_logger<R>(&self, f: impl FnOnce(&Logger<'static>) -> R) -> R {
        f(&self.inner.lock())
    }

    /// Snapshot of `(lines_written, write_failures, truncations)`
    pub fn counters(&self) -> (u64, u64, u64) {
        self.with_logger(|logger| {
            let m: &LoggerMetrics = logger.metrics();
            (m.lines_written(), m.write_failures(), m.truncations())
        })
    }

    /// Close the logger if this is the last handle
    ///
    /// Returns `false` when other clones are still alive; the logger then
    /// closes when the last of them is dropped.
    pub fn close(self) -> bool {
        match Arc::try_unwrap(self.inner) {
            Ok(mutex) => {
                mutex.into_inner().close();
                true
            }
            Err(_) => false,
        }
    }
}

impl fmt::Debug for SyncLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncLogger")
            .field("handles", &Arc::strong_count(&self.inner))
            .finish_non_exhaustive()
    }
}
