//! Logger metrics for observability
//!
//! Logging calls never report failure to the caller. These counters are the
//! side channel that makes silent write failures and truncations visible.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters describing what a logger has done with its log calls
///
/// # Example
///
/// ```
/// use tinted_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_written();
/// metrics.record_write_failure();
///
/// assert_eq!(metrics.lines_written(), 1);
/// assert_eq!(metrics.write_failures(), 1);
/// assert_eq!(metrics.total_calls(), 2);
/// ```
#[derive(Debug, Default)]
pub struct LoggerMetrics {
    /// Lines the sink accepted
    lines_written: AtomicU64,

    /// Lines the sink rejected
    write_failures: AtomicU64,

    /// Lines whose label or message was shortened to fit
    truncations: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            lines_written: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
            truncations: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn lines_written(&self) -> u64 {
        self.lines_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn truncations(&self) -> u64 {
        self.truncations.load(Ordering::Relaxed)
    }

    /// Every log call, successful or not
    #[inline]
    pub fn total_calls(&self) -> u64 {
        self.lines_written() + self.write_failures()
    }

    #[inline]
    pub fn record_written(&self) -> u64 {
        self.lines_written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_truncation(&self) -> u64 {
        self.truncations.fetch_add(1, Ordering::Relaxed)
    }

    /// Failure rate as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if nothing has been logged.
    pub fn failure_rate(&self) -> f64 {
        let total = self.total_calls();
        if total == 0 {
            return 0.0;
        }
        (self.write_failures() as f64 / total as f64) * 100.0
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.lines_written.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
        self.truncations.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_metrics_are_zero() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.lines_written(), 0);
        assert_eq!(metrics.write_failures(), 0);
        assert_eq!(metrics.truncations(), 0);
        assert_eq!(metrics.failure_rate(), 0.0);
    }

    #[test]
    fn test_failure_rate() {
        let metrics = LoggerMetrics::new();
        for _ in 0..90 {
            metrics.record_written();
        }
        for _ in 0..10 {
            metrics.record_write_failure();
        }

        let rate = metrics.failure_rate();
        assert!((9.9..=10.1).contains(&rate), "Failure rate was {}", rate);
    }

    #[test]
    fn test_record_returns_previous_value() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.record_truncation(), 0);
        assert_eq!(metrics.record_truncation(), 1);
        assert_eq!(metrics.truncations(), 2);
    }

    #[test]
    fn test_reset() {
        let metrics = LoggerMetrics::new();
        metrics.record_written();
        metrics.record_write_failure();
        metrics.record_truncation();
        metrics.reset();
        assert_eq!(metrics.total_calls(), 0);
        assert_eq!(metrics.truncations(), 0);
    }
}
