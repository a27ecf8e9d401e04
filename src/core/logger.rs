//! Main logger implementation

use super::{
    error::{LoggerError, Result},
    log_level::LogLevel,
    metrics::LoggerMetrics,
    render::{render_line, Title, MAX_LINE_LEN},
    style::StyleRegistry,
    timestamp::{LocalClock, TimeSource},
};
use crate::sinks::Sink;
use std::fmt;
use std::io;
use std::path::Path;

/// A titled logger bound to one style registry and one sink
///
/// Every log call renders a single line and hands it to the sink in one
/// write. Logging never fails: oversized input is truncated, and a write the
/// sink rejects is only recorded in [`Logger::metrics`] and
/// [`Logger::last_write_error`].
///
/// A `Logger` is not synchronized. Share one across threads through
/// [`SyncLogger`](crate::SyncLogger).
///
/// # Example
///
/// ```
/// use tinted_logger::prelude::*;
/// use tinted_logger::info;
///
/// let mut out: Vec<u8> = Vec::new();
/// let mut logger = Logger::new(Sink::borrowed(&mut out), "worker", StyleRegistry::default())?;
///
/// info!(logger, "processed {} jobs", 3);
/// logger.close();
///
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.starts_with("[worker]:[INFO]:["));
/// assert!(text.ends_with("]: processed 3 jobs\n"));
/// # Ok::<(), LoggerError>(())
/// ```
pub struct Logger<'a> {
    title: Title,
    style: StyleRegistry,
    /// `None` once released; only reachable from `Drop` after `close`
    sink: Option<Sink<'a>>,
    color_enabled: bool,
    time_source: Box<dyn TimeSource>,
    /// Reused for every line; reserved once at construction
    line: Vec<u8>,
    metrics: LoggerMetrics,
    last_write_error: Option<io::ErrorKind>,
}

impl<'a> Logger<'a> {
    /// Bind a sink, title and style
    ///
    /// Passing `None` as the sink selects the process error stream. Titles
    /// longer than [`MAX_TITLE_LEN`](crate::core::render::MAX_TITLE_LEN) are
    /// truncated.
    ///
    /// # Errors
    ///
    /// [`LoggerError::Allocation`] if the line buffer cannot be reserved.
    pub fn new(
        sink: impl Into<Option<Sink<'a>>>,
        title: &str,
        style: StyleRegistry,
    ) -> Result<Self> {
        let mut builder = LoggerBuilder::new().title(title).style(style);
        builder.sink = sink.into();
        builder.build()
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use tinted_logger::prelude::*;
    ///
    /// let mut out: Vec<u8> = Vec::new();
    /// let logger = Logger::builder()
    ///     .title("api")
    ///     .sink(Sink::borrowed(&mut out))
    ///     .color(true)
    ///     .time_source(FixedClock(Timestamp::new(12, 0, 0).unwrap()))
    ///     .build()?;
    ///
    /// assert!(logger.color_enabled());
    /// # Ok::<(), LoggerError>(())
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder<'a> {
        LoggerBuilder::new()
    }

    /// Render and write one line at `level`
    ///
    /// This is the single entry point every per-level method funnels into.
    pub fn log_args(&mut self, level: LogLevel, args: fmt::Arguments<'_>) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };

        let config = self.style.get(level);
        let timestamp = self.time_source.now();

        self.line.clear();
        let rendered = render_line(
            &mut self.line,
            config,
            self.title.as_str(),
            timestamp,
            args,
            self.color_enabled,
        );
        if rendered.truncated {
            self.metrics.record_truncation();
        }

        match sink.write_line(&self.line) {
            Ok(()) => {
                self.metrics.record_written();
            }
            Err(e) => {
                self.metrics.record_write_failure();
                self.last_write_error = Some(e.kind());
            }
        }
    }

    /// Log a message verbatim (no formatting placeholders)
    pub fn log(&mut self, level: LogLevel, message: &str) {
        self.log_args(level, format_args!("{}", message));
    }

    #[inline]
    pub fn info(&mut self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warning(&mut self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    #[inline]
    pub fn error(&mut self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    pub fn fatal(&mut self, message: &str) {
        self.log(LogLevel::Fatal, message);
    }

    #[inline]
    pub fn info_args(&mut self, args: fmt::Arguments<'_>) {
        self.log_args(LogLevel::Info, args);
    }

    #[inline]
    pub fn warning_args(&mut self, args: fmt::Arguments<'_>) {
        self.log_args(LogLevel::Warning, args);
    }

    #[inline]
    pub fn error_args(&mut self, args: fmt::Arguments<'_>) {
        self.log_args(LogLevel::Error, args);
    }

    #[inline]
    pub fn fatal_args(&mut self, args: fmt::Arguments<'_>) {
        self.log_args(LogLevel::Fatal, args);
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn style(&self) -> &StyleRegistry {
        &self.style
    }

    /// Whether lines carry the color prelude and reset sequence
    pub fn color_enabled(&self) -> bool {
        self.color_enabled
    }

    /// Whether closing this logger releases its sink
    pub fn owns_sink(&self) -> bool {
        self.sink.as_ref().is_some_and(Sink::is_owned)
    }

    /// Get the logger metrics
    ///
    /// ```
    /// use tinted_logger::prelude::*;
    ///
    /// let mut out: Vec<u8> = Vec::new();
    /// let mut logger = Logger::new(Sink::borrowed(&mut out), "m", StyleRegistry::default())?;
    /// logger.warning("disk at 91%");
    ///
    /// assert_eq!(logger.metrics().lines_written(), 1);
    /// assert_eq!(logger.metrics().write_failures(), 0);
    /// # Ok::<(), LoggerError>(())
    /// ```
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Kind of the most recent write the sink rejected, if any
    pub fn last_write_error(&self) -> Option<io::ErrorKind> {
        self.last_write_error
    }

    /// Flush the sink without closing it
    pub fn flush(&mut self) -> Result<()> {
        if let Some(sink) = self.sink.as_mut() {
            sink.flush()?;
        }
        Ok(())
    }

    /// Release the sink if this logger owns it, then the logger itself
    ///
    /// Borrowed streams and the console streams stay open for their owners.
    /// Dropping a logger does the same thing; `close` makes the point of
    /// release explicit.
    pub fn close(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        let Some(sink) = self.sink.take() else {
            return;
        };

        // Diagnostics go to stderr, which is pointless when stderr is the sink.
        let report = !sink.is_interactive();
        let name = sink.name();

        if let Err(e) = sink.release() {
            if report {
                eprintln!(
                    "[LOGGER ERROR] Failed to flush {} sink of logger '{}' during close: {}",
                    name, self.title, e
                );
            }
        }

        let failures = self.metrics.write_failures();
        if report && failures > 0 {
            eprintln!(
                "[LOGGER WARNING] Logger '{}' closing with {} failed writes (failure rate: {:.2}%)",
                self.title,
                failures,
                self.metrics.failure_rate()
            );
        }
    }
}

impl Logger<'static> {
    /// Logger on the process error stream with the built-in style
    pub fn with_default_style(title: &str) -> Result<Self> {
        Logger::new(Sink::stderr(), title, StyleRegistry::default())
    }

    /// Open `path` for writing and log into it
    ///
    /// The file is created or truncated, and is closed when the logger is.
    ///
    /// # Errors
    ///
    /// [`LoggerError::Open`] if the file cannot be opened for writing; no
    /// logger is created in that case.
    pub fn open(path: impl AsRef<Path>, title: &str, style: StyleRegistry) -> Result<Self> {
        Logger::new(Sink::file(path)?, title, style)
    }

    /// [`Logger::open`] with the built-in style
    pub fn open_default(path: impl AsRef<Path>, title: &str) -> Result<Self> {
        Logger::open(path, title, StyleRegistry::default())
    }
}

impl Drop for Logger<'_> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl fmt::Debug for Logger<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("title", &self.title)
            .field("sink", &self.sink)
            .field("color_enabled", &self.color_enabled)
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// Unset fields default to an empty title, the built-in style, the process
/// error stream and the local clock. Color defaults to on only when the sink
/// is the error stream.
pub struct LoggerBuilder<'a> {
    title: Title,
    style: StyleRegistry,
    sink: Option<Sink<'a>>,
    color: Option<bool>,
    time_source: Option<Box<dyn TimeSource>>,
}

impl<'a> LoggerBuilder<'a> {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            title: Title::new(),
            style: StyleRegistry::default(),
            sink: None,
            color: None,
            time_source: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn title(mut self, title: &str) -> Self {
        self.title = Title::from_str_truncated(title);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn style(mut self, style: StyleRegistry) -> Self {
        self.style = style;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn sink(mut self, sink: Sink<'a>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Force color on or off regardless of the sink
    #[must_use = "builder methods return a new value"]
    pub fn color(mut self, enabled: bool) -> Self {
        self.color = Some(enabled);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn time_source<T: TimeSource + 'static>(mut self, source: T) -> Self {
        self.time_source = Some(Box::new(source));
        self
    }

    /// Build the Logger
    pub fn build(self) -> Result<Logger<'a>> {
        let sink = self.sink.unwrap_or_default();
        let color_enabled = self.color.unwrap_or_else(|| sink.is_interactive());

        let mut line = Vec::<u8>::new();
        line.try_reserve_exact(MAX_LINE_LEN)
            .map_err(|e| LoggerError::allocation(MAX_LINE_LEN, e))?;

        Ok(Logger {
            title: self.title,
            style: self.style,
            sink: Some(sink),
            color_enabled,
            time_source: self.time_source.unwrap_or_else(|| Box::new(LocalClock)),
            line,
            metrics: LoggerMetrics::new(),
            last_write_error: None,
        })
    }
}

impl Default for LoggerBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::Color;
    use crate::core::render::MAX_TITLE_LEN;
    use crate::core::style::LevelConfig;
    use crate::core::timestamp::{FixedClock, Timestamp};
    use std::io::Write;

    fn noon() -> FixedClock {
        FixedClock(Timestamp::new(12, 0, 5).expect("valid timestamp"))
    }

    /// A writer that rejects every write
    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_builder_defaults() {
        let logger = Logger::builder().build().unwrap();
        assert_eq!(logger.title(), "");
        assert_eq!(logger.style(), &StyleRegistry::default());
        assert!(logger.color_enabled());
        assert!(!logger.owns_sink());
    }

    #[test]
    fn test_none_sink_means_stderr() {
        let logger = Logger::new(None, "t", StyleRegistry::default()).unwrap();
        assert!(logger.color_enabled());
        assert!(format!("{:?}", logger).contains("stderr"));
    }

    #[test]
    fn test_borrowed_sink_is_plain() {
        let mut out: Vec<u8> = Vec::new();
        let logger = Logger::new(Sink::borrowed(&mut out), "t", StyleRegistry::default()).unwrap();
        assert!(!logger.color_enabled());
    }

    #[test]
    fn test_color_override() {
        let logger = Logger::builder().sink(Sink::stderr()).color(false).build().unwrap();
        assert!(!logger.color_enabled());
    }

    #[test]
    fn test_title_truncated() {
        let long = "x".repeat(MAX_TITLE_LEN + 20);
        let logger = Logger::builder().title(&long).build().unwrap();
        assert_eq!(logger.title().len(), MAX_TITLE_LEN);
    }

    #[test]
    fn test_every_level_uses_its_tag() {
        let style = StyleRegistry::new(
            LevelConfig::plain("i"),
            LevelConfig::plain("w"),
            LevelConfig::plain("e"),
            LevelConfig::plain("f"),
        );
        let mut out: Vec<u8> = Vec::new();
        {
            let mut logger = Logger::builder()
                .title("svc")
                .style(style)
                .sink(Sink::borrowed(&mut out))
                .time_source(noon())
                .build()
                .unwrap();
            logger.info("a");
            logger.warning("b");
            logger.error("c");
            logger.fatal("d");
            logger.close();
        }
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "[svc]:[i]:[12:00:05]: a\n\
             [svc]:[w]:[12:00:05]: b\n\
             [svc]:[e]:[12:00:05]: c\n\
             [svc]:[f]:[12:00:05]: d\n"
        );
    }

    #[test]
    fn test_args_variants() {
        let mut out: Vec<u8> = Vec::new();
        {
            let mut logger = Logger::builder()
                .title("n")
                .sink(Sink::borrowed(&mut out))
                .time_source(noon())
                .build()
                .unwrap();
            logger.warning_args(format_args!("{} of {}", 1, 2));
            logger.error_args(format_args!("{:>4}", 7));
        }
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "[n]:[WARNING]:[12:00:05]: 1 of 2\n[n]:[ERROR]:[12:00:05]:    7\n"
        );
    }

    #[test]
    fn test_message_is_not_a_template() {
        let mut out: Vec<u8> = Vec::new();
        {
            let mut logger = Logger::builder()
                .sink(Sink::borrowed(&mut out))
                .time_source(noon())
                .build()
                .unwrap();
            logger.info("100% {done}");
        }
        assert!(String::from_utf8(out).unwrap().ends_with(": 100% {done}\n"));
    }

    #[test]
    fn test_forced_color_on_borrowed_sink() {
        let mut out: Vec<u8> = Vec::new();
        {
            let mut logger = Logger::builder()
                .title("c")
                .sink(Sink::borrowed(&mut out))
                .color(true)
                .time_source(noon())
                .build()
                .unwrap();
            logger.info("hi");
        }
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "\x1b[48;2;0;0;0;38;2;0;255;0m[c]:[INFO]:[12:00:05]: hi\x1b[0m\n"
        );
    }

    #[test]
    fn test_write_failure_is_recorded_not_raised() {
        let mut logger = Logger::builder()
            .sink(Sink::owned(FailingWriter))
            .build()
            .unwrap();
        logger.info("lost");
        logger.fatal("also lost");

        assert_eq!(logger.metrics().write_failures(), 2);
        assert_eq!(logger.metrics().lines_written(), 0);
        assert_eq!(logger.last_write_error(), Some(io::ErrorKind::BrokenPipe));
    }

    #[test]
    fn test_truncation_is_counted() {
        let mut out: Vec<u8> = Vec::new();
        let mut logger = Logger::new(Sink::borrowed(&mut out), "t", StyleRegistry::default()).unwrap();
        logger.info(&"z".repeat(1000));
        logger.info("short");
        assert_eq!(logger.metrics().truncations(), 1);
        assert_eq!(logger.metrics().lines_written(), 2);
    }

    #[test]
    fn test_owned_sink() {
        let logger = Logger::builder().sink(Sink::owned(Vec::<u8>::new())).build().unwrap();
        assert!(logger.owns_sink());
        assert!(!logger.color_enabled());
    }

    #[test]
    fn test_custom_colors_reach_prelude() {
        let style = StyleRegistry::new(
            LevelConfig::new("info", Color::new(0, 128, 0), Color::WHITE),
            LevelConfig::plain("warning"),
            LevelConfig::plain("error"),
            LevelConfig::plain("critical"),
        );
        let mut out: Vec<u8> = Vec::new();
        {
            let mut logger = Logger::builder()
                .style(style)
                .sink(Sink::borrowed(&mut out))
                .color(true)
                .build()
                .unwrap();
            logger.info("x");
        }
        assert!(out.starts_with(b"\x1b[48;2;0;128;0;38;2;255;255;255m[]:[info]:["));
    }
}
