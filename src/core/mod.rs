//! Core logger types

pub mod bounded;
pub mod color;
pub mod error;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod render;
pub mod style;
pub mod timestamp;

pub use bounded::BoundedString;
pub use color::{Color, MAX_PRELUDE_LEN, RESET};
pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use render::{MAX_LABEL_LEN, MAX_LINE_LEN, MAX_MESSAGE_LEN, MAX_TITLE_LEN};
pub use style::{LevelConfig, StyleRegistry, DEFAULT_STYLE, MAX_TAG_LEN};
pub use timestamp::{FixedClock, LocalClock, TimeSource, Timestamp};
