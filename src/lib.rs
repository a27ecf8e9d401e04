//! # Tinted Logger
//!
//! A small logger that writes severity-tagged, timestamped lines to the
//! terminal, a file, or any caller-supplied stream.
//!
//! ## Features
//!
//! - **Per-level styles**: each level has a tag and a 24-bit background and
//!   foreground color, rendered as an ANSI truecolor prelude on the terminal
//! - **Bounded rendering**: titles, tags and messages are truncated to fixed
//!   limits instead of failing
//! - **Explicit ownership**: a logger closes the files it opened and never
//!   the streams it was handed
//! - **Never fails the caller**: write errors are counted, not returned
//!
//! ## Wire format
//!
//! ```text
//! color sink:  ESC[48;2;R;G;B;38;2;R;G;Bm[title]:[TAG]:[HH:MM:SS]: message ESC[0m
//! other sinks: [title]:[TAG]:[HH:MM:SS]: message
//! ```

pub mod core;
pub mod macros;
pub mod sinks;
#[cfg(feature = "sync")]
pub mod sync;

pub mod prelude {
    pub use crate::core::{
        Color, FixedClock, LevelConfig, LocalClock, LogLevel, Logger, LoggerBuilder, LoggerError,
        LoggerMetrics, Result, StyleRegistry, TimeSource, Timestamp, DEFAULT_STYLE,
    };
    pub use crate::sinks::Sink;
    #[cfg(feature = "sync")]
    pub use crate::sync::SyncLogger;
}

pub use crate::core::{
    Color, FixedClock, LevelConfig, LocalClock, LogLevel, Logger, LoggerBuilder, LoggerError,
    LoggerMetrics, Result, StyleRegistry, TimeSource, Timestamp, DEFAULT_STYLE,
};
pub use sinks::Sink;
#[cfg(feature = "sync")]
pub use sync::SyncLogger;
