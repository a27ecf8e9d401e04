//! Line rendering
//!
//! A log line is assembled from up to three bounded pieces:
//!
//! - **prelude**: truecolor escape selecting the level's colors (color sinks only)
//! - **label**: `[title]:[tag]:[HH:MM:SS]: `
//! - **message**: the caller's formatted arguments
//!
//! Color sinks get `prelude + label + message + ESC[0m + '\n'`, every other
//! sink gets `label + message + '\n'`. Each piece is rendered into its own
//! fixed-capacity buffer, so the finished line has a hard upper size of
//! [`MAX_LINE_LEN`] bytes.

use super::bounded::BoundedString;
use super::color::{self, MAX_PRELUDE_LEN, RESET};
use super::style::LevelConfig;
use super::timestamp::Timestamp;
use std::fmt::{self, Write};

/// Maximum title length in bytes
pub const MAX_TITLE_LEN: usize = 64;

/// Maximum label length in bytes
pub const MAX_LABEL_LEN: usize = 64 + MAX_TITLE_LEN;

/// Maximum formatted message length in bytes
pub const MAX_MESSAGE_LEN: usize = 256;

/// Upper bound on a complete rendered line, newline included
pub const MAX_LINE_LEN: usize = MAX_PRELUDE_LEN + MAX_LABEL_LEN + MAX_MESSAGE_LEN + RESET.len() + 1;

pub type Title = BoundedString<MAX_TITLE_LEN>;
pub type Label = BoundedString<MAX_LABEL_LEN>;
pub type Message = BoundedString<MAX_MESSAGE_LEN>;

/// Render `[title]:[tag]:[HH:MM:SS]: `
pub fn render_label(title: &str, tag: &str, timestamp: Timestamp) -> Label {
    let mut label = Label::new();
    let _ = write!(label, "[{}]:[{}]:[{}]: ", title, tag, timestamp);
    label
}

/// Format the caller's arguments, keeping at most [`MAX_MESSAGE_LEN`] bytes
pub fn render_message(args: fmt::Arguments<'_>) -> Message {
    let mut message = Message::new();
    let _ = message.write_fmt(args);
    message
}

/// Outcome of rendering one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rendered {
    /// Bytes appended to the output buffer
    pub len: usize,
    /// Whether the label or message lost content to its bound
    pub truncated: bool,
}

/// Append one complete line to `out`
///
/// With `colored` set the line is wrapped in the level's prelude and the
/// reset sequence. At most [`MAX_LINE_LEN`] bytes are appended.
///
/// ```
/// use tinted_logger::core::render::render_line;
/// use tinted_logger::{LogLevel, StyleRegistry, Timestamp};
///
/// let style = StyleRegistry::default();
/// let ts = Timestamp::new(9, 30, 0).unwrap();
/// let mut out: Vec<u8> = Vec::new();
///
/// render_line(&mut out, style.get(LogLevel::Info), "app", ts, format_args!("{} ready", 3), false);
/// assert_eq!(out, b"[app]:[INFO]:[09:30:00]: 3 ready\n");
/// ```
pub fn render_line(
    out: &mut Vec<u8>,
    config: &LevelConfig,
    title: &str,
    timestamp: Timestamp,
    args: fmt::Arguments<'_>,
    colored: bool,
) -> Rendered {
    let start = out.len();
    let label = render_label(title, config.tag(), timestamp);
    let message = render_message(args);

    if colored {
        let prelude = color::prelude(config.background, config.foreground);
        out.extend_from_slice(prelude.as_bytes());
        out.extend_from_slice(label.as_bytes());
        out.extend_from_slice(message.as_bytes());
        out.extend_from_slice(RESET.as_bytes());
    } else {
        out.extend_from_slice(label.as_bytes());
        out.extend_from_slice(message.as_bytes());
    }
    out.push(b'\n');

    Rendered {
        len: out.len() - start,
        truncated: label.is_truncated() || message.is_truncated(),
    }
}
