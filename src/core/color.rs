//! 24-bit colors and the ANSI escape sequences built from them

use super::bounded::BoundedString;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Write;

/// Capacity of a rendered prelude
///
/// The longest possible prelude (`\x1b[48;2;255;255;255;38;2;255;255;255m`)
/// is 38 bytes, well inside this bound.
pub const MAX_PRELUDE_LEN: usize = 64;

/// SGR sequence that restores the terminal's default attributes
pub const RESET: &str = "\x1b[0m";

/// A truecolor value with one byte per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);
    pub const YELLOW: Color = Color::new(255, 255, 0);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from wide integers, clamping each channel to `0..=255`
    ///
    /// Out-of-range channels are clamped rather than rejected so that a bad
    /// value in a style file never prevents a logger from being built.
    ///
    /// ```
    /// use tinted_logger::Color;
    ///
    /// assert_eq!(Color::clamped(300, -4, 128), Color::new(255, 0, 128));
    /// ```
    #[must_use]
    pub const fn clamped(r: i64, g: i64, b: i64) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
        }
    }
}

const fn clamp_channel(v: i64) -> u8 {
    if v < 0 {
        0
    } else if v > u8::MAX as i64 {
        u8::MAX
    } else {
        v as u8
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct WideColor {
            r: i64,
            g: i64,
            b: i64,
        }

        let wide = WideColor::deserialize(deserializer)?;
        Ok(Color::clamped(wide.r, wide.g, wide.b))
    }
}

/// Render the truecolor prelude: background first, then foreground
///
/// Produces `ESC[48;2;{bg.r};{bg.g};{bg.b};38;2;{fg.r};{fg.g};{fg.b}m`.
#[must_use]
pub fn prelude(background: Color, foreground: Color) -> BoundedString<MAX_PRELUDE_LEN> {
    let mut out = BoundedString::new();
    // BoundedString never fails a write
    let _ = write!(
        out,
        "\x1b[48;2;{};{};{};38;2;{};{};{}m",
        background.r, background.g, background.b, foreground.r, foreground.g, foreground.b
    );
    out
}
