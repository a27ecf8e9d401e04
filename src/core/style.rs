//! Per-level styles: tag text plus a background/foreground color pair
//!
//! A [`StyleRegistry`] always covers every [`LogLevel`]. It is either the
//! built-in [`DEFAULT_STYLE`] or a complete replacement supplied by the
//! caller; there is no way to patch a single level in place.

use super::bounded::BoundedString;
use super::color::Color;
use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Maximum tag length in bytes; longer tags are truncated
pub const MAX_TAG_LEN: usize = 32;

pub type Tag = BoundedString<MAX_TAG_LEN>;

/// Display settings for one severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    pub tag: Tag,
    pub background: Color,
    pub foreground: Color,
}

impl LevelConfig {
    #[must_use]
    pub const fn new(tag: &str, background: Color, foreground: Color) -> Self {
        Self {
            tag: Tag::from_str_truncated(tag),
            background,
            foreground,
        }
    }

    /// A config for sinks that never render color (files, pipes)
    ///
    /// The colors are black-on-black placeholders; they only show up if the
    /// logger is later bound to a color sink.
    #[must_use]
    pub const fn plain(tag: &str) -> Self {
        Self::new(tag, Color::BLACK, Color::BLACK)
    }

    #[inline]
    pub fn tag(&self) -> &str {
        self.tag.as_str()
    }
}

/// The built-in registry: green, yellow and red on black, then white on red
pub const DEFAULT_STYLE: StyleRegistry = StyleRegistry {
    levels: [
        LevelConfig::new("INFO", Color::BLACK, Color::GREEN),
        LevelConfig::new("WARNING", Color::BLACK, Color::YELLOW),
        LevelConfig::new("ERROR", Color::BLACK, Color::RED),
        LevelConfig::new("FATAL", Color::RED, Color::WHITE),
    ],
};

/// Complete mapping from level to [`LevelConfig`]
///
/// # Example
///
/// ```
/// use tinted_logger::{Color, LevelConfig, LogLevel, StyleRegistry};
///
/// let style = StyleRegistry::new(
///     LevelConfig::new("info", Color::new(0, 128, 0), Color::WHITE),
///     LevelConfig::new("warning", Color::new(128, 128, 0), Color::WHITE),
///     LevelConfig::new("error", Color::new(128, 0, 0), Color::WHITE),
///     LevelConfig::new("critical", Color::RED, Color::WHITE),
/// );
///
/// assert_eq!(style.get(LogLevel::Fatal).tag(), "critical");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StyleFile", into = "StyleFile")]
pub struct StyleRegistry {
    levels: [LevelConfig; 4],
}

impl StyleRegistry {
    /// Build a registry from one config per level
    ///
    /// An empty tag is replaced with the level's default name so that every
    /// label carries a non-empty tag.
    #[must_use]
    pub fn new(
        info: LevelConfig,
        warning: LevelConfig,
        error: LevelConfig,
        fatal: LevelConfig,
    ) -> Self {
        let mut levels = [info, warning, error, fatal];
        for (config, level) in levels.iter_mut().zip(LogLevel::ALL) {
            if config.tag.is_empty() {
                config.tag = Tag::from_str_truncated(level.to_str());
            }
        }
        Self { levels }
    }

    /// Config bound to `level`
    #[inline]
    pub fn get(&self, level: LogLevel) -> &LevelConfig {
        &self.levels[level.index()]
    }

    /// Iterate over `(level, config)` pairs in increasing severity
    pub fn iter(&self) -> impl Iterator<Item = (LogLevel, &LevelConfig)> {
        LogLevel::ALL.into_iter().zip(self.levels.iter())
    }

    /// Parse a registry from JSON
    ///
    /// All four levels must be present. Color channels outside `0..=255` are
    /// clamped and oversized tags are truncated.
    ///
    /// ```
    /// use tinted_logger::{Color, LogLevel, StyleRegistry};
    ///
    /// let style = StyleRegistry::from_json(r#"{
    ///     "info":    { "tag": "I", "background": {"r":0,"g":0,"b":0}, "foreground": {"r":0,"g":255,"b":0} },
    ///     "warning": { "tag": "W", "background": {"r":0,"g":0,"b":0}, "foreground": {"r":255,"g":255,"b":0} },
    ///     "error":   { "tag": "E", "background": {"r":0,"g":0,"b":0}, "foreground": {"r":255,"g":0,"b":0} },
    ///     "fatal":   { "tag": "F", "background": {"r":255,"g":0,"b":0}, "foreground": {"r":999,"g":255,"b":255} }
    /// }"#).unwrap();
    ///
    /// assert_eq!(style.get(LogLevel::Warning).tag(), "W");
    /// assert_eq!(style.get(LogLevel::Fatal).foreground, Color::WHITE);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON style file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::config(
                "StyleRegistry",
                format!("cannot read '{}': {}", path.display(), e),
            )
        })?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        DEFAULT_STYLE
    }
}

/// On-disk shape of a registry: one named entry per level
#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct StyleFile {
    info: LevelConfig,
    warning: LevelConfig,
    error: LevelConfig,
    fatal: LevelConfig,
}

impl From<StyleFile> for StyleRegistry {
    fn from(file: StyleFile) -> Self {
        StyleRegistry::new(file.info, file.warning, file.error, file.fatal)
    }
}

impl From<StyleRegistry> for StyleFile {
    fn from(style: StyleRegistry) -> Self {
        let [info, warning, error, fatal] = style.levels;
        StyleFile {
            info,
            warning,
            error,
            fatal,
        }
    }
}
