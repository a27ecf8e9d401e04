//! Fixed-capacity string buffers
//!
//! Every piece of text the logger renders (title, tag, prelude, label and
//! message) goes through a [`BoundedString`]. The buffer lives inline, never
//! reallocates, and silently drops whatever does not fit. Rendering therefore
//! cannot overrun its destination or fail on oversized input.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An inline UTF-8 buffer holding at most `N` bytes
///
/// Writes past the capacity are truncated on a character boundary and mark
/// the buffer as truncated. For ASCII input the retained prefix is exactly
/// `N` bytes long.
///
/// # Examples
///
/// ```
/// use std::fmt::Write;
/// use tinted_logger::core::BoundedString;
///
/// let mut buf = BoundedString::<8>::new();
/// write!(buf, "{}-{}", "abcd", 12345).unwrap();
///
/// assert_eq!(buf.as_str(), "abcd-123");
/// assert!(buf.is_truncated());
/// ```
#[derive(Clone, Copy)]
pub struct BoundedString<const N: usize> {
    buf: [u8; N],
    len: usize,
    truncated: bool,
}

/// Length of the longest prefix of `bytes` no longer than `max` that ends on
/// a UTF-8 character boundary.
const fn boundary_at_most(bytes: &[u8], max: usize) -> usize {
    if bytes.len() <= max {
        return bytes.len();
    }
    let mut end = max;
    // continuation bytes are 0b10xx_xxxx
    while end > 0 && (bytes[end] & 0xC0) == 0x80 {
        end -= 1;
    }
    end
}

impl<const N: usize> BoundedString<N> {
    pub const CAPACITY: usize = N;

    /// Create an empty buffer
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buf: [0; N],
            len: 0,
            truncated: false,
        }
    }

    /// Create a buffer from `s`, truncating it to the capacity
    ///
    /// Usable in constant context, which is how the built-in style tags are
    /// defined.
    #[must_use]
    pub const fn from_str_truncated(s: &str) -> Self {
        let bytes = s.as_bytes();
        let len = boundary_at_most(bytes, N);
        let mut buf = [0; N];
        let mut i = 0;
        while i < len {
            buf[i] = bytes[i];
            i += 1;
        }
        Self {
            buf,
            len,
            truncated: len < bytes.len(),
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        // Only whole characters are ever copied in, so this cannot fail.
        std::str::from_utf8(&self.buf[..self.len]).unwrap_or_default()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether any input was dropped to fit the capacity
    #[inline]
    pub const fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Remaining free bytes
    #[inline]
    pub const fn remaining(&self) -> usize {
        N - self.len
    }

    pub fn clear(&mut self) {
        self.len = 0;
        self.truncated = false;
    }

    /// Append as much of `s` as fits
    ///
    /// Once the buffer has truncated, later appends are dropped too so the
    /// output never skips a piece and resumes with a later one.
    pub fn push_str(&mut self, s: &str) {
        if self.truncated {
            return;
        }
        let take = boundary_at_most(s.as_bytes(), self.remaining());
        self.buf[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;
        if take < s.len() {
            self.truncated = true;
        }
    }
}

impl<const N: usize> Default for BoundedString<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Write for BoundedString<N> {
    /// Never reports an error: overflow truncates instead
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}

impl<const N: usize> fmt::Display for BoundedString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<const N: usize> fmt::Debug for BoundedString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl<const N: usize> PartialEq for BoundedString<N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> Eq for BoundedString<N> {}

impl<const N: usize> PartialEq<str> for BoundedString<N> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<const N: usize> PartialEq<&str> for BoundedString<N> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl<const N: usize> From<&str> for BoundedString<N> {
    fn from(s: &str) -> Self {
        Self::from_str_truncated(s)
    }
}

impl<const N: usize> Serialize for BoundedString<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de, const N: usize> Deserialize<'de> for BoundedString<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_str_truncated(&s))
    }
}
