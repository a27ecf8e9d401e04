//! Output sinks
//!
//! A [`Sink`] records both where lines go and who owns the destination. A
//! logger releases an [`Sink::Owned`] destination when it closes, and leaves
//! borrowed streams and the process console streams untouched.

pub mod console;
pub mod file;

pub use console::ConsoleStream;
pub use file::open_log_file;

use crate::core::Result;
use std::fmt;
use std::io::{self, Write};
use std::path::Path;

/// Destination of rendered log lines
pub enum Sink<'a> {
    /// A process-standard stream; never closed by the logger
    Console(ConsoleStream),
    /// A caller-owned stream; flushed but never closed by the logger
    Borrowed(&'a mut (dyn Write + Send)),
    /// A stream the logger owns and releases on close
    Owned(Box<dyn Write + Send>),
}

impl<'a> Sink<'a> {
    pub const fn stderr() -> Self {
        Sink::Console(ConsoleStream::Stderr)
    }

    pub const fn stdout() -> Self {
        Sink::Console(ConsoleStream::Stdout)
    }

    /// Borrow a caller-owned stream for the logger's lifetime
    pub fn borrowed<W: Write + Send>(writer: &'a mut W) -> Self {
        Sink::Borrowed(writer)
    }

    /// Hand a stream over to the logger
    pub fn owned<W: Write + Send + 'static>(writer: W) -> Self {
        Sink::Owned(Box::new(writer))
    }

    /// Open a file the logger will own
    pub fn file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Sink::owned(open_log_file(path)?))
    }

    /// Whether this sink is the interactive error stream
    ///
    /// Only this sink gets color by default.
    pub fn is_interactive(&self) -> bool {
        matches!(self, Sink::Console(ConsoleStream::Stderr))
    }

    /// Whether closing the logger releases this sink
    pub fn is_owned(&self) -> bool {
        matches!(self, Sink::Owned(_))
    }

    /// Write one complete line with a single `write_all`
    pub fn write_line(&mut self, line: &[u8]) -> io::Result<()> {
        match self {
            Sink::Console(stream) => stream.write_line(line),
            Sink::Borrowed(writer) => writer.write_all(line),
            Sink::Owned(writer) => writer.write_all(line),
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        match self {
            Sink::Console(stream) => stream.flush(),
            Sink::Borrowed(writer) => writer.flush(),
            Sink::Owned(writer) => writer.flush(),
        }
    }

    /// Flush, then release the destination if this sink owns it
    ///
    /// Borrowed and console streams stay open for their owners.
    pub fn release(mut self) -> io::Result<()> {
        let flushed = self.flush();
        // dropping an owned writer closes the underlying handle
        drop(self);
        flushed
    }

    pub fn name(&self) -> &'static str {
        match self {
            Sink::Console(stream) => stream.name(),
            Sink::Borrowed(_) => "borrowed",
            Sink::Owned(_) => "owned",
        }
    }
}

impl Default for Sink<'_> {
    /// The process error stream
    fn default() -> Self {
        Sink::stderr()
    }
}

impl fmt::Debug for Sink<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Sink").field(&self.name()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_stderr_is_interactive() {
        let mut buf: Vec<u8> = Vec::new();
        assert!(Sink::stderr().is_interactive());
        assert!(Sink::default().is_interactive());
        assert!(!Sink::stdout().is_interactive());
        assert!(!Sink::borrowed(&mut buf).is_interactive());
        assert!(!Sink::owned(Vec::<u8>::new()).is_interactive());
    }

    #[test]
    fn test_ownership() {
        let mut buf: Vec<u8> = Vec::new();
        assert!(Sink::owned(Vec::<u8>::new()).is_owned());
        assert!(!Sink::borrowed(&mut buf).is_owned());
        assert!(!Sink::stderr().is_owned());
    }

    #[test]
    fn test_borrowed_stream_survives_release() {
        let mut buf: Vec<u8> = Vec::new();
        {
            let mut sink = Sink::borrowed(&mut buf);
            sink.write_line(b"one\n").unwrap();
            sink.release().unwrap();
        }
        buf.extend_from_slice(b"two\n");
        assert_eq!(buf, b"one\ntwo\n");
    }

    #[test]
    fn test_debug_names_variant() {
        assert_eq!(format!("{:?}", Sink::stderr()), "Sink(\"stderr\")");
        assert_eq!(format!("{:?}", Sink::owned(Vec::<u8>::new())), "Sink(\"owned\")");
    }
}
