//! Process-standard console streams

use std::io::{self, Write};

/// One of the process's standard output streams
///
/// The streams belong to the process, so a logger bound to one never closes
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleStream {
    Stderr,
    Stdout,
}

impl ConsoleStream {
    /// Write a complete line while holding the stream lock
    ///
    /// Holding the lock keeps the line from interleaving with other writers
    /// inside this process.
    pub fn write_line(&self, line: &[u8]) -> io::Result<()> {
        match self {
            ConsoleStream::Stderr => {
                let mut handle = io::stderr().lock();
                handle.write_all(line)
            }
            ConsoleStream::Stdout => {
                let mut handle = io::stdout().lock();
                handle.write_all(line)?;
                handle.flush()
            }
        }
    }

    pub fn flush(&self) -> io::Result<()> {
        match self {
            ConsoleStream::Stderr => io::stderr().flush(),
            ConsoleStream::Stdout => io::stdout().flush(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ConsoleStream::Stderr => "stderr",
            ConsoleStream::Stdout => "stdout",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_line_to_console() {
        assert!(ConsoleStream::Stderr.write_line(b"console sink test\n").is_ok());
        assert!(ConsoleStream::Stdout.write_line(b"console sink test\n").is_ok());
    }

    #[test]
    fn test_names() {
        assert_eq!(ConsoleStream::Stderr.name(), "stderr");
        assert_eq!(ConsoleStream::Stdout.name(), "stdout");
    }
}
