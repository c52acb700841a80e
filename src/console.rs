//! # Print Side Channel
//!
//! The only output device of the machine. The print instruction hands the
//! console the register number it was given and the bytes of the
//! NUL-terminated string that register points at. Buffering and flushing are
//! the console's business, not the executor's.

use std::io::Write;

/// Receiver for text emitted by the print instruction.
///
/// Closures taking `(u8, &[u8])` are consoles too:
///
/// ```
/// use aurora_vm::Console;
///
/// let mut seen = Vec::new();
/// let mut console = |register: u8, text: &[u8]| seen.push((register, text.to_vec()));
/// console.print(2, b"ok");
/// drop(console);
/// assert_eq!(seen, vec![(2, b"ok".to_vec())]);
/// ```
pub trait Console {
    /// Emits `text` printed from register `register`.
    ///
    /// `text` excludes the terminating NUL and is not guaranteed to be UTF-8.
    fn print(&mut self, register: u8, text: &[u8]);
}

impl<F: FnMut(u8, &[u8])> Console for F {
    fn print(&mut self, register: u8, text: &[u8]) {
        self(register, text)
    }
}

/// Writes each print as a diagnostic line on stdout:
///
/// ```text
/// reg#0 has contents is `Hello World`
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn print(&mut self, register: u8, text: &[u8]) {
        let mut stdout = std::io::stdout().lock();
        // A closed stdout must not fault the machine
        if let Err(err) = writeln!(
            stdout,
            "reg#{} has contents is `{}`",
            register,
            String::from_utf8_lossy(text)
        ) {
            tracing::warn!(%err, "failed to write print output");
        }
    }
}

/// Collects printed strings in memory.
///
/// Invalid UTF-8 is replaced lossily.
///
/// # Examples
///
/// ```
/// use aurora_vm::{BufferConsole, Console};
///
/// let mut console = BufferConsole::new();
/// console.print(0, b"Hello World");
/// assert_eq!(console.lines(), ["Hello World"]);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BufferConsole {
    lines: Vec<String>,
}

impl BufferConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns everything printed so far, oldest first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Removes and returns everything printed so far.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl Console for BufferConsole {
    fn print(&mut self, _register: u8, text: &[u8]) {
        self.lines.push(String::from_utf8_lossy(text).into_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_console_collects_in_order() {
        let mut console = BufferConsole::new();
        console.print(0, b"first");
        console.print(7, b"second");

        assert_eq!(console.lines(), ["first", "second"]);
        assert_eq!(console.take(), vec!["first", "second"]);
        assert!(console.lines().is_empty());
    }

    #[test]
    fn test_buffer_console_lossy_utf8() {
        let mut console = BufferConsole::new();
        console.print(0, &[b'a', 0xFF, b'b']);

        assert_eq!(console.lines(), ["a\u{FFFD}b"]);
    }
}
