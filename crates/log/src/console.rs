//! Console sinks.
//!
//! The logger hands every enabled call to a [`Console`] as a fully decorated
//! argument list; the sink decides how the parts reach the outside world.
//! [`StdConsole`] is the real one. [`MemoryConsole`] records calls so tests
//! (this crate's and downstream ones) can assert on exactly what a logger
//! forwarded, including the absence of output.

use std::io::Write as _;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use crate::mode::PrintMode;

/// Stream a severity is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Stdout,
    Stderr,
}

impl Target {
    /// Stream the platform console uses for this severity: diagnostics
    /// (`error`, `warn`) go to stderr, everything else to stdout.
    #[must_use]
    pub fn for_mode(mode: PrintMode) -> Self {
        match mode {
            PrintMode::Error | PrintMode::Warn => Self::Stderr,
            _ => Self::Stdout,
        }
    }
}

/// Sink receiving fully decorated argument lists.
///
/// Output is fire-and-forget: implementations are expected to swallow write
/// failures, and callers never observe them.
pub trait Console: Send + Sync {
    fn print(&self, mode: PrintMode, parts: &[String]);
}

/// Sink writing to the process stdout/stderr.
///
/// Mirrors the platform console's grouping behavior: `group` indents
/// subsequent lines by two spaces per open group, `group_end` closes the
/// innermost group and prints nothing. The indent counter is the sink's
/// state, not the logger's, so independent loggers sharing one sink share
/// the grouping level the way they would share a real console.
#[derive(Debug, Default)]
pub struct StdConsole {
    indent: AtomicUsize,
}

impl StdConsole {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn write_line(&self, target: Target, parts: &[String]) {
        let pad = "  ".repeat(self.indent.load(Ordering::Relaxed));
        let line = parts.join(" ");
        match target {
            Target::Stdout => {
                let _ = writeln!(std::io::stdout().lock(), "{pad}{line}");
            }
            Target::Stderr => {
                let _ = writeln!(std::io::stderr().lock(), "{pad}{line}");
            }
        }
    }
}

impl Console for StdConsole {
    fn print(&self, mode: PrintMode, parts: &[String]) {
        match mode {
            PrintMode::GroupEnd => {
                // Closing a group prints nothing; the level saturates at 0.
                let _ = self
                    .indent
                    .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_sub(1));
            }
            PrintMode::Group => {
                self.write_line(Target::for_mode(mode), parts);
                self.indent.fetch_add(1, Ordering::Relaxed);
            }
            _ => self.write_line(Target::for_mode(mode), parts),
        }
    }
}

/// Sink capturing calls in memory, in arrival order.
#[derive(Debug, Default)]
pub struct MemoryConsole {
    calls: Mutex<Vec<(PrintMode, Vec<String>)>>,
}

impl MemoryConsole {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded `(severity, forwarded parts)` pairs.
    #[must_use]
    pub fn calls(&self) -> Vec<(PrintMode, Vec<String>)> {
        self.calls.lock().clone()
    }
}

impl Console for MemoryConsole {
    fn print(&self, mode: PrintMode, parts: &[String]) {
        self.calls.lock().push((mode, parts.to_vec()));
    }
}
