//! Prefixed, timestamped, color-coded console logging.
//!
//! A thin formatting wrapper around the process stdout/stderr streams. The
//! factory takes a [`LoggerOptions`] and returns a [`Logger`] whose seven
//! print operations mirror the standard console surface (`debug`, `error`,
//! `group`, `group_end`, `info`, `log`, `warn`). Each operation is either
//! bound to the console sink with its decorated prefix segments, or inert.
//!
//! Everything is decided at construction: the prefix list (timestamp, then
//! bracket-wrapped label) is assembled and colorized once per logger, and
//! severities rejected by the `should_print` predicate become no-ops.
//! Invoking an operation only forwards the frozen segments plus the message.
//!
//! ```
//! use lumen_log::{LoggerOptions, create_with};
//!
//! let logger = create_with(LoggerOptions::default().prefix("api"));
//! logger.info("listening on 0.0.0.0:8080");
//! logger.warn("connection pool at capacity");
//! ```
//!
//! The factory never fails and output is fire-and-forget; write errors on
//! the underlying streams are discarded. Environment variables are read in
//! exactly one place, [`LoggerOptions::from_env`], so `Logger::new` itself
//! stays pure.

mod color;
mod config;
mod console;
mod format;
mod logger;
mod mode;

pub use color::colorize_ansi;
pub use config::{
    ColorMode, Colorize, ENV_MODE, ENV_SHOW_TIME, LoggerOptions, ShouldPrint, ShouldShowTime,
    TimeFormat,
};
pub use console::{Console, MemoryConsole, StdConsole, Target};
pub use format::iso_timestamp;
pub use logger::{Logger, create, create_with};
pub use mode::PrintMode;
