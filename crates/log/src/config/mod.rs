//! Logger configuration.
//!
//! [`LoggerOptions`] is a plain record with fluent setters; every field is
//! optional and falls back to a documented default inside the factory. The
//! callback fields are boxed so options stay `Send + Sync` and can cross
//! thread boundaries before the logger is built.

mod presets;

pub use presets::{ENV_MODE, ENV_SHOW_TIME};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::mode::PrintMode;

/// Predicate deciding whether a severity prints at all.
pub type ShouldPrint = Box<dyn Fn(PrintMode) -> bool + Send + Sync>;

/// Predicate deciding whether the timestamp segment is emitted.
pub type ShouldShowTime = Box<dyn Fn() -> bool + Send + Sync>;

/// Zero-argument formatter producing the timestamp segment.
pub type TimeFormat = Box<dyn Fn() -> String + Send + Sync>;

/// Maps a severity plus the assembled prefix segments to decorated segments.
pub type Colorize = Box<dyn Fn(PrintMode, &[String]) -> Vec<String> + Send + Sync>;

/// How prefix segments are decorated.
///
/// An explicit capability flag rather than runtime terminal sniffing:
/// callers whose output lands somewhere ANSI escapes are unwelcome (pipes,
/// CI logs, files) pick [`ColorMode::Plain`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    /// Decorate prefix segments with the default per-severity palette.
    #[default]
    Ansi,
    /// Pass prefix segments through unchanged.
    Plain,
}

/// Input record for the logger factory.
///
/// Absent fields fall back to: print everything, show the time, RFC 3339
/// timestamps, default palette under [`ColorMode::Ansi`]. Use
/// [`LoggerOptions::from_env`] for the environment-resolved defaults
/// instead.
pub struct LoggerOptions {
    /// Label prepended to every message, after the timestamp.
    pub prefix: Option<String>,
    /// Wrap a non-empty prefix in `[`…`]`. On by default.
    pub auto_wrap_prefix: bool,
    /// Decoration capability of the output destination.
    pub color_mode: ColorMode,
    pub should_print: Option<ShouldPrint>,
    pub should_show_time: Option<ShouldShowTime>,
    pub time_format: Option<TimeFormat>,
    pub colorize: Option<Colorize>,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            prefix: None,
            auto_wrap_prefix: true,
            color_mode: ColorMode::default(),
            should_print: None,
            should_show_time: None,
            time_format: None,
            colorize: None,
        }
    }
}

impl fmt::Debug for LoggerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Callback fields are opaque.
        f.debug_struct("LoggerOptions")
            .field("prefix", &self.prefix)
            .field("auto_wrap_prefix", &self.auto_wrap_prefix)
            .field("color_mode", &self.color_mode)
            .finish_non_exhaustive()
    }
}

impl LoggerOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub fn auto_wrap_prefix(mut self, wrap: bool) -> Self {
        self.auto_wrap_prefix = wrap;
        self
    }

    #[must_use]
    pub fn color_mode(mut self, mode: ColorMode) -> Self {
        self.color_mode = mode;
        self
    }

    #[must_use]
    pub fn should_print(mut self, f: impl Fn(PrintMode) -> bool + Send + Sync + 'static) -> Self {
        self.should_print = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn should_show_time(mut self, f: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        self.should_show_time = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn time_format(mut self, f: impl Fn() -> String + Send + Sync + 'static) -> Self {
        self.time_format = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn colorize(
        mut self,
        f: impl Fn(PrintMode, &[String]) -> Vec<String> + Send + Sync + 'static,
    ) -> Self {
        self.colorize = Some(Box::new(f));
        self
    }
}
