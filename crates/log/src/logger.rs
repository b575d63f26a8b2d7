//! Logger factory and handle.

use std::fmt::{self, Display};
use std::sync::Arc;

use crate::color;
use crate::config::{ColorMode, LoggerOptions};
use crate::console::{Console, StdConsole};
use crate::format;
use crate::mode::PrintMode;

/// Handle over the seven console print operations.
///
/// Construction decides everything up front: the prefix segments (optional
/// timestamp, then optional bracket-wrapped label) are assembled and
/// colorized once, and severities rejected by `should_print` become no-ops.
/// Invoking an operation only joins the frozen segments with the message and
/// hands them to the sink; a no-op accepts its message and discards it.
///
/// Handles are independent of each other and hold no mutable state.
pub struct Logger {
    channels: [Channel; 7],
    console: Arc<dyn Console>,
}

/// Per-severity binding: either inert, or the decorated prefix segments for
/// that severity.
enum Channel {
    Noop,
    Bound(Vec<String>),
}

/// Build a logger with environment-resolved defaults.
///
/// Shorthand for `Logger::new(LoggerOptions::from_env())`: printing is
/// enabled unless [`ENV_MODE`](crate::ENV_MODE) is `"production"`, and the
/// timestamp is shown unless [`ENV_SHOW_TIME`](crate::ENV_SHOW_TIME) is
/// `"false"`.
#[must_use]
pub fn create() -> Logger {
    Logger::new(LoggerOptions::from_env())
}

/// Build a logger from explicit options.
#[must_use]
pub fn create_with(options: LoggerOptions) -> Logger {
    Logger::new(options)
}

impl Logger {
    /// Build against the process stdout/stderr.
    ///
    /// Never fails; absent option fields fall back to printing everything
    /// with a timestamp and the default palette.
    #[must_use]
    pub fn new(options: LoggerOptions) -> Self {
        Self::with_console(options, Arc::new(StdConsole::new()))
    }

    /// Build against a caller-supplied sink.
    #[must_use]
    pub fn with_console(options: LoggerOptions, console: Arc<dyn Console>) -> Self {
        let LoggerOptions {
            prefix,
            auto_wrap_prefix,
            color_mode,
            should_print,
            should_show_time,
            time_format,
            colorize,
        } = options;

        let mut prefixes = Vec::new();
        if should_show_time.is_none_or(|f| f()) {
            prefixes.push(time_format.map_or_else(format::iso_timestamp, |f| f()));
        }
        if let Some(prefix) = prefix.filter(|p| !p.is_empty()) {
            prefixes.push(if auto_wrap_prefix {
                format!("[{prefix}]")
            } else {
                prefix
            });
        }

        let decorate = |mode: PrintMode| -> Vec<String> {
            // group_end never carries decoration.
            if mode == PrintMode::GroupEnd {
                return Vec::new();
            }
            match (&colorize, color_mode) {
                (Some(f), _) => f(mode, &prefixes),
                (None, ColorMode::Ansi) => color::colorize_ansi(mode, &prefixes),
                (None, ColorMode::Plain) => prefixes.clone(),
            }
        };

        let channels = PrintMode::ALL.map(|mode| {
            if should_print.as_ref().is_none_or(|f| f(mode)) {
                Channel::Bound(decorate(mode))
            } else {
                Channel::Noop
            }
        });

        Self { channels, console }
    }

    fn emit(&self, mode: PrintMode, message: &dyn Display) {
        if let Channel::Bound(prefixes) = &self.channels[mode.index()] {
            let mut parts = prefixes.clone();
            parts.push(message.to_string());
            self.console.print(mode, &parts);
        }
    }

    pub fn debug(&self, message: impl Display) {
        self.emit(PrintMode::Debug, &message);
    }

    pub fn error(&self, message: impl Display) {
        self.emit(PrintMode::Error, &message);
    }

    /// Print the message and open a nested output group.
    pub fn group(&self, message: impl Display) {
        self.emit(PrintMode::Group, &message);
    }

    /// Close the innermost output group. Prints nothing itself.
    pub fn group_end(&self) {
        if let Channel::Bound(_) = &self.channels[PrintMode::GroupEnd.index()] {
            self.console.print(PrintMode::GroupEnd, &[]);
        }
    }

    pub fn info(&self, message: impl Display) {
        self.emit(PrintMode::Info, &message);
    }

    pub fn log(&self, message: impl Display) {
        self.emit(PrintMode::Log, &message);
    }

    pub fn warn(&self, message: impl Display) {
        self.emit(PrintMode::Warn, &message);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::console::MemoryConsole;

    use super::*;

    fn quiet_time() -> LoggerOptions {
        LoggerOptions::default()
            .color_mode(ColorMode::Plain)
            .should_show_time(|| false)
    }

    #[test]
    fn empty_prefix_adds_no_segment() {
        let sink = Arc::new(MemoryConsole::new());
        let logger = Logger::with_console(quiet_time().prefix(""), sink.clone());
        logger.log("x");

        assert_eq!(sink.calls(), vec![(PrintMode::Log, vec!["x".to_string()])]);
    }

    #[test]
    fn wrap_can_be_disabled() {
        let sink = Arc::new(MemoryConsole::new());
        let logger = Logger::with_console(
            quiet_time().prefix("raw").auto_wrap_prefix(false),
            sink.clone(),
        );
        logger.info("m");

        assert_eq!(
            sink.calls(),
            vec![(PrintMode::Info, vec!["raw".to_string(), "m".to_string()])]
        );
    }

    #[test]
    fn custom_colorize_overrides_palette() {
        let sink = Arc::new(MemoryConsole::new());
        let logger = Logger::with_console(
            quiet_time()
                .prefix("app")
                .colorize(|mode, prefixes| {
                    prefixes.iter().map(|p| format!("<{mode}>{p}")).collect()
                }),
            sink.clone(),
        );
        logger.warn("w");

        assert_eq!(
            sink.calls(),
            vec![(
                PrintMode::Warn,
                vec!["<warn>[app]".to_string(), "w".to_string()]
            )]
        );
    }

    #[test]
    fn timestamp_is_frozen_at_construction() {
        let sink = Arc::new(MemoryConsole::new());
        let logger = Logger::with_console(
            LoggerOptions::default()
                .color_mode(ColorMode::Plain)
                .time_format(|| "T0".to_string()),
            sink.clone(),
        );
        logger.log("a");
        logger.log("b");

        let calls = sink.calls();
        assert_eq!(calls[0].1[0], "T0");
        assert_eq!(calls[1].1[0], "T0");
    }
}
