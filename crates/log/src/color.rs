//! Default severity palette.

use colored::Colorize as _;

use crate::mode::PrintMode;

/// Decorate prefix segments with the default per-severity colors.
///
/// The palette is a cosmetic default, not a contract: debug is yellow,
/// error red, group rendered on a gray background, info blue, log dimmed,
/// warn orange. `group_end` never carries segments so it passes through
/// untouched.
#[must_use]
pub fn colorize_ansi(mode: PrintMode, prefixes: &[String]) -> Vec<String> {
    prefixes.iter().map(|p| paint(mode, p)).collect()
}

fn paint(mode: PrintMode, text: &str) -> String {
    match mode {
        PrintMode::Debug => text.yellow().to_string(),
        PrintMode::Error => text.red().to_string(),
        PrintMode::Group => text.on_bright_black().to_string(),
        PrintMode::GroupEnd => text.to_string(),
        PrintMode::Info => text.blue().to_string(),
        PrintMode::Log => text.bright_black().to_string(),
        PrintMode::Warn => text.truecolor(255, 165, 0).to_string(),
    }
}
