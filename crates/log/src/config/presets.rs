//! Option presets for common scenarios.

use super::{ColorMode, LoggerOptions};

/// Environment variable carrying the production signal. When set to
/// `"production"`, env-resolved defaults disable every severity.
pub const ENV_MODE: &str = "LUMEN_ENV";

/// Environment variable carrying the show-time override. Only an explicit
/// `"false"` suppresses the timestamp segment.
pub const ENV_SHOW_TIME: &str = "LUMEN_LOG_SHOW_TIME";

impl LoggerOptions {
    /// Resolve defaults from the process environment.
    ///
    /// This is the one place the crate reads environment variables; the
    /// observed values are frozen into explicit predicates here, and the
    /// factory itself stays pure.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_values(
            std::env::var(ENV_MODE).ok().as_deref(),
            std::env::var(ENV_SHOW_TIME).ok().as_deref(),
        )
    }

    /// Pure resolution step behind [`LoggerOptions::from_env`].
    pub(crate) fn from_env_values(mode: Option<&str>, show_time: Option<&str>) -> Self {
        let print_enabled = mode != Some("production");
        let time_enabled = show_time != Some("false");

        Self::default()
            .should_print(move |_| print_enabled)
            .should_show_time(move || time_enabled)
    }

    /// Development options: every severity on, timestamp on.
    #[must_use]
    pub fn development() -> Self {
        Self::default()
            .should_print(|_| true)
            .should_show_time(|| true)
    }

    /// Production options: every severity inert.
    #[must_use]
    pub fn production() -> Self {
        Self::default().should_print(|_| false)
    }

    /// Pipe-friendly options: no color, no timestamp.
    #[must_use]
    pub fn plain() -> Self {
        Self::default()
            .color_mode(ColorMode::Plain)
            .should_show_time(|| false)
    }
}
