//! Print severities mirroring the standard console surface.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the seven console print operations.
///
/// `GroupEnd` is the odd one out: it closes the innermost group, carries no
/// message and never receives prefix decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrintMode {
    Debug,
    Error,
    Group,
    GroupEnd,
    Info,
    Log,
    Warn,
}

impl PrintMode {
    /// All severities, in the order the per-severity channel table uses.
    pub const ALL: [Self; 7] = [
        Self::Debug,
        Self::Error,
        Self::Group,
        Self::GroupEnd,
        Self::Info,
        Self::Log,
        Self::Warn,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Error => "error",
            Self::Group => "group",
            Self::GroupEnd => "group_end",
            Self::Info => "info",
            Self::Log => "log",
            Self::Warn => "warn",
        }
    }

    /// Position in the channel table. Must agree with [`Self::ALL`].
    pub(crate) fn index(self) -> usize {
        match self {
            Self::Debug => 0,
            Self::Error => 1,
            Self::Group => 2,
            Self::GroupEnd => 3,
            Self::Info => 4,
            Self::Log => 5,
            Self::Warn => 6,
        }
    }
}

impl fmt::Display for PrintMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
