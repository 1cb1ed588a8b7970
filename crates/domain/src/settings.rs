//! User preference types.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Theme mode preference.
///
/// Persisted as a plain string under its own storage key, next to the
/// credential. No schema versioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light mode theme.
    Light,
    /// Dark mode theme (default).
    #[default]
    Dark,
    /// Follow system theme preference.
    System,
}

impl ThemeMode {
    /// Returns the string persisted to storage.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Returns true if dark mode should be used based on the preference.
    #[must_use]
    pub const fn is_dark(&self) -> bool {
        match self {
            Self::Light => false,
            // System defaults to dark until OS detection is wired up
            Self::Dark | Self::System => true,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            _ => Err(()),
        }
    }
}
