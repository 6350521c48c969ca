#![forbid(unsafe_code)]

//! Journal configuration.
//!
//! # Environment
//!
//! | Variable | Field | Expected |
//! |----------|-------|----------|
//! | `NAVJOURNAL_LOCALE` | `locale` | non-empty locale tag |
//! | `NAVJOURNAL_MENU_LIMIT` | `menu_display_limit` | positive integer |
//! | `NAVJOURNAL_MAX_DISPATCH_TURNS` | `max_dispatch_turns` | positive integer |
//!
//! Invalid values leave the default in place and are reported through
//! [`JournalConfig::from_env_with_diagnostics`].

use std::env;
use std::fmt;

use navjournal_i18n::DEFAULT_LOCALE;

const ENV_LOCALE: &str = "NAVJOURNAL_LOCALE";
const ENV_MENU_LIMIT: &str = "NAVJOURNAL_MENU_LIMIT";
const ENV_MAX_DISPATCH_TURNS: &str = "NAVJOURNAL_MAX_DISPATCH_TURNS";

/// Entries shown per direction in a journal drop-down.
pub const DEFAULT_MENU_DISPLAY_LIMIT: usize = 9;

/// Jobs one [`run_pending`](crate::NavigationService::run_pending) call may run.
pub const DEFAULT_MAX_DISPATCH_TURNS: usize = 10_000;

/// Per-host journal settings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct JournalConfig {
    /// Menu entries shown per direction. Storage is never truncated.
    pub menu_display_limit: usize,
    /// Locale used for placeholder labels.
    pub locale: String,
    /// Upper bound on deferred jobs drained by one pump.
    pub max_dispatch_turns: usize,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            menu_display_limit: DEFAULT_MENU_DISPLAY_LIMIT,
            locale: DEFAULT_LOCALE.to_string(),
            max_dispatch_turns: DEFAULT_MAX_DISPATCH_TURNS,
        }
    }
}

/// Config parse result with diagnostics.
#[derive(Debug, Clone)]
pub struct JournalConfigParse {
    pub config: JournalConfig,
    pub errors: Vec<ConfigError>,
}

/// Rejected environment value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub field: &'static str,
    pub value: String,
    pub message: &'static str,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} ({})", self.field, self.value, self.message)
    }
}

impl std::error::Error for ConfigError {}

impl JournalConfig {
    /// Create a config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-direction menu cap.
    #[must_use]
    pub fn with_menu_display_limit(mut self, limit: usize) -> Self {
        self.menu_display_limit = limit;
        self
    }

    /// Set the placeholder locale.
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Set the dispatcher turn budget.
    #[must_use]
    pub fn with_max_dispatch_turns(mut self, turns: usize) -> Self {
        self.max_dispatch_turns = turns;
        self
    }

    /// Menus showing every entry.
    #[must_use]
    pub fn unlimited_menu() -> Self {
        Self::default().with_menu_display_limit(usize::MAX)
    }

    /// Read overrides from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with_diagnostics().config
    }

    /// Read overrides from the process environment, keeping rejected values.
    #[must_use]
    pub fn from_env_with_diagnostics() -> JournalConfigParse {
        Self::from_env_with(|key| env::var(key).ok())
    }

    /// Read overrides through `get`.
    pub fn from_env_with<F>(mut get: F) -> JournalConfigParse
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut errors = Vec::new();

        if let Some(value) = get(ENV_LOCALE) {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                errors.push(ConfigError {
                    field: "locale",
                    value,
                    message: "expected a locale tag",
                });
            } else {
                config.locale = trimmed.to_string();
            }
        }

        if let Some(value) = get(ENV_MENU_LIMIT) {
            match parse_positive(&value) {
                Some(parsed) => config.menu_display_limit = parsed,
                None => errors.push(ConfigError {
                    field: "menu_display_limit",
                    value,
                    message: "expected positive integer",
                }),
            }
        }

        if let Some(value) = get(ENV_MAX_DISPATCH_TURNS) {
            match parse_positive(&value) {
                Some(parsed) => config.max_dispatch_turns = parsed,
                None => errors.push(ConfigError {
                    field: "max_dispatch_turns",
                    value,
                    message: "expected positive integer",
                }),
            }
        }

        JournalConfigParse { config, errors }
    }
}

fn parse_positive(value: &str) -> Option<usize> {
    value.trim().parse::<usize>().ok().filter(|v| *v > 0)
}
