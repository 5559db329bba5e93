//! Recovery configuration read from the environment.

use once_cell::sync::Lazy;
use tracing::warn;

use crate::error::ConfigError;

/// Turns source recovery on or off (`on`/`off`). Defaults to on.
pub const RECOVERY_ENV: &str = "VERITY_SOURCE_RECOVERY";
/// Turns the parsed-file cache on or off (`on`/`off`). Defaults to on.
pub const CACHE_ENV: &str = "VERITY_SOURCE_CACHE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryMode {
    Enabled,
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecoveryConfig {
    pub mode: RecoveryMode,
    pub cache: bool,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            mode: RecoveryMode::Enabled,
            cache: true,
        }
    }
}

impl RecoveryConfig {
    /// Process-wide configuration, read from the environment on first use.
    ///
    /// Invalid values are reported with `tracing` and replaced by defaults.
    pub fn global() -> &'static Self {
        static CONFIG: Lazy<RecoveryConfig> = Lazy::new(RecoveryConfig::from_env_or_default);
        &CONFIG
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = lookup(RECOVERY_ENV) {
            config.mode = if parse_switch(RECOVERY_ENV, &value)? {
                RecoveryMode::Enabled
            } else {
                RecoveryMode::Disabled
            };
        }
        if let Some(value) = lookup(CACHE_ENV) {
            config.cache = parse_switch(CACHE_ENV, &value)?;
        }
        Ok(config)
    }

    fn from_env_or_default() -> Self {
        match Self::from_env() {
            Ok(config) => config,
            Err(err) => {
                warn!("{err}; using default source recovery settings");
                Self::default()
            }
        }
    }
}

fn parse_switch(name: &'static str, text: &str) -> Result<bool, ConfigError> {
    match text.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "1" | "yes" => Ok(true),
        "off" | "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidSwitch {
            name,
            value: text.into(),
        }),
    }
}
