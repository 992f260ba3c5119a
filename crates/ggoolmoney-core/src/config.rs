//! Configuration types for ggoolmoney.
//!
//! [`Config::load`] reads `~/.config/ggoolmoney/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use crate::types::{SortConfig, SortDirection, SortKey};
use serde::Deserialize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[ledger]
# Leave unset to use $XDG_DATA_HOME/ggoolmoney
# data_dir = "/path/to/ledger"

[display]
currency_symbol = "₩"
show_memo       = true

[search]
default_sort_key       = "date"
default_sort_direction = "descending"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/ggoolmoney/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ledger: LedgerConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// `[ledger]` section of `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LedgerConfig {
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl LedgerConfig {
    /// Configured directory, or `$XDG_DATA_HOME/ggoolmoney`.
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(default_data_dir)
    }
}

/// `[display]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_show_memo")]
    pub show_memo: bool,
}

fn default_currency_symbol() -> String { "₩".to_string() }
fn default_show_memo() -> bool { true }

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            show_memo: default_show_memo(),
        }
    }
}

/// `[search]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_sort_key")]
    pub default_sort_key: SortKey,
    #[serde(default = "default_sort_direction")]
    pub default_sort_direction: SortDirection,
}

fn default_sort_key() -> SortKey { SortKey::Date }
fn default_sort_direction() -> SortDirection { SortDirection::Descending }

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_sort_key: default_sort_key(),
            default_sort_direction: default_sort_direction(),
        }
    }
}

impl SearchConfig {
    pub fn default_sort(&self) -> SortConfig {
        SortConfig {
            key: self.default_sort_key,
            direction: self.default_sort_direction,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/ggoolmoney/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn home_dir() -> PathBuf {
    PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
}

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
        .join("ggoolmoney")
        .join("config.toml")
}

fn default_data_dir() -> PathBuf {
    std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local").join("share"))
        .join("ggoolmoney")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
