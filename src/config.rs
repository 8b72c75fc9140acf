//! Configuration for the terminal host
//!
//! Configuration is loaded in order of precedence:
//! 1. CLI flags (highest priority, applied in main)
//! 2. Config file (~/.config/termdeck/config.toml)
//! 3. Built-in defaults (lowest priority)
//!
//! A missing config file is not an error - defaults apply.

use crate::sink::Rgb;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_TICK_MS: u64 = 50;
const DEFAULT_FOREGROUND: &str = "#00FF41";
const DEFAULT_LOG_FILTER: &str = "info";

/// Effective host configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Refresh tick interval in milliseconds
    pub tick_ms: u64,

    /// Foreground color of the display, `#RRGGBB`
    pub foreground: String,

    /// Directory for log files
    pub log_dir: PathBuf,

    /// Default tracing filter (overridden by `RUST_LOG`)
    pub log_filter: String,
}

/// Raw config file shape - every field optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    tick_ms: Option<u64>,
    foreground: Option<String>,
    log_dir: Option<PathBuf>,
    log_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            foreground: DEFAULT_FOREGROUND.to_string(),
            log_dir: default_log_dir(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Default config file location, platform dependent.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("termdeck").join("config.toml"))
    }

    /// Load from `path` (or the default location), falling back to defaults
    /// when the file does not exist. A malformed file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let file: FileConfig = toml::from_str(&raw)
            .with_context(|| format!("invalid config at {}", path.display()))?;

        let defaults = Self::default();
        Ok(Self {
            tick_ms: file.tick_ms.unwrap_or(defaults.tick_ms),
            foreground: file.foreground.unwrap_or(defaults.foreground),
            log_dir: file.log_dir.unwrap_or(defaults.log_dir),
            log_filter: file.log_filter.unwrap_or(defaults.log_filter),
        })
    }

    /// Parsed foreground color; falls back to the default green on a
    /// malformed value.
    pub fn foreground_rgb(&self) -> Rgb {
        parse_hex(&self.foreground).unwrap_or_else(|| {
            warn!(value = %self.foreground, "invalid foreground color, using default");
            parse_hex(DEFAULT_FOREGROUND).unwrap_or((0, 255, 65))
        })
    }
}

fn default_log_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("termdeck").join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

/// Parse `#RRGGBB` (leading `#` optional).
fn parse_hex(value: &str) -> Option<Rgb> {
    let hex = value.trim().trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}
