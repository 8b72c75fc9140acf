// CLI module - command-line argument parsing
//
// Flags override the config file, which overrides built-in defaults.

use crate::config::VERSION;
use clap::Parser;
use std::path::PathBuf;

/// termdeck - fixed-width terminal with pluggable screens
#[derive(Parser, Debug)]
#[command(name = "termdeck")]
#[command(version = VERSION)]
#[command(about = "Fixed-width in-world terminal with pluggable screens", long_about = None)]
pub struct Cli {
    /// Path to the config file (default: ~/.config/termdeck/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Refresh tick interval in milliseconds
    #[arg(long)]
    pub tick_ms: Option<u64>,

    /// Tracing filter, e.g. "debug" or "termdeck=trace"
    #[arg(long)]
    pub log_filter: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_parse() {
        let cli = Cli::parse_from(["termdeck", "--tick-ms", "100", "-c", "/tmp/t.toml"]);
        assert_eq!(cli.tick_ms, Some(100));
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("/tmp/t.toml")));
        assert!(cli.log_filter.is_none());
    }
}
