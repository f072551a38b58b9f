//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigBackend, ConfigColorMode, ConfigSortOrder, default_data_path};

use super::commands::Commands;

/// Environment variable overriding the session data location
pub(crate) const DATA_ENV: &str = "POMOSTATS_DATA";

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub(crate) enum SortOrder {
    /// Oldest first
    Asc,
    /// Newest first (default)
    #[default]
    Desc,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub(crate) enum Backend {
    /// Pretty-printed JSON array (default)
    #[default]
    Json,
    /// SQLite database
    Sqlite,
}

#[derive(Parser)]
#[command(name = "pomostats")]
#[command(about = "Pomodoro session log with weekly, monthly and daily statistics", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Row order for the weekly table
    #[arg(short, long, global = true, value_enum, default_value = "desc")]
    pub(crate) order: SortOrder,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Session data file (defaults to the platform data directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) data: Option<PathBuf>,

    /// Storage backend for the data file
    #[arg(long, global = true, value_enum)]
    pub(crate) backend: Option<Backend>,

    /// Enable debug output (show processing details)
    #[arg(long, global = true)]
    pub(crate) debug: bool,

    /// Treat this date as today (YYYY-MM-DD)
    #[arg(long, global = true, hide = true, value_name = "DATE")]
    pub(crate) today: Option<String>,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // For boolean flags, config only applies if CLI is false (default)
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        // For enum values, only override if CLI is at default
        if let Some(order) = config.order
            && self.order == SortOrder::Desc
        {
            self.order = match order {
                ConfigSortOrder::Asc => SortOrder::Asc,
                ConfigSortOrder::Desc => SortOrder::Desc,
            };
        }

        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        if self.backend.is_none() {
            self.backend = config.backend.map(|b| match b {
                ConfigBackend::Json => Backend::Json,
                ConfigBackend::Sqlite => Backend::Sqlite,
            });
        }

        // Data path: CLI, then environment, then config file
        if self.data.is_none() {
            self.data = std::env::var_os(DATA_ENV)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .or_else(|| config.data_file.clone());
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }

    pub(crate) fn backend(&self) -> Backend {
        self.backend.unwrap_or_default()
    }

    pub(crate) fn data_path(&self) -> PathBuf {
        self.data
            .clone()
            .unwrap_or_else(|| default_data_path(self.backend()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pomostats").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
        assert_eq!(cli.order, SortOrder::Desc);
        assert_eq!(cli.backend(), Backend::Json);
        assert!(!cli.json);
    }

    #[test]
    fn config_fills_unset_values() {
        let config = Config {
            order: Some(ConfigSortOrder::Asc),
            color: Some(ConfigColorMode::Never),
            backend: Some(ConfigBackend::Sqlite),
            data_file: Some(PathBuf::from("/tmp/from-config.db")),
            debug: true,
            ..Default::default()
        };
        let cli = parse(&["--data", "/tmp/from-cli.db"]).with_config(&config);
        assert_eq!(cli.order, SortOrder::Asc);
        assert_eq!(cli.color, ColorMode::Never);
        assert_eq!(cli.backend(), Backend::Sqlite);
        assert_eq!(cli.data_path(), PathBuf::from("/tmp/from-cli.db"));
        assert!(cli.debug);
        assert!(!cli.use_color());
    }

    #[test]
    fn cli_backend_wins_over_config() {
        let config = Config {
            backend: Some(ConfigBackend::Sqlite),
            ..Default::default()
        };
        let cli = parse(&["--backend", "json"]).with_config(&config);
        assert_eq!(cli.backend(), Backend::Json);
    }

    #[test]
    fn no_color_disables_color() {
        let cli = parse(&["--color", "always", "--no-color"]);
        assert!(!cli.use_color());
        let cli = parse(&["--color", "always"]);
        assert!(cli.use_color());
    }
}
