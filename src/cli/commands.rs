//! CLI subcommand definitions

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Main CLI commands
#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show the rolling 7-day window and the selected day's timeline (default)
    Weekly(WeeklyArgs),
    /// Show the monthly heatmap of logged hours
    Monthly(MonthlyArgs),
    /// Show the session timeline of one day
    Timeline {
        /// Day to show (YYYY-MM-DD, defaults to today)
        date: Option<String>,
    },
    /// Log a new session
    Add(AddArgs),
    /// Export all sessions as pretty-printed JSON
    Export {
        /// Output file, or "-" for stdout (default: pomodoro_sessions_<today>.json)
        #[arg(long, value_name = "PATH")]
        output: Option<String>,
    },
    /// Replace all sessions with the contents of a JSON export
    Import {
        /// JSON file containing an array of sessions
        file: PathBuf,
    },
}

#[derive(Debug, Default, Args)]
pub(crate) struct WeeklyArgs {
    /// Day to select; the window becomes the week ending on the Sunday after it
    #[arg(short, long, value_name = "YYYY-MM-DD")]
    pub(crate) date: Option<String>,

    /// Last day of the window
    #[arg(short, long, value_name = "YYYY-MM-DD")]
    pub(crate) end: Option<String>,

    /// Move the window by this many days (negative goes back)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub(crate) shift: i64,
}

#[derive(Debug, Default, Args)]
pub(crate) struct MonthlyArgs {
    /// Month to show (defaults to the current month)
    #[arg(short, long, value_name = "YYYY-MM")]
    pub(crate) month: Option<String>,

    /// Move by this many months (negative goes back)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub(crate) shift: i32,
}

#[derive(Debug, Args)]
pub(crate) struct AddArgs {
    /// Session date (defaults to today)
    #[arg(short, long, value_name = "YYYY-MM-DD")]
    pub(crate) date: Option<String>,

    /// Start time (defaults to the duration before now)
    #[arg(short, long, value_name = "HH:MM", conflicts_with = "end")]
    pub(crate) start: Option<String>,

    /// End time; the start is derived from it and the duration
    #[arg(short, long, value_name = "HH:MM")]
    pub(crate) end: Option<String>,

    /// Duration in minutes
    #[arg(short = 'm', long, default_value_t = 25, value_parser = clap::value_parser!(u32).range(1..))]
    pub(crate) duration: u32,

    /// Quality rating from 1 to 10
    #[arg(short, long, value_parser = clap::value_parser!(i64).range(1..=10))]
    pub(crate) quality: Option<i64>,
}

/// The command to run; no subcommand means the weekly view
pub(crate) fn resolve_command(cmd: Option<Commands>) -> Commands {
    cmd.unwrap_or_else(|| Commands::Weekly(WeeklyArgs::default()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("pomostats").chain(args.iter().copied()))
    }

    #[test]
    fn no_subcommand_is_weekly() {
        let cli = parse(&[]).unwrap();
        assert!(matches!(
            resolve_command(cli.command),
            Commands::Weekly(WeeklyArgs { date: None, end: None, shift: 0 })
        ));
    }

    #[test]
    fn weekly_accepts_negative_shift() {
        let cli = parse(&["weekly", "--shift", "-3"]).unwrap();
        let Some(Commands::Weekly(args)) = cli.command else {
            panic!("expected weekly");
        };
        assert_eq!(args.shift, -3);
    }

    #[test]
    fn add_rejects_start_with_end() {
        assert!(parse(&["add", "--start", "09:00", "--end", "09:25"]).is_err());
    }

    #[test]
    fn add_quality_range() {
        assert!(parse(&["add", "--quality", "11"]).is_err());
        assert!(parse(&["add", "--quality", "0"]).is_err());
        let cli = parse(&["add", "-q", "7"]).unwrap();
        let Some(Commands::Add(args)) = cli.command else {
            panic!("expected add");
        };
        assert_eq!(args.quality, Some(7));
        assert_eq!(args.duration, 25);
    }

    #[test]
    fn add_rejects_zero_duration() {
        assert!(parse(&["add", "--duration", "0"]).is_err());
        assert!(parse(&["add", "-m", "50"]).is_ok());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["monthly", "--month", "2024-03", "--json"]).unwrap();
        assert!(cli.json);
    }
}
