pub(crate) mod args;
pub(crate) mod commands;

pub(crate) use args::{Backend, Cli, SortOrder};
pub(crate) use commands::{AddArgs, Commands, MonthlyArgs, WeeklyArgs, resolve_command};
