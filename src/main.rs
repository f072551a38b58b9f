mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod output;
mod store;
mod utils;

use clap::Parser;

use cli::Cli;
use config::Config;
use utils::init_logging;

fn main() {
    // Load config file before parsing so CLI flags can override it
    let config = Config::load();
    let cli = Cli::parse().with_config(&config);

    init_logging(cli.debug);
    config.log_origin();

    if let Err(e) = app::run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
