mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod output;
mod source;
mod utils;

use clap::Parser;

use cli::Cli;
use config::Config;

fn main() {
    let cli = Cli::parse().with_config(&Config::load());
    if let Err(e) = app::run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
