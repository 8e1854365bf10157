mod args;
mod cli;
#[cfg(feature = "tui")]
mod tui;

use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = args::Args::parse().unwrap_or_else(|e| e.exit());
    if let Err(e) = cli::run(args) {
        eprintln!("{}", e);
        process::exit(1);
    }
}
