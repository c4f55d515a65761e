use std::{env, path::PathBuf, process};

use clap::Parser;
use deskboard::cli::{CliParser, run_dashboard};
use deskboard::persistence::StoreConfig;
use log::error;

fn main() {
    // A .env next to the binary can set DESKBOARD_HOME.
    dotenvy::dotenv().ok();

    let args = CliParser::parse();

    let base_dir = args
        .home
        .or_else(|| env::var("DESKBOARD_HOME").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."));

    if let Err(message) = run_dashboard(StoreConfig::new(base_dir)) {
        error!("err: {}", message);
        eprintln!("err: {}", message);
        process::exit(1);
    }
}
