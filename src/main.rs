// src/main.rs
use std::process::ExitCode;

use clap::Parser;

use sync_version::{app, cli};

fn main() -> ExitCode {
    let args = cli::Args::parse();
    match app::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
