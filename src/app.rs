// src/app.rs
use crate::cli::Args;
use crate::config::Config;
use crate::error::Result;
use crate::sync::{self, SyncOutcome};

/// Run one sync against the resolved paths, reporting progress on stdout.
pub fn run(args: &Args) -> Result<()> {
    let config = Config::from_args(args);

    let version = sync::read_version(&config.version_file)?;
    println!("Updating version to: {version}");

    match sync::apply_to_file(&config.source_file, &version)? {
        SyncOutcome::Updated => {
            println!("Updated {}", config.source_file.display());
        }
        SyncOutcome::AlreadyCurrent => {
            println!("{} already at {version}", config.source_file.display());
        }
    }
    Ok(())
}
