// src/cli.rs
use clap::Parser;
use std::path::PathBuf;

/// Command-line interface. All flags are optional: with none given the
/// tool expects to run from a project root laid out as
/// `VERSION.txt` + `main/main.c`.
#[derive(Parser, Debug)]
#[command(
    name = "sync_version",
    version = crate::VERSION,
    about = "Copy the version from VERSION.txt into the LUCID_VERSION macro"
)]
pub struct Args {
    /// Project root containing VERSION.txt and main/main.c
    #[arg(long, default_value = ".")]
    pub project_root: PathBuf,

    /// Version file to read instead of <project-root>/VERSION.txt
    #[arg(long)]
    pub version_file: Option<PathBuf>,

    /// Source file to rewrite instead of <project-root>/main/main.c
    #[arg(long)]
    pub source_file: Option<PathBuf>,
}
