// src/config.rs
use std::path::PathBuf;

use crate::cli::Args;

/// Version file expected under the project root.
pub const VERSION_FILE: &str = "VERSION.txt";
/// Source file expected under the project root.
pub const SOURCE_FILE: &str = "main/main.c";

/// Resolved file paths for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub version_file: PathBuf,
    pub source_file: PathBuf,
}

impl Config {
    /// Resolve paths from CLI arguments. Explicit file overrides win;
    /// otherwise the fixed layout is joined onto the project root.
    pub fn from_args(args: &Args) -> Self {
        Self {
            version_file: args
                .version_file
                .clone()
                .unwrap_or_else(|| args.project_root.join(VERSION_FILE)),
            source_file: args
                .source_file
                .clone()
                .unwrap_or_else(|| args.project_root.join(SOURCE_FILE)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::Path;

    #[test]
    fn default_layout_joins_project_root() {
        let args = Args::parse_from(["sync_version", "--project-root", "/fw"]);
        let config = Config::from_args(&args);
        assert_eq!(config.version_file, Path::new("/fw/VERSION.txt"));
        assert_eq!(config.source_file, Path::new("/fw/main/main.c"));
    }

    #[test]
    fn explicit_files_override_layout() {
        let args = Args::parse_from([
            "sync_version",
            "--version-file",
            "/tmp/V.txt",
            "--source-file",
            "/tmp/app.c",
        ]);
        let config = Config::from_args(&args);
        assert_eq!(config.version_file, Path::new("/tmp/V.txt"));
        assert_eq!(config.source_file, Path::new("/tmp/app.c"));
    }
}
