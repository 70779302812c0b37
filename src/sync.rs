// src/sync.rs
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::{NoExpand, Regex};

use crate::error::{Result, SyncError};

/// Macro whose quoted value carries the release version.
pub const VERSION_MACRO: &str = "LUCID_VERSION";

/// Result of a successful sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The definition's value changed and the file was rewritten.
    Updated,
    /// Every definition already carried the target version; no write.
    AlreadyCurrent,
}

fn macro_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&format!(r#"#define {VERSION_MACRO} "[^"]*""#)).unwrap())
}

/// Read and trim the version file. The content is used verbatim; no
/// semantic-version validation happens here.
pub fn read_version(path: &Path) -> Result<String> {
    let raw = fs::read_to_string(path).map_err(|source| SyncError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let version = raw.trim();
    if version.is_empty() {
        return Err(SyncError::EmptyVersion {
            path: path.to_path_buf(),
        });
    }
    Ok(version.to_owned())
}

/// Rewrite every `#define LUCID_VERSION "..."` value in `text` to
/// `version`, inserting the version literally. Returns `None` when the
/// text contains no definition at all.
pub fn apply_version(text: &str, version: &str) -> Option<String> {
    let re = macro_regex();
    if !re.is_match(text) {
        return None;
    }
    let replacement = format!("#define {VERSION_MACRO} \"{version}\"");
    Some(re.replace_all(text, NoExpand(&replacement)).into_owned())
}

/// Apply `version` to the source file at `path`, overwriting it in
/// place only when the text actually changes.
pub fn apply_to_file(path: &Path, version: &str) -> Result<SyncOutcome> {
    let text = fs::read_to_string(path).map_err(|source| SyncError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let Some(updated) = apply_version(&text, version) else {
        return Err(SyncError::PatternNotFound {
            path: path.to_path_buf(),
        });
    };
    if updated == text {
        return Ok(SyncOutcome::AlreadyCurrent);
    }
    fs::write(path, updated).map_err(|source| SyncError::WriteError {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(SyncOutcome::Updated)
}

/// Full sync: read the version file, then rewrite the source file.
pub fn sync(version_file: &Path, source_file: &Path) -> Result<SyncOutcome> {
    let version = read_version(version_file)?;
    apply_to_file(source_file, &version)
}
