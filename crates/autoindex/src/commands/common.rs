//! Common utilities and constants for CLI commands

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Printed when no root directory is given.
pub const USAGE: &str = "USAGE: autoindex <dirPath> [--watch]";

/// Resolves a path to an absolute root directory.
/// If the path is relative, it's joined with the current directory.
pub fn resolve_root(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}
