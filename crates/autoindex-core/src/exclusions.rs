//! Hidden-path filtering for change events
//!
//! Only the watcher consults this. A full pass still crawls hidden
//! directories and regenerates any barrel found inside them.

use std::path::{Component, Path};

/// Check if a path is hidden relative to the watched root.
///
/// Returns true if any component below `root` starts with '.'. Components of
/// `root` itself are ignored, so watching `./src` or `~/.config/app` works.
pub fn is_hidden_path(path: &Path, root: &Path) -> bool {
    let relative = path.strip_prefix(root).unwrap_or(path);

    relative.components().any(|component| match component {
        Component::Normal(name) => name.to_string_lossy().starts_with('.'),
        _ => false,
    })
}
