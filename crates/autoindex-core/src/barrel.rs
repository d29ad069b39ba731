//! Barrel content generation
//!
//! Given a marker file, list its directory once and render the import and
//! export blocks for every sibling module. Output is a pure function of the
//! listing, so an unchanged directory always renders the same bytes.

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::error::{AutoindexError, Result};
use crate::extension::{MARKER_STEM, ModuleExtension, stem_of};
use crate::identifier::derive_identifier;

/// First line of every generated barrel.
pub const GENERATED_HEADER: &str = "/* WARNING: this file is generated! */";

/// A module next to a barrel file that the barrel re-exports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiblingModule {
    /// File stem, used as the relative import path.
    pub name: String,
    /// Namespace the module is imported as.
    pub identifier: String,
}

impl SiblingModule {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let identifier = derive_identifier(&name);
        Self { name, identifier }
    }
}

/// Compute the full text `marker` must contain.
pub async fn generate_barrel(marker: &Path) -> Result<String> {
    let dir = marker_dir(marker);
    let listing = list_dir(&dir).await?;

    if !listing
        .iter()
        .any(|(name, _)| name.starts_with(MARKER_STEM))
    {
        return Err(AutoindexError::MarkerNotFound { dir });
    }

    Ok(render_barrel(&sibling_modules(&listing)))
}

/// Pick the sibling modules out of a directory listing, keeping listing order.
///
/// Each item is `(file name, is directory)`.
pub fn sibling_modules(listing: &[(String, bool)]) -> Vec<SiblingModule> {
    listing
        .iter()
        .filter(|(_, is_dir)| !is_dir)
        .filter_map(|(name, _)| {
            let path = Path::new(name);
            ModuleExtension::from_path(path)?;
            match stem_of(path) {
                Some(stem) if stem != MARKER_STEM => Some(SiblingModule::new(stem)),
                _ => None,
            }
        })
        .collect()
}

/// Render the barrel text for an ordered set of modules.
pub fn render_barrel(modules: &[SiblingModule]) -> String {
    let mut blocks = vec![GENERATED_HEADER.to_string()];

    if !modules.is_empty() {
        let imports: Vec<String> = modules
            .iter()
            .map(|m| format!("import * as {} from \"./{}\"", m.identifier, m.name))
            .collect();
        blocks.push(imports.join("\n"));
    }

    let mut exports = String::from("export {\n");
    for module in modules {
        exports.push('\t');
        exports.push_str(&module.identifier);
        exports.push_str(",\n");
    }
    exports.push('}');
    blocks.push(exports);

    blocks.join("\n\n") + "\n"
}

fn marker_dir(marker: &Path) -> PathBuf {
    match marker.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

async fn list_dir(dir: &Path) -> Result<Vec<(String, bool)>> {
    let mut read_dir = fs::read_dir(dir)
        .await
        .map_err(|e| AutoindexError::io(dir, e))?;

    let mut listing = Vec::new();
    while let Some(entry) = read_dir
        .next_entry()
        .await
        .map_err(|e| AutoindexError::io(dir, e))?
    {
        let is_dir = entry
            .file_type()
            .await
            .map(|t| t.is_dir())
            .unwrap_or(false);
        listing.push((entry.file_name().to_string_lossy().into_owned(), is_dir));
    }

    Ok(listing)
}
