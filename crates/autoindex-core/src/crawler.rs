//! Breadth-first directory traversal
//!
//! The crawler walks a tree with an explicit FIFO worklist instead of
//! recursion. A path whose metadata or listing cannot be read is logged and
//! skipped; the rest of the tree is still visited.

use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Folder,
}

/// A snapshot of one path seen during a traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilesystemEntry {
    pub kind: EntryKind,
    pub path: PathBuf,
}

impl FilesystemEntry {
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    pub fn is_folder(&self) -> bool {
        self.kind == EntryKind::Folder
    }
}

/// Lazy breadth-first walk over a directory tree.
///
/// Hidden entries are not filtered here; that happens at the change-event
/// layer only.
pub struct Crawler {
    queue: VecDeque<PathBuf>,
    expanded: HashSet<PathBuf>,
}

impl Crawler {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(root.into());
        Self {
            queue,
            expanded: HashSet::new(),
        }
    }

    /// Advance the walk, returning `None` once the worklist is drained.
    pub async fn next_entry(&mut self) -> Option<FilesystemEntry> {
        while let Some(path) = self.queue.pop_front() {
            let metadata = match fs::metadata(&path).await {
                Ok(metadata) => metadata,
                Err(e) => {
                    warn!("Error reading {}: {}", path.display(), e);
                    continue;
                }
            };

            if metadata.is_dir() {
                self.expand(&path).await;
                return Some(FilesystemEntry {
                    kind: EntryKind::Folder,
                    path,
                });
            }

            if metadata.is_file() {
                return Some(FilesystemEntry {
                    kind: EntryKind::File,
                    path,
                });
            }
        }

        None
    }

    async fn expand(&mut self, dir: &Path) {
        // Symlinked folders can loop back onto an ancestor.
        let canonical = fs::canonicalize(dir)
            .await
            .unwrap_or_else(|_| dir.to_path_buf());
        if !self.expanded.insert(canonical) {
            debug!("Already expanded {}, not descending again", dir.display());
            return;
        }

        let mut read_dir = match fs::read_dir(dir).await {
            Ok(read_dir) => read_dir,
            Err(e) => {
                warn!("Error reading contents of {}: {}", dir.display(), e);
                return;
            }
        };

        loop {
            match read_dir.next_entry().await {
                Ok(Some(child)) => self.queue.push_back(dir.join(child.file_name())),
                Ok(None) => break,
                Err(e) => {
                    warn!("Error reading contents of {}: {}", dir.display(), e);
                    break;
                }
            }
        }
    }
}
