//! One full regeneration pass over a root directory.

use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::task::JoinSet;
use tracing::{debug, error, info};

use crate::barrel::generate_barrel;
use crate::error::{AutoindexError, Result};
use crate::marker::find_marker_files;

/// Outcome of one pass. Failures are per marker; a pass itself never fails.
#[derive(Debug, Default)]
pub struct PassReport {
    pub written: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, AutoindexError)>,
    /// Regeneration tasks that panicked before reporting their marker.
    pub panicked: usize,
}

impl PassReport {
    pub fn is_clean(&self) -> bool {
        self.failure_count() == 0
    }

    pub fn failure_count(&self) -> usize {
        self.failed.len() + self.panicked
    }

    /// Markers attempted in this pass, successful or not.
    pub fn attempted(&self) -> usize {
        self.written.len() + self.failure_count()
    }
}

/// Locate every barrel under `root` and rewrite them all concurrently.
///
/// Every marker settles before this returns; one failing marker does not
/// stop the others.
pub async fn run_pass(root: &Path) -> PassReport {
    let markers = find_marker_files(root).await;
    debug!("Found {} autoindex files under {}", markers.len(), root.display());

    let mut tasks = JoinSet::new();
    for marker in markers {
        tasks.spawn(async move {
            let outcome = regenerate(&marker).await;
            (marker, outcome)
        });
    }

    let mut report = PassReport::default();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((marker, Ok(()))) => {
                info!("{}", marker.display());
                report.written.push(marker);
            }
            Ok((marker, Err(e))) => {
                error!("Failed to regenerate {}: {}", marker.display(), e);
                report.failed.push((marker, e));
            }
            Err(e) => {
                error!("Regeneration task panicked: {}", e);
                report.panicked += 1;
            }
        }
    }

    report
}

/// Recompute and overwrite a single barrel file.
pub async fn regenerate(marker: &Path) -> Result<()> {
    let contents = generate_barrel(marker).await?;
    fs::write(marker, contents)
        .await
        .map_err(|e| AutoindexError::io(marker, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_run_pass_writes_every_marker() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        std_fs::create_dir(root.join("a")).unwrap();
        std_fs::write(root.join("autoindex.ts"), "").unwrap();
        std_fs::write(root.join("main.ts"), "").unwrap();
        std_fs::write(root.join("a/autoindex.js"), "").unwrap();
        std_fs::write(root.join("a/helper.js"), "").unwrap();

        let report = run_pass(root).await;

        assert!(report.is_clean());
        assert_eq!(report.written.len(), 2);
        let top = std_fs::read_to_string(root.join("autoindex.ts")).unwrap();
        assert!(top.contains("import * as main from \"./main\""));
        let nested = std_fs::read_to_string(root.join("a/autoindex.js")).unwrap();
        assert!(nested.contains("import * as helper from \"./helper\""));
    }

    #[test]
    fn test_panicked_tasks_count_as_failures() {
        let report = PassReport {
            written: vec![PathBuf::from("a/autoindex.ts")],
            panicked: 1,
            ..Default::default()
        };

        assert!(!report.is_clean());
        assert_eq!(report.failure_count(), 1);
        assert_eq!(report.attempted(), 2);
    }

    #[tokio::test]
    async fn test_run_pass_without_markers_writes_nothing() {
        let dir = TempDir::new().unwrap();
        std_fs::write(dir.path().join("main.ts"), "").unwrap();

        let report = run_pass(dir.path()).await;
        assert!(report.written.is_empty());
        assert!(report.is_clean());
    }
}
