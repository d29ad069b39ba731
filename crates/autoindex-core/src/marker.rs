use std::path::{Path, PathBuf};

use crate::crawler::Crawler;
use crate::extension::is_marker_path;

/// Walk `root` and return every barrel file under it, hidden directories included.
pub async fn find_marker_files(root: &Path) -> Vec<PathBuf> {
    let mut crawler = Crawler::new(root);
    let mut markers = Vec::new();

    while let Some(entry) = crawler.next_entry().await {
        if entry.is_file() && is_marker_path(&entry.path) {
            markers.push(entry.path);
        }
    }

    markers
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_find_marker_files() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("components/forms")).unwrap();
        fs::create_dir_all(root.join("docs")).unwrap();
        fs::write(root.join("autoindex.ts"), "").unwrap();
        fs::write(root.join("components/autoindex.tsx"), "").unwrap();
        fs::write(root.join("components/forms/autoindex.js"), "").unwrap();
        fs::write(root.join("docs/autoindex.md"), "").unwrap();
        fs::write(root.join("docs/autoindex.d.ts"), "").unwrap();
        fs::write(root.join("components/button.tsx"), "").unwrap();

        let mut markers = find_marker_files(root).await;
        markers.sort();

        assert_eq!(
            markers,
            vec![
                root.join("autoindex.ts"),
                root.join("components/autoindex.tsx"),
                root.join("components/forms/autoindex.js"),
            ]
        );
    }

    #[tokio::test]
    async fn test_directory_named_like_marker_is_ignored() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("autoindex.ts")).unwrap();

        assert!(find_marker_files(dir.path()).await.is_empty());
    }
}
