//! Regenerate once, then again on every add/unlink under the root

use anyhow::{Context, Result};
use autoindex_core::WatchSession;
use std::path::Path;
use tracing::{error, info};

use super::common::resolve_root;

pub async fn watch(path: &Path) -> Result<()> {
    let root = resolve_root(path)?;

    let (session, initial) = WatchSession::start(&root)
        .await
        .with_context(|| format!("Failed to watch {}", root.display()))?;
    info!(
        "Initial pass wrote {} files, watching for changes",
        initial.written.len()
    );

    session
        .run_until(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {}", e);
                std::future::pending::<()>().await;
            }
        })
        .await;

    Ok(())
}
