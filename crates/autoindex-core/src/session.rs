//! Continuous regeneration
//!
//! A `WatchSession` owns the watcher subscription for one root. Every
//! add/unlink event schedules a complete pass over the whole root. Passes are
//! neither coalesced nor serialized, so overlapping passes can race on the
//! same barrel and the last write wins.

use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::driver::{PassReport, run_pass};
use crate::error::Result;
use crate::watcher::{ChangeEvent, FileWatcher};

pub struct WatchSession {
    root: Arc<PathBuf>,
    watcher: FileWatcher,
    events: UnboundedReceiver<ChangeEvent>,
    passes: JoinSet<PassReport>,
}

impl WatchSession {
    /// Run the initial pass, then subscribe to changes under `root`.
    ///
    /// Changes made while the initial pass runs are not replayed.
    pub async fn start(root: impl Into<PathBuf>) -> Result<(Self, PassReport)> {
        let root = root.into();
        let initial = run_pass(&root).await;

        let (mut watcher, events) = FileWatcher::new(&root)?;
        watcher.watch()?;

        Ok((
            Self {
                root: Arc::new(root),
                watcher,
                events,
                passes: JoinSet::new(),
            },
            initial,
        ))
    }

    /// Schedule a full pass for every change until `shutdown` resolves or the
    /// event source closes, then unsubscribe.
    ///
    /// Passes already in flight are allowed to finish before returning.
    /// Teardown never fails: if the root vanished and the backend already
    /// dropped its watch, the unwatch error is only logged.
    pub async fn run_until<F>(mut self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    debug!("Shutdown requested");
                    break;
                }
                event = self.events.recv() => {
                    let Some(event) = event else {
                        warn!("Change event source closed");
                        break;
                    };
                    debug!("Change detected: {:?}", event);
                    let root = Arc::clone(&self.root);
                    self.passes.spawn(async move { run_pass(&root).await });
                }
                Some(_) = self.passes.join_next(), if !self.passes.is_empty() => {}
            }
        }

        while self.passes.join_next().await.is_some() {}
        if let Err(e) = self.watcher.unwatch() {
            warn!("Failed to unwatch {}: {}", self.root.display(), e);
        }
        info!("Watch session for {} ended", self.root.display());
    }
}
