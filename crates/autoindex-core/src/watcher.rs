use crate::error::Result;
use crate::exclusions::is_hidden_path;
use notify::event::{ModifyKind, RenameMode};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::{debug, error, info};

/// A path appearing or disappearing under the watched root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeEvent {
    Add(PathBuf),
    Unlink(PathBuf),
}

impl ChangeEvent {
    pub fn path(&self) -> &Path {
        match self {
            ChangeEvent::Add(path) | ChangeEvent::Unlink(path) => path,
        }
    }
}

/// Recursive subscription to add/unlink events under one root.
///
/// Dropping the watcher (or calling [`FileWatcher::unwatch`]) ends the
/// subscription and closes the event channel.
pub struct FileWatcher {
    watcher: RecommendedWatcher,
    root: PathBuf,
    watching: bool,
}

impl FileWatcher {
    pub fn new(root: &Path) -> Result<(Self, UnboundedReceiver<ChangeEvent>)> {
        let (tx, rx) = unbounded_channel();
        let filter_root = root.to_path_buf();

        let watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| forward(res, &filter_root, &tx),
            Config::default(),
        )?;

        Ok((
            Self {
                watcher,
                root: root.to_path_buf(),
                watching: false,
            },
            rx,
        ))
    }

    pub fn watch(&mut self) -> Result<()> {
        info!("Watching directory: {}", self.root.display());
        self.watcher.watch(&self.root, RecursiveMode::Recursive)?;
        self.watching = true;
        Ok(())
    }

    pub fn unwatch(&mut self) -> Result<()> {
        if !self.watching {
            return Ok(());
        }
        self.watcher.unwatch(&self.root)?;
        self.watching = false;
        info!("Stopped watching {}", self.root.display());
        Ok(())
    }
}

fn forward(res: notify::Result<Event>, root: &Path, tx: &UnboundedSender<ChangeEvent>) {
    match res {
        Ok(event) => {
            debug!("File event: {:?}", event);
            for change in convert_event(event, root) {
                // Receiver gone means the session is shutting down.
                let _ = tx.send(change);
            }
        }
        Err(e) => {
            error!("Watcher error: {}", e);
        }
    }
}

/// Translate a backend event into add/unlink events, dropping hidden paths.
pub(crate) fn convert_event(event: Event, root: &Path) -> Vec<ChangeEvent> {
    let mut changes = Vec::new();

    match event.kind {
        EventKind::Create(_) | EventKind::Modify(ModifyKind::Name(RenameMode::To)) => {
            changes.extend(event.paths.into_iter().map(ChangeEvent::Add));
        }
        EventKind::Remove(_) | EventKind::Modify(ModifyKind::Name(RenameMode::From)) => {
            changes.extend(event.paths.into_iter().map(ChangeEvent::Unlink));
        }
        EventKind::Modify(ModifyKind::Name(RenameMode::Both)) => {
            let mut paths = event.paths.into_iter();
            changes.extend(paths.next().map(ChangeEvent::Unlink));
            changes.extend(paths.next().map(ChangeEvent::Add));
        }
        EventKind::Modify(ModifyKind::Name(_)) => {
            for path in event.paths {
                if path.exists() {
                    changes.push(ChangeEvent::Add(path));
                } else {
                    changes.push(ChangeEvent::Unlink(path));
                }
            }
        }
        _ => {}
    }

    changes.retain(|change| {
        let hidden = is_hidden_path(change.path(), root);
        if hidden {
            debug!("Skipping hidden path event: {}", change.path().display());
        }
        !hidden
    });

    changes
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, DataChange, RemoveKind};

    fn event(kind: EventKind, paths: &[&str]) -> Event {
        paths
            .iter()
            .fold(Event::new(kind), |event, path| event.add_path(PathBuf::from(path)))
    }

    #[test]
    fn test_watcher_creation() {
        let dir = tempfile::TempDir::new().unwrap();
        let watcher = FileWatcher::new(dir.path());
        assert!(watcher.is_ok());
    }

    #[test]
    fn test_create_and_remove() {
        let root = Path::new("/p");
        let created = convert_event(event(EventKind::Create(CreateKind::File), &["/p/a.ts"]), root);
        assert_eq!(created, vec![ChangeEvent::Add(PathBuf::from("/p/a.ts"))]);

        let removed = convert_event(event(EventKind::Remove(RemoveKind::Any), &["/p/a.ts"]), root);
        assert_eq!(removed, vec![ChangeEvent::Unlink(PathBuf::from("/p/a.ts"))]);
    }

    #[test]
    fn test_rename_both_is_unlink_then_add() {
        let root = Path::new("/p");
        let kind = EventKind::Modify(ModifyKind::Name(RenameMode::Both));
        let changes = convert_event(event(kind, &["/p/old.ts", "/p/new.ts"]), root);
        assert_eq!(
            changes,
            vec![
                ChangeEvent::Unlink(PathBuf::from("/p/old.ts")),
                ChangeEvent::Add(PathBuf::from("/p/new.ts")),
            ]
        );
    }

    #[test]
    fn test_content_modification_is_ignored() {
        let root = Path::new("/p");
        let kind = EventKind::Modify(ModifyKind::Data(DataChange::Content));
        assert!(convert_event(event(kind, &["/p/a.ts"]), root).is_empty());
    }

    #[test]
    fn test_hidden_paths_are_dropped() {
        let root = Path::new("/p");
        let kind = EventKind::Create(CreateKind::File);
        let changes = convert_event(event(kind, &["/p/.git/index", "/p/src/b.ts"]), root);
        assert_eq!(changes, vec![ChangeEvent::Add(PathBuf::from("/p/src/b.ts"))]);
    }
}
