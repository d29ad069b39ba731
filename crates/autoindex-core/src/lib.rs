pub mod barrel;
pub mod crawler;
pub mod driver;
pub mod error;
pub mod exclusions;
pub mod extension;
pub mod identifier;
pub mod marker;
pub mod session;
pub mod watcher;

pub use barrel::{GENERATED_HEADER, SiblingModule, generate_barrel, render_barrel};
pub use crawler::{Crawler, EntryKind, FilesystemEntry};
pub use driver::{PassReport, regenerate, run_pass};
pub use error::{AutoindexError, Result};
pub use exclusions::is_hidden_path;
pub use extension::{MARKER_STEM, ModuleExtension, is_marker_path};
pub use identifier::derive_identifier;
pub use marker::find_marker_files;
pub use session::WatchSession;
pub use watcher::{ChangeEvent, FileWatcher};
