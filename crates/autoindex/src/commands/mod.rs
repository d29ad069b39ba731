//! CLI command implementations for autoindex

mod common;
mod run;
mod watch;

pub use common::USAGE;
pub use run::run;
pub use watch::watch;
