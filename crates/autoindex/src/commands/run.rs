//! Regenerate every barrel once

use anyhow::Result;
use autoindex_core::run_pass;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, warn};

use super::common::resolve_root;

pub async fn run(path: &Path) -> Result<()> {
    let root = resolve_root(path)?;
    debug!("Regenerating autoindex files under {:?}", root);

    let start = Instant::now();
    let report = run_pass(&root).await;

    if !report.is_clean() {
        warn!(
            "{} of {} autoindex files could not be regenerated",
            report.failure_count(),
            report.attempted()
        );
    }
    debug!(
        "Wrote {} files in {:.2}s",
        report.written.len(),
        start.elapsed().as_secs_f64()
    );

    Ok(())
}
