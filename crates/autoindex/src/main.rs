use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "autoindex")]
#[command(author, version, about = "Regenerate autoindex barrel files from their sibling modules")]
struct Cli {
    /// Root directory to scan for autoindex files
    path: Option<PathBuf>,

    /// Keep running and regenerate whenever files are added or removed
    #[arg(short, long)]
    watch: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(path) = cli.path else {
        println!("{}", commands::USAGE);
        return Ok(());
    };

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if cli.watch {
        commands::watch(&path).await
    } else {
        commands::run(&path).await
    }
}
