pub mod archive;
pub mod cli;
pub mod constants;
pub mod listing;
pub mod logging;
pub mod naming;
pub mod packer;
pub mod split;

use clap::Parser;
use cli::Cli;
use split::{SplitError, SplitRequest, SplitService};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Split(#[from] SplitError),
    #[error("Failed to initialise logging: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose)?;

    let request = SplitRequest::try_from(cli.split)?;
    let outcome = SplitService.execute(&request)?;
    for archive in &outcome.archives {
        println!(
            "Wrote {} ({} files, {} bytes)",
            archive.path.display(),
            archive.files.len(),
            archive.bytes
        );
    }
    Ok(())
}
