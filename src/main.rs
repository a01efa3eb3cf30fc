//! Main entry point for the zipdir CLI app.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use zipdir::{cli, pack};

fn main() -> ExitCode {
    // Filtering comes from RUST_LOG; log output goes to stderr so stdout
    // stays reserved for the saved-as line.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run_app() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run_app() -> Result<(), zipdir::PackError> {
    let args = cli::run();
    let destination = pack::pack_dir(&args.directory)?;
    println!("saved as {}", destination.display());
    Ok(())
}
