use clap::Parser;
use std::path::PathBuf;

/// Pack a directory into a `.zip` archive created right next to it.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The directory whose contents are packed. The archive is written to
    /// the sibling path `<DIRECTORY>.zip`, replacing any previous run.
    pub directory: PathBuf,
}

/// Parses command-line arguments using `clap`.
///
/// A missing or unparsable operand makes `clap` print a usage message to
/// stderr and exit non-zero before any filesystem work starts.
pub fn run() -> Args {
    Args::parse()
}
