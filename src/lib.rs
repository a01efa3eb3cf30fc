//! # zipdir Core Library
//!
//! This crate provides the core functionality for the `zipdir` archiver.
//!
//! It is designed to be used by the `zipdir` command-line application, but its
//! public API can also be called directly to pack the contents of a directory
//! into a `.zip` file created next to that directory, with the relative tree
//! preserved inside the archive.
//!
//! ## Key Modules
//!
//! - [`list`]: Lists the immediate children of a single directory.
//! - [`pack`]: Creates the archive and recursively adds every file.
//! - [`cli`]: Command-line argument definitions.
//! - [`error`]: The crate-wide [`PackError`] type.
//!
//! ## Examples
//!
//! ```no_run
//! use std::path::Path;
//!
//! let archive = zipdir::pack::pack_dir(Path::new("photos"))?;
//! println!("saved as {}", archive.display());
//! # Ok::<(), zipdir::PackError>(())
//! ```

pub mod cli;
pub mod common;
pub mod error;
pub use error::PackError;

pub mod list;
pub mod pack;
