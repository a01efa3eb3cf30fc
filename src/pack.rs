//! # Archive Packer
//!
//! Turns one directory into a `.zip` archive written right next to it. The
//! recursion mirrors the filesystem tree: every visited entry is re-stat-ed,
//! regular files are deflate-streamed into the writer under a forward-slash
//! prefix that grows by one segment per directory level, and directories
//! themselves produce no entries of their own.

use std::fs::{self, File, Metadata};
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Datelike, Local, Timelike};
use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::common::DirEntry;
use crate::error::PackError;
use crate::list::list_dir;

/// Sizes that no longer fit the 32-bit header fields need the zip64 layout.
const ZIP64_THRESHOLD: u64 = u32::MAX as u64;

/// The destination file paired with the base prefix used inside the archive.
///
/// The prefix starts as the packed directory's own name, so the archive's top
/// level holds exactly one folder matching the input directory, and it is
/// always joined with forward slashes regardless of the host separator.
#[derive(Debug, Clone)]
pub struct ArchivePlan {
    /// Where the archive is written: the input path with `.zip` appended.
    pub destination: PathBuf,
    /// The in-archive prefix applied to every entry of the root directory.
    pub base_in_zip: String,
}

impl ArchivePlan {
    /// Builds the plan for packing `dir`: the sibling `<dir>.zip` destination
    /// and the directory's base name as the in-archive root folder.
    pub fn for_dir(dir: &Path) -> Result<Self, PackError> {
        // Paths like "." or ".." have no final component to name the archive
        // after; resolve them first. The filesystem root stays nameless and
        // is rejected.
        let named = match dir.file_name() {
            Some(_) => dir.to_path_buf(),
            None => fs::canonicalize(dir).map_err(|e| PackError::io(e, dir))?,
        };
        let base_in_zip = match named.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => {
                return Err(PackError::NoArchiveName {
                    path: dir.to_path_buf(),
                })
            }
        };

        Ok(ArchivePlan {
            destination: zip_destination(&named),
            base_in_zip,
        })
    }
}

/// Packs the whole of `dir` into a sibling `<dir>.zip` archive and returns
/// the path of the created file.
///
/// Validation happens up front: the path must exist, must be a directory and
/// must have at least one child, otherwise no archive file is created at all.
/// Once packing has started, the first failing entry aborts the operation and
/// its error is returned; a partially written archive is never reported as
/// success.
pub fn pack_dir(dir: &Path) -> Result<PathBuf, PackError> {
    let meta = fs::metadata(dir).map_err(|e| PackError::io(e, dir))?;
    if !meta.is_dir() {
        return Err(PackError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let root_entries = list_dir(dir)?;
    if root_entries.is_empty() {
        return Err(PackError::EmptyDirectory {
            path: dir.to_path_buf(),
        });
    }

    let plan = ArchivePlan::for_dir(dir)?;
    debug!(
        "packing {} root entries of {} into {}",
        root_entries.len(),
        dir.display(),
        plan.destination.display()
    );
    pack(&plan.destination, &root_entries, &plan.base_in_zip)?;

    Ok(plan.destination)
}

/// Creates (or truncates) the archive at `destination` and adds every entry
/// of `root_entries` under the `base_in_zip` prefix.
///
/// The writer and the file handle are released on every exit path; a failed
/// pack leaves the partially written file on disk.
pub fn pack(
    destination: &Path,
    root_entries: &[DirEntry],
    base_in_zip: &str,
) -> Result<(), PackError> {
    let file = File::create(destination).map_err(|e| PackError::io(e, destination))?;
    let mut zip = ZipWriter::new(file);

    for entry in root_entries {
        add_entry(&mut zip, entry, base_in_zip)?;
    }

    // Writes the central directory.
    zip.finish().map_err(|e| PackError::zip(e, destination))?;
    Ok(())
}

/// Recursive add step: stats the entry, descends into directories with the
/// prefix extended by the directory's own name, and streams regular files
/// into the archive.
fn add_entry(zip: &mut ZipWriter<File>, entry: &DirEntry, prefix: &str) -> Result<(), PackError> {
    let path = entry.path();
    // Follows symlinks, like the stat the entry was discovered with.
    let meta = fs::metadata(&path).map_err(|e| PackError::io(e, &path))?;

    if meta.is_dir() {
        let children = list_dir(&path)?;
        let child_prefix = format!("{}/{}", prefix, entry.name_lossy());
        for child in &children {
            add_entry(zip, child, &child_prefix)?;
        }
        return Ok(());
    }

    let entry_name = format!("{}/{}", prefix, entry.name_lossy());
    debug!("adding {} as {}", path.display(), entry_name);

    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(zip_timestamp(&meta))
        .large_file(meta.len() >= ZIP64_THRESHOLD);
    #[cfg(unix)]
    let options = {
        use std::os::unix::fs::PermissionsExt; // mode() helper
        options.unix_permissions(meta.permissions().mode())
    };

    zip.start_file(&entry_name, options)
        .map_err(|e| PackError::zip(e, &path))?;
    let mut file = File::open(&path).map_err(|e| PackError::io(e, &path))?;
    io::copy(&mut file, zip).map_err(|e| PackError::io(e, &path))?;

    Ok(())
}

/// Appends the `.zip` suffix to the directory path itself, so the archive
/// lands next to the input: `photos` becomes `photos.zip` and `photos.raw`
/// becomes `photos.raw.zip` (appended, never swapped for an existing
/// extension). Trailing separators are dropped first so they cannot end up
/// in the middle of the file name.
fn zip_destination(dir: &Path) -> PathBuf {
    let mut raw = dir.components().as_path().as_os_str().to_os_string();
    raw.push(".zip");
    PathBuf::from(raw)
}

/// Converts a file's mtime into the MS-DOS timestamp stored in zip headers.
///
/// The format only covers 1980..=2107; anything outside that range, or an
/// unreadable mtime, falls back to the format's epoch default.
fn zip_timestamp(meta: &Metadata) -> zip::DateTime {
    let Ok(modified) = meta.modified() else {
        return zip::DateTime::default();
    };
    let local: DateTime<Local> = modified.into();
    zip::DateTime::from_date_and_time(
        u16::try_from(local.year()).unwrap_or(0),
        local.month() as u8,
        local.day() as u8,
        local.hour() as u8,
        local.minute() as u8,
        local.second() as u8,
    )
    .unwrap_or_default()
}
