//! Directory listing, the leaf component of the packer.

use std::fs;
use std::path::Path;

use tracing::trace;

use crate::common::DirEntry;
use crate::error::PackError;

/// Returns one [`DirEntry`] per immediate child of `dir`, in whatever order
/// the underlying filesystem reports them. No sort is applied.
///
/// Read-only: the entries record only the parent path and the child name, so
/// each child is opened again by the packer when it is visited.
pub fn list_dir(dir: &Path) -> Result<Vec<DirEntry>, PackError> {
    let reader = fs::read_dir(dir).map_err(|e| PackError::io(e, dir))?;

    let mut entries = Vec::new();
    for child in reader {
        let child = child.map_err(|e| PackError::io(e, dir))?;
        entries.push(DirEntry::new(dir, child.file_name()));
    }
    trace!("listed {} entries in {}", entries.len(), dir.display());

    Ok(entries)
}
