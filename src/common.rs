//! Common types shared between the lister and the packer.

use std::ffi::OsString;
use std::path::PathBuf;

/// One filesystem child discovered while listing a directory.
///
/// Only the containing directory and the child's base name are recorded; the
/// packer re-joins the two and stats the result when it visits the entry.
#[derive(Debug, Clone)]
pub struct DirEntry {
    /// Path of the directory this entry was listed from.
    pub parent: PathBuf,
    /// Base name of the entry inside `parent`.
    pub name: OsString,
}

impl DirEntry {
    pub fn new(parent: impl Into<PathBuf>, name: impl Into<OsString>) -> Self {
        DirEntry {
            parent: parent.into(),
            name: name.into(),
        }
    }

    /// The full filesystem path of the entry, `parent` joined with `name`.
    pub fn path(&self) -> PathBuf {
        self.parent.join(&self.name)
    }

    /// The entry's base name as a `String`, converted lossily when it is not
    /// valid UTF-8. Zip entry names are plain strings.
    pub fn name_lossy(&self) -> String {
        self.name.to_string_lossy().into_owned()
    }
}
