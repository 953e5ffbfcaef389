//! Atomic file replacement.
//!
//! Every write goes to a temporary sibling first, is flushed to disk, and is
//! then renamed over the destination, so readers see either the old file or
//! the new one and never a partial write.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// Read a file's bytes, treating a missing file as `None`.
pub fn read_optional(path: &Path) -> io::Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Replace `path` with `contents` atomically.
///
/// `mode` sets Unix permissions on the new file and is ignored elsewhere.
pub fn write_atomic(path: &Path, contents: &[u8], mode: Option<u32>) -> io::Result<()> {
    Staged::new(path, contents, mode)?.commit()
}

/// A fully written temporary file waiting to be renamed into place.
///
/// Dropping it without calling [`Staged::commit`] removes the temporary file.
#[derive(Debug)]
pub struct Staged {
    tmp: PathBuf,
    dest: PathBuf,
    committed: bool,
}

impl Staged {
    /// Write `contents` to a temporary sibling of `dest`.
    pub fn new(dest: &Path, contents: &[u8], mode: Option<u32>) -> io::Result<Self> {
        if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let tmp = tmp_path(dest);
        let staged = Self {
            tmp,
            dest: dest.to_path_buf(),
            committed: false,
        };

        let mut file = create(&staged.tmp, mode)?;
        file.write_all(contents)?;
        file.sync_all()?;
        debug!(path = %staged.tmp.display(), bytes = contents.len(), "staged");

        Ok(staged)
    }

    /// Destination this file will replace.
    pub fn dest(&self) -> &Path {
        &self.dest
    }

    /// Rename the temporary file over the destination.
    pub fn commit(mut self) -> io::Result<()> {
        fs::rename(&self.tmp, &self.dest)?;
        self.committed = true;
        sync_parent(&self.dest);
        debug!(path = %self.dest.display(), "committed");
        Ok(())
    }
}

impl Drop for Staged {
    fn drop(&mut self) {
        if !self.committed {
            if let Err(e) = fs::remove_file(&self.tmp) {
                if e.kind() != io::ErrorKind::NotFound {
                    warn!(path = %self.tmp.display(), error = %e, "failed to remove staged file");
                }
            }
        }
    }
}

fn tmp_path(dest: &Path) -> PathBuf {
    let name = dest
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    dest.with_file_name(format!(".{}.tmp.{}", name, std::process::id()))
}

#[cfg(unix)]
fn create(path: &Path, mode: Option<u32>) -> io::Result<File> {
    use std::os::unix::fs::OpenOptionsExt;

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    if let Some(mode) = mode {
        options.mode(mode);
    }
    let file = options.open(path)?;

    // `mode` is filtered through the umask on create; pin it explicitly.
    if let Some(mode) = mode {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(mode))?;
    }
    Ok(file)
}

#[cfg(not(unix))]
fn create(path: &Path, _mode: Option<u32>) -> io::Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}

#[cfg(unix)]
fn sync_parent(path: &Path) {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Ok(dir) = File::open(parent) {
            let _ = dir.sync_all();
        }
    }
}

#[cfg(not(unix))]
fn sync_parent(_path: &Path) {}
