//! File system utilities.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Writes content to a file atomically using a temp file and rename.
///
/// The temp file is created next to the real target so the rename stays on
/// one filesystem. A half-written translation never replaces an existing file.
///
/// An existing target keeps its semantics: a symlink is written through to
/// the file it points at, a read-only file is refused with
/// [`io::ErrorKind::PermissionDenied`], and the file's permissions carry over
/// to the new content.
pub fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let target = resolve_target(path)?;
    let existing = match fs::metadata(&target) {
        Ok(metadata) => Some(metadata),
        Err(err) if err.kind() == io::ErrorKind::NotFound => None,
        Err(err) => return Err(err),
    };

    if existing
        .as_ref()
        .is_some_and(|metadata| metadata.permissions().readonly())
    {
        return Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            format!("{} is read-only", target.display()),
        ));
    }

    let parent = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = target.file_name().unwrap_or_default().to_string_lossy();
    let temp_path = parent.join(format!(".{file_name}.tmp"));

    let written = fs::write(&temp_path, content).and_then(|()| {
        if let Some(metadata) = &existing {
            fs::set_permissions(&temp_path, metadata.permissions())?;
        }
        fs::rename(&temp_path, &target)
    });

    if written.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    written
}

const MAX_SYMLINK_HOPS: usize = 40;

/// Follows symlinks at `path` to the file they name; other paths are returned as-is.
///
/// The last link may dangle, in which case its destination is created.
fn resolve_target(path: &Path) -> io::Result<PathBuf> {
    let mut current = path.to_path_buf();
    for _ in 0..MAX_SYMLINK_HOPS {
        match fs::symlink_metadata(&current) {
            Ok(metadata) if metadata.file_type().is_symlink() => {
                let destination = fs::read_link(&current)?;
                current = if destination.is_absolute() {
                    destination
                } else {
                    current
                        .parent()
                        .unwrap_or_else(|| Path::new(""))
                        .join(destination)
                };
            }
            Err(err) if err.kind() != io::ErrorKind::NotFound => return Err(err),
            _ => return Ok(current),
        }
    }

    Err(io::Error::other(format!(
        "too many levels of symbolic links: {}",
        path.display()
    )))
}
