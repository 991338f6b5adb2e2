//! Whole-file reads and atomic writes with file locking

use std::fs::{self, File, OpenOptions, Permissions};
use std::io::Write;
use std::path::Path;

use fs2::FileExt;

use crate::{Error, NormalizedPath, Result};

/// Write content atomically to a file with locking.
///
/// Writes to a temp file next to the real destination, then renames it over
/// the destination, so readers see either the old content or the new content.
/// A symlinked destination is resolved first so the link target is the file
/// that gets rewritten. An existing file keeps its permissions, and a
/// read-only one is refused.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native_path = path.to_native();

    if let Some(parent) = native_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let dest = fs::canonicalize(&native_path).unwrap_or_else(|_| native_path.clone());
    let permissions = match fs::metadata(&dest) {
        Ok(meta) => Some(meta.permissions()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => return Err(Error::io(&dest, e)),
    };
    if permissions.as_ref().is_some_and(|p| p.readonly()) {
        return Err(Error::io(
            &native_path,
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "file is read-only"),
        ));
    }

    let temp_name = format!(
        ".{}.{}.tmp",
        dest.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = dest.with_file_name(&temp_name);

    let temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    let committed = commit(temp_file, &temp_path, &dest, content, permissions);
    if committed.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    committed?;

    tracing::debug!(path = %path, bytes = content.len(), "wrote file");
    Ok(())
}

fn commit(
    mut temp_file: File,
    temp_path: &Path,
    dest: &Path,
    content: &[u8],
    permissions: Option<Permissions>,
) -> Result<()> {
    temp_file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: dest.to_path_buf(),
    })?;

    if let Some(permissions) = permissions {
        temp_file
            .set_permissions(permissions)
            .map_err(|e| Error::io(temp_path, e))?;
    }

    temp_file
        .write_all(content)
        .and_then(|()| temp_file.sync_all())
        .map_err(|e| Error::io(temp_path, e))?;

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: dest.to_path_buf(),
    })?;
    drop(temp_file);

    fs::rename(temp_path, dest).map_err(|e| Error::io(dest, e))
}

/// Read the full text content of a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    let content = fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))?;
    tracing::debug!(path = %path, bytes = content.len(), "read file");
    Ok(content)
}

/// Write text content to a file atomically.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}
