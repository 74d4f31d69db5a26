//! File-system primitives shared by the resource implementations.
use std::io::Write as _;
use std::path::Path;

use crate::resources::error::ResourceError;

/// Permission bits given to installed scripts (`rwxr-xr-x`).
pub const EXECUTABLE_MODE: u32 = 0o755;

/// Permission bits given to generated files (`rw-r--r--`).
#[cfg(unix)]
const GENERATED_FILE_MODE: u32 = 0o644;

type Result<T, E = ResourceError> = std::result::Result<T, E>;

/// Ensure the parent directory of `path` exists, creating it (and any
/// ancestors) if necessary.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(ResourceError::io("creating directory", parent))?;
    }
    Ok(())
}

/// Remove an existing file or symlink at `path`, including broken symlinks.
///
/// Does nothing if `path` does not exist.
///
/// # Errors
///
/// Returns an error if the path exists but cannot be removed.
pub fn remove_existing(path: &Path) -> Result<()> {
    if path.symlink_metadata().is_ok() {
        std::fs::remove_file(path).map_err(ResourceError::io("removing existing", path))?;
    }
    Ok(())
}

/// Copy the file `source` to `destination`.
///
/// Creates any missing ancestors of `destination` and removes a pre-existing
/// file there before copying byte-for-byte.  A failure part-way through is
/// reported; whatever the copy left behind stays in place.
///
/// # Errors
///
/// Returns [`ResourceError::SourceMissing`] or
/// [`ResourceError::InvalidSource`] if `source` is not a regular file, and
/// [`ResourceError::Io`] if any filesystem call fails.
pub fn copy_resource(source: &Path, destination: &Path) -> Result<()> {
    if !source.exists() {
        return Err(ResourceError::SourceMissing {
            path: source.to_path_buf(),
        });
    }
    if !source.is_file() {
        return Err(ResourceError::InvalidSource {
            path: source.to_path_buf(),
            reason: "not a regular file".to_string(),
        });
    }

    ensure_parent_dir(destination)?;
    remove_existing(destination)?;
    std::fs::copy(source, destination).map_err(ResourceError::io("copying to", destination))?;
    Ok(())
}

/// Set `path` to mode `0755` regardless of its current mode.
///
/// On non-Unix platforms there are no POSIX permission bits: the call only
/// checks that `path` exists.
///
/// # Errors
///
/// Returns an error if `path` does not exist or its permissions cannot be set.
pub fn make_executable(path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(EXECUTABLE_MODE))
            .map_err(ResourceError::io("setting permissions on", path))?;
    }

    #[cfg(not(unix))]
    {
        std::fs::metadata(path).map_err(ResourceError::io("reading metadata of", path))?;
    }

    Ok(())
}

/// Return the permission bits of `path` (`None` on non-Unix platforms).
///
/// # Errors
///
/// Returns an error if the metadata of `path` cannot be read.
pub fn permission_bits(path: &Path) -> Result<Option<u32>> {
    let metadata =
        std::fs::metadata(path).map_err(ResourceError::io("reading metadata of", path))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        Ok(Some(metadata.permissions().mode() & 0o7777))
    }

    #[cfg(not(unix))]
    {
        let _ = metadata;
        Ok(None)
    }
}

/// Recursively copy the directory tree at `src` to `dst`.
///
/// Symlinks within the source tree are *followed*: directory symlinks are
/// recursed into and their contents materialised.
///
/// # Errors
///
/// Returns an error if a directory cannot be created, a source entry cannot
/// be read, or a file cannot be copied.
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    std::fs::create_dir_all(dst).map_err(ResourceError::io("creating directory", dst))?;
    for entry in std::fs::read_dir(src).map_err(ResourceError::io("reading directory", src))? {
        let entry = entry.map_err(ResourceError::io("reading entry in", src))?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());
        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path).map_err(ResourceError::io("copying to", &dst_path))?;
        }
    }
    Ok(())
}

/// Write `contents` to `path` atomically.
///
/// The data goes to a temporary file in the same directory which is then
/// renamed over `path`, so readers see either the old or the new file.
///
/// # Errors
///
/// Returns an error if the temporary file cannot be created, written or
/// renamed.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    ensure_parent_dir(path)?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .map_err(ResourceError::io("creating temporary file in", dir))?;
    tmp.write_all(contents)
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(ResourceError::io("writing temporary file for", path))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(
            tmp.path(),
            std::fs::Permissions::from_mode(GENERATED_FILE_MODE),
        )
        .map_err(ResourceError::io("setting permissions on", tmp.path()))?;
    }

    tmp.persist(path)
        .map_err(|e| ResourceError::io("replacing", path)(e.error))?;
    Ok(())
}

/// Relative path to file contents, or `None` for a directory.
#[cfg(test)]
pub(crate) type TreeListing = std::collections::BTreeMap<std::path::PathBuf, Option<Vec<u8>>>;

/// Every entry under `root`, empty directories included.
#[cfg(test)]
#[allow(clippy::expect_used)]
pub(crate) fn tree_listing(root: &Path) -> TreeListing {
    fn walk(root: &Path, dir: &Path, out: &mut TreeListing) {
        for entry in std::fs::read_dir(dir).expect("list directory") {
            let path = entry.expect("directory entry").path();
            let rel = path.strip_prefix(root).expect("under root").to_path_buf();
            if path.is_dir() {
                out.insert(rel, None);
                walk(root, &path, out);
            } else {
                out.insert(rel, Some(std::fs::read(&path).expect("read file")));
            }
        }
    }

    let mut out = TreeListing::new();
    walk(root, root, &mut out);
    out
}
