//! Filesystem helpers.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

use crate::consts::{DATA_DIR_NAME, DATA_DIR_NAME_WINDOWS, DEFAULT_PERMISSION_OCTAL};

/// Errors from filesystem helpers.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path was empty.
    #[error("invalid path: path cannot be empty")]
    InvalidPath,

    /// Underlying I/O failure.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path being operated on.
        path: PathBuf,
        /// Source IO error
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    fn io(path: &Path) -> impl FnOnce(std::io::Error) -> FsError + '_ {
        move |source| FsError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Directory containing the running executable.
pub fn get_executable_path() -> Result<PathBuf, FsError> {
    let exe = std::env::current_exe().map_err(FsError::io(Path::new("<current_exe>")))?;
    Ok(exe
        .parent()
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf))
}

/// Platform default data directory.
///
/// `%APPDATA%\TraderCommon` on Windows, `$HOME/.tradercommon` elsewhere,
/// falling back to the working directory when no home is known.
pub fn get_default_data_dir() -> PathBuf {
    if cfg!(windows) {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DATA_DIR_NAME_WINDOWS)
    } else {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DATA_DIR_NAME)
    }
}

/// Create `dir` and any missing parents with [`DEFAULT_PERMISSION_OCTAL`].
///
/// An existing directory is left as it is.
pub fn create_dir(dir: &Path) -> Result<(), FsError> {
    if dir.as_os_str().is_empty() {
        return Err(FsError::InvalidPath);
    }
    if dir.is_dir() {
        debug!(path = %dir.display(), "directory already exists");
        return Ok(());
    }

    let mut builder = std::fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DEFAULT_PERMISSION_OCTAL);
    }
    builder.create(dir).map_err(FsError::io(dir))?;
    debug!(path = %dir.display(), "created directory");
    Ok(())
}

/// Apply [`DEFAULT_PERMISSION_OCTAL`] to `path` and everything below it.
///
/// Symlinks below `path` are neither followed nor changed. Only Unix
/// permission bits are touched; on other platforms the tree is walked and
/// left alone.
pub fn change_permission(path: &Path) -> Result<(), FsError> {
    if path.as_os_str().is_empty() {
        return Err(FsError::InvalidPath);
    }

    for entry in WalkDir::new(path).follow_links(false) {
        let entry = entry.map_err(|e| FsError::Io {
            path: e.path().map_or_else(|| path.to_path_buf(), Path::to_path_buf),
            source: e.into(),
        })?;
        if entry.path_is_symlink() {
            debug!(path = %entry.path().display(), "skipping symlink");
            continue;
        }
        #[cfg(unix)]
        set_default_mode(&entry)?;
    }
    Ok(())
}

#[cfg(unix)]
fn set_default_mode(entry: &walkdir::DirEntry) -> Result<(), FsError> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = entry.metadata().map_err(|e| FsError::Io {
        path: entry.path().to_path_buf(),
        source: e.into(),
    })?;
    if metadata.permissions().mode() & 0o777 != DEFAULT_PERMISSION_OCTAL {
        std::fs::set_permissions(
            entry.path(),
            std::fs::Permissions::from_mode(DEFAULT_PERMISSION_OCTAL),
        )
        .map_err(FsError::io(entry.path()))?;
    }
    Ok(())
}
