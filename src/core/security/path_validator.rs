use std::io;
use std::path::{Path, PathBuf};

use crate::core::config::SecurityConfig;

/// Errors that can occur during path validation
#[derive(Debug, thiserror::Error)]
pub enum PathSecurityError {
    #[error("Path '{path}' is outside allowed root directory '{root}'")]
    OutsideRootDirectory { path: PathBuf, root: PathBuf },

    #[error("Symlink '{path}' points outside allowed root directory")]
    SymlinkOutsideRoot { path: PathBuf },

    #[error("Symlinks are not allowed: '{path}'")]
    SymlinkNotAllowed { path: PathBuf },

    #[error("Cannot canonicalize path '{path}': {error}")]
    CannotCanonicalize { path: PathBuf, error: io::Error },

    #[error("Path does not exist: '{path}'")]
    PathNotFound { path: PathBuf },

    #[error("Path is not a directory: '{path}'")]
    NotADirectory { path: PathBuf },

    #[error("IO error for path '{path}': {error}")]
    IoError { path: PathBuf, error: io::Error },
}

/// Validates a directory that Markdown exports will be written into.
///
/// The directory must exist. Symlinks are refused when
/// `allow_symlinks` is false. When a root path is configured, the
/// canonical directory must lie within it.
///
/// Returns the canonical directory path.
///
/// # Examples
///
/// ```rust,ignore
/// let config = Config::from_env();
/// let dir = validate_export_dir("./exports", &config.security)?;
/// ```
pub fn validate_export_dir(
    input_path: &str,
    security: &SecurityConfig,
) -> Result<PathBuf, PathSecurityError> {
    let path = Path::new(input_path);

    if !path.exists() {
        return Err(PathSecurityError::PathNotFound {
            path: path.to_path_buf(),
        });
    }

    let is_symlink = path.is_symlink();
    if is_symlink && !security.allow_symlinks {
        return Err(PathSecurityError::SymlinkNotAllowed {
            path: path.to_path_buf(),
        });
    }

    let canonical_path = path
        .canonicalize()
        .map_err(|e| PathSecurityError::CannotCanonicalize {
            path: path.to_path_buf(),
            error: e,
        })?;

    if !canonical_path.is_dir() {
        return Err(PathSecurityError::NotADirectory {
            path: path.to_path_buf(),
        });
    }

    let Some(ref root) = security.root_path else {
        return Ok(canonical_path);
    };

    let canonical_root = root.canonicalize().map_err(|e| PathSecurityError::IoError {
        path: root.clone(),
        error: e,
    })?;

    if !canonical_path.starts_with(&canonical_root) {
        if is_symlink {
            return Err(PathSecurityError::SymlinkOutsideRoot {
                path: path.to_path_buf(),
            });
        }
        return Err(PathSecurityError::OutsideRootDirectory {
            path: canonical_path,
            root: canonical_root,
        });
    }

    Ok(canonical_path)
}
