//! JSON document persistence.
//!
//! Each collection lives in its own file and is always read and written as a
//! whole, pretty-printed for humans.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{Result, StoreError};

/// Load `path`, or create it holding `T::default()` if it does not exist yet.
///
/// # Errors
///
/// Returns `StoreError::Read`/`Parse` for an unreadable or malformed file and
/// `StoreError::Write` if the empty document cannot be created.
pub fn load_or_create<T>(path: &Path, private: bool) -> Result<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    if !path.exists() {
        debug!(path = %path.display(), "creating empty document");
        let empty = T::default();
        save(path, &empty, private)?;
        return Ok(empty);
    }

    let contents = fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let value = serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), "document loaded");
    Ok(value)
}

/// Overwrite `path` with `value`. `private` restricts the file to its owner
/// on Unix.
///
/// # Errors
///
/// Returns `StoreError::Write` if serialization or the write fails.
pub fn save<T: Serialize>(path: &Path, value: &T, private: bool) -> Result<()> {
    let write_err = |source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut contents = serde_json::to_string_pretty(value)
        .map_err(|e| write_err(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;
    contents.push('\n');

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, contents).map_err(write_err)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if private {
            fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(write_err)?;
        }
    }
    #[cfg(not(unix))]
    let _ = private;

    debug!(path = %path.display(), "document saved");
    Ok(())
}
