//! Output file handling.
//!
//! The feed is always saved next to the running binary, never anywhere else.
//! A leftover file from a previous run is removed up front, so after the run
//! the path holds either exactly the latest response body or nothing.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{FetchError, Result};

/// File written next to the binary on every successful run.
pub const OUTPUT_FILE_NAME: &str = "prizepicks_props.json";

/// Directory of the running executable joined with [`OUTPUT_FILE_NAME`].
pub fn default_output_path() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(FetchError::PathResolution)?;
    let dir = exe.parent().ok_or_else(|| {
        FetchError::PathResolution(io::Error::other("executable path has no parent directory"))
    })?;
    Ok(dir.join(OUTPUT_FILE_NAME))
}

/// Removes a leftover file from a previous run. A missing file is fine;
/// a file that exists but cannot be deleted is not.
pub fn remove_stale(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => {
            debug!("removed stale file {}", path.display());
            Ok(())
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(FetchError::FileDelete {
            path: path.to_owned(),
            source,
        }),
    }
}

/// Creates (truncating if present) `path` and writes the body verbatim.
pub fn write_body(path: &Path, body: &[u8]) -> Result<()> {
    fs::write(path, body).map_err(|source| FetchError::FileWrite {
        path: path.to_owned(),
        source,
    })
}
