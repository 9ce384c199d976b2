//! Error types for the props fetcher.
//!
//! Every variant is fatal: the binary logs it once and exits non-zero. There
//! is no retry anywhere, so a transient network blip means re-running the
//! whole program.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FetchError>;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("failed to resolve the executable directory: {0}")]
    PathResolution(#[source] io::Error),

    #[error("failed to delete existing file {path}: {source}")]
    FileDelete {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("request to PrizePicks failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("failed to read response body: {0}")]
    Read(#[source] reqwest::Error),

    #[error("failed to write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests;
