//! Error types for globedock
//!
//! Uses `thiserror` for library errors. Every variant maps to a
//! user-recoverable condition; the CLI turns them into actionable
//! diagnostics instead of stack traces.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for globedock operations
pub type GlobedockResult<T> = Result<T, GlobedockError>;

/// Main error type for globedock operations
#[derive(Error, Debug)]
pub enum GlobedockError {
    /// Dev server did not answer the availability probe
    #[error("dev server unreachable at {endpoint}")]
    EndpointUnreachable { endpoint: String },

    /// Entry document or assets directory is absent
    #[error("static bundle not found under {root} - missing entry document or assets directory")]
    BundleNotFound { root: PathBuf },

    /// A required hashed asset did not match its naming pattern
    #[error("no file matching '{pattern}' in {dir}")]
    RequiredAssetMissing { pattern: String, dir: PathBuf },

    /// A resolved asset could not be read
    #[error("could not read asset {path}: {source}")]
    AssetRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
