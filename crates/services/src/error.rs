//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::{ApiError, PrefsError};

/// Errors emitted by `SessionLogService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionLogError {
    #[error("session length must be a whole number of minutes, got {raw:?}")]
    InvalidLength { raw: String },
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors emitted by `DisplayPrefsService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DisplayPrefsError {
    #[error(transparent)]
    Prefs(#[from] PrefsError),
}
