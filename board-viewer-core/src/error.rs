//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use board_viewer_provider::{FetchError, FetchErrorKind};

/// Core layer error type
///
/// Fetch failures never surface as a `CoreError`: the view-model absorbs them into
/// the empty / non-privileged defaults. This type covers invalid settings.
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
