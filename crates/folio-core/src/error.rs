//! Error types for Folio

use thiserror::Error;

/// Main error type for Folio operations
///
/// Both conditions are non-fatal: callers log and leave the view
/// unchanged, so the worst visible outcome is a click that does nothing.
#[derive(Error, Debug)]
pub enum FolioError {
    /// Panel key did not match any registered panel
    #[error("Panel not found: {0}")]
    PanelNotFound(String),

    /// No detail content exists for the requested project
    #[error("Project not found: {0}")]
    ProjectNotFound(String),
}

/// Result type alias using FolioError
pub type FolioResult<T> = Result<T, FolioError>;
