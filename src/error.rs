// src/error.rs

use thiserror::Error;

/// Errors returned by the plotting functions.
///
/// Validation errors are always returned before the surface is modified.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("{name} must be {expected}, found {found}")]
    Type {
        name: &'static str,
        expected: &'static str,
        found: &'static str,
    },
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),
    #[error("invalid index: {0}")]
    InvalidIndex(String),
    #[error("render failed: {0}")]
    Render(String),
}

impl PlotError {
    pub fn is_type_error(&self) -> bool {
        matches!(self, PlotError::Type { .. })
    }

    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self, PlotError::ShapeMismatch(_))
    }
}
