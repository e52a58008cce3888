//! Mesh pipeline errors.

use thiserror::Error;

/// Errors produced by the gamut mesh pipeline.
///
/// Degenerate-but-valid outcomes (achromatic samples, empty triangulations,
/// empty slices) are not errors; they produce well-formed empty datasets.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("invalid sampling step {step}: must be in (0, 1]")]
    InvalidStep { step: f32 },
}

/// Result type alias for mesh pipeline operations.
pub type Result<T> = std::result::Result<T, MeshError>;
