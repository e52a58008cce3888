//! Transfer functions (encoded ↔ linear light).
#![allow(clippy::excessive_precision)]

use serde::{Deserialize, Serialize};

/// Transfer function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransferFunction {
    Srgb,
    Linear,
}

impl TransferFunction {
    /// Convert from non-linear (display/encoded) to linear light.
    pub fn to_linear(&self, v: f32) -> f32 {
        match self {
            Self::Linear => v,
            Self::Srgb => {
                if v <= 0.04045 {
                    v / 12.92
                } else {
                    ((v + 0.055) / 1.055).powf(2.4)
                }
            }
        }
    }

    /// Convert from linear light to non-linear (display/encoded).
    pub fn from_linear(&self, v: f32) -> f32 {
        match self {
            Self::Linear => v,
            Self::Srgb => {
                if v <= 0.0031308 {
                    v * 12.92
                } else {
                    1.055 * v.powf(1.0 / 2.4) - 0.055
                }
            }
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        match self {
            Self::Srgb => "sRGB",
            Self::Linear => "Linear",
        }
    }
}
