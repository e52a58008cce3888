//! Color space definitions and RGB↔XYZ transforms.
#![allow(clippy::excessive_precision)]

use serde::{Deserialize, Serialize};

use crate::transfer::TransferFunction;

/// Supported device color spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorSpace {
    Srgb,
    DisplayP3,
}

impl ColorSpace {
    /// RGB-to-XYZ 3x3 matrix (D65) for this color space.
    pub fn to_xyz_matrix(&self) -> [[f32; 3]; 3] {
        match self {
            Self::Srgb => [
                [0.4124564, 0.3575761, 0.1804375],
                [0.2126729, 0.7151522, 0.0721750],
                [0.0193339, 0.1191920, 0.9503041],
            ],
            Self::DisplayP3 => [
                [0.4865709, 0.2656677, 0.1982173],
                [0.2289746, 0.6917385, 0.0792869],
                [0.0000000, 0.0451134, 1.0439444],
            ],
        }
    }

    /// XYZ-to-RGB 3x3 matrix for this color space (inverse of to_xyz).
    pub fn from_xyz_matrix(&self) -> [[f32; 3]; 3] {
        match self {
            Self::Srgb => [
                [3.2404542, -1.5371385, -0.4985314],
                [-0.9692660, 1.8760108, 0.0415560],
                [0.0556434, -0.2040259, 1.0572252],
            ],
            Self::DisplayP3 => [
                [2.4934969, -0.9313836, -0.4027108],
                [-0.8294890, 1.7626641, 0.0236247],
                [0.0358458, -0.0761724, 0.9568845],
            ],
        }
    }

    /// Transfer function used to encode this space. Display P3 shares the
    /// sRGB curve.
    pub fn transfer(&self) -> TransferFunction {
        match self {
            Self::Srgb | Self::DisplayP3 => TransferFunction::Srgb,
        }
    }

    /// Reference chroma used to normalize OKLCH chroma for display. A
    /// presentation tuning constant, not a physical gamut bound.
    pub fn reference_chroma(&self) -> f32 {
        match self {
            Self::Srgb | Self::DisplayP3 => 0.37,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        match self {
            Self::Srgb => "sRGB",
            Self::DisplayP3 => "Display P3",
        }
    }
}

/// Apply a 3x3 matrix to an RGB triplet.
pub(crate) fn mat3_mul(m: &[[f32; 3]; 3], v: [f32; 3]) -> [f32; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// Convert a linear-light RGB pixel from one color space to another via XYZ.
pub fn convert_3x3(pixel: [f32; 3], from: &ColorSpace, to: &ColorSpace) -> [f32; 3] {
    if from == to {
        return pixel;
    }
    let xyz = mat3_mul(&from.to_xyz_matrix(), pixel);
    mat3_mul(&to.from_xyz_matrix(), xyz)
}
