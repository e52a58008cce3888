//! Brute-force gamut boundary sampling of the device RGB cube.
//!
//! The gamut boundary in OKLCH is the image of the RGB cube's *surface*, so
//! the sampler scans the cube at a fixed step and keeps only candidates with
//! at least one channel at an extreme. Each survivor is converted to OKLCH;
//! achromatic candidates (undefined hue) are dropped.

use bytemuck::{Pod, Zeroable};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use gamutscape_color::{device_to_oklch, ColorSpace, Oklch, TransferFunction};

use crate::error::{MeshError, Result};

/// Vertical exaggeration applied to normalized chroma so the landscape has
/// readable relief. Presentation tuning, not a physical bound.
pub const CHROMA_EXAGGERATION: f32 = 0.8;

/// Saturation boost applied to display colors. Cosmetic only; never affects
/// geometry.
pub const SATURATION_BOOST: f32 = 0.15;

/// Channels at or above this count as saturated. Slightly under 1 to absorb
/// floating-point step accumulation.
pub const EDGE_THRESHOLD: f32 = 0.99;

/// A sampled gamut boundary vertex.
///
/// `coord` is the landscape position (lightness, scaled chroma, hue/360);
/// `color` is the display color (saturation-boosted, sRGB-linearized);
/// `rgb` is the raw source device triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct GamutVertex {
    pub coord: [f32; 3],
    pub color: [f32; 3],
    pub rgb: [f32; 3],
}

impl GamutVertex {
    fn from_sample(lch: Oklch, rgb: [f32; 3], reference_chroma: f32) -> Self {
        let boosted = boost_saturation(rgb, SATURATION_BOOST);
        let tf = TransferFunction::Srgb;
        Self {
            coord: [
                lch.l,
                lch.c / reference_chroma * CHROMA_EXAGGERATION,
                lch.h / 360.0,
            ],
            color: [
                tf.to_linear(boosted[0]),
                tf.to_linear(boosted[1]),
                tf.to_linear(boosted[2]),
            ],
            rgb,
        }
    }
}

/// True when the candidate sits on the surface of the RGB unit cube.
#[inline]
pub fn on_gamut_edge(r: f32, g: f32, b: f32) -> bool {
    r == 0.0 || g == 0.0 || b == 0.0 || r > EDGE_THRESHOLD || g > EDGE_THRESHOLD || b > EDGE_THRESHOLD
}

/// Push each channel away from the per-pixel average, then clamp to [0, 1].
pub fn boost_saturation(rgb: [f32; 3], amount: f32) -> [f32; 3] {
    let avg = (rgb[0] + rgb[1] + rgb[2]) / 3.0;
    [
        (avg + (rgb[0] - avg) * (1.0 + amount)).clamp(0.0, 1.0),
        (avg + (rgb[1] - avg) * (1.0 + amount)).clamp(0.0, 1.0),
        (avg + (rgb[2] - avg) * (1.0 + amount)).clamp(0.0, 1.0),
    ]
}

/// Number of steps along one cube axis, endpoints included.
fn axis_count(step: f32) -> u32 {
    let per = 1.0f64 / step as f64;
    let rounded = per.round();
    if (per - rounded).abs() < 1e-6 {
        rounded as u32
    } else {
        per.ceil() as u32
    }
}

/// Scan the RGB cube of `space` at `step` and return the gamut boundary
/// vertex set in generation order.
///
/// The sequence is deterministic for fixed arguments: the cube is iterated
/// with integer indices, the red axis is mapped in parallel with an ordered
/// collect, and no randomness is involved.
pub fn sample_boundary(space: ColorSpace, step: f32) -> Result<Vec<GamutVertex>> {
    if !step.is_finite() || step <= 0.0 || step > 1.0 {
        return Err(MeshError::InvalidStep { step });
    }

    let n = axis_count(step);
    let c_max = space.reference_chroma();

    let vertices: Vec<GamutVertex> = (0..=n)
        .into_par_iter()
        .map(|ri| {
            let r = (ri as f32 * step).min(1.0);
            let mut slice = Vec::new();
            for gi in 0..=n {
                let g = (gi as f32 * step).min(1.0);
                for bi in 0..=n {
                    let b = (bi as f32 * step).min(1.0);
                    if !on_gamut_edge(r, g, b) {
                        continue;
                    }
                    if let Some(lch) = device_to_oklch([r, g, b], space) {
                        slice.push(GamutVertex::from_sample(lch, [r, g, b], c_max));
                    }
                }
            }
            slice
        })
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect();

    debug!(
        space = space.name(),
        step,
        candidates = (n as u64 + 1).pow(3),
        retained = vertices.len(),
        "sampled gamut boundary"
    );

    Ok(vertices)
}
