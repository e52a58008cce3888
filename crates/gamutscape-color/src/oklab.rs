//! OKLab / OKLCH conversion.
//!
//! Implements Björn Ottosson's OKLab transform from linear sRGB, plus the
//! polar OKLCH form used by the gamut boundary pipeline. Achromatic colors
//! have no defined hue; the polar conversion returns `None` for them and
//! callers are expected to exclude those samples.
#![allow(clippy::excessive_precision)]

use serde::{Deserialize, Serialize};

use crate::color_space::{convert_3x3, ColorSpace};

/// Chroma below this is treated as achromatic (hue undefined).
const ACHROMATIC_CHROMA: f32 = 1e-5;

/// Rectangular OKLab color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oklab {
    pub l: f32,
    pub a: f32,
    pub b: f32,
}

/// Polar OKLCH color: lightness in [0, 1], chroma ≥ 0, hue in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oklch {
    pub l: f32,
    pub c: f32,
    pub h: f32,
}

/// Convert linear sRGB to OKLab.
pub fn linear_srgb_to_oklab(rgb: [f32; 3]) -> Oklab {
    let l = 0.4122214708 * rgb[0] + 0.5363325363 * rgb[1] + 0.0514459929 * rgb[2];
    let m = 0.2119034982 * rgb[0] + 0.6806995451 * rgb[1] + 0.1073969566 * rgb[2];
    let s = 0.0883024619 * rgb[0] + 0.2817188376 * rgb[1] + 0.6299787005 * rgb[2];

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    Oklab {
        l: 0.2104542553 * l_ + 0.7936177850 * m_ - 0.0040720468 * s_,
        a: 1.9779984951 * l_ - 2.4285922050 * m_ + 0.4505937099 * s_,
        b: 0.0259040371 * l_ + 0.7827717662 * m_ - 0.8086757660 * s_,
    }
}

/// Convert OKLab to polar OKLCH. Returns `None` when chroma is numerically
/// zero, i.e. the hue angle is undefined. Hue is normalized into [0, 360).
pub fn oklab_to_oklch(lab: Oklab) -> Option<Oklch> {
    let c = (lab.a * lab.a + lab.b * lab.b).sqrt();
    if c < ACHROMATIC_CHROMA {
        return None;
    }
    let h = lab.b.atan2(lab.a).to_degrees().rem_euclid(360.0);
    Some(Oklch { l: lab.l, c, h })
}

/// Convert an encoded device RGB triple in the given color space to OKLCH.
///
/// The chain is: device transfer function → linear light → (for non-sRGB
/// spaces) matrix transform to linear sRGB via XYZ → OKLab → OKLCH.
/// Returns `None` for achromatic inputs; this is the exclusion rule of the
/// sampling pipeline, not an error.
pub fn device_to_oklch(rgb: [f32; 3], space: ColorSpace) -> Option<Oklch> {
    let tf = space.transfer();
    let linear = [tf.to_linear(rgb[0]), tf.to_linear(rgb[1]), tf.to_linear(rgb[2])];
    let linear_srgb = match space {
        ColorSpace::Srgb => linear,
        ColorSpace::DisplayP3 => convert_3x3(linear, &ColorSpace::DisplayP3, &ColorSpace::Srgb),
    };
    oklab_to_oklch(linear_srgb_to_oklab(linear_srgb))
}
