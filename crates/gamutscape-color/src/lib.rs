//! Gamutscape Color — color spaces, transfer functions, and OKLCH conversion.
//!
//! This crate provides the conversion chain that places a device RGB triple
//! on the perceptual OKLCH gamut boundary:
//! - Color space definitions (sRGB, Display P3) with RGB↔XYZ matrices
//! - Transfer functions (encoded ↔ linear light)
//! - OKLab / OKLCH conversion

pub mod color_space;
pub mod oklab;
pub mod transfer;

pub use color_space::{convert_3x3, ColorSpace};
pub use oklab::{device_to_oklch, linear_srgb_to_oklab, oklab_to_oklch, Oklab, Oklch};
pub use transfer::TransferFunction;
