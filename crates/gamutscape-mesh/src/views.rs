//! Derived view transforms.
//!
//! Each function is a pure map/filter over an assembled [`LandscapeMesh`];
//! none of them mutates the base mesh or resamples the RGB cube (the overlay
//! excepted, which deliberately runs the sampler for a second color space).
//! Transforms are independent and may run concurrently against the same
//! shared mesh.

use rayon::prelude::*;

use gamutscape_color::ColorSpace;

use crate::error::Result;
use crate::mesh::{center_positions, corner_vertices, Dataset, LandscapeMesh};
use crate::sampler::sample_boundary;

/// Default number of hue bands for [`explode_hue_bands`].
pub const DEFAULT_HUE_BANDS: u32 = 8;

/// Default hue-axis gap between exploded bands.
pub const DEFAULT_BAND_GAP: f32 = 0.06;

/// Default half-width of a lightness slice.
pub const DEFAULT_SLICE_HALF_WIDTH: f32 = 0.03;

/// Default number of lightness bins for [`extract_contours`].
pub const DEFAULT_CONTOUR_BINS: u32 = 16;

/// Default jitter magnitude for [`scatter`].
pub const DEFAULT_JITTER: f32 = 0.03;

/// Chroma value mapped to the hot end of the heat ramp.
const HEAT_CHROMA_FULL_SCALE: f32 = 0.7;

/// Cool-to-hot ramp stops: deep blue → cyan → green → orange/red → white.
const HEAT_RAMP: [[f32; 3]; 6] = [
    [0.05, 0.05, 0.3],
    [0.05, 0.35, 0.7],
    [0.05, 0.8, 0.3],
    [0.9, 0.7, 0.05],
    [1.0, 0.2, 0.0],
    [1.0, 1.0, 1.0],
];

/// Recolor every vertex by its scaled chroma through the heat ramp.
/// Geometry is unchanged.
pub fn heat_recolor(mesh: &LandscapeMesh) -> Dataset {
    let mut colors = Vec::with_capacity(mesh.colors().len());
    for coord in mesh.raw_coords() {
        let t = (coord[1] / HEAT_CHROMA_FULL_SCALE).min(1.0);
        let rgb = sample_heat_ramp(t);
        // Gamma-linearize for color-managed display.
        colors.extend_from_slice(&[
            rgb[0].powf(2.2),
            rgb[1].powf(2.2),
            rgb[2].powf(2.2),
        ]);
    }
    Dataset {
        positions: mesh.positions().to_vec(),
        colors,
        indices: Some(mesh.indices().to_vec()),
    }
}

/// Interpolate the heat ramp at `t` in [0, 1]. Segment intervals are
/// half-open on the right so stop boundaries are never double-counted.
fn sample_heat_ramp(t: f32) -> [f32; 3] {
    let segments = (HEAT_RAMP.len() - 1) as f32;
    let scaled = t.clamp(0.0, 1.0) * segments;
    let idx = (scaled.floor() as usize).min(HEAT_RAMP.len() - 2);
    let s = scaled - idx as f32;
    let (lo, hi) = (HEAT_RAMP[idx], HEAT_RAMP[idx + 1]);
    [
        lo[0] + (hi[0] - lo[0]) * s,
        lo[1] + (hi[1] - lo[1]) * s,
        lo[2] + (hi[2] - lo[2]) * s,
    ]
}

/// Recolor every vertex with a grayscale equal to its linearized lightness.
/// Geometry is unchanged.
pub fn lightness_recolor(mesh: &LandscapeMesh) -> Dataset {
    let mut colors = Vec::with_capacity(mesh.colors().len());
    for coord in mesh.raw_coords() {
        let linear = coord[0].powf(2.2);
        colors.extend_from_slice(&[linear, linear, linear]);
    }
    Dataset {
        positions: mesh.positions().to_vec(),
        colors,
        indices: Some(mesh.indices().to_vec()),
    }
}

/// Hue bucket index for a normalized hue in [0, 1].
#[inline]
fn hue_band(hue_norm: f32, band_count: u32) -> u32 {
    ((hue_norm * band_count as f32) as u32).min(band_count - 1)
}

/// Explode the mesh into `band_count` hue bands, offsetting each band along
/// the hue axis by `band × gap`. Triangles spanning two bands are dropped so
/// no surface bridges the gaps.
pub fn explode_hue_bands(mesh: &LandscapeMesh, band_count: u32, gap: f32) -> Dataset {
    let bands: Vec<u32> = mesh
        .raw_coords()
        .iter()
        .map(|c| hue_band(c[2], band_count))
        .collect();

    let mut positions = mesh.positions().to_vec();
    for (i, band) in bands.iter().enumerate() {
        positions[i * 3 + 2] += *band as f32 * gap;
    }

    let mut indices = Vec::new();
    for tri in mesh.indices().chunks_exact(3) {
        let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        if bands[a] == bands[b] && bands[b] == bands[c] {
            indices.extend_from_slice(tri);
        }
    }

    Dataset {
        positions,
        colors: mesh.colors().to_vec(),
        indices: Some(indices),
    }
}

/// Keep only vertices with |lightness − center| ≤ half_width, remapping
/// surviving triangle indices into the contiguous sub-sequence. An empty
/// band yields a valid empty dataset.
pub fn slice_lightness(mesh: &LandscapeMesh, center: f32, half_width: f32) -> Dataset {
    let mut remap: Vec<Option<u32>> = vec![None; mesh.vertex_count()];
    let mut positions = Vec::new();
    let mut colors = Vec::new();

    for (i, coord) in mesh.raw_coords().iter().enumerate() {
        if (coord[0] - center).abs() <= half_width {
            remap[i] = Some((positions.len() / 3) as u32);
            positions.extend_from_slice(&mesh.positions()[i * 3..i * 3 + 3]);
            colors.extend_from_slice(&mesh.colors()[i * 3..i * 3 + 3]);
        }
    }

    let mut indices = Vec::new();
    for tri in mesh.indices().chunks_exact(3) {
        if let (Some(a), Some(b), Some(c)) = (
            remap[tri[0] as usize],
            remap[tri[1] as usize],
            remap[tri[2] as usize],
        ) {
            indices.extend_from_slice(&[a, b, c]);
        }
    }

    Dataset {
        positions,
        colors,
        indices: Some(indices),
    }
}

/// Slice the mesh at several lightness centers at once. Slices are
/// independent and derived in parallel.
pub fn slice_lightness_multi(
    mesh: &LandscapeMesh,
    centers: &[f32],
    half_width: f32,
) -> Vec<Dataset> {
    centers
        .par_iter()
        .map(|&center| slice_lightness(mesh, center, half_width))
        .collect()
}

/// Bucket vertices into `bin_count` lightness bins and connect each bin as a
/// hue-ordered polyline approximating the boundary contour at that
/// lightness. Bins with fewer than two points emit nothing. The emitted
/// point sets are recentered about their collective centroid.
pub fn extract_contours(mesh: &LandscapeMesh, bin_count: u32) -> Vec<Dataset> {
    let mut bins: Vec<Vec<usize>> = vec![Vec::new(); bin_count as usize];
    for (i, coord) in mesh.raw_coords().iter().enumerate() {
        let bin = ((coord[0] * bin_count as f32) as u32).min(bin_count - 1);
        bins[bin as usize].push(i);
    }

    for bin in &mut bins {
        bin.sort_by(|&a, &b| {
            mesh.raw_coords()[a][2]
                .partial_cmp(&mesh.raw_coords()[b][2])
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    }

    let selected: Vec<&Vec<usize>> = bins.iter().filter(|b| b.len() >= 2).collect();

    // Collective centroid over every emitted point, so the contour stack
    // shares one frame of reference.
    let mut centroid = [0.0f32; 3];
    let mut total = 0usize;
    for bin in &selected {
        for &i in bin.iter() {
            let p = &mesh.positions()[i * 3..i * 3 + 3];
            centroid[0] += p[0];
            centroid[1] += p[1];
            centroid[2] += p[2];
            total += 1;
        }
    }
    if total > 0 {
        centroid = centroid.map(|c| c / total as f32);
    }

    selected
        .into_iter()
        .map(|bin| {
            let mut positions = Vec::with_capacity(bin.len() * 3);
            let mut colors = Vec::with_capacity(bin.len() * 3);
            for &i in bin {
                let p = &mesh.positions()[i * 3..i * 3 + 3];
                positions.extend_from_slice(&[
                    p[0] - centroid[0],
                    p[1] - centroid[1],
                    p[2] - centroid[2],
                ]);
                colors.extend_from_slice(&mesh.colors()[i * 3..i * 3 + 3]);
            }
            Dataset {
                positions,
                colors,
                indices: None,
            }
        })
        .collect()
}

/// Jitter every vertex position by a bounded per-axis offset drawn from a
/// seeded hash, producing a scattered point cloud. Colors are untouched and
/// the result carries no topology. Identical seeds reproduce identical
/// output.
pub fn scatter(mesh: &LandscapeMesh, magnitude: f32, seed: u64) -> Dataset {
    let mut positions = mesh.positions().to_vec();
    for (i, p) in positions.iter_mut().enumerate() {
        *p += (hashed_unit(seed, i as u64) - 0.5) * magnitude;
    }
    Dataset {
        positions,
        colors: mesh.colors().to_vec(),
        indices: None,
    }
}

/// Hash-based PRNG in [0, 1): one multiply-add LCG step over a
/// golden-ratio-mixed stream index.
fn hashed_unit(seed: u64, stream: u64) -> f32 {
    let x = seed
        .wrapping_add(stream.wrapping_mul(0x9E3779B97F4A7C15))
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    ((x >> 33) as f64 / (1u64 << 31) as f64) as f32
}

/// Sample a second color space's gamut boundary as an unconnected point
/// cloud to overlay on a base mesh. For a wider gamut at equal step, the
/// cloud extends beyond the base mesh in chroma.
pub fn overlay_point_cloud(space: ColorSpace, step: f32) -> Result<Dataset> {
    let vertices = sample_boundary(space, step)?;
    let corners = corner_vertices();

    let mut coords = Vec::with_capacity(vertices.len() + corners.len());
    let mut colors = Vec::with_capacity((vertices.len() + corners.len()) * 3);
    for v in vertices.iter().chain(corners.iter()) {
        coords.push(v.coord);
        colors.extend_from_slice(&v.color);
    }

    Ok(Dataset {
        positions: center_positions(&coords),
        colors,
        indices: None,
    })
}
