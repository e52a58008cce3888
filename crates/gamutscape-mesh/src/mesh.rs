//! Landscape mesh assembly.
//!
//! Takes the sampled boundary vertex set, closes the surface with four base
//! corner vertices, triangulates on the lightness–hue plane, recenters the
//! positions about their centroid, and computes informational vertex
//! normals. The assembled mesh is immutable; derived views only read it.

use glam::{DVec2, Vec3};
use serde::{Deserialize, Serialize};
use tracing::debug;

use gamutscape_color::{ColorSpace, TransferFunction};

use crate::delaunay;
use crate::error::Result;
use crate::sampler::{sample_boundary, GamutVertex};

/// Base-plane corners closing the triangulated surface: zero chroma at the
/// extreme lightness/hue corners of the normalized box.
const BASE_CORNERS: [[f32; 3]; 4] = [
    [0.0, 0.0, 0.0],
    [0.0, 0.0, 1.0],
    [1.0, 0.0, 0.0],
    [1.0, 0.0, 1.0],
];

/// A derived dataset in the wire shape consumed by rendering collaborators:
/// flat position and color buffers (3 floats per vertex, colors linear
/// light) and an optional triangle index buffer. Empty datasets are valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub positions: Vec<f32>,
    pub colors: Vec<f32>,
    pub indices: Option<Vec<u32>>,
}

impl Dataset {
    /// Number of vertices in the dataset.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }
}

/// The assembled gamut landscape mesh.
///
/// Positions are centroid-centered; `raw_coords` keeps the pre-centering
/// (lightness, scaled chroma, hue/360) record and `raw_rgb` the source
/// device triple per vertex, so derived transforms can re-derive
/// coordinates without reconverting color. Fields are private: the mesh is
/// produced once and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandscapeMesh {
    positions: Vec<f32>,
    colors: Vec<f32>,
    normals: Vec<f32>,
    indices: Vec<u32>,
    raw_coords: Vec<[f32; 3]>,
    raw_rgb: Vec<[f32; 3]>,
}

impl LandscapeMesh {
    /// Flat position buffer, 3 floats per vertex, centroid-centered.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Flat linear-light color buffer, 3 floats per vertex.
    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    /// Flat vertex normal buffer (informational, for shading consumers).
    pub fn normals(&self) -> &[f32] {
        &self.normals
    }

    /// Triangle index buffer, 3 indices per triangle.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Raw (lightness, scaled chroma, hue/360) per vertex, before centering.
    pub fn raw_coords(&self) -> &[[f32; 3]] {
        &self.raw_coords
    }

    /// Raw source device RGB per vertex.
    pub fn raw_rgb(&self) -> &[[f32; 3]] {
        &self.raw_rgb
    }

    pub fn vertex_count(&self) -> usize {
        self.raw_coords.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Generate the gamut landscape mesh for a color space: the only sampling
/// entry point. Deterministic for fixed arguments.
pub fn generate_gamut_mesh(space: ColorSpace, step: f32) -> Result<LandscapeMesh> {
    let vertices = sample_boundary(space, step)?;
    Ok(assemble(&vertices))
}

/// The four base-closing corners as vertex records, grayscale colored by
/// their lightness.
pub(crate) fn corner_vertices() -> [GamutVertex; 4] {
    let tf = TransferFunction::Srgb;
    BASE_CORNERS.map(|corner| {
        let l = corner[0];
        let linear = tf.to_linear(l);
        GamutVertex {
            coord: corner,
            color: [linear, linear, linear],
            rgb: [l, l, l],
        }
    })
}

/// Assemble sampled vertices into the landscape mesh: append base corners,
/// triangulate over (lightness, hue), recenter, compute normals.
pub(crate) fn assemble(vertices: &[GamutVertex]) -> LandscapeMesh {
    let corners = corner_vertices();
    let total = vertices.len() + corners.len();
    let mut raw_coords = Vec::with_capacity(total);
    let mut raw_rgb = Vec::with_capacity(total);
    let mut colors = Vec::with_capacity(total * 3);

    for v in vertices.iter().chain(corners.iter()) {
        raw_coords.push(v.coord);
        raw_rgb.push(v.rgb);
        colors.extend_from_slice(&v.color);
    }

    // Delaunay over the lightness–hue projection; chroma is ignored.
    let plane: Vec<DVec2> = raw_coords
        .iter()
        .map(|c| DVec2::new(c[0] as f64, c[2] as f64))
        .collect();
    let triangles = delaunay::triangulate(&plane);

    let mut indices = Vec::with_capacity(triangles.len() * 3);
    for t in &triangles {
        indices.extend_from_slice(t);
    }

    let positions = center_positions(&raw_coords);
    let normals = vertex_normals(&positions, &indices);

    debug!(
        vertices = raw_coords.len(),
        triangles = triangles.len(),
        "assembled landscape mesh"
    );

    LandscapeMesh {
        positions,
        colors,
        normals,
        indices,
        raw_coords,
        raw_rgb,
    }
}

/// Subtract the centroid from every coordinate, flattening into the wire
/// buffer layout. Applied exactly once, at assembly.
pub(crate) fn center_positions(coords: &[[f32; 3]]) -> Vec<f32> {
    let mut centroid = Vec3::ZERO;
    for c in coords {
        centroid += Vec3::from_array(*c);
    }
    if !coords.is_empty() {
        centroid /= coords.len() as f32;
    }

    let mut positions = Vec::with_capacity(coords.len() * 3);
    for c in coords {
        let p = Vec3::from_array(*c) - centroid;
        positions.extend_from_slice(&p.to_array());
    }
    positions
}

/// Area-weighted vertex normals: accumulate face cross products, normalize.
fn vertex_normals(positions: &[f32], indices: &[u32]) -> Vec<f32> {
    let count = positions.len() / 3;
    let mut accum = vec![Vec3::ZERO; count];

    let at = |i: u32| {
        let i = i as usize * 3;
        Vec3::new(positions[i], positions[i + 1], positions[i + 2])
    };
    for tri in indices.chunks_exact(3) {
        let (a, b, c) = (at(tri[0]), at(tri[1]), at(tri[2]));
        let face = (b - a).cross(c - a);
        accum[tri[0] as usize] += face;
        accum[tri[1] as usize] += face;
        accum[tri[2] as usize] += face;
    }

    let mut normals = Vec::with_capacity(count * 3);
    for n in accum {
        let n = n.normalize_or_zero();
        normals.extend_from_slice(&n.to_array());
    }
    normals
}
