//! Gamutscape Mesh — gamut boundary surface computation.
//!
//! Builds the OKLCH "landscape" mesh of a device RGB gamut boundary:
//! - Brute-force boundary sampling of the RGB cube (`sampler`)
//! - Planar Delaunay triangulation on the lightness–hue plane (`delaunay`)
//! - Mesh assembly: base corners, centering, normals (`mesh`)
//! - Pure derived view transforms over the assembled mesh (`views`)

pub mod delaunay;
pub mod error;
pub mod mesh;
pub mod sampler;
pub mod views;

pub use error::{MeshError, Result};
pub use mesh::{generate_gamut_mesh, Dataset, LandscapeMesh};
pub use sampler::{sample_boundary, GamutVertex};
pub use views::{
    explode_hue_bands, extract_contours, heat_recolor, lightness_recolor, overlay_point_cloud,
    scatter, slice_lightness, slice_lightness_multi,
};
