//! End-to-end pipeline properties: determinism, index validity, achromatic
//! exclusion, gamut superset, scale bounds.

use gamutscape_color::ColorSpace;
use gamutscape_mesh::{generate_gamut_mesh, sample_boundary, MeshError};

use crate::init_tracing;

#[test]
fn test_generate_is_deterministic() {
    init_tracing();
    let a = generate_gamut_mesh(ColorSpace::Srgb, 0.1).unwrap();
    let b = generate_gamut_mesh(ColorSpace::Srgb, 0.1).unwrap();
    assert_eq!(a.positions(), b.positions());
    assert_eq!(a.colors(), b.colors());
    assert_eq!(a.indices(), b.indices());
    assert_eq!(a.raw_coords(), b.raw_coords());
    assert_eq!(a.raw_rgb(), b.raw_rgb());
}

#[test]
fn test_indices_reference_valid_vertices() {
    let mesh = generate_gamut_mesh(ColorSpace::Srgb, 0.1).unwrap();
    assert!(mesh.triangle_count() > 0);
    for &i in mesh.indices() {
        assert!((i as usize) < mesh.vertex_count());
    }
}

#[test]
fn test_achromatic_candidates_never_become_vertices() {
    // At step 0.5 the cube surface contains the achromatic corners (0,0,0)
    // and (1,1,1); neither may survive into the vertex set. The base-plane
    // corners appended by assembly are the only gray records allowed.
    let vertices = sample_boundary(ColorSpace::Srgb, 0.5).unwrap();
    for v in &vertices {
        let [r, g, b] = v.rgb;
        assert!(
            !(r == g && g == b),
            "achromatic sample ({}, {}, {}) leaked into the vertex set",
            r,
            g,
            b
        );
    }
}

#[test]
fn test_wide_gamut_superset() {
    let srgb = sample_boundary(ColorSpace::Srgb, 0.1).unwrap();
    let p3 = sample_boundary(ColorSpace::DisplayP3, 0.1).unwrap();

    assert!(p3.len() >= srgb.len());

    let max_chroma = |verts: &[gamutscape_mesh::GamutVertex]| {
        verts.iter().map(|v| v.coord[1]).fold(0.0f32, f32::max)
    };
    assert!(max_chroma(&p3) >= max_chroma(&srgb));
}

#[test]
fn test_scaled_chroma_within_display_range() {
    let vertices = sample_boundary(ColorSpace::Srgb, 0.02).unwrap();
    assert!(!vertices.is_empty());
    for v in &vertices {
        assert!(
            (0.0..=0.8).contains(&v.coord[1]),
            "scaled chroma {} out of range",
            v.coord[1]
        );
    }
}

#[test]
fn test_scenario_step_0_05() {
    let mesh = generate_gamut_mesh(ColorSpace::Srgb, 0.05).unwrap();
    assert!(mesh.vertex_count() > 4);

    // Normalized hue stays in [0, 1), i.e. the raw angle was in [0, 360).
    let sampled = mesh.vertex_count() - 4;
    for coord in &mesh.raw_coords()[..sampled] {
        assert!((0.0..1.0).contains(&coord[2]), "hue {}", coord[2]);
    }

    // At least one triangle is non-degenerate in the (L, H) projection.
    let has_area = mesh.indices().chunks_exact(3).any(|tri| {
        let p = |i: u32| {
            let c = mesh.raw_coords()[i as usize];
            (c[0] as f64, c[2] as f64)
        };
        let (a, b, c) = (p(tri[0]), p(tri[1]), p(tri[2]));
        let area = (b.0 - a.0) * (c.1 - a.1) - (b.1 - a.1) * (c.0 - a.0);
        area.abs() > 1e-12
    });
    assert!(has_area);
}

#[test]
fn test_invalid_step_fails_fast() {
    assert!(matches!(
        generate_gamut_mesh(ColorSpace::Srgb, 0.0),
        Err(MeshError::InvalidStep { .. })
    ));
    assert!(matches!(
        generate_gamut_mesh(ColorSpace::DisplayP3, 1.01),
        Err(MeshError::InvalidStep { .. })
    ));
}
