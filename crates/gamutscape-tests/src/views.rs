//! Derived-view properties over a shared base mesh: slicing bounds, band
//! exclusion, jitter determinism, overlay shape.

use gamutscape_color::ColorSpace;
use gamutscape_mesh::{
    explode_hue_bands, generate_gamut_mesh, overlay_point_cloud, scatter, slice_lightness,
    LandscapeMesh,
};

fn base_mesh() -> LandscapeMesh {
    generate_gamut_mesh(ColorSpace::Srgb, 0.05).unwrap()
}

#[test]
fn test_lightness_slice_bounds() {
    let mesh = base_mesh();
    let slice = slice_lightness(&mesh, 0.5, 0.03);

    // The slice keeps exactly the vertices within the band, in order.
    let kept: Vec<usize> = (0..mesh.vertex_count())
        .filter(|&i| (mesh.raw_coords()[i][0] - 0.5).abs() <= 0.03)
        .collect();
    assert_eq!(slice.vertex_count(), kept.len());
    assert!(!kept.is_empty());

    for (new_idx, &orig) in kept.iter().enumerate() {
        assert_eq!(
            &slice.positions[new_idx * 3..new_idx * 3 + 3],
            &mesh.positions()[orig * 3..orig * 3 + 3]
        );
    }

    // Every surviving triangle's vertices all satisfy the lightness bound.
    for &i in slice.indices.as_ref().unwrap() {
        let orig = kept[i as usize];
        assert!((mesh.raw_coords()[orig][0] - 0.5).abs() <= 0.03);
    }
}

#[test]
fn test_hue_band_triangles_never_cross_bands() {
    let mesh = base_mesh();
    let band_count = 8u32;
    let gap = 0.06f32;
    let exploded = explode_hue_bands(&mesh, band_count, gap);

    let band = |i: usize| {
        let hue = mesh.raw_coords()[i][2];
        ((hue * band_count as f32) as u32).min(band_count - 1)
    };
    for tri in exploded.indices.as_ref().unwrap().chunks_exact(3) {
        let b0 = band(tri[0] as usize);
        assert_eq!(b0, band(tri[1] as usize));
        assert_eq!(b0, band(tri[2] as usize));
    }

    // Vertices are displaced along the hue axis only, by band × gap.
    for i in 0..mesh.vertex_count() {
        assert_eq!(exploded.positions[i * 3], mesh.positions()[i * 3]);
        assert_eq!(exploded.positions[i * 3 + 1], mesh.positions()[i * 3 + 1]);
        let dz = exploded.positions[i * 3 + 2] - mesh.positions()[i * 3 + 2];
        assert!((dz - band(i) as f32 * gap).abs() < 1e-5);
    }
}

#[test]
fn test_scatter_seeded_reproducibility() {
    let mesh = base_mesh();
    let magnitude = 0.03f32;

    let a = scatter(&mesh, magnitude, 0xFEED);
    let b = scatter(&mesh, magnitude, 0xFEED);
    assert_eq!(a.positions, b.positions);

    let c = scatter(&mesh, magnitude, 0xBEEF);
    assert_ne!(a.positions, c.positions);

    // Per-vertex displacement is bounded by the jitter magnitude.
    let limit = magnitude as f64 * (3.0f64).sqrt() / 2.0 + 1e-6;
    for i in 0..mesh.vertex_count() {
        let mut sq = 0.0f64;
        for k in 0..3 {
            let d = (a.positions[i * 3 + k] - mesh.positions()[i * 3 + k]) as f64;
            sq += d * d;
        }
        assert!(sq.sqrt() <= limit, "vertex {} displaced too far", i);
    }
}

#[test]
fn test_overlay_superset_of_base() {
    let step = 0.1f32;
    let base = generate_gamut_mesh(ColorSpace::Srgb, step).unwrap();
    let overlay = overlay_point_cloud(ColorSpace::DisplayP3, step).unwrap();

    assert!(overlay.indices.is_none());
    assert!(overlay.vertex_count() >= base.vertex_count());
}

#[test]
fn test_transforms_share_one_base_mesh() {
    // All views derive from the same immutable mesh; deriving one view does
    // not perturb another.
    let mesh = base_mesh();
    let before = scatter(&mesh, 0.03, 1);
    let _ = explode_hue_bands(&mesh, 8, 0.06);
    let _ = slice_lightness(&mesh, 0.5, 0.03);
    let after = scatter(&mesh, 0.03, 1);
    assert_eq!(before, after);
}
