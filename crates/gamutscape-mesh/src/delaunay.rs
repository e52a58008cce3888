//! Planar Delaunay triangulation (Bowyer–Watson incremental insertion).
//!
//! Points are inserted in input order into a super-triangle enclosure; each
//! insertion removes the triangles whose circumcircle contains the new point
//! and re-triangulates the cavity. Output triangles index the input slice
//! directly — the input is never reordered or deduplicated, so callers can
//! rely on stable vertex indices.
//!
//! All predicates run in f64; the mesh pipeline projects f32 vertex data
//! onto the lightness–hue plane before calling in.

use glam::DVec2;

/// Triangulate a planar point set. Fewer than three points (or an entirely
/// collinear set) yields an empty triangle list, not an error.
///
/// Coincident points are permitted: a duplicate lands on the circumcircles
/// of its neighbours without being strictly inside any of them and simply
/// does not open a cavity, so it contributes no triangles.
pub fn triangulate(points: &[DVec2]) -> Vec<[u32; 3]> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }

    let mut verts = points.to_vec();

    let mut min = points[0];
    let mut max = points[0];
    for p in &points[1..] {
        min = min.min(*p);
        max = max.max(*p);
    }
    let span = (max - min).max_element().max(1.0);
    let mid = (min + max) * 0.5;

    // Super-triangle generously enclosing every circumcircle of the input.
    verts.push(DVec2::new(mid.x - 20.0 * span, mid.y - span));
    verts.push(DVec2::new(mid.x, mid.y + 20.0 * span));
    verts.push(DVec2::new(mid.x + 20.0 * span, mid.y - span));
    let mut triangles: Vec<[usize; 3]> = vec![[n, n + 1, n + 2]];

    let mut bad: Vec<usize> = Vec::new();
    let mut cavity: Vec<(usize, usize)> = Vec::new();

    for i in 0..n {
        let p = verts[i];

        bad.clear();
        for (ti, tri) in triangles.iter().enumerate() {
            if in_circumcircle(verts[tri[0]], verts[tri[1]], verts[tri[2]], p) {
                bad.push(ti);
            }
        }

        // Cavity boundary: edges belonging to exactly one bad triangle.
        cavity.clear();
        for &ti in &bad {
            let t = triangles[ti];
            for edge in [(t[0], t[1]), (t[1], t[2]), (t[2], t[0])] {
                if let Some(pos) = cavity
                    .iter()
                    .position(|&(a, b)| (a == edge.0 && b == edge.1) || (a == edge.1 && b == edge.0))
                {
                    cavity.remove(pos);
                } else {
                    cavity.push(edge);
                }
            }
        }

        // `bad` is ascending, so removing back-to-front keeps indices valid.
        for &ti in bad.iter().rev() {
            triangles.swap_remove(ti);
        }
        for &(a, b) in &cavity {
            triangles.push([a, b, i]);
        }
    }

    triangles
        .into_iter()
        .filter(|t| t.iter().all(|&v| v < n))
        .map(|t| [t[0] as u32, t[1] as u32, t[2] as u32])
        .collect()
}

/// Circumcircle containment test, orientation-corrected. Degenerate
/// (collinear) triangles report `true` so they are always replaced.
fn in_circumcircle(a: DVec2, b: DVec2, c: DVec2, p: DVec2) -> bool {
    let orient = (b - a).perp_dot(c - a);
    if orient == 0.0 {
        return true;
    }

    let d = a - p;
    let e = b - p;
    let f = c - p;
    let dd = d.length_squared();
    let ee = e.length_squared();
    let ff = f.length_squared();

    let det = d.x * (e.y * ff - ee * f.y) - d.y * (e.x * ff - ee * f.x)
        + dd * (e.x * f.y - e.y * f.x);

    if orient > 0.0 {
        det > 0.0
    } else {
        det < 0.0
    }
}
