//! End-to-end tests of the mesh generation entry points.

use std::collections::BTreeSet;

use sierpinski_geom::{Tetra, io, tetrahedron_mesh, triangle_prisms};

#[test]
fn tetrahedron_mesh_depth_three() {
    let mesh = tetrahedron_mesh(1.0, 3);

    // 4^3 cells, four faces each
    assert_eq!(mesh.faces.len(), 256);

    // Every face indexes within the vertex list
    for f in &mesh.faces {
        assert!(f.0.iter().all(|&i| i < mesh.verts.len()));
    }

    // No two vertices are equal by value
    let keys: BTreeSet<[u32; 3]> =
        mesh.verts.iter().map(|v| v.0.map(f32::to_bits)).collect();
    assert_eq!(keys.len(), mesh.verts.len());

    // All vertices lie within the bounding box of the base solid
    let base = Tetra::regular(1.0);
    for i in 0..3 {
        let lo = base.verts().iter().map(|v| v[i]).fold(f32::MAX, f32::min);
        let hi = base.verts().iter().map(|v| v[i]).fold(f32::MIN, f32::max);
        for v in &mesh.verts {
            assert!(lo <= v[i] && v[i] <= hi);
        }
    }
}

#[test]
fn tetrahedron_mesh_is_deterministic() {
    assert_eq!(tetrahedron_mesh(1.0, 4), tetrahedron_mesh(1.0, 4));
}

#[test]
fn shallow_meshes_have_known_shapes() {
    let mesh = tetrahedron_mesh(1.0, 0);
    assert_eq!(mesh.verts.len(), 4);
    assert_eq!(mesh.faces.len(), 4);

    // 4 corners + 6 edge midpoints
    let mesh = tetrahedron_mesh(1.0, 1);
    assert_eq!(mesh.verts.len(), 10);
    assert_eq!(mesh.faces.len(), 16);
}

#[test]
fn triangle_prisms_one_per_cell() {
    let prisms = triangle_prisms(1.0, 2, 0.05);
    assert_eq!(prisms.len(), 9);
    for p in &prisms {
        assert_eq!(p.verts.len(), 6);
        assert_eq!(p.faces.len(), 8);
    }
}

#[test]
fn poly_stream_covers_every_face() {
    let mesh = tetrahedron_mesh(1.0, 2);
    let stream = io::poly_stream(&mesh);

    assert_eq!(stream.len(), 4 * mesh.faces.len());
    for chunk in stream.chunks(4) {
        assert_eq!(chunk[0], 3);
        for &i in &chunk[1..] {
            assert!((i as usize) < mesh.verts.len());
        }
    }

    assert_eq!(io::vert_coords(&mesh).len(), 3 * mesh.verts.len());
}
