//! Encoding meshes for hand-off to a rendering sink.

use alloc::vec::Vec;

use si::geom::{Mesh, Tri};

/// Flattens the faces of a mesh into a count-prefixed index stream.
///
/// Each face contributes four entries: the vertex count 3 followed by the
/// three vertex indices, i.e. `[3, i0, i1, i2, 3, j0, ...]`. This is the
/// layout VTK-style polygon-data consumers expect.
pub fn poly_stream(mesh: &Mesh) -> Vec<u32> {
    let mut out = Vec::with_capacity(4 * mesh.faces.len());
    for Tri([a, b, c]) in &mesh.faces {
        out.extend([3, *a as u32, *b as u32, *c as u32]);
    }
    out
}

/// Flattens the vertices of a mesh into `[x0, y0, z0, x1, y1, z1, ...]`.
pub fn vert_coords(mesh: &Mesh) -> Vec<f32> {
    mesh.verts.iter().flat_map(|v| v.0).collect()
}

#[cfg(test)]
mod tests {
    use si::geom::{Mesh, Tri};
    use si::math::pt3;

    use super::*;

    #[test]
    fn poly_stream_prefixes_each_face_with_its_arity() {
        let mesh = Mesh::new(
            [Tri([0, 1, 2]), Tri([0, 2, 3])],
            [
                pt3(0.0, 0.0, 0.0),
                pt3(1.0, 0.0, 0.0),
                pt3(1.0, 1.0, 0.0),
                pt3(0.0, 1.0, 0.0),
            ],
        );
        assert_eq!(poly_stream(&mesh), [3, 0, 1, 2, 3, 0, 2, 3]);
    }

    #[test]
    fn vert_coords_flattens_in_vertex_order() {
        let mesh = Mesh::new(
            [Tri([0, 1, 2])],
            [
                pt3(0.0, 0.5, 0.0),
                pt3(1.0, 0.0, 2.0),
                pt3(0.0, 1.0, 4.0),
            ],
        );
        assert_eq!(
            vert_coords(&mesh),
            [0.0, 0.5, 0.0, 1.0, 0.0, 2.0, 0.0, 1.0, 4.0]
        );
    }
}
