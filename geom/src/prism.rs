//! Extruding flat triangles into solid prisms.

use si::geom::Mesh;
use si::math::vec3;

use crate::solids::Triangle;

impl Triangle {
    /// Thickens `self` into a triangular prism.
    ///
    /// The triangle itself becomes the bottom cap and its translate by
    /// `thickness` along +z the top cap; each side edge becomes a quad
    /// split into two triangles. The result has 6 vertices and 8 faces,
    /// wound outward for a counter-clockwise base triangle.
    ///
    /// # Panics
    /// If `thickness` is not a positive, finite number.
    pub fn extrude(&self, thickness: f32) -> Mesh {
        assert!(
            thickness.is_finite() && thickness > 0.0,
            "extrusion thickness must be positive, was {thickness}"
        );
        let d = vec3(0.0, 0.0, thickness);

        let mut bld = Mesh::builder();
        for v in self.verts() {
            bld.push_vert(v);
        }
        for v in self.verts() {
            bld.push_vert(v + d);
        }

        // Caps; the bottom cap is wound to face -z
        bld.push_face(0, 2, 1);
        bld.push_face(3, 4, 5);

        // Sides, one quad per edge
        for i in 0..3 {
            let j = (i + 1) % 3;
            bld.push_faces([[i, j, j + 3], [i, j + 3, i + 3]]);
        }
        bld.build()
    }
}

#[cfg(test)]
mod tests {
    use si::math::{pt3, vec3};

    use crate::solids::Triangle;

    #[test]
    fn prism_has_six_verts_and_eight_faces() {
        let mesh = Triangle::equilateral(1.0).extrude(0.1);
        assert_eq!(mesh.verts.len(), 6);
        assert_eq!(mesh.faces.len(), 8);
    }

    #[test]
    fn top_cap_is_translated_by_thickness() {
        let tri = Triangle::equilateral(2.0);
        let mesh = tri.extrude(0.25);
        let d = vec3(0.0, 0.0, 0.25);

        assert_eq!(mesh.verts[..3], tri.verts());
        assert_eq!(mesh.verts[3..], tri.verts().map(|v| v + d));
    }

    #[test]
    fn extrusion_preserves_base_coordinates() {
        let tri = Triangle {
            v0: pt3(0.0, 0.0, 0.0),
            v1: pt3(1.0, 0.0, 0.0),
            v2: pt3(0.5, 0.5, 0.0),
        };
        let mesh = tri.extrude(1.0);
        assert_eq!(mesh.verts[1], pt3(1.0, 0.0, 0.0));
        assert_eq!(mesh.verts[4], pt3(1.0, 0.0, 1.0));
    }

    #[test]
    #[should_panic]
    fn zero_thickness_panics() {
        Triangle::equilateral(1.0).extrude(0.0);
    }

    #[test]
    #[should_panic]
    fn negative_thickness_panics() {
        Triangle::equilateral(1.0).extrude(-0.5);
    }
}
