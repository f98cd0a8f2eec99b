//! Base shapes seeding the fractal recursion.

use si::geom::{Tri, tri};
use si::math::{Point3, SQRT_3, SQRT_6, pt3};

/// A tetrahedron, defined by its four corner points.
///
/// The corners are named fields rather than array slots because their
/// order carries meaning: subdivision assigns each corner its own
/// sub-tetrahedron, and face extraction enumerates faces by the corner
/// they omit.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tetra {
    pub v0: Point3,
    pub v1: Point3,
    pub v2: Point3,
    pub v3: Point3,
}

/// A filled triangle in 3-space, defined by its three corner points.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Triangle {
    pub v0: Point3,
    pub v1: Point3,
    pub v2: Point3,
}

impl Tetra {
    /// Returns a regular tetrahedron with edge length `size`.
    ///
    /// One corner is at the origin and the base lies in the z = 0 plane:
    /// * v0 = (0, 0, 0)
    /// * v1 = (size, 0, 0)
    /// * v2 = (size/2, size·√3/2, 0)
    /// * v3 = (size/2, size·√3/6, size·√6/3)
    ///
    /// # Panics
    /// If `size` is not a positive, finite number.
    pub fn regular(size: f32) -> Self {
        assert!(
            size.is_finite() && size > 0.0,
            "tetrahedron edge length must be positive, was {size}"
        );
        Self {
            v0: pt3(0.0, 0.0, 0.0),
            v1: pt3(size, 0.0, 0.0),
            v2: pt3(size / 2.0, size * SQRT_3 / 2.0, 0.0),
            v3: pt3(size / 2.0, size * SQRT_3 / 6.0, size * SQRT_6 / 3.0),
        }
    }

    /// Returns the corner points of `self`, in corner order.
    pub fn verts(&self) -> [Point3; 4] {
        [self.v0, self.v1, self.v2, self.v3]
    }

    /// Returns the four triangular faces of `self`.
    ///
    /// Each face omits exactly one corner:
    /// (v0,v1,v2), (v0,v1,v3), (v0,v2,v3), (v1,v2,v3), in that order.
    pub fn faces(&self) -> [Tri<Point3>; 4] {
        let Self { v0, v1, v2, v3 } = *self;
        [
            tri(v0, v1, v2),
            tri(v0, v1, v3),
            tri(v0, v2, v3),
            tri(v1, v2, v3),
        ]
    }
}

impl Triangle {
    /// Returns an equilateral triangle with side length `size`, lying in
    /// the z = 0 plane with one corner at the origin:
    /// * v0 = (0, 0, 0)
    /// * v1 = (size, 0, 0)
    /// * v2 = (size/2, size·√3/2, 0)
    ///
    /// # Panics
    /// If `size` is not a positive, finite number.
    pub fn equilateral(size: f32) -> Self {
        assert!(
            size.is_finite() && size > 0.0,
            "triangle side length must be positive, was {size}"
        );
        Self {
            v0: pt3(0.0, 0.0, 0.0),
            v1: pt3(size, 0.0, 0.0),
            v2: pt3(size / 2.0, size * SQRT_3 / 2.0, 0.0),
        }
    }

    /// Returns the corner points of `self`, in corner order.
    pub fn verts(&self) -> [Point3; 3] {
        [self.v0, self.v1, self.v2]
    }

    /// Returns `self` as a face triple.
    pub fn face(&self) -> Tri<Point3> {
        tri(self.v0, self.v1, self.v2)
    }
}

#[cfg(test)]
mod tests {
    use si::assert_approx_eq;
    use si::geom::tri;

    use super::*;

    #[test]
    fn regular_tetra_edges_all_equal_size() {
        let t = Tetra::regular(1.0);
        let [v0, v1, v2, v3] = t.verts();
        for (a, b) in [
            (v0, v1),
            (v0, v2),
            (v0, v3),
            (v1, v2),
            (v1, v3),
            (v2, v3),
        ] {
            assert_approx_eq!(a.distance(&b), 1.0);
        }
    }

    #[test]
    fn regular_tetra_scales_with_size() {
        let t = Tetra::regular(2.5);
        assert_eq!(t.v1, pt3(2.5, 0.0, 0.0));
        assert_approx_eq!(t.v0.distance(&t.v3), 2.5);
    }

    #[test]
    fn equilateral_triangle_sides_all_equal_size() {
        let t = Triangle::equilateral(1.0);
        let [v0, v1, v2] = t.verts();
        assert_approx_eq!(v0.distance(&v1), 1.0);
        assert_approx_eq!(v1.distance(&v2), 1.0);
        assert_approx_eq!(v2.distance(&v0), 1.0);
        assert_eq!(v0.z(), 0.0);
        assert_eq!(v1.z(), 0.0);
        assert_eq!(v2.z(), 0.0);
    }

    #[test]
    fn tetra_faces_omit_one_corner_each() {
        let t = Tetra::regular(1.0);
        let Tetra { v0, v1, v2, v3 } = t;
        assert_eq!(
            t.faces(),
            [
                tri(v0, v1, v2),
                tri(v0, v1, v3),
                tri(v0, v2, v3),
                tri(v1, v2, v3),
            ]
        );
    }

    #[test]
    fn triangle_face_is_its_corner_triple() {
        let t = Triangle::equilateral(1.0);
        assert_eq!(t.face(), tri(t.v0, t.v1, t.v2));
    }

    #[test]
    #[should_panic]
    fn zero_size_tetra_panics() {
        Tetra::regular(0.0);
    }

    #[test]
    #[should_panic]
    fn negative_size_tetra_panics() {
        Tetra::regular(-1.0);
    }

    #[test]
    #[should_panic]
    fn nan_size_triangle_panics() {
        Triangle::equilateral(f32::NAN);
    }
}
