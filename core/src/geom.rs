//! Basic geometric primitives.

use crate::math::Point3;

pub use mesh::Mesh;

pub mod mesh;

/// Triangle, defined by three vertices.
///
/// With `Point3` vertices this is a geometric face; with `usize` vertices
/// it is an index triple referring into a [mesh][Mesh] vertex list.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub struct Tri<V>(pub [V; 3]);

/// Creates a `Tri` with the given vertices.
pub const fn tri<V>(a: V, b: V, c: V) -> Tri<V> {
    Tri([a, b, c])
}

impl Tri<Point3> {
    /// Given a triangle ABC, returns the vertex pairs (AB, BC, CA).
    pub fn edges(&self) -> [(Point3, Point3); 3] {
        let [a, b, c] = self.0;
        [(a, b), (b, c), (c, a)]
    }
}
