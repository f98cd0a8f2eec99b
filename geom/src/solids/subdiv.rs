//! Recursive Sierpiński subdivision and mesh assembly.

use alloc::vec::Vec;

use si::geom::Mesh;
use si::geom::mesh::{Builder, Exact, VertKey};
use si::math::Lerp;

use super::{Tetra, Triangle};

impl Tetra {
    /// Recursively subdivides `self` into its Sierpiński cells.
    ///
    /// Each level halves the cell: the six edge midpoints split the
    /// tetrahedron into four corner tetrahedra and a central octahedron,
    /// and only the corners are kept. The discarded centers are what
    /// produce the fractal holes.
    ///
    /// Cells are emitted depth-first in corner order v0, v1, v2, v3, so
    /// the output is deterministic; `depth` levels yield exactly
    /// `4^depth` cells, with `depth` 0 returning `self` unchanged.
    ///
    /// Output size grows exponentially; depths beyond about 10 are
    /// rarely practical.
    pub fn subdivide(&self, depth: u32) -> Vec<Tetra> {
        let mut cells = Vec::with_capacity(4usize.pow(depth));
        self.subdivide_into(depth, &mut cells);
        cells
    }

    fn subdivide_into(&self, depth: u32, cells: &mut Vec<Tetra>) {
        if depth == 0 {
            cells.push(*self);
            return;
        }
        let Self { v0, v1, v2, v3 } = *self;

        // One midpoint per edge, computed once and copied into both
        // adjacent corner cells. Copying keeps coincident vertices of
        // neighboring cells bitwise equal, which the mesh assembler
        // relies on.
        let m01 = v0.midpoint(&v1);
        let m02 = v0.midpoint(&v2);
        let m03 = v0.midpoint(&v3);
        let m12 = v1.midpoint(&v2);
        let m13 = v1.midpoint(&v3);
        let m23 = v2.midpoint(&v3);

        let corners = [
            Tetra { v0, v1: m01, v2: m02, v3: m03 },
            Tetra { v0: m01, v1, v2: m12, v3: m13 },
            Tetra { v0: m02, v1: m12, v2, v3: m23 },
            Tetra { v0: m03, v1: m13, v2: m23, v3 },
        ];
        for c in &corners {
            c.subdivide_into(depth - 1, cells);
        }
    }
}

impl Triangle {
    /// Recursively subdivides `self` into its Sierpiński cells.
    ///
    /// The midpoints of the three sides split the triangle into four;
    /// the corner triangles are kept and the middle one discarded:
    ///
    /// ```text
    ///         v0
    ///         /\
    ///    m0  /__\  m2
    ///       /\  /\
    ///      /__\/__\
    ///    v1   m1   v2
    /// ```
    ///
    /// Cells are emitted depth-first in corner order v0, v1, v2;
    /// `depth` levels yield exactly `3^depth` cells.
    pub fn subdivide(&self, depth: u32) -> Vec<Triangle> {
        let mut cells = Vec::with_capacity(3usize.pow(depth));
        self.subdivide_into(depth, &mut cells);
        cells
    }

    fn subdivide_into(&self, depth: u32, cells: &mut Vec<Triangle>) {
        if depth == 0 {
            cells.push(*self);
            return;
        }
        let Self { v0, v1, v2 } = *self;

        let m0 = v0.midpoint(&v1);
        let m1 = v1.midpoint(&v2);
        let m2 = v2.midpoint(&v0);

        let corners = [
            Triangle { v0, v1: m0, v2: m2 },
            Triangle { v0: m0, v1, v2: m1 },
            Triangle { v0: m2, v1: m1, v2 },
        ];
        for c in &corners {
            c.subdivide_into(depth - 1, cells);
        }
    }
}

/// Collects tetrahedron cells into one indexed mesh, merging vertices
/// that the key `K` considers equal.
///
/// For every cell in input order, pushes its four faces in face order,
/// resolving vertices in face-definition order. The vertex list of the
/// result is in first-seen order and free of duplicates by key; the face
/// list has exactly four entries per cell.
pub fn assemble_with<K: VertKey>(cells: &[Tetra]) -> Mesh {
    let mut bld = Builder::<K>::default();
    for cell in cells {
        bld.push_tris(cell.faces());
    }
    bld.build()
}

/// Collects tetrahedron cells into one indexed mesh, merging vertices by
/// exact coordinate identity.
pub fn assemble(cells: &[Tetra]) -> Mesh {
    assemble_with::<Exact>(cells)
}

/// Generates the Sierpiński tetrahedron as a single indexed mesh.
///
/// Subdivides a regular tetrahedron of edge length `size` to `depth`
/// levels and assembles the resulting `4^depth` cells into a mesh of
/// `4 * 4^depth` faces, with coincident vertices of adjacent cells
/// merged.
///
/// # Panics
/// If `size` is not a positive, finite number.
pub fn tetrahedron_mesh(size: f32, depth: u32) -> Mesh {
    assemble(&Tetra::regular(size).subdivide(depth))
}

/// Generates the Sierpiński triangle as a list of prisms, one per cell.
///
/// Subdivides an equilateral triangle of side length `size` to `depth`
/// levels and extrudes each of the `3^depth` cells to `thickness`. The
/// prisms are returned in cell order and left unmerged so that a
/// renderer can color or label them individually.
///
/// # Panics
/// If `size` or `thickness` is not a positive, finite number.
pub fn triangle_prisms(size: f32, depth: u32, thickness: f32) -> Vec<Mesh> {
    Triangle::equilateral(size)
        .subdivide(depth)
        .iter()
        .map(|cell| cell.extrude(thickness))
        .collect()
}
