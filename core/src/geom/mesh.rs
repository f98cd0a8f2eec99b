//! Indexed triangle meshes and deduplicating mesh assembly.

use alloc::collections::BTreeMap;
use alloc::{vec, vec::Vec};

use crate::math::Point3;

use super::Tri;

/// A triangle mesh.
///
/// An object made of flat triangular faces, represented as a list of unique
/// vertex positions and a list of faces indexing into it. Several faces can
/// share a vertex; a mesh built with [`Builder`] stores each distinct vertex
/// position exactly once, in first-seen order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    /// The faces of the mesh, with each face a triplet of indices
    /// to the `verts` vector.
    pub faces: Vec<Tri<usize>>,
    /// The vertices of the mesh.
    pub verts: Vec<Point3>,
}

/// Maps a vertex position to the key that decides its identity.
///
/// The [builder][Builder] merges two vertices exactly when their keys
/// compare equal. [`Exact`], the default, keys on the coordinate bit
/// patterns; [`Snapped`] quantizes coordinates to a grid first. Swapping
/// the key changes only how vertices are merged, never the traversal
/// order or the face layout of the built mesh.
pub trait VertKey {
    /// The key type.
    type Key: Ord;

    /// Returns the key identifying `pt`.
    fn key(pt: &Point3) -> Self::Key;
}

/// Merges vertices only if their coordinates are bitwise identical.
///
/// This matches exact value equality for all coordinates that arise by
/// copying or recomputing the same expression, which is how coincident
/// vertices of adjacent fractal cells come to be. Note that under this key
/// `-0.0` and `0.0` are distinct.
#[derive(Copy, Clone, Debug, Default)]
pub struct Exact;

impl VertKey for Exact {
    type Key = [u32; 3];

    fn key(pt: &Point3) -> [u32; 3] {
        pt.0.map(f32::to_bits)
    }
}

/// Merges vertices whose coordinates round to the same multiple of
/// `1 / RES`.
///
/// A coarser alternative to [`Exact`] for input whose coincident vertices
/// are not bitwise equal, e.g. because they were computed along different
/// arithmetic paths. Vertices within about `0.5 / RES` of a grid point
/// merge with it.
#[derive(Copy, Clone, Debug, Default)]
pub struct Snapped<const RES: u32>;

impl<const RES: u32> VertKey for Snapped<RES> {
    type Key = [i32; 3];

    fn key(pt: &Point3) -> [i32; 3] {
        pt.0.map(|c| {
            let s = c * RES as f32;
            // Round half away from zero; `round` is fp-gated in no_std
            (if s < 0.0 { s - 0.5 } else { s + 0.5 }) as i32
        })
    }
}

/// A mesh builder that assembles faces into an indexed [`Mesh`],
/// deduplicating vertices as they are pushed.
///
/// Vertex identity is decided by the key type `K`; see [`VertKey`].
/// The dedup table lives only as long as the builder, so assembling the
/// same faces twice yields two identical meshes.
pub struct Builder<K: VertKey = Exact> {
    mesh: Mesh,
    // The midpoint sharing pattern of subdivision makes coincident
    // vertices bitwise equal, so an ordered map over plain keys suffices.
    // (HashMap is not available in `alloc` anyway.)
    indices: BTreeMap<K::Key, usize>,
}

impl Mesh {
    /// Creates a new triangle mesh with the given faces and vertices.
    ///
    /// Each face in `faces` is a triplet of indices, referring to
    /// the vertices in `verts` that define that face.
    ///
    /// # Panics
    /// If any of the vertex indices in `faces` ≥ `verts.len()`.
    pub fn new<F, V>(faces: F, verts: V) -> Self
    where
        F: IntoIterator<Item = Tri<usize>>,
        V: IntoIterator<Item = Point3>,
    {
        let faces: Vec<_> = faces.into_iter().collect();
        let verts: Vec<_> = verts.into_iter().collect();

        for (i, Tri(vs)) in faces.iter().enumerate() {
            assert!(
                vs.iter().all(|&j| j < verts.len()),
                "vertex index out of bounds at faces[{i}]: {vs:?}"
            )
        }
        Self { faces, verts }
    }

    /// Returns a new mesh builder deduplicating by exact coordinate
    /// identity.
    pub fn builder() -> Builder {
        Builder::default()
    }
}

impl<K: VertKey> Builder<K> {
    /// Appends a face with the given vertex indices.
    pub fn push_face(&mut self, a: usize, b: usize, c: usize) {
        self.mesh.faces.push(Tri([a, b, c]));
    }

    /// Appends all the faces yielded by the given iterator.
    pub fn push_faces<Fs>(&mut self, faces: Fs)
    where
        Fs: IntoIterator<Item = [usize; 3]>,
    {
        self.mesh.faces.extend(faces.into_iter().map(Tri));
    }

    /// Appends a vertex with the given position, unless an equal vertex
    /// was pushed before. Returns the index of the vertex.
    ///
    /// Distinct vertices are stored in the order they are first pushed.
    pub fn push_vert(&mut self, pos: Point3) -> usize {
        *self.indices.entry(K::key(&pos)).or_insert_with(|| {
            self.mesh.verts.push(pos);
            self.mesh.verts.len() - 1
        })
    }

    /// Appends a geometric face, resolving each of its vertices with
    /// [`push_vert`][Self::push_vert] in face-definition order.
    pub fn push_tri(&mut self, Tri([a, b, c]): Tri<Point3>) {
        let a = self.push_vert(a);
        let b = self.push_vert(b);
        let c = self.push_vert(c);
        self.mesh.faces.push(Tri([a, b, c]));
    }

    /// Appends all the geometric faces yielded by the given iterator.
    pub fn push_tris<Ts>(&mut self, tris: Ts)
    where
        Ts: IntoIterator<Item = Tri<Point3>>,
    {
        for t in tris {
            self.push_tri(t);
        }
    }

    /// Returns the finished mesh containing all the added faces and
    /// vertices.
    ///
    /// # Panics
    /// If any of the vertex indices in the faces ≥ number of vertices.
    pub fn build(self) -> Mesh {
        // Sanity checks done by new()
        Mesh::new(self.mesh.faces, self.mesh.verts)
    }
}

impl<K: VertKey> Default for Builder<K> {
    fn default() -> Self {
        Self {
            mesh: Mesh { faces: vec![], verts: vec![] },
            indices: BTreeMap::new(),
        }
    }
}
