//! Sierpiński fractal solids and the meshes generated from them.
//!
//! Two classic constructions are provided, both driven by the same kind of
//! midpoint recursion:
//!
//! * the Sierpiński tetrahedron, assembled into a single indexed mesh with
//!   vertices shared between adjacent cells merged
//!   ([`tetrahedron_mesh`]), and
//! * the Sierpiński triangle, extruded into one prism per cell for
//!   per-cell coloring ([`triangle_prisms`]).

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod io;
pub mod prism;
pub mod solids;

pub use solids::{
    Tetra, Triangle, assemble, assemble_with, tetrahedron_mesh,
    triangle_prisms,
};
