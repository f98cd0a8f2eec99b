//! The Sierpiński solids: fractal tetrahedra and triangles produced by
//! recursive subdivision of a base shape.

mod base;
mod subdiv;

pub use base::*;
pub use subdiv::*;
