//! Core types for generating Sierpiński fractal meshes.
//!
//! Includes a small math library with 3D points, vectors, linear
//! interpolation, and approximate-equality testing, as well as an indexed
//! triangle mesh type and a mesh builder that merges coincident vertices.
//!
//! # Crate features
//!
//! * `std` (default):
//!   Makes available items requiring floating-point functions not included
//!   in `core`, such as square roots and distances.
//!
//!   If this feature is disabled, the crate only depends on `alloc`.
//!
//! * `libm`:
//!   Provides software implementations of floating-point functions via the
//!   [libm](https://crates.io/crates/libm) crate.
//!
//! * `mm`:
//!   Provides fast approximate implementations of floating-point functions
//!   via the [micromath](https://crates.io/crates/micromath) crate.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;
extern crate core;

pub mod geom;
pub mod math;
