//! Points in 3-space.

use core::ops::{Add, Index, Sub};

use crate::math::{ApproxEq, Lerp, vec::Vec3};

/// A point in 3-space, with `f32` components.
///
/// Equality is exact per-component comparison; two points compare equal
/// only if all their coordinates do. This is what makes points usable as
/// identities when merging the vertices of adjacent fractal cells.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[repr(transparent)]
pub struct Point3(pub [f32; 3]);

/// Returns a 3-point with the given components.
#[inline]
pub const fn pt3(x: f32, y: f32, z: f32) -> Point3 {
    Point3([x, y, z])
}

impl Point3 {
    /// Returns the x component of `self`.
    #[inline]
    pub fn x(&self) -> f32 {
        self.0[0]
    }
    /// Returns the y component of `self`.
    #[inline]
    pub fn y(&self) -> f32 {
        self.0[1]
    }
    /// Returns the z component of `self`.
    #[inline]
    pub fn z(&self) -> f32 {
        self.0[2]
    }

    /// Returns the distance between `self` and `other`, squared.
    #[inline]
    pub fn distance_sqr(&self, other: &Self) -> f32 {
        (*self - *other).len_sqr()
    }

    /// Returns the distance between `self` and `other`.
    #[cfg(feature = "fp")]
    #[inline]
    pub fn distance(&self, other: &Self) -> f32 {
        (*self - *other).len()
    }
}

impl Lerp for Point3 {
    /// Linearly interpolates between `self` and `other`, componentwise.
    ///
    /// The same two operands in the same order always interpolate to a
    /// bitwise identical result, so midpoints of a shared edge computed by
    /// different callers can be merged by exact equality.
    #[inline]
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Self(core::array::from_fn(|i| self.0[i].lerp(&other.0[i], t)))
    }
}

impl ApproxEq<Self, f32> for Point3 {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &f32) -> bool {
        self.0.approx_eq_eps(&other.0, rel_eps)
    }
    fn relative_epsilon() -> f32 {
        f32::relative_epsilon()
    }
}

impl Add<Vec3> for Point3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Vec3) -> Self {
        Self(core::array::from_fn(|i| self.0[i] + rhs.0[i]))
    }
}

impl Sub for Point3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Self) -> Vec3 {
        Vec3(core::array::from_fn(|i| self.0[i] - rhs.0[i]))
    }
}

impl Index<usize> for Point3 {
    type Output = f32;
    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.0[i]
    }
}

impl From<[f32; 3]> for Point3 {
    #[inline]
    fn from(repr: [f32; 3]) -> Self {
        Self(repr)
    }
}
