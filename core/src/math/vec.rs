//! Vectors in 3-space.

use core::ops::{Add, Index, Mul, Neg, Sub};

use crate::math::{ApproxEq, Lerp};

/// A displacement in 3-space, with `f32` components.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[repr(transparent)]
pub struct Vec3(pub [f32; 3]);

/// Returns a 3-vector with the given components.
#[inline]
pub const fn vec3(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3([x, y, z])
}

impl Vec3 {
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

    /// Returns the length of `self`, squared.
    #[inline]
    pub fn len_sqr(&self) -> f32 {
        let [x, y, z] = self.0;
        x * x + y * y + z * z
    }

    /// Returns the length of `self`.
    #[cfg(feature = "fp")]
    #[inline]
    pub fn len(&self) -> f32 {
        use super::float::f32;
        f32::sqrt(self.len_sqr())
    }
}

impl Add for Vec3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(core::array::from_fn(|i| self.0[i] + rhs.0[i]))
    }
}

impl Sub for Vec3 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(core::array::from_fn(|i| self.0[i] - rhs.0[i]))
    }
}

impl Neg for Vec3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self(self.0.map(|c| -c))
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self(self.0.map(|c| c * rhs))
    }
}

impl Index<usize> for Vec3 {
    type Output = f32;
    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.0[i]
    }
}

impl Lerp for Vec3 {
    #[inline]
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Self(core::array::from_fn(|i| self.0[i].lerp(&other.0[i], t)))
    }
}

impl ApproxEq<Self, f32> for Vec3 {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &f32) -> bool {
        self.0.approx_eq_eps(&other.0, rel_eps)
    }
    fn relative_epsilon() -> f32 {
        f32::relative_epsilon()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_ops() {
        assert_eq!(vec3(1.0, 2.0, 3.0) + vec3(1.0, 0.0, -1.0), vec3(2.0, 2.0, 2.0));
        assert_eq!(vec3(1.0, 2.0, 3.0) - vec3(1.0, 0.0, -1.0), vec3(0.0, 2.0, 4.0));
        assert_eq!(-vec3(1.0, -2.0, 0.0), vec3(-1.0, 2.0, -0.0));
        assert_eq!(vec3(1.0, 2.0, 3.0) * 2.0, vec3(2.0, 4.0, 6.0));
    }

    #[test]
    fn vector_len() {
        assert_eq!(vec3(2.0, -3.0, 6.0).len_sqr(), 49.0);
        #[cfg(feature = "fp")]
        assert_eq!(vec3(2.0, -3.0, 6.0).len(), 7.0);
    }
}
