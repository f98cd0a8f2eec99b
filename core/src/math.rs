//! Points, vectors, and other mathematics used by the mesh generators.
//!
//! Includes [points][point], [vectors][vec], [linear interpolation][Lerp],
//! and utilities such as [approximate equality comparisons][approx].

pub use {
    approx::ApproxEq,
    point::{Point3, pt3},
    vec::{Vec3, vec3},
};

pub mod approx;
pub mod float;
pub mod point;
pub mod vec;

/// The square root of 3.
pub const SQRT_3: f32 = 1.7320508;
/// The square root of 6.
pub const SQRT_6: f32 = 2.4494898;

/// Trait for linear interpolation between two values.
pub trait Lerp: Sized {
    /// Linearly interpolates between `self` and `other`.
    ///
    /// If `t` = 0, returns `self`; if `t` = 1, returns `other`.
    /// For 0 < `t` < 1, returns the affine combination
    /// ```text
    /// self + t * (other - self)
    /// ```
    ///
    /// If `t` < 0 or `t` > 1, returns the appropriate extrapolated value.
    /// If `t` is NaN, the result is unspecified.
    ///
    /// # Examples
    /// ```
    /// use sierpinski_core::math::Lerp;
    ///
    /// assert_eq!(1.0.lerp(&5.0, 0.25), 2.0);
    /// ```
    fn lerp(&self, other: &Self, t: f32) -> Self;

    /// Returns the (unweighted) average of `self` and `other`.
    ///
    /// # Examples
    /// ```
    /// use sierpinski_core::math::{Lerp, pt3, Point3};
    ///
    /// let a: Point3 = pt3(0.0, 0.0, 0.0);
    /// let b = pt3(2.0, 0.0, 0.0);
    /// assert_eq!(a.midpoint(&b), pt3(1.0, 0.0, 0.0));
    /// ```
    fn midpoint(&self, other: &Self) -> Self {
        self.lerp(other, 0.5)
    }
}

/// Linearly interpolates between two values.
///
/// For examples and more information, see [`Lerp::lerp`].
#[inline]
pub fn lerp<T: Lerp>(t: f32, from: T, to: T) -> T {
    from.lerp(&to, t)
}

impl Lerp for f32 {
    #[inline]
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + t * (other - self)
    }
}
