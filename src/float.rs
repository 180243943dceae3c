//! Floating-point abstraction trait for generic numeric operations.

use core::cmp::PartialOrd;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// Trait abstracting the floating-point operations the engine needs.
///
/// Implemented for `f32` and `f64`. Square roots and absolute values go
/// through `libm` so the crate builds without `std`.
pub trait Float:
    'static
    + Copy
    + Clone
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Default
    + core::fmt::Debug
    + core::fmt::Display
{
    /// The additive identity (0.0).
    fn zero() -> Self;
    /// The multiplicative identity (1.0).
    fn one() -> Self;
    /// Half (0.5).
    fn half() -> Self;
    /// Two (2.0).
    fn two() -> Self;
    /// Square root.
    fn sqrt(self) -> Self;
    /// Absolute value.
    fn abs(self) -> Self;
    /// True unless the value is NaN or infinite.
    fn is_finite(self) -> bool;
    /// Convert from f64. Crate constants are stored as f64 so `f64` systems
    /// see them exactly.
    fn from_f64(v: f64) -> Self;

    /// True for finite values strictly greater than zero.
    ///
    /// This is the acceptance test for masses, spring constants, rest
    /// lengths, minimum distances and time steps. NaN fails it.
    fn is_positive_finite(self) -> bool {
        self.is_finite() && self > Self::zero()
    }
}

impl Float for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn two() -> Self { 2.0 }
    fn sqrt(self) -> Self { libm::sqrtf(self) }
    fn abs(self) -> Self { libm::fabsf(self) }
    fn is_finite(self) -> bool { f32::is_finite(self) }
    fn from_f64(v: f64) -> Self { v as f32 }
}

impl Float for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn two() -> Self { 2.0 }
    fn sqrt(self) -> Self { libm::sqrt(self) }
    fn abs(self) -> Self { libm::fabs(self) }
    fn is_finite(self) -> bool { f64::is_finite(self) }
    fn from_f64(v: f64) -> Self { v }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_finite_rejects_edge_values() {
        assert!(1.0f32.is_positive_finite());
        assert!(!0.0f32.is_positive_finite());
        assert!(!(-1.0f64).is_positive_finite());
        assert!(!f64::NAN.is_positive_finite());
        assert!(!f64::INFINITY.is_positive_finite());
    }

    #[test]
    fn constants_convert_without_widening_error() {
        assert_eq!(<f64 as Float>::from_f64(0.01), 0.01);
        assert_eq!(<f32 as Float>::from_f64(0.01), 0.01f32);
    }
}
