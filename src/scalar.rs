//! Numeric traits for storage and accumulation types.
//!
//! Points and centroids are stored as `T: Scalar`. Centroid sums are
//! accumulated in a wider `A: Accumulator<T>` and narrowed back into `T`
//! with [`saturating_cast`] when the centroids are updated.

use num_traits::{AsPrimitive, Bounded, NumCast, Zero};
use std::fmt::Debug;
use std::ops::{AddAssign, Div};

/// Storage type for point and centroid components.
///
/// Implemented for every primitive integer and float type.
pub trait Scalar: Copy + PartialOrd + Bounded + Zero + AsPrimitive<f64> + Debug {}

impl<T> Scalar for T where T: Copy + PartialOrd + Bounded + Zero + AsPrimitive<f64> + Debug {}

/// Accumulation type for centroid sums over storage type `T`.
///
/// `A: From<T>` guarantees every stored value fits in the accumulator
/// without loss, e.g. `u8 -> u32`, `i32 -> i64`, `f32 -> f64`, or `T` itself.
pub trait Accumulator<T: Scalar>:
    Copy + PartialOrd + Zero + AddAssign + Div<Output = Self> + From<T>
{
    /// Convert a point count into the accumulator domain.
    ///
    /// Counts beyond the accumulator's range clamp to its maximum, so a
    /// non-empty cluster never divides by zero.
    fn from_count(count: usize) -> Self;

    /// Narrow back into `T`, clamping to its representable range
    fn saturate(self) -> T;
}

impl<T, A> Accumulator<T> for A
where
    T: Scalar + AsPrimitive<A>,
    A: Copy
        + PartialOrd
        + Zero
        + Bounded
        + NumCast
        + AddAssign
        + Div<Output = A>
        + From<T>
        + AsPrimitive<T>,
{
    #[inline]
    fn from_count(count: usize) -> Self {
        num_traits::cast::<usize, A>(count).unwrap_or_else(A::max_value)
    }

    #[inline]
    fn saturate(self) -> T {
        saturating_cast(self)
    }
}

/// Cast `value` into `T`, clamping to `[T::min_value(), T::max_value()]`.
///
/// For floating-point `T` the lower bound is the most negative finite
/// value, so negative centroids survive the cast.
#[inline]
pub fn saturating_cast<A, T>(value: A) -> T
where
    A: PartialOrd + AsPrimitive<T>,
    T: Bounded + AsPrimitive<A>,
{
    let lo: A = T::min_value().as_();
    let hi: A = T::max_value().as_();

    if value < lo {
        T::min_value()
    } else if value > hi {
        T::max_value()
    } else {
        value.as_()
    }
}
