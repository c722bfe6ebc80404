//! Element traits mapping Rust numeric types onto the array engine
//!
//! The container itself is generic over any `Copy` type (boolean masks reuse
//! it directly); arithmetic requires [`Element`], and the linear algebra
//! kernels additionally require [`FloatElement`].

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// Trait for types that can participate in array arithmetic
///
/// # Bounds
/// - `Copy + Send + Sync + 'static` - Basic trait requirements
/// - `Add + Sub + Mul + Div` - Arithmetic operations (Output = Self)
/// - `PartialOrd` - Comparison for min/max operations
///
/// Note: `Neg` is NOT required since unsigned types don't support it.
/// Negation is handled via to_f64/from_f64 conversion in kernels, as is
/// division of integer-typed arrays (evaluated in f64 per element and
/// narrowed back, so truncating division never masquerades as a correct
/// result).
pub trait Element:
    Copy
    + Send
    + Sync
    + 'static
    + PartialOrd
    + PartialEq
    + fmt::Debug
    + fmt::Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Zero value
    fn zero() -> Self;

    /// One value
    fn one() -> Self;

    /// Convert to f64 for generic numeric operations
    fn to_f64(self) -> f64;

    /// Convert from f64 to this type
    fn from_f64(v: f64) -> Self;
}

impl Element for f64 {
    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn one() -> Self {
        1.0
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }
}

impl Element for f32 {
    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn one() -> Self {
        1.0
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }
}

macro_rules! impl_int_element {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                #[inline]
                fn zero() -> Self {
                    0
                }

                #[inline]
                fn one() -> Self {
                    1
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(v: f64) -> Self {
                    v as $t
                }
            }
        )*
    };
}

impl_int_element!(i64, i32, i16, i8, u64, u32, u16, u8);

/// Trait for elements that support linear algebra operations
///
/// Extends [`Element`] with the operations the numerical kernels need.
/// Implemented for `f32` and `f64` only; determinants, inverses, and
/// decompositions of integer matrices require an explicit cast first.
pub trait FloatElement: Element {
    /// Returns machine epsilon for this type
    fn epsilon_val() -> f64;

    /// Returns absolute value
    fn abs_val(self) -> Self;

    /// Returns square root
    fn sqrt_val(self) -> Self;

    /// Returns negation
    fn neg_val(self) -> Self;
}

impl FloatElement for f32 {
    #[inline]
    fn epsilon_val() -> f64 {
        f32::EPSILON as f64
    }

    #[inline]
    fn abs_val(self) -> Self {
        self.abs()
    }

    #[inline]
    fn sqrt_val(self) -> Self {
        self.sqrt()
    }

    #[inline]
    fn neg_val(self) -> Self {
        -self
    }
}

impl FloatElement for f64 {
    #[inline]
    fn epsilon_val() -> f64 {
        f64::EPSILON
    }

    #[inline]
    fn abs_val(self) -> Self {
        self.abs()
    }

    #[inline]
    fn sqrt_val(self) -> Self {
        self.sqrt()
    }

    #[inline]
    fn neg_val(self) -> Self {
        -self
    }
}
