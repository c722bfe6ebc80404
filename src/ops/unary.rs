//! Elementwise float math wrappers
//!
//! These map a scalar function across the buffer through the same ownership
//! contract as everything else (fresh buffer, operand untouched). They never
//! touch indexing or broadcasting internals.

use crate::array::NdArray;

macro_rules! impl_float_unary {
    ($t:ty) => {
        impl NdArray<$t> {
            /// Elementwise sine.
            pub fn sin(&self) -> Self {
                self.map(|x| x.sin())
            }

            /// Elementwise cosine.
            pub fn cos(&self) -> Self {
                self.map(|x| x.cos())
            }

            /// Elementwise tangent.
            pub fn tan(&self) -> Self {
                self.map(|x| x.tan())
            }

            /// Elementwise exponential.
            pub fn exp(&self) -> Self {
                self.map(|x| x.exp())
            }

            /// Elementwise natural logarithm.
            pub fn ln(&self) -> Self {
                self.map(|x| x.ln())
            }

            /// Elementwise square root.
            pub fn sqrt(&self) -> Self {
                self.map(|x| x.sqrt())
            }

            /// Elementwise absolute value.
            pub fn abs(&self) -> Self {
                self.map(|x| x.abs())
            }

            /// Elementwise integer power.
            pub fn powi(&self, n: i32) -> Self {
                self.map(|x| x.powi(n))
            }

            /// Elementwise float power.
            pub fn powf(&self, p: $t) -> Self {
                self.map(|x| x.powf(p))
            }
        }
    };
}

impl_float_unary!(f32);
impl_float_unary!(f64);
