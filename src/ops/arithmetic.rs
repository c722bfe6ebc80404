//! Elementwise arithmetic: copying and in-place binary operations
//!
//! Binary operations take a same-shape fast path (pairwise iteration, one
//! result allocation); mismatched shapes go through the broadcast engine and
//! fail as a whole if the shapes are incompatible. Division always evaluates
//! per element in f64 and narrows back, so integer division is not silently
//! truncating.

use super::broadcast::broadcast_shapes;
use crate::array::NdArray;
use crate::element::Element;
use crate::error::{Error, Result};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Minimum buffer length before elementwise kernels split across threads
#[cfg(feature = "rayon")]
const PAR_MIN_LEN: usize = 4096;

fn zip_map<T, F>(a: &[T], b: &[T], f: F) -> Vec<T>
where
    T: Element,
    F: Fn(T, T) -> T + Sync + Send,
{
    #[cfg(feature = "rayon")]
    {
        if a.len() >= PAR_MIN_LEN {
            return a
                .par_iter()
                .zip(b.par_iter())
                .map(|(&x, &y)| f(x, y))
                .collect();
        }
    }

    a.iter().zip(b.iter()).map(|(&x, &y)| f(x, y)).collect()
}

fn zip_assign<T, F>(a: &mut [T], b: &[T], f: F)
where
    T: Element,
    F: Fn(T, T) -> T + Sync + Send,
{
    #[cfg(feature = "rayon")]
    {
        if a.len() >= PAR_MIN_LEN {
            a.par_iter_mut()
                .zip(b.par_iter())
                .for_each(|(x, &y)| *x = f(*x, y));
            return;
        }
    }

    for (x, &y) in a.iter_mut().zip(b.iter()) {
        *x = f(*x, y);
    }
}

#[inline]
fn div_elem<T: Element>(x: T, y: T) -> T {
    T::from_f64(x.to_f64() / y.to_f64())
}

pub(crate) fn binary_op<T, F>(a: &NdArray<T>, b: &NdArray<T>, f: F) -> Result<NdArray<T>>
where
    T: Element,
    F: Fn(T, T) -> T + Sync + Send,
{
    if a.shape() == b.shape() {
        let data = zip_map(a.data(), b.data(), f);
        return NdArray::from_vec(data, a.shape());
    }

    let joint = broadcast_shapes(a.shape(), b.shape()).ok_or_else(|| Error::BroadcastError {
        lhs: a.shape().to_vec(),
        rhs: b.shape().to_vec(),
    })?;
    let lhs = a.broadcast_to(&joint)?;
    let rhs = b.broadcast_to(&joint)?;
    let data = zip_map(lhs.data(), rhs.data(), f);
    NdArray::from_vec(data, &joint)
}

impl<T: Element> NdArray<T> {
    /// Elementwise addition, broadcasting if shapes differ.
    pub fn add(&self, other: &NdArray<T>) -> Result<NdArray<T>> {
        binary_op(self, other, |x, y| x + y)
    }

    /// Elementwise subtraction, broadcasting if shapes differ.
    pub fn sub(&self, other: &NdArray<T>) -> Result<NdArray<T>> {
        binary_op(self, other, |x, y| x - y)
    }

    /// Elementwise multiplication, broadcasting if shapes differ.
    pub fn mul(&self, other: &NdArray<T>) -> Result<NdArray<T>> {
        binary_op(self, other, |x, y| x * y)
    }

    /// Elementwise division, broadcasting if shapes differ.
    ///
    /// Each quotient is evaluated in f64 before narrowing back to the
    /// element type.
    pub fn div(&self, other: &NdArray<T>) -> Result<NdArray<T>> {
        binary_op(self, other, div_elem)
    }

    fn binary_assign<F>(&mut self, other: &NdArray<T>, f: F) -> Result<()>
    where
        F: Fn(T, T) -> T + Sync + Send,
    {
        if self.shape() == other.shape() {
            zip_assign(&mut self.data, other.data(), f);
            return Ok(());
        }

        let joint =
            broadcast_shapes(self.shape(), other.shape()).ok_or_else(|| Error::BroadcastError {
                lhs: self.shape().to_vec(),
                rhs: other.shape().to_vec(),
            })?;

        if joint.as_slice() == self.shape() {
            // Receiver keeps its shape: broadcast only the other operand and
            // mutate in place
            let rhs = other.broadcast_to(&joint)?;
            zip_assign(&mut self.data, rhs.data(), f);
        } else {
            // Broadcasting grows the receiver: buffer and shape are both
            // replaced on the same logical identity
            *self = binary_op(self, other, f)?;
        }
        Ok(())
    }

    /// In-place addition. Broadcasting may replace the receiver's buffer and
    /// shape when the joint shape is larger than the receiver's.
    pub fn add_assign_array(&mut self, other: &NdArray<T>) -> Result<()> {
        self.binary_assign(other, |x, y| x + y)
    }

    /// In-place subtraction; see [`NdArray::add_assign_array`] for the
    /// broadcasting contract.
    pub fn sub_assign_array(&mut self, other: &NdArray<T>) -> Result<()> {
        self.binary_assign(other, |x, y| x - y)
    }

    /// In-place multiplication; see [`NdArray::add_assign_array`].
    pub fn mul_assign_array(&mut self, other: &NdArray<T>) -> Result<()> {
        self.binary_assign(other, |x, y| x * y)
    }

    /// In-place division (evaluated in f64 per element); see
    /// [`NdArray::add_assign_array`].
    pub fn div_assign_array(&mut self, other: &NdArray<T>) -> Result<()> {
        self.binary_assign(other, div_elem)
    }

    /// Add a scalar to every element.
    pub fn add_scalar(&self, value: T) -> NdArray<T> {
        self.map(|x| x + value)
    }

    /// Subtract a scalar from every element.
    pub fn sub_scalar(&self, value: T) -> NdArray<T> {
        self.map(|x| x - value)
    }

    /// Multiply every element by a scalar.
    pub fn mul_scalar(&self, value: T) -> NdArray<T> {
        self.map(|x| x * value)
    }

    /// Divide every element by a scalar (evaluated in f64).
    pub fn div_scalar(&self, value: T) -> NdArray<T> {
        self.map(|x| div_elem(x, value))
    }

    /// Elementwise negation.
    pub fn neg(&self) -> NdArray<T> {
        self.map(|x| T::from_f64(-x.to_f64()))
    }
}

// Operator sugar. The operators delegate to the fallible methods and panic on
// incompatible shapes; use the named methods to handle shape errors.

impl<T: Element> Add for &NdArray<T> {
    type Output = NdArray<T>;

    fn add(self, rhs: Self) -> NdArray<T> {
        NdArray::add(self, rhs).expect("ndarray addition failed")
    }
}

impl<T: Element> Sub for &NdArray<T> {
    type Output = NdArray<T>;

    fn sub(self, rhs: Self) -> NdArray<T> {
        NdArray::sub(self, rhs).expect("ndarray subtraction failed")
    }
}

impl<T: Element> Mul for &NdArray<T> {
    type Output = NdArray<T>;

    fn mul(self, rhs: Self) -> NdArray<T> {
        NdArray::mul(self, rhs).expect("ndarray multiplication failed")
    }
}

impl<T: Element> Div for &NdArray<T> {
    type Output = NdArray<T>;

    fn div(self, rhs: Self) -> NdArray<T> {
        NdArray::div(self, rhs).expect("ndarray division failed")
    }
}

impl<T: Element> Neg for &NdArray<T> {
    type Output = NdArray<T>;

    fn neg(self) -> NdArray<T> {
        NdArray::neg(self)
    }
}

impl<T: Element> AddAssign<&NdArray<T>> for NdArray<T> {
    fn add_assign(&mut self, rhs: &NdArray<T>) {
        self.add_assign_array(rhs).expect("ndarray += failed")
    }
}

impl<T: Element> SubAssign<&NdArray<T>> for NdArray<T> {
    fn sub_assign(&mut self, rhs: &NdArray<T>) {
        self.sub_assign_array(rhs).expect("ndarray -= failed")
    }
}

impl<T: Element> MulAssign<&NdArray<T>> for NdArray<T> {
    fn mul_assign(&mut self, rhs: &NdArray<T>) {
        self.mul_assign_array(rhs).expect("ndarray *= failed")
    }
}

impl<T: Element> DivAssign<&NdArray<T>> for NdArray<T> {
    fn div_assign(&mut self, rhs: &NdArray<T>) {
        self.div_assign_array(rhs).expect("ndarray /= failed")
    }
}
