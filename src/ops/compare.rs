//! Elementwise comparisons and boolean-mask consumers
//!
//! Comparisons broadcast exactly like arithmetic and produce a same-shaped
//! `NdArray<bool>` mask. There is no separate mask type; the generic
//! container carries boolean elements directly.

use super::broadcast::broadcast_shapes;
use crate::array::NdArray;
use crate::element::Element;
use crate::error::{Error, Result};

fn compare_op<T, F>(a: &NdArray<T>, b: &NdArray<T>, f: F) -> Result<NdArray<bool>>
where
    T: Element,
    F: Fn(T, T) -> bool,
{
    if a.shape() == b.shape() {
        let data = a
            .data()
            .iter()
            .zip(b.data().iter())
            .map(|(&x, &y)| f(x, y))
            .collect();
        return NdArray::from_vec(data, a.shape());
    }

    let joint = broadcast_shapes(a.shape(), b.shape()).ok_or_else(|| Error::BroadcastError {
        lhs: a.shape().to_vec(),
        rhs: b.shape().to_vec(),
    })?;
    let lhs = a.broadcast_to(&joint)?;
    let rhs = b.broadcast_to(&joint)?;
    let data = lhs
        .data()
        .iter()
        .zip(rhs.data().iter())
        .map(|(&x, &y)| f(x, y))
        .collect();
    NdArray::from_vec(data, &joint)
}

impl<T: Element> NdArray<T> {
    /// Elementwise equality mask.
    pub fn eq_elem(&self, other: &NdArray<T>) -> Result<NdArray<bool>> {
        compare_op(self, other, |x, y| x == y)
    }

    /// Elementwise inequality mask.
    pub fn ne_elem(&self, other: &NdArray<T>) -> Result<NdArray<bool>> {
        compare_op(self, other, |x, y| x != y)
    }

    /// Elementwise less-than mask.
    pub fn lt(&self, other: &NdArray<T>) -> Result<NdArray<bool>> {
        compare_op(self, other, |x, y| x < y)
    }

    /// Elementwise less-than-or-equal mask.
    pub fn le(&self, other: &NdArray<T>) -> Result<NdArray<bool>> {
        compare_op(self, other, |x, y| x <= y)
    }

    /// Elementwise greater-than mask.
    pub fn gt(&self, other: &NdArray<T>) -> Result<NdArray<bool>> {
        compare_op(self, other, |x, y| x > y)
    }

    /// Elementwise greater-than-or-equal mask.
    pub fn ge(&self, other: &NdArray<T>) -> Result<NdArray<bool>> {
        compare_op(self, other, |x, y| x >= y)
    }
}

impl<T: Copy> NdArray<T> {
    /// Collect the elements where `mask` is true into a 1-D array, in
    /// row-major order.
    ///
    /// The mask must have exactly this array's shape
    /// ([`Error::ShapeMismatch`] otherwise).
    pub fn select(&self, mask: &NdArray<bool>) -> Result<NdArray<T>> {
        if mask.shape() != self.shape() {
            return Err(Error::ShapeMismatch {
                expected: self.shape().to_vec(),
                got: mask.shape().to_vec(),
            });
        }
        let data: Vec<T> = self
            .data
            .iter()
            .zip(mask.data().iter())
            .filter(|(_, &keep)| keep)
            .map(|(&v, _)| v)
            .collect();
        let len = data.len();
        NdArray::from_vec(data, &[len])
    }

    /// Overwrite the elements where `mask` is true with `value`.
    ///
    /// Validates the mask shape before writing anything.
    pub fn set_where(&mut self, mask: &NdArray<bool>, value: T) -> Result<()> {
        if mask.shape() != self.shape() {
            return Err(Error::ShapeMismatch {
                expected: self.shape().to_vec(),
                got: mask.shape().to_vec(),
            });
        }
        for (v, &keep) in self.data.iter_mut().zip(mask.data().iter()) {
            if keep {
                *v = value;
            }
        }
        Ok(())
    }
}
