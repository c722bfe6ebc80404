//! Broadcast engine: joint shapes and materialized broadcasts
//!
//! Shapes are reconciled with the NumPy right-aligned rule: the shorter shape
//! is conceptually padded on the left with size-1 dimensions, and each aligned
//! pair must be equal or contain a 1. Broadcasting never mutates data; it only
//! computes shape mappings, and [`NdArray::broadcast_to`] materializes them
//! into a fresh buffer.

use crate::array::{NdArray, Shape};
use crate::error::{Error, Result};

/// Compute the broadcast shape of two shapes
///
/// Returns `None` if the shapes are incompatible; callers must then fail
/// their operation rather than coerce.
pub fn broadcast_shapes(a: &[usize], b: &[usize]) -> Option<Shape> {
    let ndim = a.len().max(b.len());
    let mut joint = Shape::with_capacity(ndim);

    // Walk the trailing dimensions of both shapes in lockstep; a shape that
    // runs out of dimensions behaves as if padded with 1s
    for i in 0..ndim {
        let da = if i < a.len() { a[a.len() - 1 - i] } else { 1 };
        let db = if i < b.len() { b[b.len() - 1 - i] } else { 1 };

        if da == db {
            joint.push(da);
        } else if da == 1 {
            joint.push(db);
        } else if db == 1 {
            joint.push(da);
        } else {
            return None;
        }
    }

    joint.reverse();
    Some(joint)
}

impl<T: Copy> NdArray<T> {
    /// Materialize this array broadcast to `target` shape.
    ///
    /// If the shape already matches, the array is returned as-is (one buffer
    /// copy, no remapping work). Otherwise each target coordinate maps back
    /// to a source coordinate by pinning size-1 source dimensions to index 0
    /// and ignoring target dimensions the source doesn't have.
    ///
    /// Fails with [`Error::BroadcastError`] naming both shapes if the source
    /// shape cannot broadcast to `target`.
    pub fn broadcast_to(&self, target: &[usize]) -> Result<NdArray<T>> {
        if self.shape() == target {
            return Ok(self.clone());
        }

        let ndim = self.ndim();
        if target.len() < ndim {
            return Err(Error::BroadcastError {
                lhs: self.shape().to_vec(),
                rhs: target.to_vec(),
            });
        }

        // Right-align: source dimension d lines up with target dimension d + pad.
        // A source dimension must match the target or be 1.
        let pad = target.len() - ndim;
        let src_strides = Shape::from(self.shape()).strides();
        let mut eff_strides = vec![0usize; target.len()];
        for d in 0..ndim {
            let s = self.shape()[d];
            let t = target[pad + d];
            if s == t {
                eff_strides[pad + d] = src_strides[d];
            } else if s == 1 {
                eff_strides[pad + d] = 0;
            } else {
                return Err(Error::BroadcastError {
                    lhs: self.shape().to_vec(),
                    rhs: target.to_vec(),
                });
            }
        }

        let out_shape = Shape::from(target);
        let total = out_shape.size();
        let mut data = Vec::with_capacity(total);
        let mut cursor = vec![0usize; target.len()];
        let mut offset = 0usize;
        for _ in 0..total {
            data.push(self.data[offset]);
            for d in (0..target.len()).rev() {
                cursor[d] += 1;
                if cursor[d] < target[d] {
                    offset += eff_strides[d];
                    break;
                }
                cursor[d] = 0;
                offset -= (target[d] - 1) * eff_strides[d];
            }
        }

        Ok(NdArray::from_parts(data, out_shape))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broadcast_shapes() {
        // Same shapes
        assert_eq!(broadcast_shapes(&[2, 3], &[2, 3]).unwrap().as_slice(), &[2, 3]);

        // Broadcasting with 1
        assert_eq!(broadcast_shapes(&[2, 1], &[2, 3]).unwrap().as_slice(), &[2, 3]);
        assert_eq!(broadcast_shapes(&[3, 1], &[1, 4]).unwrap().as_slice(), &[3, 4]);

        // Different ranks
        assert_eq!(broadcast_shapes(&[2, 3], &[3]).unwrap().as_slice(), &[2, 3]);

        // Incompatible shapes
        assert_eq!(broadcast_shapes(&[2, 3], &[4, 5]), None);
        assert_eq!(broadcast_shapes(&[3], &[4]), None);
    }

    #[test]
    fn test_broadcast_to_row() {
        let a = NdArray::from_vec(vec![1, 2, 3], &[3]).unwrap();
        let b = a.broadcast_to(&[2, 3]).unwrap();
        assert_eq!(b.shape(), &[2, 3]);
        assert_eq!(b.data(), &[1, 2, 3, 1, 2, 3]);
    }

    #[test]
    fn test_broadcast_to_column() {
        let a = NdArray::from_vec(vec![1, 2], &[2, 1]).unwrap();
        let b = a.broadcast_to(&[2, 3]).unwrap();
        assert_eq!(b.data(), &[1, 1, 1, 2, 2, 2]);
    }

    #[test]
    fn test_broadcast_same_shape_is_identity() {
        let a = NdArray::from_vec(vec![1, 2, 3, 4], &[2, 2]).unwrap();
        assert_eq!(a.broadcast_to(&[2, 2]).unwrap(), a);
    }

    #[test]
    fn test_broadcast_incompatible() {
        let a = NdArray::from_vec(vec![1, 2, 3], &[3]).unwrap();
        let err = a.broadcast_to(&[2, 4]).unwrap_err();
        assert_eq!(
            err,
            Error::BroadcastError {
                lhs: vec![3],
                rhs: vec![2, 4]
            }
        );
    }

    #[test]
    fn test_broadcast_scalar_to_any() {
        let s = NdArray::from_vec(vec![7], &[]).unwrap();
        let b = s.broadcast_to(&[2, 2]).unwrap();
        assert_eq!(b.data(), &[7, 7, 7, 7]);
    }
}
