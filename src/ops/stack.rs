//! Joining arrays: concatenate, vstack, hstack

use crate::array::{NdArray, Shape};
use crate::error::{Error, Result};

/// Concatenate arrays along an existing axis.
///
/// All inputs must share the same shape except along `axis`. The output's
/// size along `axis` is the sum of the inputs' sizes there.
pub fn concatenate<T: Copy>(arrays: &[&NdArray<T>], axis: usize) -> Result<NdArray<T>> {
    let first = arrays.first().ok_or(Error::InvalidArgument {
        arg: "arrays",
        reason: "cannot concatenate an empty list of arrays".to_string(),
    })?;
    let ndim = first.ndim();
    if axis >= ndim {
        return Err(Error::InvalidAxis { axis, ndim });
    }

    let mut axis_total = 0usize;
    for arr in arrays {
        if arr.ndim() != ndim {
            return Err(Error::ShapeMismatch {
                expected: first.shape().to_vec(),
                got: arr.shape().to_vec(),
            });
        }
        for d in 0..ndim {
            if d != axis && arr.shape()[d] != first.shape()[d] {
                return Err(Error::ShapeMismatch {
                    expected: first.shape().to_vec(),
                    got: arr.shape().to_vec(),
                });
            }
        }
        axis_total += arr.shape()[axis];
    }

    let mut out_shape = Shape::from(first.shape());
    out_shape[axis] = axis_total;

    // Row-major layout splits each array into `outer` contiguous blocks of
    // `shape[axis] * inner` elements; the output interleaves those blocks
    let outer: usize = first.shape()[..axis].iter().product();
    let inner: usize = first.shape()[axis + 1..].iter().product();

    let mut data = Vec::with_capacity(out_shape.size());
    for o in 0..outer {
        for arr in arrays {
            let block = arr.shape()[axis] * inner;
            let start = o * block;
            data.extend_from_slice(&arr.data()[start..start + block]);
        }
    }

    Ok(NdArray::from_parts(data, out_shape))
}

/// Stack arrays vertically (row-wise).
///
/// 1-D inputs are treated as single rows; higher-rank inputs concatenate
/// along axis 0.
pub fn vstack<T: Copy>(arrays: &[&NdArray<T>]) -> Result<NdArray<T>> {
    let promoted: Vec<NdArray<T>> = arrays
        .iter()
        .map(|a| {
            if a.ndim() == 1 {
                a.reshape(&[1, a.size()])
            } else {
                Ok((*a).clone())
            }
        })
        .collect::<Result<_>>()?;
    let refs: Vec<&NdArray<T>> = promoted.iter().collect();
    concatenate(&refs, 0)
}

/// Stack arrays horizontally (column-wise).
///
/// 1-D inputs concatenate end to end; higher-rank inputs concatenate along
/// axis 1.
pub fn hstack<T: Copy>(arrays: &[&NdArray<T>]) -> Result<NdArray<T>> {
    let axis = match arrays.first() {
        Some(a) if a.ndim() <= 1 => 0,
        _ => 1,
    };
    concatenate(arrays, axis)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a2x2() -> NdArray<i32> {
        NdArray::from_vec(vec![1, 2, 3, 4], &[2, 2]).unwrap()
    }

    fn b2x2() -> NdArray<i32> {
        NdArray::from_vec(vec![5, 6, 7, 8], &[2, 2]).unwrap()
    }

    #[test]
    fn test_concatenate_axis0() {
        let r = concatenate(&[&a2x2(), &b2x2()], 0).unwrap();
        assert_eq!(r.shape(), &[4, 2]);
        assert_eq!(r.data(), &[1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_concatenate_axis1() {
        let r = concatenate(&[&a2x2(), &b2x2()], 1).unwrap();
        assert_eq!(r.shape(), &[2, 4]);
        assert_eq!(r.data(), &[1, 2, 5, 6, 3, 4, 7, 8]);
    }

    #[test]
    fn test_concatenate_shape_mismatch() {
        let a = a2x2();
        let b = NdArray::from_vec(vec![1, 2, 3], &[1, 3]).unwrap();
        assert!(matches!(
            concatenate(&[&a, &b], 0).unwrap_err(),
            Error::ShapeMismatch { .. }
        ));
    }

    #[test]
    fn test_concatenate_bad_axis() {
        assert_eq!(
            concatenate(&[&a2x2()], 2).unwrap_err(),
            Error::InvalidAxis { axis: 2, ndim: 2 }
        );
    }

    #[test]
    fn test_vstack_promotes_1d() {
        let a = NdArray::from_vec(vec![1, 2, 3], &[3]).unwrap();
        let b = NdArray::from_vec(vec![4, 5, 6], &[3]).unwrap();
        let r = vstack(&[&a, &b]).unwrap();
        assert_eq!(r.shape(), &[2, 3]);
        assert_eq!(r.data(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_hstack_1d_end_to_end() {
        let a = NdArray::from_vec(vec![1, 2], &[2]).unwrap();
        let b = NdArray::from_vec(vec![3, 4], &[2]).unwrap();
        let r = hstack(&[&a, &b]).unwrap();
        assert_eq!(r.shape(), &[4]);
        assert_eq!(r.data(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_hstack_2d() {
        let r = hstack(&[&a2x2(), &b2x2()]).unwrap();
        assert_eq!(r.shape(), &[2, 4]);
    }
}
