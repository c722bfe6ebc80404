//! Row-major index arithmetic: multi-dimensional coordinates <-> flat offsets

use crate::error::{Error, Result};

/// Convert multi-dimensional coordinates to a flat row-major offset.
///
/// The coordinate count must equal the rank and each coordinate must lie in
/// `[0, shape[d])`. Offset is `sum(coords[d] * stride[d])` with the last
/// dimension varying fastest.
pub fn flatten_index(coords: &[usize], shape: &[usize]) -> Result<usize> {
    if coords.len() != shape.len() {
        return Err(Error::ArityMismatch {
            expected: shape.len(),
            got: coords.len(),
        });
    }

    for (dim, (&idx, &size)) in coords.iter().zip(shape.iter()).enumerate() {
        if idx >= size {
            return Err(Error::OutOfBounds {
                dim,
                index: idx as isize,
                size,
            });
        }
    }

    let mut offset = 0usize;
    let mut stride = 1usize;
    for (&idx, &size) in coords.iter().zip(shape.iter()).rev() {
        offset += idx * stride;
        stride *= size;
    }

    Ok(offset)
}

/// Convert a flat row-major offset back to multi-dimensional coordinates.
///
/// Inverse of [`flatten_index`]: for every in-bounds offset,
/// `flatten_index(&unflatten_index(o, shape)?, shape)? == o`.
pub fn unflatten_index(offset: usize, shape: &[usize]) -> Result<Vec<usize>> {
    let size: usize = shape.iter().product();
    if offset >= size {
        return Err(Error::OutOfBounds {
            dim: 0,
            index: offset as isize,
            size,
        });
    }

    let mut coords = vec![0usize; shape.len()];
    let mut rem = offset;
    for (d, &dim) in shape.iter().enumerate().rev() {
        coords[d] = rem % dim;
        rem /= dim;
    }

    Ok(coords)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_row_major() {
        let shape = [2, 3];
        assert_eq!(flatten_index(&[0, 0], &shape).unwrap(), 0);
        assert_eq!(flatten_index(&[0, 2], &shape).unwrap(), 2);
        assert_eq!(flatten_index(&[1, 0], &shape).unwrap(), 3);
        assert_eq!(flatten_index(&[1, 2], &shape).unwrap(), 5);
    }

    #[test]
    fn test_flatten_scalar() {
        assert_eq!(flatten_index(&[], &[]).unwrap(), 0);
    }

    #[test]
    fn test_flatten_arity_mismatch() {
        let err = flatten_index(&[1, 2, 3], &[2, 3]).unwrap_err();
        assert_eq!(err, Error::ArityMismatch { expected: 2, got: 3 });
    }

    #[test]
    fn test_flatten_out_of_bounds_names_dimension() {
        let err = flatten_index(&[1, 3], &[2, 3]).unwrap_err();
        assert_eq!(
            err,
            Error::OutOfBounds {
                dim: 1,
                index: 3,
                size: 3
            }
        );
    }

    #[test]
    fn test_unflatten_roundtrip() {
        let shape = [2, 3, 4];
        for offset in 0..24 {
            let coords = unflatten_index(offset, &shape).unwrap();
            assert_eq!(flatten_index(&coords, &shape).unwrap(), offset);
        }
    }

    #[test]
    fn test_unflatten_out_of_bounds() {
        assert!(unflatten_index(24, &[2, 3, 4]).is_err());
    }
}
