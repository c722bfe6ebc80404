//! Determinant and inverse

use super::{validate_square, TOLERANCE};
use crate::array::NdArray;
use crate::element::FloatElement;
use crate::error::{Error, Result};

/// Determinant of a square matrix.
///
/// Uses closed forms up to 3x3 and Gaussian elimination with partial
/// pivoting on a working copy beyond that. A pivot magnitude below the
/// singularity tolerance short-circuits to exactly `0`: zero is a
/// numerically meaningful determinant, not an error state.
pub fn det<T: FloatElement>(a: &NdArray<T>) -> Result<T> {
    let n = validate_square(a)?;
    let m: Vec<f64> = a.data().iter().map(|&v| v.to_f64()).collect();

    let value = match n {
        0 => 1.0,
        1 => m[0],
        2 => m[0] * m[3] - m[1] * m[2],
        3 => {
            m[0] * (m[4] * m[8] - m[5] * m[7]) - m[1] * (m[3] * m[8] - m[5] * m[6])
                + m[2] * (m[3] * m[7] - m[4] * m[6])
        }
        _ => det_gaussian(m, n),
    };
    Ok(T::from_f64(value))
}

fn det_gaussian(mut m: Vec<f64>, n: usize) -> f64 {
    let mut det = 1.0;
    for col in 0..n {
        // Partial pivoting: bring the largest remaining entry in this column
        // onto the diagonal
        let mut pivot_row = col;
        let mut pivot_mag = m[col * n + col].abs();
        for row in (col + 1)..n {
            let mag = m[row * n + col].abs();
            if mag > pivot_mag {
                pivot_mag = mag;
                pivot_row = row;
            }
        }

        if pivot_mag < TOLERANCE {
            return 0.0;
        }

        if pivot_row != col {
            for k in 0..n {
                m.swap(col * n + k, pivot_row * n + k);
            }
            det = -det;
        }

        let pivot = m[col * n + col];
        det *= pivot;

        for row in (col + 1)..n {
            let factor = m[row * n + col] / pivot;
            if factor == 0.0 {
                continue;
            }
            for k in col..n {
                m[row * n + k] -= factor * m[col * n + k];
            }
        }
    }
    det
}

/// Inverse of a square matrix.
///
/// Uses closed forms for 1x1 and 2x2 and Gauss-Jordan elimination on the
/// augmented `[A | I]` matrix with partial pivoting beyond that. Fails with
/// [`Error::SingularMatrix`] when a pivot falls below tolerance; inversion
/// never returns a degenerate result.
pub fn inverse<T: FloatElement>(a: &NdArray<T>) -> Result<NdArray<T>> {
    let n = validate_square(a)?;
    let m: Vec<f64> = a.data().iter().map(|&v| v.to_f64()).collect();

    let inv = match n {
        0 => Vec::new(),
        1 => {
            if m[0].abs() < TOLERANCE {
                return Err(Error::SingularMatrix);
            }
            vec![1.0 / m[0]]
        }
        2 => {
            let det = m[0] * m[3] - m[1] * m[2];
            if det.abs() < TOLERANCE {
                return Err(Error::SingularMatrix);
            }
            vec![m[3] / det, -m[1] / det, -m[2] / det, m[0] / det]
        }
        _ => gauss_jordan(m, n)?,
    };

    let data = inv.into_iter().map(T::from_f64).collect();
    NdArray::from_vec(data, &[n, n])
}

fn gauss_jordan(m: Vec<f64>, n: usize) -> Result<Vec<f64>> {
    // Augmented [A | I], 2n columns per row
    let w = 2 * n;
    let mut aug = vec![0.0; n * w];
    for i in 0..n {
        for j in 0..n {
            aug[i * w + j] = m[i * n + j];
        }
        aug[i * w + n + i] = 1.0;
    }

    for col in 0..n {
        let mut pivot_row = col;
        let mut pivot_mag = aug[col * w + col].abs();
        for row in (col + 1)..n {
            let mag = aug[row * w + col].abs();
            if mag > pivot_mag {
                pivot_mag = mag;
                pivot_row = row;
            }
        }

        if pivot_mag < TOLERANCE {
            return Err(Error::SingularMatrix);
        }

        if pivot_row != col {
            for k in 0..w {
                aug.swap(col * w + k, pivot_row * w + k);
            }
        }

        let pivot = aug[col * w + col];
        for k in 0..w {
            aug[col * w + k] /= pivot;
        }

        // Eliminate the column everywhere else, reducing the left block to
        // identity while the right block becomes the inverse
        for row in 0..n {
            if row == col {
                continue;
            }
            let factor = aug[row * w + col];
            if factor == 0.0 {
                continue;
            }
            for k in 0..w {
                aug[row * w + k] -= factor * aug[col * w + k];
            }
        }
    }

    let mut inv = vec![0.0; n * n];
    for i in 0..n {
        for j in 0..n {
            inv[i * n + j] = aug[i * w + n + j];
        }
    }
    Ok(inv)
}
