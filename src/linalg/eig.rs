//! Symmetric eigendecomposition via shifted QR iteration with Givens
//! rotations

use super::givens::{
    argsort_desc, identity_matrix, matmul, permute_columns, permute_vector, GivensRotation,
};
use super::{validate_square, MAX_SWEEPS, TOLERANCE};
use crate::array::NdArray;
use crate::element::FloatElement;
use crate::error::{Error, Result};

/// Eigendecomposition result: `A @ V[:,i] = eigenvalues[i] * V[:,i]`
///
/// For a symmetric input the eigenvectors are orthonormal. Eigenvalues are
/// sorted descending with eigenvector columns permuted to match.
#[derive(Debug, Clone)]
pub struct EigenDecomposition<T> {
    /// Eigenvalues [n], descending
    pub eigenvalues: NdArray<T>,
    /// Eigenvector matrix [n, n]; column `i` pairs with `eigenvalues[i]`
    pub eigenvectors: NdArray<T>,
}

/// Eigendecomposition of a square matrix.
///
/// 1x1 and 2x2 matrices use closed forms (the quadratic formula on trace and
/// determinant; a negative discriminant means complex eigenvalues and fails
/// with [`Error::UnsupportedEigenvalue`]). Larger matrices must be symmetric
/// within tolerance ([`Error::SymmetryRequired`] otherwise) and go through
/// iterative QR sweeps with Givens rotations and a Wilkinson shift. If the
/// iteration cap is reached before the off-diagonal mass falls below
/// tolerance, the best estimate so far is returned rather than an error.
pub fn eig<T: FloatElement>(a: &NdArray<T>) -> Result<EigenDecomposition<T>> {
    let n = validate_square(a)?;
    let m: Vec<f64> = a.data().iter().map(|&v| v.to_f64()).collect();

    let (values, vectors) = match n {
        0 => (Vec::new(), Vec::new()),
        1 => (vec![m[0]], vec![1.0]),
        2 => eig_2x2(&m)?,
        _ => {
            check_symmetry(&m, n)?;
            sym_eig_f64(m, n)
        }
    };

    Ok(EigenDecomposition {
        eigenvalues: NdArray::from_vec(values.into_iter().map(T::from_f64).collect(), &[n])?,
        eigenvectors: NdArray::from_vec(vectors.into_iter().map(T::from_f64).collect(), &[n, n])?,
    })
}

fn check_symmetry(m: &[f64], n: usize) -> Result<()> {
    for i in 0..n {
        for j in (i + 1)..n {
            if (m[i * n + j] - m[j * n + i]).abs() > TOLERANCE {
                return Err(Error::SymmetryRequired { row: i, col: j });
            }
        }
    }
    Ok(())
}

/// Closed-form 2x2 eigendecomposition; does not require symmetry but does
/// require real roots.
fn eig_2x2(m: &[f64]) -> Result<(Vec<f64>, Vec<f64>)> {
    let (a, b, c, d) = (m[0], m[1], m[2], m[3]);
    let trace = a + d;
    let det = a * d - b * c;
    let disc = trace * trace - 4.0 * det;
    if disc < -TOLERANCE {
        return Err(Error::UnsupportedEigenvalue);
    }
    let root = disc.max(0.0).sqrt();
    let l1 = (trace + root) / 2.0;
    let l2 = (trace - root) / 2.0;

    let mut vectors = vec![0.0; 4];
    for (col, &lambda) in [l1, l2].iter().enumerate() {
        // A row of (A - lambda I) gives the orthogonal direction; fall back
        // to the basis vectors when the matrix is already diagonal. Each
        // column takes a distinct axis so coincident eigenvalues (a scalar
        // matrix) still produce orthonormal vectors.
        let (mut vx, mut vy) = if b.abs() > TOLERANCE {
            (b, lambda - a)
        } else if c.abs() > TOLERANCE {
            (lambda - d, c)
        } else {
            let first_is_x = a >= d;
            if (col == 0) == first_is_x {
                (1.0, 0.0)
            } else {
                (0.0, 1.0)
            }
        };
        let norm = vx.hypot(vy);
        if norm > TOLERANCE {
            vx /= norm;
            vy /= norm;
        }
        vectors[col] = vx;
        vectors[2 + col] = vy;
    }

    Ok((vec![l1, l2], vectors))
}

/// Wilkinson shift: the eigenvalue of the trailing 2x2 block closest to its
/// bottom-right entry.
fn wilkinson_shift(w: &[f64], n: usize, act: usize) -> f64 {
    let a = w[(act - 2) * n + (act - 2)];
    let b = w[(act - 2) * n + (act - 1)];
    let c = w[(act - 1) * n + (act - 1)];
    if b == 0.0 {
        return c;
    }
    let delta = (a - c) / 2.0;
    let sign = if delta >= 0.0 { 1.0 } else { -1.0 };
    c - sign * b * b / (delta.abs() + (delta * delta + b * b).sqrt())
}

fn off_diagonal_mass(w: &[f64], n: usize) -> f64 {
    let mut sum = 0.0;
    for i in 0..n {
        for j in 0..n {
            if i != j {
                sum += w[i * n + j] * w[i * n + j];
            }
        }
    }
    sum.sqrt()
}

/// Symmetric eigendecomposition of an f64 row-major matrix.
///
/// Returns eigenvalues sorted descending and the matching eigenvector matrix
/// [n x n]. The input is assumed symmetric; the SVD kernel reuses this for
/// Gram matrices.
///
/// Each sweep factorizes `W - mu*I = Q R` with one Givens rotation per
/// sub-diagonal entry, then recombines `W = R Q + mu*I`, which preserves
/// symmetry and eigenvalues while driving the off-diagonal mass to zero.
/// Rotations accumulate into the eigenvector matrix as `V = V Q`.
pub(crate) fn sym_eig_f64(mut w: Vec<f64>, n: usize) -> (Vec<f64>, Vec<f64>) {
    let mut v = identity_matrix(n);

    if n > 1 {
        // Active leading block; trailing rows deflate as they converge
        let mut act = n;
        for _sweep in 0..MAX_SWEEPS {
            while act > 1 {
                let row_mass: f64 = (0..act - 1)
                    .map(|j| w[(act - 1) * n + j].abs())
                    .sum();
                if row_mass < TOLERANCE {
                    act -= 1;
                } else {
                    break;
                }
            }
            if act <= 1 || off_diagonal_mass(&w, n) < TOLERANCE {
                break;
            }

            let mu = wilkinson_shift(&w, n, act);
            for i in 0..act {
                w[i * n + i] -= mu;
            }

            // QR factorization of the active block: rotate each sub-diagonal
            // entry to zero, accumulating Q. Rotations span full rows, so the
            // overall update stays an exact similarity transform of W.
            let mut q = identity_matrix(n);
            for j in 0..(act - 1) {
                for i in (j + 1)..act {
                    let a = w[j * n + j];
                    let b = w[i * n + j];
                    if b.abs() < 1e-300 {
                        continue;
                    }
                    let rot = GivensRotation::zeroing(a, b);
                    rot.apply_to_rows(&mut w, n, j, i, j);
                    rot.apply_to_columns(&mut q, n, n, j, i);
                }
            }

            // Recombine with the shift restored; eigenvector rotations
            // accumulate into V
            w = matmul(&w, &q, n, n, n);
            for i in 0..act {
                w[i * n + i] += mu;
            }
            v = matmul(&v, &q, n, n, n);
        }
    }

    let eigenvalues: Vec<f64> = (0..n).map(|i| w[i * n + i]).collect();
    let order = argsort_desc(&eigenvalues);
    let eigenvalues = permute_vector(&eigenvalues, &order);
    let v = permute_columns(&v, n, n, &order, n);
    (eigenvalues, v)
}
