//! Singular value decomposition via the smaller Gram matrix

use super::eig::sym_eig_f64;
use super::givens::{matmul, transpose_matrix};
use super::TOLERANCE;
use crate::array::NdArray;
use crate::element::FloatElement;
use crate::error::Result;

/// SVD result: `A ~= U @ diag(S) @ Vt` with `k = min(m, n)`
#[derive(Debug, Clone)]
pub struct SvdDecomposition<T> {
    /// Left singular vectors [m, k]
    pub u: NdArray<T>,
    /// Singular values [k], descending
    pub s: NdArray<T>,
    /// Right singular vectors, transposed [k, n]
    pub vt: NdArray<T>,
}

/// Singular value decomposition of a rectangular matrix.
///
/// Eigendecomposes the smaller of `A A^T` (size m) or `A^T A` (size n);
/// singular values are square roots of the eigenvalues clamped at zero,
/// sorted descending. The complementary singular-vector matrix comes from
/// projecting `A` (or `A^T`) through the computed vectors and rescaling by
/// the inverse singular value; values below tolerance are treated as zero
/// and their output column left zero rather than divided. A Gram-Schmidt
/// pass re-orthogonalizes the derived factor against drift when singular
/// values coincide or vanish.
pub fn svd<T: FloatElement>(a: &NdArray<T>) -> Result<SvdDecomposition<T>> {
    let (m, n) = a.require_2d()?;
    let k = m.min(n);
    let a64: Vec<f64> = a.data().iter().map(|&v| v.to_f64()).collect();
    let at = transpose_matrix(&a64, m, n);

    let (u, s, v) = if m <= n {
        // Gram matrix A A^T is m x m; eigenvectors give U directly
        let gram = matmul(&a64, &at, m, n, m);
        let (evals, u) = sym_eig_f64(gram, m);
        let s = singular_values(&evals, k);
        let v = derived_factor(&at, &u, n, m, k, &s);
        (u, s, v)
    } else {
        // Gram matrix A^T A is n x n; eigenvectors give V directly
        let gram = matmul(&at, &a64, n, m, n);
        let (evals, v) = sym_eig_f64(gram, n);
        let s = singular_values(&evals, k);
        let u = derived_factor(&a64, &v, m, n, k, &s);
        (u, s, v)
    };

    let vt = transpose_matrix(&v, n, k);
    Ok(SvdDecomposition {
        u: NdArray::from_vec(u.into_iter().map(T::from_f64).collect(), &[m, k])?,
        s: NdArray::from_vec(s.into_iter().map(T::from_f64).collect(), &[k])?,
        vt: NdArray::from_vec(vt.into_iter().map(T::from_f64).collect(), &[k, n])?,
    })
}

/// Square roots of the leading `k` eigenvalues, sign-guarded against the
/// small negatives floating-point Gram matrices produce.
fn singular_values(evals: &[f64], k: usize) -> Vec<f64> {
    evals.iter().take(k).map(|&l| l.max(0.0).sqrt()).collect()
}

/// Derive the complementary singular-vector factor.
///
/// For each of the `k` leading eigenvector columns of `vecs` [vec_rows x
/// vec_rows], projects it through `mat` [rows x vec_rows] and rescales by the
/// inverse singular value; near-zero singular values leave a zero column.
/// Returns a [rows x k] matrix, re-orthogonalized by Gram-Schmidt.
fn derived_factor(
    mat: &[f64],
    vecs: &[f64],
    rows: usize,
    vec_rows: usize,
    k: usize,
    s: &[f64],
) -> Vec<f64> {
    let mut out = vec![0.0; rows * k];
    for col in 0..k {
        if s[col] < TOLERANCE {
            continue;
        }
        for i in 0..rows {
            let mut acc = 0.0;
            for j in 0..vec_rows {
                acc += mat[i * vec_rows + j] * vecs[j * vec_rows + col];
            }
            out[i * k + col] = acc / s[col];
        }
    }
    gram_schmidt(&mut out, rows, k);
    out
}

/// Modified Gram-Schmidt over matrix columns; columns with near-zero norm
/// are zeroed rather than normalized.
fn gram_schmidt(m: &mut [f64], rows: usize, cols: usize) {
    for col in 0..cols {
        for prev in 0..col {
            let mut dot = 0.0;
            for i in 0..rows {
                dot += m[i * cols + col] * m[i * cols + prev];
            }
            for i in 0..rows {
                m[i * cols + col] -= dot * m[i * cols + prev];
            }
        }

        let mut norm_sq = 0.0;
        for i in 0..rows {
            norm_sq += m[i * cols + col] * m[i * cols + col];
        }
        let norm = norm_sq.sqrt();
        if norm > TOLERANCE {
            for i in 0..rows {
                m[i * cols + col] /= norm;
            }
        } else {
            for i in 0..rows {
                m[i * cols + col] = 0.0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reconstruct(u: &[f64], s: &[f64], vt: &[f64], m: usize, k: usize, n: usize) -> Vec<f64> {
        let mut us = vec![0.0; m * k];
        for i in 0..m {
            for j in 0..k {
                us[i * k + j] = u[i * k + j] * s[j];
            }
        }
        matmul(&us, vt, m, k, n)
    }

    #[test]
    fn test_svd_square_reconstruction() {
        let a = NdArray::from_vec(vec![3.0, 1.0, 1.0, 3.0], &[2, 2]).unwrap();
        let d = svd(&a).unwrap();
        let r = reconstruct(d.u.data(), d.s.data(), d.vt.data(), 2, 2, 2);
        for (x, y) in a.data().iter().zip(r.iter()) {
            assert!((x - y).abs() < 1e-8);
        }
        assert!((d.s.data()[0] - 4.0).abs() < 1e-8);
        assert!((d.s.data()[1] - 2.0).abs() < 1e-8);
    }

    #[test]
    fn test_svd_wide_reconstruction() {
        let a = NdArray::from_vec(vec![1.0, 0.0, 2.0, 0.0, 3.0, 0.0], &[2, 3]).unwrap();
        let d = svd(&a).unwrap();
        assert_eq!(d.u.shape(), &[2, 2]);
        assert_eq!(d.s.shape(), &[2]);
        assert_eq!(d.vt.shape(), &[2, 3]);
        let r = reconstruct(d.u.data(), d.s.data(), d.vt.data(), 2, 2, 3);
        for (x, y) in a.data().iter().zip(r.iter()) {
            assert!((x - y).abs() < 1e-8);
        }
    }

    #[test]
    fn test_svd_rank_deficient_zero_column() {
        // Rank-1 matrix: second singular value is zero
        let a = NdArray::from_vec(vec![1.0f64, 2.0, 2.0, 4.0], &[2, 2]).unwrap();
        let d = svd(&a).unwrap();
        assert!(d.s.data()[1].abs() < 1e-8);
        let r = reconstruct(d.u.data(), d.s.data(), d.vt.data(), 2, 2, 2);
        for (x, y) in a.data().iter().zip(r.iter()) {
            assert!((x - y).abs() < 1e-8);
        }
    }
}
