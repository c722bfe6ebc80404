//! Shared rotation and dense-matrix utilities for the iterative
//! eigendecomposition and SVD kernels
//!
//! The numerical kernels promote their working copies to f64 row-major
//! buffers; everything in this module operates on those.

/// Givens rotation parameters (cosine and sine of rotation angle).
///
/// The rotation acting on rows (j, i) of a matrix,
/// ```text
/// G = [ c  s ]
///     [-s  c ]
/// ```
/// is chosen so that `G` applied to the pair `(a, b)` maps `b` to zero.
#[derive(Debug, Clone, Copy)]
pub(crate) struct GivensRotation {
    /// Cosine of rotation angle
    pub c: f64,
    /// Sine of rotation angle
    pub s: f64,
}

impl GivensRotation {
    /// Compute the rotation zeroing `b` against `a`.
    #[inline]
    pub fn zeroing(a: f64, b: f64) -> Self {
        let r = a.hypot(b);
        if r < 1e-300 {
            return Self { c: 1.0, s: 0.0 };
        }
        Self { c: a / r, s: b / r }
    }

    /// Apply this rotation to rows `j` and `i` of an n-column matrix,
    /// starting at column `from` (earlier columns are already zero in the
    /// QR sweep).
    #[inline]
    pub fn apply_to_rows(&self, m: &mut [f64], n: usize, j: usize, i: usize, from: usize) {
        for k in from..n {
            let mjk = m[j * n + k];
            let mik = m[i * n + k];
            m[j * n + k] = self.c * mjk + self.s * mik;
            m[i * n + k] = -self.s * mjk + self.c * mik;
        }
    }

    /// Apply the transposed rotation to columns `j` and `i` of an n-row
    /// matrix (accumulating `M <- M * G^T`).
    #[inline]
    pub fn apply_to_columns(&self, m: &mut [f64], rows: usize, cols: usize, j: usize, i: usize) {
        for k in 0..rows {
            let mkj = m[k * cols + j];
            let mki = m[k * cols + i];
            m[k * cols + j] = self.c * mkj + self.s * mki;
            m[k * cols + i] = -self.s * mkj + self.c * mki;
        }
    }
}

/// Initialize an identity matrix [n x n].
pub(crate) fn identity_matrix(n: usize) -> Vec<f64> {
    let mut result = vec![0.0; n * n];
    for i in 0..n {
        result[i * n + i] = 1.0;
    }
    result
}

/// Dense row-major matrix product: [m x k] @ [k x n] -> [m x n].
pub(crate) fn matmul(a: &[f64], b: &[f64], m: usize, k: usize, n: usize) -> Vec<f64> {
    let mut out = vec![0.0; m * n];
    for i in 0..m {
        for p in 0..k {
            let aip = a[i * k + p];
            if aip == 0.0 {
                continue;
            }
            for j in 0..n {
                out[i * n + j] += aip * b[p * n + j];
            }
        }
    }
    out
}

/// Transpose a row-major [m x n] matrix into [n x m].
pub(crate) fn transpose_matrix(a: &[f64], m: usize, n: usize) -> Vec<f64> {
    let mut out = vec![0.0; m * n];
    for i in 0..m {
        for j in 0..n {
            out[j * m + i] = a[i * n + j];
        }
    }
    out
}

/// Sort indices by value (descending).
pub(crate) fn argsort_desc(values: &[f64]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..values.len()).collect();
    indices.sort_by(|&i, &j| {
        values[j]
            .partial_cmp(&values[i])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    indices
}

/// Reorder vector elements according to an index permutation.
pub(crate) fn permute_vector(data: &[f64], indices: &[usize]) -> Vec<f64> {
    indices.iter().map(|&idx| data[idx]).collect()
}

/// Reorder matrix columns according to an index permutation, keeping
/// `new_cols` of them.
pub(crate) fn permute_columns(
    data: &[f64],
    rows: usize,
    cols: usize,
    indices: &[usize],
    new_cols: usize,
) -> Vec<f64> {
    let mut result = vec![0.0; rows * new_cols];
    for (new_idx, &old_idx) in indices.iter().take(new_cols).enumerate() {
        for i in 0..rows {
            result[i * new_cols + new_idx] = data[i * cols + old_idx];
        }
    }
    result
}
