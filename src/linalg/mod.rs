//! Dense linear algebra: determinant, inverse, eigendecomposition, SVD
//!
//! Every operation requires a rank-2 array and works on a dense copy of the
//! input; operands are never mutated. Kernels promote their working buffers
//! to f64 and narrow results back to the element type, so `f32` matrices get
//! the same pivoting and convergence behavior as `f64` ones.

mod eig;
mod givens;
mod matrix_ops;
mod svd;

pub use eig::{eig, EigenDecomposition};
pub use matrix_ops::{det, inverse};
pub use svd::{svd, SvdDecomposition};

use crate::array::NdArray;
use crate::element::FloatElement;
use crate::error::{Error, Result};

/// Pivot/convergence tolerance: magnitudes below this are treated as zero
pub(crate) const TOLERANCE: f64 = 1e-10;

/// Iteration cap for the QR eigenvalue sweeps; hitting it returns the best
/// estimate so far rather than an error
pub(crate) const MAX_SWEEPS: usize = 100;

pub(crate) fn validate_square<T: Copy>(a: &NdArray<T>) -> Result<usize> {
    let (rows, cols) = a.require_2d()?;
    if rows != cols {
        return Err(Error::ShapeError { rows, cols });
    }
    Ok(rows)
}

impl<T: FloatElement> NdArray<T> {
    /// Determinant; see [`det`].
    pub fn det(&self) -> Result<T> {
        det(self)
    }

    /// Matrix inverse; see [`inverse`].
    pub fn inv(&self) -> Result<NdArray<T>> {
        inverse(self)
    }

    /// Eigendecomposition; see [`eig`].
    pub fn eig(&self) -> Result<EigenDecomposition<T>> {
        eig(self)
    }

    /// Singular value decomposition; see [`svd`].
    pub fn svd(&self) -> Result<SvdDecomposition<T>> {
        svd(self)
    }
}
