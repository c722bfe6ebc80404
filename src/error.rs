//! Error types for ndar

use thiserror::Error;

/// Result type alias using ndar's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ndar operations
///
/// All failures are synchronous and immediate: nothing is retried and nothing
/// is downgraded to a default value. Mutating operations validate their inputs
/// in full before the first write, so a returned error always means the
/// receiver is unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Wrong number of indices or selectors for the array's rank
    #[error("Arity mismatch: expected {expected} indices, got {got}")]
    ArityMismatch {
        /// Number of indices the array's rank requires
        expected: usize,
        /// Number of indices actually supplied
        got: usize,
    },

    /// Index outside a dimension's extent
    #[error("Index {index} out of bounds for dimension {dim} of size {size}")]
    OutOfBounds {
        /// The offending dimension
        dim: usize,
        /// The resolved (post-negative-remap) index
        index: isize,
        /// Size of the dimension
        size: usize,
    },

    /// Shape mismatch in construction, reshape, slice assignment, or stacking
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected shape
        expected: Vec<usize>,
        /// Actual shape
        got: Vec<usize>,
    },

    /// Shapes cannot be broadcast together
    #[error("Cannot broadcast shapes {lhs:?} and {rhs:?}")]
    BroadcastError {
        /// Left-hand side shape
        lhs: Vec<usize>,
        /// Right-hand side shape
        rhs: Vec<usize>,
    },

    /// Malformed per-dimension slice selector
    #[error("Invalid selector for dimension {dim}: {reason}")]
    InvalidSelector {
        /// Dimension the selector applies to
        dim: usize,
        /// Why the selector was rejected
        reason: String,
    },

    /// Axis index outside the array's rank
    #[error("Invalid axis {axis} for array with {ndim} dimensions")]
    InvalidAxis {
        /// The invalid axis
        axis: usize,
        /// Number of dimensions
        ndim: usize,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Reduction over an array with no elements
    #[error("Cannot compute {op} of an empty array")]
    EmptyArray {
        /// The operation name
        op: &'static str,
    },

    /// Linear algebra operation requiring a 2-D array received another rank
    #[error("Rank error: operation requires a {expected}-D array, got {got}-D")]
    RankError {
        /// Required rank
        expected: usize,
        /// Actual rank
        got: usize,
    },

    /// Linear algebra operation requiring a square matrix
    #[error("Shape error: operation requires a square matrix, got {rows}x{cols}")]
    ShapeError {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },

    /// Inverse of a singular or near-singular matrix
    #[error("Matrix is singular or near-singular (pivot below tolerance)")]
    SingularMatrix,

    /// Eigendecomposition of an asymmetric matrix
    #[error("Eigendecomposition requires a symmetric matrix: A[{row},{col}] != A[{col},{row}]")]
    SymmetryRequired {
        /// Row of the first asymmetric entry found
        row: usize,
        /// Column of the first asymmetric entry found
        col: usize,
    },

    /// Eigenvalues are complex (negative discriminant); only real eigenvalues
    /// are supported
    #[error("Complex eigenvalues are not supported (negative discriminant)")]
    UnsupportedEigenvalue,
}
