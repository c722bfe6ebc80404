//! # ndar
//!
//! **Dense n-dimensional arrays with NumPy-style semantics, in pure Rust.**
//!
//! ndar provides homogeneously-typed n-dimensional arrays over owned, dense,
//! row-major buffers, with broadcasting, slicing, elementwise arithmetic,
//! reductions, and dense linear algebra.
//!
//! ## Features
//!
//! - **Arrays**: N-dimensional containers with shape-based indexing,
//!   reshaping, and transposition
//! - **Slicing**: Rank-preserving region reads and writes with negative
//!   index support
//! - **Broadcasting**: NumPy-compatible right-aligned shape joining for all
//!   binary operations
//! - **Arithmetic**: Copying and in-place elementwise ops, scalar ops,
//!   comparisons, and boolean mask selection
//! - **Reductions**: Sum, mean, min, max, standard deviation
//! - **Linear algebra**: Determinant, inverse, eigendecomposition, SVD
//! - **Generic elements**: Any numeric type implementing [`Element`];
//!   floating-point extras behind [`FloatElement`]
//!
//! ## Quick Start
//!
//! ```rust
//! use ndar::NdArray;
//!
//! let a = NdArray::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2])?;
//! let b = NdArray::full(&[2, 2], 10.0);
//!
//! let c = &a + &b;
//! assert_eq!(c.at(&[1, 1])?, 14.0);
//!
//! let d = a.det()?;
//! assert_eq!(d, -2.0);
//! # Ok::<(), ndar::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` (default): Multi-threaded elementwise operations

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod array;
pub mod element;
pub mod error;
pub mod linalg;
pub mod ops;

pub use array::{AxisSelector, NdArray, Shape, Strides};
pub use element::{Element, FloatElement};
pub use error::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::array::{AxisSelector, NdArray, Shape};
    pub use crate::element::{Element, FloatElement};
    pub use crate::error::{Error, Result};
    pub use crate::linalg::{EigenDecomposition, SvdDecomposition};
    pub use crate::ops::{broadcast_shapes, concatenate, hstack, vstack};
}
