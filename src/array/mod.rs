//! Array data model: shape, row-major index arithmetic, core container, and
//! the slice engine

mod core;
pub mod index;
mod shape;
mod slice;

pub use core::NdArray;
pub use index::{flatten_index, unflatten_index};
pub use shape::{Shape, Strides};
pub use slice::AxisSelector;
