//! Elementwise operations, broadcasting, comparisons, reductions, and
//! array joining

mod arithmetic;
mod broadcast;
mod compare;
mod reduce;
mod stack;
mod unary;

pub use broadcast::broadcast_shapes;
pub use stack::{concatenate, hstack, vstack};
