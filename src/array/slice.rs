//! Slice engine: per-dimension selectors, region reads, and region writes
//!
//! Slicing is rank-preserving and always copies: an integer selector keeps
//! its dimension with size 1, ranges contribute their resolved length, and
//! `Full` keeps the whole dimension. Traversal of the selected region is an
//! iterative odometer over the per-dimension cursors, last dimension fastest,
//! so read and write visit source coordinates in the same row-major order.

use super::core::NdArray;
use super::shape::Shape;
use crate::error::{Error, Result};
use std::ops::{Range, RangeFull, RangeInclusive};

/// Per-dimension slice selector
///
/// Negative indices and range endpoints count from the end of the dimension
/// (`-1` is the last element). Built from plain integers, ranges, `..`, or
/// `true` via `From`, so call sites can write
/// `a.slice(&[0.into(), (1..3).into(), (..).into()])`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AxisSelector {
    /// Single index; the dimension is retained with size 1
    Index(isize),
    /// Range of indices; `inclusive` decides whether `end` itself is taken
    Range {
        /// First index (may be negative)
        start: isize,
        /// Last index, inclusive or exclusive (may be negative)
        end: isize,
        /// Whether `end` is part of the selection
        inclusive: bool,
    },
    /// The whole dimension
    Full,
    /// Boolean form: only `true` is legal and selects the whole dimension.
    /// `false` is rejected at resolution time; mixed per-element boolean
    /// masks are deliberately unsupported in slicing.
    Bool(bool),
}

impl From<isize> for AxisSelector {
    fn from(i: isize) -> Self {
        AxisSelector::Index(i)
    }
}

impl From<i32> for AxisSelector {
    fn from(i: i32) -> Self {
        AxisSelector::Index(i as isize)
    }
}

impl From<usize> for AxisSelector {
    fn from(i: usize) -> Self {
        AxisSelector::Index(i as isize)
    }
}

impl From<Range<isize>> for AxisSelector {
    fn from(r: Range<isize>) -> Self {
        AxisSelector::Range {
            start: r.start,
            end: r.end,
            inclusive: false,
        }
    }
}

impl From<Range<i32>> for AxisSelector {
    fn from(r: Range<i32>) -> Self {
        AxisSelector::Range {
            start: r.start as isize,
            end: r.end as isize,
            inclusive: false,
        }
    }
}

impl From<RangeInclusive<isize>> for AxisSelector {
    fn from(r: RangeInclusive<isize>) -> Self {
        AxisSelector::Range {
            start: *r.start(),
            end: *r.end(),
            inclusive: true,
        }
    }
}

impl From<RangeInclusive<i32>> for AxisSelector {
    fn from(r: RangeInclusive<i32>) -> Self {
        AxisSelector::Range {
            start: *r.start() as isize,
            end: *r.end() as isize,
            inclusive: true,
        }
    }
}

impl From<RangeFull> for AxisSelector {
    fn from(_: RangeFull) -> Self {
        AxisSelector::Full
    }
}

impl From<bool> for AxisSelector {
    fn from(b: bool) -> Self {
        AxisSelector::Bool(b)
    }
}

/// A selector resolved against a concrete dimension: a start offset and a
/// run length, both in bounds
#[derive(Clone, Copy, Debug)]
struct ResolvedAxis {
    start: usize,
    len: usize,
}

fn remap_negative(idx: isize, size: usize) -> isize {
    if idx < 0 {
        idx + size as isize
    } else {
        idx
    }
}

fn check_bounds(idx: isize, dim: usize, size: usize) -> Result<usize> {
    if idx < 0 || idx >= size as isize {
        return Err(Error::OutOfBounds {
            dim,
            index: idx,
            size,
        });
    }
    Ok(idx as usize)
}

fn resolve_selectors(selectors: &[AxisSelector], shape: &[usize]) -> Result<Vec<ResolvedAxis>> {
    if selectors.len() != shape.len() {
        return Err(Error::ArityMismatch {
            expected: shape.len(),
            got: selectors.len(),
        });
    }

    let mut resolved = Vec::with_capacity(selectors.len());
    for (dim, (selector, &size)) in selectors.iter().zip(shape.iter()).enumerate() {
        let axis = match selector {
            AxisSelector::Index(i) => {
                let idx = check_bounds(remap_negative(*i, size), dim, size)?;
                ResolvedAxis { start: idx, len: 1 }
            }
            AxisSelector::Range {
                start,
                end,
                inclusive,
            } => {
                let start = check_bounds(remap_negative(*start, size), dim, size)?;
                let end = remap_negative(*end, size);
                // An exclusive endpoint may sit one past the last element
                let end = if *inclusive {
                    check_bounds(end, dim, size)? + 1
                } else {
                    if end < 0 || end > size as isize {
                        return Err(Error::OutOfBounds {
                            dim,
                            index: end,
                            size,
                        });
                    }
                    end as usize
                };
                if end <= start {
                    return Err(Error::InvalidSelector {
                        dim,
                        reason: format!("range selects no elements ({start}..{end})"),
                    });
                }
                ResolvedAxis {
                    start,
                    len: end - start,
                }
            }
            AxisSelector::Full => ResolvedAxis { start: 0, len: size },
            AxisSelector::Bool(true) => ResolvedAxis { start: 0, len: size },
            AxisSelector::Bool(false) => {
                return Err(Error::InvalidSelector {
                    dim,
                    reason: "boolean selector must be true (or omitted)".to_string(),
                });
            }
        };
        resolved.push(axis);
    }

    Ok(resolved)
}

/// Odometer over the source offsets of a resolved region, last dimension
/// fastest. Yields exactly `product(len_d)` flat offsets.
struct RegionCursor<'a> {
    axes: &'a [ResolvedAxis],
    strides: Vec<usize>,
    cursor: Vec<usize>,
    offset: usize,
    remaining: usize,
}

impl<'a> RegionCursor<'a> {
    fn new(axes: &'a [ResolvedAxis], shape: &[usize]) -> Self {
        let strides: Vec<usize> = Shape::from(shape).strides().to_vec();
        let offset = axes
            .iter()
            .zip(strides.iter())
            .map(|(a, s)| a.start * s)
            .sum();
        let remaining: usize = axes.iter().map(|a| a.len).product();
        Self {
            axes,
            strides,
            cursor: vec![0; axes.len()],
            offset,
            remaining,
        }
    }
}

impl Iterator for RegionCursor<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let current = self.offset;

        // Advance the odometer; each wrapped dimension rewinds its stride run
        for d in (0..self.axes.len()).rev() {
            self.cursor[d] += 1;
            if self.cursor[d] < self.axes[d].len {
                self.offset += self.strides[d];
                break;
            }
            self.cursor[d] = 0;
            self.offset -= (self.axes[d].len - 1) * self.strides[d];
        }

        Some(current)
    }
}

impl<T: Copy> NdArray<T> {
    /// Materialize the sub-region selected by one selector per dimension.
    ///
    /// The result is rank-preserving: integer selectors contribute size-1
    /// dimensions. The fresh buffer is filled in row-major visitation order
    /// of the source region.
    pub fn slice(&self, selectors: &[AxisSelector]) -> Result<NdArray<T>> {
        let axes = resolve_selectors(selectors, &self.shape)?;
        let out_shape: Shape = axes.iter().map(|a| a.len).collect();
        let mut data = Vec::with_capacity(out_shape.size());
        for offset in RegionCursor::new(&axes, &self.shape) {
            data.push(self.data[offset]);
        }
        Ok(NdArray::from_parts(data, out_shape))
    }

    /// Overwrite the sub-region selected by `selectors` with `value`.
    ///
    /// `value.shape()` must exactly equal the computed slice shape; on any
    /// validation failure nothing is written.
    pub fn set_slice(&mut self, selectors: &[AxisSelector], value: &NdArray<T>) -> Result<()> {
        let axes = resolve_selectors(selectors, &self.shape)?;
        let slice_shape: Vec<usize> = axes.iter().map(|a| a.len).collect();
        if value.shape() != slice_shape.as_slice() {
            return Err(Error::ShapeMismatch {
                expected: slice_shape,
                got: value.shape().to_vec(),
            });
        }

        for (i, offset) in RegionCursor::new(&axes, &self.shape).enumerate() {
            self.data[offset] = value.data[i];
        }
        Ok(())
    }
}
