//! Core NdArray type

use super::index::{flatten_index, unflatten_index};
use super::shape::Shape;
use crate::element::{Element, FloatElement};
use crate::error::{Error, Result};
use std::fmt;

/// Number of leading/trailing elements shown before the middle of a large
/// buffer is elided in debug output
const DISPLAY_EDGE_ITEMS: usize = 3;

/// Buffer length above which debug output elides the middle
const DISPLAY_ELIDE_THRESHOLD: usize = 8;

/// Dense N-dimensional array
///
/// `NdArray` owns a contiguous row-major buffer of elements together with a
/// shape. Every producing operation (`reshape`, `slice`, arithmetic, ...)
/// allocates a fresh buffer and leaves its operands untouched; every in-place
/// operation mutates only the receiver. Two arrays never alias the same
/// buffer, so no locking or copy-on-write discipline is needed anywhere.
///
/// The element at coordinate `(i0, ..., i_{n-1})` lives at flat offset
/// `sum(i_k * stride_k)` where the last dimension has stride 1.
///
/// # Example
///
/// ```
/// use ndar::NdArray;
///
/// let a = NdArray::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2])?;
/// assert_eq!(a.at(&[1, 0])?, 3.0);
/// # Ok::<(), ndar::Error>(())
/// ```
#[derive(Clone, PartialEq)]
pub struct NdArray<T> {
    pub(crate) shape: Shape,
    pub(crate) data: Vec<T>,
}

impl<T: Copy> NdArray<T> {
    /// Create an array from a flat row-major buffer and a shape.
    ///
    /// Fails with [`Error::ShapeMismatch`] unless `data.len()` equals the
    /// product of the shape's dimensions (1 for the empty scalar shape).
    pub fn from_vec(data: Vec<T>, shape: &[usize]) -> Result<Self> {
        let shape = Shape::from(shape);
        if data.len() != shape.size() {
            return Err(Error::ShapeMismatch {
                expected: shape.as_slice().to_vec(),
                got: vec![data.len()],
            });
        }
        Ok(Self { shape, data })
    }

    /// Create an array by evaluating `f` at every multi-dimensional
    /// coordinate, in row-major order.
    pub fn from_fn(shape: &[usize], mut f: impl FnMut(&[usize]) -> T) -> Self {
        let shape = Shape::from(shape);
        let size = shape.size();
        let mut data = Vec::with_capacity(size);
        let mut coords = vec![0usize; shape.ndim()];
        for _ in 0..size {
            data.push(f(&coords));
            // Row-major odometer: last dimension fastest
            for d in (0..shape.ndim()).rev() {
                coords[d] += 1;
                if coords[d] < shape[d] {
                    break;
                }
                coords[d] = 0;
            }
        }
        Self { shape, data }
    }

    pub(crate) fn from_parts(data: Vec<T>, shape: Shape) -> Self {
        debug_assert_eq!(data.len(), shape.size());
        Self { shape, data }
    }

    /// Get the shape
    #[inline]
    pub fn shape(&self) -> &[usize] {
        self.shape.as_slice()
    }

    /// Get the number of dimensions (rank)
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.ndim()
    }

    /// Get the total number of elements
    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Check if this is a scalar (0-dimensional array)
    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.shape.is_empty()
    }

    /// View the flat row-major buffer
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Copy the flat row-major buffer into a `Vec`
    pub fn to_vec(&self) -> Vec<T> {
        self.data.clone()
    }

    /// Consume the array and return its flat buffer
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Read the element at the given multi-dimensional coordinates.
    ///
    /// Fails with [`Error::ArityMismatch`] if the coordinate count differs
    /// from the rank, or [`Error::OutOfBounds`] naming the offending
    /// dimension.
    pub fn at(&self, coords: &[usize]) -> Result<T> {
        let offset = flatten_index(coords, &self.shape)?;
        Ok(self.data[offset])
    }

    /// Write the element at the given multi-dimensional coordinates.
    pub fn set_at(&mut self, coords: &[usize], value: T) -> Result<()> {
        let offset = flatten_index(coords, &self.shape)?;
        self.data[offset] = value;
        Ok(())
    }

    /// Multi-dimensional coordinates of the given flat offset.
    pub fn coords_of(&self, offset: usize) -> Result<Vec<usize>> {
        unflatten_index(offset, &self.shape)
    }

    /// Return a copy of this array with a new shape.
    ///
    /// The new shape must describe the same number of elements; the buffer is
    /// copied in row-major order. Fails with [`Error::ShapeMismatch`].
    pub fn reshape(&self, shape: &[usize]) -> Result<Self> {
        let new_shape = Shape::from(shape);
        if new_shape.size() != self.size() {
            return Err(Error::ShapeMismatch {
                expected: self.shape.as_slice().to_vec(),
                got: shape.to_vec(),
            });
        }
        Ok(Self {
            shape: new_shape,
            data: self.data.clone(),
        })
    }

    /// Replace this array's shape in place, keeping the buffer.
    pub fn reshape_mut(&mut self, shape: &[usize]) -> Result<()> {
        let new_shape = Shape::from(shape);
        if new_shape.size() != self.size() {
            return Err(Error::ShapeMismatch {
                expected: self.shape.as_slice().to_vec(),
                got: shape.to_vec(),
            });
        }
        self.shape = new_shape;
        Ok(())
    }

    /// Matrix transpose: a new array with rows and columns exchanged.
    ///
    /// Requires a 2-D array ([`Error::RankError`] otherwise). The data is
    /// physically permuted; no stride tricks are involved.
    pub fn transpose(&self) -> Result<Self> {
        let (rows, cols) = self.require_2d()?;
        let mut data = Vec::with_capacity(self.size());
        for j in 0..cols {
            for i in 0..rows {
                data.push(self.data[i * cols + j]);
            }
        }
        Ok(Self {
            shape: Shape::from([cols, rows]),
            data,
        })
    }

    /// Transpose in place, replacing both buffer and shape.
    pub fn transpose_mut(&mut self) -> Result<()> {
        let transposed = self.transpose()?;
        *self = transposed;
        Ok(())
    }

    /// Apply `f` to every element, producing a same-shaped array.
    pub fn map<U: Copy>(&self, f: impl Fn(T) -> U) -> NdArray<U> {
        NdArray {
            shape: self.shape.clone(),
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    pub(crate) fn require_2d(&self) -> Result<(usize, usize)> {
        if self.ndim() != 2 {
            return Err(Error::RankError {
                expected: 2,
                got: self.ndim(),
            });
        }
        Ok((self.shape[0], self.shape[1]))
    }
}

impl<T: Element> NdArray<T> {
    /// Create an array filled with a single value.
    pub fn full(shape: &[usize], value: T) -> Self {
        let shape = Shape::from(shape);
        let data = vec![value; shape.size()];
        Self { shape, data }
    }

    /// Create an array filled with zeros.
    pub fn zeros(shape: &[usize]) -> Self {
        Self::full(shape, T::zero())
    }

    /// Create an array filled with ones.
    pub fn ones(shape: &[usize]) -> Self {
        Self::full(shape, T::one())
    }

    /// Create the n-by-n identity matrix.
    pub fn eye(n: usize) -> Self {
        let mut data = vec![T::zero(); n * n];
        for i in 0..n {
            data[i * n + i] = T::one();
        }
        Self {
            shape: Shape::from([n, n]),
            data,
        }
    }

    /// Create a 1-D array of values from `start` (inclusive) to `stop`
    /// (exclusive) stepping by `step`.
    ///
    /// Fails with [`Error::InvalidArgument`] if `step` is zero.
    pub fn arange(start: T, stop: T, step: T) -> Result<Self> {
        let start = start.to_f64();
        let stop = stop.to_f64();
        let step = step.to_f64();
        if step == 0.0 {
            return Err(Error::InvalidArgument {
                arg: "step",
                reason: "step must be non-zero".to_string(),
            });
        }

        let count = ((stop - start) / step).ceil().max(0.0) as usize;
        let mut data = Vec::with_capacity(count);
        for i in 0..count {
            data.push(T::from_f64(start + step * i as f64));
        }
        let shape = Shape::from([data.len()]);
        Ok(Self { shape, data })
    }
}

impl<T: FloatElement> NdArray<T> {
    /// Create a 1-D array of `n` evenly spaced values from `start` to `stop`
    /// inclusive.
    pub fn linspace(start: T, stop: T, n: usize) -> Self {
        let start = start.to_f64();
        let stop = stop.to_f64();
        let data: Vec<T> = match n {
            0 => Vec::new(),
            1 => vec![T::from_f64(start)],
            _ => {
                let step = (stop - start) / (n - 1) as f64;
                (0..n).map(|i| T::from_f64(start + step * i as f64)).collect()
            }
        };
        Self {
            shape: Shape::from([n]),
            data,
        }
    }
}

fn write_elided<T: fmt::Debug>(f: &mut fmt::Formatter<'_>, data: &[T]) -> fmt::Result {
    write!(f, "[")?;
    if data.len() > DISPLAY_ELIDE_THRESHOLD {
        for (i, v) in data[..DISPLAY_EDGE_ITEMS].iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v:?}")?;
        }
        write!(f, ", ..., ")?;
        for (i, v) in data[data.len() - DISPLAY_EDGE_ITEMS..].iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v:?}")?;
        }
    } else {
        for (i, v) in data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v:?}")?;
        }
    }
    write!(f, "]")
}

impl<T: fmt::Debug> fmt::Debug for NdArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NdArray {{ shape: {:?}, data: ", self.shape)?;
        write_elided(f, &self.data)?;
        write!(f, " }}")
    }
}

impl<T: fmt::Debug> fmt::Display for NdArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_elided(f, &self.data)
    }
}
