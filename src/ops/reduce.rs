//! Full-buffer reductions: sum, mean, min, max, std

use crate::array::NdArray;
use crate::element::Element;
use crate::error::{Error, Result};

impl<T: Element> NdArray<T> {
    /// Sum of all elements. The sum of an empty array is zero.
    pub fn sum(&self) -> T {
        self.data
            .iter()
            .fold(T::zero(), |acc, &v| acc + v)
    }

    /// Arithmetic mean of all elements, accumulated in f64.
    pub fn mean(&self) -> Result<f64> {
        if self.data.is_empty() {
            return Err(Error::EmptyArray { op: "mean" });
        }
        let total: f64 = self.data.iter().map(|&v| v.to_f64()).sum();
        Ok(total / self.data.len() as f64)
    }

    /// Smallest element.
    pub fn min(&self) -> Result<T> {
        self.data
            .iter()
            .copied()
            .reduce(|a, b| if b < a { b } else { a })
            .ok_or(Error::EmptyArray { op: "min" })
    }

    /// Largest element.
    pub fn max(&self) -> Result<T> {
        self.data
            .iter()
            .copied()
            .reduce(|a, b| if b > a { b } else { a })
            .ok_or(Error::EmptyArray { op: "max" })
    }

    /// Population standard deviation.
    ///
    /// The mean is computed in f64 before the variance accumulation; no
    /// further numerical-stability special-casing is applied.
    pub fn std(&self) -> Result<f64> {
        if self.data.is_empty() {
            return Err(Error::EmptyArray { op: "std" });
        }
        let mean = self.mean()?;
        let variance: f64 = self
            .data
            .iter()
            .map(|&v| {
                let d = v.to_f64() - mean;
                d * d
            })
            .sum::<f64>()
            / self.data.len() as f64;
        Ok(variance.sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_mean() {
        let a = NdArray::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
        assert_eq!(a.sum(), 10.0);
        assert_eq!(a.mean().unwrap(), 2.5);
    }

    #[test]
    fn test_min_max() {
        let a = NdArray::from_vec(vec![3, -1, 7, 0], &[4]).unwrap();
        assert_eq!(a.min().unwrap(), -1);
        assert_eq!(a.max().unwrap(), 7);
    }

    #[test]
    fn test_std_population() {
        let a = NdArray::from_vec(vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0], &[8]).unwrap();
        assert!((a.std().unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_integer_mean_in_f64() {
        let a = NdArray::from_vec(vec![1, 2], &[2]).unwrap();
        assert_eq!(a.mean().unwrap(), 1.5);
    }

    #[test]
    fn test_empty_reductions() {
        let a: NdArray<f64> = NdArray::from_vec(vec![], &[0]).unwrap();
        assert_eq!(a.sum(), 0.0);
        assert!(matches!(a.min().unwrap_err(), Error::EmptyArray { op: "min" }));
        assert!(a.mean().is_err());
        assert!(a.std().is_err());
    }
}
