//! Integration tests for whole-array reductions
//!
//! Tests verify:
//! - Sum, mean, min, max, and population standard deviation
//! - Mean and std promote to f64 regardless of element type
//! - Empty-array error behavior

use ndar::{Error, NdArray};

mod common;

#[test]
fn test_sum() {
    let a = NdArray::from_vec(vec![1, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
    assert_eq!(a.sum(), 21);

    let empty: NdArray<i32> = NdArray::from_vec(vec![], &[0]).unwrap();
    assert_eq!(empty.sum(), 0);
}

#[test]
fn test_mean_promotes_to_f64() {
    let a = NdArray::from_vec(vec![1, 2, 3, 4], &[4]).unwrap();
    assert_eq!(a.mean().unwrap(), 2.5);
}

#[test]
fn test_min_max() {
    let a = NdArray::from_vec(vec![3.0, -1.0, 7.0, 2.0], &[2, 2]).unwrap();
    assert_eq!(a.min().unwrap(), -1.0);
    assert_eq!(a.max().unwrap(), 7.0);
}

#[test]
fn test_std_population() {
    // Population std of [2, 4, 4, 4, 5, 5, 7, 9] is exactly 2
    let a = NdArray::from_vec(vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0], &[8]).unwrap();
    assert!((a.std().unwrap() - 2.0).abs() < 1e-12);
}

#[test]
fn test_std_of_constant_array_is_zero() {
    let a = NdArray::full(&[5], 3.0);
    assert_eq!(a.std().unwrap(), 0.0);
}

#[test]
fn test_empty_array_reductions_fail() {
    let empty: NdArray<f64> = NdArray::from_vec(vec![], &[0]).unwrap();
    assert!(matches!(empty.mean().unwrap_err(), Error::EmptyArray { .. }));
    assert!(matches!(empty.min().unwrap_err(), Error::EmptyArray { .. }));
    assert!(matches!(empty.max().unwrap_err(), Error::EmptyArray { .. }));
    assert!(matches!(empty.std().unwrap_err(), Error::EmptyArray { .. }));
}

#[test]
fn test_reductions_over_sliced_region() {
    let a = NdArray::from_fn(&[3, 3], |c| (c[0] * 3 + c[1]) as f64);
    let top_row = a.slice(&[0.into(), ndar::AxisSelector::Full]).unwrap();
    assert_eq!(top_row.sum(), 3.0);
    assert_eq!(top_row.max().unwrap(), 2.0);
}
