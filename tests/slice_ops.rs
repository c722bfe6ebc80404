//! Integration tests for slicing and region writes
//!
//! Tests verify:
//! - Rank-preserving selection (integer selectors keep size-1 dimensions)
//! - Negative indices and range endpoints
//! - Region writes validate shape before mutating
//! - Slices are copies, detached from their source

use ndar::{AxisSelector, Error, NdArray};

mod common;

fn arr_3x4() -> NdArray<f64> {
    NdArray::from_fn(&[3, 4], |c| (c[0] * 4 + c[1]) as f64)
}

#[test]
fn test_slice_rank_preserved() {
    let a = arr_3x4();
    let row = a.slice(&[1.into(), AxisSelector::Full]).unwrap();
    assert_eq!(row.shape(), &[1, 4]);
    assert_eq!(row.data(), &[4.0, 5.0, 6.0, 7.0]);

    let cell = a.slice(&[2.into(), 3.into()]).unwrap();
    assert_eq!(cell.shape(), &[1, 1]);
    assert_eq!(cell.data(), &[11.0]);
}

#[test]
fn test_slice_negative_endpoints() {
    let a = arr_3x4();
    let tail = a.slice(&[(-1).into(), (-2..=-1).into()]).unwrap();
    assert_eq!(tail.shape(), &[1, 2]);
    assert_eq!(tail.data(), &[10.0, 11.0]);
}

#[test]
fn test_slice_interior_block() {
    let a = arr_3x4();
    let block = a.slice(&[(0..2).into(), (1..3).into()]).unwrap();
    assert_eq!(block.shape(), &[2, 2]);
    assert_eq!(block.data(), &[1.0, 2.0, 5.0, 6.0]);
}

#[test]
fn test_slice_is_a_copy() {
    let mut a = arr_3x4();
    let block = a.slice(&[(0..1).into(), (0..2).into()]).unwrap();
    a.set_at(&[0, 0], 100.0).unwrap();
    assert_eq!(block.data(), &[0.0, 1.0]);
}

#[test]
fn test_empty_range_rejected() {
    let a = arr_3x4();
    let err = a.slice(&[(2..2).into(), AxisSelector::Full]).unwrap_err();
    assert!(matches!(err, Error::InvalidSelector { dim: 0, .. }));
}

#[test]
fn test_set_slice_region() {
    let mut a = arr_3x4();
    let patch = NdArray::full(&[2, 2], -1.0);
    a.set_slice(&[(1..3).into(), (0..2).into()], &patch).unwrap();
    assert_eq!(a.at(&[1, 0]).unwrap(), -1.0);
    assert_eq!(a.at(&[2, 1]).unwrap(), -1.0);
    // Untouched region preserved
    assert_eq!(a.at(&[0, 0]).unwrap(), 0.0);
    assert_eq!(a.at(&[1, 2]).unwrap(), 6.0);
}

#[test]
fn test_set_slice_wrong_shape_leaves_target_intact() {
    let mut a = arr_3x4();
    let before = a.clone();
    let patch = NdArray::full(&[2, 3], -1.0);
    let err = a
        .set_slice(&[(1..3).into(), (0..2).into()], &patch)
        .unwrap_err();
    assert!(matches!(err, Error::ShapeMismatch { .. }));
    assert_eq!(a, before);
}

#[test]
fn test_slice_3d_middle_axis() {
    let a = NdArray::from_fn(&[2, 3, 2], |c| (c[0] * 6 + c[1] * 2 + c[2]) as i64);
    let s = a
        .slice(&[AxisSelector::Full, (1..3).into(), 0.into()])
        .unwrap();
    assert_eq!(s.shape(), &[2, 2, 1]);
    assert_eq!(s.data(), &[2, 4, 8, 10]);
}
