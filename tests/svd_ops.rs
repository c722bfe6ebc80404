//! Integration tests for singular value decomposition
//!
//! Tests verify:
//! - Reconstruction U @ diag(S) @ Vt ~= A for square, tall, and wide inputs
//! - Singular values sorted descending and non-negative
//! - Rank-deficient inputs yield (near-)zero trailing singular values
//! - Output shapes follow the k = min(m, n) convention

use ndar::linalg::svd;
use ndar::{Error, NdArray};

mod common;
use common::{assert_allclose, matmul};

fn reconstruct(d: &ndar::linalg::SvdDecomposition<f64>, m: usize, k: usize, n: usize) -> Vec<f64> {
    let mut us = vec![0.0; m * k];
    for i in 0..m {
        for j in 0..k {
            us[i * k + j] = d.u.data()[i * k + j] * d.s.data()[j];
        }
    }
    matmul(&us, d.vt.data(), m, k, n)
}

fn assert_descending_nonneg(s: &[f64]) {
    for w in s.windows(2) {
        assert!(w[0] >= w[1] - 1e-10, "singular values not descending: {:?}", s);
    }
    for &v in s {
        assert!(v >= 0.0, "negative singular value: {}", v);
    }
}

#[test]
fn test_svd_square_symmetric() {
    let a = NdArray::from_vec(vec![3.0, 1.0, 1.0, 3.0], &[2, 2]).unwrap();
    let d = svd(&a).unwrap();
    assert_allclose(d.s.data(), &[4.0, 2.0], 0.0, 1e-8, "singular values");
    let r = reconstruct(&d, 2, 2, 2);
    assert_allclose(&r, a.data(), 0.0, 1e-8, "reconstruction");
}

#[test]
fn test_svd_tall_matrix() {
    let a = NdArray::from_vec(vec![1.0, 0.0, 0.0, 1.0, 1.0, 1.0], &[3, 2]).unwrap();
    let d = a.svd().unwrap();
    assert_eq!(d.u.shape(), &[3, 2]);
    assert_eq!(d.s.shape(), &[2]);
    assert_eq!(d.vt.shape(), &[2, 2]);
    assert_descending_nonneg(d.s.data());
    let r = reconstruct(&d, 3, 2, 2);
    assert_allclose(&r, a.data(), 0.0, 1e-8, "tall reconstruction");
}

#[test]
fn test_svd_wide_matrix() {
    let a = NdArray::from_vec(vec![1.0, 0.0, 2.0, 0.0, 3.0, 0.0], &[2, 3]).unwrap();
    let d = svd(&a).unwrap();
    assert_eq!(d.u.shape(), &[2, 2]);
    assert_eq!(d.s.shape(), &[2]);
    assert_eq!(d.vt.shape(), &[2, 3]);
    assert_descending_nonneg(d.s.data());
    let r = reconstruct(&d, 2, 2, 3);
    assert_allclose(&r, a.data(), 0.0, 1e-8, "wide reconstruction");
}

#[test]
fn test_svd_rank_deficient() {
    let a = NdArray::from_vec(vec![1.0f64, 2.0, 2.0, 4.0], &[2, 2]).unwrap();
    let d = svd(&a).unwrap();
    assert!((d.s.data()[0] - 5.0).abs() < 1e-8);
    assert!(d.s.data()[1].abs() < 1e-8);
    let r = reconstruct(&d, 2, 2, 2);
    assert_allclose(&r, a.data(), 0.0, 1e-8, "rank-1 reconstruction");
}

#[test]
fn test_svd_diagonal_values() {
    let a = NdArray::from_vec(vec![3.0, 0.0, 0.0, 0.0, 5.0, 0.0, 0.0, 0.0, 4.0], &[3, 3]).unwrap();
    let d = svd(&a).unwrap();
    assert_allclose(d.s.data(), &[5.0, 4.0, 3.0], 0.0, 1e-8, "diagonal singular values");
}

#[test]
fn test_svd_left_vectors_orthonormal_square() {
    let a = NdArray::from_vec(
        vec![2.0, 0.0, 1.0, 0.0, 3.0, 0.0, 1.0, 0.0, 2.0],
        &[3, 3],
    )
    .unwrap();
    let d = svd(&a).unwrap();
    let u = d.u.data();
    for c1 in 0..3 {
        for c2 in 0..3 {
            let dot: f64 = (0..3).map(|r| u[r * 3 + c1] * u[r * 3 + c2]).sum();
            let expected = if c1 == c2 { 1.0 } else { 0.0 };
            assert!(
                (dot - expected).abs() < 1e-8,
                "U columns {c1},{c2} not orthonormal: {dot}"
            );
        }
    }
}

#[test]
fn test_svd_requires_rank_2() {
    let v = NdArray::from_vec(vec![1.0, 2.0, 3.0], &[3]).unwrap();
    assert_eq!(
        svd(&v).unwrap_err(),
        Error::RankError { expected: 2, got: 1 }
    );
}
