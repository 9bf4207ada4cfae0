//! Type-II discrete cosine transform (unnormalised)
//!
//! `out[k] = sum_{n=0}^{N-1} x[n] * cos(pi * (n + 0.5) * k / N)` for
//! `k = 0..num_coeffs`. No orthonormal scaling is applied.

use std::f64::consts::PI;

/// Compute the first `num_coeffs` DCT-II coefficients of `input`
///
/// An empty input yields `num_coeffs` zeros.
pub fn dct(input: &[f32], num_coeffs: usize) -> Vec<f32> {
    let n_len = input.len() as f64;
    (0..num_coeffs)
        .map(|k| {
            let sum: f64 = input
                .iter()
                .enumerate()
                .map(|(n, &x)| x as f64 * (PI * (n as f64 + 0.5) * k as f64 / n_len).cos())
                .sum();
            sum as f32
        })
        .collect()
}
