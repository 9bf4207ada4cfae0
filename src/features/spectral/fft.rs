//! Radix-2 Cooley-Tukey FFT
//!
//! Recursive decimation-in-time transform of a real frame. Inputs whose
//! length is not a power of two are zero-padded up to the next power of two.
//!
//! Twiddle factors and butterflies are evaluated in double precision and the
//! result of every recursion level is stored as `f32`, so the output is a
//! deterministic function of the input (no planner, no reordering of sums).
//!
//! # Example
//!
//! ```
//! use speech_mfcc::features::spectral::fft::fft;
//!
//! let spectrum = fft(&[1.0, 0.0, 0.0, 0.0]);
//! assert_eq!(spectrum.real, vec![1.0; 4]);
//! assert_eq!(spectrum.imag, vec![0.0; 4]);
//! ```

use std::f64::consts::PI;

/// Complex spectrum stored as separate real and imaginary parts
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    /// Real parts
    pub real: Vec<f32>,
    /// Imaginary parts (same length as `real`)
    pub imag: Vec<f32>,
}

impl Spectrum {
    /// Number of bins (always a power of two)
    pub fn len(&self) -> usize {
        self.real.len()
    }

    /// True for the transform of an empty frame
    pub fn is_empty(&self) -> bool {
        self.real.is_empty()
    }
}

/// Smallest power of two >= `n` (1 for `n == 0`)
pub fn next_power_of_two(n: usize) -> usize {
    n.max(1).next_power_of_two()
}

/// Compute the DFT of a real-valued frame
///
/// # Arguments
///
/// * `input` - Real samples; zero-padded to the next power of two if needed
///
/// # Returns
///
/// `Spectrum` whose length is the (possibly padded) input length. An empty
/// input yields an empty spectrum.
pub fn fft(input: &[f32]) -> Spectrum {
    if input.is_empty() {
        return Spectrum {
            real: Vec::new(),
            imag: Vec::new(),
        };
    }

    let n = next_power_of_two(input.len());
    if n == input.len() {
        transform(input)
    } else {
        let mut padded = input.to_vec();
        padded.resize(n, 0.0);
        transform(&padded)
    }
}

/// Recursive step; `input.len()` is a power of two
fn transform(input: &[f32]) -> Spectrum {
    let n = input.len();
    if n == 1 {
        return Spectrum {
            real: vec![input[0]],
            imag: vec![0.0],
        };
    }

    let half = n / 2;
    let evens: Vec<f32> = input.iter().step_by(2).copied().collect();
    let odds: Vec<f32> = input.iter().skip(1).step_by(2).copied().collect();

    let even = transform(&evens);
    let odd = transform(&odds);

    let mut real = vec![0.0f32; n];
    let mut imag = vec![0.0f32; n];

    for k in 0..half {
        let angle = -2.0 * PI * k as f64 / n as f64;
        let (sin, cos) = angle.sin_cos();
        let odd_re = odd.real[k] as f64;
        let odd_im = odd.imag[k] as f64;

        // t = e^{-2 pi i k / n} * odd[k]
        let t_re = cos * odd_re - sin * odd_im;
        let t_im = cos * odd_im + sin * odd_re;

        let even_re = even.real[k] as f64;
        let even_im = even.imag[k] as f64;

        real[k] = (even_re + t_re) as f32;
        imag[k] = (even_im + t_im) as f32;
        real[k + half] = (even_re - t_re) as f32;
        imag[k + half] = (even_im - t_im) as f32;
    }

    Spectrum { real, imag }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustfft::num_complex::Complex;
    use rustfft::FftPlanner;

    #[test]
    fn test_next_power_of_two() {
        assert_eq!(next_power_of_two(0), 1);
        assert_eq!(next_power_of_two(1), 1);
        assert_eq!(next_power_of_two(3), 4);
        assert_eq!(next_power_of_two(400), 512);
        assert_eq!(next_power_of_two(512), 512);
    }

    #[test]
    fn test_single_sample() {
        let s = fft(&[0.75]);
        assert_eq!(s.real, vec![0.75]);
        assert_eq!(s.imag, vec![0.0]);
    }

    #[test]
    fn test_unit_impulse() {
        let mut impulse = vec![0.0f32; 512];
        impulse[0] = 1.0;
        let s = fft(&impulse);

        assert_eq!(s.len(), 512);
        assert!(s.real.iter().all(|&x| x == 1.0));
        assert!(s.imag.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_padding_length() {
        assert_eq!(fft(&vec![0.1f32; 400]).len(), 512);
        assert_eq!(fft(&vec![0.1f32; 5]).len(), 8);
        assert_eq!(fft(&vec![0.1f32; 256]).len(), 256);
        assert!(fft(&[]).is_empty());
    }

    #[test]
    fn test_matches_rustfft_reference() {
        let input: Vec<f32> = (0..256)
            .map(|i| {
                let t = i as f32 / 256.0;
                (2.0 * std::f32::consts::PI * 13.0 * t).sin() + 0.3 * (7.1 * t).cos()
            })
            .collect();

        let ours = fft(&input);

        let mut buffer: Vec<Complex<f64>> =
            input.iter().map(|&x| Complex::new(x as f64, 0.0)).collect();
        let mut planner = FftPlanner::<f64>::new();
        planner.plan_fft_forward(buffer.len()).process(&mut buffer);

        for (k, reference) in buffer.iter().enumerate() {
            assert!(
                (ours.real[k] as f64 - reference.re).abs() < 1e-3,
                "real mismatch at bin {}: {} vs {}",
                k,
                ours.real[k],
                reference.re
            );
            assert!(
                (ours.imag[k] as f64 - reference.im).abs() < 1e-3,
                "imag mismatch at bin {}: {} vs {}",
                k,
                ours.imag[k],
                reference.im
            );
        }
    }

    #[test]
    fn test_deterministic() {
        let input: Vec<f32> = (0..512).map(|i| ((i * 7919) % 101) as f32 / 101.0).collect();
        assert_eq!(fft(&input), fft(&input));
    }
}
