//! One-sided power spectrum

use super::fft::Spectrum;

/// Power over bins `0..=n/2`: `(re^2 + im^2) / n`
///
/// Only the lower half is kept since the spectrum of a real frame is
/// conjugate-symmetric.
pub fn power_spectrum(spectrum: &Spectrum) -> Vec<f32> {
    let n = spectrum.len();
    if n == 0 {
        return Vec::new();
    }

    spectrum.real[..=n / 2]
        .iter()
        .zip(&spectrum.imag[..=n / 2])
        .map(|(&re, &im)| {
            let (re, im) = (re as f64, im as f64);
            ((re * re + im * im) / n as f64) as f32
        })
        .collect()
}
