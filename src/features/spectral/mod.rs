//! Spectral analysis
//!
//! - Radix-2 FFT of windowed frames
//! - One-sided power spectrum

pub mod fft;
pub mod power;
