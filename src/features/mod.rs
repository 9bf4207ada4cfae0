//! Feature extraction stages
//!
//! This module contains the per-frame MFCC algorithms:
//! - Spectral analysis (FFT + power spectrum)
//! - Mel filterbank construction and application
//! - Log compression and DCT

pub mod cepstral;
pub mod mel;
pub mod spectral;
