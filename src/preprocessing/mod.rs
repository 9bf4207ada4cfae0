//! Time-domain preprocessing
//!
//! Prepares a waveform for spectral analysis:
//! - Nearest-neighbour resampling to the analysis rate
//! - Framing and Hamming windowing

pub mod framing;
pub mod resample;
