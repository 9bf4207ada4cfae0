//! # Speech MFCC
//!
//! Batch Mel-Frequency Cepstral Coefficient extraction for captured speech,
//! producing the per-frame feature sequences used to train speech and
//! speaker-recognition models.
//!
//! ## Features
//!
//! - **Resampling**: nearest-neighbour conversion to the analysis rate (16 kHz)
//! - **Spectral analysis**: Hamming-windowed frames, radix-2 FFT, power spectrum
//! - **Mel filterbank**: triangular filters spaced on the Mel scale up to Nyquist
//! - **Cepstrum**: log compression with a non-positive-energy floor, DCT-II
//! - **Persistence boundary**: JSON-serializable results and keyed feature stores
//!
//! ## Quick Start
//!
//! ```no_run
//! use speech_mfcc::{extract_mfcc, MfccConfig};
//!
//! // Load audio samples (mono, f32, normalized)
//! let samples: Vec<f32> = vec![]; // Your audio data
//! let sample_rate = 44100;
//!
//! let features = extract_mfcc(&samples, sample_rate, MfccConfig::default())?;
//! println!("{} frames x {} coefficients", features.len(), features.num_coeffs());
//! # Ok::<(), speech_mfcc::ExtractionError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Waveform → Resample → Frame + Hamming → FFT → Power → Mel filterbank → Log → DCT → FeatureSequence
//! ```
//!
//! Every stage is a pure function. The filterbank is built once per call and
//! shared read-only across frames, which are processed in parallel when the
//! `parallel` feature is enabled.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod features;
pub mod io;
pub mod preprocessing;

// Re-export main types
pub use analysis::extractor::FeatureExtractor;
pub use analysis::result::{ExtractionSummary, FeatureSequence, FeatureVector};
pub use config::{ConfigOverrides, LogFloor, MfccConfig};
pub use error::ExtractionError;
pub use io::waveform::Waveform;

/// Main extraction function
///
/// Converts a mono waveform into a sequence of MFCC vectors, one per
/// analysis frame, in chronological order.
///
/// # Arguments
///
/// * `samples` - Mono audio samples, normalized to [-1.0, 1.0]
/// * `sample_rate` - Sample rate in Hz (typically 44100 or 48000)
/// * `config` - Extraction configuration parameters
///
/// # Returns
///
/// `FeatureSequence` with `floor((L - fft_size) / hop_size) + 1` vectors of
/// `num_coeffs` coefficients, where `L` is the resampled length; empty when
/// `L < fft_size`
///
/// # Errors
///
/// Returns `ExtractionError` if the configuration is invalid or the sample
/// rate is 0
///
/// # Example
///
/// ```
/// use speech_mfcc::{extract_mfcc, MfccConfig};
///
/// let samples = vec![0.0f32; 16000]; // 1 second of silence at 16 kHz
/// let features = extract_mfcc(&samples, 16000, MfccConfig::default())?;
/// assert_eq!(features.len(), 97);
/// # Ok::<(), speech_mfcc::ExtractionError>(())
/// ```
pub fn extract_mfcc(
    samples: &[f32],
    sample_rate: u32,
    config: MfccConfig,
) -> Result<FeatureSequence, ExtractionError> {
    FeatureExtractor::new(config)?.extract(samples, sample_rate)
}

/// Extract with defaults overridden by a partial configuration
///
/// # Example
///
/// ```
/// use speech_mfcc::{extract_mfcc_with, ConfigOverrides};
///
/// let overrides = ConfigOverrides { num_coeffs: Some(20), ..Default::default() };
/// let features = extract_mfcc_with(&vec![0.0f32; 16000], 16000, &overrides)?;
/// assert_eq!(features.num_coeffs(), 20);
/// # Ok::<(), speech_mfcc::ExtractionError>(())
/// ```
pub fn extract_mfcc_with(
    samples: &[f32],
    sample_rate: u32,
    overrides: &ConfigOverrides,
) -> Result<FeatureSequence, ExtractionError> {
    extract_mfcc(
        samples,
        sample_rate,
        MfccConfig::default().with_overrides(overrides),
    )
}
