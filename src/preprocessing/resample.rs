//! Nearest-neighbour sample-rate conversion
//!
//! Picks the source sample at `floor(i * ratio)` for every output index, with
//! `ratio = source_rate / target_rate`. There is no anti-aliasing low-pass, so
//! downsampling folds energy above the new Nyquist frequency back into the
//! band. Features are only comparable with other output of this resampler.
//!
//! # Example
//!
//! ```
//! use speech_mfcc::preprocessing::resample::resample;
//!
//! let samples = vec![0.0f32; 44100];
//! let resampled = resample(&samples, 44100, 16000);
//! assert_eq!(resampled.len(), 16000);
//! ```

/// Resample `samples` from `source_rate` to `target_rate`
///
/// Equal rates return an exact copy of the input. Otherwise the output holds
/// `round(len / ratio)` samples.
///
/// # Arguments
///
/// * `samples` - Mono audio samples
/// * `source_rate` - Sample rate of `samples` in Hz (must be > 0)
/// * `target_rate` - Desired sample rate in Hz (must be > 0)
///
/// # Returns
///
/// Resampled audio
pub fn resample(samples: &[f32], source_rate: u32, target_rate: u32) -> Vec<f32> {
    if source_rate == target_rate {
        return samples.to_vec();
    }

    let ratio = source_rate as f64 / target_rate as f64;
    let output_len = resampled_len(samples.len(), source_rate, target_rate);

    log::debug!(
        "Resampling {} samples: {} Hz -> {} Hz (ratio {:.5}, {} output samples)",
        samples.len(),
        source_rate,
        target_rate,
        ratio,
        output_len
    );

    if samples.is_empty() {
        return Vec::new();
    }

    let last = samples.len() - 1;
    (0..output_len)
        .map(|i| {
            let src = (i as f64 * ratio).floor() as usize;
            samples[src.min(last)]
        })
        .collect()
}

/// Number of samples [`resample`] produces for an input of `len` samples
pub fn resampled_len(len: usize, source_rate: u32, target_rate: u32) -> usize {
    if source_rate == target_rate {
        return len;
    }
    let ratio = source_rate as f64 / target_rate as f64;
    (len as f64 / ratio).round() as usize
}
