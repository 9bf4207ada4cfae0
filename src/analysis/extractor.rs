//! MFCC pipeline orchestration
//!
//! Resamples once, builds the Mel filterbank and Hamming window once, then
//! runs every frame through window -> FFT -> power spectrum -> filterbank ->
//! log -> DCT. Frames share only read-only data, so with the `parallel`
//! feature they are processed on the rayon pool; `collect` keeps them in
//! chronological order.

use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::result::{ExtractionSummary, FeatureSequence, FeatureVector};
use crate::config::MfccConfig;
use crate::error::ExtractionError;
use crate::features::cepstral::dct::dct;
use crate::features::cepstral::log_compress::log_compress;
use crate::features::mel::filterbank::MelFilterbank;
use crate::features::spectral::fft::fft;
use crate::features::spectral::power::power_spectrum;
use crate::io::waveform::Waveform;
use crate::preprocessing::framing::{apply_window, frame_count, hamming_window, Framer};
use crate::preprocessing::resample::resample;

/// Stateless MFCC extractor bound to a validated configuration
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    config: MfccConfig,
}

/// Read-only data shared by every frame of one extraction
struct FrameContext<'a> {
    config: &'a MfccConfig,
    window: Vec<f64>,
    filterbank: MelFilterbank,
}

impl FrameContext<'_> {
    fn process(&self, frame: &[f32]) -> FeatureVector {
        let mut frame = frame.to_vec();
        apply_window(&mut frame, &self.window);

        let spectrum = fft(&frame);
        let power = power_spectrum(&spectrum);
        let energies = self.filterbank.apply(&power);
        let log_energies = log_compress(&energies, self.config.log_floor);

        dct(&log_energies, self.config.num_coeffs)
    }
}

#[cfg(feature = "parallel")]
fn frame_at(samples: &[f32], k: usize, frame_size: usize, hop_size: usize) -> &[f32] {
    let offset = k * hop_size;
    &samples[offset..offset + frame_size]
}

impl FeatureExtractor {
    /// Create an extractor
    ///
    /// # Errors
    ///
    /// Returns `ExtractionError::InvalidConfig` if `config` fails validation
    pub fn new(config: MfccConfig) -> Result<Self, ExtractionError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration in use
    pub fn config(&self) -> &MfccConfig {
        &self.config
    }

    /// Filterbank this extractor applies to every frame
    pub fn filterbank(&self) -> MelFilterbank {
        MelFilterbank::new(
            self.config.num_mel_filters,
            self.config.fft_size,
            self.config.target_sample_rate,
        )
    }

    /// Extract MFCCs from mono samples
    ///
    /// # Arguments
    ///
    /// * `samples` - Mono audio samples, nominally in [-1.0, 1.0]
    /// * `sample_rate` - Sample rate of `samples` in Hz
    ///
    /// # Returns
    ///
    /// One `num_coeffs`-long vector per full frame. Input shorter than
    /// `fft_size` after resampling yields an empty sequence.
    ///
    /// # Errors
    ///
    /// Returns `ExtractionError::InvalidInput` if `sample_rate` is 0
    pub fn extract(
        &self,
        samples: &[f32],
        sample_rate: u32,
    ) -> Result<FeatureSequence, ExtractionError> {
        self.extract_with_summary(samples, sample_rate)
            .map(|(features, _)| features)
    }

    /// Extract MFCCs from a [`Waveform`]
    pub fn extract_waveform(
        &self,
        waveform: &Waveform,
    ) -> Result<FeatureSequence, ExtractionError> {
        self.extract(&waveform.samples, waveform.sample_rate)
    }

    /// Extract MFCCs and report sizes and timing
    pub fn extract_with_summary(
        &self,
        samples: &[f32],
        sample_rate: u32,
    ) -> Result<(FeatureSequence, ExtractionSummary), ExtractionError> {
        let start_time = Instant::now();

        if sample_rate == 0 {
            return Err(ExtractionError::InvalidInput(
                "Invalid sample rate".to_string(),
            ));
        }

        let config = &self.config;
        log::debug!(
            "Starting MFCC extraction: {} samples at {} Hz",
            samples.len(),
            sample_rate
        );

        let resampled = resample(samples, sample_rate, config.target_sample_rate);
        let num_frames = frame_count(resampled.len(), config.fft_size, config.hop_size);

        let features = if num_frames == 0 {
            log::warn!(
                "Audio length after resampling ({}) is shorter than fft_size ({}), returning no frames",
                resampled.len(),
                config.fft_size
            );
            FeatureSequence::default()
        } else {
            let ctx = FrameContext {
                config,
                window: hamming_window(config.fft_size),
                filterbank: self.filterbank(),
            };
            self.process_frames(&ctx, &resampled, num_frames)
        };

        let summary = ExtractionSummary {
            input_samples: samples.len(),
            source_sample_rate: sample_rate,
            resampled_samples: resampled.len(),
            target_sample_rate: config.target_sample_rate,
            num_frames,
            num_coeffs: config.num_coeffs,
            duration_seconds: samples.len() as f32 / sample_rate as f32,
            processing_time_ms: start_time.elapsed().as_secs_f32() * 1000.0,
        };

        log::debug!(
            "Extracted {} x {} MFCCs in {:.2} ms",
            summary.num_frames,
            summary.num_coeffs,
            summary.processing_time_ms
        );

        Ok((features, summary))
    }

    fn process_frames(
        &self,
        ctx: &FrameContext<'_>,
        samples: &[f32],
        num_frames: usize,
    ) -> FeatureSequence {
        let (frame_size, hop_size) = (self.config.fft_size, self.config.hop_size);

        #[cfg(feature = "parallel")]
        {
            if self.config.parallel {
                let frames: Vec<FeatureVector> = (0..num_frames)
                    .into_par_iter()
                    .map(|k| ctx.process(frame_at(samples, k, frame_size, hop_size)))
                    .collect();
                return FeatureSequence::from(frames);
            }
        }

        let frames: Vec<FeatureVector> = Framer::new(samples, frame_size, hop_size)
            .map(|frame| ctx.process(frame))
            .collect();
        debug_assert_eq!(frames.len(), num_frames);
        FeatureSequence::from(frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogFloor;

    fn sine(freq: f32, sample_rate: u32, seconds: f32) -> Vec<f32> {
        let n = (sample_rate as f32 * seconds) as usize;
        (0..n)
            .map(|i| (2.0 * std::f32::consts::PI * freq * i as f32 / sample_rate as f32).sin() * 0.5)
            .collect()
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = MfccConfig {
            hop_size: 0,
            ..Default::default()
        };
        assert!(matches!(
            FeatureExtractor::new(config),
            Err(ExtractionError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_zero_sample_rate() {
        let extractor = FeatureExtractor::new(MfccConfig::default()).unwrap();
        let result = extractor.extract(&[0.0; 1000], 0);
        assert!(matches!(result, Err(ExtractionError::InvalidInput(_))));
    }

    #[test]
    fn test_short_input_is_empty_not_error() {
        let extractor = FeatureExtractor::new(MfccConfig::default()).unwrap();
        assert!(extractor.extract(&[], 16000).unwrap().is_empty());
        assert!(extractor.extract(&[0.1; 511], 16000).unwrap().is_empty());
        assert_eq!(extractor.extract(&[0.1; 512], 16000).unwrap().len(), 1);
    }

    #[test]
    fn test_frame_count_and_shape() {
        let extractor = FeatureExtractor::new(MfccConfig::default()).unwrap();
        let samples = sine(300.0, 16000, 0.5);
        let (features, summary) = extractor.extract_with_summary(&samples, 16000).unwrap();

        assert_eq!(summary.resampled_samples, 8000);
        assert_eq!(features.len(), (8000 - 512) / 160 + 1);
        assert_eq!(summary.num_frames, features.len());
        assert!(features.iter().all(|v| v.len() == 13));
        assert!(features.is_finite());
    }

    #[test]
    fn test_silence_floors_without_nan() {
        let extractor = FeatureExtractor::new(MfccConfig {
            parallel: false,
            ..Default::default()
        })
        .unwrap();
        let features = extractor.extract(&vec![0.0; 4000], 16000).unwrap();
        assert!(!features.is_empty());
        assert!(features.is_finite());

        // Every log energy is the raw floor, so c0 = 26 * 1e-12 and c1.. are ~0
        let c0 = features[0][0];
        assert!((c0 - 26.0e-12).abs() < 1e-15, "c0 = {}", c0);
    }

    #[test]
    fn test_silence_logarithmic_floor() {
        let extractor = FeatureExtractor::new(MfccConfig {
            log_floor: LogFloor::Logarithmic,
            ..Default::default()
        })
        .unwrap();
        let features = extractor.extract(&vec![0.0; 4000], 16000).unwrap();
        let c0 = features[0][0];
        assert!((c0 - 26.0 * (-27.631021)).abs() < 1e-2, "c0 = {}", c0);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let samples = sine(440.0, 22050, 0.4);
        let seq = FeatureExtractor::new(MfccConfig {
            parallel: false,
            ..Default::default()
        })
        .unwrap()
        .extract(&samples, 22050)
        .unwrap();
        let par = FeatureExtractor::new(MfccConfig::default())
            .unwrap()
            .extract(&samples, 22050)
            .unwrap();
        assert_eq!(seq, par);
    }

    #[test]
    fn test_non_power_of_two_frame() {
        let config = MfccConfig {
            fft_size: 400,
            ..Default::default()
        };
        let extractor = FeatureExtractor::new(config).unwrap();
        let features = extractor.extract(&sine(1000.0, 16000, 0.25), 16000).unwrap();
        assert_eq!(features.len(), (4000 - 400) / 160 + 1);
        assert!(features.is_finite());
    }
}
