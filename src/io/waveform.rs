//! Mono waveform container

use crate::error::ExtractionError;

/// Mono PCM samples paired with their sample rate
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    /// Samples, nominally in [-1.0, 1.0]
    pub samples: Vec<f32>,
    /// Sample rate in Hz
    pub sample_rate: u32,
}

impl Waveform {
    /// Create a waveform, rejecting a zero sample rate
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Result<Self, ExtractionError> {
        if sample_rate == 0 {
            return Err(ExtractionError::InvalidInput(
                "Sample rate must be > 0".to_string(),
            ));
        }
        Ok(Self {
            samples,
            sample_rate,
        })
    }

    /// Keep only the first channel of interleaved multi-channel data
    ///
    /// Remaining channels are discarded, not mixed down. A trailing
    /// incomplete frame is ignored.
    pub fn from_interleaved(
        data: &[f32],
        channels: usize,
        sample_rate: u32,
    ) -> Result<Self, ExtractionError> {
        if channels == 0 {
            return Err(ExtractionError::InvalidInput(
                "Channel count must be > 0".to_string(),
            ));
        }
        let samples = data.chunks_exact(channels).map(|frame| frame[0]).collect();
        Self::new(samples, sample_rate)
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if there are no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds
    pub fn duration_seconds(&self) -> f32 {
        self.samples.len() as f32 / self.sample_rate as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_channel_only() {
        let interleaved = [0.1f32, 0.9, 0.2, 0.8, 0.3, 0.7, 0.4];
        let wave = Waveform::from_interleaved(&interleaved, 2, 8000).unwrap();
        assert_eq!(wave.samples, vec![0.1, 0.2, 0.3]);
        assert_eq!(wave.sample_rate, 8000);
    }

    #[test]
    fn test_rejects_zero_rate_and_channels() {
        assert!(Waveform::new(vec![0.0; 10], 0).is_err());
        assert!(Waveform::from_interleaved(&[0.0; 10], 0, 16000).is_err());
    }

    #[test]
    fn test_duration() {
        let wave = Waveform::new(vec![0.0; 8000], 16000).unwrap();
        assert_eq!(wave.len(), 8000);
        assert!((wave.duration_seconds() - 0.5).abs() < 1e-6);
    }
}
