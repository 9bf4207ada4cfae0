//! Configuration parameters for MFCC extraction

use serde::{Deserialize, Serialize};

use crate::error::ExtractionError;

/// Floor substituted for log-compressed filter energies that are not positive
pub const ENERGY_FLOOR: f32 = 1e-12;

/// How the log compressor treats non-positive filter energies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogFloor {
    /// Substitute [`ENERGY_FLOOR`] itself (not its logarithm)
    #[default]
    Raw,
    /// Substitute `ln(ENERGY_FLOOR)` (about -27.63)
    Logarithmic,
}

/// MFCC extraction configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MfccConfig {
    /// Number of cepstral coefficients per frame (default: 13)
    pub num_coeffs: usize,

    /// Number of triangular Mel filters (default: 26)
    pub num_mel_filters: usize,

    /// Analysis frame length in samples (default: 512)
    /// Frames are zero-padded to the next power of two before the FFT
    pub fft_size: usize,

    /// Stride between consecutive frames in samples (default: 160, 10 ms at 16 kHz)
    pub hop_size: usize,

    /// Sample rate the waveform is resampled to before framing (default: 16000 Hz)
    pub target_sample_rate: u32,

    /// Treatment of non-positive filter energies (default: Raw)
    pub log_floor: LogFloor,

    /// Process frames on the rayon thread pool when the `parallel` feature is enabled (default: true)
    /// Output order is identical either way
    pub parallel: bool,
}

impl Default for MfccConfig {
    fn default() -> Self {
        Self {
            num_coeffs: 13,
            num_mel_filters: 26,
            fft_size: 512,
            hop_size: 160,
            target_sample_rate: 16000,
            log_floor: LogFloor::Raw,
            parallel: true,
        }
    }
}

/// Partial configuration; every `Some` field replaces the base value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigOverrides {
    /// Override for [`MfccConfig::num_coeffs`]
    pub num_coeffs: Option<usize>,
    /// Override for [`MfccConfig::num_mel_filters`]
    pub num_mel_filters: Option<usize>,
    /// Override for [`MfccConfig::fft_size`]
    pub fft_size: Option<usize>,
    /// Override for [`MfccConfig::hop_size`]
    pub hop_size: Option<usize>,
    /// Override for [`MfccConfig::target_sample_rate`]
    pub target_sample_rate: Option<u32>,
    /// Override for [`MfccConfig::log_floor`]
    pub log_floor: Option<LogFloor>,
    /// Override for [`MfccConfig::parallel`]
    pub parallel: Option<bool>,
}

impl MfccConfig {
    /// Merge caller overrides onto this configuration
    ///
    /// # Example
    ///
    /// ```
    /// use speech_mfcc::config::{ConfigOverrides, MfccConfig};
    ///
    /// let config = MfccConfig::default().with_overrides(&ConfigOverrides {
    ///     num_coeffs: Some(20),
    ///     ..Default::default()
    /// });
    /// assert_eq!(config.num_coeffs, 20);
    /// assert_eq!(config.fft_size, 512);
    /// ```
    pub fn with_overrides(&self, overrides: &ConfigOverrides) -> Self {
        Self {
            num_coeffs: overrides.num_coeffs.unwrap_or(self.num_coeffs),
            num_mel_filters: overrides.num_mel_filters.unwrap_or(self.num_mel_filters),
            fft_size: overrides.fft_size.unwrap_or(self.fft_size),
            hop_size: overrides.hop_size.unwrap_or(self.hop_size),
            target_sample_rate: overrides
                .target_sample_rate
                .unwrap_or(self.target_sample_rate),
            log_floor: overrides.log_floor.unwrap_or(self.log_floor),
            parallel: overrides.parallel.unwrap_or(self.parallel),
        }
    }

    /// Check the configuration before any processing
    ///
    /// # Errors
    ///
    /// Returns `ExtractionError::InvalidConfig` for any zero-sized parameter
    /// or an `fft_size` below 2 (the Hamming window needs at least two taps).
    pub fn validate(&self) -> Result<(), ExtractionError> {
        if self.num_coeffs == 0 {
            return Err(ExtractionError::InvalidConfig(
                "num_coeffs must be > 0".to_string(),
            ));
        }

        if self.num_mel_filters == 0 {
            return Err(ExtractionError::InvalidConfig(
                "num_mel_filters must be > 0".to_string(),
            ));
        }

        if self.fft_size < 2 {
            return Err(ExtractionError::InvalidConfig(format!(
                "fft_size must be >= 2, got {}",
                self.fft_size
            )));
        }

        if self.hop_size == 0 {
            return Err(ExtractionError::InvalidConfig(
                "hop_size must be > 0".to_string(),
            ));
        }

        if self.target_sample_rate == 0 {
            return Err(ExtractionError::InvalidConfig(
                "target_sample_rate must be > 0".to_string(),
            ));
        }

        if self.num_coeffs > self.num_mel_filters {
            log::warn!(
                "num_coeffs ({}) exceeds num_mel_filters ({}); upper coefficients alias lower ones",
                self.num_coeffs,
                self.num_mel_filters
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MfccConfig::default();
        assert_eq!(config.num_coeffs, 13);
        assert_eq!(config.num_mel_filters, 26);
        assert_eq!(config.fft_size, 512);
        assert_eq!(config.hop_size, 160);
        assert_eq!(config.target_sample_rate, 16000);
        assert_eq!(config.log_floor, LogFloor::Raw);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides_merge_independently() {
        let base = MfccConfig::default();
        let merged = base.with_overrides(&ConfigOverrides {
            hop_size: Some(256),
            target_sample_rate: Some(8000),
            ..Default::default()
        });

        assert_eq!(merged.hop_size, 256);
        assert_eq!(merged.target_sample_rate, 8000);
        assert_eq!(merged.num_coeffs, base.num_coeffs);
        assert_eq!(merged.fft_size, base.fft_size);

        // Empty overrides are the identity
        assert_eq!(base.with_overrides(&ConfigOverrides::default()), base);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: MfccConfig = serde_json::from_str(r#"{"num_coeffs": 20}"#).unwrap();
        assert_eq!(config.num_coeffs, 20);
        assert_eq!(config.num_mel_filters, 26);
        assert_eq!(config.hop_size, 160);
    }

    #[test]
    fn test_validate_rejects_zero_fields() {
        let base = MfccConfig::default();
        let cases = [
            ConfigOverrides { num_coeffs: Some(0), ..Default::default() },
            ConfigOverrides { num_mel_filters: Some(0), ..Default::default() },
            ConfigOverrides { fft_size: Some(0), ..Default::default() },
            ConfigOverrides { fft_size: Some(1), ..Default::default() },
            ConfigOverrides { hop_size: Some(0), ..Default::default() },
            ConfigOverrides { target_sample_rate: Some(0), ..Default::default() },
        ];

        for overrides in &cases {
            let result = base.with_overrides(overrides).validate();
            assert!(
                matches!(result, Err(ExtractionError::InvalidConfig(_))),
                "Expected InvalidConfig for {:?}",
                overrides
            );
        }
    }

    #[test]
    fn test_more_coeffs_than_filters_is_allowed() {
        let config = MfccConfig {
            num_coeffs: 40,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
