//! Extraction result types

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::error::ExtractionError;

/// Cepstral coefficients of one frame (`num_coeffs` values)
pub type FeatureVector = Vec<f32>;

/// Per-frame feature vectors in chronological order
///
/// Serializes as a plain nested array, e.g. `[[c0, c1, ...], ...]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureSequence(Vec<FeatureVector>);

impl FeatureSequence {
    /// Number of frames
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no frame was extracted
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Coefficients per frame (0 when empty)
    pub fn num_coeffs(&self) -> usize {
        self.0.first().map_or(0, Vec::len)
    }

    /// Iterate over frames
    pub fn iter(&self) -> std::slice::Iter<'_, FeatureVector> {
        self.0.iter()
    }

    /// Borrow the frames
    pub fn as_slice(&self) -> &[FeatureVector] {
        &self.0
    }

    /// Take ownership of the frames
    pub fn into_inner(self) -> Vec<FeatureVector> {
        self.0
    }

    /// True if every coefficient is finite
    pub fn is_finite(&self) -> bool {
        self.0.iter().flatten().all(|c| c.is_finite())
    }

    /// Serialize as a JSON nested array
    pub fn to_json(&self) -> Result<String, ExtractionError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse from a JSON nested array
    pub fn from_json(json: &str) -> Result<Self, ExtractionError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<Vec<FeatureVector>> for FeatureSequence {
    fn from(frames: Vec<FeatureVector>) -> Self {
        Self(frames)
    }
}

impl Index<usize> for FeatureSequence {
    type Output = FeatureVector;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for FeatureSequence {
    type Item = FeatureVector;
    type IntoIter = std::vec::IntoIter<FeatureVector>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FeatureSequence {
    type Item = &'a FeatureVector;
    type IntoIter = std::slice::Iter<'a, FeatureVector>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Diagnostics for one extraction call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionSummary {
    /// Input length in samples
    pub input_samples: usize,

    /// Input sample rate in Hz
    pub source_sample_rate: u32,

    /// Length after resampling
    pub resampled_samples: usize,

    /// Analysis sample rate in Hz
    pub target_sample_rate: u32,

    /// Number of frames (= feature vectors)
    pub num_frames: usize,

    /// Coefficients per frame
    pub num_coeffs: usize,

    /// Input duration in seconds
    pub duration_seconds: f32,

    /// Wall-clock processing time in milliseconds
    pub processing_time_ms: f32,
}
