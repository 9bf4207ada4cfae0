//! Framing and Hamming windowing
//!
//! Slices a signal into overlapping full-length frames starting at
//! `0, hop, 2 * hop, ...`. A trailing partial frame is never produced, so
//! the frame count is `floor((len - frame_size) / hop) + 1` when
//! `len >= frame_size` and zero otherwise.
//!
//! # Example
//!
//! ```
//! use speech_mfcc::preprocessing::framing::{frame_count, Framer};
//!
//! let samples = vec![0.0f32; 16000];
//! assert_eq!(frame_count(samples.len(), 512, 160), 97);
//! assert_eq!(Framer::new(&samples, 512, 160).count(), 97);
//! ```

use std::f64::consts::PI;

/// Number of full frames that fit in `len` samples
///
/// `hop_size` must be > 0; configuration validation guarantees this.
pub fn frame_count(len: usize, frame_size: usize, hop_size: usize) -> usize {
    if len < frame_size || hop_size == 0 {
        return 0;
    }
    (len - frame_size) / hop_size + 1
}

/// Iterator over full-length frames of a signal
#[derive(Debug, Clone)]
pub struct Framer<'a> {
    samples: &'a [f32],
    frame_size: usize,
    hop_size: usize,
    offset: usize,
}

impl<'a> Framer<'a> {
    /// Create a framer over `samples`
    pub fn new(samples: &'a [f32], frame_size: usize, hop_size: usize) -> Self {
        Self {
            samples,
            frame_size,
            hop_size,
            offset: 0,
        }
    }
}

impl<'a> Iterator for Framer<'a> {
    type Item = &'a [f32];

    fn next(&mut self) -> Option<Self::Item> {
        if self.hop_size == 0 || self.offset + self.frame_size > self.samples.len() {
            return None;
        }
        let frame = &self.samples[self.offset..self.offset + self.frame_size];
        self.offset += self.hop_size;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.samples.len().saturating_sub(self.offset);
        let n = frame_count(remaining, self.frame_size, self.hop_size);
        (n, Some(n))
    }
}

impl ExactSizeIterator for Framer<'_> {}

/// Hamming window coefficients `0.54 - 0.46 * cos(2 pi j / (size - 1))`
///
/// Coefficients are kept in double precision and applied to `f32` frames
/// with a single rounding per sample.
pub fn hamming_window(size: usize) -> Vec<f64> {
    if size < 2 {
        // Degenerate: a single tap has no taper
        return vec![1.0; size];
    }
    let denom = (size - 1) as f64;
    (0..size)
        .map(|j| 0.54 - 0.46 * (2.0 * PI * j as f64 / denom).cos())
        .collect()
}

/// Multiply `window` elementwise into `frame`
pub fn apply_window(frame: &mut [f32], window: &[f64]) {
    debug_assert_eq!(frame.len(), window.len());
    for (sample, &w) in frame.iter_mut().zip(window) {
        *sample = (*sample as f64 * w) as f32;
    }
}
