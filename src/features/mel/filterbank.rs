//! Triangular Mel filterbank
//!
//! Built once per extraction from `(num_filters, fft_size, sample_rate)` and
//! shared read-only by every frame.
//!
//! # Algorithm
//!
//! 1. Place `num_filters + 2` points equally spaced on the Mel axis between
//!    `mel(0)` and `mel(sample_rate / 2)`
//! 2. Convert each point to Hz, then to an FFT bin:
//!    `floor((fft_size + 1) * freq / sample_rate)`
//! 3. Filter `m` spans bins `(bin[m-1], bin[m], bin[m+1])`, rising linearly
//!    from 0 at `start` to 1 at `center` and falling to 0 at `end`
//!
//! A filter whose `start == center` or `center == end` uses a denominator of
//! 1 for that slope instead of dividing by zero.
//!
//! # Example
//!
//! ```
//! use speech_mfcc::features::mel::filterbank::MelFilterbank;
//!
//! let bank = MelFilterbank::new(26, 512, 16000);
//! assert_eq!(bank.num_filters(), 26);
//! assert_eq!(bank.bin_points().len(), 28);
//!
//! let energies = bank.apply(&vec![0.0f32; 257]);
//! assert!(energies.iter().all(|&e| e == 0.0));
//! ```

use super::scale::{freq_to_mel, mel_to_freq};

/// One triangular filter with its precomputed weights
#[derive(Debug, Clone, PartialEq)]
pub struct MelFilter {
    /// First bin of the support (weight 0)
    pub start: usize,
    /// Peak bin (weight 1, unless degenerate)
    pub center: usize,
    /// Last bin of the support (weight 0)
    pub end: usize,
    /// Weights for bins `start..=end`
    weights: Vec<f64>,
}

impl MelFilter {
    fn new(start: usize, center: usize, end: usize) -> Self {
        let rise = if center == start { 1.0 } else { (center - start) as f64 };
        let fall = if end == center { 1.0 } else { (end - center) as f64 };

        let mut weights = Vec::with_capacity(end.saturating_sub(start) + 1);
        for k in start..=center {
            weights.push((k - start) as f64 / rise);
        }
        for k in (center + 1)..=end {
            weights.push((end - k) as f64 / fall);
        }

        Self {
            start,
            center,
            end,
            weights,
        }
    }

    /// True when either slope has zero width
    pub fn is_degenerate(&self) -> bool {
        self.start == self.center || self.center == self.end
    }

    /// Weight applied to `bin` (0 outside the support)
    pub fn weight(&self, bin: usize) -> f64 {
        if bin < self.start {
            return 0.0;
        }
        self.weights.get(bin - self.start).copied().unwrap_or(0.0)
    }

    /// Weighted sum of `power` over this filter's support
    ///
    /// Bins past the end of `power` contribute nothing.
    pub fn energy(&self, power: &[f32]) -> f32 {
        let sum: f64 = power
            .iter()
            .skip(self.start)
            .zip(&self.weights)
            .map(|(&p, &w)| p as f64 * w)
            .sum();
        sum as f32
    }
}

/// Triangular filters spanning 0 Hz to Nyquist on the Mel axis
#[derive(Debug, Clone, PartialEq)]
pub struct MelFilterbank {
    bin_points: Vec<usize>,
    filters: Vec<MelFilter>,
    fft_size: usize,
    sample_rate: u32,
}

impl MelFilterbank {
    /// Build the filterbank
    ///
    /// # Arguments
    ///
    /// * `num_filters` - Number of triangular filters
    /// * `fft_size` - Analysis frame length used for bin mapping
    /// * `sample_rate` - Sample rate of the analysed signal in Hz (must be > 0)
    pub fn new(num_filters: usize, fft_size: usize, sample_rate: u32) -> Self {
        let sr = sample_rate as f64;
        let low_mel = freq_to_mel(0.0);
        let high_mel = freq_to_mel(sr / 2.0);
        let num_points = num_filters + 2;
        let step = (high_mel - low_mel) / (num_filters + 1) as f64;

        // Mel and Hz points are held at single precision before bin mapping
        let bin_points: Vec<usize> = (0..num_points)
            .map(|i| {
                let mel = (low_mel + i as f64 * step) as f32;
                let freq = mel_to_freq(mel as f64) as f32;
                ((fft_size + 1) as f64 * freq as f64 / sr).floor().max(0.0) as usize
            })
            .collect();

        log::trace!("Mel bin points: {:?}", bin_points);

        let filters: Vec<MelFilter> = bin_points
            .windows(3)
            .map(|w| MelFilter::new(w[0], w[1], w[2]))
            .collect();

        let degenerate = filters.iter().filter(|f| f.is_degenerate()).count();
        if degenerate > 0 {
            log::warn!(
                "{} of {} Mel filters are degenerate (fft_size={}, sample_rate={}); \
                 consider fewer filters or a larger fft_size",
                degenerate,
                num_filters,
                fft_size,
                sample_rate
            );
        }

        log::debug!(
            "Built Mel filterbank: {} filters, fft_size={}, sample_rate={} Hz, top bin={}",
            num_filters,
            fft_size,
            sample_rate,
            bin_points.last().copied().unwrap_or(0)
        );

        Self {
            bin_points,
            filters,
            fft_size,
            sample_rate,
        }
    }

    /// Number of filters
    pub fn num_filters(&self) -> usize {
        self.filters.len()
    }

    /// The `num_filters + 2` boundary bins, non-decreasing
    pub fn bin_points(&self) -> &[usize] {
        &self.bin_points
    }

    /// All filters in ascending frequency order
    pub fn filters(&self) -> &[MelFilter] {
        &self.filters
    }

    /// Frame length the bins were mapped for
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// Sample rate the bins were mapped for
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Project a one-sided power spectrum onto the filters
    ///
    /// # Returns
    ///
    /// One non-negative energy per filter
    pub fn apply(&self, power: &[f32]) -> Vec<f32> {
        self.filters.iter().map(|f| f.energy(power)).collect()
    }
}
