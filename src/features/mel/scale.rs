//! Mel scale conversions
//!
//! Natural-log form of the O'Shaughnessy Mel scale:
//! `mel(f) = 1127 * ln(1 + f / 700)`.

/// Convert a frequency in Hz to Mel
pub fn freq_to_mel(freq: f64) -> f64 {
    1127.0 * (1.0 + freq / 700.0).ln()
}

/// Convert a Mel value back to Hz
pub fn mel_to_freq(mel: f64) -> f64 {
    700.0 * ((mel / 1127.0).exp() - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_points() {
        assert_eq!(freq_to_mel(0.0), 0.0);
        // 1000 Hz is close to 1000 mel on this scale
        assert!((freq_to_mel(1000.0) - 999.99).abs() < 0.1);
        assert!((freq_to_mel(8000.0) - 2840.02).abs() < 0.1);
    }

    #[test]
    fn test_inverse() {
        for f in [0.0, 55.0, 440.0, 1000.0, 4000.0, 8000.0, 22050.0] {
            let back = mel_to_freq(freq_to_mel(f));
            assert!((back - f).abs() < 1e-6, "{} -> {}", f, back);
        }
    }

    #[test]
    fn test_monotonic() {
        let mut prev = freq_to_mel(0.0);
        for i in 1..200 {
            let m = freq_to_mel(i as f64 * 50.0);
            assert!(m > prev);
            prev = m;
        }
    }
}
