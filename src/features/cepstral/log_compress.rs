//! Logarithmic compression of filter energies

use crate::config::{LogFloor, ENERGY_FLOOR};

/// Natural log of each energy, with non-positive energies floored
///
/// With [`LogFloor::Raw`] a non-positive energy becomes `ENERGY_FLOOR`
/// itself; with [`LogFloor::Logarithmic`] it becomes `ln(ENERGY_FLOOR)`.
/// Positive energies are always `ln(e)`.
///
/// # Example
///
/// ```
/// use speech_mfcc::config::{LogFloor, ENERGY_FLOOR};
/// use speech_mfcc::features::cepstral::log_compress::log_compress;
///
/// let out = log_compress(&[1.0, 0.0], LogFloor::Raw);
/// assert_eq!(out, vec![0.0, ENERGY_FLOOR]);
/// ```
pub fn log_compress(energies: &[f32], floor: LogFloor) -> Vec<f32> {
    let substitute = match floor {
        LogFloor::Raw => ENERGY_FLOOR as f64,
        LogFloor::Logarithmic => (ENERGY_FLOOR as f64).ln(),
    };

    energies
        .iter()
        .map(|&e| {
            if e > 0.0 {
                (e as f64).ln() as f32
            } else {
                substitute as f32
            }
        })
        .collect()
}
