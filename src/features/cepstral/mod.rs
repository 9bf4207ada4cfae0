//! Cepstral stage
//!
//! - Log compression with a floor for non-positive energies
//! - DCT-II decorrelation into cepstral coefficients

pub mod dct;
pub mod log_compress;
