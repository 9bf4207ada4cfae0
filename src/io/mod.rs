//! Audio I/O and persistence boundaries
//!
//! - Mono waveform container
//! - Audio decoding using Symphonia
//! - Feature stores keyed by recording

pub mod decoder;
pub mod store;
pub mod waveform;
