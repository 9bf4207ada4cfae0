//! Mel-scale filterbank
//!
//! - Hz <-> Mel conversion
//! - Triangular filterbank construction and application

pub mod filterbank;
pub mod scale;
