//! Pipeline orchestration and result types
//!
//! - Feature extractor (resample, frame, transform)
//! - Feature sequence and extraction summary

pub mod extractor;
pub mod result;
