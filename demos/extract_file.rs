//! Example: Extract MFCCs from a recording and store them as JSON
//!
//! Usage:
//!   cargo run --release --example extract_file -- <audio file> [output dir] [subject age gender trial]
//!
//! Without subject metadata the key is derived from the file stem.

use speech_mfcc::io::decoder::decode_audio;
use speech_mfcc::io::store::{FeatureStore, JsonDirStore, RecordingKey};
use speech_mfcc::{FeatureExtractor, MfccConfig};
use std::env;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let input = args
        .first()
        .ok_or("usage: extract_file <audio file> [output dir] [subject age gender trial]")?;
    let out_dir = args.get(1).map(String::as_str).unwrap_or("mfcc_out");

    let key = if args.len() >= 6 {
        RecordingKey::new(args[2].clone(), args[3].parse()?, args[4].clone(), args[5].parse()?)
            .to_string()
    } else {
        let stem = Path::new(input)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("recording");
        format!("{}_mfcc", stem)
    };

    let wave = decode_audio(input)?;
    let extractor = FeatureExtractor::new(MfccConfig::default())?;
    let (features, summary) = extractor.extract_with_summary(&wave.samples, wave.sample_rate)?;

    let mut store = JsonDirStore::open(out_dir)?;
    store.put(&key, &features)?;

    println!("Extraction Results:");
    println!("  Input: {} ({:.2} s at {} Hz)", input, summary.duration_seconds, summary.source_sample_rate);
    println!("  Frames: {} x {} coefficients", summary.num_frames, summary.num_coeffs);
    println!("  Processing time: {:.2} ms", summary.processing_time_ms);
    println!("  Stored under key: {}", key);

    Ok(())
}
