//! Persistence boundary for extracted features
//!
//! Extraction never persists anything itself. Callers hand the resulting
//! [`FeatureSequence`] to a [`FeatureStore`] under a key they construct,
//! typically with [`RecordingKey`]. Stored values are plain nested JSON
//! arrays; no schema beyond that is enforced.
//!
//! # Example
//!
//! ```
//! use speech_mfcc::io::store::{FeatureStore, MemoryStore, RecordingKey};
//! use speech_mfcc::FeatureSequence;
//!
//! let key = RecordingKey::new("Sari", 27, "Perempuan", 3);
//! assert_eq!(key.to_string(), "Sari_27_Perempuan_phrase3_mfcc");
//!
//! let mut store = MemoryStore::new();
//! store.put(&key.to_string(), &FeatureSequence::default())?;
//! assert!(store.get(&key.to_string())?.is_some());
//! # Ok::<(), speech_mfcc::ExtractionError>(())
//! ```

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::analysis::result::FeatureSequence;
use crate::error::ExtractionError;

/// Key identifying one recorded trial of one subject
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordingKey {
    /// Subject name
    pub subject: String,
    /// Subject age in years
    pub age: u32,
    /// Free-form gender label as entered by the subject
    pub gender: String,
    /// 1-based phrase (trial) index
    pub trial: u32,
}

impl RecordingKey {
    /// Create a key
    pub fn new(subject: impl Into<String>, age: u32, gender: impl Into<String>, trial: u32) -> Self {
        Self {
            subject: subject.into(),
            age,
            gender: gender.into(),
            trial,
        }
    }

    /// Base name shared by the recording and its features, without the `_mfcc` suffix
    pub fn recording_name(&self) -> String {
        format!(
            "{}_{}_{}_phrase{}",
            self.subject, self.age, self.gender, self.trial
        )
    }
}

impl fmt::Display for RecordingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_mfcc", self.recording_name())
    }
}

/// Key-value sink for feature sequences
pub trait FeatureStore {
    /// Store `features` under `key`, replacing any previous value
    fn put(&mut self, key: &str, features: &FeatureSequence) -> Result<(), ExtractionError>;

    /// Load the features stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<FeatureSequence>, ExtractionError>;
}

/// In-memory store holding the serialized JSON text per key
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw JSON stored under `key`
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl FeatureStore for MemoryStore {
    fn put(&mut self, key: &str, features: &FeatureSequence) -> Result<(), ExtractionError> {
        let json = features.to_json()?;
        self.entries.insert(key.to_string(), json);
        log::debug!("Stored {} feature vectors under '{}'", features.len(), key);
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<FeatureSequence>, ExtractionError> {
        self.entries
            .get(key)
            .map(|json| FeatureSequence::from_json(json))
            .transpose()
    }
}

/// Directory-backed store writing one `<key>.json` file per key
#[derive(Debug, Clone)]
pub struct JsonDirStore {
    root: PathBuf,
}

impl JsonDirStore {
    /// Open (and create if needed) a store rooted at `root`
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self, ExtractionError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// File that holds `key`
    pub fn path_for(&self, key: &str) -> Result<PathBuf, ExtractionError> {
        if key.is_empty() || key.contains(['/', '\\']) || key == "." || key == ".." {
            return Err(ExtractionError::StorageError(format!(
                "Key '{}' is not a valid file name",
                key
            )));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }
}

impl FeatureStore for JsonDirStore {
    fn put(&mut self, key: &str, features: &FeatureSequence) -> Result<(), ExtractionError> {
        let path = self.path_for(key)?;
        fs::write(&path, features.to_json()?)?;
        log::debug!(
            "Wrote {} feature vectors to {}",
            features.len(),
            path.display()
        );
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<FeatureSequence>, ExtractionError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(json) => FeatureSequence::from_json(&json).map(Some),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_features() -> FeatureSequence {
        FeatureSequence::from(vec![vec![1.0, -2.5, 0.125], vec![0.0, 3.0, -1.0]])
    }

    #[test]
    fn test_recording_key_format() {
        let key = RecordingKey::new("Budi", 31, "Laki-laki", 1);
        assert_eq!(key.recording_name(), "Budi_31_Laki-laki_phrase1");
        assert_eq!(key.to_string(), "Budi_31_Laki-laki_phrase1_mfcc");
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        let features = sample_features();

        store.put("a_mfcc", &features).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("a_mfcc").unwrap(), Some(features));
        assert_eq!(store.get("missing").unwrap(), None);
        assert_eq!(store.raw("a_mfcc"), Some("[[1.0,-2.5,0.125],[0.0,3.0,-1.0]]"));
    }

    #[test]
    fn test_memory_store_overwrites() {
        let mut store = MemoryStore::new();
        store.put("k", &sample_features()).unwrap();
        store.put("k", &FeatureSequence::default()).unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.get("k").unwrap().unwrap().is_empty());
    }

    #[test]
    fn test_json_dir_store_rejects_path_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonDirStore::open(dir.path()).unwrap();
        assert!(store.path_for("../escape").is_err());
        assert!(store.path_for("").is_err());
        assert!(store.path_for("ok_key").is_ok());
    }

    #[test]
    fn test_json_dir_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonDirStore::open(dir.path().join("features")).unwrap();

        assert_eq!(store.get("nobody_mfcc").unwrap(), None);
        store.put("nobody_mfcc", &sample_features()).unwrap();
        assert_eq!(store.get("nobody_mfcc").unwrap(), Some(sample_features()));
        assert!(dir.path().join("features").join("nobody_mfcc.json").exists());
    }
}
