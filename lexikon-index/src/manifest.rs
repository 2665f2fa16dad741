//! Generation manifest.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{IndexError, Result};
use crate::serialize::MANIFEST_FILE;
use crate::FORMAT_VERSION;

/// Metadata naming one complete index generation.
///
/// The manifest is written last during writer close, so a directory holding
/// one is a complete generation and a directory without one is debris from an
/// interrupted rebuild.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexManifest {
    /// On-disk format version of the generation's files.
    pub format_version: u32,
    /// Generation number; the successor rebuild writes this plus one.
    pub generation: u64,
    /// Number of records in the generation.
    pub records: u64,
    /// Language codes that had dedicated analysis routing.
    pub languages: Vec<String>,
    /// Analysis behavior tag the generation was written with.
    pub analyzer_version: String,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

impl IndexManifest {
    /// Load the manifest of a generation directory.
    pub fn load(dir: &Path) -> Result<Self> {
        let bytes = std::fs::read(dir.join(MANIFEST_FILE))
            .map_err(|e| IndexError::StorageRead(e.to_string()))?;
        let manifest: IndexManifest = serde_json::from_slice(&bytes)?;
        if manifest.format_version != FORMAT_VERSION {
            return Err(IndexError::InvalidFormat(format!(
                "unsupported index format version {} (expected {})",
                manifest.format_version, FORMAT_VERSION
            )));
        }
        Ok(manifest)
    }

    /// Write the manifest into a generation directory.
    pub fn save(&self, dir: &Path) -> Result<()> {
        let json = serde_json::to_vec_pretty(self)?;
        std::fs::write(dir.join(MANIFEST_FILE), json)
            .map_err(|e| IndexError::StorageWrite(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_manifest() -> IndexManifest {
        IndexManifest {
            format_version: FORMAT_VERSION,
            generation: 3,
            records: 42,
            languages: vec!["en".to_string(), "fr".to_string()],
            analyzer_version: lexikon_analysis::ANALYZER_VERSION.to_string(),
            created_at: "2024-05-01T12:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = sample_manifest();
        manifest.save(dir.path()).unwrap();
        let loaded = IndexManifest::load(dir.path()).unwrap();
        assert_eq!(loaded, manifest);
    }

    #[test]
    fn test_load_missing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let err = IndexManifest::load(dir.path()).unwrap_err();
        assert!(matches!(err, IndexError::StorageRead(_)));
    }

    #[test]
    fn test_load_rejects_unknown_format_version() {
        let dir = tempfile::tempdir().unwrap();
        let mut manifest = sample_manifest();
        manifest.format_version = 999;
        let json = serde_json::to_vec_pretty(&manifest).unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILE), json).unwrap();
        let err = IndexManifest::load(dir.path()).unwrap_err();
        assert!(matches!(err, IndexError::InvalidFormat(_)));
    }
}
