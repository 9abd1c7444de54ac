//! The persisted preference.
//!
//! Only one value survives a restart: the region picked last on the region
//! screen (or the A-Z choice). It is stored as JSON under the
//! `selectedRegion` key in `<data_dir>/hymnbook/preferences.json`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::RegionId;

/// What the user last picked on the region screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RegionSelection {
    /// A specific region.
    Region {
        /// Region identifier.
        #[serde(rename = "regionId")]
        region_id: RegionId,
        /// Region name at the time it was picked.
        #[serde(rename = "regionName")]
        region_name: String,
    },
    /// The alphabetical list of all artists.
    Alphabetical {
        /// Always `true` when written by this application.
        alphabetical: bool,
    },
}

impl RegionSelection {
    /// Selection for one region.
    pub fn region(id: RegionId, name: impl Into<String>) -> Self {
        Self::Region {
            region_id: id,
            region_name: name.into(),
        }
    }

    /// Selection for the A-Z list.
    pub const fn alphabetical() -> Self {
        Self::Alphabetical { alphabetical: true }
    }
}

/// On-disk layout of the preference file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PreferenceFile {
    #[serde(rename = "selectedRegion", default, skip_serializing_if = "Option::is_none")]
    selected_region: Option<RegionSelection>,
}

/// Key-value preference store backed by a JSON file.
#[derive(Debug, Default)]
pub struct PreferenceStore {
    path: Option<PathBuf>,
    values: PreferenceFile,
}

impl PreferenceStore {
    /// Open the store at `path`, reading any existing file.
    ///
    /// A missing or unreadable file yields an empty store; with no path the
    /// store lives in memory only.
    pub fn open(path: Option<PathBuf>) -> Self {
        let values = path
            .as_deref()
            .and_then(|p| match load(p) {
                Ok(values) => values,
                Err(e) => {
                    tracing::warn!("Ignoring preference file: {e}");
                    None
                }
            })
            .unwrap_or_default();

        Self { path, values }
    }

    /// A store that never touches disk.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// The last region selection, if one was saved.
    pub const fn get_selected_region(&self) -> Option<&RegionSelection> {
        self.values.selected_region.as_ref()
    }

    /// Remember a region selection and write it through to disk.
    ///
    /// The in-memory value is updated even when the write fails.
    pub fn set_selected_region(&mut self, selection: RegionSelection) -> Result<()> {
        self.values.selected_region = Some(selection);
        self.save()
    }

    fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs_err::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&self.values)
            .map_err(|e| Error::Preferences(format!("Failed to serialize preferences: {e}")))?;
        fs_err::write(path, json)?;
        tracing::debug!("Saved preferences to {}", path.display());
        Ok(())
    }
}

fn load(path: &Path) -> Result<Option<PreferenceFile>> {
    if !path.exists() {
        return Ok(None);
    }
    let data = fs_err::read_to_string(path)?;
    let values = serde_json::from_str(&data)
        .map_err(|e| Error::parse(e.to_string(), Some(path.to_path_buf())))?;
    Ok(Some(values))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::constants::storage::SELECTED_REGION_KEY;

    #[test]
    fn test_round_trip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");

        let mut store = PreferenceStore::open(Some(path.clone()));
        assert!(store.get_selected_region().is_none());

        let selection = RegionSelection::region(RegionId::new("3"), "Europe");
        store.set_selected_region(selection.clone()).unwrap();

        let reopened = PreferenceStore::open(Some(path));
        assert_eq!(reopened.get_selected_region(), Some(&selection));
    }

    #[test]
    fn test_json_layout() {
        let file = PreferenceFile {
            selected_region: Some(RegionSelection::region(RegionId::new("1"), "North America")),
        };
        let json = serde_json::to_value(&file).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"selectedRegion": {"regionId": "1", "regionName": "North America"}})
        );

        let file = PreferenceFile {
            selected_region: Some(RegionSelection::alphabetical()),
        };
        let json = serde_json::to_value(&file).unwrap();
        assert_eq!(json[SELECTED_REGION_KEY], serde_json::json!({"alphabetical": true}));
    }

    #[test]
    fn test_corrupt_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = PreferenceStore::open(Some(path));
        assert!(store.get_selected_region().is_none());
    }

    #[test]
    fn test_failed_write_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs-dir");
        std::fs::create_dir(&path).unwrap();

        let mut store = PreferenceStore::open(Some(path));
        let err = store.set_selected_region(RegionSelection::alphabetical()).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("prefs-dir"), "{err}");
        assert_eq!(store.get_selected_region(), Some(&RegionSelection::alphabetical()));
    }

    #[test]
    fn test_in_memory_store_accepts_writes() {
        let mut store = PreferenceStore::in_memory();
        store.set_selected_region(RegionSelection::alphabetical()).unwrap();
        assert_eq!(store.get_selected_region(), Some(&RegionSelection::alphabetical()));
    }
}
