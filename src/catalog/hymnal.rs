//! Curated hymnal directory import.
//!
//! Reads a directory of files named `#NUMBER - Title.txt`. File contents are
//! taken as lyrics and may carry `[chord]` markers like the built-in songs.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// `#510 - Jesus Shall Reign`, spacing around the dash optional.
#[allow(clippy::expect_used)]
static HYMN_FILE_STEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(\d+)\s*-\s*(.*\S)\s*$").expect("valid regex: HYMN_FILE_STEM")
});

/// A single hymn loaded from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HymnEntry {
    /// Hymn number in the hymnal.
    pub number: u32,
    /// Title taken from the file name.
    pub title: String,
    /// Lyric lines, chord markers included.
    pub content: Vec<String>,
}

/// Load every hymn file directly inside `dir`, sorted by number.
///
/// Files with other names or extensions are skipped, as are unreadable
/// files. When two files share a number the first one read wins.
pub fn load_dir(dir: &Path) -> Result<Vec<HymnEntry>> {
    if !dir.is_dir() {
        return Err(Error::config(
            format!("hymnal directory {} does not exist", dir.display()),
            "Set HYMNAL_PATH to a folder of `#NUMBER - Title.txt` files",
        ));
    }

    let mut entries: Vec<HymnEntry> = Vec::new();

    let walk = WalkDir::new(dir).min_depth(1).max_depth(1).into_iter().filter_map(|entry| {
        entry.map_err(|e| tracing::warn!("Skipping hymnal entry: {e}")).ok()
    });

    for entry in walk {
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().is_none_or(|e| e != "txt") {
            continue;
        }

        let Some((number, title)) = path.file_stem().and_then(|s| s.to_str()).and_then(split_stem) else {
            tracing::debug!("Skipping {}: not a hymnal filename", path.display());
            continue;
        };

        if entries.iter().any(|e| e.number == number) {
            tracing::warn!("Duplicate hymn number {number} at {}", path.display());
            continue;
        }

        match fs_err::read_to_string(path) {
            Ok(text) => entries.push(HymnEntry {
                number,
                title: title.to_string(),
                content: text.lines().map(String::from).collect(),
            }),
            Err(e) => tracing::warn!("{e}"),
        }
    }

    entries.sort_by_key(|e| e.number);
    tracing::info!("Loaded {} hymns from {}", entries.len(), dir.display());

    Ok(entries)
}

/// Split a file stem into hymn number and title.
fn split_stem(stem: &str) -> Option<(u32, &str)> {
    let caps = HYMN_FILE_STEM.captures(stem)?;
    let number = caps.get(1)?.as_str().parse().ok()?;
    Some((number, caps.get(2)?.as_str()))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_split_stem() {
        assert_eq!(split_stem("#510 - Jesus Shall Reign"), Some((510, "Jesus Shall Reign")));
        assert_eq!(split_stem("#3-Doxology"), Some((3, "Doxology")));
        assert_eq!(split_stem("#12 -  Be Thou My Vision  "), Some((12, "Be Thou My Vision")));
    }

    #[test]
    fn test_split_stem_rejects_other_names() {
        assert_eq!(split_stem("readme"), None);
        assert_eq!(split_stem("510 - Missing Hash"), None);
        assert_eq!(split_stem("#7 - "), None);
        assert_eq!(split_stem("#99999999999 - Too Big"), None);
    }

    #[test]
    fn test_load_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("#2 - Doxology.txt"), "[G]Praise God from whom\nall blessings flow").unwrap();
        std::fs::write(dir.path().join("#1 - Holy, Holy, Holy.txt"), "Holy, holy, holy").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not a hymn").unwrap();
        std::fs::write(dir.path().join("#3 - Wrong Extension.md"), "skip").unwrap();

        let entries = load_dir(dir.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].number, 1);
        assert_eq!(entries[0].title, "Holy, Holy, Holy");
        assert_eq!(entries[1].content, vec!["[G]Praise God from whom", "all blessings flow"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_load_dir_skips_odd_entries() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("#4 - Be Thou My Vision.txt"), "[D]Be Thou my vision").unwrap();
        std::fs::create_dir(dir.path().join("#5 - A Folder.txt")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("#6 - Dangling.txt")).unwrap();

        let entries = load_dir(dir.path()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Be Thou My Vision");
    }

    #[test]
    fn test_load_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_dir(&dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
