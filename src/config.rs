//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use crate::constants::{storage, viewer};
use crate::error::Result;

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Directory of curated `#NUMBER - Title.txt` hymns to add to the catalogue
    pub hymnal_path: Option<PathBuf>,
    /// Where the preference file lives
    pub data_dir: Option<PathBuf>,
    /// Font size the lyrics viewer opens with
    pub font_size: u16,
    /// Log file path; logging is off when unset
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }

    /// Full path of the preference file, if a data directory is known.
    #[must_use]
    pub fn preferences_path(&self) -> Option<PathBuf> {
        self.data_dir.as_ref().map(|d| d.join(storage::PREFERENCES_FILE))
    }

    /// Use `path` as the curated hymnal directory.
    #[must_use]
    pub fn with_hymnal_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.hymnal_path = Some(path.into());
        self
    }

    /// Open songs at `size`, clamped to the viewer's range.
    #[must_use]
    pub fn with_font_size(mut self, size: u16) -> Self {
        self.font_size = clamp_font_size(size);
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            hymnal_path: None,
            data_dir: dirs::data_dir().map(|d| d.join(storage::APP_DIR)),
            font_size: viewer::DEFAULT_FONT_SIZE,
            log_file: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    #[allow(clippy::unnecessary_wraps)] // Returns Result for forward-compatible API
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::default();

        // Hymnal path: only kept if it points at a real directory
        config.hymnal_path = env::var("HYMNAL_PATH").ok().and_then(|path| {
            let p = expand(&path);
            if p.is_dir() {
                Some(p)
            } else {
                tracing::warn!("HYMNAL_PATH {} is not a directory, ignoring", p.display());
                None
            }
        });

        if let Ok(dir) = env::var("HYMNBOOK_DATA_DIR") {
            config.data_dir = Some(expand(&dir));
        }

        if let Ok(size) = env::var("HYMNBOOK_FONT_SIZE") {
            if let Ok(size) = size.trim().parse::<u16>() {
                config.font_size = clamp_font_size(size);
            }
        }

        config.log_file = env::var("HYMNBOOK_LOG").ok().map(|p| expand(&p));

        Ok(config)
    }
}

fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).to_string())
}

/// Clamp to the viewer's range and round down onto its step grid.
fn clamp_font_size(size: u16) -> u16 {
    let clamped = size.clamp(viewer::MIN_FONT_SIZE, viewer::MAX_FONT_SIZE);
    clamped - (clamped - viewer::MIN_FONT_SIZE) % viewer::FONT_STEP
}
