//! Application constants.
//!
//! Centralizes magic numbers and configuration values for better maintainability.

/// Lyrics viewer constants.
pub mod viewer {
    /// Font size a song opens with.
    pub const DEFAULT_FONT_SIZE: u16 = 16;

    /// Smallest font size reachable with the decrease control.
    pub const MIN_FONT_SIZE: u16 = 12;

    /// Largest font size reachable with the increase control.
    pub const MAX_FONT_SIZE: u16 = 24;

    /// Font size change per key press.
    pub const FONT_STEP: u16 = 2;

    /// Lines scrolled by Page Up / Page Down.
    pub const PAGE_SCROLL: u16 = 10;
}

/// Catalogue constants.
pub mod catalog {
    /// Artist id used for songs imported from a hymnal directory.
    pub const LOCAL_ARTIST_ID: &str = "local";

    /// Display name for songs imported from a hymnal directory.
    pub const LOCAL_ARTIST_NAME: &str = "Local Hymnal";

    /// Minimum fuzzy score for a title lookup to count as a match.
    pub const MIN_FUZZY_SCORE: i64 = 60;
}

/// Persistence constants.
pub mod storage {
    /// Directory name under the platform data directory.
    pub const APP_DIR: &str = "hymnbook";

    /// Preference file name inside the data directory.
    pub const PREFERENCES_FILE: &str = "preferences.json";

    /// Key of the single persisted preference.
    pub const SELECTED_REGION_KEY: &str = "selectedRegion";
}

/// Async task constants.
pub mod async_tasks {
    /// Channel buffer size for async task communication.
    pub const CHANNEL_BUFFER_SIZE: usize = 16;
}

/// UI layout constants.
pub mod ui {
    /// Height of the song header block.
    pub const HEADER_HEIGHT: u16 = 5;

    /// Height of the viewer control bar.
    pub const CONTROLS_HEIGHT: u16 = 3;
}
