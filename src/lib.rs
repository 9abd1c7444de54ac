//! `Hymnbook` - a terminal hymn catalogue with chord transposition.
//!
//! Browse hymns by region and artist, keep favorites, and read lyric sheets
//! with chords drawn above the words. Chords can be transposed in semitone
//! steps; the logic for that lives in [`chords`] and has no UI dependencies.

pub mod app;
pub mod catalog;
pub mod chords;
pub mod config;
pub mod constants;
pub mod error;
pub mod favorites;
pub mod input;
pub mod preferences;
pub mod types;
pub mod ui;
pub mod viewer;
