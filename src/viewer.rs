//! Lyrics viewer state.
//!
//! Holds the per-song view settings: transposition shift, chord visibility,
//! font size and scroll position. A fresh view is created every time a song
//! is opened, so none of this outlives the visit.

use crate::catalog::SongSheet;
use crate::chords::{first_chord, render_lyrics, strip_chords, transpose, ChordLine};
use crate::constants::viewer::{DEFAULT_FONT_SIZE, FONT_STEP, MAX_FONT_SIZE, MIN_FONT_SIZE};
use crate::types::SongId;

/// View settings for the song currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyricsView {
    /// Song being viewed.
    pub song_id: SongId,
    /// Semitones applied to every chord root.
    pub shift: i32,
    /// Whether chord rows are drawn.
    pub show_chords: bool,
    /// Nominal font size, 12 to 24 in steps of 2.
    pub font_size: u16,
    /// First visible row of the lyrics pane.
    pub scroll: u16,
}

impl LyricsView {
    /// Open a song with the default font size.
    pub const fn new(song_id: SongId) -> Self {
        Self::with_font_size(song_id, DEFAULT_FONT_SIZE)
    }

    /// Open a song with a configured starting font size.
    pub const fn with_font_size(song_id: SongId, font_size: u16) -> Self {
        Self {
            song_id,
            shift: 0,
            show_chords: true,
            font_size,
            scroll: 0,
        }
    }

    /// Raise every chord by a semitone.
    pub const fn transpose_up(&mut self) {
        self.shift = self.shift.saturating_add(1);
    }

    /// Lower every chord by a semitone.
    pub const fn transpose_down(&mut self) {
        self.shift = self.shift.saturating_sub(1);
    }

    /// Return to the written key.
    pub const fn reset_transpose(&mut self) {
        self.shift = 0;
    }

    /// Show or hide the chord rows.
    pub const fn toggle_chords(&mut self) {
        self.show_chords = !self.show_chords;
    }

    /// Step the font size up, stopping at the maximum.
    pub const fn increase_font(&mut self) {
        if self.font_size < MAX_FONT_SIZE {
            self.font_size += FONT_STEP;
        }
    }

    /// Step the font size down, stopping at the minimum.
    pub const fn decrease_font(&mut self) {
        if self.font_size > MIN_FONT_SIZE {
            self.font_size -= FONT_STEP;
        }
    }

    /// Blank rows inserted between lyric lines.
    ///
    /// A terminal cannot change its font, so larger sizes open the text up
    /// vertically instead: none below 18, one from 18, two at 24.
    pub const fn line_spacing(&self) -> u16 {
        self.font_size.saturating_sub(MIN_FONT_SIZE) / 6
    }

    /// Scroll by a signed number of rows, never above the top.
    pub fn scroll_by(&mut self, rows: i32) {
        let step = u16::try_from(rows.unsigned_abs()).unwrap_or(u16::MAX);
        if rows < 0 {
            self.scroll = self.scroll.saturating_sub(step);
        } else {
            self.scroll = self.scroll.saturating_add(step);
        }
    }

    /// Lay out the sheet's lyrics with the current shift and chord setting.
    pub fn render(&self, sheet: &SongSheet) -> Vec<ChordLine> {
        render_lyrics(&sheet.lyrics, self.shift, self.show_chords)
    }

    /// Shift display like `+2`, `-1` or `0`.
    pub fn shift_label(&self) -> String {
        if self.shift > 0 {
            format!("+{}", self.shift)
        } else {
            self.shift.to_string()
        }
    }

    /// The song's opening chord at the current shift, e.g. `Key: A`.
    pub fn key_label(&self, sheet: &SongSheet) -> Option<String> {
        first_chord(&sheet.lyrics).map(|chord| format!("Key: {}", transpose(&chord, self.shift)))
    }
}

/// Text handed to the clipboard when a song is shared.
///
/// Chord markers are removed so the message reads as plain lyrics.
pub fn share_message(sheet: &SongSheet) -> String {
    let lyrics: Vec<String> = sheet.lyrics.split('\n').map(strip_chords).collect();
    format!("{} by {}\n\n{}", sheet.title, sheet.artist, lyrics.join("\n"))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::catalog::Catalog;

    fn view() -> LyricsView {
        LyricsView::new(SongId::new("s11"))
    }

    #[test]
    fn test_transpose_controls() {
        let mut v = view();
        v.transpose_up();
        v.transpose_up();
        assert_eq!(v.shift, 2);
        assert_eq!(v.shift_label(), "+2");
        v.transpose_down();
        v.transpose_down();
        v.transpose_down();
        assert_eq!(v.shift_label(), "-1");
        v.reset_transpose();
        assert_eq!(v.shift, 0);
        assert_eq!(v.shift_label(), "0");
    }

    #[test]
    fn test_font_size_bounds() {
        let mut v = view();
        assert_eq!(v.font_size, 16);
        for _ in 0..10 {
            v.increase_font();
        }
        assert_eq!(v.font_size, 24);
        for _ in 0..10 {
            v.decrease_font();
        }
        assert_eq!(v.font_size, 12);
    }

    #[test]
    fn test_line_spacing() {
        let mut v = LyricsView::with_font_size(SongId::new("s1"), 12);
        assert_eq!(v.line_spacing(), 0);
        v.font_size = 16;
        assert_eq!(v.line_spacing(), 0);
        v.font_size = 18;
        assert_eq!(v.line_spacing(), 1);
        v.font_size = 24;
        assert_eq!(v.line_spacing(), 2);
    }

    #[test]
    fn test_scroll_stops_at_top() {
        let mut v = view();
        v.scroll_by(5);
        v.scroll_by(-2);
        assert_eq!(v.scroll, 3);
        v.scroll_by(-10);
        assert_eq!(v.scroll, 0);
    }

    #[test]
    fn test_large_scroll_saturates() {
        let mut v = view();
        v.scroll_by(70_000);
        assert_eq!(v.scroll, u16::MAX);
        v.scroll_by(i32::MIN);
        assert_eq!(v.scroll, 0);
    }

    #[test]
    fn test_key_label_follows_shift() {
        let sheet = Catalog::builtin().sheet(&SongId::new("s11"));
        let mut v = view();
        assert_eq!(v.key_label(&sheet).as_deref(), Some("Key: G"));
        v.transpose_up();
        v.transpose_up();
        assert_eq!(v.key_label(&sheet).as_deref(), Some("Key: A"));
    }

    #[test]
    fn test_flat_key_shows_sharp_spelling() {
        let sheet = Catalog::builtin().sheet(&SongId::new("s14"));
        let v = LyricsView::new(SongId::new("s14"));
        assert_eq!(v.key_label(&sheet).as_deref(), Some("Key: A#"));
    }

    #[test]
    fn test_render_hides_chords() {
        let sheet = Catalog::builtin().sheet(&SongId::new("s11"));
        let mut v = view();
        assert!(v.render(&sheet)[0].chords.is_some());
        v.toggle_chords();
        let lines = v.render(&sheet);
        assert!(lines.iter().all(|l| l.chords.is_none()));
        assert_eq!(lines[0].lyrics, "Amazing grace! How sweet the sound");
    }

    #[test]
    fn test_share_message_strips_markers() {
        let sheet = Catalog::builtin().sheet(&SongId::new("s11"));
        let message = share_message(&sheet);
        assert!(message.starts_with("Amazing Grace by John Newton\n\nAmazing grace! How sweet the sound\n"));
        assert!(!message.contains('['));
    }
}
