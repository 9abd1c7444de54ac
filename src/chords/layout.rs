//! Chord-over-lyric layout.
//!
//! Each annotated line becomes two rows: chords on top, lyrics below, with
//! every chord starting at the display column of the text it introduces.

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use super::tokenizer::{strip_chords, tokenize};
use super::transpose::transpose;

/// A lyric line ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChordLine {
    /// Chord row, or `None` when the line carries no chords.
    pub chords: Option<String>,
    /// Lyric row with markers removed.
    pub lyrics: String,
}

impl ChordLine {
    /// A line without a chord row.
    pub fn plain(lyrics: impl Into<String>) -> Self {
        Self {
            chords: None,
            lyrics: lyrics.into(),
        }
    }
}

/// Lay out one marked-up line with every chord moved by `shift` semitones.
///
/// When a chord is wider than the text under it, the lyric row is padded so
/// the next chord keeps at least one column of space.
pub fn layout_line(line: &str, shift: i32) -> ChordLine {
    let mut chords = String::new();
    let mut lyrics = String::new();
    let mut has_chords = false;

    for segment in tokenize(line) {
        if let Some(label) = segment.chord {
            let chords_width = chords.width();
            if chords_width > 0 {
                pad_to(&mut lyrics, chords_width + 1);
            }
            pad_to(&mut chords, lyrics.width());
            chords.push_str(&transpose(&label, shift));
            has_chords = true;
        }
        lyrics.push_str(&segment.text);
    }

    ChordLine {
        chords: has_chords.then_some(chords),
        lyrics,
    }
}

/// Lay out a whole lyric block, one entry per `\n`-separated line.
///
/// With `show_chords` off the markers are dropped and no chord rows are
/// produced.
pub fn render_lyrics(lyrics: &str, shift: i32, show_chords: bool) -> Vec<ChordLine> {
    lyrics
        .split('\n')
        .map(|line| {
            if show_chords {
                layout_line(line, shift)
            } else {
                ChordLine::plain(strip_chords(line))
            }
        })
        .collect()
}

fn pad_to(row: &mut String, width: usize) {
    let current = row.width();
    if current < width {
        row.push_str(&" ".repeat(width - current));
    }
}
