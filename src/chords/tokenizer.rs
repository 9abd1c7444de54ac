//! Line tokenizer for `[chord]` markers.
//!
//! A marker is `[`, at least one character other than `]`, then `]`. The
//! text following a marker runs up to the next `[` or the end of the line.
//! Anything the scanner cannot read as a marker stays literal text in a
//! chordless segment, so the concatenated segment text is always the line
//! with its markers removed.

use serde::Serialize;

/// One run of lyric text, optionally introduced by a chord marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// Chord label exactly as written between the brackets, untransposed.
    pub chord: Option<String>,
    /// Lyric text following the marker. May be empty.
    pub text: String,
}

impl Segment {
    /// A segment introduced by a chord marker.
    pub fn chord(chord: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            chord: Some(chord.into()),
            text: text.into(),
        }
    }

    /// A run of text with no chord above it.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            chord: None,
            text: text.into(),
        }
    }
}

/// Split one lyric line into ordered segments.
///
/// Runs in a single left-to-right pass. Unterminated markers (`[G` with no
/// closing bracket) and empty ones (`[]`) are kept as literal text.
pub fn tokenize(line: &str) -> Vec<Segment> {
    let last_close = line.rfind(']');
    // Only the byte after `[` and the existence of a later `]` matter: if the
    // next byte is not `]`, the first `]` after it closes a non-empty marker.
    let opens_marker = |at: usize| -> bool {
        line.as_bytes().get(at + 1).is_some_and(|&b| b != b']')
            && last_close.is_some_and(|close| close > at + 1)
    };

    let mut segments = Vec::new();
    let mut pos = 0;

    while pos < line.len() {
        if line[pos..].starts_with('[') && opens_marker(pos) {
            let Some(close) = line[pos + 1..].find(']').map(|i| pos + 1 + i) else {
                break;
            };
            let text_end = line[close + 1..]
                .find('[')
                .map_or(line.len(), |i| close + 1 + i);

            segments.push(Segment::chord(&line[pos + 1..close], &line[close + 1..text_end]));
            pos = text_end;
        } else {
            let gap_end = next_marker_start(line, pos, &opens_marker);
            segments.push(Segment::plain(&line[pos..gap_end]));
            pos = gap_end;
        }
    }

    if segments.is_empty() {
        segments.push(Segment::plain(""));
    }

    segments
}

/// Byte offset of the first `[` at or after `from` that opens a real marker,
/// skipping a `[` sitting exactly at `from`.
fn next_marker_start(line: &str, from: usize, opens_marker: &impl Fn(usize) -> bool) -> usize {
    let mut search = if line[from..].starts_with('[') { from + 1 } else { from };

    while let Some(rel) = line[search..].find('[') {
        let at = search + rel;
        if opens_marker(at) {
            return at;
        }
        search = at + 1;
    }

    line.len()
}

/// The line with every chord marker removed.
pub fn strip_chords(line: &str) -> String {
    tokenize(line).into_iter().map(|segment| segment.text).collect()
}

/// The first chord label in a block of lyrics, if any line carries one.
pub fn first_chord(lyrics: &str) -> Option<String> {
    lyrics
        .lines()
        .flat_map(tokenize)
        .find_map(|segment| segment.chord)
}
