//! Inline chord annotations for lyric text.
//!
//! Lyrics carry chords as bracketed markers placed directly before the
//! syllable they belong to:
//!
//! ```text
//! A[G]mazing [G7]grace! How [C]sweet the [G]sound
//! ```
//!
//! ## Sub-modules
//! - `tokenizer` - splits a line into `(chord, text)` segments
//! - `transpose` - pitch classes and semitone transposition of chord roots
//! - `layout` - chord-over-lyric rendering for the viewer
//!
//! The tokenizer and the transposer know nothing about each other. Both are
//! pure and total: malformed input degrades to plain text, never to an error.
//!
//! ## Example
//! ```rust
//! use hymnbook::chords::{tokenize, transpose, Segment};
//!
//! let segments = tokenize("[C]Amazing [G]grace");
//! assert_eq!(segments, vec![
//!     Segment::chord("C", "Amazing "),
//!     Segment::chord("G", "grace"),
//! ]);
//!
//! assert_eq!(transpose("Bbm7", 2), "Cm7");
//! assert_eq!(transpose("N.C.", 5), "N.C.");
//! ```

mod layout;
mod tokenizer;
mod transpose;

pub use layout::{layout_line, render_lyrics, ChordLine};
pub use tokenizer::{first_chord, strip_chords, tokenize, Segment};
pub use transpose::{transpose, Chord, PitchClass};
