//! Property checks for chord tokenizing and transposition.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use hymnbook::chords::{layout_line, strip_chords, tokenize, transpose, PitchClass, Segment};
use regex::Regex;

const CHORDS: &[&str] = &[
    "C", "C#", "Db", "D", "Eb", "E", "F", "F#", "Gb", "G", "Ab", "A", "Bb", "B", "Am", "C#m7", "Ebmaj7",
    "Gsus4", "D/F#", "Bbm7b5", "Cb", "E#", "B#9", "Fbadd9",
];

const LINES: &[&str] = &[
    "",
    "no chords here",
    "[C]Amazing [G]grace",
    "A[G]mazing [G7]grace! How [C]sweet the [G]sound",
    "[C][G]word",
    "[C",
    "text [] more",
    "[[]",
    "]stray[D]close",
    "end[A]",
    "[Bbm7]Wenn ich [F/A]einst von hinnen [Gm]scheide",
    "日本[C]語の[G]歌",
];

fn joined_text(line: &str) -> String {
    tokenize(line).into_iter().map(|s| s.text).collect()
}

#[test]
fn text_round_trips_through_segments() {
    let marker = Regex::new(r"\[[^\]]+\]").unwrap();
    for line in LINES {
        let expected = marker.replace_all(line, "").into_owned();
        assert_eq!(joined_text(line), expected, "{line:?}");
        assert_eq!(strip_chords(line), expected, "{line:?}");
    }
    assert_eq!(strip_chords("[C]Amazing [G]grace"), "Amazing grace");
    assert_eq!(strip_chords("[C"), "[C");
    assert_eq!(strip_chords("text [] more"), "text [] more");
}

#[test]
fn line_without_markers_is_one_plain_segment() {
    for line in ["", "plain words", "just ] a bracket", "open [ only", "[]"] {
        assert_eq!(tokenize(line), vec![Segment::plain(line)], "{line:?}");
    }
}

#[test]
fn tokenizer_examples() {
    assert_eq!(
        tokenize("[C]Amazing [G]grace"),
        vec![Segment::chord("C", "Amazing "), Segment::chord("G", "grace")]
    );
    assert_eq!(
        tokenize("[C][G]word"),
        vec![Segment::chord("C", ""), Segment::chord("G", "word")]
    );
}

#[test]
fn transposition_is_additive() {
    for chord in CHORDS {
        for s1 in -25..=25 {
            for s2 in -25..=25 {
                assert_eq!(
                    transpose(&transpose(chord, s1), s2),
                    transpose(chord, s1 + s2),
                    "{chord} by {s1} then {s2}"
                );
            }
        }
    }
}

#[test]
fn transposition_has_period_twelve() {
    for chord in CHORDS {
        for k in -3..=3 {
            assert_eq!(transpose(chord, 12 * k), transpose(chord, 0), "{chord} by {}", 12 * k);
        }
        assert_eq!(transpose(chord, 12 * 1000 + 5), transpose(chord, 5));
    }
}

#[test]
fn unparseable_labels_are_opaque() {
    for label in ["N.C.", "x", "", "hm", "%", "c", "H7", "1"] {
        for shift in [-13, -1, 0, 1, 7, i32::MAX, i32::MIN] {
            assert_eq!(transpose(label, shift), label, "{label:?} by {shift}");
        }
    }
}

#[test]
fn flats_normalize_to_sharps() {
    assert_eq!(transpose("Bb", 0), "A#");
    assert_eq!(transpose("Bbm7", 2), "Cm7");
    assert_eq!(transpose("Db", 0), "C#");
    assert_eq!(transpose("Eb", 0), "D#");
    assert_eq!(transpose("Gb", 0), "F#");
    assert_eq!(transpose("Ab", 0), "G#");
}

#[test]
fn transposition_wraps_downwards() {
    assert_eq!(transpose("C", -1), "B");
    assert_eq!(transpose("C", -13), "B");
    assert_eq!(transpose("C", i32::MIN), transpose("C", i32::MIN.rem_euclid(12)));
}

#[test]
fn zero_shift_gives_canonical_root() {
    for chord in CHORDS {
        let out = transpose(chord, 0);
        assert!(
            PitchClass::ALL.iter().any(|p| out.starts_with(p.name())),
            "{chord} -> {out}"
        );
    }
}

#[test]
fn layout_puts_chords_over_their_text() {
    for line in LINES {
        let laid_out = layout_line(line, 3);
        let segments = tokenize(line);
        let Some(chords) = laid_out.chords else {
            assert!(segments.iter().all(|s| s.chord.is_none()), "{line:?}");
            continue;
        };
        // Every transposed chord appears in order on the chord row
        let mut rest = chords.as_str();
        for segment in segments.iter().filter(|s| s.chord.is_some()) {
            let expected = transpose(segment.chord.as_deref().unwrap(), 3);
            let at = rest.find(&expected).unwrap_or_else(|| panic!("{expected} missing in {chords:?}"));
            rest = &rest[at + expected.len()..];
        }
    }
}
