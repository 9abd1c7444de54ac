//! Chord roots, pitch classes and semitone transposition.
//!
//! Roots are read as a letter `A`-`G` with an optional single `#` or `b`.
//! Everything after the root is the suffix and is carried through untouched,
//! so `Bbm7`, `Gsus4` and `Dmaj7/F#` all keep their quality text verbatim.
//! Output roots are always spelled with sharps.

use std::fmt;

use serde::Serialize;

/// One of the 12 equal-tempered pitch classes, spelled with sharps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum PitchClass {
    /// C
    C,
    /// C#
    CSharp,
    /// D
    D,
    /// D#
    DSharp,
    /// E
    E,
    /// F
    F,
    /// F#
    FSharp,
    /// G
    G,
    /// G#
    GSharp,
    /// A
    A,
    /// A#
    ASharp,
    /// B
    B,
}

impl PitchClass {
    /// All pitch classes in chromatic order starting at C.
    pub const ALL: [Self; 12] = [
        Self::C,
        Self::CSharp,
        Self::D,
        Self::DSharp,
        Self::E,
        Self::F,
        Self::FSharp,
        Self::G,
        Self::GSharp,
        Self::A,
        Self::ASharp,
        Self::B,
    ];

    /// Semitones above C (0 to 11).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Pitch class at a chromatic index, wrapping past 11.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % 12]
    }

    /// Canonical sharp spelling.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::C => "C",
            Self::CSharp => "C#",
            Self::D => "D",
            Self::DSharp => "D#",
            Self::E => "E",
            Self::F => "F",
            Self::FSharp => "F#",
            Self::G => "G",
            Self::GSharp => "G#",
            Self::A => "A",
            Self::ASharp => "A#",
            Self::B => "B",
        }
    }

    /// Move by a signed number of semitones. Any `i32` is accepted.
    #[must_use]
    pub fn shifted(self, semitones: i32) -> Self {
        // Reduce before adding so extreme shifts cannot overflow
        let step = usize::try_from(semitones.rem_euclid(12)).unwrap_or(0);
        Self::from_index(self.index() + step)
    }

    /// Read a root spelling from the start of `text`.
    ///
    /// Returns the pitch class and the number of bytes the root occupies.
    /// Flat spellings resolve to their sharp equivalent (`Bb` is `A#`).
    pub fn parse_root(text: &str) -> Option<(Self, usize)> {
        let mut chars = text.chars();
        let natural: i32 = match chars.next()? {
            'C' => 0,
            'D' => 2,
            'E' => 4,
            'F' => 5,
            'G' => 7,
            'A' => 9,
            'B' => 11,
            _ => return None,
        };

        let (accidental, len) = match chars.next() {
            Some('#') => (1, 2),
            Some('b') => (-1, 2),
            _ => (0, 1),
        };

        let class = Self::C.shifted(natural + accidental);
        Some((class, len))
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A chord symbol split into a root and an opaque suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chord {
    /// Root pitch class.
    pub root: PitchClass,
    /// Quality text after the root (`m`, `7`, `sus4`, `maj7/E`...), verbatim.
    pub suffix: String,
}

impl Chord {
    /// Parse a chord label. Returns `None` for labels that do not start
    /// with a note letter, such as `N.C.` or an empty string.
    pub fn parse(text: &str) -> Option<Self> {
        let (root, len) = PitchClass::parse_root(text)?;
        Some(Self {
            root,
            suffix: text[len..].to_string(),
        })
    }

    /// The same chord moved by `semitones`, suffix unchanged.
    #[must_use]
    pub fn transposed(&self, semitones: i32) -> Self {
        Self {
            root: self.root.shifted(semitones),
            suffix: self.suffix.clone(),
        }
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root, self.suffix)
    }
}

/// Transpose a chord label by `shift` semitones.
///
/// Labels that are not a root plus suffix come back unchanged. A flat root
/// comes back sharp even with a shift of zero: `transpose("Bb", 0)` is `"A#"`.
pub fn transpose(chord_text: &str, shift: i32) -> String {
    Chord::parse(chord_text).map_or_else(
        || chord_text.to_string(),
        |chord| chord.transposed(shift).to_string(),
    )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_transpose_up_and_down() {
        assert_eq!(transpose("C", 2), "D");
        assert_eq!(transpose("G", 5), "C");
        assert_eq!(transpose("A", 3), "C");
        assert_eq!(transpose("D", -2), "C");
    }

    #[test]
    fn test_negative_shift_wraps() {
        assert_eq!(transpose("C", -1), "B");
        assert_eq!(transpose("C", -13), "B");
        assert_eq!(transpose("C", -25), "B");
    }

    #[test]
    fn test_large_shifts() {
        assert_eq!(transpose("E", 12), "E");
        assert_eq!(transpose("E", 13), "F");
        assert_eq!(transpose("E", i32::MAX), transpose("E", i32::MAX.rem_euclid(12)));
        assert_eq!(transpose("E", i32::MIN), transpose("E", i32::MIN.rem_euclid(12)));
    }

    #[test]
    fn test_suffix_preserved() {
        assert_eq!(transpose("Am", 2), "Bm");
        assert_eq!(transpose("G7", 1), "G#7");
        assert_eq!(transpose("Dsus4", -2), "Csus4");
        assert_eq!(transpose("Cmaj7/E", 2), "Dmaj7/E");
        assert_eq!(transpose("Em7b5", 0), "Em7b5");
    }

    #[test]
    fn test_flat_roots_normalize_to_sharps() {
        assert_eq!(transpose("Bb", 0), "A#");
        assert_eq!(transpose("Db", 0), "C#");
        assert_eq!(transpose("Eb", 0), "D#");
        assert_eq!(transpose("Gb", 0), "F#");
        assert_eq!(transpose("Ab", 0), "G#");
        assert_eq!(transpose("Bbm7", 2), "Cm7");
        assert_eq!(transpose("Eb", 1), "E");
    }

    #[test]
    fn test_unusual_accidentals() {
        assert_eq!(transpose("Cb", 0), "B");
        assert_eq!(transpose("Fb", 0), "E");
        assert_eq!(transpose("E#", 0), "F");
        assert_eq!(transpose("B#", 0), "C");
    }

    #[test]
    fn test_opaque_labels_pass_through() {
        assert_eq!(transpose("N.C.", 3), "N.C.");
        assert_eq!(transpose("", 3), "");
        assert_eq!(transpose("am", 3), "am");
        assert_eq!(transpose("H7", -4), "H7");
        assert_eq!(transpose("%", 1), "%");
    }

    #[test]
    fn test_parse_root_lengths() {
        assert_eq!(PitchClass::parse_root("F#m"), Some((PitchClass::FSharp, 2)));
        assert_eq!(PitchClass::parse_root("Bbsus2"), Some((PitchClass::ASharp, 2)));
        assert_eq!(PitchClass::parse_root("Cm"), Some((PitchClass::C, 1)));
        assert_eq!(PitchClass::parse_root("x"), None);
    }

    #[test]
    fn test_chord_parse_and_display() {
        let chord = Chord::parse("Gb7").unwrap();
        assert_eq!(chord.root, PitchClass::FSharp);
        assert_eq!(chord.suffix, "7");
        assert_eq!(chord.to_string(), "F#7");
        assert!(Chord::parse("N.C.").is_none());
    }

    #[test]
    fn test_pitch_class_index_round_trip() {
        for (i, pc) in PitchClass::ALL.iter().enumerate() {
            assert_eq!(pc.index(), i);
            assert_eq!(PitchClass::from_index(i), *pc);
        }
    }
}
