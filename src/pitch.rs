// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch-class primitives.
//!
//! Provides the 12-tone `Note` type, interval arithmetic, named interval
//! constants, and the circle of fifths.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Semitone offset type
pub type Semitones = i8;

/// Named interval constants in semitones.
///
/// Enharmonic qualities that share a semitone count are aliased
/// (`AUGMENTED_FOURTH == DIMINISHED_FIFTH`).
pub mod interval {
    use super::Semitones;

    pub const PERFECT_UNISON: Semitones = 0;
    pub const MINOR_SECOND: Semitones = 1;
    pub const MAJOR_SECOND: Semitones = 2;
    pub const AUGMENTED_SECOND: Semitones = 3;
    pub const MINOR_THIRD: Semitones = 3;
    pub const MAJOR_THIRD: Semitones = 4;
    pub const DIMINISHED_FOURTH: Semitones = 4;
    pub const PERFECT_FOURTH: Semitones = 5;
    pub const AUGMENTED_FOURTH: Semitones = 6;
    pub const DIMINISHED_FIFTH: Semitones = 6;
    pub const PERFECT_FIFTH: Semitones = 7;
    pub const AUGMENTED_FIFTH: Semitones = 8;
    pub const MINOR_SIXTH: Semitones = 8;
    pub const MAJOR_SIXTH: Semitones = 9;
    pub const DIMINISHED_SEVENTH: Semitones = 9;
    pub const MINOR_SEVENTH: Semitones = 10;
    pub const MAJOR_SEVENTH: Semitones = 11;
    pub const PERFECT_OCTAVE: Semitones = 12;
}

/// Note names (pitch classes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Note {
    C,
    Cs, // C# / Db
    D,
    Ds, // D# / Eb
    E,
    F,
    Fs, // F# / Gb
    G,
    Gs, // G# / Ab
    A,
    As, // A# / Bb
    B,
}

impl Note {
    /// All notes in chromatic order
    pub const ALL: [Note; 12] = [
        Note::C,
        Note::Cs,
        Note::D,
        Note::Ds,
        Note::E,
        Note::F,
        Note::Fs,
        Note::G,
        Note::Gs,
        Note::A,
        Note::As,
        Note::B,
    ];

    /// Get the pitch class (0-11) for this note
    pub fn pitch_class(self) -> u8 {
        match self {
            Note::C => 0,
            Note::Cs => 1,
            Note::D => 2,
            Note::Ds => 3,
            Note::E => 4,
            Note::F => 5,
            Note::Fs => 6,
            Note::G => 7,
            Note::Gs => 8,
            Note::A => 9,
            Note::As => 10,
            Note::B => 11,
        }
    }

    /// Get note from pitch class
    pub fn from_pitch_class(pc: u8) -> Self {
        Note::ALL[(pc % 12) as usize]
    }

    /// Parse note from string (e.g., "C", "C#", "Db", "F#")
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim().to_uppercase();
        match s.as_str() {
            "C" => Some(Note::C),
            "C#" | "CS" | "DB" => Some(Note::Cs),
            "D" => Some(Note::D),
            "D#" | "DS" | "EB" => Some(Note::Ds),
            "E" | "FB" => Some(Note::E),
            "F" | "E#" | "ES" => Some(Note::F),
            "F#" | "FS" | "GB" => Some(Note::Fs),
            "G" => Some(Note::G),
            "G#" | "GS" | "AB" => Some(Note::Gs),
            "A" => Some(Note::A),
            "A#" | "AS" | "BB" => Some(Note::As),
            "B" | "CB" => Some(Note::B),
            _ => None,
        }
    }

    /// Transpose by semitones (any signed amount, including past the octave)
    pub fn transpose(self, semitones: Semitones) -> Self {
        let new_pc = (self.pitch_class() as i16 + semitones as i16).rem_euclid(12) as u8;
        Note::from_pitch_class(new_pc)
    }

    /// Get interval in semitones to another note (shortest ascending, 0-11)
    pub fn interval_to(self, other: Note) -> u8 {
        (other.pitch_class() as i16 - self.pitch_class() as i16).rem_euclid(12) as u8
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Note::C => write!(f, "C"),
            Note::Cs => write!(f, "C#"),
            Note::D => write!(f, "D"),
            Note::Ds => write!(f, "D#"),
            Note::E => write!(f, "E"),
            Note::F => write!(f, "F"),
            Note::Fs => write!(f, "F#"),
            Note::G => write!(f, "G"),
            Note::Gs => write!(f, "G#"),
            Note::A => write!(f, "A"),
            Note::As => write!(f, "A#"),
            Note::B => write!(f, "B"),
        }
    }
}

/// The circle of fifths starting from C.
///
/// Index 0 carries no accidentals; each step clockwise adds a perfect fifth.
/// Used as a lookup table between circle position and pitch class.
pub const CIRCLE_OF_FIFTHS: [Note; 12] = [
    Note::C,
    Note::G,
    Note::D,
    Note::A,
    Note::E,
    Note::B,
    Note::Fs,
    Note::Cs,
    Note::Gs,
    Note::Ds,
    Note::As,
    Note::F,
];

/// Position of a note on the circle of fifths (0-11).
///
/// The circle covers all 12 pitch classes, so a miss would mean the table
/// itself is broken; that is a fatal invariant violation, not an `Err`.
pub fn fifths_index(note: Note) -> usize {
    CIRCLE_OF_FIFTHS
        .iter()
        .position(|&n| n == note)
        .expect("every pitch class appears on the circle of fifths")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_pitch_class() {
        assert_eq!(Note::C.pitch_class(), 0);
        assert_eq!(Note::A.pitch_class(), 9);
        assert_eq!(Note::B.pitch_class(), 11);
    }

    #[test]
    fn test_note_from_str() {
        assert_eq!(Note::from_str("C"), Some(Note::C));
        assert_eq!(Note::from_str("C#"), Some(Note::Cs));
        assert_eq!(Note::from_str("Db"), Some(Note::Cs));
        assert_eq!(Note::from_str("Bb"), Some(Note::As));
        assert_eq!(Note::from_str("X"), None);
    }

    #[test]
    fn test_note_transpose() {
        assert_eq!(Note::C.transpose(2), Note::D);
        assert_eq!(Note::C.transpose(12), Note::C);
        assert_eq!(Note::C.transpose(-1), Note::B);
        assert_eq!(Note::C.transpose(-24), Note::C);
        assert_eq!(Note::G.transpose(5), Note::C);
        assert_eq!(Note::B.transpose(25), Note::C);
    }

    #[test]
    fn test_note_interval() {
        assert_eq!(Note::C.interval_to(Note::G), 7);
        assert_eq!(Note::C.interval_to(Note::C), 0);
        assert_eq!(Note::G.interval_to(Note::C), 5);
        assert_eq!(Note::B.interval_to(Note::C), 1);
    }

    #[test]
    fn test_interval_aliases() {
        assert_eq!(interval::AUGMENTED_FOURTH, interval::DIMINISHED_FIFTH);
        assert_eq!(interval::MINOR_THIRD, interval::AUGMENTED_SECOND);
        assert_eq!(interval::PERFECT_FIFTH, 7);
    }

    #[test]
    fn test_circle_is_generated_by_fifths() {
        for i in 0..12 {
            let expected = Note::C.transpose((7 * i as i16 % 12) as Semitones);
            assert_eq!(CIRCLE_OF_FIFTHS[i], expected);
        }
    }

    #[test]
    fn test_fifths_index_total() {
        // All 12 pitch classes resolve without panicking
        for note in Note::ALL {
            let idx = fifths_index(note);
            assert_eq!(CIRCLE_OF_FIFTHS[idx], note);
        }
        assert_eq!(fifths_index(Note::C), 0);
        assert_eq!(fifths_index(Note::G), 1);
        assert_eq!(fifths_index(Note::F), 11);
        assert_eq!(fifths_index(Note::Fs), 6);
    }
}
