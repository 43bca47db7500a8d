// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord construction and quality derivation.
//!
//! Chords are built from fixed interval shapes; diatonic qualities are
//! derived dynamically by stacking scale degrees and matching the interval
//! signature, so a new scale definition propagates without a hand-kept
//! per-tonality table.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::pitch::{Note, Semitones};
use crate::scale::{Scale, Tonality};

/// Chord qualities supported by the engine.
///
/// The minor-major and augmented-major sevenths are included because
/// harmonic- and melodic-minor stacking produces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
    Augmented,
    Major7,
    Dominant7,
    Minor7,
    MinorMajor7,
    HalfDiminished7,
    Diminished7,
    AugmentedMajor7,
}

impl ChordQuality {
    /// Intervals from the root in semitones (3 for triads, 4 for sevenths)
    pub fn intervals(self) -> &'static [Semitones] {
        match self {
            ChordQuality::Major => &[0, 4, 7],
            ChordQuality::Minor => &[0, 3, 7],
            ChordQuality::Diminished => &[0, 3, 6],
            ChordQuality::Augmented => &[0, 4, 8],
            ChordQuality::Major7 => &[0, 4, 7, 11],
            ChordQuality::Dominant7 => &[0, 4, 7, 10],
            ChordQuality::Minor7 => &[0, 3, 7, 10],
            ChordQuality::MinorMajor7 => &[0, 3, 7, 11],
            ChordQuality::HalfDiminished7 => &[0, 3, 6, 10],
            ChordQuality::Diminished7 => &[0, 3, 6, 9],
            ChordQuality::AugmentedMajor7 => &[0, 4, 8, 11],
        }
    }

    /// Get a human-readable name for this quality
    pub fn name(self) -> &'static str {
        match self {
            ChordQuality::Major => "Major",
            ChordQuality::Minor => "Minor",
            ChordQuality::Diminished => "Diminished",
            ChordQuality::Augmented => "Augmented",
            ChordQuality::Major7 => "Major 7th",
            ChordQuality::Dominant7 => "Dominant 7th",
            ChordQuality::Minor7 => "Minor 7th",
            ChordQuality::MinorMajor7 => "Minor-Major 7th",
            ChordQuality::HalfDiminished7 => "Half-Diminished 7th",
            ChordQuality::Diminished7 => "Diminished 7th",
            ChordQuality::AugmentedMajor7 => "Augmented-Major 7th",
        }
    }

    /// Chord-symbol suffix appended to a root name (e.g. "m7" in "Dm7")
    pub fn suffix(self) -> &'static str {
        match self {
            ChordQuality::Major => "",
            ChordQuality::Minor => "m",
            ChordQuality::Diminished => "dim",
            ChordQuality::Augmented => "aug",
            ChordQuality::Major7 => "maj7",
            ChordQuality::Dominant7 => "7",
            ChordQuality::Minor7 => "m7",
            ChordQuality::MinorMajor7 => "m(maj7)",
            ChordQuality::HalfDiminished7 => "m7\u{266d}5",
            ChordQuality::Diminished7 => "dim7",
            ChordQuality::AugmentedMajor7 => "aug(maj7)",
        }
    }

    /// Whether the Roman numeral for this quality is uppercase
    pub fn numeral_uppercase(self) -> bool {
        matches!(
            self,
            ChordQuality::Major
                | ChordQuality::Augmented
                | ChordQuality::Major7
                | ChordQuality::Dominant7
                | ChordQuality::AugmentedMajor7
        )
    }

    /// Quality suffix appended to a Roman numeral
    pub fn numeral_suffix(self) -> &'static str {
        match self {
            ChordQuality::Major | ChordQuality::Minor => "",
            ChordQuality::Diminished => "\u{00b0}",
            ChordQuality::Augmented => "+",
            ChordQuality::Major7 | ChordQuality::MinorMajor7 => "\u{1d39}\u{2077}",
            ChordQuality::Dominant7 | ChordQuality::Minor7 => "\u{2077}",
            ChordQuality::HalfDiminished7 => "\u{00f8}\u{2077}",
            ChordQuality::Diminished7 => "\u{00b0}\u{2077}",
            ChordQuality::AugmentedMajor7 => "+\u{1d39}\u{2077}",
        }
    }

    /// Whether this quality is a four-note seventh chord
    pub fn is_seventh(self) -> bool {
        self.intervals().len() == 4
    }
}

impl fmt::Display for ChordQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Build a chord's pitch classes from a root and quality.
///
/// The root is always first; triads have 3 notes, sevenths 4.
pub fn build_chord(root: Note, quality: ChordQuality) -> Vec<Note> {
    quality
        .intervals()
        .iter()
        .map(|&i| root.transpose(i))
        .collect()
}

/// Invert a root-position chord by moving bottom notes to the top
pub fn invert_chord(notes: &[Note], inversion: usize) -> Vec<Note> {
    if notes.is_empty() {
        return Vec::new();
    }
    let split = inversion % notes.len();
    let mut result = notes[split..].to_vec();
    result.extend_from_slice(&notes[..split]);
    result
}

/// Triad quality for a (third, fifth) interval signature
pub fn triad_quality(third: Semitones, fifth: Semitones) -> Result<ChordQuality, TheoryError> {
    match (third, fifth) {
        (4, 7) => Ok(ChordQuality::Major),
        (3, 7) => Ok(ChordQuality::Minor),
        (3, 6) => Ok(ChordQuality::Diminished),
        (4, 8) => Ok(ChordQuality::Augmented),
        _ => Err(TheoryError::UnknownTriadQuality { third, fifth }),
    }
}

/// Seventh-chord quality for a (third, fifth, seventh) interval signature
pub fn seventh_quality(
    third: Semitones,
    fifth: Semitones,
    seventh: Semitones,
) -> Result<ChordQuality, TheoryError> {
    match (third, fifth, seventh) {
        (4, 7, 11) => Ok(ChordQuality::Major7),
        (4, 7, 10) => Ok(ChordQuality::Dominant7),
        (3, 7, 10) => Ok(ChordQuality::Minor7),
        (3, 7, 11) => Ok(ChordQuality::MinorMajor7),
        (3, 6, 10) => Ok(ChordQuality::HalfDiminished7),
        (3, 6, 9) => Ok(ChordQuality::Diminished7),
        (4, 8, 11) => Ok(ChordQuality::AugmentedMajor7),
        _ => Err(TheoryError::UnknownSeventhQuality {
            third,
            fifth,
            seventh,
        }),
    }
}

/// Derive the seven diatonic triad qualities of an arbitrary 7-note scale.
///
/// Degree `i` stacks degrees `i`, `i+2`, `i+4` (wrapping past the octave)
/// and matches the interval signature. An unmatched signature means the
/// scale is not diatonic and is a hard error.
pub fn diatonic_qualities(scale: &[Note]) -> Result<[ChordQuality; 7], TheoryError> {
    if scale.len() != 7 {
        return Err(TheoryError::MalformedScale(scale.len()));
    }
    let mut qualities = [ChordQuality::Major; 7];
    for i in 0..7 {
        let root = scale[i];
        let third = root.interval_to(scale[(i + 2) % 7]) as Semitones;
        let fifth = root.interval_to(scale[(i + 4) % 7]) as Semitones;
        qualities[i] = triad_quality(third, fifth)?;
    }
    Ok(qualities)
}

/// Derive the seven diatonic seventh-chord qualities of a 7-note scale
pub fn diatonic_seventh_qualities(scale: &[Note]) -> Result<[ChordQuality; 7], TheoryError> {
    if scale.len() != 7 {
        return Err(TheoryError::MalformedScale(scale.len()));
    }
    let mut qualities = [ChordQuality::Major7; 7];
    for i in 0..7 {
        let root = scale[i];
        let third = root.interval_to(scale[(i + 2) % 7]) as Semitones;
        let fifth = root.interval_to(scale[(i + 4) % 7]) as Semitones;
        let seventh = root.interval_to(scale[(i + 6) % 7]) as Semitones;
        qualities[i] = seventh_quality(third, fifth, seventh)?;
    }
    Ok(qualities)
}

/// Rotate a degree-quality list by 5, the relative-minor offset
fn rotate_relative(qualities: [ChordQuality; 7]) -> [ChordQuality; 7] {
    let mut rotated = qualities;
    for (i, slot) in rotated.iter_mut().enumerate() {
        *slot = qualities[(i + 5) % 7];
    }
    rotated
}

/// Triad qualities for each degree of a tonality.
///
/// Natural minor is the major list read from its sixth degree, so it is
/// rotated rather than rederived.
pub fn qualities_for(tonality: Tonality) -> Result<[ChordQuality; 7], TheoryError> {
    match tonality {
        Tonality::NaturalMinor => Ok(rotate_relative(qualities_for(Tonality::Major)?)),
        _ => diatonic_qualities(Scale::new(Note::C, tonality).notes()),
    }
}

/// Seventh-chord qualities for each degree of a tonality
pub fn seventh_qualities_for(tonality: Tonality) -> Result<[ChordQuality; 7], TheoryError> {
    match tonality {
        Tonality::NaturalMinor => Ok(rotate_relative(seventh_qualities_for(Tonality::Major)?)),
        _ => diatonic_seventh_qualities(Scale::new(Note::C, tonality).notes()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_chord() {
        assert_eq!(
            build_chord(Note::C, ChordQuality::Major),
            vec![Note::C, Note::E, Note::G]
        );
        // Wraps correctly past the octave boundary
        assert_eq!(
            build_chord(Note::B, ChordQuality::Major),
            vec![Note::B, Note::Ds, Note::Fs]
        );
        assert_eq!(
            build_chord(Note::G, ChordQuality::Dominant7),
            vec![Note::G, Note::B, Note::D, Note::F]
        );
    }

    #[test]
    fn test_invert_chord() {
        let c = build_chord(Note::C, ChordQuality::Major);
        assert_eq!(invert_chord(&c, 0), vec![Note::C, Note::E, Note::G]);
        assert_eq!(invert_chord(&c, 1), vec![Note::E, Note::G, Note::C]);
        assert_eq!(invert_chord(&c, 2), vec![Note::G, Note::C, Note::E]);
        assert_eq!(invert_chord(&c, 3), vec![Note::C, Note::E, Note::G]);
    }

    #[test]
    fn test_triad_signatures() {
        assert_eq!(triad_quality(4, 7), Ok(ChordQuality::Major));
        assert_eq!(triad_quality(3, 7), Ok(ChordQuality::Minor));
        assert_eq!(triad_quality(3, 6), Ok(ChordQuality::Diminished));
        assert_eq!(triad_quality(4, 8), Ok(ChordQuality::Augmented));
        assert_eq!(
            triad_quality(2, 7),
            Err(TheoryError::UnknownTriadQuality { third: 2, fifth: 7 })
        );
    }

    #[test]
    fn test_major_diatonic_qualities() {
        let qualities = qualities_for(Tonality::Major).unwrap();
        assert_eq!(
            qualities,
            [
                ChordQuality::Major,
                ChordQuality::Minor,
                ChordQuality::Minor,
                ChordQuality::Major,
                ChordQuality::Major,
                ChordQuality::Minor,
                ChordQuality::Diminished,
            ]
        );
    }

    #[test]
    fn test_natural_minor_is_rotated_major() {
        let rotated = qualities_for(Tonality::NaturalMinor).unwrap();
        assert_eq!(
            rotated,
            [
                ChordQuality::Minor,
                ChordQuality::Diminished,
                ChordQuality::Major,
                ChordQuality::Minor,
                ChordQuality::Minor,
                ChordQuality::Major,
                ChordQuality::Major,
            ]
        );
        // Rotation agrees with direct derivation
        let derived =
            diatonic_qualities(Scale::new(Note::C, Tonality::NaturalMinor).notes()).unwrap();
        assert_eq!(rotated, derived);
        let derived_7ths =
            diatonic_seventh_qualities(Scale::new(Note::C, Tonality::NaturalMinor).notes())
                .unwrap();
        assert_eq!(
            seventh_qualities_for(Tonality::NaturalMinor).unwrap(),
            derived_7ths
        );
    }

    #[test]
    fn test_harmonic_minor_qualities() {
        let qualities = qualities_for(Tonality::HarmonicMinor).unwrap();
        assert_eq!(qualities[2], ChordQuality::Augmented);
        assert_eq!(qualities[4], ChordQuality::Major);
        assert_eq!(qualities[6], ChordQuality::Diminished);

        let sevenths = seventh_qualities_for(Tonality::HarmonicMinor).unwrap();
        assert_eq!(sevenths[0], ChordQuality::MinorMajor7);
        assert_eq!(sevenths[2], ChordQuality::AugmentedMajor7);
        assert_eq!(sevenths[6], ChordQuality::Diminished7);
    }

    #[test]
    fn test_melodic_minor_qualities() {
        let qualities = qualities_for(Tonality::MelodicMinor).unwrap();
        assert_eq!(
            qualities,
            [
                ChordQuality::Minor,
                ChordQuality::Minor,
                ChordQuality::Augmented,
                ChordQuality::Major,
                ChordQuality::Major,
                ChordQuality::Diminished,
                ChordQuality::Diminished,
            ]
        );
    }

    #[test]
    fn test_malformed_scale_rejected() {
        let five = [Note::C, Note::D, Note::E, Note::G, Note::A];
        assert_eq!(
            diatonic_qualities(&five),
            Err(TheoryError::MalformedScale(5))
        );
        // A non-diatonic 7-note collection fails on its signature
        let chromatic_run = [
            Note::C,
            Note::Cs,
            Note::D,
            Note::Ds,
            Note::E,
            Note::F,
            Note::Fs,
        ];
        assert!(diatonic_qualities(&chromatic_run).is_err());
    }
}
