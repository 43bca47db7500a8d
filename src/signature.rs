// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Key-signature calculation.
//!
//! Maps a (tonic, tonality) pair to its fully spelled key signature(s).
//! Minor keys normalize to their relative major, the circle-of-fifths
//! position picks the accidental convention, and keys at positions 5-7
//! exist under both a flat and a sharp spelling (B/C♭, F♯/G♭, C♯/D♭).

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::TheoryError;
use crate::pitch::{fifths_index, Note};
use crate::scale::{Scale, Tonality};
use crate::spelling::{
    spell_scale, Accidental, AccidentalType, Letter, NoteLabel, SpelledSequence,
};

/// Letters gaining sharps, in key-signature order (F♯ first)
pub const SHARP_ORDER: [Letter; 7] = [
    Letter::F,
    Letter::C,
    Letter::G,
    Letter::D,
    Letter::A,
    Letter::E,
    Letter::B,
];

/// Letters gaining flats, in key-signature order (B♭ first)
pub const FLAT_ORDER: [Letter; 7] = [
    Letter::B,
    Letter::E,
    Letter::A,
    Letter::D,
    Letter::G,
    Letter::C,
    Letter::F,
];

/// A fully spelled key signature.
///
/// `accidentals` is a prefix of the sharp or flat order as pitch classes
/// of the letters carrying the accidental; `scale` is the spelled
/// ascending scale with exactly seven entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeySignature {
    tonic: Note,
    tonic_label: NoteLabel,
    tonality: Tonality,
    accidental_type: AccidentalType,
    accidentals: Vec<Note>,
    scale: SpelledSequence,
}

impl KeySignature {
    /// Get the tonic note
    pub fn tonic(&self) -> Note {
        self.tonic
    }

    /// Get the spelled tonic label
    pub fn tonic_label(&self) -> NoteLabel {
        self.tonic_label
    }

    /// Get the tonality
    pub fn tonality(&self) -> Tonality {
        self.tonality
    }

    /// Get the spelling convention of this key
    pub fn accidental_type(&self) -> AccidentalType {
        self.accidental_type
    }

    /// Notes carrying a key-signature accidental, in signature order
    pub fn accidentals(&self) -> &[Note] {
        &self.accidentals
    }

    /// The spelled ascending scale (seven entries)
    pub fn scale(&self) -> &SpelledSequence {
        &self.scale
    }

    /// The signature's accidentals as spelled labels (F♯ C♯ … or B♭ E♭ …)
    pub fn accidental_labels(&self) -> Vec<NoteLabel> {
        let (order, symbol) = match self.accidental_type {
            AccidentalType::Natural => return Vec::new(),
            AccidentalType::Sharp => (&SHARP_ORDER, Accidental::Sharp),
            AccidentalType::Flat => (&FLAT_ORDER, Accidental::Flat),
        };
        order[..self.accidentals.len()]
            .iter()
            .map(|&letter| NoteLabel::new(letter, Some(symbol)))
            .collect()
    }
}

impl fmt::Display for KeySignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.accidentals.len();
        match self.accidental_type {
            AccidentalType::Natural => {
                write!(f, "{} {} (no accidentals)", self.tonic_label, self.tonality)
            }
            AccidentalType::Sharp => write!(
                f,
                "{} {} ({} sharp{})",
                self.tonic_label,
                self.tonality,
                count,
                if count == 1 { "" } else { "s" }
            ),
            AccidentalType::Flat => write!(
                f,
                "{} {} ({} flat{})",
                self.tonic_label,
                self.tonality,
                count,
                if count == 1 { "" } else { "s" }
            ),
        }
    }
}

/// Calculate the key signature(s) for a tonic and tonality.
///
/// Returns one signature for most keys and two for the enharmonic keys at
/// circle positions 5-7, sorted by accidental count with flat spellings
/// first on ties (the flat spelling is the conventional default).
pub fn key_signatures(tonic: Note, tonality: Tonality) -> Result<Vec<KeySignature>, TheoryError> {
    // All minor tonalities share a circle position with their relative major
    let adjusted = if tonality.is_minor() {
        tonic.transpose(3)
    } else {
        tonic
    };
    let idx = fifths_index(adjusted);
    debug!(%tonic, %tonality, circle_index = idx, "resolving key signature");

    let types: &[AccidentalType] = match idx {
        0 => &[AccidentalType::Natural],
        1..=4 => &[AccidentalType::Sharp],
        5..=7 => &[AccidentalType::Flat, AccidentalType::Sharp],
        _ => &[AccidentalType::Flat],
    };

    let scale_notes = *Scale::new(tonic, tonality).notes();
    let mut results = Vec::with_capacity(types.len());
    for &accidental_type in types {
        let accidentals: Vec<Note> = match accidental_type {
            AccidentalType::Natural => Vec::new(),
            AccidentalType::Sharp => SHARP_ORDER[..idx]
                .iter()
                .map(|l| l.natural_note())
                .collect(),
            AccidentalType::Flat => FLAT_ORDER[..12 - idx]
                .iter()
                .map(|l| l.natural_note())
                .collect(),
        };
        let labels = spell_scale(&scale_notes, tonic, accidental_type, tonality)?;
        let scale = SpelledSequence::from_pairs(scale_notes.iter().copied().zip(labels));
        let tonic_label = scale.labels()[0];
        results.push(KeySignature {
            tonic,
            tonic_label,
            tonality,
            accidental_type,
            accidentals,
            scale,
        });
    }

    results.sort_by_key(|ks| {
        (
            ks.accidentals.len(),
            ks.accidental_type == AccidentalType::Sharp,
        )
    });
    Ok(results)
}

/// The convention-preferred signature: fewest accidentals, flats on ties
pub fn preferred_signature(tonic: Note, tonality: Tonality) -> Result<KeySignature, TheoryError> {
    let mut signatures = key_signatures(tonic, tonality)?;
    Ok(signatures.remove(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(scale: &SpelledSequence) -> Vec<String> {
        scale.labels().iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_c_major_no_accidentals() {
        let sigs = key_signatures(Note::C, Tonality::Major).unwrap();
        assert_eq!(sigs.len(), 1);
        assert_eq!(sigs[0].accidental_type(), AccidentalType::Natural);
        assert!(sigs[0].accidentals().is_empty());
        assert_eq!(render(sigs[0].scale()), ["C", "D", "E", "F", "G", "A", "B"]);
    }

    #[test]
    fn test_sharp_key_counts() {
        let g = key_signatures(Note::G, Tonality::Major).unwrap();
        assert_eq!(g[0].accidentals(), &[Note::F]);
        assert_eq!(g[0].accidental_type(), AccidentalType::Sharp);

        let d = key_signatures(Note::D, Tonality::Major).unwrap();
        assert_eq!(d[0].accidentals(), &[Note::F, Note::C]);

        let e = key_signatures(Note::E, Tonality::Major).unwrap();
        assert_eq!(e[0].accidentals().len(), 4);
    }

    #[test]
    fn test_flat_key_counts() {
        let f = key_signatures(Note::F, Tonality::Major).unwrap();
        assert_eq!(f.len(), 1);
        assert_eq!(f[0].accidental_type(), AccidentalType::Flat);
        assert_eq!(f[0].accidentals(), &[Note::B]);

        let ab = key_signatures(Note::Gs, Tonality::Major).unwrap();
        assert_eq!(ab[0].accidentals(), &[Note::B, Note::E, Note::A, Note::D]);
        assert_eq!(
            render(ab[0].scale()),
            ["A\u{266d}", "B\u{266d}", "C", "D\u{266d}", "E\u{266d}", "F", "G"]
        );
    }

    #[test]
    fn test_enharmonic_duality_fs_gb() {
        let sigs = key_signatures(Note::Fs, Tonality::Major).unwrap();
        assert_eq!(sigs.len(), 2);
        // Flat sorts first on the 6/6 tie
        assert_eq!(sigs[0].accidental_type(), AccidentalType::Flat);
        assert_eq!(sigs[0].tonic_label().to_string(), "G\u{266d}");
        assert_eq!(sigs[1].accidental_type(), AccidentalType::Sharp);
        assert_eq!(sigs[1].tonic_label().to_string(), "F\u{266f}");
        // Same pitch classes under both spellings
        assert_eq!(sigs[0].scale().notes(), sigs[1].scale().notes());
    }

    #[test]
    fn test_enharmonic_duality_sorted_by_count() {
        // B major (5 sharps) before C-flat major (7 flats)
        let sigs = key_signatures(Note::B, Tonality::Major).unwrap();
        assert_eq!(sigs.len(), 2);
        assert_eq!(sigs[0].accidental_type(), AccidentalType::Sharp);
        assert_eq!(sigs[0].accidentals().len(), 5);
        assert_eq!(sigs[1].tonic_label().to_string(), "C\u{266d}");
        assert_eq!(sigs[1].accidentals().len(), 7);

        // D-flat major (5 flats) before C-sharp major (7 sharps)
        let sigs = key_signatures(Note::Cs, Tonality::Major).unwrap();
        assert_eq!(sigs[0].tonic_label().to_string(), "D\u{266d}");
        assert_eq!(sigs[0].accidentals().len(), 5);
        assert_eq!(sigs[1].accidentals().len(), 7);
    }

    #[test]
    fn test_relative_minor_shares_signature() {
        let c = key_signatures(Note::C, Tonality::Major).unwrap();
        let a = key_signatures(Note::A, Tonality::NaturalMinor).unwrap();
        assert_eq!(c[0].accidentals(), a[0].accidentals());

        let bb = key_signatures(Note::As, Tonality::Major).unwrap();
        let g = key_signatures(Note::G, Tonality::NaturalMinor).unwrap();
        assert_eq!(bb[0].accidentals(), g[0].accidentals());
    }

    #[test]
    fn test_harmonic_minor_spelling() {
        let a = preferred_signature(Note::A, Tonality::HarmonicMinor).unwrap();
        assert_eq!(
            render(a.scale()),
            ["A", "B", "C", "D", "E", "F", "G\u{266f}"]
        );

        // G harmonic minor: two flats, raised 7th spelled F-sharp
        let g = preferred_signature(Note::G, Tonality::HarmonicMinor).unwrap();
        assert_eq!(g.accidentals(), &[Note::B, Note::E]);
        assert_eq!(
            render(g.scale()),
            ["G", "A", "B\u{266d}", "C", "D", "E\u{266d}", "F\u{266f}"]
        );
    }

    #[test]
    fn test_melodic_minor_natural_signs() {
        let g = preferred_signature(Note::G, Tonality::MelodicMinor).unwrap();
        assert_eq!(
            render(g.scale()),
            ["G", "A", "B\u{266d}", "C", "D", "E\u{266e}", "F\u{266f}"]
        );
    }

    #[test]
    fn test_double_sharp_spelling() {
        // A-sharp harmonic minor raises G to G-double-sharp
        let sigs = key_signatures(Note::As, Tonality::HarmonicMinor).unwrap();
        assert_eq!(sigs.len(), 2);
        let sharp = &sigs[1];
        assert_eq!(sharp.accidental_type(), AccidentalType::Sharp);
        assert_eq!(sharp.scale().labels()[6].to_string(), "G\u{1d12a}");
        // The flat spelling shows B-flat minor's raised 7th as A-natural
        let flat = &sigs[0];
        assert_eq!(flat.scale().labels()[6].to_string(), "A\u{266e}");
    }

    #[test]
    fn test_accidental_labels() {
        let d = preferred_signature(Note::D, Tonality::Major).unwrap();
        let labels: Vec<String> = d
            .accidental_labels()
            .iter()
            .map(|l| l.to_string())
            .collect();
        assert_eq!(labels, ["F\u{266f}", "C\u{266f}"]);

        let eb = preferred_signature(Note::Ds, Tonality::Major).unwrap();
        let labels: Vec<String> = eb
            .accidental_labels()
            .iter()
            .map(|l| l.to_string())
            .collect();
        assert_eq!(labels, ["B\u{266d}", "E\u{266d}", "A\u{266d}"]);
    }

    #[test]
    fn test_totality_over_domain() {
        for note in Note::ALL {
            for tonality in Tonality::ALL {
                let sigs = key_signatures(note, tonality).unwrap();
                assert!(!sigs.is_empty() && sigs.len() <= 2);
                for sig in &sigs {
                    assert_eq!(sig.scale().len(), 7);
                }
            }
        }
    }
}
