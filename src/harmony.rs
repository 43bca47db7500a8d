// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Harmonic analysis.
//!
//! Builds the seven diatonic chords of a key and labels them. Chord tones
//! are never respelled: each tone takes the label already chosen for its
//! pitch class in the key's scale, so an altered degree keeps the same
//! accidental everywhere it appears.

use crate::chord::{build_chord, qualities_for, seventh_qualities_for, ChordQuality};
use crate::error::TheoryError;
use crate::signature::KeySignature;
use crate::spelling::{NoteLabel, SpelledSequence};

/// Base numerals for the seven degrees, lowercase form
const BASE_NUMERALS: [&str; 7] = ["i", "ii", "iii", "iv", "v", "vi", "vii"];

/// Roman numeral for a degree (0-6) and quality
pub fn roman_numeral(degree: usize, quality: ChordQuality) -> String {
    let base = BASE_NUMERALS[degree % 7];
    let numeral = if quality.numeral_uppercase() {
        base.to_uppercase()
    } else {
        base.to_string()
    };
    format!("{}{}", numeral, quality.numeral_suffix())
}

/// Roman-numeral labels for a tonality's seven diatonic triads
pub fn roman_numerals(tonality: crate::scale::Tonality) -> Result<[String; 7], TheoryError> {
    let qualities = qualities_for(tonality)?;
    let mut numerals: [String; 7] = Default::default();
    for (degree, quality) in qualities.into_iter().enumerate() {
        numerals[degree] = roman_numeral(degree, quality);
    }
    Ok(numerals)
}

/// Roman-numeral labels for a tonality's seven diatonic seventh chords
pub fn roman_numerals_sevenths(
    tonality: crate::scale::Tonality,
) -> Result<[String; 7], TheoryError> {
    let qualities = seventh_qualities_for(tonality)?;
    let mut numerals: [String; 7] = Default::default();
    for (degree, quality) in qualities.into_iter().enumerate() {
        numerals[degree] = roman_numeral(degree, quality);
    }
    Ok(numerals)
}

/// Label a chord's tones by pitch-class match against the key's scale
fn inherit_labels(
    chord: &[crate::pitch::Note],
    key: &KeySignature,
) -> Result<Vec<NoteLabel>, TheoryError> {
    let scale = key.scale();
    chord
        .iter()
        .map(|&tone| {
            scale
                .notes()
                .iter()
                .position(|&n| n == tone)
                .map(|i| scale.labels()[i])
                .ok_or(TheoryError::NoteOutsideKey(tone))
        })
        .collect()
}

/// Build the seven diatonic triads of a key, labels inherited from the
/// key's own scale spelling
pub fn diatonic_triads(key: &KeySignature) -> Result<Vec<SpelledSequence>, TheoryError> {
    let qualities = qualities_for(key.tonality())?;
    build_diatonic(key, &qualities)
}

/// Build the seven diatonic seventh chords of a key
pub fn diatonic_sevenths(key: &KeySignature) -> Result<Vec<SpelledSequence>, TheoryError> {
    let qualities = seventh_qualities_for(key.tonality())?;
    build_diatonic(key, &qualities)
}

fn build_diatonic(
    key: &KeySignature,
    qualities: &[ChordQuality; 7],
) -> Result<Vec<SpelledSequence>, TheoryError> {
    let mut chords = Vec::with_capacity(7);
    for (degree, &quality) in qualities.iter().enumerate() {
        let root = key.scale().notes()[degree];
        let notes = build_chord(root, quality);
        let labels = inherit_labels(&notes, key)?;
        chords.push(SpelledSequence::from_pairs(
            notes.into_iter().zip(labels),
        ));
    }
    Ok(chords)
}
