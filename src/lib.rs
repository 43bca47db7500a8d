// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! KEYSIG - music-theory calculation engine.
//!
//! Given a tonic pitch class and a tonality, derives a fully spelled key
//! signature, its diatonic scale, the seven diatonic chords, and their
//! Roman-numeral labels, following Western notation convention exactly:
//! circle-of-fifths accidental ordering, one letter per alphabet step,
//! enharmonic preference rules, and the minor-scale natural-sign
//! exception.
//!
//! Every entry point is a pure function over immutable values; results for
//! the same inputs are always structurally identical. The optional
//! [`SignatureCache`] memoizes the 48-key domain but is never required for
//! correctness.

pub mod cache;
pub mod chord;
pub mod error;
pub mod harmony;
pub mod pitch;
pub mod scale;
pub mod signature;
pub mod spelling;

pub use cache::SignatureCache;
pub use chord::{
    build_chord, diatonic_qualities, diatonic_seventh_qualities, invert_chord, qualities_for,
    seventh_qualities_for, seventh_quality, triad_quality, ChordQuality,
};
pub use error::TheoryError;
pub use pitch::{fifths_index, interval, Note, Semitones, CIRCLE_OF_FIFTHS};
pub use scale::{degree_name, MidiNote, Scale, Tonality, DEGREE_NAMES};
pub use signature::{key_signatures, preferred_signature, KeySignature, FLAT_ORDER, SHARP_ORDER};
pub use spelling::{
    accidental_for, base_letters, find_letter, spell_difference, spell_scale, Accidental,
    AccidentalType, Letter, NoteLabel, SpelledSequence,
};
pub use harmony::{
    diatonic_sevenths, diatonic_triads, roman_numeral, roman_numerals, roman_numerals_sevenths,
};
