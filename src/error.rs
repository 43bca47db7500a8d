// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for the theory engine.
//!
//! Every variant is a domain violation: the inputs describe something that
//! has no answer in Western notation. The engine never guesses a "close
//! enough" spelling; it returns one of these instead.

use thiserror::Error;

use crate::pitch::{Note, Semitones};

/// Errors raised by spelling, chord derivation, and harmonic analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// A chromatic note was asked for a bare-letter spelling.
    #[error("note {0} has no natural spelling")]
    NoNaturalSpelling(Note),

    /// A note sits more than a double accidental away from its letter.
    #[error("spelling distance of {semitones} semitones exceeds a double accidental")]
    SpellingOutOfRange { semitones: Semitones },

    /// A stacked third/fifth pair matches no known triad quality.
    #[error("intervals ({third}, {fifth}) do not form a known triad")]
    UnknownTriadQuality { third: Semitones, fifth: Semitones },

    /// A stacked third/fifth/seventh triple matches no known seventh chord.
    #[error("intervals ({third}, {fifth}, {seventh}) do not form a known seventh chord")]
    UnknownSeventhQuality {
        third: Semitones,
        fifth: Semitones,
        seventh: Semitones,
    },

    /// Diatonic derivation was given something other than a 7-note scale.
    #[error("diatonic derivation requires a 7-note scale, got {0} notes")]
    MalformedScale(usize),

    /// A chord tone could not be matched against the key's scale labels.
    #[error("chord tone {0} is not in the key's scale")]
    NoteOutsideKey(Note),
}
