// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Tonalities and scale construction.
//!
//! Provides the four supported tonalities with their interval patterns,
//! scale-degree names, and a `Scale` value tying a tonic to its seven notes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::pitch::{Note, Semitones};

/// MIDI note number type (0-127)
pub type MidiNote = u8;

/// Scale-degree names, indexed 0-7. Index 7 repeats the tonic (the octave).
pub const DEGREE_NAMES: [&str; 8] = [
    "Tonic",
    "Supertonic",
    "Mediant",
    "Subdominant",
    "Dominant",
    "Submediant",
    "Leading Tone",
    "Tonic",
];

/// Name of a scale degree (0-7, where 7 is the octave)
pub fn degree_name(degree: usize) -> Option<&'static str> {
    DEGREE_NAMES.get(degree).copied()
}

/// Scale types supported by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tonality {
    Major,
    NaturalMinor,  // Aeolian
    HarmonicMinor, // Raised 7th
    MelodicMinor,  // Ascending form
}

impl Tonality {
    /// All tonalities
    pub const ALL: [Tonality; 4] = [
        Tonality::Major,
        Tonality::NaturalMinor,
        Tonality::HarmonicMinor,
        Tonality::MelodicMinor,
    ];

    /// Get the intervals (semitones from tonic) for this tonality
    pub fn intervals(self) -> [Semitones; 7] {
        match self {
            Tonality::Major => [0, 2, 4, 5, 7, 9, 11],
            Tonality::NaturalMinor => [0, 2, 3, 5, 7, 8, 10],
            Tonality::HarmonicMinor => [0, 2, 3, 5, 7, 8, 11],
            Tonality::MelodicMinor => [0, 2, 3, 5, 7, 9, 11],
        }
    }

    /// Whether this is one of the three minor tonalities
    pub fn is_minor(self) -> bool {
        self != Tonality::Major
    }

    /// Parse tonality from string
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase().replace([' ', '-', '_'], "");
        match s.as_str() {
            "major" | "ionian" => Some(Tonality::Major),
            "minor" | "naturalminor" | "aeolian" => Some(Tonality::NaturalMinor),
            "harmonicminor" => Some(Tonality::HarmonicMinor),
            "melodicminor" => Some(Tonality::MelodicMinor),
            _ => None,
        }
    }

    /// Get a human-readable name for this tonality
    pub fn name(self) -> &'static str {
        match self {
            Tonality::Major => "Major",
            Tonality::NaturalMinor => "Natural Minor",
            Tonality::HarmonicMinor => "Harmonic Minor",
            Tonality::MelodicMinor => "Melodic Minor",
        }
    }
}

impl fmt::Display for Tonality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A complete scale with tonic and tonality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scale {
    tonic: Note,
    tonality: Tonality,
    notes: [Note; 7],
}

impl Scale {
    /// Create a new scale from tonic and tonality
    pub fn new(tonic: Note, tonality: Tonality) -> Self {
        let notes = tonality.intervals().map(|i| tonic.transpose(i));
        Self {
            tonic,
            tonality,
            notes,
        }
    }

    /// Parse a scale from strings (e.g., "C", "major")
    pub fn parse(tonic_str: &str, tonality_str: &str) -> Option<Self> {
        let tonic = Note::from_str(tonic_str)?;
        let tonality = Tonality::from_str(tonality_str)?;
        Some(Scale::new(tonic, tonality))
    }

    /// Get the tonic note
    pub fn tonic(&self) -> Note {
        self.tonic
    }

    /// Get the tonality
    pub fn tonality(&self) -> Tonality {
        self.tonality
    }

    /// Get the seven notes of this scale
    pub fn notes(&self) -> &[Note; 7] {
        &self.notes
    }

    /// Check if a note is in this scale
    pub fn contains(&self, note: Note) -> bool {
        self.notes.contains(&note)
    }

    /// Get the scale degree (0-based) for a note, if it's in the scale
    pub fn degree_of(&self, note: Note) -> Option<usize> {
        self.notes.iter().position(|&n| n == note)
    }

    /// Get the note at a given scale degree (0-6)
    pub fn note_at_degree(&self, degree: usize) -> Option<Note> {
        self.notes.get(degree).copied()
    }

    /// Get a MIDI note at a given scale degree and octave
    /// Degree is 0-based, octave uses MIDI convention (middle C = C4 = 60)
    pub fn midi_note_at(&self, degree: usize, octave: i8) -> Option<MidiNote> {
        let note = self.note_at_degree(degree)?;
        let midi = (octave as i16 + 1) * 12 + note.pitch_class() as i16;
        if !(0..=127).contains(&midi) {
            return None;
        }
        Some(midi as MidiNote)
    }

    /// Get the relative scale (e.g., C major -> A minor, A minor -> C major)
    pub fn relative(&self) -> Scale {
        match self.tonality {
            Tonality::Major => {
                Scale::new(self.tonic.transpose(-3), Tonality::NaturalMinor) // Down a minor 3rd
            }
            _ => Scale::new(self.tonic.transpose(3), Tonality::Major), // Up a minor 3rd
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tonic, self.tonality)
    }
}
