// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Letter-spelling engine.
//!
//! Converts pitch classes into (letter, accidental) labels under a
//! sharp/flat/natural key context. The one-letter-per-alphabet-step rule
//! lives here: a spelled scale uses each of the seven letters exactly once,
//! and each degree's accidental is whatever that forces, up to double
//! sharps and flats.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::pitch::{Note, Semitones};
use crate::scale::Tonality;

/// The seven natural-note letters, cyclic in alphabetical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    /// All letters in alphabetical order starting from C
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Position in the C-first alphabetical cycle (0-6)
    pub fn index(self) -> usize {
        match self {
            Letter::C => 0,
            Letter::D => 1,
            Letter::E => 2,
            Letter::F => 3,
            Letter::G => 4,
            Letter::A => 5,
            Letter::B => 6,
        }
    }

    /// The pitch class of this letter with no accidental
    pub fn natural_note(self) -> Note {
        match self {
            Letter::C => Note::C,
            Letter::D => Note::D,
            Letter::E => Note::E,
            Letter::F => Note::F,
            Letter::G => Note::G,
            Letter::A => Note::A,
            Letter::B => Note::B,
        }
    }

    /// The letter whose natural pitch class is `note`, if any
    pub fn from_natural(note: Note) -> Option<Letter> {
        Letter::ALL.iter().copied().find(|l| l.natural_note() == note)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        };
        write!(f, "{}", c)
    }
}

/// Accidental symbols, from double flat to double sharp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accidental {
    DoubleFlat,
    Flat,
    Natural,
    Sharp,
    DoubleSharp,
}

impl Accidental {
    /// Semitone offset this symbol applies to its letter
    pub fn offset(self) -> Semitones {
        match self {
            Accidental::DoubleFlat => -2,
            Accidental::Flat => -1,
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::DoubleSharp => 2,
        }
    }

    /// Symbol for a semitone offset, if it is within the double range
    pub fn from_offset(offset: Semitones) -> Option<Accidental> {
        match offset {
            -2 => Some(Accidental::DoubleFlat),
            -1 => Some(Accidental::Flat),
            0 => Some(Accidental::Natural),
            1 => Some(Accidental::Sharp),
            2 => Some(Accidental::DoubleSharp),
            _ => None,
        }
    }

    /// Unicode rendering of this symbol
    pub fn symbol(self) -> &'static str {
        match self {
            Accidental::DoubleFlat => "\u{1d12b}",  // 𝄫
            Accidental::Flat => "\u{266d}",         // ♭
            Accidental::Natural => "\u{266e}",      // ♮
            Accidental::Sharp => "\u{266f}",        // ♯
            Accidental::DoubleSharp => "\u{1d12a}", // 𝄪
        }
    }
}

impl fmt::Display for Accidental {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The spelling convention chosen for a key.
///
/// This is a key-level choice; `Accidental` is the per-note symbol set.
/// Double sharps/flats appear as symbols but never as a key convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccidentalType {
    Natural,
    Sharp,
    Flat,
}

/// A spelled note: a letter with an optional accidental symbol.
///
/// `None` renders as the bare letter; `Some(Natural)` renders an explicit ♮
/// (the minor-scale exception where an otherwise-unaltered letter must be
/// marked as cancelled).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteLabel {
    pub letter: Letter,
    pub accidental: Option<Accidental>,
}

impl NoteLabel {
    pub fn new(letter: Letter, accidental: Option<Accidental>) -> Self {
        Self { letter, accidental }
    }

    /// The pitch class this label denotes
    pub fn note(&self) -> Note {
        let offset = self.accidental.map_or(0, Accidental::offset);
        self.letter.natural_note().transpose(offset)
    }
}

impl fmt::Display for NoteLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter)?;
        if let Some(accidental) = self.accidental {
            write!(f, "{}", accidental)?;
        }
        Ok(())
    }
}

/// Parallel notes and labels for a spelled scale or chord.
///
/// Constructed from (note, label) pairs so the two sides can never
/// disagree in length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpelledSequence {
    notes: Vec<Note>,
    labels: Vec<NoteLabel>,
}

impl SpelledSequence {
    /// Build a sequence from (note, label) pairs
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Note, NoteLabel)>) -> Self {
        let (notes, labels) = pairs.into_iter().unzip();
        Self { notes, labels }
    }

    /// The pitch classes
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// The spelled labels
    pub fn labels(&self) -> &[NoteLabel] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl fmt::Display for SpelledSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", label)?;
        }
        Ok(())
    }
}

/// The seven letters rotated to start at `start`, alphabetical order kept
pub fn base_letters(start: Letter) -> [Letter; 7] {
    let offset = start.index();
    let mut letters = [Letter::C; 7];
    for (i, letter) in letters.iter_mut().enumerate() {
        *letter = Letter::ALL[(offset + i) % 7];
    }
    letters
}

/// Choose a letter for `note` under a key's accidental convention.
///
/// A Sharp context takes the letter one semitone below, a Flat context the
/// letter one semitone above; when no such letter exists the bare natural
/// letter is used instead. That order keeps B major and C♭ major distinct:
/// pitch class 11 spells as C♭ in a flat context and as B in a sharp one.
/// A Natural context on a chromatic note has no answer and is an error.
pub fn find_letter(note: Note, accidental_type: AccidentalType) -> Result<NoteLabel, TheoryError> {
    let natural = Letter::from_natural(note);
    match accidental_type {
        AccidentalType::Natural => natural
            .map(|letter| NoteLabel::new(letter, None))
            .ok_or(TheoryError::NoNaturalSpelling(note)),
        AccidentalType::Sharp => {
            let below = Letter::from_natural(note.transpose(-1));
            match below {
                Some(letter) => Ok(NoteLabel::new(letter, Some(Accidental::Sharp))),
                None => {
                    // Both neighbors chromatic: note itself must be natural
                    let letter = natural
                        .expect("every pitch class has a natural or sharp spelling");
                    Ok(NoteLabel::new(letter, None))
                }
            }
        }
        AccidentalType::Flat => {
            let above = Letter::from_natural(note.transpose(1));
            match above {
                Some(letter) => Ok(NoteLabel::new(letter, Some(Accidental::Flat))),
                None => {
                    let letter = natural
                        .expect("every pitch class has a natural or flat spelling");
                    Ok(NoteLabel::new(letter, None))
                }
            }
        }
    }
}

/// Signed semitone distance from a letter's natural pitch to the actual
/// note, corrected for octave wraparound.
///
/// B (11) against the letter C (0) is -1, never +11. Distances beyond a
/// double accidental have no spelling and are an error.
pub fn spell_difference(actual: Note, natural: Note) -> Result<Semitones, TheoryError> {
    let wrapped = natural.interval_to(actual) as Semitones; // 0-11
    match wrapped {
        0..=2 => Ok(wrapped),
        10 | 11 => Ok(wrapped - 12),
        _ => Err(TheoryError::SpellingOutOfRange { semitones: wrapped }),
    }
}

/// Accidental symbol for a spelling difference at a scale degree.
///
/// A difference of 0 normally needs no symbol, but in minor tonalities a
/// degree whose interval departs from the natural-minor pattern gets an
/// explicit ♮ (e.g. the raised 6th/7th landing on a letter the key
/// signature flattens).
pub fn accidental_for(
    difference: Semitones,
    tonality: Tonality,
    degree: usize,
) -> Result<Option<Accidental>, TheoryError> {
    let degree = degree % 7;
    match difference {
        0 => {
            let raised = tonality.is_minor()
                && tonality.intervals()[degree] != Tonality::NaturalMinor.intervals()[degree];
            if raised {
                Ok(Some(Accidental::Natural))
            } else {
                Ok(None)
            }
        }
        1 => Ok(Some(Accidental::Sharp)),
        -1 => Ok(Some(Accidental::Flat)),
        2 => Ok(Some(Accidental::DoubleSharp)),
        -2 => Ok(Some(Accidental::DoubleFlat)),
        other => Err(TheoryError::SpellingOutOfRange { semitones: other }),
    }
}

/// Spell a 7-note scale under a key's accidental convention.
///
/// The tonic's letter anchors the rotation; every following degree takes
/// the next alphabetical letter and whatever accidental that forces.
pub fn spell_scale(
    notes: &[Note; 7],
    tonic: Note,
    accidental_type: AccidentalType,
    tonality: Tonality,
) -> Result<[NoteLabel; 7], TheoryError> {
    let tonic_label = find_letter(tonic, accidental_type)?;
    let letters = base_letters(tonic_label.letter);

    let mut labels = [tonic_label; 7];
    for degree in 0..7 {
        let letter = letters[degree];
        let difference = spell_difference(notes[degree], letter.natural_note())?;
        let accidental = accidental_for(difference, tonality, degree)?;
        labels[degree] = NoteLabel::new(letter, accidental);
    }
    Ok(labels)
}
