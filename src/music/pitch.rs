// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch classes, letters and note spellings.
//!
//! A pitch class says *which* key on the keyboard; a spelling says what the
//! note is *called*. C#, Db and Bx share pitch class 1 but sit on three
//! different letters, and scale and chord construction depends on getting
//! the letter right.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::TheoryError;

/// MIDI note number type (0-127)
pub type MidiNote = u8;

/// Reference tuning for A4 in Hz
pub const A4_FREQUENCY: f64 = 440.0;

/// Pitch modulo the octave (0-11)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Create a pitch class, wrapping any integer into 0-11
    pub fn new(value: i32) -> Self {
        PitchClass(value.rem_euclid(12) as u8)
    }

    /// Get the raw value (0-11)
    pub fn value(self) -> u8 {
        self.0
    }

    /// Transpose by semitones, wrapping around the octave
    pub fn transpose(self, semitones: i32) -> Self {
        PitchClass::new(self.0 as i32 + semitones)
    }

    /// Ascending distance in semitones to another pitch class (0-11)
    pub fn semitones_to(self, other: PitchClass) -> u8 {
        (other.0 as i32 - self.0 as i32).rem_euclid(12) as u8
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The seven natural letters, in musical-alphabet order starting from C
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
    /// All letters in alphabet order
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Position in the alphabet (C = 0, B = 6)
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

    /// Letter at an alphabet position, wrapping past B
    pub fn from_index(index: usize) -> Self {
        Letter::ALL[index % 7]
    }

    /// Step forward through the alphabet (C + 2 = E)
    pub fn step(self, steps: usize) -> Self {
        Letter::from_index(self.index() + steps)
    }

    /// Pitch class of the unaltered letter
    pub fn natural_pitch_class(self) -> PitchClass {
        let pc = match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        };
        PitchClass::new(pc)
    }

    /// Parse a single letter, either case
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Accidental attached to a letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Accidental {
    DoubleFlat,
    Flat,
    Natural,
    Sharp,
    DoubleSharp,
}

impl Accidental {
    /// Semitone alteration applied to the natural letter
    pub fn semitones(self) -> i32 {
        match self {
            Accidental::DoubleFlat => -2,
            Accidental::Flat => -1,
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::DoubleSharp => 2,
        }
    }

    /// Text form used when rendering a spelling
    pub fn symbol(self) -> &'static str {
        match self {
            Accidental::DoubleFlat => "bb",
            Accidental::Flat => "b",
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::DoubleSharp => "x",
        }
    }

    /// Parse the accidental part of a note name.
    ///
    /// Accepts ASCII (`#`, `b`, `x`, `##`, `bb`) and Unicode
    /// (`♯`, `♭`, `𝄪`, `𝄫`) forms.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "" | "♮" => Some(Accidental::Natural),
            "#" | "♯" => Some(Accidental::Sharp),
            "b" | "♭" => Some(Accidental::Flat),
            "x" | "##" | "♯♯" | "𝄪" => Some(Accidental::DoubleSharp),
            "bb" | "♭♭" | "𝄫" => Some(Accidental::DoubleFlat),
            _ => None,
        }
    }
}

/// A note name: letter plus accidental
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Spelling {
    letter: Letter,
    accidental: Accidental,
}

impl Spelling {
    pub const fn new(letter: Letter, accidental: Accidental) -> Self {
        Self { letter, accidental }
    }

    /// The unaltered letter
    pub const fn natural(letter: Letter) -> Self {
        Self::new(letter, Accidental::Natural)
    }

    pub fn letter(self) -> Letter {
        self.letter
    }

    pub fn accidental(self) -> Accidental {
        self.accidental
    }

    /// Get the pitch class (0-11) for this spelling
    pub fn pitch_class(self) -> PitchClass {
        self.letter
            .natural_pitch_class()
            .transpose(self.accidental.semitones())
    }

    /// Check whether two spellings sound the same (C# and Db)
    pub fn is_enharmonic(self, other: Spelling) -> bool {
        self.pitch_class() == other.pitch_class()
    }

    /// MIDI note number in the given octave (middle C = C4 = 60).
    ///
    /// The octave number follows the pitch class, so B#4 and C4 are both 60.
    pub fn midi_note(self, octave: i8) -> Option<MidiNote> {
        let midi = (octave as i16 + 1) * 12 + self.pitch_class().value() as i16;
        if !(0..=127).contains(&midi) {
            return None;
        }
        Some(midi as MidiNote)
    }

    /// Equal-tempered frequency in Hz in the given octave (A4 = 440)
    pub fn frequency(self, octave: i8) -> Option<f64> {
        self.midi_note(octave)
            .map(|midi| A4_FREQUENCY * 2f64.powf((midi as f64 - 69.0) / 12.0))
    }
}

impl FromStr for Spelling {
    type Err = TheoryError;

    /// Parse a note name (e.g., "C", "F#", "Bb", "Cx", "Dbb")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let letter = chars
            .next()
            .and_then(Letter::from_char)
            .ok_or_else(|| TheoryError::UnknownSpelling(s.to_string()))?;
        let accidental = Accidental::parse(chars.as_str())
            .ok_or_else(|| TheoryError::UnknownSpelling(s.to_string()))?;
        Ok(Spelling::new(letter, accidental))
    }
}

impl fmt::Display for Spelling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.accidental.symbol())
    }
}

const fn nat(letter: Letter) -> Spelling {
    Spelling::natural(letter)
}

const fn sharp(letter: Letter) -> Spelling {
    Spelling::new(letter, Accidental::Sharp)
}

const fn flat(letter: Letter) -> Spelling {
    Spelling::new(letter, Accidental::Flat)
}

const fn dsharp(letter: Letter) -> Spelling {
    Spelling::new(letter, Accidental::DoubleSharp)
}

const fn dflat(letter: Letter) -> Spelling {
    Spelling::new(letter, Accidental::DoubleFlat)
}

/// Every spelling with at most a double accidental, grouped by pitch class.
///
/// Order within a group is significant: the first entry is the fallback
/// when no spelling on the requested letter exists.
static SPELLINGS_BY_PITCH_CLASS: [&[Spelling]; 12] = [
    &[nat(Letter::C), sharp(Letter::B), dflat(Letter::D)],
    &[sharp(Letter::C), flat(Letter::D), dsharp(Letter::B)],
    &[nat(Letter::D), dsharp(Letter::C), dflat(Letter::E)],
    &[sharp(Letter::D), flat(Letter::E), dflat(Letter::F)],
    &[nat(Letter::E), flat(Letter::F), dsharp(Letter::D)],
    &[nat(Letter::F), sharp(Letter::E), dflat(Letter::G)],
    &[sharp(Letter::F), flat(Letter::G), dsharp(Letter::E)],
    &[nat(Letter::G), dsharp(Letter::F), dflat(Letter::A)],
    &[sharp(Letter::G), flat(Letter::A)],
    &[nat(Letter::A), dsharp(Letter::G), dflat(Letter::B)],
    &[sharp(Letter::A), flat(Letter::B), dflat(Letter::C)],
    &[nat(Letter::B), dsharp(Letter::A), flat(Letter::C)],
];

/// All known spellings of a pitch class, canonical one first
pub fn spellings_for(pc: PitchClass) -> &'static [Spelling] {
    SPELLINGS_BY_PITCH_CLASS[pc.value() as usize]
}

/// Pick the spelling of `pc` that sits on `expected`.
///
/// Falls back to the canonical spelling when no table entry uses the
/// letter (e.g. pitch class 8 on F would need a triple sharp).
pub fn resolve_spelling(pc: PitchClass, expected: Letter) -> Spelling {
    let candidates = spellings_for(pc);
    match candidates.iter().find(|s| s.letter() == expected) {
        Some(&spelling) => spelling,
        None => {
            let fallback = candidates[0];
            tracing::debug!(
                pitch_class = pc.value(),
                letter = %expected,
                fallback = %fallback,
                "no spelling on requested letter"
            );
            fallback
        }
    }
}
