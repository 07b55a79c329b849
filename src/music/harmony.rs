// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Diatonic harmony: the chord built on each degree of a scale.
//!
//! Each degree also carries its harmonic function, the mode of the parent
//! scale that starts on it (with the notes to avoid holding over the chord)
//! and the secondary dominant that leads to it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::chord::{parse_roman, resolve_quality, Chord, ChordQuality};
use super::error::TheoryError;
use super::pitch::{resolve_spelling, Spelling};
use super::scale::{Scale, ScaleMode, SCALE_LENGTH};

/// Mixolydian offsets, the scale over a dominant resolving to a major chord
const MIXOLYDIAN: [u8; SCALE_LENGTH] = [0, 2, 4, 5, 7, 9, 10];

/// Mixolydian with a flat 9th and 13th, for a dominant resolving to minor
const MIXOLYDIAN_FLAT9_FLAT13: [u8; SCALE_LENGTH] = [0, 1, 4, 5, 7, 8, 10];

/// The 4th over a dominant seventh clashes with its 3rd
const DOMINANT_AVOIDS: &[usize] = &[3];

/// Triads or seventh chords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChordSize {
    Triads,
    #[default]
    Sevenths,
}

impl FromStr for ChordSize {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "3" | "triad" | "triads" => Ok(ChordSize::Triads),
            "7" | "seventh" | "sevenths" => Ok(ChordSize::Sevenths),
            _ => Err(TheoryError::UnknownChordSize(s.to_string())),
        }
    }
}

impl fmt::Display for ChordSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChordSize::Triads => write!(f, "triads"),
            ChordSize::Sevenths => write!(f, "sevenths"),
        }
    }
}

/// Roman numerals of the diatonic chords of a mode, degree I first
pub fn diatonic_numerals(mode: ScaleMode, size: ChordSize) -> [&'static str; SCALE_LENGTH] {
    match (mode, size) {
        (ScaleMode::Major, ChordSize::Sevenths) => {
            ["Imaj7", "IIm7", "IIIm7", "IVmaj7", "V7", "VIm7", "VIIm7(b5)"]
        }
        (ScaleMode::NaturalMinor, ChordSize::Sevenths) => {
            ["Im7", "IIm7(b5)", "IIImaj7", "IVm7", "Vm7", "VImaj7", "VII7"]
        }
        (ScaleMode::HarmonicMinor, ChordSize::Sevenths) => {
            ["ImM7", "IIm7(b5)", "IIImaj7#5", "IVm7", "V7", "VImaj7", "VIIdim7"]
        }
        (ScaleMode::MelodicMinor, ChordSize::Sevenths) => {
            ["ImM7", "IIm7", "IIImaj7#5", "IV7", "V7", "VIm7(b5)", "VIIm7(b5)"]
        }
        (ScaleMode::Major, ChordSize::Triads) => ["I", "ii", "iii", "IV", "V", "vi", "vii°"],
        (ScaleMode::NaturalMinor, ChordSize::Triads) => ["i", "ii°", "III", "iv", "v", "VI", "VII"],
        (ScaleMode::HarmonicMinor, ChordSize::Triads) => {
            ["i", "ii°", "III+", "iv", "V", "VI", "vii°"]
        }
        (ScaleMode::MelodicMinor, ChordSize::Triads) => {
            ["i", "ii", "III+", "IV", "V", "vi°", "vii°"]
        }
    }
}

/// Harmonic function of a diatonic chord
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HarmonicFunction {
    Tonic,
    Predominant,
    Dominant,
    /// Borrowed both ways, as the VI of harmonic minor
    PredominantOrTonic,
}

impl HarmonicFunction {
    /// Short label (T, PD, D, PD/T)
    pub fn code(self) -> &'static str {
        match self {
            HarmonicFunction::Tonic => "T",
            HarmonicFunction::Predominant => "PD",
            HarmonicFunction::Dominant => "D",
            HarmonicFunction::PredominantOrTonic => "PD/T",
        }
    }
}

impl fmt::Display for HarmonicFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Function of each degree of a mode, degree I first
pub fn harmonic_functions(mode: ScaleMode) -> [HarmonicFunction; SCALE_LENGTH] {
    use HarmonicFunction::{
        Dominant as D, Predominant as PD, PredominantOrTonic as PDT, Tonic as T,
    };

    match mode {
        ScaleMode::Major => [T, PD, T, PD, D, T, D],
        ScaleMode::NaturalMinor => [T, PD, T, PD, D, T, PD],
        ScaleMode::HarmonicMinor => [T, PD, T, PD, D, PDT, D],
        ScaleMode::MelodicMinor => [T, PD, T, PD, D, PD, D],
    }
}

/// Name of the mode that starts on each degree of a parent scale
pub fn modal_names(mode: ScaleMode) -> [&'static str; SCALE_LENGTH] {
    match mode {
        ScaleMode::Major => [
            "Ionian", "Dorian", "Phrygian", "Lydian", "Mixolydian", "Aeolian", "Locrian",
        ],
        ScaleMode::NaturalMinor => [
            "Aeolian", "Locrian", "Ionian", "Dorian", "Phrygian", "Lydian", "Mixolydian",
        ],
        ScaleMode::HarmonicMinor => [
            "Harmonic Minor",
            "Locrian nat6",
            "Ionian #5",
            "Dorian #4",
            "Phrygian Dom",
            "Lydian #2",
            "Altered bb7",
        ],
        ScaleMode::MelodicMinor => [
            "Melodic Minor",
            "Dorian b2",
            "Lydian Aug",
            "Lydian Dom",
            "Mixolydian b6",
            "Locrian nat2",
            "Altered Scale",
        ],
    }
}

/// Avoid notes of each degree's mode, as zero-based positions within that
/// mode (the Ionian 4th is `[3]`)
pub fn avoid_degrees(mode: ScaleMode) -> [&'static [usize]; SCALE_LENGTH] {
    match mode {
        ScaleMode::Major => [&[3], &[], &[1, 5], &[], &[3], &[5], &[1]],
        ScaleMode::NaturalMinor => [&[5], &[1], &[3], &[], &[1, 5], &[], &[3]],
        ScaleMode::HarmonicMinor => [&[5], &[1], &[3, 5], &[], &[1, 3, 5], &[], &[1, 2]],
        ScaleMode::MelodicMinor => [&[], &[1], &[5], &[], &[3], &[], &[1, 3]],
    }
}

/// A named seven-note scale with the positions to avoid over its chord
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalScale {
    pub name: &'static str,
    pub notes: [Spelling; SCALE_LENGTH],
    /// Zero-based positions in `notes`
    pub avoid: &'static [usize],
}

impl ModalScale {
    /// The notes at the avoid positions
    pub fn avoid_notes(&self) -> Vec<Spelling> {
        self.avoid.iter().map(|&i| self.notes[i]).collect()
    }
}

impl fmt::Display for ModalScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.notes[0], self.name)
    }
}

/// The mode of `scale` that starts on a degree, `index` being zero-based
/// and taken modulo 7
pub fn modal_scale(scale: &Scale, index: usize) -> ModalScale {
    let index = index % SCALE_LENGTH;
    let parent = scale.notes();
    ModalScale {
        name: modal_names(scale.mode())[index],
        notes: std::array::from_fn(|j| parent[(index + j) % SCALE_LENGTH]),
        avoid: avoid_degrees(scale.mode())[index],
    }
}

/// The dominant seventh a fifth above a diatonic chord, and its scale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecondaryDominant {
    /// Label such as "V/ii"
    pub label: String,
    pub chord: Chord,
    pub scale: ModalScale,
}

impl fmt::Display for SecondaryDominant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label, self.chord)
    }
}

/// Secondary dominant of the chord on a degree (`index` zero-based, taken
/// modulo 7).
///
/// The root sits a perfect fifth and four letters above the target. A minor
/// or diminished target gets Mixolydian b9 b13, a major or augmented one
/// plain Mixolydian.
pub fn secondary_dominant(scale: &Scale, index: usize) -> SecondaryDominant {
    let index = index % SCALE_LENGTH;
    let target = scale.notes()[index];
    let target_numeral = diatonic_numerals(scale.mode(), ChordSize::Triads)[index];
    let resolves_to_minor = target_numeral.starts_with(|c: char| c.is_ascii_lowercase());

    let root = resolve_spelling(target.pitch_class().transpose(7), target.letter().step(4));
    let (name, offsets) = if resolves_to_minor {
        ("Mixolydian b9 b13", MIXOLYDIAN_FLAT9_FLAT13)
    } else {
        ("Mixolydian", MIXOLYDIAN)
    };
    let notes = std::array::from_fn(|i| {
        resolve_spelling(
            root.pitch_class().transpose(offsets[i] as i32),
            root.letter().step(i),
        )
    });

    SecondaryDominant {
        label: format!("V/{}", target_numeral),
        chord: Chord::new(root, ChordQuality::Dominant7),
        scale: ModalScale {
            name,
            notes,
            avoid: DOMINANT_AVOIDS,
        },
    }
}

/// A chord on one degree of a scale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiatonicChord {
    /// Scale degree (1-7)
    pub degree: usize,
    /// Roman numeral as listed for the mode
    pub numeral: &'static str,
    pub chord: Chord,
    pub function: HarmonicFunction,
    /// Mode of the parent scale starting on this degree
    pub modal: ModalScale,
    pub secondary: SecondaryDominant,
}

impl fmt::Display for DiatonicChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.numeral, self.chord)
    }
}

/// Build the chord named by a roman-numeral token on a scale
pub fn chord_on_numeral(scale: &Scale, token: &str) -> Result<Chord, TheoryError> {
    let (numeral, _) = parse_roman(token)?;
    let root = scale.notes()[numeral.index()];
    Ok(Chord::new(root, resolve_quality(token)?))
}

/// Harmonize a scale: one spelled chord per degree
pub fn harmonize(scale: &Scale, size: ChordSize) -> Result<Vec<DiatonicChord>, TheoryError> {
    let functions = harmonic_functions(scale.mode());
    diatonic_numerals(scale.mode(), size)
        .into_iter()
        .enumerate()
        .map(|(i, numeral)| {
            Ok(DiatonicChord {
                degree: i + 1,
                numeral,
                chord: chord_on_numeral(scale, numeral)?,
                function: functions[i],
                modal: modal_scale(scale, i),
                secondary: secondary_dominant(scale, i),
            })
        })
        .collect()
}
