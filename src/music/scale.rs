// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale modes and spelled diatonic scales.
//!
//! Scales are built degree by degree: the mode's offset table gives the
//! pitch class and the tonic's letter, advanced one step per degree, gives
//! the letter. The two together pick the spelling, so C harmonic minor ends
//! on B (leading tone) rather than Cb.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::TheoryError;
use super::pitch::{resolve_spelling, PitchClass, Spelling};

/// Number of notes in a diatonic scale
pub const SCALE_LENGTH: usize = 7;

/// Scale modes supported by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleMode {
    Major,
    #[serde(alias = "minor")]
    NaturalMinor,
    HarmonicMinor,
    MelodicMinor, // Ascending form
}

impl ScaleMode {
    pub const ALL: [ScaleMode; 4] = [
        ScaleMode::Major,
        ScaleMode::NaturalMinor,
        ScaleMode::HarmonicMinor,
        ScaleMode::MelodicMinor,
    ];

    /// Semitone offsets from the tonic, octave included (first 7 form the scale)
    pub fn offsets(self) -> [u8; 8] {
        match self {
            ScaleMode::Major => [0, 2, 4, 5, 7, 9, 11, 12],
            ScaleMode::NaturalMinor => [0, 2, 3, 5, 7, 8, 10, 12],
            ScaleMode::HarmonicMinor => [0, 2, 3, 5, 7, 8, 11, 12],
            ScaleMode::MelodicMinor => [0, 2, 3, 5, 7, 9, 11, 12],
        }
    }

    /// Get a human-readable name for this mode
    pub fn name(self) -> &'static str {
        match self {
            ScaleMode::Major => "Major",
            ScaleMode::NaturalMinor => "Natural Minor",
            ScaleMode::HarmonicMinor => "Harmonic Minor",
            ScaleMode::MelodicMinor => "Melodic Minor",
        }
    }

    /// Get the parallel mode (major <-> minor)
    pub fn parallel(self) -> Self {
        match self {
            ScaleMode::Major => ScaleMode::NaturalMinor,
            _ => ScaleMode::Major,
        }
    }

    pub fn is_minor(self) -> bool {
        self != ScaleMode::Major
    }
}

impl FromStr for ScaleMode {
    type Err = TheoryError;

    /// Parse a mode name ("Harmonic Minor", "harmonic_minor", "aeolian", ...)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-', '_'], "");
        match normalized.as_str() {
            "major" | "ionian" => Ok(ScaleMode::Major),
            "minor" | "naturalminor" | "aeolian" => Ok(ScaleMode::NaturalMinor),
            "harmonicminor" => Ok(ScaleMode::HarmonicMinor),
            "melodicminor" => Ok(ScaleMode::MelodicMinor),
            _ => Err(TheoryError::UnknownMode(s.to_string())),
        }
    }
}

impl fmt::Display for ScaleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A spelled seven-note scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scale {
    tonic: Spelling,
    mode: ScaleMode,
    notes: [Spelling; SCALE_LENGTH],
}

impl Scale {
    /// Create a new scale from tonic and mode
    pub fn new(tonic: Spelling, mode: ScaleMode) -> Self {
        let base = tonic.pitch_class();
        let offsets = mode.offsets();
        let notes = std::array::from_fn(|degree| {
            let pc = base.transpose(offsets[degree] as i32);
            let letter = tonic.letter().step(degree);
            resolve_spelling(pc, letter)
        });

        Self { tonic, mode, notes }
    }

    /// Parse a scale from strings (e.g., "Eb", "harmonic minor")
    pub fn parse(tonic: &str, mode: &str) -> Result<Self, TheoryError> {
        let tonic: Spelling = tonic.parse()?;
        let mode: ScaleMode = mode.parse()?;
        Ok(Scale::new(tonic, mode))
    }

    pub fn tonic(&self) -> Spelling {
        self.tonic
    }

    pub fn mode(&self) -> ScaleMode {
        self.mode
    }

    /// Get the notes in scale-degree order
    pub fn notes(&self) -> &[Spelling; SCALE_LENGTH] {
        &self.notes
    }

    /// Check if this exact spelling is in the scale (Db is not in C# major)
    pub fn contains(&self, note: Spelling) -> bool {
        self.notes.contains(&note)
    }

    /// Check if any scale note sounds at this pitch class
    pub fn contains_pitch_class(&self, pc: PitchClass) -> bool {
        self.notes.iter().any(|n| n.pitch_class() == pc)
    }

    /// Get the scale degree (1-based) for a spelling, if it's in the scale
    pub fn degree_of(&self, note: Spelling) -> Option<usize> {
        self.notes.iter().position(|&n| n == note).map(|i| i + 1)
    }

    /// Get the note at a given scale degree (1-based)
    pub fn note_at_degree(&self, degree: usize) -> Option<Spelling> {
        if degree == 0 || degree > SCALE_LENGTH {
            return None;
        }
        Some(self.notes[degree - 1])
    }

    /// Get the parallel scale (same tonic, major <-> minor)
    pub fn parallel(&self) -> Scale {
        Scale::new(self.tonic, self.mode.parallel())
    }

    /// Get the relative scale (e.g., C major -> A minor, Eb minor -> Gb major).
    ///
    /// Only major and natural minor have a relative; the new tonic is the
    /// spelled 6th or 3rd degree, so letters carry over.
    pub fn relative(&self) -> Option<Scale> {
        match self.mode {
            ScaleMode::Major => Some(Scale::new(self.notes[5], ScaleMode::NaturalMinor)),
            ScaleMode::NaturalMinor => Some(Scale::new(self.notes[2], ScaleMode::Major)),
            _ => None,
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tonic, self.mode)
    }
}

/// Build the spelled scale for a mode and tonic
pub fn build_scale(mode: ScaleMode, tonic: Spelling) -> Scale {
    Scale::new(tonic, mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::pitch::Letter;

    fn names(scale: &Scale) -> Vec<String> {
        scale.notes().iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_mode_offsets() {
        for mode in ScaleMode::ALL {
            let offsets = mode.offsets();
            assert_eq!(offsets[0], 0);
            assert_eq!(offsets[7], 12);
            assert!(offsets.windows(2).all(|w| w[0] < w[1]));
        }
        assert_eq!(ScaleMode::HarmonicMinor.offsets()[6], 11);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("major".parse(), Ok(ScaleMode::Major));
        assert_eq!("Minor".parse(), Ok(ScaleMode::NaturalMinor));
        assert_eq!("Natural Minor".parse(), Ok(ScaleMode::NaturalMinor));
        assert_eq!("harmonic_minor".parse(), Ok(ScaleMode::HarmonicMinor));
        assert_eq!("melodic-minor".parse(), Ok(ScaleMode::MelodicMinor));
        assert_eq!(
            "dorian".parse::<ScaleMode>(),
            Err(TheoryError::UnknownMode("dorian".to_string()))
        );
    }

    #[test]
    fn test_scale_notes() {
        let c_major = Scale::parse("C", "major").unwrap();
        assert_eq!(names(&c_major), ["C", "D", "E", "F", "G", "A", "B"]);

        let a_minor = Scale::parse("A", "minor").unwrap();
        assert_eq!(names(&a_minor), ["A", "B", "C", "D", "E", "F", "G"]);
    }

    #[test]
    fn test_harmonic_minor_leading_tone() {
        let c = Scale::parse("C", "harmonic minor").unwrap();
        assert_eq!(names(&c), ["C", "D", "Eb", "F", "G", "Ab", "B"]);

        let g_sharp = Scale::parse("G#", "harmonic minor").unwrap();
        assert_eq!(names(&g_sharp), ["G#", "A#", "B", "C#", "D#", "E", "Fx"]);
    }

    #[test]
    fn test_melodic_minor() {
        let a = Scale::parse("A", "melodic minor").unwrap();
        assert_eq!(names(&a), ["A", "B", "C", "D", "E", "F#", "G#"]);

        let d_sharp = Scale::parse("D#", "melodic minor").unwrap();
        assert_eq!(names(&d_sharp), ["D#", "E#", "F#", "G#", "A#", "B#", "Cx"]);
    }

    #[test]
    fn test_sharp_and_flat_keys() {
        let f_sharp = Scale::parse("F#", "major").unwrap();
        assert_eq!(names(&f_sharp), ["F#", "G#", "A#", "B", "C#", "D#", "E#"]);

        let g_flat = Scale::parse("Gb", "major").unwrap();
        assert_eq!(names(&g_flat), ["Gb", "Ab", "Bb", "Cb", "Db", "Eb", "F"]);

        let e_flat_minor = Scale::parse("Eb", "natural minor").unwrap();
        assert_eq!(names(&e_flat_minor), ["Eb", "F", "Gb", "Ab", "Bb", "Cb", "Db"]);
    }

    #[test]
    fn test_letters_follow_tonic() {
        let scale = Scale::parse("Ab", "harmonic minor").unwrap();
        let letters: Vec<Letter> = scale.notes().iter().map(|n| n.letter()).collect();
        assert_eq!(
            letters,
            [Letter::A, Letter::B, Letter::C, Letter::D, Letter::E, Letter::F, Letter::G]
        );
    }

    #[test]
    fn test_scale_contains() {
        let c_sharp = Scale::parse("C#", "major").unwrap();
        assert!(c_sharp.contains("E#".parse().unwrap()));
        assert!(!c_sharp.contains("F".parse().unwrap()));
        assert!(c_sharp.contains_pitch_class(PitchClass::new(5)));
        assert!(!c_sharp.contains_pitch_class(PitchClass::new(2)));
    }

    #[test]
    fn test_scale_degree() {
        let c_major = Scale::parse("C", "major").unwrap();
        assert_eq!(c_major.degree_of("C".parse().unwrap()), Some(1));
        assert_eq!(c_major.degree_of("B".parse().unwrap()), Some(7));
        assert_eq!(c_major.degree_of("Cb".parse().unwrap()), None);
        assert_eq!(c_major.note_at_degree(5), Some("G".parse().unwrap()));
        assert_eq!(c_major.note_at_degree(0), None);
        assert_eq!(c_major.note_at_degree(8), None);
    }

    #[test]
    fn test_scale_relative() {
        let c_major = Scale::parse("C", "major").unwrap();
        let relative = c_major.relative().unwrap();
        assert_eq!(relative.tonic().to_string(), "A");
        assert_eq!(relative.mode(), ScaleMode::NaturalMinor);

        let e_flat_minor = Scale::parse("Eb", "minor").unwrap();
        let relative = e_flat_minor.relative().unwrap();
        assert_eq!(relative.tonic().to_string(), "Gb");
        assert_eq!(relative.mode(), ScaleMode::Major);

        assert!(Scale::parse("C", "harmonic minor").unwrap().relative().is_none());
    }

    #[test]
    fn test_scale_parallel() {
        let c_major = Scale::parse("C", "major").unwrap();
        let parallel = c_major.parallel();
        assert_eq!(parallel.tonic(), c_major.tonic());
        assert_eq!(parallel.mode(), ScaleMode::NaturalMinor);
        assert_eq!(
            Scale::parse("C", "melodic minor").unwrap().parallel().mode(),
            ScaleMode::Major
        );
    }

    #[test]
    fn test_scale_display() {
        let scale = Scale::parse("Bb", "harmonic_minor").unwrap();
        assert_eq!(scale.to_string(), "Bb Harmonic Minor");
    }

    #[test]
    fn test_scale_parse_errors() {
        assert!(matches!(
            Scale::parse("H", "major"),
            Err(TheoryError::UnknownSpelling(_))
        ));
        assert!(matches!(
            Scale::parse("C", "lydian"),
            Err(TheoryError::UnknownMode(_))
        ));
    }
}
