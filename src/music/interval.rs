// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Interval naming between two spelled notes.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::pitch::Spelling;

/// Semitone count of the tritone
const TRITONE: u8 = 6;

/// Canonical interval names.
///
/// Unison and octave share a pitch class, so the engine reports them
/// together as `P1/P8`. The tritone is named by letter distance when the
/// spelling allows it, otherwise `A4/d5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntervalName {
    UnisonOrOctave,
    MinorSecond,
    MajorSecond,
    MinorThird,
    MajorThird,
    PerfectFourth,
    AugmentedFourth,
    DiminishedFifth,
    Tritone,
    PerfectFifth,
    MinorSixth,
    MajorSixth,
    MinorSeventh,
    MajorSeventh,
    Octave,
}

impl IntervalName {
    /// Name for a plain semitone count (0-12). The tritone comes back as
    /// the joint `A4/d5`; spelled notes can narrow it, see [`interval_name`].
    pub fn from_semitones(semitones: u8) -> Option<Self> {
        match semitones {
            0..=11 => Some(Self::within_octave(semitones)),
            12 => Some(IntervalName::Octave),
            _ => None,
        }
    }

    /// Name for a semitone count reduced to one octave
    fn within_octave(semitones: u8) -> Self {
        match semitones % 12 {
            0 => IntervalName::UnisonOrOctave,
            1 => IntervalName::MinorSecond,
            2 => IntervalName::MajorSecond,
            3 => IntervalName::MinorThird,
            4 => IntervalName::MajorThird,
            5 => IntervalName::PerfectFourth,
            6 => IntervalName::Tritone,
            7 => IntervalName::PerfectFifth,
            8 => IntervalName::MinorSixth,
            9 => IntervalName::MajorSixth,
            10 => IntervalName::MinorSeventh,
            _ => IntervalName::MajorSeventh,
        }
    }

    /// Semitone size of the interval
    pub fn semitones(self) -> u8 {
        match self {
            IntervalName::UnisonOrOctave => 0,
            IntervalName::MinorSecond => 1,
            IntervalName::MajorSecond => 2,
            IntervalName::MinorThird => 3,
            IntervalName::MajorThird => 4,
            IntervalName::PerfectFourth => 5,
            IntervalName::AugmentedFourth
            | IntervalName::DiminishedFifth
            | IntervalName::Tritone => TRITONE,
            IntervalName::PerfectFifth => 7,
            IntervalName::MinorSixth => 8,
            IntervalName::MajorSixth => 9,
            IntervalName::MinorSeventh => 10,
            IntervalName::MajorSeventh => 11,
            IntervalName::Octave => 12,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            IntervalName::UnisonOrOctave => "P1/P8",
            IntervalName::MinorSecond => "m2",
            IntervalName::MajorSecond => "M2",
            IntervalName::MinorThird => "m3",
            IntervalName::MajorThird => "M3",
            IntervalName::PerfectFourth => "P4",
            IntervalName::AugmentedFourth => "A4",
            IntervalName::DiminishedFifth => "d5",
            IntervalName::Tritone => "A4/d5",
            IntervalName::PerfectFifth => "P5",
            IntervalName::MinorSixth => "m6",
            IntervalName::MajorSixth => "M6",
            IntervalName::MinorSeventh => "m7",
            IntervalName::MajorSeventh => "M7",
            IntervalName::Octave => "P8",
        }
    }

    /// Individual labels of a joint name ("A4/d5" -> ["A4", "d5"]).
    ///
    /// A caller checking a typed answer should accept any of these.
    pub fn labels(self) -> Vec<&'static str> {
        self.as_str().split('/').collect()
    }

    /// True for the joint labels `P1/P8` and `A4/d5`
    pub fn is_ambiguous(self) -> bool {
        matches!(self, IntervalName::UnisonOrOctave | IntervalName::Tritone)
    }
}

impl fmt::Display for IntervalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A semitone distance paired with its name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    semitones: u8,
    name: IntervalName,
}

impl Interval {
    /// Ascending interval from `lower` to `upper` within one octave
    pub fn between(lower: Spelling, upper: Spelling) -> Self {
        let semitones = lower.pitch_class().semitones_to(upper.pitch_class());
        let name = match semitones {
            TRITONE => name_tritone(lower, upper),
            _ => IntervalName::within_octave(semitones),
        };
        Self { semitones, name }
    }

    pub fn semitones(&self) -> u8 {
        self.semitones
    }

    pub fn name(&self) -> IntervalName {
        self.name
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Number of letter names spanned, counting both ends (C to F = 4)
fn letter_distance(lower: Spelling, upper: Spelling) -> usize {
    (upper.letter().index() + 7 - lower.letter().index()) % 7 + 1
}

fn name_tritone(lower: Spelling, upper: Spelling) -> IntervalName {
    match letter_distance(lower, upper) {
        4 => IntervalName::AugmentedFourth,
        5 => IntervalName::DiminishedFifth,
        distance => {
            tracing::debug!(%lower, %upper, distance, "tritone spelled outside a 4th/5th");
            IntervalName::Tritone
        }
    }
}

/// Name the interval from `lower` up to `upper`
pub fn interval_name(lower: Spelling, upper: Spelling) -> IntervalName {
    Interval::between(lower, upper).name()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(a: &str, b: &str) -> IntervalName {
        interval_name(a.parse().unwrap(), b.parse().unwrap())
    }

    #[test]
    fn test_simple_intervals() {
        assert_eq!(name("C", "D"), IntervalName::MajorSecond);
        assert_eq!(name("C", "Eb"), IntervalName::MinorThird);
        assert_eq!(name("C", "E"), IntervalName::MajorThird);
        assert_eq!(name("C", "F"), IntervalName::PerfectFourth);
        assert_eq!(name("C", "G"), IntervalName::PerfectFifth);
        assert_eq!(name("C", "B"), IntervalName::MajorSeventh);
        assert_eq!(name("E", "F"), IntervalName::MinorSecond);
    }

    #[test]
    fn test_descending_pair_wraps() {
        // G up to C is a 4th, not a negative 5th
        assert_eq!(name("G", "C"), IntervalName::PerfectFourth);
        assert_eq!(name("B", "C"), IntervalName::MinorSecond);
    }

    #[test]
    fn test_unison_is_joint_label() {
        assert_eq!(name("C", "C"), IntervalName::UnisonOrOctave);
        assert_eq!(name("C", "B#"), IntervalName::UnisonOrOctave);
        assert_eq!(name("F#", "F#").to_string(), "P1/P8");
    }

    #[test]
    fn test_tritone_by_letter_distance() {
        assert_eq!(name("C", "F#"), IntervalName::AugmentedFourth);
        assert_eq!(name("C", "Gb"), IntervalName::DiminishedFifth);
        assert_eq!(name("F", "B"), IntervalName::AugmentedFourth);
        assert_eq!(name("B", "F"), IntervalName::DiminishedFifth);
    }

    #[test]
    fn test_tritone_unusual_spelling() {
        // A 3rd's letters spanning a tritone
        assert_eq!(name("C", "Ex"), IntervalName::Tritone);
        assert_eq!(name("Fbb", "A"), IntervalName::Tritone);
        assert_eq!(name("Dbb", "Ex"), IntervalName::Tritone);
    }

    #[test]
    fn test_semitone_reverse_lookup() {
        for semitones in 0..=12 {
            let named = IntervalName::from_semitones(semitones).unwrap();
            assert_eq!(named.semitones(), semitones);
        }
        assert_eq!(IntervalName::from_semitones(13), None);
    }

    #[test]
    fn test_within_octave_folds_compound_counts() {
        assert_eq!(IntervalName::within_octave(12), IntervalName::UnisonOrOctave);
        assert_eq!(IntervalName::within_octave(19), IntervalName::PerfectFifth);
        assert_eq!(IntervalName::within_octave(11), IntervalName::MajorSeventh);
    }

    #[test]
    fn test_interval_struct() {
        let interval = Interval::between("D".parse().unwrap(), "Ab".parse().unwrap());
        assert_eq!(interval.semitones(), 6);
        assert_eq!(interval.name(), IntervalName::DiminishedFifth);
        assert_eq!(interval.to_string(), "d5");
    }

    #[test]
    fn test_labels() {
        assert_eq!(IntervalName::Tritone.labels(), ["A4", "d5"]);
        assert_eq!(IntervalName::UnisonOrOctave.labels(), ["P1", "P8"]);
        assert_eq!(IntervalName::MinorSixth.labels(), ["m6"]);
        assert!(IntervalName::Tritone.is_ambiguous());
        assert!(!IntervalName::AugmentedFourth.is_ambiguous());
    }
}
