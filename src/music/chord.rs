// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord qualities, spelled chord tones and roman-numeral resolution.
//!
//! Chords are stacked thirds: whatever the quality, the 3rd, 5th and 7th
//! sit two, four and six letters above the root. Spelling each tone on
//! that letter is what turns D-F-G#-C into D-F-Ab-C.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::TheoryError;
use super::pitch::{resolve_spelling, Spelling};

/// Letter steps above the root for root, 3rd, 5th and 7th
const STACKED_THIRD_STEPS: [usize; 4] = [0, 2, 4, 6];

/// Chord quality catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChordQuality {
    MajorTriad,
    MinorTriad,
    DiminishedTriad,
    AugmentedTriad,
    Major7,
    Minor7,
    Dominant7,
    HalfDiminished7,
    Diminished7,
    MinorMajor7,
    AugmentedMajor7,
}

impl ChordQuality {
    pub const ALL: [ChordQuality; 11] = [
        ChordQuality::MajorTriad,
        ChordQuality::MinorTriad,
        ChordQuality::DiminishedTriad,
        ChordQuality::AugmentedTriad,
        ChordQuality::Major7,
        ChordQuality::Minor7,
        ChordQuality::Dominant7,
        ChordQuality::HalfDiminished7,
        ChordQuality::Diminished7,
        ChordQuality::MinorMajor7,
        ChordQuality::AugmentedMajor7,
    ];

    /// Semitone offsets from the root, in root/3rd/5th/7th order
    pub fn offsets(self) -> &'static [u8] {
        match self {
            ChordQuality::MajorTriad => &[0, 4, 7],
            ChordQuality::MinorTriad => &[0, 3, 7],
            ChordQuality::DiminishedTriad => &[0, 3, 6],
            ChordQuality::AugmentedTriad => &[0, 4, 8],
            ChordQuality::Major7 => &[0, 4, 7, 11],
            ChordQuality::Minor7 => &[0, 3, 7, 10],
            ChordQuality::Dominant7 => &[0, 4, 7, 10],
            ChordQuality::HalfDiminished7 => &[0, 3, 6, 10],
            ChordQuality::Diminished7 => &[0, 3, 6, 9],
            ChordQuality::MinorMajor7 => &[0, 3, 7, 11],
            ChordQuality::AugmentedMajor7 => &[0, 4, 8, 11],
        }
    }

    /// Canonical quality code
    pub fn code(self) -> &'static str {
        match self {
            ChordQuality::MajorTriad => "I",
            ChordQuality::MinorTriad => "i",
            ChordQuality::DiminishedTriad => "dim",
            ChordQuality::AugmentedTriad => "aug",
            ChordQuality::Major7 => "Maj7",
            ChordQuality::Minor7 => "m7",
            ChordQuality::Dominant7 => "7",
            ChordQuality::HalfDiminished7 => "m7(b5)",
            ChordQuality::Diminished7 => "dim7",
            ChordQuality::MinorMajor7 => "mM7",
            ChordQuality::AugmentedMajor7 => "Maj7#5",
        }
    }

    /// Suffix appended to the root in a chord symbol (C + "maj7")
    pub fn symbol_suffix(self) -> &'static str {
        match self {
            ChordQuality::MajorTriad => "",
            ChordQuality::MinorTriad => "m",
            ChordQuality::DiminishedTriad => "°",
            ChordQuality::AugmentedTriad => "+",
            ChordQuality::Major7 => "maj7",
            ChordQuality::Minor7 => "min7",
            ChordQuality::Dominant7 => "7",
            ChordQuality::HalfDiminished7 => "min7(b5)",
            ChordQuality::Diminished7 => "°7",
            ChordQuality::MinorMajor7 => "mM7",
            ChordQuality::AugmentedMajor7 => "maj7#5",
        }
    }

    pub fn is_seventh(self) -> bool {
        self.offsets().len() == 4
    }
}

impl FromStr for ChordQuality {
    type Err = TheoryError;

    /// Parse a quality code ("Maj7", "m7(b5)", "I", ...) or the suffix a
    /// chord symbol prints for it ("maj7", "min7(b5)", "°", ...)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = match s.trim() {
            "ø" | "ø7" => "m7(b5)",
            other => other,
        };
        if code.is_empty() {
            return Err(TheoryError::UnknownQuality(s.to_string()));
        }
        ChordQuality::ALL
            .into_iter()
            .find(|q| q.code() == code || q.symbol_suffix() == code)
            .ok_or_else(|| TheoryError::UnknownQuality(s.to_string()))
    }
}

impl fmt::Display for ChordQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Spell the tones of a chord in root/3rd/5th/7th order
pub fn chord_tones(root: Spelling, quality: ChordQuality) -> Vec<Spelling> {
    let base = root.pitch_class();
    quality
        .offsets()
        .iter()
        .zip(STACKED_THIRD_STEPS)
        .map(|(&offset, step)| {
            let pc = base.transpose(offset as i32);
            resolve_spelling(pc, root.letter().step(step))
        })
        .collect()
}

/// A spelled chord
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chord {
    root: Spelling,
    quality: ChordQuality,
    tones: Vec<Spelling>,
}

impl Chord {
    pub fn new(root: Spelling, quality: ChordQuality) -> Self {
        Self {
            root,
            quality,
            tones: chord_tones(root, quality),
        }
    }

    /// Parse a chord from root and quality code strings
    pub fn parse(root: &str, quality: &str) -> Result<Self, TheoryError> {
        Ok(Chord::new(root.parse()?, quality.parse()?))
    }

    pub fn root(&self) -> Spelling {
        self.root
    }

    pub fn quality(&self) -> ChordQuality {
        self.quality
    }

    pub fn tones(&self) -> &[Spelling] {
        &self.tones
    }

    /// Chord symbol such as "Cmaj7" or "Bmin7(b5)"
    pub fn symbol(&self) -> String {
        format!("{}{}", self.root, self.quality.symbol_suffix())
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A parsed scale-degree numeral (I-VII), case preserved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RomanNumeral {
    degree: usize,
    upper: bool,
}

impl RomanNumeral {
    /// Scale degree (1-7)
    pub fn degree(self) -> usize {
        self.degree
    }

    /// Zero-based index into a scale's notes (0-6)
    pub fn index(self) -> usize {
        self.degree - 1
    }

    /// Upper case marks a major triad, lower case a minor one
    pub fn is_upper(self) -> bool {
        self.upper
    }
}

/// Split a token like "IIm7(b5)" into its numeral and quality suffix
pub fn parse_roman(token: &str) -> Result<(RomanNumeral, &str), TheoryError> {
    let token = token.trim();
    let split = token
        .find(|c: char| !matches!(c, 'I' | 'V' | 'X' | 'i' | 'v' | 'x'))
        .unwrap_or(token.len());
    let (glyphs, suffix) = token.split_at(split);

    let upper = glyphs.chars().all(|c| c.is_ascii_uppercase());
    let lower = glyphs.chars().all(|c| c.is_ascii_lowercase());
    if !(upper || lower) {
        return Err(TheoryError::InvalidNumeral(token.to_string()));
    }

    let degree = match glyphs.to_ascii_uppercase().as_str() {
        "I" => 1,
        "II" => 2,
        "III" => 3,
        "IV" => 4,
        "V" => 5,
        "VI" => 6,
        "VII" => 7,
        _ => return Err(TheoryError::InvalidNumeral(token.to_string())),
    };

    Ok((RomanNumeral { degree, upper }, suffix))
}

/// Seventh-chord suffix patterns, checked in order, first substring match wins.
///
/// Each pattern precedes the shorter patterns it contains ("dim7" holds
/// "m7", "maj7#5" holds "maj7").
const SEVENTH_RULES: [(&str, ChordQuality); 8] = [
    ("maj7#5", ChordQuality::AugmentedMajor7),
    ("Maj7#5", ChordQuality::AugmentedMajor7),
    ("m7(b5)", ChordQuality::HalfDiminished7),
    ("mM7", ChordQuality::MinorMajor7),
    ("dim7", ChordQuality::Diminished7),
    ("maj7", ChordQuality::Major7),
    ("Maj7", ChordQuality::Major7),
    ("m7", ChordQuality::Minor7),
];

/// Strip display markup from a suffix ("$\text{dim7}$" -> "dim7").
///
/// Glyphs become the spelled-out patterns: "°7" -> "dim7", and the
/// half-diminished "ø7" or a bare "ø" -> "m7(b5)".
fn normalize_suffix(suffix: &str) -> String {
    let unwrapped = suffix
        .strip_prefix("$\\text{")
        .and_then(|s| s.strip_suffix("}$"))
        .unwrap_or(suffix);
    unwrapped
        .trim()
        .replace("°7", "dim7")
        .replace("ø7", "m7(b5)")
        .replace('ø', "m7(b5)")
}

/// Resolve a roman-numeral token ("V7", "IIm7(b5)", "vii°") to a chord quality.
///
/// A bare numeral is a major triad when upper case and a minor triad when
/// lower case; `°` and `+` mark diminished and augmented triads.
pub fn resolve_quality(token: &str) -> Result<ChordQuality, TheoryError> {
    let (numeral, suffix) = parse_roman(token)?;
    let suffix = normalize_suffix(suffix);

    let seventh = SEVENTH_RULES
        .iter()
        .find(|(pattern, _)| suffix.contains(pattern))
        .map(|&(_, quality)| quality);
    if let Some(quality) = seventh {
        return Ok(quality);
    }
    if suffix.contains('7') {
        return Ok(ChordQuality::Dominant7);
    }

    match suffix.as_str() {
        "" if numeral.is_upper() => Ok(ChordQuality::MajorTriad),
        "" => Ok(ChordQuality::MinorTriad),
        "°" | "dim" => Ok(ChordQuality::DiminishedTriad),
        "+" | "aug" => Ok(ChordQuality::AugmentedTriad),
        _ => Err(TheoryError::UnknownQuality(token.to_string())),
    }
}
