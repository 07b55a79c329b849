// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory engine.
//!
//! This module provides enharmonically correct spelling of scales and
//! chords, interval naming, and roman-numeral chord resolution. Everything
//! here is a pure function over immutable tables.

pub mod chord;
pub mod error;
pub mod harmony;
pub mod interval;
pub mod pitch;
pub mod scale;

pub use chord::{chord_tones, parse_roman, resolve_quality, Chord, ChordQuality, RomanNumeral};
pub use error::{Result, TheoryError};
pub use harmony::{
    avoid_degrees, chord_on_numeral, diatonic_numerals, harmonic_functions, harmonize, modal_names,
    modal_scale, secondary_dominant, ChordSize, DiatonicChord, HarmonicFunction, ModalScale,
    SecondaryDominant,
};
pub use interval::{interval_name, Interval, IntervalName};
pub use pitch::{resolve_spelling, spellings_for, Accidental, Letter, PitchClass, Spelling};
pub use scale::{build_scale, Scale, ScaleMode};
