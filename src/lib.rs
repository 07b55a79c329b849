// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Enharmonic: a music theory calculator that spells scales and chords on
//! the right letters and names intervals between spelled notes.

pub mod config;
pub mod music;

pub use music::{
    build_scale, chord_tones, harmonize, interval_name, resolve_quality, resolve_spelling,
    secondary_dominant, ChordQuality, ChordSize, IntervalName, PitchClass, Scale, ScaleMode,
    Spelling, TheoryError,
};
