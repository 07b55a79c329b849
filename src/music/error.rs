// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Errors raised when parsing music-theory input.

/// Errors from parsing notes, modes, chord qualities, chord sizes and
/// roman numerals.
///
/// Derivation on typed values never fails; these only surface at the
/// string boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TheoryError {
    #[error("unknown note spelling: {0:?}")]
    UnknownSpelling(String),

    #[error("unknown scale mode: {0:?}")]
    UnknownMode(String),

    #[error("unknown chord quality: {0:?}")]
    UnknownQuality(String),

    #[error("invalid roman numeral: {0:?}")]
    InvalidNumeral(String),

    #[error("unknown chord size: {0:?} (expected triads or sevenths)")]
    UnknownChordSize(String),
}

pub type Result<T> = std::result::Result<T, TheoryError>;
