// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Integration tests for enharmonic
//!
//! These tests exercise the public API across scales, intervals and chords.

use std::collections::HashSet;

use enharmonic::music::{
    build_scale, chord_tones, diatonic_numerals, harmonize, interval_name, resolve_quality,
    secondary_dominant, spellings_for, ChordQuality, ChordSize, IntervalName, Letter, PitchClass,
    Scale, ScaleMode, Spelling,
};

/// One spelling per chromatic step, sharps for the black keys
const CHROMATIC_TONICS: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Flat-side tonics commonly used for minor and major keys
const FLAT_TONICS: [&str; 6] = ["Db", "Eb", "Gb", "Ab", "Bb", "F"];

fn sp(name: &str) -> Spelling {
    name.parse().unwrap()
}

fn all_spellings() -> Vec<Spelling> {
    (0..12)
        .flat_map(|pc| spellings_for(PitchClass::new(pc)).iter().copied())
        .collect()
}

fn names(notes: &[Spelling]) -> Vec<String> {
    notes.iter().map(|n| n.to_string()).collect()
}

/// Every mode on every chromatic tonic uses each letter once, in order
#[test]
fn test_scale_letters_rotate_from_tonic() {
    for mode in ScaleMode::ALL {
        for tonic in CHROMATIC_TONICS.iter().chain(FLAT_TONICS.iter()) {
            let tonic = sp(tonic);
            let scale = build_scale(mode, tonic);
            let notes = scale.notes();
            assert_eq!(notes.len(), 7);

            for (i, note) in notes.iter().enumerate() {
                assert_eq!(
                    note.letter(),
                    tonic.letter().step(i),
                    "degree {} of {}",
                    i + 1,
                    scale
                );
            }

            let letters: HashSet<Letter> = notes.iter().map(|n| n.letter()).collect();
            assert_eq!(letters.len(), 7, "repeated letter in {}", scale);
        }
    }
}

/// Spelled notes sound the pitch classes the mode's offsets call for
#[test]
fn test_scale_pitch_classes_match_offsets() {
    for mode in ScaleMode::ALL {
        for tonic in CHROMATIC_TONICS {
            let tonic = sp(tonic);
            let scale = Scale::new(tonic, mode);
            for (note, offset) in scale.notes().iter().zip(mode.offsets()) {
                assert_eq!(
                    note.pitch_class(),
                    tonic.pitch_class().transpose(offset as i32)
                );
            }
        }
    }
}

#[test]
fn test_harmonic_minor_spelling() {
    let scale = build_scale(ScaleMode::HarmonicMinor, sp("C"));
    assert_eq!(names(scale.notes()), ["C", "D", "Eb", "F", "G", "Ab", "B"]);
}

#[test]
fn test_unison_is_reflexive() {
    for spelling in all_spellings() {
        assert_eq!(interval_name(spelling, spelling), IntervalName::UnisonOrOctave);
        assert_eq!(interval_name(spelling, spelling).as_str(), "P1/P8");
    }
}

/// The semitone size of the named interval always matches the pitch classes
#[test]
fn test_interval_semitones_consistent() {
    let spellings = all_spellings();
    for &a in &spellings {
        for &b in &spellings {
            let expected = a.pitch_class().semitones_to(b.pitch_class());
            assert_eq!(interval_name(a, b).semitones(), expected, "{} -> {}", a, b);
        }
    }
}

#[test]
fn test_tritone_disambiguation() {
    assert_eq!(interval_name(sp("C"), sp("F#")).as_str(), "A4");
    assert_eq!(interval_name(sp("C"), sp("Gb")).as_str(), "d5");
    assert_eq!(interval_name(sp("Eb"), sp("A")).as_str(), "A4");
    assert_eq!(interval_name(sp("Eb"), sp("Bbb")).as_str(), "d5");
}

#[test]
fn test_chord_tones() {
    assert_eq!(
        names(&chord_tones(sp("C"), ChordQuality::Major7)),
        ["C", "E", "G", "B"]
    );
    assert_eq!(
        names(&chord_tones(sp("D"), ChordQuality::HalfDiminished7)),
        ["D", "F", "Ab", "C"]
    );
}

#[test]
fn test_chord_letters_step_by_thirds() {
    for quality in ChordQuality::ALL {
        for root in CHROMATIC_TONICS {
            let root = sp(root);
            let tones = chord_tones(root, quality);
            assert_eq!(tones.len(), quality.offsets().len());
            for (k, tone) in tones.iter().enumerate() {
                assert_eq!(tone.letter(), root.letter().step(2 * k), "{}{}", root, quality);
            }
        }
    }
}

#[test]
fn test_resolve_quality() {
    assert_eq!(resolve_quality("IIm7(b5)").unwrap().code(), "m7(b5)");
    assert_eq!(resolve_quality("I").unwrap().code(), "I");
    assert_eq!(resolve_quality("vi").unwrap().code(), "i");
}

/// Every diatonic chord is built from notes of its own scale
#[test]
fn test_harmonized_chords_stay_in_scale() {
    for mode in ScaleMode::ALL {
        for size in [ChordSize::Triads, ChordSize::Sevenths] {
            for tonic in CHROMATIC_TONICS {
                let scale = Scale::new(sp(tonic), mode);
                let chords = harmonize(&scale, size).unwrap();
                assert_eq!(chords.len(), 7);

                for diatonic in &chords {
                    assert_eq!(
                        diatonic.chord.root(),
                        scale.notes()[diatonic.degree - 1]
                    );
                    for tone in diatonic.chord.tones() {
                        assert!(
                            scale.contains(*tone),
                            "{} ({}) in {}: {} not in scale",
                            diatonic.numeral,
                            diatonic.chord,
                            scale,
                            tone
                        );
                    }
                }
            }
        }
    }
}

/// A secondary dominant sits a spelled perfect 5th above its target
#[test]
fn test_secondary_dominants_resolve_down_a_fifth() {
    for mode in ScaleMode::ALL {
        for tonic in CHROMATIC_TONICS {
            let scale = Scale::new(sp(tonic), mode);
            for (i, &target) in scale.notes().iter().enumerate() {
                let secondary = secondary_dominant(&scale, i);
                let root = secondary.chord.root();
                assert_eq!(interval_name(target, root), IntervalName::PerfectFifth);
                assert_eq!(root.letter(), target.letter().step(4), "{} in {}", secondary, scale);
                assert_eq!(secondary.chord.quality(), ChordQuality::Dominant7);
                assert_eq!(secondary.scale.notes[0], root);
                // the chord's 3rd and 7th belong to its scale
                assert!(secondary.scale.notes.contains(&secondary.chord.tones()[1]));
                assert!(secondary.scale.notes.contains(&secondary.chord.tones()[3]));
            }
        }
    }
}

#[test]
fn test_numeral_catalogue_resolves() {
    for mode in ScaleMode::ALL {
        for size in [ChordSize::Triads, ChordSize::Sevenths] {
            for token in diatonic_numerals(mode, size) {
                assert!(resolve_quality(token).is_ok(), "{}", token);
            }
        }
    }
}

#[test]
fn test_calls_are_idempotent() {
    let tonic = sp("Ab");
    assert_eq!(
        build_scale(ScaleMode::MelodicMinor, tonic),
        build_scale(ScaleMode::MelodicMinor, tonic)
    );
    assert_eq!(
        chord_tones(tonic, ChordQuality::Diminished7),
        chord_tones(tonic, ChordQuality::Diminished7)
    );
    assert_eq!(
        interval_name(tonic, sp("D")),
        interval_name(tonic, sp("D"))
    );
    assert_eq!(resolve_quality("ImM7"), resolve_quality("ImM7"));
}

#[test]
fn test_engine_is_shareable_across_threads() {
    let handles: Vec<_> = CHROMATIC_TONICS
        .iter()
        .map(|&tonic| {
            std::thread::spawn(move || {
                let scale = Scale::parse(tonic, "harmonic minor").unwrap();
                names(scale.notes())
            })
        })
        .collect();

    for (handle, tonic) in handles.into_iter().zip(CHROMATIC_TONICS) {
        let notes = handle.join().unwrap();
        assert_eq!(notes[0], tonic);
    }
}
