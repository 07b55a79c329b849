// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use anyhow::{anyhow, Context, Result};
use enharmonic::config::Settings;
use enharmonic::music::{
    harmonize, resolve_quality, spellings_for, Chord, ChordSize, Interval, ModalScale, PitchClass,
    Scale, ScaleMode, Spelling,
};
use std::env;

fn print_usage() {
    println!("enharmonic - Scale, interval and chord speller");
    println!();
    println!("Usage: enharmonic [--config <PATH>] <COMMAND>");
    println!();
    println!("Commands:");
    println!("  scale [TONIC] [MODE]                Spell a scale (modes: major, natural_minor,");
    println!("                                      harmonic_minor, melodic_minor)");
    println!("  interval <NOTE> <NOTE>              Name the interval between two notes");
    println!("  chord <ROOT> <QUALITY>              Spell a chord (Maj7, m7, 7, m7(b5), dim7,");
    println!("                                      mM7, Maj7#5, I, i, dim, aug, or the symbol");
    println!("                                      suffixes maj7, min7, min7(b5), °7, maj7#5)");
    println!("  quality <NUMERAL>                   Resolve a roman numeral such as IIm7(b5)");
    println!("  harmonize [TONIC] [MODE] [--triads|--sevenths]");
    println!("                                      Spell the diatonic chords of a scale with their");
    println!("                                      function, mode and secondary dominant");
    println!("  spellings <PITCH_CLASS>             List the spellings of a pitch class (0-11)");
    println!("  --help                              Show this help message");
    println!();
    println!("Missing TONIC, MODE and chord size come from the settings file.");
}

fn init_logging(settings: &Settings) -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(settings.log_level()?)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn join(notes: &[Spelling]) -> String {
    notes
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// "E Phrygian: E F G A B C D (avoid F C)"
fn describe_modal(modal: &ModalScale) -> String {
    let avoid = modal.avoid_notes();
    if avoid.is_empty() {
        format!("{}: {}", modal, join(&modal.notes))
    } else {
        format!("{}: {} (avoid {})", modal, join(&modal.notes), join(&avoid))
    }
}

/// Tonic and mode from positional args, falling back to settings
fn scale_from_args(args: &[String], settings: &Settings) -> Result<Scale> {
    let tonic = match args.first() {
        Some(s) => s.parse::<Spelling>()?,
        None => settings.tonic()?,
    };
    let mode = match args.get(1) {
        Some(s) => s.parse::<ScaleMode>()?,
        None => settings.mode,
    };
    Ok(Scale::new(tonic, mode))
}

fn show_scale(args: &[String], settings: &Settings) -> Result<()> {
    let scale = scale_from_args(args, settings)?;
    println!("{}: {}", scale, join(scale.notes()));

    if let Some(relative) = scale.relative() {
        println!("Relative: {}", relative);
    }
    println!("Parallel: {}", scale.parallel());

    if let Some(midi) = scale.tonic().midi_note(settings.octave) {
        let hz = scale.tonic().frequency(settings.octave).unwrap_or_default();
        println!(
            "Tonic: {}{} = MIDI {} ({:.2} Hz)",
            scale.tonic(),
            settings.octave,
            midi,
            hz
        );
    }
    Ok(())
}

fn show_interval(args: &[String]) -> Result<()> {
    if args.len() < 2 {
        return Err(anyhow!("interval requires two notes"));
    }
    let lower: Spelling = args[0].parse()?;
    let upper: Spelling = args[1].parse()?;
    let interval = Interval::between(lower, upper);
    println!(
        "{} -> {}: {} ({} semitones)",
        lower,
        upper,
        interval,
        interval.semitones()
    );
    Ok(())
}

fn show_chord(args: &[String]) -> Result<()> {
    if args.len() < 2 {
        return Err(anyhow!("chord requires a root and a quality"));
    }
    let chord = Chord::parse(&args[0], &args[1])?;
    println!("{}: {}", chord.symbol(), join(chord.tones()));
    Ok(())
}

fn show_quality(args: &[String]) -> Result<()> {
    let token = args
        .first()
        .ok_or_else(|| anyhow!("quality requires a roman numeral"))?;
    let quality = resolve_quality(token)?;
    println!("{}: {} {:?}", token, quality, quality.offsets());
    Ok(())
}

fn show_harmony(args: &[String], settings: &Settings) -> Result<()> {
    let mut size = settings.chord_size;
    let mut positional = Vec::new();
    for arg in args {
        match arg.as_str() {
            "--triads" => size = ChordSize::Triads,
            "--sevenths" => size = ChordSize::Sevenths,
            _ => positional.push(arg.clone()),
        }
    }

    let scale = scale_from_args(&positional, settings)?;
    println!("{} ({})", scale, size);
    for chord in harmonize(&scale, size)? {
        println!(
            "  {:<10} {:<12} {:<16} {:<5} {}",
            chord.numeral,
            chord.chord.symbol(),
            join(chord.chord.tones()),
            chord.function.code(),
            describe_modal(&chord.modal)
        );
        println!(
            "  {:<10} {:<12} {:<16} {:<5} {}",
            chord.secondary.label,
            chord.secondary.chord.symbol(),
            join(chord.secondary.chord.tones()),
            "",
            describe_modal(&chord.secondary.scale)
        );
    }
    Ok(())
}

fn show_spellings(args: &[String]) -> Result<()> {
    let raw = args
        .first()
        .ok_or_else(|| anyhow!("spellings requires a pitch class"))?;
    let value: i32 = raw
        .parse()
        .map_err(|_| anyhow!("Invalid pitch class: {}", raw))?;
    if !(0..12).contains(&value) {
        return Err(anyhow!("Pitch class must be 0-11, got {}", value));
    }
    println!("{}: {}", value, join(spellings_for(PitchClass::new(value))));
    Ok(())
}

fn main() -> Result<()> {
    let mut args: Vec<String> = env::args().skip(1).collect();

    let settings = match args.iter().position(|a| a == "--config") {
        Some(i) => {
            let path = args
                .get(i + 1)
                .cloned()
                .ok_or_else(|| anyhow!("--config requires a path"))?;
            args.drain(i..=i + 1);
            Settings::load(&path).with_context(|| format!("Loading settings from {}", path))?
        }
        None => Settings::default(),
    };
    init_logging(&settings)?;

    if args.is_empty() {
        println!("enharmonic - Scale, interval and chord speller");
        println!("Run with --help for usage information");
        return Ok(());
    }

    tracing::debug!(command = %args[0], "running");
    let rest = &args[1..];
    match args[0].as_str() {
        "scale" => show_scale(rest, &settings)?,
        "interval" => show_interval(rest)?,
        "chord" => show_chord(rest)?,
        "quality" => show_quality(rest)?,
        "harmonize" => show_harmony(rest, &settings)?,
        "spellings" => show_spellings(rest)?,
        "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}
