// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;

use anyhow::Result;

use keysig::{
    diatonic_sevenths, diatonic_triads, key_signatures, roman_numerals, roman_numerals_sevenths,
    Note, Tonality, CIRCLE_OF_FIFTHS,
};

fn print_usage() {
    println!("KEYSIG - Key Signature and Harmony Calculator");
    println!();
    println!("Usage: keysig [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --key <NOTE>        Tonic note (C, F#, Bb, ...), default C");
    println!("  --tonality <NAME>   major, minor, harmonic_minor, melodic_minor");
    println!("                      (default major)");
    println!("  --sevenths          Show seventh chords instead of triads");
    println!("  --numerals          Print only the Roman-numeral pattern");
    println!("  --chart             Print the circle-of-fifths chart");
    println!("  --help              Show this help message");
}

fn print_key(tonic: Note, tonality: Tonality, sevenths: bool) -> Result<()> {
    let signatures = key_signatures(tonic, tonality)?;

    for signature in &signatures {
        println!("{}", signature);

        let accidentals = signature.accidental_labels();
        if !accidentals.is_empty() {
            let rendered: Vec<String> = accidentals.iter().map(|l| l.to_string()).collect();
            println!("  Signature: {}", rendered.join(" "));
        }

        println!("  Scale:     {}", signature.scale());

        let chords = if sevenths {
            diatonic_sevenths(signature)?
        } else {
            diatonic_triads(signature)?
        };
        let numerals = if sevenths {
            roman_numerals_sevenths(tonality)?
        } else {
            roman_numerals(tonality)?
        };

        println!("  Chords:");
        for (numeral, chord) in numerals.iter().zip(&chords) {
            println!("    {:<6} {}", numeral, chord);
        }
        println!();
    }

    Ok(())
}

fn print_numerals(tonality: Tonality, sevenths: bool) -> Result<()> {
    let numerals = if sevenths {
        roman_numerals_sevenths(tonality)?
    } else {
        roman_numerals(tonality)?
    };
    println!("{}: {}", tonality, numerals.join(" "));
    Ok(())
}

fn print_chart() -> Result<()> {
    println!("Circle of fifths (major keys):");
    for &tonic in &CIRCLE_OF_FIFTHS {
        let signatures = key_signatures(tonic, Tonality::Major)?;
        let spellings: Vec<String> = signatures.iter().map(|s| s.to_string()).collect();
        println!("  {}", spellings.join("  /  "));
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    let mut tonic = Note::C;
    let mut tonality = Tonality::Major;
    let mut sevenths = false;
    let mut numerals_only = false;
    let mut chart = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--key" => {
                i += 1;
                let value = args.get(i).ok_or_else(|| {
                    anyhow::anyhow!("--key requires a note name (C, F#, Bb, ...)")
                })?;
                tonic = Note::from_str(value)
                    .ok_or_else(|| anyhow::anyhow!("Invalid note name: {}", value))?;
            }
            "--tonality" => {
                i += 1;
                let value = args.get(i).ok_or_else(|| {
                    anyhow::anyhow!("--tonality requires a name (major, minor, ...)")
                })?;
                tonality = Tonality::from_str(value)
                    .ok_or_else(|| anyhow::anyhow!("Invalid tonality: {}", value))?;
            }
            "--sevenths" => sevenths = true,
            "--numerals" => numerals_only = true,
            "--chart" => chart = true,
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            other => {
                eprintln!("Unknown option: {}", other);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if chart {
        print_chart()?;
    } else if numerals_only {
        print_numerals(tonality, sevenths)?;
    } else {
        print_key(tonic, tonality, sevenths)?;
    }

    Ok(())
}
