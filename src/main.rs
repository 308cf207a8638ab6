// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use anyhow::{anyhow, Result};
use chordspell::config::load_catalog;
use chordspell::{identify, ChordCatalog, Extension, Note, Scale, ScaleType};
use std::env;
use tracing::Level;

fn print_usage() {
    println!("chordspell - Scale and chord speller");
    println!();
    println!("Usage: chordspell [--chords FILE] [-v] <COMMAND>");
    println!();
    println!("Commands:");
    println!("  --chord <TONIC> <ID> [9|11|13]  Spell a chord, optionally extended");
    println!("  --scale <TONIC> <SCALE>         Spell a scale (e.g. major, dorian)");
    println!("  --identify <NOTE>...            Name the chords the notes contain");
    println!("  --list-chords                   List chord ids");
    println!("  --list-scales                   List scale names");
    println!("  --help                          Show this help message");
    println!();
    println!("Options:");
    println!("  --chords <FILE>  Load extra chord definitions (YAML or TOML)");
    println!("  -v, --verbose    Debug logging on stderr");
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_note(text: &str) -> Result<Note> {
    text.parse()
        .map_err(|e| anyhow!("Invalid note {:?}: {}", text, e))
}

fn spell_chord(catalog: &ChordCatalog, args: &[String]) -> Result<()> {
    if args.len() < 2 {
        eprintln!("Error: --chord requires a tonic and a chord id");
        eprintln!("Use --list-chords to see available ids");
        std::process::exit(1);
    }
    let tonic = parse_note(&args[0])?;

    let chord = match args.get(2) {
        Some(ext) => {
            let extension = Extension::from_str(ext)
                .ok_or_else(|| anyhow!("Invalid extension: {} (expected 9, 11 or 13)", ext))?;
            catalog.build_extended(&tonic, &args[1], extension)?
        }
        None => catalog.build(&tonic, &args[1])?,
    };

    println!("{}", chord);
    Ok(())
}

fn spell_scale(args: &[String]) -> Result<()> {
    if args.len() < 2 {
        eprintln!("Error: --scale requires a tonic and a scale name");
        eprintln!("Use --list-scales to see available scales");
        std::process::exit(1);
    }
    let tonic = parse_note(&args[0])?;
    let scale_type = ScaleType::from_str(&args[1])
        .ok_or_else(|| anyhow!("Unknown scale: {}", args[1]))?;

    let scale = Scale::new(tonic, scale_type)?;
    let notes: Vec<String> = scale.notes().iter().map(|n| n.to_string()).collect();
    println!("{}: {}", scale, notes.join(" "));
    Ok(())
}

fn identify_chords(catalog: &ChordCatalog, args: &[String]) -> Result<()> {
    if args.is_empty() {
        eprintln!("Error: --identify requires at least one note");
        std::process::exit(1);
    }
    let notes = args
        .iter()
        .map(|s| parse_note(s))
        .collect::<Result<Vec<_>>>()?;

    let found = identify(catalog, &notes);
    if found.is_empty() {
        println!("No chords found");
    }
    for chord in found {
        println!("{}", chord);
    }
    Ok(())
}

fn main() -> Result<()> {
    let mut args: Vec<String> = env::args().collect();

    let verbose = args.iter().any(|a| a == "-v" || a == "--verbose");
    args.retain(|a| a != "-v" && a != "--verbose");
    init_logging(verbose);

    let catalog = match args.iter().position(|a| a == "--chords") {
        Some(i) => {
            let path = args
                .get(i + 1)
                .cloned()
                .ok_or_else(|| anyhow!("--chords requires a file path"))?;
            args.drain(i..i + 2);
            load_catalog(&path)?
        }
        None => ChordCatalog::builtin().clone(),
    };

    if args.len() < 2 {
        println!("chordspell - Scale and chord speller");
        println!("Run with --help for usage information");
        return Ok(());
    }

    match args[1].as_str() {
        "--chord" => spell_chord(&catalog, &args[2..])?,
        "--scale" => spell_scale(&args[2..])?,
        "--identify" => identify_chords(&catalog, &args[2..])?,
        "--list-chords" => {
            for def in catalog.definitions() {
                println!("{:<10} {}", def.id, def.pattern);
            }
        }
        "--list-scales" => {
            for scale_type in ScaleType::ALL {
                println!("{}", scale_type.name());
            }
        }
        "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Unknown option: {}", args[1]);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}
