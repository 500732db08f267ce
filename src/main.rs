// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use chordgen::{compose, write_midi_file, AppConfig, Composition, GeneratorParams};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::Level;

fn print_usage() {
    println!("chordgen - Chord Progression Generator");
    println!();
    println!("Usage: chordgen [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --randomness <0-100>  How far the progression strays (default 50)");
    println!("  --bars <N>            Number of chords (default 4)");
    println!("  --seed <N>            Seed for a reproducible progression");
    println!("  --config <PATH>       Load settings from a .yaml or .toml file");
    println!("  --midi <PATH>         Write the progression to a MIDI file");
    println!("  --verbose             Log generation decisions");
    println!("  --help                Show this help message");
}

/// Parsed command-line options
#[derive(Debug, Default, PartialEq)]
struct CliOptions {
    randomness: Option<f64>,
    bars: Option<usize>,
    seed: Option<u64>,
    config: Option<PathBuf>,
    midi: Option<PathBuf>,
    verbose: bool,
    help: bool,
}

fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i + 1)
        .map(|s| s.as_str())
        .ok_or_else(|| anyhow!("{} requires a value", flag))
}

fn parse_args(args: &[String]) -> Result<CliOptions> {
    let mut options = CliOptions::default();
    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--randomness" => {
                let value = flag_value(args, i, flag)?;
                let randomness: f64 = value
                    .parse()
                    .map_err(|_| anyhow!("Invalid randomness: {}", value))?;
                if !(0.0..=100.0).contains(&randomness) {
                    bail!("Randomness must be between 0 and 100, got {}", randomness);
                }
                options.randomness = Some(randomness);
                i += 1;
            }
            "--bars" => {
                let value = flag_value(args, i, flag)?;
                let bars: usize = value
                    .parse()
                    .map_err(|_| anyhow!("Invalid bar count: {}", value))?;
                if bars == 0 {
                    bail!("--bars must be at least 1");
                }
                options.bars = Some(bars);
                i += 1;
            }
            "--seed" => {
                let value = flag_value(args, i, flag)?;
                options.seed = Some(value.parse().map_err(|_| anyhow!("Invalid seed: {}", value))?);
                i += 1;
            }
            "--config" => {
                options.config = Some(PathBuf::from(flag_value(args, i, flag)?));
                i += 1;
            }
            "--midi" => {
                options.midi = Some(PathBuf::from(flag_value(args, i, flag)?));
                i += 1;
            }
            "--verbose" | "-v" => options.verbose = true,
            "--help" | "-h" => options.help = true,
            other => bail!("Unknown option: {}", other),
        }
        i += 1;
    }
    Ok(options)
}

/// Merge the config file (if any) with command-line overrides
fn resolve_config(options: &CliOptions) -> Result<AppConfig> {
    let mut config = match &options.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig {
            generator: GeneratorParams::from_randomness(50.0),
            ..AppConfig::default()
        },
    };

    if let Some(randomness) = options.randomness {
        let randomized = GeneratorParams::from_randomness(randomness);
        config.generator.diatonicity = randomized.diatonicity;
        config.generator.functional_harmony = randomized.functional_harmony;
    }
    if let Some(bars) = options.bars {
        config.generator.num_bars = bars;
    }
    Ok(config.validated())
}

fn print_composition(composition: &Composition) {
    println!(
        "Key: {}  ({} attempt{})",
        composition.progression.starting_key(),
        composition.attempts,
        if composition.attempts == 1 { "" } else { "s" }
    );
    println!();
    let rows = composition
        .progression
        .chords()
        .iter()
        .zip(&composition.symbols)
        .zip(&composition.numerals)
        .zip(&composition.colors);
    for (bar, (((chord, symbol), numeral), color)) in rows.enumerate() {
        println!(
            "{:>3}  {:<18} {:<28} {:<36} {}",
            bar + 1,
            chord.to_string(),
            symbol,
            numeral,
            color
        );
    }
}

fn run(options: &CliOptions) -> Result<()> {
    let config = resolve_config(options)?;

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let composition = compose(&config.generator, config.max_attempts, &mut rng)
        .context("Failed to compose a progression")?;
    print_composition(&composition);

    if let Some(path) = &options.midi {
        write_midi_file(path, composition.progression.chords(), &config.export)?;
        println!();
        println!("MIDI written to {}", path.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("Error: {}", err);
            eprintln!("Run with --help for usage information");
            std::process::exit(1);
        }
    };

    if options.help {
        print_usage();
        return Ok(());
    }

    let level = if options.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    run(&options)
}
