//! Cepheus command line
//!
//! Prints generated worlds and sectors in the fixed-width SEC layout, or as
//! JSON with `--json`.
//!
//! Usage:
//!   cepheus worlds 10
//!   cepheus sector --subsector C --seed 1977
//!   cepheus decode --uwp A788899-C --bases A --name Regina
//!   cepheus roll 3

use std::error::Error;
use std::path::PathBuf;

use cepheus_core::prelude::*;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cepheus")]
#[command(about = "Cepheus Engine world and sector generator", long_about = None)]
#[command(version)]
struct Cli {
    /// Seed for repeatable output; overrides the config file
    #[arg(long, global = true, env = "CEPHEUS_SEED")]
    seed: Option<u64>,

    /// JSON generator config
    #[arg(short, long, global = true, env = "CEPHEUS_CONFIG")]
    config: Option<PathBuf>,

    /// Print JSON instead of text tables
    #[arg(long, global = true)]
    json: bool,

    /// Log level
    #[arg(long, global = true, env = "CEPHEUS_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate standalone worlds
    Worlds {
        #[arg(default_value_t = 1)]
        count: usize,
    },

    /// Generate a sector, or a single subsector
    Sector {
        /// Subsector letter, A to P
        #[arg(short, long, conflicts_with = "full")]
        subsector: Option<char>,

        /// All sixteen subsectors (the default)
        #[arg(long)]
        full: bool,
    },

    /// Rebuild a world from its codes, rolling anything not given
    Decode {
        /// Universal world profile, e.g. A788899-C
        #[arg(long)]
        uwp: String,

        /// Base code
        #[arg(long)]
        bases: Option<String>,

        /// PBG code, e.g. 703
        #[arg(long)]
        pbg: Option<String>,

        #[arg(long)]
        name: Option<String>,

        /// Remarks, replacing the derived trade codes
        #[arg(long, num_args = 0..)]
        remarks: Option<Vec<String>>,

        /// Travel zone code: A for amber
        #[arg(long)]
        zone: Option<char>,

        #[arg(long)]
        allegiance: Option<String>,
    },

    /// Roll six-sided dice
    Roll {
        #[arg(default_value_t = 2)]
        count: usize,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| cli.log_level.clone().into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    log::debug!("using {:?}", config);
    let mut dice = config.dice();

    match cli.command {
        Command::Worlds { count } => {
            let worlds: Vec<World> = (0..count)
                .map(|_| generate_world(&mut dice, &config))
                .collect();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&worlds)?);
            } else {
                println!("{}", world_table_header());
                for world in &worlds {
                    println!("{}", world);
                }
            }
        }

        Command::Sector { subsector, full } => {
            let scope = match (subsector, full) {
                (Some(letter), false) => {
                    SectorScope::Subsector(SubsectorId::from_letter(letter)?)
                }
                _ => SectorScope::Full,
            };
            let sector = Sector::generate(scope, &mut dice, &config);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&sector)?);
            } else {
                println!("{}", sector);
            }
        }

        Command::Decode {
            uwp,
            bases,
            pbg,
            name,
            remarks,
            zone,
            allegiance,
        } => {
            let travel_zone = match zone {
                Some(code) => Some(
                    TravelZone::from_code(code)
                        .ok_or_else(|| format!("unknown travel zone '{}'", code))?,
                ),
                None => None,
            };
            let encoded = EncodedWorld {
                name,
                uwp: Some(uwp),
                bases,
                remarks,
                travel_zone,
                pbg,
                allegiance,
            };
            let world = world_from_encoded(&encoded, &mut dice, &config)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&world)?);
            } else {
                println!("{}", world_table_header());
                println!("{}", world);
            }
        }

        Command::Roll { count } => {
            let roll = dice.roll(count);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&roll)?);
            } else {
                println!("{}", dice);
            }
        }
    }

    Ok(())
}
