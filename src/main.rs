//! Go-Tactics: self-atari checks for Go engines.
//!
//! ## Usage
//!
//! - `go-tactics gtp` - Start GTP server for GUI integration
//! - `go-tactics check <file>` - Classify a move in a board diagram
//! - `go-tactics bench` - Run random playouts from the empty board

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::info;

use go_tactics::board::Stone;
use go_tactics::constants::PROB_RSAREJECT;
use go_tactics::gtp::GtpEngine;
use go_tactics::playout::{PlayoutPolicy, mean_playout_score};
use go_tactics::position::{Position, parse_coord, str_coord};
use go_tactics::tactics::selfatari::{is_bad_selfatari, selfatari_cousin};

/// Go-Tactics: bad self-atari detection and random playouts
#[derive(Parser)]
#[command(name = "go-tactics")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed for the random number generator
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Probability of rejecting a bad self-atari in playouts
    #[arg(long, global = true, default_value_t = PROB_RSAREJECT)]
    selfatari_rate: f64,

    /// Never replace a rejected self-atari by its cousin move
    #[arg(long, global = true)]
    no_cousins: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the GTP (Go Text Protocol) server for use with GUI applications
    Gtp,
    /// Classify one move in a board diagram file
    Check {
        /// Diagram file: rows of `X`, `O`, `.` and one `*` for the move
        file: PathBuf,
        /// Color to move (b/black or w/white)
        #[arg(long, default_value = "black")]
        color: String,
        /// Vertex to check instead of the `*` marker, e.g. C3
        #[arg(long)]
        at: Option<String>,
    },
    /// Run random playouts from the empty board and report the mean score
    Bench {
        /// Number of playouts
        #[arg(long, default_value_t = 100)]
        games: usize,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if !(0.0..=1.0).contains(&cli.selfatari_rate) {
        bail!("--selfatari-rate must be within [0, 1], got {}", cli.selfatari_rate);
    }
    let policy = PlayoutPolicy {
        selfatari_rate: cli.selfatari_rate,
        cousins: !cli.no_cousins,
    };
    let mut rng = match cli.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };

    match cli.command {
        Commands::Gtp => {
            let mut engine = GtpEngine::with_policy(policy, rng);
            engine.run().context("GTP session failed")?;
        }
        Commands::Check { file, color, at } => {
            let text = fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let rows: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
            let (pos, mark) = Position::from_diagram(&rows)
                .with_context(|| format!("bad diagram in {}", file.display()))?;
            let color = Stone::parse(&color).with_context(|| format!("invalid color: {color}"))?;
            let pt = match at {
                Some(v) => parse_coord(&v).with_context(|| format!("invalid vertex: {v}"))?,
                None => mark.context("diagram has no `*` marker and no --at was given")?,
            };
            if pos.color[pt] != Stone::Empty {
                bail!("{} is not empty", str_coord(pt));
            }

            println!("{pos}");
            let bad = is_bad_selfatari(&pos, color, pt);
            println!("{color} {}: {}", str_coord(pt), if bad { "bad self-atari" } else { "ok" });
            if bad {
                match selfatari_cousin(&pos, color, pt, &mut rng) {
                    Some(c) => println!("cousin: {}", str_coord(c)),
                    None => println!("cousin: none"),
                }
            }
        }
        Commands::Bench { games } => {
            let pos = Position::new();
            let start = std::time::Instant::now();
            let mean = mean_playout_score(&pos, games, &policy, &mut rng);
            let elapsed = start.elapsed();
            info!("{games} playouts in {elapsed:.2?}");
            println!("mean black score over {games} playouts: {mean:.2}");
        }
    }

    Ok(())
}
