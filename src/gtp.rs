//! Go Text Protocol (GTP) implementation.
//!
//! GTP is a text-based protocol for communicating with Go-playing programs.
//! This module implements GTP version 2, so the engine can sit behind
//! graphical interfaces like Sabaki or GoGui, and adds two commands for
//! poking at the self-atari checker.
//!
//! ## Supported Commands
//!
//! - `name` - Return engine name
//! - `version` - Return engine version
//! - `protocol_version` - Return GTP protocol version (2)
//! - `list_commands` - List all supported commands
//! - `known_command <cmd>` - Check if a command is supported
//! - `quit` - Exit the program
//! - `boardsize <size>` - Set board size (only the compiled size is supported)
//! - `clear_board` - Reset the board to empty
//! - `komi <value>` - Set komi
//! - `play <color> <vertex>` - Play a move
//! - `genmove <color>` - Generate and play a move for the given color
//! - `showboard` - Print the board
//! - `selfatari <color> <vertex>` - Is the move a bad self-atari?
//! - `selfatari_cousin <color> <vertex>` - Suggest an alternative move
//!
//! ## Example
//!
//! ```ignore
//! use go_tactics::gtp::GtpEngine;
//! let mut engine = GtpEngine::new();
//! engine.run()?;
//! ```

use std::io::{self, BufRead, Write};

use fastrand::Rng;
use log::{debug, info};

use crate::board::{Point, Stone};
use crate::constants::{N, PASS_MOVE};
use crate::playout::{PlayoutPolicy, choose_random_move};
use crate::position::{Position, empty_position, parse_coord, play_stone, str_coord};
use crate::tactics::selfatari::{is_bad_selfatari, selfatari_cousin};

/// The list of known GTP commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "clear_board",
    "genmove",
    "known_command",
    "komi",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "selfatari",
    "selfatari_cousin",
    "showboard",
    "version",
];

/// GTP engine state.
pub struct GtpEngine {
    /// Current game position
    pos: Position,
    /// Move policy used by `genmove`
    policy: PlayoutPolicy,
    rng: Rng,
}

impl Default for GtpEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GtpEngine {
    /// Create a new GTP engine with the default policy and a random seed.
    pub fn new() -> Self {
        Self::with_policy(PlayoutPolicy::default(), Rng::new())
    }

    /// Create a new GTP engine with the given move policy and random source.
    pub fn with_policy(policy: PlayoutPolicy, rng: Rng) -> Self {
        Self {
            pos: Position::new(),
            policy,
            rng,
        }
    }

    /// Run the GTP command loop, reading from stdin and writing to stdout.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        for line in stdin.lock().lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            // Parse optional command ID
            let (id, command_line) = Self::parse_id(line);

            // Parse command and arguments
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let command = parts[0].to_lowercase();
            let args = &parts[1..];
            debug!("gtp <- {command_line}");

            let (success, message) = self.execute(&command, args);
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            write!(stdout, "{prefix}{id_str} {message}\n\n")?;
            stdout.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }
        (None, trimmed)
    }

    /// Parse `<color> <vertex>` arguments.
    fn parse_move(args: &[&str]) -> Result<(Stone, Point), String> {
        let [color, vertex, ..] = args else {
            return Err("missing arguments".to_string());
        };
        let color = Stone::parse(color).ok_or_else(|| "invalid color".to_string())?;
        let pt = parse_coord(vertex).ok_or_else(|| "invalid vertex".to_string())?;
        Ok((color, pt))
    }

    /// Execute a GTP command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, "go-tactics".to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "2".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(cmd) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "boardsize" => {
                let Some(size) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                match size.parse::<usize>() {
                    Ok(size) if size == N => (true, String::new()),
                    Ok(size) => (
                        false,
                        format!("unacceptable size, only {N} is supported (got {size})"),
                    ),
                    Err(_) => (false, "invalid size".to_string()),
                }
            }

            "clear_board" => {
                empty_position(&mut self.pos);
                (true, String::new())
            }

            "komi" => {
                let Some(komi) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                match komi.parse::<f32>() {
                    Ok(komi) => {
                        self.pos.komi = komi;
                        (true, String::new())
                    }
                    Err(_) => (false, "invalid komi".to_string()),
                }
            }

            "play" => {
                let (color, pt) = match Self::parse_move(args) {
                    Ok(mv) => mv,
                    Err(e) => return (false, e),
                };
                match play_stone(&mut self.pos, pt, color) {
                    Ok(()) => (true, String::new()),
                    Err(e) => (false, e.to_string()),
                }
            }

            "genmove" => {
                let Some(color) = args.first().and_then(|c| Stone::parse(c)) else {
                    return (false, "invalid color".to_string());
                };
                self.pos.to_play = color;
                let pt = choose_random_move(&self.pos, &self.policy, &mut self.rng)
                    .unwrap_or(PASS_MOVE);
                match play_stone(&mut self.pos, pt, color) {
                    Ok(()) => {
                        info!("genmove {color}: {}", str_coord(pt));
                        (true, str_coord(pt))
                    }
                    Err(e) => (false, e.to_string()),
                }
            }

            "showboard" => (true, format!("\n{}", self.pos)),

            "selfatari" => match Self::parse_move(args) {
                Ok((_, PASS_MOVE)) => (false, "cannot check a pass".to_string()),
                Ok((_, pt)) if self.pos.color[pt] != Stone::Empty => {
                    (false, "point not EMPTY".to_string())
                }
                Ok((color, pt)) => (true, is_bad_selfatari(&self.pos, color, pt).to_string()),
                Err(e) => (false, e),
            },

            "selfatari_cousin" => match Self::parse_move(args) {
                Ok((_, PASS_MOVE)) => (false, "cannot check a pass".to_string()),
                Ok((_, pt)) if self.pos.color[pt] != Stone::Empty => {
                    (false, "point not EMPTY".to_string())
                }
                Ok((color, pt)) => {
                    let cousin = selfatari_cousin(&self.pos, color, pt, &mut self.rng);
                    (true, str_coord(cousin.unwrap_or(PASS_MOVE)))
                }
                Err(e) => (false, e),
            },

            _ => (false, format!("unknown command: {command}")),
        }
    }
}
