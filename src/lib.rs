//! Go-Tactics: fast local tactical checks for Go engines.
//!
//! The centerpiece is a bad self-atari classifier meant for move generation
//! and playouts: it decides from the liberties around one point whether a
//! move needlessly puts the mover's own group in atari.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions and playout parameters
//! - [`board`] - Stone colors and the read-only [`board::BoardView`] interface
//! - [`position`] - Concrete board with group/liberty tracking
//! - [`tactics`] - Self-atari classifier and cousin finder
//! - [`playout`] - Random playouts that avoid bad self-ataris
//! - [`gtp`] - Go Text Protocol front end
//!
//! ## Example
//!
//! ```
//! use go_tactics::board::Stone;
//! use go_tactics::position::Position;
//! use go_tactics::tactics::selfatari::{is_bad_selfatari, selfatari_cousin};
//!
//! // Black at * fills its own last liberty next to two white stones.
//! let (pos, mark) = Position::from_diagram(&[
//!     "O X * O",
//!     "O X O .",
//! ]).unwrap();
//! let pt = mark.unwrap();
//! assert!(is_bad_selfatari(&pos, Stone::Black, pt));
//!
//! // Extending the black group on its other liberty is fine.
//! let mut rng = fastrand::Rng::with_seed(1);
//! assert!(selfatari_cousin(&pos, Stone::Black, pt, &mut rng).is_some());
//! ```

pub mod board;
pub mod constants;
pub mod gtp;
pub mod playout;
pub mod position;
pub mod tactics;
