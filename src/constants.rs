//! Board geometry and playout parameters.
//!
//! The board uses a 1D array representation with padding for boundary detection.
//!
//! # Board Size Configuration
//!
//! The board size is controlled by Cargo features:
//! - `board9x9` (default): 9x9 board
//! - `board13x13`: 13x13 board
//!
//! ```sh
//! cargo build                                              # 9x9 (default)
//! cargo build --no-default-features --features board13x13  # 13x13
//! ```

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
#[cfg(feature = "board9x9")]
pub const N: usize = 9;

#[cfg(feature = "board13x13")]
pub const N: usize = 13;

// Compile-time check: exactly one board size feature must be enabled
#[cfg(all(feature = "board9x9", feature = "board13x13"))]
compile_error!("Cannot enable both 'board9x9' and 'board13x13' features at the same time");

#[cfg(not(any(feature = "board9x9", feature = "board13x13")))]
compile_error!("Must enable exactly one board size feature: 'board9x9' or 'board13x13'");

/// Board width including padding on both sides. Rows are stored with a
/// stride of `N + 1`; the left padding of one row doubles as the right
/// padding of the previous one.
pub const W: usize = N + 2;

/// Total board array size including all padding.
pub const BOARDSIZE: usize = (N + 1) * W + 1;

/// First index that may hold a playable point.
pub const BOARD_IMIN: usize = N + 1;

/// One past the last index that may hold a playable point.
pub const BOARD_IMAX: usize = BOARDSIZE - N - 1;

/// Maximum game length (3 times board area to allow for captures and replays).
pub const MAX_GAME_LEN: usize = N * N * 3;

// =============================================================================
// Special Move Values
// =============================================================================

/// Pass move marker (index 0 is padding, so safe to use).
pub const PASS_MOVE: usize = 0;

// =============================================================================
// Group Tracking
// =============================================================================

/// Number of liberty coordinates remembered per group. The tactical code
/// only ever needs the exact list for groups with three or fewer liberties.
pub const MAX_TRACKED_LIBS: usize = 3;

// =============================================================================
// Playout Heuristic Probabilities
// =============================================================================

/// Probability of rejecting a bad self-atari picked by the random policy.
pub const PROB_RSAREJECT: f64 = 0.9;

// =============================================================================
// Neighbor Offsets
// =============================================================================

/// Offsets to neighboring points in the 1D board array.
/// Order: North, East, South, West, NE, SE, SW, NW
pub const DELTA: [isize; 8] = [
    -(N as isize) - 1, // North (up one row)
    1,                 // East (right one column)
    (N as isize) + 1,  // South (down one row)
    -1,                // West (left one column)
    -(N as isize),     // NE (diagonal)
    W as isize,        // SE (diagonal)
    N as isize,        // SW (diagonal)
    -(W as isize),     // NW (diagonal)
];
