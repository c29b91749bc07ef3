//! Monte Carlo playouts (random game simulation).
//!
//! A playout plays random legal moves until the game ends, then scores the
//! result. The move policy skips the player's own eyes and, with a
//! configurable probability, refuses bad self-ataris, trying the
//! self-atari cousin instead.

use fastrand::Rng;
use log::debug;

use crate::board::{BoardView, Point, Stone};
use crate::constants::{BOARD_IMAX, BOARD_IMIN, MAX_GAME_LEN, PROB_RSAREJECT};
use crate::position::{Position, is_eyeish, is_legal, pass_move, play_move, str_coord};
use crate::tactics::selfatari::{is_bad_selfatari, selfatari_cousin};

/// Knobs for the random move policy.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayoutPolicy {
    /// Probability of rejecting a bad self-atari.
    pub selfatari_rate: f64,
    /// Play the self-atari cousin in place of a rejected move when possible.
    pub cousins: bool,
}

impl Default for PlayoutPolicy {
    fn default() -> Self {
        Self {
            selfatari_rate: PROB_RSAREJECT,
            cousins: true,
        }
    }
}

/// Perform a Monte Carlo playout from the given position.
///
/// Plays until two consecutive passes or the game length limit.
/// Returns a score from the perspective of the player to move at the start:
/// - Positive score = starting player wins
/// - Negative score = starting player loses
pub fn mcplayout(pos: &mut Position, policy: &PlayoutPolicy, rng: &mut Rng) -> f64 {
    let start = pos.to_play;
    let mut passes = 0;

    while passes < 2 && pos.n < MAX_GAME_LEN {
        match choose_random_move(pos, policy, rng) {
            Some(pt) => {
                // Candidates are checked for legality, so this cannot fail.
                if play_move(pos, pt).is_err() {
                    pass_move(pos);
                    passes += 1;
                } else {
                    passes = 0;
                }
            }
            None => {
                pass_move(pos);
                passes += 1;
            }
        }
    }

    let s = score(pos);
    debug!("playout finished after {} moves, black score {s:.1}", pos.n);
    if start == Stone::Black { s } else { -s }
}

/// Choose a random legal move for the side to move.
///
/// True eyes of the mover are never filled. Bad self-ataris are rejected
/// with probability `policy.selfatari_rate`; when rejected, the cousin move
/// is played instead if there is one.
pub fn choose_random_move(pos: &Position, policy: &PlayoutPolicy, rng: &mut Rng) -> Option<Point> {
    let color = pos.to_play;
    let mut candidates: Vec<Point> = (BOARD_IMIN..BOARD_IMAX)
        .filter(|&pt| pos.color[pt] == Stone::Empty && !pos.is_one_point_eye(pt, color))
        .collect();
    let n = candidates.len();

    // Incremental Fisher-Yates: draw candidates in random order.
    for i in 0..n {
        let j = i + rng.usize(..n - i);
        candidates.swap(i, j);
        let pt = candidates[i];

        if !is_legal(pos, pt, color) {
            continue;
        }
        if policy.selfatari_rate > 0.0
            && is_bad_selfatari(pos, color, pt)
            && rng.f64() < policy.selfatari_rate
        {
            if policy.cousins {
                if let Some(cousin) = selfatari_cousin(pos, color, pt, rng) {
                    if is_legal(pos, cousin, color) {
                        debug!("self-atari {} replaced by {}", str_coord(pt), str_coord(cousin));
                        return Some(cousin);
                    }
                }
            }
            continue;
        }
        return Some(pt);
    }

    None
}

/// Compute the area score from Black's point of view.
///
/// Uses area scoring (Chinese rules):
/// - Stones on the board count as territory
/// - Eyeish empty points belong to the surrounding color
/// - Komi is subtracted
pub fn score(pos: &Position) -> f64 {
    let mut s = -(pos.komi as f64);

    for pt in BOARD_IMIN..BOARD_IMAX {
        let c = pos.color[pt];
        // For empty points, check if they're controlled by one side
        let effective = if c == Stone::Empty { is_eyeish(pos, pt) } else { Some(c) };

        match effective {
            Some(Stone::Black) => s += 1.0,
            Some(Stone::White) => s -= 1.0,
            _ => {}
        }
    }

    s
}

/// Average playout result for the side to move over `games` playouts.
pub fn mean_playout_score(pos: &Position, games: usize, policy: &PlayoutPolicy, rng: &mut Rng) -> f64 {
    if games == 0 {
        return 0.0;
    }
    let total: f64 = (0..games)
        .map(|_| mcplayout(&mut pos.clone(), policy, rng))
        .sum();
    total / games as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::N;
    use crate::position::coord_at;

    #[test]
    fn test_score_empty_board() {
        let pos = Position::new();
        assert_eq!(score(&pos), -7.5);
    }

    #[test]
    fn test_score_counts_eyes() {
        let (pos, _) = Position::from_diagram(&[". X", "X ."]).unwrap();
        // Two stones plus the corner eye.
        assert_eq!(score(&pos), 3.0 - 7.5);
    }

    #[test]
    fn test_playout_terminates() {
        let mut rng = Rng::with_seed(7);
        let mut pos = Position::new();
        let s = mcplayout(&mut pos, &PlayoutPolicy::default(), &mut rng);
        assert!(s.is_finite());
        assert!(pos.n <= MAX_GAME_LEN);
        assert!(s.abs() <= (N * N) as f64 + 7.5);
    }

    #[test]
    fn test_random_move_avoids_bad_selfatari() {
        // Black at * is legal but fills the last outside liberty of its
        // two stones.
        let (pos, mark) = Position::from_diagram(&["O X * O", "O X O ."]).unwrap();
        let bad = mark.unwrap();
        assert!(is_legal(&pos, bad, Stone::Black));
        assert!(is_bad_selfatari(&pos, Stone::Black, bad));

        let policy = PlayoutPolicy {
            selfatari_rate: 1.0,
            cousins: true,
        };
        let mut rng = Rng::with_seed(3);
        for _ in 0..200 {
            let pt = choose_random_move(&pos, &policy, &mut rng).unwrap();
            assert_ne!(pt, bad);
            assert!(is_legal(&pos, pt, Stone::Black));
            assert!(!is_bad_selfatari(&pos, Stone::Black, pt));
        }
    }

    #[test]
    fn test_policy_without_rejection_plays_anything_legal() {
        let (pos, mark) = Position::from_diagram(&["O X * O", "O X O ."]).unwrap();
        let bad = mark.unwrap();
        let policy = PlayoutPolicy {
            selfatari_rate: 0.0,
            cousins: false,
        };
        let mut rng = Rng::with_seed(5);
        let picked_bad = (0..2000).any(|_| choose_random_move(&pos, &policy, &mut rng) == Some(bad));
        assert!(picked_bad);
    }

    #[test]
    fn test_mean_playout_score_is_bounded() {
        let mut rng = Rng::with_seed(9);
        let mut pos = Position::new();
        play_move(&mut pos, coord_at(N / 2, N / 2)).unwrap();
        let mean = mean_playout_score(&pos, 4, &PlayoutPolicy::default(), &mut rng);
        assert!(mean.abs() <= (N * N) as f64 + 7.5);
    }
}
