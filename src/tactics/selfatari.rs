//! Bad self-atari detection.
//!
//! A self-atari is a move that leaves the mover's own group with a single
//! liberty (or none). Many self-ataris are fine: throw-ins, nakade, snapback
//! setups, or moves that capture something. This module decides, from the
//! liberties around one candidate point, whether a move is a *bad*
//! self-atari, without reading the position out.
//!
//! The check runs in four phases, each of which may settle the question:
//!
//! 1. friendly groups: can we connect out to a group with liberties?
//! 2. enemy groups: can we escape by capturing?
//! 3. nakade / snapback: are we putting an enemy group in atari from inside?
//! 4. throw-in: are we destroying a false eye?
//!
//! If none of them finds a reason to allow the move, it is a bad self-atari.
//!
//! ```
//! use go_tactics::board::Stone;
//! use go_tactics::position::Position;
//! use go_tactics::tactics::selfatari::is_bad_selfatari;
//!
//! let (pos, mark) = Position::from_diagram(&[
//!     "* O",
//!     "O .",
//! ]).unwrap();
//! assert!(is_bad_selfatari(&pos, Stone::Black, mark.unwrap()));
//! ```

use log::trace;

use crate::board::{BoardView, GroupId, Point, STONE_KINDS, Stone};
use crate::position::str_coord;

/// Outcome of one phase of the check.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// The move is a bad self-atari.
    Bad,
    /// The move is acceptable.
    Fine,
    /// This phase could not tell; ask the next one.
    Undecided,
}

impl Verdict {
    /// `Some(true)` for a bad move, `Some(false)` for a fine one.
    #[inline]
    pub fn decided(self) -> Option<bool> {
        match self {
            Verdict::Bad => Some(true),
            Verdict::Fine => Some(false),
            Verdict::Undecided => None,
        }
    }
}

/// Neighborhood of the candidate point, bucketed by color.
///
/// Each neighboring group appears once per color. Empty neighbors are
/// recorded by point; all off-board neighbors share one entry.
#[derive(Default)]
struct SelfAtariState {
    group_count: [usize; STONE_KINDS],
    group_ids: [[GroupId; 4]; STONE_KINDS],
    /// A neighboring point where each recorded group was seen.
    seen_at: [[Point; 4]; STONE_KINDS],

    /// A friendly neighbor is in atari and nothing rescues it yet. Taking a
    /// ko stone then walks into a snapback.
    friend_has_no_libs: bool,
    /// Friendly 2-lib group that provides one liberty; we still need another.
    needs_more_lib: Option<GroupId>,
    /// The liberty `needs_more_lib` already provides.
    needs_more_lib_except: Point,
}

impl SelfAtariState {
    fn scan<B: BoardView + ?Sized>(b: &B, to: Point) -> Self {
        let mut s = SelfAtariState::default();
        for c in b.neighbors(to) {
            let color = b.at(c);
            let id = match color {
                Stone::Black | Stone::White => b.group_at(c),
                Stone::Empty => c,
                Stone::OffBoard => 0,
            };
            let k = color.index();
            if !s.groups(color).contains(&id) {
                s.group_ids[k][s.group_count[k]] = id;
                s.seen_at[k][s.group_count[k]] = c;
                s.group_count[k] += 1;
            }
        }
        s
    }

    #[inline]
    fn count(&self, color: Stone) -> usize {
        self.group_count[color.index()]
    }

    #[inline]
    fn groups(&self, color: Stone) -> &[GroupId] {
        let k = color.index();
        &self.group_ids[k][..self.group_count[k]]
    }
}

/// Whether playing `color` at `to` is a bad self-atari.
///
/// A point with more than one empty neighbor always keeps at least two
/// liberties, so it is never a self-atari.
pub fn is_bad_selfatari<B: BoardView + ?Sized>(b: &B, color: Stone, to: Point) -> bool {
    if b.immediate_liberty_count(to) > 1 {
        return false;
    }
    is_bad_selfatari_slow(b, color, to)
}

/// The full check behind [`is_bad_selfatari`].
///
/// # Panics
///
/// If `to` has more than one empty neighbor, or the board's group tables
/// are inconsistent.
pub fn is_bad_selfatari_slow<B: BoardView + ?Sized>(b: &B, color: Stone, to: Point) -> bool {
    trace!("sar check {} {}", color, str_coord(to));
    debug_assert!(color.is_stone());
    debug_assert_eq!(b.at(to), Stone::Empty);

    // Liberties gained here may only connect us back to ourselves; the
    // phases below cannot tell the difference.
    let mut s = SelfAtariState::scan(b, to);

    assert!(
        s.count(Stone::Empty) <= 1,
        "self-atari check at {} with {} empty neighbors",
        str_coord(to),
        s.count(Stone::Empty)
    );

    if let Some(bad) = examine_friendly_groups(b, color, to, &mut s).decided() {
        return bad;
    }
    trace!("no friendly group");

    if let Some(bad) = examine_enemy_groups(b, color, &s).decided() {
        return bad;
    }
    trace!("no escape");

    if let Some(bad) = setup_nakade_or_snapback(b, color, to, &s).decided() {
        return bad;
    }
    trace!("no nakade group");

    if let Some(bad) = check_throwin(b, color, to, &s).decided() {
        return bad;
    }
    trace!("no throw-in group");

    // Nothing connects out, captures or kills.
    true
}

/// Propose an alternative to a bad self-atari at `coord`.
///
/// Picks a random friendly neighbor group with two liberties and returns
/// its other liberty, provided playing there is not a bad self-atari
/// itself. Returns `None` when there is no such move.
pub fn selfatari_cousin<B: BoardView + ?Sized>(
    b: &B,
    color: Stone,
    coord: Point,
    rng: &mut fastrand::Rng,
) -> Option<Point> {
    let mut groups = [0; 4];
    let mut n = 0;
    for c in b.neighbors(coord) {
        if b.at(c) != color {
            continue;
        }
        let g = b.group_at(c);
        if b.group_libs(g) == 2 && !groups[..n].contains(&g) {
            groups[n] = g;
            n += 1;
        }
    }
    if n == 0 {
        return None;
    }

    let group = groups[rng.usize(..n)];
    let lib2 = b.group_other_lib(group, coord);
    if is_bad_selfatari(b, color, lib2) {
        return None;
    }
    Some(lib2)
}

/// A group with three liberties can be killed by filling one of them
/// carelessly. Returns true when, after `color` plays `to`, the opponent
/// can capture group `g` no matter how we answer.
///
/// ```text
/// . O X ! . ! O .     either ! leaves a group that dies to
/// . O X X X X X O     the next fill from the other side
/// # # # # # # # # #
/// ```
fn three_liberty_suicide<B: BoardView + ?Sized>(
    b: &B,
    g: GroupId,
    color: Stone,
    to: Point,
    s: &SelfAtariState,
) -> bool {
    let libs = b.liberties(g);
    assert!(
        libs.len() == 3 && libs.contains(&to),
        "three-liberty group {g} does not have {} as a liberty",
        str_coord(to)
    );
    let mut other_libs = [0; 2];
    let mut other_libs_adj = [false; 2];
    for (j, &lib) in libs.iter().filter(|&&lib| lib != to).enumerate() {
        other_libs[j] = lib;
        other_libs_adj[j] = b.is_adjacent(lib, to);
    }

    // The move is useful if it brings a new liberty, separates the two
    // remaining liberties, or joins another friendly group.
    let shared = usize::from(other_libs_adj[0] || other_libs_adj[1]);
    if b.immediate_liberty_count(to) > shared {
        return false;
    }
    assert!(!(other_libs_adj[0] && other_libs_adj[1]));
    if s.count(color) > 1 {
        return false;
    }

    // Shortening an enemy group may be the point of the move.
    if s.groups(color.other())
        .iter()
        .any(|&eg| b.group_libs(eg) <= 2)
    {
        return false;
    }

    trace!("3-lib danger");

    // Now the group is down to two liberties. Suppose the opponent fills
    // one of them; check whether extending at the other one saves us.
    let other_libs_neighbors = b.is_adjacent(other_libs[0], other_libs[1]);
    for i in 0..2 {
        let null_libs = usize::from(other_libs_neighbors) + usize::from(other_libs_adj[i]);
        if b.is_one_point_eye(other_libs[1 - i], color) {
            // Filling around our own eye is normal endgame play.
            return false;
        }
        if b.immediate_liberty_count(other_libs[i]) > null_libs + 1 {
            // Extending here gains liberties.
            // TODO: a ladder can still catch the group after it extends here.
            continue;
        }
        let connects = b.neighbors(other_libs[i]).iter().any(|&c| {
            b.at(c) == color && b.group_at(c) != g && b.group_libs(b.group_at(c)) > 1
        });
        if connects {
            continue;
        }
        // Captures that would help are better played before this move, so
        // they are not considered here.
        trace!("3-lib dangerous: {}", str_coord(other_libs[i]));
        return true;
    }

    false
}

/// Phase 1: look for a friendly neighbor group that keeps us alive.
fn examine_friendly_groups<B: BoardView + ?Sized>(
    b: &B,
    color: Stone,
    to: Point,
    s: &mut SelfAtariState,
) -> Verdict {
    for i in 0..s.count(color) {
        let g = s.group_ids[color.index()][i];
        let libs = b.group_libs(g);

        if libs == 1 {
            if s.needs_more_lib.is_none() {
                s.friend_has_no_libs = true;
            }
            continue;
        }

        if libs > 2 {
            if libs == 3 && three_liberty_suicide(b, g, color, to, s) {
                return Verdict::Bad;
            }
            return Verdict::Fine;
        }

        // Two liberties: joining keeps lib2, so we need one more from
        // somewhere else.
        let lib2 = b.group_other_lib(g, to);
        if s.needs_more_lib.is_some_and(|other| other != g)
            && s.needs_more_lib_except != lib2
        {
            // A second group brings a different liberty.
            return Verdict::Fine;
        }

        if s.count(Stone::Empty) > 1 {
            return Verdict::Fine;
        }
        if s.count(Stone::Empty) > 0 && !b.is_adjacent(lib2, to) {
            return Verdict::Fine;
        }

        // A capture might still provide the missing liberty.
        s.needs_more_lib = Some(g);
        s.needs_more_lib_except = lib2;
        s.friend_has_no_libs = false;
    }

    Verdict::Undecided
}

/// Phase 2: look for an adjacent enemy group in atari whose capture gives
/// us enough liberties.
fn examine_enemy_groups<B: BoardView + ?Sized>(b: &B, color: Stone, s: &SelfAtariState) -> Verdict {
    let enemy = color.other();
    let mut can_capture: Option<GroupId> = None;

    for i in 0..s.count(enemy) {
        let g = s.group_ids[enemy.index()][i];
        if b.group_libs(g) > 1 {
            continue;
        }

        // Capturing leaves us two liberties if we already have an outside
        // one, or if more than one stone comes off the board.
        if s.count(Stone::Empty) > 0 || !b.group_is_onestone(g) {
            return Verdict::Fine;
        }
        // Taking a single stone in a ko shape is ordinary ko play unless
        // a friendly group in atari depends on it.
        let stone = s.seen_at[enemy.index()][i];
        if b.neighbor_count_at(stone, color) + b.neighbor_count_at(stone, Stone::OffBoard) == 3
            && !s.friend_has_no_libs
        {
            return Verdict::Fine;
        }
        // Two sources of one liberty each add up.
        if s.needs_more_lib.is_some() || can_capture.is_some_and(|c| c != g) {
            return Verdict::Fine;
        }
        can_capture = Some(g);
    }

    trace!("no cap group");

    if s.needs_more_lib.is_none() && can_capture.is_none() && s.count(Stone::Empty) == 0 {
        // Not even a self-atari: the stone would have no liberty at all.
        trace!("suicide");
        return Verdict::Bad;
    }
    // Falling through when only a pending friendly rescue is missing is a
    // heuristic call; the later phases may still accept the move.

    Verdict::Undecided
}

/// Phase 3: a self-atari is acceptable when it puts an enemy group in atari
/// from the inside (nakade). Eye falsification and snapback setups are
/// special cases of this.
///
/// ```text
/// O O O . .
/// X X O O .
/// X . X O .   * kills the eye at the left without the
/// X X X O O   throw-in shape of phase 4
/// X O * . .
/// ```
fn setup_nakade_or_snapback<B: BoardView + ?Sized>(
    b: &B,
    color: Stone,
    to: Point,
    s: &SelfAtariState,
) -> Verdict {
    for &g in s.groups(color.other()) {
        if nakade_against(b, color, to, s, g) {
            return Verdict::Fine;
        }
        // Only a stone-free throw-in is worth checking against the other
        // enemy groups.
        if s.count(color) > 0 {
            return Verdict::Undecided;
        }
    }

    Verdict::Undecided
}

/// Whether playing at `to` is a legitimate inside atari on enemy group `g`.
fn nakade_against<B: BoardView + ?Sized>(
    b: &B,
    color: Stone,
    to: Point,
    s: &SelfAtariState,
    g: GroupId,
) -> bool {
    if b.group_libs(g) != 2 {
        return false;
    }

    // The enemy's other liberty must be internal, and capturing us there
    // must not make the enemy any safer.
    let lib2 = b.group_other_lib(g, to);
    for c in b.neighbors(lib2) {
        match b.at(c) {
            Stone::OffBoard => continue,

            // Any empty point next to lib2 besides `to` means the group
            // has outside room; a nakade from outside is pointless.
            Stone::Empty => {
                if c != to {
                    return false;
                }
            }

            // Our stone there must be a 2-lib group too. A stronger group
            // should simply fill lib2 first; an atari'd one should extend.
            //
            // X X X X
            // X X a X   a is refused: O at b would capture two
            // X O b X   separate groups and make two eyes.
            // X X X X
            c_color if c_color == color => {
                if b.group_libs(b.group_at(c)) != 2 {
                    return false;
                }
            }

            // Enemy stone: the same group, a group in atari, or a group
            // sharing our point as a liberty.
            _ => {
                let g2 = b.group_at(c);
                if g == g2 || b.group_libs(g2) == 1 {
                    continue;
                }
                if b.group_libs(g2) == 2 && b.liberties(g2).contains(&to) {
                    continue;
                }
                return false;
            }
        }
    }

    // Tell nakade from eye falsification; never sacrifice more than two
    // stones to spoil an eye.
    let friends = s.groups(color);
    if friends.is_empty() {
        // Plain throw-in.
        return true;
    }
    if let &[g2] = friends {
        if b.group_is_onestone(g2) {
            // a O O O O X  b O O O X  c O O O X
            //   O . X . O    O X . .    O . X .
            //   # # # # #    # # # #    # # # #
            //
            // b is wanted (O may lack other eyes). a is left to the
            // throw-in phase. c is never wanted.
            assert!(b.group_libs(g2) <= 2);
            return b.group_libs(g2) == 1;
        }
    }

    // Bigger shapes: our merged group must end up with lib2 as its liberty,
    // which is what makes it a real nakade.
    for &g2 in friends {
        let libs = b.group_libs(g2);
        assert!(libs <= 2, "friendly group {g2} reached nakade check with {libs} libs");
        if libs == 2 {
            if !b.liberties(g2).contains(&lib2) {
                return false;
            }
        } else {
            assert_eq!(b.liberties(g2)[0], to);
        }
    }

    true
}

/// Phase 4: throw-in into a false eye.
///
/// ```text
/// X X X O   X X X O   X X X X X
/// X . * X   * O . X   * O O . X
/// # # # #   # # # #   # # # # #
/// ```
fn check_throwin<B: BoardView + ?Sized>(
    b: &B,
    color: Stone,
    to: Point,
    s: &SelfAtariState,
) -> Verdict {
    let enemy = color.other();
    let offboard = b.neighbor_count_at(to, Stone::OffBoard);
    // No throw-in into a corner.
    if offboard >= 2
        || b.neighbor_count_at(to, enemy) + offboard != 3
        || !b.is_false_eyelike(to, enemy)
    {
        return Verdict::Undecided;
    }

    match s.groups(color) {
        [] => {
            // O X .
            // . * X   not a throw-in when the empty neighbor leads out
            // # # #
            for c in b.neighbors(to) {
                if b.at(c) == Stone::Empty
                    && b.neighbor_count_at(c, enemy) + b.neighbor_count_at(c, Stone::OffBoard) < 2
                {
                    return Verdict::Undecided;
                }
            }
            Verdict::Fine
        }

        &[g] => {
            let libs = b.group_libs(g);
            assert!(libs <= 2);
            if libs == 1 {
                // Suicide.
                return Verdict::Bad;
            }
            // Throwing in more than one stone spoils nothing.
            if b.group_is_onestone(g) {
                Verdict::Fine
            } else {
                Verdict::Undecided
            }
        }

        more => unreachable!(
            "{} friendly groups next to a false eye at {}",
            more.len(),
            str_coord(to)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::{Position, coord_at};

    fn state(rows: &[&str]) -> (Position, Point, SelfAtariState) {
        let (pos, mark) = Position::from_diagram(rows).unwrap();
        let to = mark.unwrap();
        let s = SelfAtariState::scan(&pos, to);
        (pos, to, s)
    }

    #[test]
    fn test_scan_dedups_groups() {
        // Both black neighbors belong to one group.
        let (_, _, s) = state(&[
            "X X .",
            "X * O",
            ". O .",
        ]);
        assert_eq!(s.count(Stone::Black), 1);
        assert_eq!(s.count(Stone::White), 2);
        assert_eq!(s.count(Stone::Empty), 0);
    }

    #[test]
    fn test_scan_counts_edge() {
        let (_, to, s) = state(&["* X", "O ."]);
        assert_eq!(s.count(Stone::OffBoard), 1);
        assert_eq!(s.groups(Stone::Black), &[coord_at(0, 1)]);
        assert_eq!(s.seen_at[Stone::White.index()][0], coord_at(1, 0));
        assert_eq!(to, coord_at(0, 0));
    }

    #[test]
    fn test_friendly_group_with_many_libs_is_fine() {
        let (pos, to, mut s) = state(&["* X X X", "O . . ."]);
        assert_eq!(examine_friendly_groups(&pos, Stone::Black, to, &mut s), Verdict::Fine);
    }

    #[test]
    fn test_friendly_group_in_atari_marks_flag() {
        let (pos, to, mut s) = state(&[
            ". X O * O .",
            ". O X X O .",
            ". . O O . .",
        ]);
        assert_eq!(
            examine_friendly_groups(&pos, Stone::Black, to, &mut s),
            Verdict::Undecided
        );
        assert!(s.friend_has_no_libs);
        assert_eq!(s.needs_more_lib, None);
    }

    #[test]
    fn test_two_lib_friend_records_rescue() {
        let (pos, to, mut s) = state(&["O X * O", "O X O ."]);
        assert_eq!(
            examine_friendly_groups(&pos, Stone::Black, to, &mut s),
            Verdict::Undecided
        );
        assert_eq!(s.needs_more_lib, Some(pos.group_at(coord_at(0, 1))));
        assert_eq!(s.needs_more_lib_except, coord_at(2, 1));
    }

    #[test]
    fn test_enemy_phase_plain_suicide() {
        let (pos, _, s) = state(&["* O", "O ."]);
        assert_eq!(examine_enemy_groups(&pos, Stone::Black, &s), Verdict::Bad);
    }

    #[test]
    fn test_three_liberty_suicide_on_edge() {
        let (pos, to, s) = state(&[
            ". O X * . . O .",
            ". O X X X X X O",
            "X X O O O O O O",
        ]);
        let g = pos.group_at(coord_at(0, 2));
        assert_eq!(pos.group_libs(g), 3);
        assert!(three_liberty_suicide(&pos, g, Stone::Black, to, &s));
    }

    #[test]
    fn test_nakade_other_liberty_must_be_internal() {
        // The white group's other liberty opens to the outside.
        let (pos, to, s) = state(&[
            "* . . X",
            "O O X .",
            "X X X .",
        ]);
        let g = pos.group_at(coord_at(1, 0));
        assert_eq!(pos.group_libs(g), 2);
        assert!(!nakade_against(&pos, Stone::Black, to, &s, g));

        let (pos, to, s) = state(&[
            "* . O X",
            "O O O X",
            "X X X X",
        ]);
        let g = pos.group_at(coord_at(1, 0));
        assert!(nakade_against(&pos, Stone::Black, to, &s, g));
    }

    #[test]
    fn test_nakade_scan_stops_with_friends_present() {
        let (pos, to, s) = state(&[
            "X X * O . .",
            ". O O X . .",
            "O O X X . .",
            "X X X . . .",
        ]);
        let outside = pos.group_at(coord_at(0, 3));
        let inside = pos.group_at(coord_at(1, 1));
        assert_eq!(s.groups(Stone::White), &[outside, inside]);
        assert!(!nakade_against(&pos, Stone::Black, to, &s, outside));
        assert!(nakade_against(&pos, Stone::Black, to, &s, inside));
        assert_eq!(
            setup_nakade_or_snapback(&pos, Stone::Black, to, &s),
            Verdict::Undecided
        );
    }
}
