//! Go position representation and move execution.
//!
//! This module provides the concrete board behind [`BoardView`]:
//! - Board state using a 1D array with padding
//! - Group and liberty tables, rebuilt after every stone change
//! - Stone placement, capture detection and ko
//! - Eye shape tests used by the tactical readers and playouts
//!
//! Colors are absolute (`Black`/`White`); the side to move is tracked in
//! [`Position::to_play`].

use std::fmt;

use crate::board::{BoardView, GroupId, Point, STONE_KINDS, Stone};
use crate::constants::*;

/// Result of attempting to play a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Point is not empty
    Occupied,
    /// Move violates ko rule
    Ko,
    /// Move would be suicide (no liberties after capture resolution)
    Suicide,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::Occupied => write!(f, "illegal move: point not EMPTY"),
            MoveError::Ko => write!(f, "illegal move: retakes ko"),
            MoveError::Suicide => write!(f, "illegal move: suicide"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Problems found while loading a position from an ASCII diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagramError {
    /// Unknown character at (row, column)
    BadChar { row: usize, col: usize, ch: char },
    /// More rows or columns than the board has
    TooLarge,
    /// The group containing this stone has no liberties
    NoLiberties(Point),
    /// More than one `*` marker
    ExtraMarker,
}

impl fmt::Display for DiagramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagramError::BadChar { row, col, ch } => {
                write!(f, "unexpected character {ch:?} at row {row}, column {col}")
            }
            DiagramError::TooLarge => write!(f, "diagram does not fit on a {N}x{N} board"),
            DiagramError::NoLiberties(pt) => {
                write!(f, "group at {} has no liberties", str_coord(*pt))
            }
            DiagramError::ExtraMarker => write!(f, "more than one '*' marker"),
        }
    }
}

impl std::error::Error for DiagramError {}

/// Bookkeeping for one group of stones.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupInfo {
    /// Number of stones in the group
    pub stones: u16,
    /// Exact number of liberties
    pub libs: u16,
    lib: [Point; MAX_TRACKED_LIBS],
}

impl GroupInfo {
    fn add_lib(&mut self, pt: Point) {
        if (self.libs as usize) < MAX_TRACKED_LIBS {
            self.lib[self.libs as usize] = pt;
        }
        self.libs += 1;
    }

    /// The tracked liberties (all of them when `libs <= MAX_TRACKED_LIBS`).
    pub fn liberties(&self) -> &[Point] {
        &self.lib[..(self.libs as usize).min(MAX_TRACKED_LIBS)]
    }
}

/// A Go position (board state).
///
/// The board is represented as a 1D array with padding around the edges.
#[derive(Clone, PartialEq)]
pub struct Position {
    /// Board contents; padding points are `OffBoard`
    pub color: [Stone; BOARDSIZE],
    /// Group id per point (0 for empty and padding points)
    group: [GroupId; BOARDSIZE],
    /// Group info, indexed by group id
    groups: [GroupInfo; BOARDSIZE],
    /// Side to move
    pub to_play: Stone,
    /// Move number (0 = start of game)
    pub n: usize,
    /// Ko point (`PASS_MOVE` if no ko)
    pub ko: Point,
    /// Last move played
    pub last: Point,
    /// Second-to-last move
    pub last2: Point,
    /// Stones captured by Black and White
    pub captures: [u32; 2],
    /// Komi (compensation points for White)
    pub komi: f32,
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    pub fn new() -> Self {
        let mut p = Position {
            color: [Stone::OffBoard; BOARDSIZE],
            group: [0; BOARDSIZE],
            groups: [GroupInfo::default(); BOARDSIZE],
            to_play: Stone::Black,
            n: 0,
            ko: PASS_MOVE,
            last: PASS_MOVE,
            last2: PASS_MOVE,
            captures: [0; 2],
            komi: 7.5,
        };
        empty_position(&mut p);
        p
    }

    /// Load a position from an ASCII diagram anchored at the top-left corner.
    ///
    /// `X` is Black, `O` is White, `.` is empty and `*` marks an empty point
    /// of interest, which is returned alongside the position. Whitespace is
    /// ignored; points not covered by the diagram stay empty. Black is to play.
    pub fn from_diagram(rows: &[&str]) -> Result<(Position, Option<Point>), DiagramError> {
        if rows.len() > N {
            return Err(DiagramError::TooLarge);
        }
        let mut pos = Position::new();
        let mut marker = None;

        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() > N {
                return Err(DiagramError::TooLarge);
            }
            for (col, ch) in cells.into_iter().enumerate() {
                let pt = coord_at(row, col);
                pos.color[pt] = match ch {
                    'X' => Stone::Black,
                    'O' => Stone::White,
                    '.' => Stone::Empty,
                    '*' => {
                        if marker.replace(pt).is_some() {
                            return Err(DiagramError::ExtraMarker);
                        }
                        Stone::Empty
                    }
                    _ => return Err(DiagramError::BadChar { row, col, ch }),
                };
            }
        }

        rebuild_groups(&mut pos);
        for pt in BOARD_IMIN..BOARD_IMAX {
            if pos.color[pt].is_stone() && pos.groups[pos.group[pt]].libs == 0 {
                return Err(DiagramError::NoLiberties(pt));
            }
        }
        Ok((pos, marker))
    }

    /// Group bookkeeping for a group id.
    pub fn group_info(&self, g: GroupId) -> &GroupInfo {
        &self.groups[g]
    }
}

impl BoardView for Position {
    #[inline]
    fn at(&self, pt: Point) -> Stone {
        self.color[pt]
    }

    #[inline]
    fn group_at(&self, pt: Point) -> GroupId {
        self.group[pt]
    }

    #[inline]
    fn group_libs(&self, g: GroupId) -> usize {
        self.groups[g].libs as usize
    }

    fn liberties(&self, g: GroupId) -> &[Point] {
        self.groups[g].liberties()
    }

    fn group_is_onestone(&self, g: GroupId) -> bool {
        self.groups[g].stones == 1
    }

    #[inline]
    fn neighbors(&self, pt: Point) -> [Point; 4] {
        neighbors(pt)
    }

    fn is_eyelike(&self, pt: Point, eye_color: Stone) -> bool {
        neighbors(pt).iter().all(|&n| {
            let c = self.color[n];
            c == eye_color || c == Stone::OffBoard
        })
    }

    fn is_false_eyelike(&self, pt: Point, eye_color: Stone) -> bool {
        let mut diag = [0usize; STONE_KINDS];
        for d in diagonal_neighbors(pt) {
            diag[self.color[d].index()] += 1;
        }
        // Two enemy diagonals in the middle, one at the edge or in the corner.
        let enemy = diag[eye_color.other().index()] + usize::from(diag[Stone::OffBoard.index()] > 0);
        enemy >= 2
    }
}

/// Convert a (row, column) pair counted from the top-left corner to a Point.
#[inline]
pub fn coord_at(row: usize, col: usize) -> Point {
    (row + 1) * (N + 1) + col + 1
}

/// Reset a position to the initial empty board state.
///
/// The board is laid out as a 1D array with padding:
/// - Index 0 to N: top padding (out of bounds)
/// - Each row: left padding + N playable points
/// - Bottom padding
pub fn empty_position(pos: &mut Position) {
    let mut k = 0;
    for _col in 0..=N {
        pos.color[k] = Stone::OffBoard;
        k += 1;
    }
    for _row in 1..=N {
        pos.color[k] = Stone::OffBoard;
        k += 1;
        for _col in 1..=N {
            pos.color[k] = Stone::Empty;
            k += 1;
        }
    }
    for _col in 0..W {
        pos.color[k] = Stone::OffBoard;
        k += 1;
    }
    pos.group = [0; BOARDSIZE];
    pos.groups = [GroupInfo::default(); BOARDSIZE];
    pos.to_play = Stone::Black;
    pos.ko = PASS_MOVE;
    pos.last = PASS_MOVE;
    pos.last2 = PASS_MOVE;
    pos.captures = [0; 2];
    pos.n = 0;
}

/// Execute a pass move.
///
/// This increments the move counter, hands the turn over, and clears the ko.
pub fn pass_move(pos: &mut Position) {
    pos.n += 1;
    pos.last2 = pos.last;
    pos.last = PASS_MOVE;
    pos.ko = PASS_MOVE;
    pos.to_play = pos.to_play.other();
}

/// Check if a point is "eyeish" (surrounded by stones of one color).
///
/// A point is eyeish if all its orthogonal neighbors are either
/// out of bounds or stones of the same color.
///
/// Returns the color of the surrounding stones. This may be a false eye.
pub fn is_eyeish(pos: &Position, pt: Point) -> Option<Stone> {
    let mut eyecolor = None;
    for n in neighbors(pt) {
        match pos.color[n] {
            Stone::OffBoard => continue,
            Stone::Empty => return None,
            c => match eyecolor {
                None => eyecolor = Some(c),
                Some(e) if e != c => return None,
                Some(_) => {}
            },
        }
    }
    eyecolor
}

/// Whether `color` may play at `pt`: the point is empty, not the ko point,
/// and the stone would have a liberty once captures are resolved.
pub fn is_legal(pos: &Position, pt: Point, color: Stone) -> bool {
    if pt >= BOARDSIZE || pos.color[pt] != Stone::Empty || pt == pos.ko {
        return false;
    }
    neighbors(pt).iter().any(|&n| match pos.color[n] {
        Stone::Empty => true,
        c if c == color => pos.group_libs(pos.group[n]) > 1,
        c if c == color.other() => pos.group_libs(pos.group[n]) == 1,
        _ => false,
    })
}

/// Play a move for the side to move.
pub fn play_move(pos: &mut Position, pt: Point) -> Result<(), MoveError> {
    let color = pos.to_play;
    play_stone(pos, pt, color)
}

/// Place a stone of the given color at `pt`.
///
/// Handles pass moves, legality checking, captures and ko detection. The
/// turn passes to the opponent of `color`.
pub fn play_stone(pos: &mut Position, pt: Point, color: Stone) -> Result<(), MoveError> {
    if pt == PASS_MOVE {
        pos.to_play = color;
        pass_move(pos);
        return Ok(());
    }
    if pos.color[pt] != Stone::Empty {
        return Err(MoveError::Occupied);
    }
    if pt == pos.ko {
        return Err(MoveError::Ko);
    }
    if !is_legal(pos, pt, color) {
        return Err(MoveError::Suicide);
    }

    // Check if playing into enemy eye (for ko detection)
    let in_enemy_eye = is_eyeish(pos, pt) == Some(color.other());

    pos.color[pt] = color;
    let mut captured = 0u32;
    let mut capture_point = PASS_MOVE;
    for n in neighbors(pt) {
        // A second neighbor of an already removed group reads as empty here.
        if pos.color[n] == color.other() && pos.group_libs(pos.group[n]) == 1 {
            captured += remove_group(pos, pos.group[n]);
            capture_point = n;
        }
    }

    // Set ko if captured exactly one stone in an eye
    pos.ko = if captured == 1 && in_enemy_eye {
        capture_point
    } else {
        PASS_MOVE
    };
    pos.captures[capture_index(color)] += captured;

    rebuild_groups(pos);
    pos.n += 1;
    pos.last2 = pos.last;
    pos.last = pt;
    pos.to_play = color.other();
    Ok(())
}

#[inline]
fn capture_index(color: Stone) -> usize {
    match color {
        Stone::White => 1,
        _ => 0,
    }
}

/// Remove every stone of group `g`, returning the number removed.
fn remove_group(pos: &mut Position, g: GroupId) -> u32 {
    let mut count = 0;
    for pt in BOARD_IMIN..BOARD_IMAX {
        if pos.color[pt].is_stone() && pos.group[pt] == g {
            pos.color[pt] = Stone::Empty;
            pos.group[pt] = 0;
            count += 1;
        }
    }
    count
}

/// Recompute group ids and liberty tables from the stones on the board.
///
/// Each group is flood-filled from its first stone in scan order, whose
/// index becomes the group id. `lib_owner` marks a liberty with the id of
/// the last group that counted it.
fn rebuild_groups(pos: &mut Position) {
    pos.group = [0; BOARDSIZE];
    let mut stack = Vec::with_capacity(N * N);
    let mut lib_owner = [0; BOARDSIZE];

    for start in BOARD_IMIN..BOARD_IMAX {
        let color = pos.color[start];
        if !color.is_stone() || pos.group[start] != 0 {
            continue;
        }

        let mut info = GroupInfo::default();
        pos.group[start] = start;
        stack.push(start);

        while let Some(pt) = stack.pop() {
            info.stones += 1;
            for n in neighbors(pt) {
                match pos.color[n] {
                    Stone::Empty => {
                        if lib_owner[n] != start {
                            lib_owner[n] = start;
                            info.add_lib(n);
                        }
                    }
                    c if c == color && pos.group[n] == 0 => {
                        pos.group[n] = start;
                        stack.push(n);
                    }
                    _ => {}
                }
            }
        }
        pos.groups[start] = info;
    }
}

/// Get the 4 orthogonal neighbors (N, E, S, W) of a point.
#[inline]
pub fn neighbors(pt: Point) -> [Point; 4] {
    [
        (pt as isize + DELTA[0]) as usize,
        (pt as isize + DELTA[1]) as usize,
        (pt as isize + DELTA[2]) as usize,
        (pt as isize + DELTA[3]) as usize,
    ]
}

/// Get the 4 diagonal neighbors (NE, SE, SW, NW) of a point.
#[inline]
pub fn diagonal_neighbors(pt: Point) -> [Point; 4] {
    [
        (pt as isize + DELTA[4]) as usize,
        (pt as isize + DELTA[5]) as usize,
        (pt as isize + DELTA[6]) as usize,
        (pt as isize + DELTA[7]) as usize,
    ]
}

/// Parse a coordinate string (e.g., "D4", "pass") into a Point.
///
/// Go coordinates use letters A-T (skipping I) for columns and 1-N for rows.
/// Returns `Some(PASS_MOVE)` for "pass" and `None` for anything off the board.
pub fn parse_coord(s: &str) -> Option<Point> {
    if s.eq_ignore_ascii_case("pass") {
        return Some(PASS_MOVE);
    }

    let bytes = s.as_bytes();
    if bytes.len() < 2 {
        return None;
    }

    let col_char = bytes[0].to_ascii_uppercase();
    if !col_char.is_ascii_uppercase() || col_char == b'I' {
        return None;
    }
    let mut col = (col_char - b'A' + 1) as usize;
    // Skip 'I' column (Go convention to avoid confusion with 'J')
    if col_char > b'I' {
        col -= 1;
    }

    let row: usize = s[1..].parse().ok()?;
    if !(1..=N).contains(&col) || !(1..=N).contains(&row) {
        return None;
    }

    Some((N - row + 1) * (N + 1) + col)
}

/// Convert a Point to a coordinate string (e.g., "D4").
///
/// Returns "pass" for `PASS_MOVE`.
pub fn str_coord(pt: Point) -> String {
    if pt == PASS_MOVE {
        return "pass".into();
    }

    let row = pt / (N + 1);
    let col = pt % (N + 1);

    // Convert column to letter, skipping 'I'
    let mut c = (b'@' + col as u8) as char;
    if c >= 'I' {
        c = (c as u8 + 1) as char;
    }

    format!("{c}{}", N + 1 - row)
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 1..=N {
            let c = str_coord(col + N + 1);
            write!(f, "{} ", &c[..1])?;
        }
        writeln!(f)?;
        for row in 1..=N {
            write!(f, "{:>2} ", N + 1 - row)?;
            for col in 1..=N {
                let pt = row * (N + 1) + col;
                let ch = if pt == self.last {
                    match self.color[pt] {
                        Stone::Black => 'x',
                        Stone::White => 'o',
                        other => other.to_char(),
                    }
                } else {
                    self.color[pt].to_char()
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "move {} ({} to play)", self.n, self.to_play)?;
        write!(f, "{self}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> Point {
        parse_coord(s).expect("valid coordinate")
    }

    #[test]
    fn test_empty_position() {
        let pos = Position::new();
        let center = (N / 2 + 1) * (N + 1) + (N / 2 + 1);
        assert_eq!(pos.color[center], Stone::Empty);
        assert_eq!(pos.n, 0);
        assert_eq!(pos.ko, PASS_MOVE);
        assert_eq!(pos.to_play, Stone::Black);
    }

    #[test]
    fn test_parse_str_coord_roundtrip() {
        let pos = Position::new();
        for row in 1..=N {
            for col in 1..=N {
                let pt = row * (N + 1) + col;
                assert_eq!(pos.color[pt], Stone::Empty);
                let s = str_coord(pt);
                assert_eq!(parse_coord(&s), Some(pt), "Failed roundtrip for {s}");
            }
        }
    }

    #[test]
    fn test_parse_coord_rejects_garbage() {
        assert_eq!(parse_coord("pass"), Some(PASS_MOVE));
        assert_eq!(parse_coord("I3"), None);
        assert_eq!(parse_coord("A0"), None);
        assert_eq!(parse_coord("Z1"), None);
        assert_eq!(parse_coord("A99"), None);
        assert_eq!(parse_coord("11"), None);
    }

    #[test]
    fn test_coord_at_matches_parse() {
        assert_eq!(coord_at(0, 0), at(&format!("A{N}")));
        assert_eq!(coord_at(N - 1, 0), at("A1"));
    }

    #[test]
    fn test_play_move_basic() {
        let mut pos = Position::new();
        let pt = at("D4");
        assert_eq!(play_move(&mut pos, pt), Ok(()));
        assert_eq!(pos.n, 1);
        assert_eq!(pos.last, pt);
        assert_eq!(pos.color[pt], Stone::Black);
        assert_eq!(pos.to_play, Stone::White);
        assert_eq!(play_move(&mut pos, pt), Err(MoveError::Occupied));
    }

    #[test]
    fn test_group_liberties() {
        let mut pos = Position::new();
        let pt = at("D4");
        play_move(&mut pos, pt).unwrap();
        let g = pos.group_at(pt);
        assert_eq!(g, pt);
        assert_eq!(pos.group_libs(g), 4, "Single stone should have 4 liberties");
        assert!(pos.group_is_onestone(g));

        // Corner stone
        let (pos, _) = Position::from_diagram(&["X"]).unwrap();
        let g = pos.group_at(coord_at(0, 0));
        assert_eq!(pos.group_libs(g), 2);
        let libs = pos.liberties(g);
        assert!(libs.contains(&coord_at(0, 1)));
        assert!(libs.contains(&coord_at(1, 0)));
    }

    #[test]
    fn test_groups_merge() {
        let (pos, _) = Position::from_diagram(&[". X X", ". . X"]).unwrap();
        let g = pos.group_at(coord_at(0, 1));
        assert_eq!(pos.group_at(coord_at(1, 2)), g);
        assert_eq!(pos.group_info(g).stones, 3);
        assert_eq!(pos.group_libs(g), 5);
        assert_eq!(pos.liberties(g).len(), MAX_TRACKED_LIBS);
    }

    #[test]
    fn test_play_move_suicide() {
        let (mut pos, _) = Position::from_diagram(&[". X", "X ."]).unwrap();
        pos.to_play = Stone::White;
        let corner = coord_at(0, 0);
        assert!(!is_legal(&pos, corner, Stone::White));
        assert_eq!(play_move(&mut pos, corner), Err(MoveError::Suicide));
        assert_eq!(pos.color[corner], Stone::Empty);
        assert_eq!(pos.n, 0);
    }

    #[test]
    fn test_capture() {
        let (mut pos, mark) = Position::from_diagram(&[
            ". X . .",
            "X O X .",
            ". * . .",
        ])
        .unwrap();
        let pt = mark.unwrap();
        assert_eq!(play_stone(&mut pos, pt, Stone::Black), Ok(()));
        assert_eq!(pos.color[coord_at(1, 1)], Stone::Empty);
        assert_eq!(pos.captures, [1, 0]);
        // The capturing stone gained the captured point as a liberty.
        assert_eq!(pos.group_libs(pos.group_at(pt)), 4);
    }

    #[test]
    fn test_capture_multi_stone() {
        let (mut pos, mark) = Position::from_diagram(&["* O O X", ". X X ."]).unwrap();
        play_stone(&mut pos, mark.unwrap(), Stone::Black).unwrap();
        assert_eq!(pos.color[coord_at(0, 1)], Stone::Empty);
        assert_eq!(pos.color[coord_at(0, 2)], Stone::Empty);
        assert_eq!(pos.captures, [2, 0]);
        assert_eq!(pos.ko, PASS_MOVE, "multi-stone capture never sets ko");
    }

    #[test]
    fn test_ko_rule() {
        let (mut pos, _) = Position::from_diagram(&[
            ". X O .",
            "X O * O",
            ". X O .",
        ])
        .unwrap();
        let take = coord_at(1, 2);
        play_stone(&mut pos, take, Stone::Black).unwrap();
        let ko = coord_at(1, 1);
        assert_eq!(pos.color[ko], Stone::Empty);
        assert_eq!(pos.ko, ko);
        assert_eq!(play_stone(&mut pos, ko, Stone::White), Err(MoveError::Ko));

        // Ko threat and answer clear the ko.
        play_stone(&mut pos, at("J1"), Stone::White).unwrap();
        assert_eq!(pos.ko, PASS_MOVE);
    }

    #[test]
    fn test_eye_shapes() {
        let (pos, _) = Position::from_diagram(&[
            ". X . O",
            "X X X O",
            ". . . .",
        ])
        .unwrap();
        let corner = coord_at(0, 0);
        assert!(pos.is_eyelike(corner, Stone::Black));
        assert!(!pos.is_false_eyelike(corner, Stone::Black));
        assert!(pos.is_one_point_eye(corner, Stone::Black));
        assert_eq!(is_eyeish(&pos, corner), Some(Stone::Black));

        // One enemy diagonal on the edge is enough to make an eye false.
        let edge = coord_at(0, 2);
        assert!(!pos.is_eyelike(edge, Stone::Black));
        assert!(pos.is_false_eyelike(edge, Stone::Black));

        let open = coord_at(2, 2);
        assert_eq!(is_eyeish(&pos, open), None);
    }

    #[test]
    fn test_diagram_errors() {
        assert!(matches!(
            Position::from_diagram(&["X ? ."]),
            Err(DiagramError::BadChar { row: 0, col: 1, ch: '?' })
        ));
        assert_eq!(
            Position::from_diagram(&["X O", "O ."]).err(),
            Some(DiagramError::NoLiberties(coord_at(0, 0)))
        );
        assert_eq!(
            Position::from_diagram(&["* *"]).err(),
            Some(DiagramError::ExtraMarker)
        );
        let wide = ".".repeat(N + 1);
        assert_eq!(
            Position::from_diagram(&[wide.as_str()]).err(),
            Some(DiagramError::TooLarge)
        );
    }

    #[test]
    fn test_shared_liberty_counts_for_each_group() {
        let (mut pos, _) = Position::from_diagram(&[
            "X . O",
            ". X O",
        ])
        .unwrap();
        let shared = coord_at(0, 1);
        let corner = pos.group_at(coord_at(0, 0));
        let white = pos.group_at(coord_at(0, 2));
        assert_eq!(pos.liberties(corner), &[shared, coord_at(1, 0)]);
        assert_eq!(pos.group_libs(pos.group_at(coord_at(1, 1))), 3);
        assert!(pos.liberties(white).contains(&shared));
        assert_eq!(pos.group_libs(white), 4);

        // Tables stay exact after stones are added.
        play_stone(&mut pos, coord_at(1, 0), Stone::White).unwrap();
        let corner = pos.group_at(coord_at(0, 0));
        assert_eq!(pos.liberties(corner), &[shared]);
        assert_eq!(pos.group_libs(pos.group_at(coord_at(1, 0))), 1);
    }

    #[test]
    fn test_pass_clears_ko_and_swaps_turn() {
        let mut pos = Position::new();
        pos.ko = at("C3");
        pass_move(&mut pos);
        assert_eq!(pos.ko, PASS_MOVE);
        assert_eq!(pos.to_play, Stone::White);
        assert_eq!(pos.last, PASS_MOVE);
    }
}
