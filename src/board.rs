//! Stone colors and the read-only board interface used by tactical code.
//!
//! Tactical readers such as [`crate::tactics::selfatari`] never own a board.
//! They query one through [`BoardView`], which exposes just enough of the
//! group/liberty bookkeeping to reason about a single candidate move.

use std::fmt;

/// A point on the board, represented as an index into the padded 1D board array.
pub type Point = usize;

/// Identifier of a group of stones. Ids are small indices into tables owned
/// by the board; `0` is never a valid group.
pub type GroupId = usize;

/// Contents of a board point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Stone {
    Empty = 0,
    Black = 1,
    White = 2,
    OffBoard = 3,
}

/// Number of distinct [`Stone`] values, for tables indexed by color.
pub const STONE_KINDS: usize = 4;

impl Stone {
    /// The opposing color. `Empty` and `OffBoard` map to themselves.
    #[inline]
    pub fn other(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            other => other,
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn is_stone(self) -> bool {
        matches!(self, Stone::Black | Stone::White)
    }

    /// Parse a GTP color argument (`b`, `black`, `w`, `white`).
    pub fn parse(s: &str) -> Option<Stone> {
        match s.to_ascii_lowercase().as_str() {
            "b" | "black" => Some(Stone::Black),
            "w" | "white" => Some(Stone::White),
            _ => None,
        }
    }

    /// Character used in board diagrams.
    pub fn to_char(self) -> char {
        match self {
            Stone::Empty => '.',
            Stone::Black => 'X',
            Stone::White => 'O',
            Stone::OffBoard => '#',
        }
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stone::Empty => "empty",
            Stone::Black => "black",
            Stone::White => "white",
            Stone::OffBoard => "offboard",
        };
        f.write_str(name)
    }
}

/// Read-only queries over a board position.
///
/// Group queries (`group_libs`, `liberties`, ...) are only meaningful for
/// ids obtained from [`BoardView::group_at`] on a stone.
pub trait BoardView {
    /// Color of the point; padding points are `OffBoard`.
    fn at(&self, pt: Point) -> Stone;

    /// Group occupying the point. Only valid when `at(pt)` is a stone.
    fn group_at(&self, pt: Point) -> GroupId;

    /// Exact liberty count of the group.
    fn group_libs(&self, g: GroupId) -> usize;

    /// Liberty coordinates of the group. Complete when the group has at most
    /// three liberties, a prefix of them otherwise.
    fn liberties(&self, g: GroupId) -> &[Point];

    fn group_is_onestone(&self, g: GroupId) -> bool;

    /// The four orthogonal neighbors of an on-board point. Neighbors beyond
    /// the edge are padding points reporting `OffBoard`.
    fn neighbors(&self, pt: Point) -> [Point; 4];

    /// All orthogonal neighbors are `eye_color` stones or off-board.
    fn is_eyelike(&self, pt: Point, eye_color: Stone) -> bool;

    /// Diagonals are controlled by the enemy enough that an eye here would
    /// be false: two enemy diagonals in the middle, one at the edge.
    fn is_false_eyelike(&self, pt: Point, eye_color: Stone) -> bool;

    fn neighbor_count_at(&self, pt: Point, color: Stone) -> usize {
        self.neighbors(pt)
            .iter()
            .filter(|&&n| self.at(n) == color)
            .count()
    }

    /// Number of empty points next to `pt`.
    fn immediate_liberty_count(&self, pt: Point) -> usize {
        self.neighbor_count_at(pt, Stone::Empty)
    }

    fn is_adjacent(&self, a: Point, b: Point) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// The liberty of a two-liberty group that is not `pt`.
    ///
    /// # Panics
    ///
    /// If `pt` is not one of the group's liberties.
    fn group_other_lib(&self, g: GroupId, pt: Point) -> Point {
        let libs = self.liberties(g);
        assert!(
            libs.len() >= 2 && libs[..2].contains(&pt),
            "group {g} does not have {pt} among its two liberties"
        );
        if libs[0] != pt { libs[0] } else { libs[1] }
    }

    fn is_one_point_eye(&self, pt: Point, eye_color: Stone) -> bool {
        self.is_eyelike(pt, eye_color) && !self.is_false_eyelike(pt, eye_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_color() {
        assert_eq!(Stone::Black.other(), Stone::White);
        assert_eq!(Stone::White.other(), Stone::Black);
        assert_eq!(Stone::Empty.other(), Stone::Empty);
        assert_eq!(Stone::OffBoard.other(), Stone::OffBoard);
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(Stone::parse("B"), Some(Stone::Black));
        assert_eq!(Stone::parse("white"), Some(Stone::White));
        assert_eq!(Stone::parse("red"), None);
    }
}
