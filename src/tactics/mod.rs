//! Local tactical readers.
//!
//! These are cheap, bounded checks meant to run inside move generation and
//! playouts. They never mutate the board they are given.

pub mod selfatari;
