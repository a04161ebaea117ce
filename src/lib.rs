//! Authoritative 8×8 chess board state.
//!
//! The board is built from compact rank-group notation (or the standard
//! starting layout), queried by location or storage index, summarized for
//! display, and updated by relocating pieces. Move legality, turn order and
//! game end are left to the caller.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

pub mod board;
pub mod cell;
pub mod color;
pub mod coord;
pub mod notation;
pub mod piece;

#[cfg(test)]
mod fuzz;

pub use board::{Board, BoardError, CellQuery, STARTING_LAYOUT, Summary, summarize};
pub use cell::{Cell, create_cell};
pub use color::Color;
pub use coord::{Location, OutOfRange, index_to_location, location_to_index};
pub use notation::{MalformedNotation, Token, expand_notation, refine_notation, verify_notation};
pub use piece::{InvalidCode, Piece, PieceKind, UnknownPieceCode, get_color};
