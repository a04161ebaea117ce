use crate::{
    color::Color,
    coord::Location,
    notation::Token,
    piece::{Piece, PieceKind, UnknownPieceCode},
};

/// A square of the board. Its location is fixed, its occupant is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    location: Location,
    pub(crate) piece: Option<Piece>,
}
impl Cell {
    pub fn empty(location: Location) -> Self {
        Cell {
            location,
            piece: None,
        }
    }
    pub fn with_piece(location: Location, piece: Piece) -> Self {
        Cell {
            location,
            piece: Some(piece),
        }
    }
    pub fn location(self) -> Location {
        self.location
    }
    pub fn piece(self) -> Option<Piece> {
        self.piece
    }
    pub fn is_empty(self) -> bool {
        self.piece.is_none()
    }
}

/// Builds the cell a notation token describes.
///
/// The color is taken as given, so `p` with [`Color::White`] yields a white
/// pawn. An empty token ignores the color and builds no piece.
pub fn create_cell(
    token: Token,
    color: Color,
    location: Location,
) -> Result<Cell, UnknownPieceCode> {
    match token {
        Token::Empty => Ok(Cell::empty(location)),
        Token::Piece(code) => {
            let kind = PieceKind::from_code(code)?;
            Ok(Cell::with_piece(location, Piece::new(kind, color)))
        }
    }
}
