use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    iter::{once, repeat},
    str::FromStr,
};

use log::debug;

use crate::{
    cell::{Cell, create_cell},
    coord::{
        BOARD_WIDTH, Location, OutOfRange, SQUARE_COUNT, index_to_location, locations,
        notation_position,
    },
    notation::{MalformedNotation, Token, refine_notation},
    piece::{InvalidCode, Piece, UnknownPieceCode, get_color},
};

pub const STARTING_LAYOUT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellQuery {
    Location(Location),
    Index(usize),
}
impl From<Location> for CellQuery {
    fn from(value: Location) -> Self {
        CellQuery::Location(value)
    }
}
impl From<usize> for CellQuery {
    fn from(value: usize) -> Self {
        CellQuery::Index(value)
    }
}
impl Display for CellQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CellQuery::Location(location) => write!(f, "location {location}")?,
            CellQuery::Index(index) => write!(f, "index {index}")?,
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardError {
    InvalidTokenCount(usize),
    NotFound(CellQuery),
    NoPieceAtSource(Location),
    OutOfRange(OutOfRange),
    InvalidCode(InvalidCode),
    UnknownPieceCode(UnknownPieceCode),
    MalformedNotation(MalformedNotation),
}
impl From<OutOfRange> for BoardError {
    fn from(value: OutOfRange) -> Self {
        BoardError::OutOfRange(value)
    }
}
impl From<InvalidCode> for BoardError {
    fn from(value: InvalidCode) -> Self {
        BoardError::InvalidCode(value)
    }
}
impl From<UnknownPieceCode> for BoardError {
    fn from(value: UnknownPieceCode) -> Self {
        BoardError::UnknownPieceCode(value)
    }
}
impl From<MalformedNotation> for BoardError {
    fn from(value: MalformedNotation) -> Self {
        BoardError::MalformedNotation(value)
    }
}
impl Display for BoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidTokenCount(count) => {
                write!(f, "found {count} tokens, {SQUARE_COUNT} were expected")?;
            }
            BoardError::NotFound(query) => write!(f, "no cell matches {query}")?,
            BoardError::NoPieceAtSource(location) => {
                write!(f, "there is no piece on {location}")?;
            }
            BoardError::OutOfRange(err) => write!(f, "{err}")?,
            BoardError::InvalidCode(err) => write!(f, "{err}")?,
            BoardError::UnknownPieceCode(err) => write!(f, "{err}")?,
            BoardError::MalformedNotation(err) => write!(f, "{err}")?,
        }
        Ok(())
    }
}
impl Error for BoardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BoardError::OutOfRange(err) => Some(err),
            BoardError::InvalidCode(err) => Some(err),
            BoardError::UnknownPieceCode(err) => Some(err),
            BoardError::MalformedNotation(err) => Some(err),
            _ => None,
        }
    }
}

/// Display projection of a single cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Summary {
    Empty { row: u8, column: u8 },
    Occupied { row: u8, column: u8, label: String },
}
impl From<Cell> for Summary {
    fn from(value: Cell) -> Self {
        let Location { row, column } = value.location();
        match value.piece() {
            Some(piece) => Summary::Occupied {
                row,
                column,
                label: piece.label(),
            },
            None => Summary::Empty { row, column },
        }
    }
}
impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Summary::Empty { row, column } => write!(f, "[{row}, {column}]")?,
            Summary::Occupied { row, column, label } => {
                write!(f, "[{row}, {column}, \"{label}\"]")?;
            }
        }
        Ok(())
    }
}
pub fn summarize(cells: &[Cell]) -> Vec<Summary> {
    cells.iter().copied().map(Summary::from).collect()
}

/// The 64 cells of a board, stored row-major with row 1 first so that a
/// cell's index is always `location_to_index` of its location.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    grid: Vec<Cell>,
}
impl Board {
    pub fn empty() -> Self {
        Board {
            grid: locations().map(Cell::empty).collect(),
        }
    }
    pub fn create_new_board() -> Self {
        let tokens = refine_notation(STARTING_LAYOUT).expect("starting layout is well formed");
        Board::fen_to_board(&tokens).expect("starting layout only contains known pieces")
    }
    /// Assembles a board from 64 tokens in notation order, rank 8 first.
    ///
    /// The tokens are not passed through `verify_notation`; an unrecognized
    /// token fails the whole assembly and no board is produced.
    pub fn fen_to_board(tokens: &[Token]) -> Result<Self, BoardError> {
        if tokens.len() != SQUARE_COUNT {
            return Err(BoardError::InvalidTokenCount(tokens.len()));
        }
        let grid = (0..SQUARE_COUNT)
            .map(|index| -> Result<Cell, BoardError> {
                let location = index_to_location(index)?;
                let cell = match tokens[notation_position(location)?] {
                    Token::Empty => Cell::empty(location),
                    token @ Token::Piece(code) => {
                        create_cell(token, get_color(code)?, location)?
                    }
                };
                Ok(cell)
            })
            .collect::<Result<Vec<_>, _>>()?;
        let board = Board { grid };
        debug!("assembled board `{board}`");
        Ok(board)
    }
    pub fn cells(&self) -> &[Cell] {
        &self.grid
    }
    /// Resolves a location or an index to the index of the matching cell.
    ///
    /// Locations are looked up by scanning the stored cells rather than by
    /// computing the index.
    pub fn find_cell(&self, query: impl Into<CellQuery>) -> Result<usize, BoardError> {
        let query = query.into();
        match query {
            CellQuery::Index(index) => {
                if index < self.grid.len() {
                    Ok(index)
                } else {
                    Err(BoardError::NotFound(query))
                }
            }
            CellQuery::Location(location) => self
                .grid
                .iter()
                .position(|cell| cell.location() == location)
                .ok_or(BoardError::NotFound(query)),
        }
    }
    pub fn cell(&self, query: impl Into<CellQuery>) -> Result<Cell, BoardError> {
        Ok(self.grid[self.find_cell(query)?])
    }
    pub fn piece_at(&self, query: impl Into<CellQuery>) -> Result<Option<Piece>, BoardError> {
        Ok(self.cell(query)?.piece())
    }
    pub fn refine_grid(&self) -> Vec<Summary> {
        summarize(&self.grid)
    }
    /// Moves the piece on `source` to `destination`, returning whatever
    /// piece was standing on `destination`.
    ///
    /// No chess rule is checked: the destination occupant is replaced no
    /// matter its color. Moving a piece onto its own cell changes nothing,
    /// unlike writing the destination and then clearing the source, which
    /// would erase it.
    pub fn mark_grid(
        &mut self,
        source: Location,
        destination: Location,
    ) -> Result<Option<Piece>, BoardError> {
        let source_index = self.find_cell(source)?;
        let destination_index = self.find_cell(destination)?;
        let Some(piece) = self.grid[source_index].piece else {
            return Err(BoardError::NoPieceAtSource(source));
        };
        if source_index == destination_index {
            return Ok(None);
        }
        let displaced = self.grid[destination_index].piece.replace(piece);
        self.grid[source_index].piece = None;
        match displaced {
            Some(displaced) => debug!("{piece} on {source} captures {displaced} on {destination}"),
            None => debug!("{piece} moves from {source} to {destination}"),
        }
        Ok(displaced)
    }
}
impl Default for Board {
    fn default() -> Self {
        Board::create_new_board()
    }
}
impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let rows = self.grid.chunks(usize::from(BOARD_WIDTH)).rev();
        for (row, first) in rows.zip(once(true).chain(repeat(false))) {
            if !first {
                write!(f, "/")?;
            }
            let mut cells = row.iter().peekable();
            while let Some(cell) = cells.next() {
                if let Some(piece) = cell.piece() {
                    write!(f, "{}", piece.code())?;
                } else {
                    let mut count = 1;
                    while cells.peek().is_some_and(|cell| cell.is_empty()) {
                        cells.next();
                        count += 1;
                    }
                    write!(f, "{count}")?;
                }
            }
        }
        Ok(())
    }
}
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::fen_to_board(&refine_notation(s)?)
    }
}
