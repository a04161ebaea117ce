use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

pub const BOARD_WIDTH: u8 = 8;
pub const SQUARE_COUNT: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutOfRange {
    Row(u8),
    Column(u8),
    Index(usize),
}
impl Display for OutOfRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            OutOfRange::Row(row) => write!(f, "row {row} is outside of 1 to 8")?,
            OutOfRange::Column(column) => write!(f, "column {column} is outside of 1 to 8")?,
            OutOfRange::Index(index) => write!(f, "index {index} is outside of 0 to 63")?,
        }
        Ok(())
    }
}
impl Error for OutOfRange {}

/// A 1-based `(row, column)` pair. Row 1 is white's home rank.
///
/// The fields are public so callers can describe any pair; use
/// [`Location::new`] or [`location_to_index`] to find out whether it lies on
/// the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub row: u8,
    pub column: u8,
}
impl Location {
    pub fn new(row: u8, column: u8) -> Result<Self, OutOfRange> {
        let location = Location { row, column };
        location_to_index(location)?;
        Ok(location)
    }
    pub fn is_on_board(self) -> bool {
        (1..=BOARD_WIDTH).contains(&self.row) && (1..=BOARD_WIDTH).contains(&self.column)
    }
}
impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            let column = (self.column - 1 + b'a') as char;
            write!(f, "{column}{}", self.row)?;
        } else {
            write!(f, "({}, {})", self.row, self.column)?;
        }
        Ok(())
    }
}

pub fn location_to_index(location: Location) -> Result<usize, OutOfRange> {
    if !(1..=BOARD_WIDTH).contains(&location.row) {
        return Err(OutOfRange::Row(location.row));
    }
    if !(1..=BOARD_WIDTH).contains(&location.column) {
        return Err(OutOfRange::Column(location.column));
    }
    let width = usize::from(BOARD_WIDTH);
    Ok(usize::from(location.row - 1) * width + usize::from(location.column - 1))
}
pub fn index_to_location(index: usize) -> Result<Location, OutOfRange> {
    if index >= SQUARE_COUNT {
        return Err(OutOfRange::Index(index));
    }
    let width = usize::from(BOARD_WIDTH);
    // both quotient and remainder are below 8
    #[allow(clippy::cast_possible_truncation)]
    let (row, column) = ((index / width) as u8, (index % width) as u8);
    Ok(Location {
        row: row + 1,
        column: column + 1,
    })
}
/// Every on-board location in storage order.
pub fn locations() -> impl Iterator<Item = Location> {
    (1..=BOARD_WIDTH)
        .flat_map(|row| (1..=BOARD_WIDTH).map(move |column| Location { row, column }))
}
/// Position of `location` within a rank-8-first notation string.
pub(crate) fn notation_position(location: Location) -> Result<usize, OutOfRange> {
    location_to_index(location)?;
    location_to_index(Location {
        row: BOARD_WIDTH + 1 - location.row,
        column: location.column,
    })
}
