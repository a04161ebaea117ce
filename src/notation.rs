//! Compact board layout notation.
//!
//! A layout is read as rank-groups separated by `/`, rank 8 first. Inside a
//! group a piece letter stands for itself and a single digit stands for that
//! many empty squares. Anything after the first whitespace (side to move,
//! castling rights and the other FEN fields) is ignored.

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    iter::repeat_n,
    str::FromStr,
};

use log::trace;

use crate::{
    coord::{BOARD_WIDTH, SQUARE_COUNT},
    piece::PieceKind,
};

pub const RANK_DELIMITER: char = '/';
pub const EMPTY_MARKER: &str = "emp";
pub const MAX_RANK_GROUPS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Empty,
    Piece(char),
}
impl Token {
    /// Whether the token is the empty marker or one of the six piece letters.
    pub fn is_recognized(self) -> bool {
        match self {
            Token::Empty => true,
            Token::Piece(code) => PieceKind::from_code(code).is_ok(),
        }
    }
}
impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Empty => write!(f, "{EMPTY_MARKER}")?,
            Token::Piece(code) => write!(f, "{code}")?,
        }
        Ok(())
    }
}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseTokenError {
    Empty,
    Unexpected(char),
}
impl Display for ParseTokenError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseTokenError::Empty => write!(f, "expected one character, found none instead")?,
            ParseTokenError::Unexpected(c) => write!(
                f,
                "unexpected `{c}`, a token is either `{EMPTY_MARKER}` or a single character"
            )?,
        }
        Ok(())
    }
}
impl Error for ParseTokenError {}

impl FromStr for Token {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == EMPTY_MARKER {
            return Ok(Token::Empty);
        }
        let mut chars = s.chars();
        let code = chars.next().ok_or(ParseTokenError::Empty)?;
        if let Some(c) = chars.next() {
            return Err(ParseTokenError::Unexpected(c));
        }
        Ok(Token::Piece(code))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MalformedNotation {
    EmptyRankGroup { group: usize },
    TooManyRankGroups(usize),
    ZeroRun { group: usize },
    MultiDigitRun { group: usize },
    RunTooLong { group: usize, run: u32 },
    WrongSquareCount(usize),
    TooManySquares,
}
impl Display for MalformedNotation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MalformedNotation::EmptyRankGroup { group } => {
                write!(f, "rank group {group} is empty")?;
            }
            MalformedNotation::TooManyRankGroups(count) => write!(
                f,
                "found {count} rank groups, at most {MAX_RANK_GROUPS} were expected"
            )?,
            MalformedNotation::ZeroRun { group } => {
                write!(f, "rank group {group} has an empty run of 0")?;
            }
            MalformedNotation::MultiDigitRun { group } => write!(
                f,
                "rank group {group} has a run written with more than one digit"
            )?,
            MalformedNotation::RunTooLong { group, run } => write!(
                f,
                "rank group {group} has an empty run of {run}, which is wider than the board"
            )?,
            MalformedNotation::WrongSquareCount(count) => write!(
                f,
                "notation describes {count} squares, {SQUARE_COUNT} were expected"
            )?,
            MalformedNotation::TooManySquares => write!(
                f,
                "notation describes more than {SQUARE_COUNT} squares"
            )?,
        }
        Ok(())
    }
}
impl Error for MalformedNotation {}

fn expand(raw: &str, limit: Option<usize>) -> Result<Vec<Token>, MalformedNotation> {
    let placement = raw.split_whitespace().next().unwrap_or_default();
    if let Some(i) = placement.split(RANK_DELIMITER).position(str::is_empty) {
        return Err(MalformedNotation::EmptyRankGroup { group: i + 1 });
    }
    let groups = placement.split(RANK_DELIMITER).count();
    if groups > MAX_RANK_GROUPS {
        return Err(MalformedNotation::TooManyRankGroups(groups));
    }
    let mut tokens = Vec::with_capacity(SQUARE_COUNT);
    for (i, group) in placement.split(RANK_DELIMITER).enumerate() {
        let group_number = i + 1;
        let mut after_digit = false;
        for c in group.chars() {
            if let Some(run) = c.to_digit(10) {
                if after_digit {
                    return Err(MalformedNotation::MultiDigitRun {
                        group: group_number,
                    });
                }
                match run {
                    0 => {
                        return Err(MalformedNotation::ZeroRun {
                            group: group_number,
                        });
                    }
                    run if run > u32::from(BOARD_WIDTH) => {
                        return Err(MalformedNotation::RunTooLong {
                            group: group_number,
                            run,
                        });
                    }
                    run => tokens.extend(repeat_n(Token::Empty, run as usize)),
                }
                after_digit = true;
            } else {
                tokens.push(Token::Piece(c));
                after_digit = false;
            }
            if limit.is_some_and(|limit| tokens.len() > limit) {
                return Err(MalformedNotation::TooManySquares);
            }
        }
    }
    trace!("expanded `{placement}` into {} tokens", tokens.len());
    Ok(tokens)
}
/// Expands `raw` into one token per square without checking the total.
pub fn expand_notation(raw: &str) -> Result<Vec<Token>, MalformedNotation> {
    expand(raw, None)
}
/// Expands `raw` into exactly 64 tokens in notation order.
///
/// Scanning stops as soon as the layout describes more than 64 squares.
pub fn refine_notation(raw: &str) -> Result<Vec<Token>, MalformedNotation> {
    let tokens = expand(raw, Some(SQUARE_COUNT))?;
    if tokens.len() == SQUARE_COUNT {
        Ok(tokens)
    } else {
        Err(MalformedNotation::WrongSquareCount(tokens.len()))
    }
}
pub fn verify_notation(tokens: &[Token]) -> bool {
    tokens.len() == SQUARE_COUNT && tokens.iter().copied().all(Token::is_recognized)
}
