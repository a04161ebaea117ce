use std::str::FromStr;

use rand::{Rng, SeedableRng, rngs::SmallRng};
use rustc_hash::FxHashSet;

use crate::{
    board::Board,
    color::Color,
    coord::{Location, index_to_location, location_to_index},
    notation::{Token, refine_notation, verify_notation},
    piece::{Piece, PieceKind},
};

impl From<chess::Piece> for PieceKind {
    fn from(value: chess::Piece) -> Self {
        match value {
            chess::Piece::Pawn => PieceKind::Pawn,
            chess::Piece::Knight => PieceKind::Knight,
            chess::Piece::Bishop => PieceKind::Bishop,
            chess::Piece::Rook => PieceKind::Rook,
            chess::Piece::Queen => PieceKind::Queen,
            chess::Piece::King => PieceKind::King,
        }
    }
}
impl From<chess::Color> for Color {
    fn from(value: chess::Color) -> Self {
        match value {
            chess::Color::White => Color::White,
            chess::Color::Black => Color::Black,
        }
    }
}
impl From<chess::Square> for Location {
    fn from(value: chess::Square) -> Self {
        Location {
            row: (value.get_rank().to_index() + 1).try_into().unwrap(),
            column: (value.get_file().to_index() + 1).try_into().unwrap(),
        }
    }
}
fn assert_same_layout(board: &Board, reference: &chess::Board) {
    for square in chess::ALL_SQUARES {
        let expected = reference
            .piece_on(square)
            .zip(reference.color_on(square))
            .map(|(kind, color)| Piece::new(kind.into(), color.into()));
        assert_eq!(
            board.piece_at(Location::from(square)),
            Ok(expected),
            "mismatch on {square} for {board}"
        );
    }
}
const LAYOUTS: [&str; 5] = [
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3",
    "4k3/4r3/8/8/8/8/4N3/4K3 w - - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
];
const CODES: [char; 12] = ['p', 'n', 'b', 'r', 'q', 'k', 'P', 'N', 'B', 'R', 'Q', 'K'];

fn random_tokens(rng: &mut SmallRng) -> Vec<Token> {
    (0..64)
        .map(|_| {
            if rng.random_bool(0.5) {
                Token::Empty
            } else {
                Token::Piece(CODES[rng.random_range(0..CODES.len())])
            }
        })
        .collect()
}
fn piece_count(board: &Board) -> usize {
    board
        .cells()
        .iter()
        .filter(|cell| cell.piece().is_some())
        .count()
}

#[test]
fn starting_position_matches_reference() {
    assert_same_layout(&Board::create_new_board(), &chess::Board::default());
}
#[test]
fn layouts_match_reference() {
    for layout in LAYOUTS {
        let reference = chess::Board::from_str(layout).unwrap();
        let board: Board = layout.parse().unwrap();
        assert_same_layout(&board, &reference);
        assert_eq!(Some(board.to_string().as_str()), layout.split(' ').next());
    }
}
#[test]
fn locations_are_unique() {
    let locations: FxHashSet<_> = (0..64).map(|i| index_to_location(i).unwrap()).collect();
    assert_eq!(locations.len(), 64);
}
#[test]
fn random_layouts_survive_notation() {
    let mut rng = SmallRng::seed_from_u64(0x5EED);
    for _ in 0..256 {
        let tokens = random_tokens(&mut rng);
        assert!(verify_notation(&tokens));
        let board = Board::fen_to_board(&tokens).unwrap();
        assert_eq!(board.cells().len(), 64);
        assert_eq!(refine_notation(&board.to_string()), Ok(tokens));
        assert_eq!(board.to_string().parse(), Ok(board));
    }
}
#[test]
fn random_moves_keep_grid_intact() {
    let mut rng = SmallRng::seed_from_u64(64);
    let mut board = Board::create_new_board();
    for _ in 0..512 {
        let occupied: Box<[_]> = board
            .cells()
            .iter()
            .filter(|cell| cell.piece().is_some())
            .map(|cell| cell.location())
            .collect();
        if occupied.len() < 2 {
            board = Board::create_new_board();
            continue;
        }
        let source = occupied[rng.random_range(0..occupied.len())];
        let destination = index_to_location(rng.random_range(0..64)).unwrap();
        let moved = board.piece_at(source).unwrap();
        let before = piece_count(&board);
        let displaced = board.mark_grid(source, destination).unwrap();

        assert_eq!(board.cells().len(), 64);
        assert_eq!(board.piece_at(destination), Ok(moved));
        if source == destination {
            assert_eq!(displaced, None);
            assert_eq!(piece_count(&board), before);
        } else {
            assert_eq!(board.piece_at(source), Ok(None));
            assert_eq!(
                piece_count(&board),
                before - usize::from(displaced.is_some())
            );
        }
        for (index, cell) in board.cells().iter().enumerate() {
            assert_eq!(location_to_index(cell.location()), Ok(index));
        }
    }
}
