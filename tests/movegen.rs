use chessboard::engine::{Board, Color, Coord, Layout, Piece, PieceKind, legal_moves};

fn sorted(coords: &[Coord]) -> Vec<Coord> {
    let mut coords = coords.to_vec();
    coords.sort_by_key(|c| (c.y, c.x));
    coords
}

fn coords(pairs: &[(i32, i32)]) -> Vec<Coord> {
    sorted(&pairs.iter().map(|&(x, y)| Coord::new(x, y)).collect::<Vec<_>>())
}

fn all_layouts() -> [Layout; 9] {
    [
        Layout::Default,
        Layout::Freeplay,
        Layout::TestPawn,
        Layout::TestRook,
        Layout::TestBishop,
        Layout::TestKnight,
        Layout::TestQueen,
        Layout::TestKing,
        Layout::TestEmpty,
    ]
}

#[test]
fn every_generated_move_is_on_board() {
    for layout in all_layouts() {
        let board = layout.board();
        for y in 0..8 {
            for x in 0..8 {
                let set = legal_moves(&board, Coord::new(x, y));
                assert!(set.coords().iter().all(|c| c.on_board()));
            }
        }
    }
}

#[test]
fn no_move_lands_on_a_friendly_piece() {
    for layout in all_layouts() {
        let board = layout.board();
        for y in 0..8 {
            for x in 0..8 {
                let from = Coord::new(x, y);
                let Some(mover) = board.get(from) else {
                    continue;
                };
                for &to in legal_moves(&board, from).coords() {
                    if let Some(target) = board.get(to) {
                        assert_ne!(target.color, mover.color, "{from} -> {to} in {layout}");
                    }
                }
            }
        }
    }
}

#[test]
fn empty_square_has_no_moves() {
    let board = Layout::TestEmpty.board();
    for y in 0..8 {
        for x in 0..8 {
            assert!(legal_moves(&board, Coord::new(x, y)).is_empty());
        }
    }
}

#[test]
fn pawn_advances_and_captures_diagonally() {
    let board = Layout::TestPawn.board();

    // The black pawn mid-board: one step forward, plus the white pawn
    // sitting on its forward-right diagonal. Not on its starting rank, so
    // no double advance.
    let black = legal_moves(&board, Coord::new(2, 3));
    assert_eq!(sorted(black.coords()), coords(&[(2, 4), (3, 4)]));

    // The white pawn advances the other way and can take the black pawn.
    let white = legal_moves(&board, Coord::new(3, 4));
    assert_eq!(sorted(white.coords()), coords(&[(3, 3), (2, 3)]));
}

#[test]
fn pawn_double_advance_needs_both_squares_empty() {
    let mut board = Board::empty();
    let pawn = Piece::new(PieceKind::Pawn, Color::Black);
    board.set(Coord::new(4, 1), Some(pawn));
    let set = legal_moves(&board, Coord::new(4, 1));
    assert_eq!(sorted(set.coords()), coords(&[(4, 2), (4, 3)]));

    // A blocker on the intermediate square kills both advances.
    let blocker = Piece::new(PieceKind::Rook, Color::White);
    board.set(Coord::new(4, 2), Some(blocker));
    assert!(legal_moves(&board, Coord::new(4, 1)).is_empty());

    // A blocker on the target square only kills the double advance.
    board.set(Coord::new(4, 2), None);
    board.set(Coord::new(4, 3), Some(blocker));
    let set = legal_moves(&board, Coord::new(4, 1));
    assert_eq!(sorted(set.coords()), coords(&[(4, 2)]));
}

#[test]
fn pawn_on_the_last_rank_has_no_moves() {
    let mut board = Board::empty();
    board.set(
        Coord::new(4, 0),
        Some(Piece::new(PieceKind::Pawn, Color::White)),
    );
    board.set(
        Coord::new(3, 7),
        Some(Piece::new(PieceKind::Pawn, Color::Black)),
    );
    assert!(legal_moves(&board, Coord::new(4, 0)).is_empty());
    assert!(legal_moves(&board, Coord::new(3, 7)).is_empty());
}

#[test]
fn pawn_does_not_capture_straight_ahead() {
    let mut board = Board::empty();
    board.set(
        Coord::new(4, 3),
        Some(Piece::new(PieceKind::Pawn, Color::Black)),
    );
    board.set(
        Coord::new(4, 4),
        Some(Piece::new(PieceKind::Pawn, Color::White)),
    );
    assert!(legal_moves(&board, Coord::new(4, 3)).is_empty());
}

#[test]
fn rook_ray_stops_at_the_first_capture() {
    let board = Layout::TestRook.board();
    let set = legal_moves(&board, Coord::new(1, 4));

    // Rightward: everything up to and including the white pawn at (4, 4),
    // nothing beyond it.
    for to in [(2, 4), (3, 4), (4, 4)] {
        assert!(set.contains(Coord::new(to.0, to.1)));
    }
    for to in [(5, 4), (6, 4), (7, 4)] {
        assert!(!set.contains(Coord::new(to.0, to.1)));
    }

    // Downward: the white pawn at (1, 6) is taken, the square behind it is
    // not reached.
    assert!(set.contains(Coord::new(1, 5)));
    assert!(set.contains(Coord::new(1, 6)));
    assert!(!set.contains(Coord::new(1, 7)));

    assert_eq!(
        sorted(set.coords()),
        coords(&[
            (1, 0),
            (1, 1),
            (1, 2),
            (1, 3),
            (0, 4),
            (2, 4),
            (3, 4),
            (4, 4),
            (1, 5),
            (1, 6),
        ])
    );
}

#[test]
fn bishop_slides_until_blocked() {
    let board = Layout::TestBishop.board();
    let set = legal_moves(&board, Coord::new(3, 3));
    assert_eq!(
        sorted(set.coords()),
        coords(&[
            // up-right to the edge
            (4, 2),
            (5, 1),
            (6, 0),
            // up-left onto the white bishop
            (2, 2),
            (1, 1),
            // down-right to the corner
            (4, 4),
            (5, 5),
            (6, 6),
            (7, 7),
            // down-left onto the white pawn column
            (2, 4),
            (1, 5),
        ])
    );
}

#[test]
fn knight_jumps_and_captures() {
    let board = Layout::TestKnight.board();

    // The black knight reaches all eight targets, two of them captures.
    let black = legal_moves(&board, Coord::new(2, 3));
    assert_eq!(
        sorted(black.coords()),
        coords(&[
            (3, 5),
            (3, 1),
            (1, 5),
            (1, 1),
            (4, 4),
            (4, 2),
            (0, 4),
            (0, 2),
        ])
    );

    // The white knight is blocked only by its own pawn at (4, 4).
    let white = legal_moves(&board, Coord::new(2, 5));
    assert_eq!(white.len(), 7);
    assert!(!white.contains(Coord::new(4, 4)));
    assert!(white.contains(Coord::new(3, 3)));
}

#[test]
fn king_steps_one_square_any_direction() {
    let board = Layout::TestKing.board();
    let set = legal_moves(&board, Coord::new(3, 3));
    assert_eq!(
        sorted(set.coords()),
        coords(&[
            (2, 2),
            (3, 2),
            (4, 2),
            (2, 3),
            (4, 3),
            (2, 4),
            (3, 4),
            (4, 4),
        ])
    );

    let mut corner = Board::empty();
    corner.set(
        Coord::new(0, 0),
        Some(Piece::new(PieceKind::King, Color::White)),
    );
    assert_eq!(
        sorted(legal_moves(&corner, Coord::new(0, 0)).coords()),
        coords(&[(1, 0), (0, 1), (1, 1)])
    );
}

#[test]
fn queen_is_the_union_of_rook_and_bishop() {
    let mut board = Layout::TestQueen.board();
    let origin = Coord::new(3, 3);
    let queen = legal_moves(&board, origin);

    board.set(origin, Some(Piece::new(PieceKind::Rook, Color::Black)));
    let rook = legal_moves(&board, origin);
    board.set(origin, Some(Piece::new(PieceKind::Bishop, Color::Black)));
    let bishop = legal_moves(&board, origin);

    let mut union = rook.coords().to_vec();
    union.extend_from_slice(bishop.coords());
    assert_eq!(sorted(queen.coords()), sorted(&union));
}

#[test]
fn king_capture_raises_the_threat_flag() {
    let mut board = Board::empty();
    board.set(
        Coord::new(0, 0),
        Some(Piece::new(PieceKind::Rook, Color::Black)),
    );
    board.set(
        Coord::new(0, 5),
        Some(Piece::new(PieceKind::King, Color::White)),
    );
    let set = legal_moves(&board, Coord::new(0, 0));
    assert!(set.threatens_king());
    // The flag is an indicator, not a filter: the capture stays in the set.
    assert!(set.contains(Coord::new(0, 5)));

    // No king in reach, no flag.
    board.set(
        Coord::new(0, 5),
        Some(Piece::new(PieceKind::Queen, Color::White)),
    );
    assert!(!legal_moves(&board, Coord::new(0, 0)).threatens_king());
}

#[test]
fn pawn_diagonal_onto_a_king_raises_the_threat_flag() {
    let mut board = Board::empty();
    board.set(
        Coord::new(2, 4),
        Some(Piece::new(PieceKind::Pawn, Color::White)),
    );
    board.set(
        Coord::new(3, 3),
        Some(Piece::new(PieceKind::King, Color::Black)),
    );
    let set = legal_moves(&board, Coord::new(2, 4));
    assert!(set.threatens_king());
    assert!(set.contains(Coord::new(3, 3)));
}
