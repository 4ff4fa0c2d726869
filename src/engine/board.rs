use super::coord::{BOARD_SIZE, Coord};
use super::piece::{Color, Piece, PieceKind};

/// One cell of the grid. `None` is an empty square.
pub type Square = Option<Piece>;

/// The 8x8 grid, row-major with row 0 = Black's back rank.
///
/// Accessors require in-bounds coordinates; an out-of-range access is a
/// programming error and panics. Callers filter candidates with
/// [`Coord::on_board`] first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Square; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    pub fn empty() -> Self {
        Self {
            squares: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    /// Builds a board from eight 8-character rows. Lowercase letters are
    /// White pieces, uppercase are Black, a space is an empty square.
    pub fn from_rows(rows: [&str; 8]) -> Self {
        let mut board = Self::empty();
        for (y, row) in rows.iter().enumerate() {
            debug_assert_eq!(row.chars().count(), 8);
            for (x, ch) in row.chars().enumerate() {
                use PieceKind::*;
                let square = match ch {
                    ' ' => None,
                    'p' => Some(Piece::new(Pawn, Color::White)),
                    'r' => Some(Piece::new(Rook, Color::White)),
                    'n' => Some(Piece::new(Knight, Color::White)),
                    'b' => Some(Piece::new(Bishop, Color::White)),
                    'q' => Some(Piece::new(Queen, Color::White)),
                    'k' => Some(Piece::new(King, Color::White)),
                    'P' => Some(Piece::new(Pawn, Color::Black)),
                    'R' => Some(Piece::new(Rook, Color::Black)),
                    'N' => Some(Piece::new(Knight, Color::Black)),
                    'B' => Some(Piece::new(Bishop, Color::Black)),
                    'Q' => Some(Piece::new(Queen, Color::Black)),
                    'K' => Some(Piece::new(King, Color::Black)),
                    _ => unreachable!(),
                };
                board.squares[y][x] = square;
            }
        }
        board
    }

    pub fn get(&self, at: Coord) -> Square {
        debug_assert!(at.on_board(), "board access out of range: {at}");
        self.squares[at.y as usize][at.x as usize]
    }

    pub fn set(&mut self, at: Coord, square: Square) {
        debug_assert!(at.on_board(), "board access out of range: {at}");
        self.squares[at.y as usize][at.x as usize] = square;
    }

    pub fn is_empty(&self, at: Coord) -> bool {
        self.get(at).is_none()
    }

    /// Compares the colors of the pieces at two squares. Callers check
    /// emptiness first; two empty squares compare equal.
    pub fn is_same_color(&self, a: Coord, b: Coord) -> bool {
        self.get(a).map(|p| p.color) == self.get(b).map(|p| p.color)
    }
}
