use super::board::Board;
use super::coord::Coord;
use super::layout::{Layout, UnknownLayout};
use super::movegen::{MoveSet, MoveTable};
use super::piece::{Color, Piece};

/// The two seats at the board. First owns the White pieces, Second the
/// Black pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    First,
    Second,
}

impl Player {
    pub const fn flip(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Player::First => Color::White,
            Player::Second => Color::Black,
        }
    }

    pub const fn owning(color: Color) -> Player {
        match color {
            Color::White => Player::First,
            Color::Black => Player::Second,
        }
    }

    const fn index(self) -> usize {
        match self {
            Player::First => 0,
            Player::Second => 1,
        }
    }
}

/// Whose pieces may be activated. Freeplay drops the ownership restriction
/// entirely and never alternates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Player(Player),
    Freeplay,
}

impl Turn {
    pub const fn permits(self, color: Color) -> bool {
        match self {
            Turn::Player(player) => matches!(
                (player, color),
                (Player::First, Color::White) | (Player::Second, Color::Black)
            ),
            Turn::Freeplay => true,
        }
    }

    const fn advanced(self) -> Turn {
        match self {
            Turn::Player(player) => Turn::Player(player.flip()),
            Turn::Freeplay => Turn::Freeplay,
        }
    }
}

/// One executed move, kept in the in-memory log. No notation strings are
/// generated from these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub piece: Piece,
    pub from: Coord,
    pub to: Coord,
    pub captured: Option<Piece>,
}

/// The whole game: board, input focus, selection, derived move table,
/// capture bookkeeping and turn state. Created once from a [`Layout`] and
/// mutated in place for the rest of the session.
///
/// The single mutating entry points are [`GameState::set_cursor`] (the
/// shell's bounds-clamped cursor bookkeeping) and [`GameState::activate`];
/// everything else is a read-only snapshot of the latest transition.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    cursor: Coord,
    selection: Option<Coord>,
    moves: MoveTable,
    captured: [Vec<Piece>; 2],
    turn: Turn,
    log: Vec<MoveRecord>,
}

impl GameState {
    pub fn new(layout: Layout) -> Self {
        let board = layout.board();
        let moves = MoveTable::compute(&board);
        log::info!("starting a game with the {layout} layout");
        Self {
            board,
            cursor: layout.cursor(),
            selection: None,
            moves,
            captured: [Vec::new(), Vec::new()],
            turn: layout.turn(),
            log: Vec::new(),
        }
    }

    /// Named-layout constructor. An unrecognized mode string is the one
    /// recoverable error in the engine and must abort startup.
    pub fn from_mode(mode: &str) -> Result<Self, UnknownLayout> {
        Ok(Self::new(mode.parse()?))
    }

    /// Activates the square under the cursor: deselects, executes a move, or
    /// (re)selects, in that order. Anything else is a no-op that leaves the
    /// state untouched.
    pub fn activate(&mut self) {
        if self.selection == Some(self.cursor) {
            self.selection = None;
            return;
        }

        if let Some(from) = self.selection
            && self.moves.at(from).contains(self.cursor)
        {
            self.execute_move(from, self.cursor);
            return;
        }

        let Some(piece) = self.board.get(self.cursor) else {
            return;
        };
        if !self.turn.permits(piece.color) {
            return;
        }

        log::debug!("selected {} at {}", piece, self.cursor);
        self.selection = Some(self.cursor);
    }

    fn execute_move(&mut self, from: Coord, to: Coord) {
        let piece = self.board.get(from).expect("selected square is occupied");

        let captured = self.board.get(to);
        if let Some(taken) = captured {
            debug_assert_ne!(taken.color, piece.color);
            // The removed piece lands in the list of the side that took it,
            // keyed by the color of the piece removed.
            let captor = Player::owning(taken.color).flip();
            self.captured[captor.index()].push(taken);
        }

        self.board.set(to, Some(piece));
        self.board.set(from, None);
        self.log.push(MoveRecord {
            piece,
            from,
            to,
            captured,
        });

        self.selection = None;
        self.turn = self.turn.advanced();
        self.moves = MoveTable::compute(&self.board);

        match captured {
            Some(taken) => log::info!("{piece} {from} -> {to}, capturing {taken}"),
            None => log::info!("{piece} {from} -> {to}"),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    pub fn set_cursor(&mut self, at: Coord) {
        debug_assert!(at.on_board(), "cursor out of range: {at}");
        self.cursor = at;
    }

    pub fn selection(&self) -> Option<Coord> {
        self.selection
    }

    /// The selected piece's destinations; empty when nothing is selected.
    pub fn selected_moves(&self) -> &[Coord] {
        match self.selection {
            Some(origin) => self.moves.at(origin).coords(),
            None => &[],
        }
    }

    /// True when one of the selected piece's candidate moves would capture a
    /// king. Indicator only; such moves stay playable.
    pub fn selection_threatens_king(&self) -> bool {
        match self.selection {
            Some(origin) => self.moves.at(origin).threatens_king(),
            None => false,
        }
    }

    /// The current move set of any square, served from the table recomputed
    /// after the last board change.
    pub fn moves_from(&self, origin: Coord) -> &MoveSet {
        self.moves.at(origin)
    }

    pub fn captured(&self, by: Player) -> &[Piece] {
        &self.captured[by.index()]
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn move_log(&self) -> &[MoveRecord] {
        &self.log
    }
}
