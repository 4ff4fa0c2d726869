use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::board::Board;
use super::coord::Coord;
use super::state::{Player, Turn};

/// The closed set of initial positions, selected by mode string on the
/// command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Default,
    Freeplay,
    TestPawn,
    TestRook,
    TestBishop,
    TestKnight,
    TestQueen,
    TestKing,
    TestEmpty,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized board layout: '{0}'")]
pub struct UnknownLayout(pub String);

impl FromStr for Layout {
    type Err = UnknownLayout;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Layout::Default),
            "freeplay" => Ok(Layout::Freeplay),
            "testPawn" => Ok(Layout::TestPawn),
            "testRook" => Ok(Layout::TestRook),
            "testBishop" => Ok(Layout::TestBishop),
            "testKnight" => Ok(Layout::TestKnight),
            "testQueen" => Ok(Layout::TestQueen),
            "testKing" => Ok(Layout::TestKing),
            "testEmpty" => Ok(Layout::TestEmpty),
            _ => Err(UnknownLayout(s.to_owned())),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Layout::Default => "default",
            Layout::Freeplay => "freeplay",
            Layout::TestPawn => "testPawn",
            Layout::TestRook => "testRook",
            Layout::TestBishop => "testBishop",
            Layout::TestKnight => "testKnight",
            Layout::TestQueen => "testQueen",
            Layout::TestKing => "testKing",
            Layout::TestEmpty => "testEmpty",
        };
        f.write_str(name)
    }
}

impl Layout {
    pub fn board(self) -> Board {
        match self {
            Layout::Default | Layout::Freeplay => Board::from_rows([
                "RNBQKBNR",
                "PPPPPPPP",
                "        ",
                "        ",
                "        ",
                "        ",
                "pppppppp",
                "rnbqkbnr",
            ]),
            Layout::TestPawn => Board::from_rows([
                "        ",
                "        ",
                "        ",
                "  P     ",
                "   p    ",
                "        ",
                "pppppppp",
                "        ",
            ]),
            Layout::TestRook => Board::from_rows([
                "  p  p  ",
                "        ",
                "     p  ",
                "        ",
                " R  p   ",
                "        ",
                " p  R   ",
                "        ",
            ]),
            Layout::TestBishop => Board::from_rows([
                "        ",
                " b      ",
                "        ",
                " p B    ",
                " p      ",
                " p      ",
                " p      ",
                " p      ",
            ]),
            Layout::TestKnight => Board::from_rows([
                "        ",
                "   p    ",
                " p      ",
                "  N     ",
                "    p   ",
                "  n     ",
                "        ",
                "        ",
            ]),
            Layout::TestQueen => Board::from_rows([
                "        ",
                " p      ",
                "        ",
                "   Q  p ",
                "        ",
                " p      ",
                "        ",
                "   q    ",
            ]),
            Layout::TestKing => Board::from_rows([
                "        ",
                "        ",
                "   p    ",
                "   K    ",
                "  p     ",
                "        ",
                "    k   ",
                "        ",
            ]),
            Layout::TestEmpty => Board::empty(),
        }
    }

    /// The default layout is a turn-taking game; every other mode starts in
    /// freeplay, where either color may be moved.
    pub fn turn(self) -> Turn {
        match self {
            Layout::Default => Turn::Player(Player::First),
            _ => Turn::Freeplay,
        }
    }

    /// Where the input focus starts: on White's king row for a standard
    /// game, mid-board otherwise.
    pub fn cursor(self) -> Coord {
        match self {
            Layout::Default => Coord::new(4, 7),
            _ => Coord::new(4, 4),
        }
    }
}
