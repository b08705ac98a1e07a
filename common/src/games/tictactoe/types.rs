use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellMark {
    Empty,
    #[serde(rename = "X")]
    First,
    #[serde(rename = "O")]
    Second,
}

impl CellMark {
    pub const PLAYERS: [CellMark; 2] = [CellMark::First, CellMark::Second];

    pub fn opponent(&self) -> Option<CellMark> {
        match self {
            CellMark::First => Some(CellMark::Second),
            CellMark::Second => Some(CellMark::First),
            CellMark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            CellMark::Empty => '.',
            CellMark::First => 'X',
            CellMark::Second => 'O',
        }
    }
}

impl fmt::Display for CellMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Zero-based board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub row: usize,
    pub column: usize,
}

impl Coordinate {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub mark: CellMark,
    pub coordinate: Coordinate,
}

impl Move {
    pub fn new(mark: CellMark, coordinate: Coordinate) -> Self {
        Self { mark, coordinate }
    }
}

/// Result of a finished game from the point of view of one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Outcome {
    pub(crate) fn rank(&self) -> u8 {
        match self {
            Outcome::Loss => 0,
            Outcome::Draw => 1,
            Outcome::Win => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: CellMark,
    pub start: Coordinate,
    pub end: Coordinate,
}

impl WinningLine {
    pub fn new(mark: CellMark, start: Coordinate, end: Coordinate) -> Self {
        Self { mark, start, end }
    }
}
