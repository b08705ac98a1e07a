use std::fmt;

use super::error::GameError;
use super::types::{CellMark, Coordinate, Move, Outcome, WinningLine};
use super::win_detector::check_win_with_line;

pub const DEFAULT_BOARD_SIZE: usize = 3;

/// Immutable snapshot of a square board.
///
/// Transitions never mutate a state handed out to a caller; `apply_move`
/// and `successors` always build fresh values, so the search can keep every
/// ancestor of the node it is evaluating alive at once.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardState {
    cells: Vec<Vec<CellMark>>,
}

impl BoardState {
    pub fn new_empty(size: usize) -> Self {
        Self {
            cells: vec![vec![CellMark::Empty; size]; size],
        }
    }

    pub fn from_rows(rows: Vec<Vec<CellMark>>) -> Result<Self, GameError> {
        let size = rows.len();
        if size == 0 {
            return Err(GameError::MalformedBoard {
                reason: "board has no rows".to_string(),
            });
        }
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != size) {
            return Err(GameError::MalformedBoard {
                reason: format!("row {} has {} cells, expected {}", index, row.len(), size),
            });
        }
        Ok(Self { cells: rows })
    }

    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn rows(&self) -> &[Vec<CellMark>] {
        &self.cells
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.row < self.size() && coordinate.column < self.size()
    }

    /// Panics when `coordinate` is outside the board.
    pub fn cell_at(&self, coordinate: Coordinate) -> CellMark {
        self.cells[coordinate.row][coordinate.column]
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.cells)
    }

    pub fn winning_mark(&self) -> Option<CellMark> {
        self.winning_line().map(|line| line.mark)
    }

    pub fn is_full(&self) -> bool {
        self.size() > 0
            && self
                .cells
                .iter()
                .all(|row| row.iter().all(|&cell| cell != CellMark::Empty))
    }

    pub fn is_terminal(&self) -> bool {
        self.is_full() || self.winning_mark().is_some()
    }

    pub fn empty_count(&self) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|&&cell| cell == CellMark::Empty).count())
            .sum()
    }

    /// Only meaningful on terminal states: a board without a winner scores
    /// as a draw.
    pub fn score_for(&self, mark: CellMark) -> Outcome {
        match self.winning_mark() {
            Some(winner) if winner == mark => Outcome::Win,
            Some(_) => Outcome::Loss,
            None => Outcome::Draw,
        }
    }

    pub fn available_moves(&self) -> Vec<Coordinate> {
        let mut moves = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (column, &cell) in cells.iter().enumerate() {
                if cell == CellMark::Empty {
                    moves.push(Coordinate::new(row, column));
                }
            }
        }
        moves
    }

    /// Row-major list of every move `mark` can make, paired with the state it
    /// leads to. Empty once the game is over.
    pub fn successors(&self, mark: CellMark) -> Vec<(Move, BoardState)> {
        if self.is_terminal() {
            return Vec::new();
        }

        self.available_moves()
            .into_iter()
            .map(|coordinate| {
                let mv = Move::new(mark, coordinate);
                (mv, self.apply_move(mv))
            })
            .collect()
    }

    /// Does not check that the target cell is empty; callers either take
    /// moves from `successors` or check `cell_at` first.
    pub fn apply_move(&self, mv: Move) -> BoardState {
        let mut cells = self.cells.clone();
        cells[mv.coordinate.row][mv.coordinate.column] = mv.mark;
        BoardState { cells }
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new_empty(DEFAULT_BOARD_SIZE)
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}
