use super::types::{CellMark, Coordinate, WinningLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line {
    Row(usize),
    Column(usize),
    MainDiagonal,
    AntiDiagonal,
}

impl Line {
    fn cell(self, size: usize, i: usize) -> Coordinate {
        match self {
            Line::Row(row) => Coordinate::new(row, i),
            Line::Column(column) => Coordinate::new(i, column),
            Line::MainDiagonal => Coordinate::new(i, i),
            Line::AntiDiagonal => Coordinate::new(i, size - 1 - i),
        }
    }
}

/// Every line checked for a win, in check order.
fn lines(size: usize) -> impl Iterator<Item = Line> {
    (0..size)
        .map(Line::Row)
        .chain((0..size).map(Line::Column))
        .chain([Line::MainDiagonal, Line::AntiDiagonal])
}

fn is_complete(board: &[Vec<CellMark>], line: Line, mark: CellMark) -> bool {
    let size = board.len();
    (0..size).all(|i| {
        let cell = line.cell(size, i);
        board[cell.row][cell.column] == mark
    })
}

/// First's lines are checked before Second's, so a malformed board with two
/// completed marks reports First.
pub fn check_win_with_line(board: &[Vec<CellMark>]) -> Option<WinningLine> {
    let size = board.len();
    if size == 0 {
        return None;
    }

    for mark in CellMark::PLAYERS {
        for line in lines(size) {
            if is_complete(board, line, mark) {
                return Some(WinningLine::new(
                    mark,
                    line.cell(size, 0),
                    line.cell(size, size - 1),
                ));
            }
        }
    }

    None
}

pub fn check_win(board: &[Vec<CellMark>]) -> Option<CellMark> {
    check_win_with_line(board).map(|line| line.mark)
}
