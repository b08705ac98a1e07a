mod board;
mod controller;
mod error;
mod score;
mod search_engine;
mod types;
mod win_detector;

pub use board::{BoardState, DEFAULT_BOARD_SIZE};
pub use controller::{ControllerSettings, FirstPlayerMode, GameController, Phase};
pub use error::GameError;
pub use score::Score;
pub use search_engine::{SearchEngine, SearchResult};
pub use types::{CellMark, Coordinate, Move, Outcome, WinningLine};
pub use win_detector::{check_win, check_win_with_line};
