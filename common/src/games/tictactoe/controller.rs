use serde::{Deserialize, Serialize};

use crate::games::SessionRng;
use crate::log;
use super::board::{BoardState, DEFAULT_BOARD_SIZE};
use super::error::GameError;
use super::search_engine::{SearchEngine, SearchResult};
use super::types::{CellMark, Coordinate, Move, Outcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirstPlayerMode {
    Human,
    Computer,
    Random,
}

impl FirstPlayerMode {
    fn human_starts(&self, rng: &mut SessionRng) -> bool {
        match self {
            FirstPlayerMode::Human => true,
            FirstPlayerMode::Computer => false,
            FirstPlayerMode::Random => rng.coin_flip(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingHumanMove,
    AwaitingAiMove,
    /// Outcome from the human's point of view.
    Finished(Outcome),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerSettings {
    pub size: usize,
    pub human_mark: CellMark,
    pub first_player: FirstPlayerMode,
    pub auto_play_forced: bool,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            human_mark: CellMark::First,
            first_player: FirstPlayerMode::Human,
            auto_play_forced: false,
        }
    }
}

/// Owns whose turn it is and drives one human-versus-computer game.
pub struct GameController {
    state: BoardState,
    engine: SearchEngine,
    human_mark: CellMark,
    phase: Phase,
    auto_play_forced: bool,
    last_move: Option<Move>,
    move_count: usize,
}

impl GameController {
    pub fn new(settings: &ControllerSettings, rng: &mut SessionRng) -> Result<Self, GameError> {
        if settings.size == 0 {
            return Err(GameError::MalformedBoard {
                reason: "board size must be at least 1".to_string(),
            });
        }
        let ai_mark = settings.human_mark.opponent().ok_or(GameError::InvalidMarks)?;
        let engine = SearchEngine::new(ai_mark, settings.human_mark)?;

        let phase = if settings.first_player.human_starts(rng) {
            Phase::AwaitingHumanMove
        } else {
            Phase::AwaitingAiMove
        };

        log!(
            "New {}x{} game: human plays {}, computer plays {}, {:?} moves first",
            settings.size,
            settings.size,
            settings.human_mark,
            ai_mark,
            phase
        );

        Ok(Self {
            state: BoardState::new_empty(settings.size),
            engine,
            human_mark: settings.human_mark,
            phase,
            auto_play_forced: settings.auto_play_forced,
            last_move: None,
            move_count: 0,
        })
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn human_mark(&self) -> CellMark {
        self.human_mark
    }

    pub fn ai_mark(&self) -> CellMark {
        self.engine.ai_mark()
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn auto_play_forced(&self) -> bool {
        self.auto_play_forced
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished(_))
    }

    pub fn play_human(&mut self, coordinate: Coordinate) -> Result<(), GameError> {
        match self.phase {
            Phase::AwaitingHumanMove => {}
            Phase::AwaitingAiMove => return Err(GameError::NotYourTurn),
            Phase::Finished(_) => return Err(GameError::GameFinished),
        }

        if !self.state.contains(coordinate) {
            return Err(GameError::OutOfBounds {
                coordinate,
                size: self.state.size(),
            });
        }
        if self.state.cell_at(coordinate) != CellMark::Empty {
            return Err(GameError::IllegalMove { coordinate });
        }

        let mv = Move::new(self.human_mark, coordinate);
        let next = self.state.apply_move(mv);
        log!("Human placed {} at {}", self.human_mark, coordinate);
        self.advance(mv, next, Phase::AwaitingAiMove);
        Ok(())
    }

    pub fn play_ai(&mut self) -> Result<SearchResult, GameError> {
        match self.phase {
            Phase::AwaitingAiMove => {}
            Phase::AwaitingHumanMove => return Err(GameError::NotYourTurn),
            Phase::Finished(_) => return Err(GameError::GameFinished),
        }

        let result = self.engine.choose_ai_move(&self.state)?;
        log!(
            "Computer placed {} at {}",
            result.chosen_move.mark,
            result.chosen_move.coordinate
        );
        self.advance(result.chosen_move, result.state.clone(), Phase::AwaitingHumanMove);
        Ok(result)
    }

    /// The only legal human move, when there is exactly one.
    pub fn forced_human_move(&self) -> Option<Coordinate> {
        if self.phase != Phase::AwaitingHumanMove {
            return None;
        }
        match self.state.available_moves().as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    fn advance(&mut self, mv: Move, next: BoardState, next_phase: Phase) {
        self.state = next;
        self.last_move = Some(mv);
        self.move_count += 1;

        self.phase = if self.state.is_terminal() {
            let outcome = self.state.score_for(self.human_mark);
            log!("Game over after {} moves: human {:?}", self.move_count, outcome);
            Phase::Finished(outcome)
        } else {
            next_phase
        };
    }
}
