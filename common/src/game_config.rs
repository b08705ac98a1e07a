use serde::{Deserialize, Serialize};

use crate::config::Validate;
use crate::games::tictactoe::{CellMark, ControllerSettings, DEFAULT_BOARD_SIZE, FirstPlayerMode};

/// Largest board the exhaustive search finishes on in interactive time.
pub const MAX_BOARD_SIZE: usize = 3;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub board_size: usize,
    pub human_mark: CellMark,
    pub first_player: FirstPlayerMode,
    #[serde(default)]
    pub auto_play_forced: bool,
    #[serde(default)]
    pub log_prefix: Option<String>,
    #[serde(default)]
    pub verbose: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            human_mark: CellMark::First,
            first_player: FirstPlayerMode::Human,
            auto_play_forced: false,
            log_prefix: None,
            verbose: false,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.board_size < 1 || self.board_size > MAX_BOARD_SIZE {
            return Err(format!(
                "Board size must be between 1 and {}, got {}",
                MAX_BOARD_SIZE, self.board_size
            ));
        }
        if self.human_mark == CellMark::Empty {
            return Err("Human mark must be X or O".to_string());
        }
        Ok(())
    }
}

impl From<&GameConfig> for ControllerSettings {
    fn from(config: &GameConfig) -> Self {
        Self {
            size: config.board_size,
            human_mark: config.human_mark,
            first_player: config.first_player,
            auto_play_forced: config.auto_play_forced,
        }
    }
}
