//! Tic-tac-toe against an exhaustive minimax opponent.
//!
//! `games::tictactoe` holds the immutable board model, the alpha-beta search
//! and the controller that sequences a human-versus-computer game. Config and
//! logging support the command-line driver.

pub mod config;
pub mod game_config;
pub mod games;
pub mod logger;
