mod config;
mod input;
mod render;

use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};
use common::config::Validate;
use common::game_config::GameConfig;
use common::games::SessionRng;
use common::games::tictactoe::{CellMark, ControllerSettings, FirstPlayerMode, GameController, Phase};
use common::{log, logger};
use input::{Command, parse_command};
use render::{outcome_message, render_board};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MarkArg {
    X,
    O,
}

impl From<MarkArg> for CellMark {
    fn from(mark: MarkArg) -> Self {
        match mark {
            MarkArg::X => CellMark::First,
            MarkArg::O => CellMark::Second,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FirstArg {
    Human,
    Computer,
    Random,
}

impl From<FirstArg> for FirstPlayerMode {
    fn from(first: FirstArg) -> Self {
        match first {
            FirstArg::Human => FirstPlayerMode::Human,
            FirstArg::Computer => FirstPlayerMode::Computer,
            FirstArg::Random => FirstPlayerMode::Random,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe", about = "Play tic-tac-toe against a perfect opponent")]
struct Args {
    /// Board side length
    #[arg(long)]
    size: Option<usize>,
    /// Mark the human plays
    #[arg(long, value_enum)]
    mark: Option<MarkArg>,
    /// Who moves first
    #[arg(long, value_enum)]
    first: Option<FirstArg>,
    /// Play the human's move automatically when only one cell is left
    #[arg(long)]
    auto_forced: bool,
    /// Seed for the random first-player choice
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    verbose: bool,
    #[arg(long)]
    use_log_prefix: bool,
    /// Write the effective settings back to the config file
    #[arg(long)]
    save_config: bool,
}

impl Args {
    fn apply(&self, config: &mut GameConfig) {
        if let Some(size) = self.size {
            config.board_size = size;
        }
        if let Some(mark) = self.mark {
            config.human_mark = mark.into();
        }
        if let Some(first) = self.first {
            config.first_player = first.into();
        }
        config.auto_play_forced |= self.auto_forced;
        config.verbose |= self.verbose;
        if self.use_log_prefix && config.log_prefix.is_none() {
            config.log_prefix = Some("TicTacToe".to_string());
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = config::get_config_manager();
    let mut game_config = config_manager.get_config()?;
    args.apply(&mut game_config);
    game_config.validate()?;

    logger::init_logger(game_config.log_prefix.clone(), game_config.verbose);

    if args.save_config {
        config_manager.set_config(&game_config)?;
        log!("Saved settings to config file");
    }

    let mut rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed {}", rng.seed());

    let settings = ControllerSettings::from(&game_config);
    let mut game = GameController::new(&settings, &mut rng)?;
    run(&mut game)
}

fn run(game: &mut GameController) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    println!(
        "You play {}. Enter moves as row,col (zero-based), q to quit.",
        game.human_mark()
    );

    loop {
        print!("\n{}", render_board(game.state()));

        match game.phase() {
            Phase::Finished(outcome) => {
                println!("{}", outcome_message(game, outcome));
                return Ok(());
            }
            Phase::AwaitingAiMove => {
                let result = game.play_ai()?;
                println!("Computer plays {}", result.chosen_move.coordinate);
            }
            Phase::AwaitingHumanMove => {
                if game.auto_play_forced()
                    && let Some(coordinate) = game.forced_human_move()
                {
                    println!("Only {} is left, playing it for you", coordinate);
                    game.play_human(coordinate)?;
                    continue;
                }

                print!("Your move: ");
                stdout.flush()?;
                let Some(line) = lines.next() else {
                    println!();
                    return Ok(());
                };

                match parse_command(&line?) {
                    Ok(Command::Quit) => return Ok(()),
                    Ok(Command::Place(coordinate)) => {
                        if let Err(e) = game.play_human(coordinate) {
                            println!("{}", e);
                        }
                    }
                    Err(e) => println!("{}", e),
                }
            }
        }
    }
}
