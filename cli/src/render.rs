use common::games::tictactoe::{BoardState, GameController, Outcome};

pub fn render_board(board: &BoardState) -> String {
    let size = board.size();
    let mut out = String::from("  ");
    for column in 0..size {
        out.push_str(&format!(" {}", column));
    }
    out.push('\n');
    for (row, cells) in board.rows().iter().enumerate() {
        out.push_str(&format!("{} ", row));
        for cell in cells {
            out.push(' ');
            out.push(cell.symbol());
        }
        out.push('\n');
    }
    out
}

pub fn outcome_message(game: &GameController, outcome: Outcome) -> String {
    match outcome {
        Outcome::Win => format!("You win as {}!", game.human_mark()),
        Outcome::Loss => format!("The computer wins as {}.", game.ai_mark()),
        Outcome::Draw => "It's a draw.".to_string(),
    }
}
