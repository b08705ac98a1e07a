use common::games::tictactoe::Coordinate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(Coordinate),
    Quit,
}

/// Parses `row,col` (zero-based) or a quit request.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
        return Ok(Command::Quit);
    }

    let Some((row, column)) = line.split_once(',') else {
        return Err(format!("Expected row,col but got \"{}\"", line));
    };
    let row = parse_index(row, "row")?;
    let column = parse_index(column, "column")?;
    Ok(Command::Place(Coordinate::new(row, column)))
}

fn parse_index(value: &str, name: &str) -> Result<usize, String> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|_| format!("Invalid {} \"{}\"", name, value.trim()))
}
