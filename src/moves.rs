//! Scripted move lists and their text reports, as used by the `replay` binary.

use crate::error::MoveListError;
use crate::game::{Board, Cell, Game, GameStatus, MoveResult, Seat};

/// Parse 0-based column indices separated by commas and/or whitespace,
/// e.g. `"3,3,4 4 5"`.
pub fn parse_move_list(input: &str) -> Result<Vec<usize>, MoveListError> {
    let columns = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| {
            token
                .parse::<usize>()
                .map_err(|_| MoveListError::InvalidColumn {
                    token: token.to_string(),
                    position,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if columns.is_empty() {
        return Err(MoveListError::Empty);
    }
    Ok(columns)
}

/// Apply `columns` in order, collecting one result per move. Moves after the
/// game ends are still submitted and come back ignored.
pub fn play_all(game: &mut Game, columns: &[usize]) -> Vec<MoveResult> {
    columns.iter().map(|&col| game.drop_piece(col)).collect()
}

/// Plain-text board: `X` for the first seat, `O` for the second, `.` empty,
/// column numbers (0-based) underneath.
pub fn render_text(board: &Board) -> String {
    let mut out = String::new();
    for row in 0..board.height() {
        let cells: Vec<&str> = (0..board.width())
            .map(|col| match board.get(row, col) {
                Cell::Empty => ".",
                Cell::Occupied(Seat::First) => "X",
                Cell::Occupied(Seat::Second) => "O",
            })
            .collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    let labels: Vec<String> = (0..board.width()).map(|col| (col % 10).to_string()).collect();
    out.push_str(&labels.join(" "));
    out.push('\n');
    out
}

fn name(game: &Game, seat: Seat) -> &str {
    &game.player(seat).name
}

/// One-line report of a move's result, naming players as `game` knows them.
pub fn describe_move(game: &Game, result: &MoveResult) -> String {
    match *result {
        MoveResult::Ignored { reason } => format!("ignored ({reason})"),
        MoveResult::Placed { row, column, next } => {
            format!("placed at ({row}, {column}), {} to move", name(game, next))
        }
        MoveResult::Won {
            row, column, winner, ..
        } => format!("placed at ({row}, {column}), {} won!", name(game, winner)),
        MoveResult::Tied { row, column } => format!("placed at ({row}, {column}), tie!"),
    }
}

pub fn summarize(game: &Game) -> String {
    match game.status() {
        GameStatus::InProgress => format!("in progress, {} to move", game.current_player().name),
        GameStatus::Won(seat) => format!("{} won", name(game, seat)),
        GameStatus::Tied => "tie".to_string(),
    }
}
