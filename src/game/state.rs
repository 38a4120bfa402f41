use log::{debug, info, trace};
use serde::Serialize;

use super::board::{Board, DEFAULT_HEIGHT, DEFAULT_WIDTH, LINE_LENGTH};
use super::player::{Player, Seat};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Won(Seat),
    Tied,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Why a move was dropped without touching the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("column {column} is outside the board (0..{width})")]
    ColumnOutOfRange { column: usize, width: usize },

    #[error("game is over")]
    GameOver,
}

/// Outcome of a single [`Game::drop_piece`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum MoveResult {
    /// Nothing changed.
    Ignored { reason: IgnoreReason },
    /// Piece placed, game goes on with `next` to move.
    Placed { row: usize, column: usize, next: Seat },
    /// Piece placed and completed `line` for `winner`.
    Won {
        row: usize,
        column: usize,
        winner: Seat,
        line: [(usize, usize); LINE_LENGTH],
    },
    /// Piece placed into the last empty cell without a line.
    Tied { row: usize, column: usize },
}

impl MoveResult {
    /// Whether the board changed.
    pub fn is_placed(&self) -> bool {
        !matches!(self, MoveResult::Ignored { .. })
    }
}

/// One game session. Mutated only through [`Game::drop_piece`]; a new game is
/// a new `Game`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    current: Seat,
    status: GameStatus,
    moves: usize,
}

impl Game {
    /// Start a game on the standard 6x7 board. `first` moves first.
    pub fn new(first: Player, second: Player) -> Self {
        Self::with_size(first, second, DEFAULT_HEIGHT, DEFAULT_WIDTH)
    }

    pub fn with_size(first: Player, second: Player, height: usize, width: usize) -> Self {
        info!(
            "new {}x{} game: {} ({}) vs {} ({})",
            height, width, first.name, first.color, second.name, second.color
        );
        Game {
            board: Board::new(height, width),
            players: [first, second],
            current: Seat::First,
            status: GameStatus::InProgress,
            moves: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether further moves are accepted.
    pub fn is_active(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    /// Seat to move; after a win this stays the winner's seat.
    pub fn current_seat(&self) -> Seat {
        self.current
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Number of pieces placed so far.
    pub fn move_count(&self) -> usize {
        self.moves
    }

    /// Drop a piece for the current player into `column`.
    ///
    /// Full columns, out-of-range columns and moves after the game ended are
    /// no-ops reported as [`MoveResult::Ignored`]. Otherwise the piece lands,
    /// the whole board is checked for a line by the mover, then for a tie,
    /// and only then does the turn pass.
    pub fn drop_piece(&mut self, column: usize) -> MoveResult {
        if let Err(reason) = self.check_move(column) {
            trace!("ignored move in column {column}: {reason}");
            return MoveResult::Ignored { reason };
        }
        let Some(row) = self.board.find_landing_row(column) else {
            let reason = IgnoreReason::ColumnFull { column };
            trace!("ignored move in column {column}: {reason}");
            return MoveResult::Ignored { reason };
        };

        let mover = self.current;
        self.board.occupy(row, column, mover);
        self.moves += 1;
        debug!("move {}: {:?} -> ({row}, {column})", self.moves, mover);

        if let Some(line) = self.board.find_line(mover) {
            self.status = GameStatus::Won(mover);
            info!("{} won after {} moves", self.player(mover).name, self.moves);
            return MoveResult::Won {
                row,
                column,
                winner: mover,
                line,
            };
        }

        if self.board.is_full() {
            self.status = GameStatus::Tied;
            info!("tie after {} moves", self.moves);
            return MoveResult::Tied { row, column };
        }

        self.current = mover.other();
        MoveResult::Placed {
            row,
            column,
            next: self.current,
        }
    }

    fn check_move(&self, column: usize) -> Result<(), IgnoreReason> {
        if self.status.is_terminal() {
            return Err(IgnoreReason::GameOver);
        }
        let width = self.board.width();
        if column >= width {
            return Err(IgnoreReason::ColumnOutOfRange { column, width });
        }
        Ok(())
    }
}
