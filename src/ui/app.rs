use crate::config::AppConfig;
use crate::game::{Game, MoveResult, LINE_LENGTH};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use log::info;
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    config: AppConfig,
    game: Game,
    selected_column: usize,
    winning_line: Option<[(usize, usize); LINE_LENGTH]>,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let game = config.new_game();
        let selected_column = game.board().width() / 2;
        App {
            config,
            game,
            selected_column, // Start in middle
            winning_line: None,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn winning_line(&self) -> Option<&[(usize, usize); LINE_LENGTH]> {
        self.winning_line.as_ref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.game.board().width() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char(c @ '1'..='9') => {
                let col = c as usize - '1' as usize;
                if col < self.game.board().width() {
                    self.selected_column = col;
                    self.drop_piece();
                }
            }
            KeyCode::Char('r') => {
                self.restart();
            }
            _ => {}
        }
    }

    /// Replace the current game with a fresh one.
    fn restart(&mut self) {
        info!("restarting after {} moves", self.game.move_count());
        self.game = self.config.new_game();
        self.selected_column = self.game.board().width() / 2;
        self.winning_line = None;
        self.message = Some("New game started!".to_string());
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        match self.game.drop_piece(self.selected_column) {
            MoveResult::Placed { .. } => {}
            MoveResult::Won { winner, line, .. } => {
                self.winning_line = Some(line);
                self.message = Some(format!("{} won!", self.game.player(winner).name));
            }
            MoveResult::Tied { .. } => {
                self.message = Some("Tie!".to_string());
            }
            MoveResult::Ignored { reason } => {
                self.message = Some(if self.game.is_active() {
                    format!("Can't drop there: {reason}")
                } else {
                    "Game over! Press 'r' to restart.".to_string()
                });
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, self);
    }
}
