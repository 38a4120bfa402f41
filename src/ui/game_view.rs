use super::app::App;
use super::board_widget::{board_lines, player_color};
use crate::game::{Game, GameStatus};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, app: &App) {
    let game = app.game();
    // Column numbers, two borders and the cursor line around the rows.
    let board_rows = u16::try_from(game.board().height())
        .unwrap_or(u16::MAX)
        .saturating_add(4);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),       // Header
            Constraint::Min(board_rows), // Board
            Constraint::Length(3),       // Message
            Constraint::Length(4),       // Controls
        ])
        .split(frame.area());

    render_header(frame, game, chunks[0]);
    render_board(frame, app, chunks[1]);
    render_message(frame, app.message(), chunks[2]);
    render_controls(frame, game, chunks[3]);
}

fn render_header(frame: &mut Frame, game: &Game, area: Rect) {
    let (status, color) = match game.status() {
        GameStatus::InProgress => {
            let player = game.current_player();
            (
                format!("Current Player: {} ({})", player.name, player.color),
                player_color(player),
            )
        }
        GameStatus::Won(seat) => {
            let player = game.player(seat);
            (format!("Game Over  |  {} won", player.name), player_color(player))
        }
        GameStatus::Tied => ("Game Over  |  Tie".to_string(), Color::White),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, app: &App, area: Rect) {
    let game = app.game();
    let selected = game.is_active().then_some(app.selected_column());
    let highlight = app.winning_line().map(|line| &line[..]).unwrap_or(&[]);
    let lines = board_lines(game.board(), game.players(), selected, highlight);

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, game: &Game, area: Rect) {
    let line1 = Line::from("←/→: Move  |  Enter: Drop  |  1-9: Drop in column  |  R: Restart  |  Q: Quit");
    let mut line2 = Vec::new();
    for (i, player) in game.players().iter().enumerate() {
        if i > 0 {
            line2.push(Span::raw("  vs  "));
        }
        line2.push(Span::styled(
            format!("{} ●", player.name),
            Style::default()
                .fg(player_color(player))
                .add_modifier(Modifier::BOLD),
        ));
    }

    let controls = Paragraph::new(vec![line1, Line::from(line2)])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 24)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_renders_current_player() {
        let app = App::new(AppConfig::default());
        let text = screen_text(&app);
        assert!(text.contains("Current Player: Player 1 (red)"));
        assert!(text.contains("Connect Four"));
    }

    #[test]
    fn test_renders_winner() {
        let mut app = App::new(AppConfig::default());
        for key in ['1', '2', '1', '2', '1', '2', '1'] {
            app.handle_key(KeyEvent::new(KeyCode::Char(key), KeyModifiers::NONE));
        }
        let text = screen_text(&app);
        assert!(text.contains("Game Over  |  Player 1 won"));
        assert!(text.contains("Player 1 won!"));
    }

    #[test]
    fn test_renders_board_taller_than_terminal() {
        // Tallest board whose row count still fits a u16.
        let mut config = AppConfig::default();
        config.board.height = usize::from(u16::MAX);
        config.board.width = 4;
        let app = App::new(config);
        // The board squeezes the other panels but the frame still draws.
        let text = screen_text(&app);
        assert!(text.contains(" . "));
    }
}
