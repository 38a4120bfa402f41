use std::str::FromStr;

use crate::game::{Board, Cell, Player};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Terminal color for a player's chosen color string, falling back to white
/// for names the terminal does not know.
pub fn player_color(player: &Player) -> Color {
    Color::from_str(player.color.trim()).unwrap_or(Color::White)
}

/// Framed board lines: column numbers on top, a cursor under the selected
/// column, and `highlight` cells drawn reversed.
pub fn board_lines(
    board: &Board,
    players: &[Player; 2],
    selected_column: Option<usize>,
    highlight: &[(usize, usize)],
) -> Vec<Line<'static>> {
    let colors = [player_color(&players[0]), player_color(&players[1])];
    let width = board.width();
    let mut lines = Vec::with_capacity(board.height() + 4);

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..width {
        let label = format!("{:^3}", col + 1);
        if Some(col) == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    let rule = "═".repeat(3 * width + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 0..board.height() {
        let mut row_spans = vec![Span::raw("  ║")];
        for col in 0..width {
            let (symbol, mut style) = match board.get(row, col) {
                Cell::Empty => (" . ", Style::default().fg(Color::DarkGray)),
                Cell::Occupied(seat) => (" ● ", Style::default().fg(colors[seat.index()])),
            };
            if highlight.contains(&(row, col)) {
                style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
            }
            row_spans.push(Span::styled(symbol, style));
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    if let Some(selected) = selected_column {
        let mut indicator_line = vec![Span::raw("   ")];
        for col in 0..width {
            if col == selected {
                indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
            } else {
                indicator_line.push(Span::raw("   "));
            }
        }
        indicator_line.push(Span::raw("  "));
        lines.push(Line::from(indicator_line));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Seat;

    fn players() -> [Player; 2] {
        [Player::new("A", "red"), Player::new("B", "#00ff00")]
    }

    #[test]
    fn test_player_color_parses_names_and_hex() {
        assert_eq!(player_color(&Player::new("A", "red")), Color::Red);
        assert_eq!(player_color(&Player::new("A", "#00ff00")), Color::Rgb(0, 255, 0));
        assert_eq!(player_color(&Player::new("A", "not-a-color")), Color::White);
    }

    #[test]
    fn test_board_lines_layout() {
        let board = Board::default();
        let lines = board_lines(&board, &players(), Some(3), &[]);
        // numbers + top + 6 rows + bottom + cursor
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1].to_string(), format!("  ╔{}╗", "═".repeat(22)));
        assert_eq!(lines[2].to_string(), format!("  ║{} ║", " . ".repeat(7)));
    }

    #[test]
    fn test_board_lines_without_cursor() {
        let board = Board::new(4, 4);
        let lines = board_lines(&board, &players(), None, &[]);
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_occupied_cells_use_player_color() {
        let mut board = Board::default();
        board.occupy(5, 0, Seat::Second);
        let lines = board_lines(&board, &players(), None, &[(5, 0)]);
        let cell = &lines[7].spans[1];
        assert_eq!(cell.content, " ● ");
        assert_eq!(cell.style.fg, Some(Color::Rgb(0, 255, 0)));
        assert!(cell.style.add_modifier.contains(Modifier::REVERSED));
    }
}
