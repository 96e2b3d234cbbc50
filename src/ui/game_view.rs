use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::game::{Cell, Player};
use crate::render::FrameSnapshot;

pub fn render(frame: &mut Frame, snap: &FrameSnapshot) {
    // Config caps board height, but a board built directly can be any
    // size, so saturate rather than truncate.
    let board_rows = u16::try_from(snap.board.height())
        .unwrap_or(u16::MAX)
        .saturating_add(4);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),       // Header
            Constraint::Min(board_rows), // Board
            Constraint::Length(3),       // Controls
        ])
        .split(frame.area());

    render_header(frame, snap, chunks[0]);
    render_board(frame, snap, chunks[1]);
    render_controls(frame, chunks[2]);
}

fn render_header(frame: &mut Frame, snap: &FrameSnapshot, area: ratatui::layout::Rect) {
    let (status, color) = match snap.winner {
        Some(winner) => {
            // The banner blinks in step with the win highlight.
            let text = if snap.highlight_on {
                format!("{} won the game!", winner.name())
            } else {
                String::new()
            };
            (text, player_color(winner))
        }
        None => {
            let player = snap.current_player;
            (
                format!("Current Player: {}", player.name()),
                player_color(player),
            )
        }
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, snap: &FrameSnapshot, area: ratatui::layout::Rect) {
    let width = snap.board.width();
    let height = snap.board.height();
    let mut lines = Vec::new();

    // Column keys
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..width {
        col_line.push(Span::styled(
            format!(" {col} "),
            Style::default().fg(Color::Cyan),
        ));
    }
    lines.push(Line::from(col_line));

    // Top border
    lines.push(Line::from(format!("  ╔{}╗", "═".repeat(width * 3))));

    // Board rows
    for row in 0..height {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..width {
            let cell = snap.board.get(row, col);
            let (symbol, color) = match cell {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::Red => (" ● ", Color::Red),
                Cell::Yellow => (" ● ", Color::Yellow),
            };
            let mut style = Style::default().fg(color);
            // Winning cells flash: the on phase paints a reversed block,
            // the off phase falls back to the plain token.
            if snap.highlight_on && snap.highlight.contains(&(row, col)) {
                style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
            }
            row_spans.push(Span::styled(symbol, style));
        }

        row_spans.push(Span::raw("║"));
        lines.push(Line::from(row_spans));
    }

    // Bottom border
    lines.push(Line::from(format!("  ╚{}╝", "═".repeat(width * 3))));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let controls = Paragraph::new("0-9: Drop Token  |  R: Restart  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Yellow => Color::Yellow,
    }
}
