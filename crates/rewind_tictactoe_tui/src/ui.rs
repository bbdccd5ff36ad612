//! Stateless UI rendering: board, status line, and move list.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use rewind_tictactoe::{Outcome, Player, Position, Square};

use crate::app::{App, Pane};

/// Renders the full frame: title, board, move list, status.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Min(13),    // Board + history
            Constraint::Length(3),  // Status
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe - with time travel")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(42), Constraint::Length(34)])
        .split(chunks[1]);

    let win_line = match app.game().outcome() {
        Outcome::Won { line, .. } => Some(line),
        _ => None,
    };

    draw_board(frame, main[0], app, win_line);
    draw_history(frame, main[1], app);
    draw_status(frame, chunks[2], app);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let status = match app.game().outcome() {
        Outcome::Won { player, .. } => format!("Winner: {player}"),
        Outcome::Draw => "Draw!".to_string(),
        Outcome::InProgress => format!("Next player: {}", app.game().to_move()),
    };
    let hints = "Tab: pane | arrows: move | Enter: select | 1-9: play | r: restart | q: quit";

    let text = vec![Line::from(Span::styled(
        status,
        Style::default().fg(Color::Yellow),
    ))];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(hints));
    frame.render_widget(paragraph, area);
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App) {
    let current = app.game().step();
    let items: Vec<ListItem> = app
        .game()
        .history()
        .iter()
        .enumerate()
        .map(|(step, entry)| {
            let desc = match entry.placed() {
                None => "Go to game start".to_string(),
                Some(mv) => format!("Go to move #{step} {mv}"),
            };
            let style = if step == current {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(desc, style)))
        })
        .collect();

    let border_style = if app.pane() == Pane::History {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let list = List::new(items)
        .block(
            Block::default()
                .title("History")
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .highlight_style(Style::default().bg(Color::White).fg(Color::Black))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.selected()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, win_line: Option<[Position; 3]>) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    let lines = [
        [Position::TopLeft, Position::TopCenter, Position::TopRight],
        [
            Position::MiddleLeft,
            Position::Center,
            Position::MiddleRight,
        ],
        [
            Position::BottomLeft,
            Position::BottomCenter,
            Position::BottomRight,
        ],
    ];

    draw_row(frame, rows[0], app, win_line, &lines[0]);
    draw_separator(frame, rows[1]);
    draw_row(frame, rows[2], app, win_line, &lines[1]);
    draw_separator(frame, rows[3]);
    draw_row(frame, rows[4], app, win_line, &lines[2]);
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    win_line: Option<[Position; 3]>,
    positions: &[Position; 3],
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    draw_cell(frame, cols[0], app, win_line, positions[0]);
    draw_separator_vertical(frame, cols[1]);
    draw_cell(frame, cols[2], app, win_line, positions[1]);
    draw_separator_vertical(frame, cols[3]);
    draw_cell(frame, cols[4], app, win_line, positions[2]);
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    win_line: Option<[Position; 3]>,
    pos: Position,
) {
    let (symbol, base_style) = match app.game().board().get(pos) {
        Square::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let in_win_line = win_line.is_some_and(|line| line.contains(&pos));
    let style = if in_win_line {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if app.pane() == Pane::Board && pos == app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("──────────────────────────────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vert[1])[1]
}
