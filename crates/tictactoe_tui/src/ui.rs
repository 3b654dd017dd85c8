//! Stateless rendering of the shell.

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{Player, Position, Ruleset, Square, Variant};

const HELP: &str = "Arrows move | Enter/Space or 1-9 place | N new round | R reset scores | Esc quit";

/// Renders the whole screen for the current app state.
pub fn draw<R: Ruleset>(frame: &mut Frame, app: &App<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Scores
            Constraint::Length(1), // Note
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = match app.game().variant() {
        Variant::Classic => "Tic-Tac-Toe",
        Variant::ThreeStone => "Tic-Tac-Toe - Max 3 Stones",
    };
    frame.render_widget(
        Paragraph::new(title)
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        chunks[0],
    );

    draw_board(frame, chunks[1], app);

    frame.render_widget(
        Paragraph::new(app.status_line())
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        chunks[2],
    );

    frame.render_widget(
        Paragraph::new(app.score_line()).alignment(Alignment::Center),
        chunks[3],
    );

    if let Some(note) = app.note() {
        frame.render_widget(
            Paragraph::new(note)
                .style(Style::default().fg(Color::Magenta))
                .alignment(Alignment::Center),
            chunks[4],
        );
    }

    frame.render_widget(
        Paragraph::new(HELP)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        chunks[5],
    );
}

fn draw_board<R: Ruleset>(frame: &mut Frame, area: Rect, app: &App<R>) {
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

    for (row, cells) in Position::ALL.chunks(3).enumerate() {
        if row > 0 {
            draw_separator(frame, rows[row * 2 - 1]);
        }
        draw_row(frame, rows[row * 2], app, cells);
    }
}

fn draw_row<R: Ruleset>(frame: &mut Frame, area: Rect, app: &App<R>, cells: &[Position]) {
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

    for (col, pos) in cells.iter().enumerate() {
        if col > 0 {
            draw_separator_vertical(frame, cols[col * 2 - 1]);
        }
        draw_cell(frame, cols[col * 2], app, *pos);
    }
}

fn draw_cell<R: Ruleset>(frame: &mut Frame, area: Rect, app: &App<R>, pos: Position) {
    let game = app.game();

    let (symbol, mut style) = match game.board().get(pos) {
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

    if game.winning_line().is_some_and(|line| line.contains(pos)) {
        style = style.fg(Color::Green).add_modifier(Modifier::REVERSED);
    } else if game.next_eviction() == Some(pos) {
        style = style.add_modifier(Modifier::DIM);
    }

    if pos == app.cursor() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center),
        area,
    );
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────┼─────────────┼────────────")
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Action;
    use ratatui::{Terminal, backend::TestBackend};
    use tictactoe_core::{Classic, ThreeStone};

    fn render<R: Ruleset>(app: &App<R>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).expect("test terminal");
        terminal.draw(|frame| draw(frame, app)).expect("draw");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_status_and_scores() {
        let mut app = App::<Classic>::new();
        app.handle(Action::PlaceAt(Position::Center));
        let screen = render(&app);
        assert!(screen.contains("Tic-Tac-Toe"));
        assert!(screen.contains("O to move"));
        assert!(screen.contains("X: 0   O: 0   Draws: 0"));
        assert!(screen.contains(" X "));
    }

    #[test]
    fn test_three_stone_title() {
        let app = App::<ThreeStone>::new();
        assert!(render(&app).contains("Max 3 Stones"));
    }
}
