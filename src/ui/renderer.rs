use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
    Frame,
};

use crate::constants::{MAX_LEVEL, PIECE_COUNT};
use crate::game::board::TileKind;
use crate::game::path::Path;
use crate::game::{Cell, Game, GameState, Pos};

pub fn ui(f: &mut Frame, game: &Game) {
    match game.game_state {
        GameState::Home => render_home(f, game),
        GameState::Collection => render_collection(f, game),
        _ => render_game(f, game),
    }
}

fn render_game(f: &mut Frame, game: &Game) {
    let size = f.size();

    // 10 grid rows + 2 border lines; 7 two-char columns + 2 border lines
    let board_height = game.grid.rows() as u16 + 2;
    let board_width = game.grid.cols() as u16 * 2 + 2;

    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(board_height),
            Constraint::Min(1),
        ])
        .split(size);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(board_width),
            Constraint::Length(26),
            Constraint::Min(1),
        ])
        .split(vertical_chunks[1]);

    let board_area = horizontal_chunks[1];
    let side_area = horizontal_chunks[2];

    render_board(f, game, board_area);
    render_side_panel(f, game, side_area);

    match game.game_state {
        GameState::LevelComplete => render_level_complete_overlay(f, game, board_area),
        GameState::GameOver => render_game_over_overlay(f, board_area),
        GameState::GameComplete => render_game_complete_overlay(f, board_area),
        _ => {}
    }
}

fn render_board(f: &mut Frame, game: &Game, area: Rect) {
    let flash: Vec<Pos> = match game.active_path() {
        Some(path) => polyline_cells(path),
        None => Vec::new(),
    };
    let hinted = |pos: Pos| match game.hint {
        Some((a, b)) => pos == a || pos == b,
        None => false,
    };

    let mut board_lines = Vec::new();
    for row in 0..game.grid.rows() {
        let mut line_spans = Vec::new();
        for col in 0..game.grid.cols() {
            let pos = Pos::new(row, col);
            let span = match game.grid.get(pos) {
                Cell::Tile(kind) => {
                    let (glyph, color) = kind_face(kind);
                    let mut style = Style::default().fg(color).add_modifier(Modifier::BOLD);
                    if game.selected == Some(pos) {
                        style = style.bg(Color::Blue);
                    } else if hinted(pos) {
                        style = style.bg(Color::DarkGray);
                    }
                    if game.cursor == pos {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    Span::styled(format!("{glyph} "), style)
                }
                Cell::Empty => {
                    if flash.contains(&pos) {
                        Span::styled("··", Style::default().fg(Color::Yellow))
                    } else if game.cursor == pos {
                        Span::styled("  ", Style::default().add_modifier(Modifier::REVERSED))
                    } else {
                        Span::raw("  ")
                    }
                }
            };
            line_spans.push(span);
        }
        board_lines.push(Line::from(line_spans));
    }

    let board_widget = Paragraph::new(board_lines)
        .block(Block::default().borders(Borders::ALL).title("linkup"));

    f.render_widget(board_widget, area);
}

fn render_side_panel(f: &mut Frame, game: &Game, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let remaining = game.timer.remaining();
    let limit = game.timer.limit();
    let ratio = if limit.is_zero() {
        0.0
    } else {
        (remaining.as_secs_f64() / limit.as_secs_f64()).clamp(0.0, 1.0)
    };
    let gauge_color = if ratio < 0.25 { Color::Red } else { Color::Green };
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Time"))
        .gauge_style(Style::default().fg(gauge_color))
        .ratio(ratio)
        .label(format!("{}s", remaining.as_secs()));
    f.render_widget(gauge, chunks[0]);

    let level_style = if game.levels.is_last() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let stats_text = vec![
        Line::from(vec![
            Span::raw("Level  "),
            Span::styled(
                format!("{}/{}", game.levels.current(), MAX_LEVEL),
                level_style,
            ),
        ]),
        Line::from(vec![Span::raw(format!("Tiles  {}", game.grid.remaining()))]),
        Line::from(vec![Span::raw(format!(
            "Pieces {}/{}",
            game.collection.count(),
            PIECE_COUNT
        ))]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled(
            "arrows move",
            Style::default().fg(Color::DarkGray),
        )]),
        Line::from(vec![Span::styled(
            "enter  select",
            Style::default().fg(Color::DarkGray),
        )]),
        Line::from(vec![Span::styled(
            "h hint  s shuffle",
            Style::default().fg(Color::DarkGray),
        )]),
        Line::from(vec![Span::styled(
            "esc home  q quit",
            Style::default().fg(Color::DarkGray),
        )]),
    ];
    let stats_widget =
        Paragraph::new(stats_text).block(Block::default().borders(Borders::ALL).title("Adventure"));
    f.render_widget(stats_widget, chunks[1]);
}

fn render_home(f: &mut Frame, game: &Game) {
    let area = centered_rect(60, 50, f.size());

    let progress_line = if game.levels.is_completed() {
        Line::from(vec![Span::styled(
            "Adventure complete!",
            Style::default().fg(Color::Green),
        )])
    } else if game.levels.current() > 1 {
        Line::from(vec![Span::raw(format!(
            "Continue at level {} of {}",
            game.levels.current(),
            MAX_LEVEL
        ))])
    } else {
        Line::from(vec![Span::raw(format!("{MAX_LEVEL} levels ahead"))])
    };

    let home_text = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled(
            "L I N K U P",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("Clear the board by connecting")]),
        Line::from(vec![Span::raw("matching tiles with at most two bends")]),
        Line::from(vec![Span::raw("")]),
        progress_line,
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled(
            "enter  start    c  collection    q  quit",
            Style::default().fg(Color::DarkGray),
        )]),
    ];

    let home_widget = Paragraph::new(home_text)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    f.render_widget(home_widget, area);
}

fn render_collection(f: &mut Frame, game: &Game) {
    let area = centered_rect(60, 60, f.size());

    let header = if game.collection.is_complete() {
        Span::styled(
            "Collection complete!",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            format!("Pieces {}/{}", game.collection.count(), PIECE_COUNT),
            Style::default().fg(Color::Cyan),
        )
    };
    let mut lines = vec![Line::from(vec![header]), Line::from(vec![Span::raw("")])];

    // 40 pieces laid out as 8 rows of 5, like the board interior
    for row in 0..8 {
        let mut spans = Vec::new();
        for col in 0..5 {
            let id = (row * 5 + col + 1) as u8;
            if game.collection.has(id) {
                spans.push(Span::styled(
                    format!("{id:02} "),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ));
            } else {
                spans.push(Span::styled("·· ", Style::default().fg(Color::DarkGray)));
            }
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(vec![Span::raw("")]));
    lines.push(Line::from(vec![Span::styled(
        "esc  back",
        Style::default().fg(Color::DarkGray),
    )]));

    let collection_widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Collection"))
        .alignment(Alignment::Center);
    f.render_widget(collection_widget, area);
}

fn render_level_complete_overlay(f: &mut Frame, game: &Game, area: Rect) {
    let popup_area = centered_rect(80, 60, area);
    f.render_widget(Clear, popup_area);

    let award_line = match game.last_award {
        Some(id) => Line::from(vec![Span::styled(
            format!("Piece {id:02} collected!"),
            Style::default().fg(Color::Yellow),
        )]),
        None => Line::from(vec![Span::raw("")]),
    };

    let text = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled(
            "Level cleared!",
            Style::default().fg(Color::Green),
        )]),
        award_line,
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw(format!("Next: level {}", game.levels.current()))]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled(
            "enter  continue",
            Style::default().fg(Color::DarkGray),
        )]),
    ];

    let widget = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Success"))
        .alignment(Alignment::Center);
    f.render_widget(widget, popup_area);
}

fn render_game_over_overlay(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(80, 60, area);
    f.render_widget(Clear, popup_area);

    let text = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled(
            "Time's up!",
            Style::default().fg(Color::Red),
        )]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("Progress starts over at level 1")]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled(
            "r  retry    esc  home",
            Style::default().fg(Color::DarkGray),
        )]),
    ];

    let widget = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Game over"))
        .alignment(Alignment::Center);
    f.render_widget(widget, popup_area);
}

fn render_game_complete_overlay(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(80, 60, area);
    f.render_widget(Clear, popup_area);

    let text = vec![
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled(
            format!("All {MAX_LEVEL} levels cleared!"),
            Style::default().fg(Color::Green),
        )]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::raw("The collection is complete")]),
        Line::from(vec![Span::raw("")]),
        Line::from(vec![Span::styled(
            "enter  view collection",
            Style::default().fg(Color::DarkGray),
        )]),
    ];

    let widget = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Congratulations"))
        .alignment(Alignment::Center);
    f.render_widget(widget, popup_area);
}

/// Every cell covered by the connection polyline, endpoints included.
fn polyline_cells(path: &Path) -> Vec<Pos> {
    let mut cells = Vec::new();
    for pair in path.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        if from.row == to.row {
            let (lo, hi) = (from.col.min(to.col), from.col.max(to.col));
            for col in lo..=hi {
                cells.push(Pos::new(from.row, col));
            }
        } else {
            let (lo, hi) = (from.row.min(to.row), from.row.max(to.row));
            for row in lo..=hi {
                cells.push(Pos::new(row, from.col));
            }
        }
    }
    cells
}

/// Display glyph and colour for a tile face.
fn kind_face(kind: TileKind) -> (char, Color) {
    match kind {
        0 => ('A', Color::Cyan),
        1 => ('B', Color::Yellow),
        2 => ('C', Color::Magenta),
        3 => ('D', Color::Green),
        4 => ('E', Color::Red),
        5 => ('F', Color::Blue),
        6 => ('G', Color::LightYellow),
        7 => ('H', Color::LightCyan),
        8 => ('I', Color::LightMagenta),
        9 => ('J', Color::LightGreen),
        10 => ('K', Color::LightRed),
        _ => ('?', Color::White),
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
