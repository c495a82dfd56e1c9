//! UI Rendering
//!
//! Main layout: header with backend status, drop zone, result panel and a
//! status bar.

use crate::connectivity::ConnectivityStatus;
use crate::render::Panel;
use crate::tui::app::{App, View};
use crate::tui::theme::{Icons, Theme};
use crate::tui::widgets;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the main UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),  // Header
            Constraint::Length(8),  // Drop zone
            Constraint::Min(6),     // Result panel
            Constraint::Length(1),  // Status bar
        ])
        .split(frame.area());

    let view = app.upload_view();

    render_header(frame, chunks[0], app);
    widgets::render_intake(frame, chunks[1], &view.intake, &app.picker);

    match &view.panel {
        Panel::None => render_idle_hint(frame, chunks[2]),
        Panel::Busy(message) => widgets::render_busy(frame, chunks[2], message, app.tick),
        Panel::Error(message) => widgets::render_error(frame, chunks[2], message),
        Panel::Summary(summary) => {
            let overview_height = widgets::render_summary(frame, chunks[2], summary, app.scroll_offset);
            app.update_scroll_bounds(overview_height.content, overview_height.viewport);
        }
    }

    render_status_bar(frame, chunks[3], app);

    if app.view == View::Help {
        render_help(frame);
    }
}

/// Title line plus backend connectivity
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let dot_style = match app.connectivity {
        ConnectivityStatus::Checking => Theme::text_dim(),
        ConnectivityStatus::Reported(_) => Theme::success(),
        ConnectivityStatus::Unreachable => Theme::error(),
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("AI Business Platform", Theme::title()),
            Span::styled("  ·  AI Data Analysis", Theme::text_secondary()),
        ]),
        Line::from(vec![
            Span::styled(Icons::DOT, dot_style),
            Span::styled(" Backend Status: ", Theme::text_secondary()),
            Span::styled(app.connectivity.label().to_string(), Theme::text()),
            Span::styled(format!("  ({})", app.config.service.base_url), Theme::text_dim()),
        ]),
    ];

    let header = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Theme::border()),
    );

    frame.render_widget(header, area);
}

fn render_idle_hint(frame: &mut Frame, area: Rect) {
    let hint = Paragraph::new(Line::from(Span::styled(
        "Results will appear here once a file has been analysed.",
        Theme::text_dim(),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::NONE));

    frame.render_widget(hint, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let status = if app.upload_in_flight() {
        Span::styled("Uploading...", Theme::active())
    } else {
        Span::styled("Ready", Theme::text_secondary())
    };

    let shortcuts = vec![
        Span::styled(" [Enter]", Theme::shortcut_key()),
        Span::styled(" Upload ", Theme::shortcut_desc()),
        Span::styled("[↑/↓]", Theme::shortcut_key()),
        Span::styled(" Scroll ", Theme::shortcut_desc()),
        Span::styled("[Ctrl+Q]", Theme::shortcut_key()),
        Span::styled(" Quit ", Theme::shortcut_desc()),
        Span::styled("[F1]", Theme::shortcut_key()),
        Span::styled(" Help", Theme::shortcut_desc()),
    ];

    let line = Line::from(
        std::iter::once(status)
            .chain(std::iter::once(Span::raw(" │ ")))
            .chain(shortcuts)
            .collect::<Vec<_>>(),
    );

    frame.render_widget(Paragraph::new(line), area);
}

fn render_help(frame: &mut Frame) {
    let area = centered_rect(60, 50, frame.area());
    frame.render_widget(Clear, area);

    let help_lines = vec![
        Line::from(Span::styled("Uploading a file", Theme::heading())),
        Line::from(""),
        Line::from(Span::styled(
            "Drag a CSV or Excel file onto this terminal window, or type its",
            Theme::text(),
        )),
        Line::from(Span::styled("path into the Choose File box and press Enter.", Theme::text())),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter        ", Theme::shortcut_key()),
            Span::styled("Upload the typed path", Theme::text()),
        ]),
        Line::from(vec![
            Span::styled("Esc          ", Theme::shortcut_key()),
            Span::styled("Clear the path / close help", Theme::text()),
        ]),
        Line::from(vec![
            Span::styled("↑/↓          ", Theme::shortcut_key()),
            Span::styled("Scroll the column overview", Theme::text()),
        ]),
        Line::from(vec![
            Span::styled("Ctrl+Q       ", Theme::shortcut_key()),
            Span::styled("Quit", Theme::text()),
        ]),
        Line::from(""),
        Line::from(Span::styled("Press any key to close", Theme::text_dim())),
    ];

    let paragraph = Paragraph::new(help_lines).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Theme::border_focused()),
    );

    frame.render_widget(paragraph, area);
}

/// Helper to create a centered rect
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
