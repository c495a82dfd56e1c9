//! Drop Zone Widget
//!
//! The intake surface: drop target plus the "Choose File" path input.

use crate::intake::ACCEPTED_EXTENSIONS;
use crate::render::IntakeView;
use crate::tui::theme::{Icons, Theme};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use tui_textarea::TextArea;

pub fn render_intake(frame: &mut Frame, area: Rect, view: &IntakeView, picker: &TextArea<'static>) {
    let border_style = if !view.enabled {
        Theme::disabled()
    } else if view.highlighted {
        Theme::border_drag()
    } else {
        Theme::border()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Drop prompt
            Constraint::Length(1),  // "or"
            Constraint::Length(3),  // Choose File
            Constraint::Length(1),  // Accepted extensions
        ])
        .split(inner);

    let text_style = if view.enabled { Theme::heading() } else { Theme::disabled() };
    let prompt = Paragraph::new(Line::from(vec![
        Span::styled(format!("{} ", Icons::UPLOAD), text_style),
        Span::styled("Drop your CSV or Excel file here", text_style),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(prompt, chunks[0]);

    let or = Paragraph::new(Span::styled("or", Theme::text_dim())).alignment(Alignment::Center);
    frame.render_widget(or, chunks[1]);

    let picker_area = centered_columns(chunks[2], 70);
    let picker_block = Block::default()
        .title(Span::styled(
            format!(" {} Choose File ", Icons::FILE),
            if view.enabled { Theme::button() } else { Theme::disabled() },
        ))
        .borders(Borders::ALL)
        .border_style(if view.enabled { Theme::border_focused() } else { Theme::disabled() });
    let picker_inner = picker_block.inner(picker_area);
    frame.render_widget(picker_block, picker_area);
    frame.render_widget(picker, picker_inner);

    let accepted = Paragraph::new(Span::styled(
        format!("Accepted: {}", ACCEPTED_EXTENSIONS.join(", ")),
        Theme::text_dim(),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(accepted, chunks[3]);
}

fn centered_columns(area: Rect, percent: u16) -> Rect {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent) / 2),
            Constraint::Percentage(percent),
            Constraint::Percentage((100 - percent) / 2),
        ])
        .split(area)[1]
}
