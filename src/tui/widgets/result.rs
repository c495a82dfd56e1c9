//! Result Panels
//!
//! Busy indicator, error panel and the analysis summary.

use crate::render::{ColumnEntry, SummaryView};
use crate::tui::theme::{Icons, Theme};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Color,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

/// Columns per row in the column overview grid
const OVERVIEW_COLUMNS: usize = 3;

/// Line counts of the column overview, for scroll bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverviewHeight {
    pub content: u16,
    pub viewport: u16,
}

pub fn render_busy(frame: &mut Frame, area: Rect, message: &str, tick: u64) {
    let line = Line::from(vec![
        Span::styled(format!("{} ", Icons::spinner(tick)), Theme::active()),
        Span::styled(message.to_string(), Theme::active()),
    ]);

    let panel = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border_focused()),
    );

    frame.render_widget(panel, panel_area(area, 3));
}

pub fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let line = Line::from(vec![
        Span::styled(format!("{} ", Icons::ERROR), Theme::error()),
        Span::styled(message.to_string(), Theme::error()),
    ]);

    let panel = Paragraph::new(line).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border_error()),
    );

    frame.render_widget(panel, panel_area(area, 3));
}

/// Draw the summary cards and column overview
pub fn render_summary(
    frame: &mut Frame,
    area: Rect,
    summary: &SummaryView,
    scroll: u16,
) -> OverviewHeight {
    let block = Block::default()
        .title(Line::from(vec![
            Span::styled(format!(" {} ", Icons::COMPLETE), Theme::success()),
            Span::styled(format!("{} ", summary.heading), Theme::success()),
            Span::styled(format!("{} ", summary.filename), Theme::text_secondary()),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border_success());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),  // Cards
            Constraint::Min(3),     // Column overview
        ])
        .split(inner);

    render_cards(frame, chunks[0], summary);
    render_overview(frame, chunks[1], summary, scroll)
}

fn render_cards(frame: &mut Frame, area: Rect, summary: &SummaryView) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let figures: [(&str, &str, Color); 3] = [
        (summary.rows.as_str(), "Rows", Theme::ACCENT),
        (summary.columns.as_str(), "Columns", Theme::SUCCESS),
        (summary.missing_values.as_str(), "Missing Values", Theme::HIGHLIGHT),
    ];

    for ((value, label, color), card_area) in figures.into_iter().zip(cards.iter()) {
        let card = Paragraph::new(vec![
            Line::from(Span::styled(value.to_string(), Theme::figure(color))),
            Line::from(Span::styled(label, Theme::text_secondary())),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Theme::border()));

        frame.render_widget(card, *card_area);
    }
}

fn render_overview(
    frame: &mut Frame,
    area: Rect,
    summary: &SummaryView,
    scroll: u16,
) -> OverviewHeight {
    let block = Block::default()
        .title(Span::styled(" Column Overview ", Theme::heading()))
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cell_width = (inner.width as usize / OVERVIEW_COLUMNS).max(8);
    let mut lines = overview_lines(&summary.column_overview, cell_width);
    if summary.sample_rows > 0 {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("{} sample row(s) returned", summary.sample_rows),
            Theme::text_dim(),
        )));
    }

    let content = lines.len() as u16;
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);

    OverviewHeight {
        content,
        viewport: inner.height,
    }
}

fn overview_lines(columns: &[ColumnEntry], cell_width: usize) -> Vec<Line<'static>> {
    columns
        .chunks(OVERVIEW_COLUMNS)
        .map(|row| {
            let spans = row
                .iter()
                .flat_map(|entry| cell_spans(entry, cell_width))
                .collect::<Vec<_>>();
            Line::from(spans)
        })
        .collect()
}

/// Name on the left, type label right-aligned within the cell
fn cell_spans(entry: &ColumnEntry, width: usize) -> [Span<'static>; 3] {
    let type_width = entry.data_type.chars().count();
    let name_width = width.saturating_sub(type_width + 2).max(1);
    let name = truncate(&entry.name, name_width);
    let pad = width
        .saturating_sub(name.chars().count() + type_width + 1)
        .max(1);

    [
        Span::styled(name, Theme::text()),
        Span::raw(" ".repeat(pad)),
        Span::styled(format!("{} ", entry.data_type), Theme::text_dim()),
    ]
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 1 {
        let mut out: String = s.chars().take(max - 1).collect();
        out.push('…');
        out
    } else {
        s.chars().take(max).collect()
    }
}

fn panel_area(area: Rect, height: u16) -> Rect {
    Rect {
        height: height.min(area.height),
        ..area
    }
}
