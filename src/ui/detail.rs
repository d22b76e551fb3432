//! Detail overlay rendering.
//!
//! Displays a modal overlay with everything known about the selected vital.

use chrono::{DateTime, Utc};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::common::icon_glyph;
use crate::app::App;
use crate::data::VitalValue;

/// Minimum width required for the detail overlay to render properly.
const MIN_OVERLAY_WIDTH: u16 = 30;
/// Minimum height required for the detail overlay to render properly.
const MIN_OVERLAY_HEIGHT: u16 = 12;

/// Unformatted description of a value, as recorded.
pub fn raw_value(value: &VitalValue) -> String {
    match value {
        VitalValue::Percent { ratio } => format!("ratio {ratio}"),
        VitalValue::Count { amount, unit_label } => format!("{amount} {unit_label}"),
        VitalValue::Duration { seconds } => format!("{seconds} s"),
        VitalValue::Temperature {
            magnitude, unit, ..
        } => format!("{magnitude} {}", unit.symbol()),
    }
}

/// Render the selected vital as a modal overlay.
pub fn render_overlay(frame: &mut Frame, app: &App, area: Rect, now: DateTime<Utc>) {
    // Skip rendering if terminal is too small for the overlay
    if area.width < MIN_OVERLAY_WIDTH || area.height < MIN_OVERLAY_HEIGHT {
        return;
    }

    let Some(record) = app.selected_record() else {
        return;
    };

    let overlay_width = (area.width * 80 / 100).clamp(MIN_OVERLAY_WIDTH, 72);
    let overlay_height = (area.height * 70 / 100).clamp(MIN_OVERLAY_HEIGHT, 16);

    let x = area.x + (area.width.saturating_sub(overlay_width)) / 2;
    let y = area.y + (area.height.saturating_sub(overlay_height)) / 2;
    let overlay_area = Rect::new(x, y, overlay_width, overlay_height);

    // Clear the area behind the overlay
    frame.render_widget(Clear, overlay_area);

    let chunks = Layout::vertical([
        Constraint::Min(8),    // Content
        Constraint::Length(1), // Footer
    ])
    .split(overlay_area);

    let accent = Style::default()
        .fg(app.theme.accent(record.accent_color()))
        .add_modifier(Modifier::BOLD);
    let label = Style::default().add_modifier(Modifier::DIM);

    let observed = record.observed_at();
    let lines = vec![
        Line::from(vec![
            Span::styled(format!(" {} ", icon_glyph(record.icon_token())), accent),
            Span::styled(app.formatter.title(record.title()), accent),
        ]),
        Line::from(""),
        {
            let mut value = app.theme.styled_line(&app.formatter.styled(record.value()));
            value.spans.insert(0, Span::raw(" "));
            value
        },
        Line::from(""),
        Line::from(vec![
            Span::styled(" Observed  ", label),
            Span::raw(observed.format("%Y-%m-%d %H:%M UTC").to_string()),
            Span::styled(
                format!(" ({})", app.formatter.relative(observed, now)),
                app.theme.muted,
            ),
        ]),
        Line::from(vec![
            Span::styled(" Recorded  ", label),
            Span::raw(raw_value(record.value())),
        ]),
        Line::from(vec![
            Span::styled(" Kind      ", label),
            Span::raw(record.value().kind()),
        ]),
        Line::from(vec![
            Span::styled(" Icon      ", label),
            Span::raw(record.icon_token().to_string()),
        ]),
        Line::from(vec![
            Span::styled(" ID        ", label),
            Span::raw(record.id().to_string()),
        ]),
    ];

    let block = Block::default()
        .title(" Vital Detail ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, chunks[0]);

    let footer = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc to close ",
        Style::default().add_modifier(Modifier::DIM),
    )]));
    frame.render_widget(footer, chunks[1]);
}
