//! Common UI components shared across layouts.
//!
//! This module contains the title bar, status bar, help overlay and the
//! two-line vital row both layouts are built from.

use chrono::{DateTime, Utc};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, ResolvedLayout};
use crate::data::VitalRecord;

/// Disclosure indicator shown on cards.
const CHEVRON: &str = "›";

/// Terminal glyph for a symbolic icon token.
pub fn icon_glyph(token: &str) -> &'static str {
    match token {
        "o.circle.fill" => "Ⓞ",
        "heart.fill" => "♥",
        "bed.double.fill" => "☾",
        "thermometer" => "⊺",
        _ => "●",
    }
}

/// Render the title bar with the screen title and current settings.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(vec![
        Span::styled(format!(" {} ", app.formatter.screen_title()), app.theme.title),
        Span::raw("│ "),
        Span::styled(
            format!("{}", app.catalog.len()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" vitals │ "),
        Span::raw(format!(
            "{} ({}) │ {}",
            app.resolved_layout.label(),
            app.layout.label(),
            app.locale()
        )),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the status bar at the bottom.
///
/// Shows the selection position and available controls, or a temporary
/// status message when one is active.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    let position = if app.catalog.is_empty() {
        "No vitals".to_string()
    } else {
        format!("{}/{}", app.selected_index + 1, app.catalog.len())
    };

    let controls = if app.show_detail_overlay {
        "↑↓:select Esc:close ?:help q:quit"
    } else {
        "↑↓:select Enter:detail L:layout i:locale e:export ?:help q:quit"
    };

    let paragraph = Paragraph::new(format!(" {} | {}", position, controls))
        .style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(paragraph, area);
}

/// Build the two lines describing a record: label row and value row.
///
/// The label keeps priority over the relative time, which is truncated
/// first when `width` is too small for both.
pub fn record_lines(
    app: &App,
    record: &VitalRecord,
    now: DateTime<Utc>,
    layout: ResolvedLayout,
    width: u16,
) -> Vec<Line<'static>> {
    let accent = Style::default()
        .fg(app.theme.accent(record.accent_color()))
        .add_modifier(Modifier::BOLD);

    let label = Line::from(vec![
        Span::styled(icon_glyph(record.icon_token()), accent),
        Span::raw(" "),
        Span::styled(app.formatter.title(record.title()), accent),
    ]);

    let mut trailing = format!(" {}", app.formatter.relative(record.observed_at(), now));
    if layout == ResolvedLayout::Cards {
        trailing.push(' ');
        trailing.push_str(CHEVRON);
    }

    let available = usize::from(width).saturating_sub(label.width());
    let trailing = truncate_to_width(&trailing, available);
    let gap = available.saturating_sub(Span::raw(trailing.as_str()).width());

    let mut spans = label.spans;
    spans.push(Span::raw(" ".repeat(gap)));
    spans.push(Span::styled(trailing, app.theme.muted));

    vec![
        Line::from(spans),
        app.theme.styled_line(&app.formatter.styled(record.value())),
    ]
}

/// Cut `text` to at most `max` display columns, ending in "…" when cut.
pub fn truncate_to_width(text: &str, max: usize) -> String {
    if Span::raw(text).width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    for ch in text.chars() {
        out.push(ch);
        if Span::raw(out.as_str()).width() + 1 > max {
            out.pop();
            break;
        }
    }
    out.push('…');
    out
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the current view.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.title)]),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Navigation",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  ↑/↓ j/k     Move selection"),
        Line::from("  PgUp/PgDn   Jump 5 items"),
        Line::from("  Home/End    Jump to first/last"),
        Line::from("  Enter       View detail"),
        Line::from("  Esc         Go back"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Display",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  L         Cycle layout (auto/list/cards)"),
        Line::from("  i         Cycle locale"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " General",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  e         Export to JSON"),
        Line::from("  q         Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 46u16.min(area.width.saturating_sub(4));
    let help_height = 21u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    frame.render_widget(Clear, help_area);
    frame.render_widget(paragraph, help_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("5 minutes ago", 20), "5 minutes ago");
        assert_eq!(truncate_to_width("5 minutes ago", 6), "5 min…");
        assert_eq!(truncate_to_width("5 minutes ago", 0), "");
        assert_eq!(truncate_to_width("バイタル", 5), "バイ…");
    }

    #[test]
    fn test_unknown_icon_falls_back() {
        assert_eq!(icon_glyph("heart.fill"), "♥");
        assert_eq!(icon_glyph("sparkles"), "●");
    }
}
