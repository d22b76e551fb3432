//! Terminal rendering using ratatui.
//!
//! [`draw`] lays out the title bar, the vitals in list or card layout, the
//! status bar and any open overlay.

pub mod cards;
pub mod common;
pub mod detail;
pub mod list;
pub mod theme;

pub use theme::{Theme, ThemeChoice};

use chrono::{DateTime, Utc};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, ResolvedLayout};

/// Minimum terminal size for usable display.
pub const MIN_WIDTH: u16 = 24;
pub const MIN_HEIGHT: u16 = 8;

/// Draw one frame of the vitals screen.
pub fn draw(frame: &mut Frame, app: &mut App, now: DateTime<Utc>) {
    let area = frame.area();

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = format!(
            "Terminal too small: {}x{}\nMinimum: {}x{}",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );
        let paragraph = Paragraph::new(msg)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow));
        let top = area.height.saturating_sub(2) / 2;
        let centered = Rect::new(0, top, area.width, area.height.min(2));
        frame.render_widget(paragraph, centered);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(1), // Title bar
        Constraint::Min(4),    // Vitals
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    app.resolved_layout = app.layout.resolve(area);

    common::render_header(frame, app, chunks[0]);

    match app.resolved_layout {
        ResolvedLayout::List => list::render(frame, app, chunks[1], now),
        ResolvedLayout::Cards => cards::render(frame, app, chunks[1], now),
    }

    common::render_status_bar(frame, app, chunks[2]);

    if app.show_detail_overlay {
        detail::render_overlay(frame, app, area, now);
    }

    if app.show_help {
        common::render_help(frame, app, area);
    }
}

/// Item under a terminal row in the last drawn layout.
pub fn index_at_row(app: &App, row: u16) -> Option<usize> {
    let index = match app.resolved_layout {
        ResolvedLayout::List => list::index_at_row(app, row),
        ResolvedLayout::Cards => cards::index_at_row(app, row),
    }?;
    (index < app.catalog.len()).then_some(index)
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::text::Span;
    use ratatui::Terminal;

    use super::*;
    use crate::app::LayoutMode;
    use crate::data::VitalsCatalog;
    use crate::format::Locale;

    // Wide glyphs occupy two cells; the trailing cell is skipped.
    fn buffer_text(buffer: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buffer.area.height {
            let mut skip = 0;
            for x in 0..buffer.area.width {
                if skip > 0 {
                    skip -= 1;
                    continue;
                }
                let symbol = buffer[(x, y)].symbol();
                out.push_str(symbol);
                skip = Span::raw(symbol).width().saturating_sub(1);
            }
            out.push('\n');
        }
        out
    }

    fn find_cells(buffer: &Buffer, needle: &str) -> Option<(u16, u16)> {
        let needle: Vec<String> = needle.chars().map(String::from).collect();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width.saturating_sub(needle.len() as u16) {
                let hit = needle
                    .iter()
                    .enumerate()
                    .all(|(i, ch)| buffer[(x + i as u16, y)].symbol() == ch.as_str());
                if hit {
                    return Some((x, y));
                }
            }
        }
        None
    }

    fn render(width: u16, height: u16, layout: LayoutMode, locale: Locale) -> (App, String) {
        let now = Utc::now();
        let mut app = App::new(VitalsCatalog::sample(now), locale, layout, Theme::dark());
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, &mut app, now)).unwrap();
        let text = buffer_text(terminal.backend().buffer());
        (app, text)
    }

    #[test]
    fn test_cards_layout_renders_values() {
        let (app, text) = render(80, 30, LayoutMode::Auto, Locale::EnUs);
        assert_eq!(app.resolved_layout, ResolvedLayout::Cards);
        assert!(text.contains("Vitals"));
        assert!(text.contains("Blood Oxygen"));
        assert!(text.contains("99%"));
        assert!(text.contains("5 minutes ago ›"));
        assert!(text.contains("7 hr, 31 min"));
        assert!(text.contains("36.4°C"));
    }

    #[test]
    fn test_list_layout_on_small_terminal() {
        let (app, text) = render(50, 20, LayoutMode::Auto, Locale::EnUs);
        assert_eq!(app.resolved_layout, ResolvedLayout::List);
        assert!(text.contains("Heart Rate"));
        assert!(!text.contains('›'));
    }

    #[test]
    fn test_emphasis_reaches_the_buffer() {
        let now = Utc::now();
        let mut app = App::new(
            VitalsCatalog::sample(now),
            Locale::EnUs,
            LayoutMode::List,
            Theme::dark(),
        );
        let mut terminal = Terminal::new(TestBackend::new(50, 20)).unwrap();
        terminal.draw(|frame| draw(frame, &mut app, now)).unwrap();

        let buffer = terminal.backend().buffer();
        let (col, row) = find_cells(buffer, "99%").unwrap();

        let digit = &buffer[(col, row)];
        let percent = &buffer[(col + 2, row)];
        assert_eq!(digit.fg, app.theme.emphasized.fg.unwrap());
        assert_eq!(percent.fg, app.theme.secondary.fg.unwrap());
    }

    #[test]
    fn test_japanese_labels() {
        let (_, text) = render(80, 30, LayoutMode::Cards, Locale::JaJp);
        assert!(text.contains("バイタルデータ"));
        assert!(text.contains("7時間31分"));
    }

    #[test]
    fn test_detail_overlay() {
        let now = Utc::now();
        let mut app = App::new(
            VitalsCatalog::sample(now),
            Locale::EnUs,
            LayoutMode::Cards,
            Theme::dark(),
        );
        app.select_next();
        app.enter_detail();

        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| draw(frame, &mut app, now)).unwrap();
        let text = buffer_text(terminal.backend().buffer());

        assert!(text.contains("Vital Detail"));
        assert!(text.contains("61 拍/分"));
    }

    #[test]
    fn test_too_small() {
        let (_, text) = render(30, 6, LayoutMode::Auto, Locale::EnUs);
        assert!(text.contains("too small"));
    }

    #[test]
    fn test_card_hit_testing() {
        let (app, _) = render(80, 30, LayoutMode::Cards, Locale::EnUs);
        let top = app.content_top;
        assert_eq!(index_at_row(&app, top), Some(0));
        assert_eq!(index_at_row(&app, top + cards::CARD_STRIDE), Some(1));
        assert_eq!(index_at_row(&app, top + 4), None);
        assert_eq!(index_at_row(&app, top + 10 * cards::CARD_STRIDE), None);
    }
}
