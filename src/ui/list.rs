//! Compact list layout.
//!
//! Plain rows inside a single bordered list, used on small terminals.

use chrono::{DateTime, Utc};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Text},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use super::common::record_lines;
use crate::app::{App, ResolvedLayout};

/// Rows per item: label, value and a spacer.
pub const ITEM_HEIGHT: u16 = 3;

const HIGHLIGHT_SYMBOL: &str = "▶ ";

/// Render the vitals as a list.
pub fn render(frame: &mut Frame, app: &mut App, area: Rect, now: DateTime<Utc>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let inner = block.inner(area);
    let row_width = inner
        .width
        .saturating_sub(HIGHLIGHT_SYMBOL.chars().count() as u16);

    let items: Vec<ListItem> = app
        .catalog
        .iter()
        .map(|record| {
            let mut lines = record_lines(app, record, now, ResolvedLayout::List, row_width);
            lines.push(Line::from(""));
            ListItem::new(Text::from(lines))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(app.theme.selected)
        .highlight_symbol(HIGHLIGHT_SYMBOL);

    let mut state = ListState::default();
    if !app.catalog.is_empty() {
        state.select(Some(app.selected_index));
    }

    frame.render_stateful_widget(list, area, &mut state);

    app.scroll_offset = state.offset();
    app.content_top = inner.y;
}

/// Map a terminal row to an item index in the last drawn list.
pub fn index_at_row(app: &App, row: u16) -> Option<usize> {
    let relative = row.checked_sub(app.content_top)?;
    Some(app.scroll_offset + usize::from(relative / ITEM_HEIGHT))
}
