//! Card layout.
//!
//! Each vital sits in its own rounded card with a disclosure chevron; the
//! column of cards scrolls to keep the selection visible.

use chrono::{DateTime, Utc};
use ratatui::{
    layout::{Margin, Rect},
    style::Style,
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use super::common::record_lines;
use crate::app::{App, ResolvedLayout};

/// Border, two content rows, border.
const CARD_HEIGHT: u16 = 4;
/// Vertical gap between cards.
const CARD_SPACING: u16 = 1;
/// Rows one card occupies including its gap.
pub const CARD_STRIDE: u16 = CARD_HEIGHT + CARD_SPACING;

/// First card to draw so that `selected` is visible in `per_page` slots.
pub fn scroll_offset(selected: usize, per_page: usize, previous: usize) -> usize {
    let per_page = per_page.max(1);
    if selected < previous {
        selected
    } else if selected >= previous + per_page {
        selected + 1 - per_page
    } else {
        previous
    }
}

/// Render the vitals as a scrolling column of cards.
pub fn render(frame: &mut Frame, app: &mut App, area: Rect, now: DateTime<Utc>) {
    let area = area.inner(Margin::new(1, 0));
    let per_page = usize::from((area.height + CARD_SPACING) / CARD_STRIDE).max(1);
    let offset = scroll_offset(app.selected_index, per_page, app.scroll_offset);

    let mut y = area.y;
    for (index, record) in app.catalog.iter().enumerate().skip(offset) {
        if y + CARD_HEIGHT > area.bottom() {
            break;
        }

        let selected = index == app.selected_index;
        let border = if selected {
            app.theme.highlight
        } else {
            app.theme.border
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(border))
            .padding(Padding::horizontal(1));

        let card_area = Rect::new(area.x, y, area.width, CARD_HEIGHT);
        let inner_width = block.inner(card_area).width;
        let lines = record_lines(app, record, now, ResolvedLayout::Cards, inner_width);

        frame.render_widget(Paragraph::new(lines).block(block), card_area);
        y += CARD_STRIDE;
    }

    app.scroll_offset = offset;
    app.content_top = area.y;
}

/// Map a terminal row to a card index in the last drawn column.
///
/// Rows in the gap between cards map to no card.
pub fn index_at_row(app: &App, row: u16) -> Option<usize> {
    let relative = row.checked_sub(app.content_top)?;
    if relative % CARD_STRIDE >= CARD_HEIGHT {
        return None;
    }
    Some(app.scroll_offset + usize::from(relative / CARD_STRIDE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_keeps_selection_visible() {
        assert_eq!(scroll_offset(0, 3, 0), 0);
        assert_eq!(scroll_offset(2, 3, 0), 0);
        assert_eq!(scroll_offset(3, 3, 0), 1);
        assert_eq!(scroll_offset(1, 3, 1), 1);
        assert_eq!(scroll_offset(0, 3, 1), 0);
        assert_eq!(scroll_offset(5, 0, 0), 5);
    }
}
