//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use clap::ValueEnum;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::block::BorderType;
use serde::Deserialize;

use crate::data::AccentColor;
use crate::format::{Emphasis, StyledText};

/// Which theme to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    /// Pick from the terminal's background luminance.
    #[default]
    Auto,
    Dark,
    Light,
}

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for highlights and active elements.
    pub highlight: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for the screen title.
    pub title: Style,
    /// Style for the figure of a vital value.
    pub emphasized: Style,
    /// Style for units, symbols and labels around a figure.
    pub secondary: Style,
    /// Style for timestamps and other supporting text.
    pub muted: Style,
    /// Style for the selected row in list layout.
    pub selected: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            border: Color::Gray,
            title: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            emphasized: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            secondary: Style::default().fg(Color::Gray),
            muted: Style::default().fg(Color::DarkGray),
            selected: Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            border: Color::DarkGray,
            title: Style::default().fg(Color::Black).add_modifier(Modifier::BOLD),
            emphasized: Style::default().fg(Color::Black).add_modifier(Modifier::BOLD),
            secondary: Style::default().fg(Color::DarkGray),
            muted: Style::default().fg(Color::Gray),
            selected: Style::default().bg(Color::LightBlue).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn from_choice(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Auto => Self::auto_detect(),
            ThemeChoice::Dark => Self::dark(),
            ThemeChoice::Light => Self::light(),
        }
    }

    /// Terminal color for a vital's accent token.
    pub fn accent(&self, color: AccentColor) -> Color {
        match color {
            AccentColor::Blue => Color::Blue,
            AccentColor::Red => Color::Red,
            AccentColor::Green => Color::Green,
            AccentColor::Orange => Color::LightRed,
            AccentColor::Purple => Color::Magenta,
        }
    }

    pub fn emphasis_style(&self, emphasis: Emphasis) -> Style {
        match emphasis {
            Emphasis::Emphasized => self.emphasized,
            Emphasis::Secondary => self.secondary,
        }
    }

    /// Render styled text as a single line of spans.
    pub fn styled_line(&self, text: &StyledText) -> Line<'static> {
        let spans: Vec<Span<'static>> = text
            .runs()
            .iter()
            .map(|run| Span::styled(run.text.clone(), self.emphasis_style(run.emphasis)))
            .collect();
        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::VitalValue;
    use crate::format::{Formatter, Locale};

    #[test]
    fn test_styled_line_keeps_runs() {
        let theme = Theme::dark();
        let styled = Formatter::new(Locale::EnUs).styled(&VitalValue::percent(0.99));
        let line = theme.styled_line(&styled);

        assert_eq!(line.spans.len(), 2);
        assert_eq!(line.spans[0].content, "99");
        assert_eq!(line.spans[0].style, theme.emphasized);
        assert_eq!(line.spans[1].content, "%");
        assert_eq!(line.spans[1].style, theme.secondary);
    }
}
