//! Application state and navigation logic.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use ratatui::layout::Rect;
use serde::Deserialize;

use crate::data::{VitalRecord, VitalsCatalog};
use crate::format::{Formatter, Locale};
use crate::ui::Theme;

/// Below this width the screen switches to the compact list layout.
pub const COMPACT_WIDTH: u16 = 60;
/// Below this height the screen switches to the compact list layout.
pub const COMPACT_HEIGHT: u16 = 16;

/// How long a status message stays visible.
const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(3);

/// Requested layout for the vitals list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// List on small terminals, cards otherwise.
    #[default]
    Auto,
    List,
    Cards,
}

/// The layout actually drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvedLayout {
    /// Plain rows, no chevrons. Used on constrained surfaces.
    List,
    /// Bordered cards with a disclosure chevron.
    #[default]
    Cards,
}

impl LayoutMode {
    /// Pick the concrete layout for a drawing area.
    pub fn resolve(self, area: Rect) -> ResolvedLayout {
        match self {
            LayoutMode::List => ResolvedLayout::List,
            LayoutMode::Cards => ResolvedLayout::Cards,
            LayoutMode::Auto => {
                if area.width < COMPACT_WIDTH || area.height < COMPACT_HEIGHT {
                    ResolvedLayout::List
                } else {
                    ResolvedLayout::Cards
                }
            }
        }
    }

    /// Cycle Auto → List → Cards.
    pub fn next(self) -> Self {
        match self {
            LayoutMode::Auto => LayoutMode::List,
            LayoutMode::List => LayoutMode::Cards,
            LayoutMode::Cards => LayoutMode::Auto,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LayoutMode::Auto => "auto",
            LayoutMode::List => "list",
            LayoutMode::Cards => "cards",
        }
    }
}

impl ResolvedLayout {
    pub fn label(&self) -> &'static str {
        match self {
            ResolvedLayout::List => "list",
            ResolvedLayout::Cards => "cards",
        }
    }
}

/// Main application state.
pub struct App {
    pub running: bool,
    pub show_help: bool,
    pub show_detail_overlay: bool,

    // Data
    pub catalog: VitalsCatalog,
    pub formatter: Formatter,

    // Layout
    pub layout: LayoutMode,
    /// Layout used by the last draw, for mouse hit-testing.
    pub resolved_layout: ResolvedLayout,
    /// First visible item in the last draw.
    pub scroll_offset: usize,
    /// Top row of the content area in the last draw.
    pub content_top: u16,

    // Navigation state
    pub selected_index: usize,

    // UI
    pub theme: Theme,

    // Status message (temporary feedback)
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Create a new App over a catalog.
    pub fn new(catalog: VitalsCatalog, locale: Locale, layout: LayoutMode, theme: Theme) -> Self {
        Self {
            running: true,
            show_help: false,
            show_detail_overlay: false,
            catalog,
            formatter: Formatter::new(locale),
            layout,
            resolved_layout: ResolvedLayout::default(),
            scroll_offset: 0,
            content_top: 0,
            selected_index: 0,
            theme,
            status_message: None,
        }
    }

    pub fn locale(&self) -> Locale {
        self.formatter.locale()
    }

    /// The currently selected record, if the catalog is not empty.
    pub fn selected_record(&self) -> Option<&VitalRecord> {
        self.catalog.get(self.selected_index)
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired.
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < STATUS_MESSAGE_TTL {
                return Some(msg);
            }
        }
        None
    }

    /// Move selection down by one item.
    pub fn select_next(&mut self) {
        self.select_next_n(1);
    }

    /// Move selection up by one item.
    pub fn select_prev(&mut self) {
        self.select_prev_n(1);
    }

    /// Move selection down by n items.
    pub fn select_next_n(&mut self, n: usize) {
        let max = self.catalog.len().saturating_sub(1);
        self.selected_index = (self.selected_index + n).min(max);
    }

    /// Move selection up by n items.
    pub fn select_prev_n(&mut self, n: usize) {
        self.selected_index = self.selected_index.saturating_sub(n);
    }

    /// Jump to the first item in the list.
    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    /// Jump to the last item in the list.
    pub fn select_last(&mut self) {
        self.selected_index = self.catalog.len().saturating_sub(1);
    }

    /// Select an item by position, ignoring out-of-range indices.
    pub fn select_index(&mut self, index: usize) {
        if index < self.catalog.len() {
            self.selected_index = index;
        }
    }

    /// Open the detail overlay for the selected record.
    pub fn enter_detail(&mut self) {
        if self.selected_record().is_some() {
            tracing::debug!(index = self.selected_index, "opening detail");
            self.show_detail_overlay = true;
        }
    }

    /// Navigate back: close the help or detail overlay if one is open.
    pub fn go_back(&mut self) {
        if self.show_help {
            self.show_help = false;
        } else if self.show_detail_overlay {
            self.show_detail_overlay = false;
        }
    }

    /// Close the detail overlay if open.
    pub fn close_overlay(&mut self) {
        self.show_detail_overlay = false;
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Cycle the requested layout.
    pub fn cycle_layout(&mut self) {
        self.layout = self.layout.next();
        tracing::info!(layout = self.layout.label(), "layout changed");
        self.set_status_message(format!("Layout: {}", self.layout.label()));
    }

    /// Switch to the next supported locale.
    pub fn cycle_locale(&mut self) {
        let locale = self.locale().next();
        self.formatter = Formatter::new(locale);
        tracing::info!(%locale, "locale changed");
        self.set_status_message(format!("Locale: {}", locale));
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Build the JSON export of the catalog as rendered at `now`.
    pub fn export_value(&self, now: DateTime<Utc>) -> serde_json::Value {
        let vitals: Vec<serde_json::Value> = self
            .catalog
            .iter()
            .map(|record| {
                serde_json::json!({
                    "id": record.id(),
                    "title": self.formatter.title(record.title()),
                    "value": record.value(),
                    "observed_at": record.observed_at(),
                    "relative": self.formatter.relative(record.observed_at(), now),
                    "icon": record.icon_token(),
                    "accent": record.accent_color(),
                    "display": self.formatter.styled(record.value()),
                })
            })
            .collect();

        serde_json::json!({
            "title": self.formatter.screen_title(),
            "locale": self.locale().tag(),
            "vitals": vitals,
        })
    }

    /// Export the rendered catalog to a JSON file.
    pub fn export_state(&self, path: &Path, now: DateTime<Utc>) -> Result<()> {
        if self.catalog.is_empty() {
            bail!("No vitals to export");
        }

        let json = serde_json::to_string_pretty(&self.export_value(now))?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write export to {}", path.display()))?;

        tracing::info!(path = %path.display(), records = self.catalog.len(), "exported vitals");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(
            VitalsCatalog::sample(Utc::now()),
            Locale::EnUs,
            LayoutMode::Auto,
            Theme::dark(),
        )
    }

    #[test]
    fn test_auto_layout_resolution() {
        let auto = LayoutMode::Auto;
        assert_eq!(auto.resolve(Rect::new(0, 0, 40, 30)), ResolvedLayout::List);
        assert_eq!(auto.resolve(Rect::new(0, 0, 100, 10)), ResolvedLayout::List);
        assert_eq!(auto.resolve(Rect::new(0, 0, 100, 30)), ResolvedLayout::Cards);
        assert_eq!(
            LayoutMode::Cards.resolve(Rect::new(0, 0, 20, 5)),
            ResolvedLayout::Cards
        );
        assert_eq!(
            LayoutMode::List.resolve(Rect::new(0, 0, 200, 50)),
            ResolvedLayout::List
        );
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut app = app();
        app.select_prev();
        assert_eq!(app.selected_index, 0);

        app.select_next_n(10);
        assert_eq!(app.selected_index, 3);

        app.select_first();
        app.select_index(7);
        assert_eq!(app.selected_index, 0);

        app.select_last();
        assert_eq!(app.selected_index, 3);
    }

    #[test]
    fn test_detail_and_back() {
        let mut app = app();
        app.enter_detail();
        assert!(app.show_detail_overlay);

        app.toggle_help();
        app.go_back();
        assert!(!app.show_help);
        assert!(app.show_detail_overlay);

        app.go_back();
        assert!(!app.show_detail_overlay);
    }

    #[test]
    fn test_detail_requires_records() {
        let mut app = App::new(
            VitalsCatalog::new(Vec::new()),
            Locale::EnUs,
            LayoutMode::Auto,
            Theme::dark(),
        );
        app.enter_detail();
        assert!(!app.show_detail_overlay);
        app.select_next();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_cycle_locale_and_layout() {
        let mut app = app();
        app.cycle_locale();
        assert_eq!(app.locale(), Locale::JaJp);
        assert_eq!(app.get_status_message(), Some("Locale: ja-JP"));

        app.cycle_layout();
        assert_eq!(app.layout, LayoutMode::List);
    }

    #[test]
    fn test_export_value_shape() {
        let now = Utc::now();
        let app = App::new(
            VitalsCatalog::sample(now),
            Locale::EnUs,
            LayoutMode::Auto,
            Theme::dark(),
        );
        let value = app.export_value(now);

        assert_eq!(value["title"], "Vitals");
        assert_eq!(value["locale"], "en-US");
        let vitals = value["vitals"].as_array().unwrap();
        assert_eq!(vitals.len(), 4);
        assert_eq!(vitals[0]["relative"], "5 minutes ago");
        assert_eq!(vitals[0]["value"]["kind"], "percent");
        assert_eq!(vitals[0]["display"][0]["text"], "99");
        assert_eq!(vitals[0]["display"][0]["emphasis"], "emphasized");
        assert_eq!(vitals[1]["value"]["unit_label"], "拍/分");
    }

    #[test]
    fn test_export_state_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vitals.json");
        app().export_state(&path, Utc::now()).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["vitals"].as_array().unwrap().len(), 4);
    }
}
