//! # vitals-tui
//!
//! A terminal viewer for a patient's latest health measurements: blood
//! oxygen, heart rate, sleep and body temperature.
//!
//! Each measurement is formatted for the active locale into text carrying
//! semantic spans (integer digits, fraction, measurement value, unit), then
//! restyled into runs of two emphasis levels so the number stands out and
//! the unit recedes.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                          Application                             │
//! │  ┌─────────┐    ┌──────────┐    ┌──────────┐    ┌──────────┐     │
//! │  │  data   │───▶│  format  │───▶│    ui    │───▶│ Terminal │     │
//! │  │(catalog)│    │(attribute│    │(list or  │    │          │     │
//! │  └─────────┘    │ restyle) │    │ cards)   │    └──────────┘     │
//! │                 └────┬─────┘    └────▲─────┘                     │
//! │                      │               │                           │
//! │                 ┌────▼────┐     ┌────┴────┐                      │
//! │                 │  units  │     │   app   │◀── events            │
//! │                 └─────────┘     │ (state) │                      │
//! │                                 └─────────┘                      │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`data`]**: [`VitalRecord`], the tagged [`VitalValue`] and the
//!   immutable [`VitalsCatalog`]
//! - **[`format`]**: locale-aware [`Formatter`], [`AttributedText`] and the
//!   [`restyle`] rule table
//! - **[`units`]**: linear and reciprocal unit conversion
//! - **[`app`]** / **[`events`]**: selection, overlays, layout and locale switching
//! - **[`ui`]**: ratatui rendering with adaptive list/card layout and themes
//! - **[`settings`]**: layered file and environment configuration
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! vitals
//! vitals --locale ja-JP --layout cards
//! vitals --export vitals.json
//! ```
//!
//! ### As a library
//!
//! ```
//! use chrono::Utc;
//! use vitals_tui::{Formatter, Locale, VitalsCatalog};
//!
//! let catalog = VitalsCatalog::sample(Utc::now());
//! let formatter = Formatter::new(Locale::EnUs);
//!
//! let heart_rate = catalog.get(1).unwrap();
//! assert_eq!(formatter.title(heart_rate.title()), "Heart Rate");
//! ```

pub mod app;
pub mod data;
pub mod events;
pub mod format;
pub mod settings;
pub mod ui;
pub mod units;

// Re-export main types for convenience
pub use app::{App, LayoutMode, ResolvedLayout};
pub use data::{
    AccentColor, DurationParts, TemperatureUsage, TitleKey, VitalRecord, VitalValue, VitalsCatalog,
};
pub use format::{restyle, AttributedText, Emphasis, Formatter, Locale, StyledText};
pub use settings::{LogLevel, Settings};
pub use units::{
    Converter, LinearConverter, ReciprocalConverter, SpeedUnit, TemperatureUnit, UnitConverter,
    UnitError,
};
