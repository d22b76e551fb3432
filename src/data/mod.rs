//! Data models for the vitals screen.
//!
//! ## Submodules
//!
//! - [`catalog`]: The immutable, ordered [`VitalsCatalog`] the screen renders
//! - [`duration`]: Duration parsing for CLI flags and hour/minute/second breakdown
//! - [`vital`]: The [`VitalRecord`] and its tagged [`VitalValue`]
//!
//! ## Data Flow
//!
//! ```text
//! VitalsCatalog::sample(now)
//!        │
//!        ▼
//! VitalRecord ──▶ Formatter::format(value) ──▶ restyle() ──▶ StyledText
//!        │
//!        └──▶ Formatter::relative(observed_at, now)
//! ```

pub mod catalog;
pub mod duration;
pub mod vital;

pub use catalog::VitalsCatalog;
pub use duration::DurationParts;
pub use vital::{AccentColor, TemperatureUsage, TitleKey, VitalRecord, VitalValue};
