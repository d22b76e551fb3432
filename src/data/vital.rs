//! The vital-sign record and its typed value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::units::TemperatureUnit;

/// Localized label key for a vital's title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleKey {
    OxygenLevel,
    HeartRate,
    Sleep,
    BodyTemperature,
}

impl TitleKey {
    /// Stable key string, used when no translation exists.
    pub fn as_str(&self) -> &'static str {
        match self {
            TitleKey::OxygenLevel => "oxygen_level",
            TitleKey::HeartRate => "heart_rate",
            TitleKey::Sleep => "sleep",
            TitleKey::BodyTemperature => "body_temperature",
        }
    }
}

/// Display color token for a vital's label and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentColor {
    Blue,
    Red,
    Green,
    Orange,
    Purple,
}

/// Whether a temperature is shown in the unit it was recorded in or in
/// the locale's preferred unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureUsage {
    #[default]
    AsProvided,
    Locale,
}

/// The measured value of a vital.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VitalValue {
    /// A ratio in `[0, 1]`.
    Percent { ratio: f64 },
    /// A count with a free-form unit label.
    Count { amount: i64, unit_label: String },
    /// An elapsed span in seconds.
    Duration { seconds: f64 },
    Temperature {
        magnitude: f64,
        unit: TemperatureUnit,
        #[serde(default)]
        usage: TemperatureUsage,
    },
}

impl VitalValue {
    pub fn percent(ratio: f64) -> Self {
        VitalValue::Percent { ratio }
    }

    pub fn count(amount: i64, unit_label: impl Into<String>) -> Self {
        VitalValue::Count {
            amount,
            unit_label: unit_label.into(),
        }
    }

    pub fn duration(seconds: f64) -> Self {
        VitalValue::Duration { seconds }
    }

    /// A temperature shown in the unit it was recorded in.
    pub fn temperature(magnitude: f64, unit: TemperatureUnit) -> Self {
        VitalValue::Temperature {
            magnitude,
            unit,
            usage: TemperatureUsage::AsProvided,
        }
    }

    /// Short variant name, matching the serialized `kind` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            VitalValue::Percent { .. } => "percent",
            VitalValue::Count { .. } => "count",
            VitalValue::Duration { .. } => "duration",
            VitalValue::Temperature { .. } => "temperature",
        }
    }
}

/// A single observed health metric with display metadata.
///
/// Records are immutable once built: all fields are private and only
/// exposed through accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct VitalRecord {
    id: Uuid,
    title: TitleKey,
    value: VitalValue,
    observed_at: DateTime<Utc>,
    icon_token: String,
    accent_color: AccentColor,
}

impl VitalRecord {
    /// Build a record, assigning it a fresh identity.
    pub fn new(
        title: TitleKey,
        value: VitalValue,
        observed_at: DateTime<Utc>,
        icon_token: impl Into<String>,
        accent_color: AccentColor,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            value,
            observed_at,
            icon_token: icon_token.into(),
            accent_color,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> TitleKey {
        self.title
    }

    pub fn value(&self) -> &VitalValue {
        &self.value
    }

    pub fn observed_at(&self) -> DateTime<Utc> {
        self.observed_at
    }

    pub fn icon_token(&self) -> &str {
        &self.icon_token
    }

    pub fn accent_color(&self) -> AccentColor {
        self.accent_color
    }
}
