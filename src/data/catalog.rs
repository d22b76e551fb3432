//! The fixed, ordered set of vitals shown on screen.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use super::vital::{AccentColor, TitleKey, VitalRecord, VitalValue};
use crate::units::TemperatureUnit;

/// An immutable, ordered sequence of vital records.
///
/// Cloning is cheap and shares the underlying records, so the catalog can
/// be handed to any number of readers without synchronization.
#[derive(Debug, Clone)]
pub struct VitalsCatalog {
    records: Arc<[VitalRecord]>,
}

impl VitalsCatalog {
    /// Build a catalog from records, keeping their order.
    pub fn new(records: Vec<VitalRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// The sample vitals, with observation times relative to `now`.
    pub fn sample(now: DateTime<Utc>) -> Self {
        Self::new(vec![
            VitalRecord::new(
                TitleKey::OxygenLevel,
                VitalValue::percent(0.99),
                now - Duration::seconds(300),
                "o.circle.fill",
                AccentColor::Blue,
            ),
            VitalRecord::new(
                TitleKey::HeartRate,
                VitalValue::count(61, "拍/分"),
                now - Duration::seconds(5_400),
                "heart.fill",
                AccentColor::Red,
            ),
            VitalRecord::new(
                TitleKey::Sleep,
                VitalValue::duration(451.0 * 60.0),
                now - Duration::seconds(87_000),
                "bed.double.fill",
                AccentColor::Green,
            ),
            VitalRecord::new(
                TitleKey::BodyTemperature,
                VitalValue::temperature(36.4, TemperatureUnit::Celsius),
                now - Duration::seconds(172_800),
                "thermometer",
                AccentColor::Red,
            ),
        ])
    }

    pub fn records(&self) -> &[VitalRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&VitalRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VitalRecord> {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_order_and_variants() {
        let now = Utc::now();
        let catalog = VitalsCatalog::sample(now);
        assert_eq!(catalog.len(), 4);

        let titles: Vec<TitleKey> = catalog.iter().map(|r| r.title()).collect();
        assert_eq!(
            titles,
            vec![
                TitleKey::OxygenLevel,
                TitleKey::HeartRate,
                TitleKey::Sleep,
                TitleKey::BodyTemperature
            ]
        );

        assert!(matches!(catalog.records()[0].value(), VitalValue::Percent { .. }));
        assert!(matches!(catalog.records()[1].value(), VitalValue::Count { .. }));
        assert!(matches!(catalog.records()[2].value(), VitalValue::Duration { .. }));
        assert!(matches!(catalog.records()[3].value(), VitalValue::Temperature { .. }));
    }

    #[test]
    fn test_sample_observations_are_in_the_past() {
        let now = Utc::now();
        let catalog = VitalsCatalog::sample(now);
        assert!(catalog.iter().all(|r| r.observed_at() < now));
        assert_eq!(
            (now - catalog.records()[2].observed_at()).num_seconds(),
            87_000
        );
    }

    #[test]
    fn test_clones_share_records() {
        let catalog = VitalsCatalog::sample(Utc::now());
        let other = catalog.clone();
        assert_eq!(catalog.records()[0].id(), other.records()[0].id());
        assert!(catalog.get(4).is_none());
    }
}
