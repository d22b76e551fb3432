//! Measurement formatting and emphasis styling.
//!
//! Formatting is two passes:
//!
//! ```text
//! VitalValue ──format()──▶ AttributedText ──restyle()──▶ StyledText
//!                         (semantic spans)              (Emphasized / Secondary runs)
//! ```
//!
//! Both passes are pure functions of their input and the [`Locale`].
//!
//! ```
//! use vitals_tui::data::VitalValue;
//! use vitals_tui::format::{restyle, Emphasis, Formatter, Locale};
//!
//! let formatter = Formatter::new(Locale::EnUs);
//! let styled = restyle(&formatter.format(&VitalValue::percent(0.99)));
//! assert_eq!(styled.plain(), "99%");
//! assert_eq!(styled.text_with(Emphasis::Emphasized), "99");
//! ```

pub mod attributed;
pub mod locale;
pub mod number;
pub mod relative;

pub use attributed::{
    restyle, restyle_with, Attribute, AttributeSpan, AttributedText, Emphasis, MeasurementPart,
    NumberPart, NumberSymbol, RestyleRule, StyledRun, StyledText, VITAL_RULES,
};
pub use locale::Locale;

use chrono::{DateTime, Utc};

use crate::data::{DurationParts, TemperatureUsage, TitleKey, VitalValue};
use crate::units::TemperatureUnit;

/// Shown in place of counts, which have no unit-aware formatting.
pub const COUNT_PLACEHOLDER: &str = "Custom units not supported";

/// Fraction digits kept for percentages and measurements.
const MAX_FRACTION_DIGITS: usize = 2;

/// Formats vital values and labels for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Formatter {
    locale: Locale,
}

impl Formatter {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Format a value into attributed text.
    pub fn format(&self, value: &VitalValue) -> AttributedText {
        match value {
            VitalValue::Percent { ratio } => self.format_percent(*ratio),
            VitalValue::Count { amount, unit_label } => {
                tracing::trace!(amount, unit = %unit_label, "count values use the placeholder");
                AttributedText::plain(COUNT_PLACEHOLDER)
            }
            VitalValue::Duration { seconds } => self.format_duration(*seconds),
            VitalValue::Temperature {
                magnitude,
                unit,
                usage,
            } => self.format_temperature(*magnitude, *unit, *usage),
        }
    }

    /// Format and restyle in one step.
    pub fn styled(&self, value: &VitalValue) -> StyledText {
        restyle(&self.format(value))
    }

    /// Named relative time of `date` as seen from `now`.
    pub fn relative(&self, date: DateTime<Utc>, now: DateTime<Utc>) -> String {
        relative::relative(date, now, self.locale)
    }

    pub fn title(&self, key: TitleKey) -> &'static str {
        self.locale.title(key)
    }

    pub fn screen_title(&self) -> &'static str {
        self.locale.screen_title()
    }

    fn format_percent(&self, ratio: f64) -> AttributedText {
        let mut out = number::format_decimal(ratio * 100.0, MAX_FRACTION_DIGITS, self.locale);
        out.push_str(self.locale.percent_separator());
        out.push_tagged("%", Attribute::NumberSymbol(NumberSymbol::Percent));
        out
    }

    fn format_duration(&self, seconds: f64) -> AttributedText {
        let labels = self.locale.duration_labels();
        let parts = DurationParts::from_seconds(seconds);

        let mut fields: Vec<(u64, &str)> = [
            (parts.hours, labels.hours),
            (parts.minutes, labels.minutes),
            (parts.seconds, labels.seconds),
        ]
        .into_iter()
        .filter(|(amount, _)| *amount > 0)
        .collect();
        if parts.is_zero() {
            fields.push((0, labels.seconds));
        }

        let mut out = AttributedText::new();
        for (i, (amount, label)) in fields.into_iter().enumerate() {
            if i > 0 {
                out.push_str(labels.field_separator);
            }
            out.append_tagged(
                number::format_integer(amount, self.locale),
                Attribute::Measurement(MeasurementPart::Value),
            );
            out.push_str(labels.value_unit_separator);
            out.push_tagged(label, Attribute::Measurement(MeasurementPart::Unit));
        }
        out
    }

    fn format_temperature(
        &self,
        magnitude: f64,
        unit: TemperatureUnit,
        usage: TemperatureUsage,
    ) -> AttributedText {
        let (magnitude, unit) = match usage {
            TemperatureUsage::AsProvided => (magnitude, unit),
            TemperatureUsage::Locale => {
                let target = self.locale.preferred_temperature_unit();
                (unit.convert(magnitude, target), target)
            }
        };

        let mut out = AttributedText::new();
        out.append_tagged(
            number::format_decimal(magnitude, MAX_FRACTION_DIGITS, self.locale),
            Attribute::Measurement(MeasurementPart::Value),
        );
        out.push_tagged(unit.symbol(), Attribute::Measurement(MeasurementPart::Unit));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en() -> Formatter {
        Formatter::new(Locale::EnUs)
    }

    #[test]
    fn test_percent_emphasis_across_range() {
        for step in 0..=100 {
            let ratio = step as f64 / 100.0;
            let text = en().format(&VitalValue::percent(ratio));
            let styled = restyle(&text);

            let digits: String = text
                .substrings(Attribute::NumberPart(NumberPart::Integer))
                .concat();
            assert_eq!(styled.text_with(Emphasis::Emphasized), digits, "ratio {ratio}");
            assert_eq!(styled.runs().last().unwrap().text, "%");
            assert_eq!(styled.runs().last().unwrap().emphasis, Emphasis::Secondary);
        }
    }

    #[test]
    fn test_percent_sample() {
        let styled = en().styled(&VitalValue::percent(0.99));
        assert_eq!(styled.plain(), "99%");
        assert_eq!(styled.runs().len(), 2);
        assert_eq!(styled.runs()[0].emphasis, Emphasis::Emphasized);
    }

    #[test]
    fn test_percent_fraction_stays_secondary() {
        let styled = en().styled(&VitalValue::percent(0.995));
        assert_eq!(styled.plain(), "99.5%");
        assert_eq!(styled.text_with(Emphasis::Emphasized), "99");
        assert_eq!(styled.text_with(Emphasis::Secondary), ".5%");
    }

    #[test]
    fn test_percent_german_spacing() {
        let text = Formatter::new(Locale::DeDe).format(&VitalValue::percent(0.99));
        assert_eq!(text.as_str(), "99\u{a0}%");
    }

    #[test]
    fn test_count_is_always_placeholder() {
        for locale in Locale::ALL {
            let formatter = Formatter::new(locale);
            for (amount, unit) in [(61, "拍/分"), (0, ""), (-5, "steps"), (i64::MAX, "bpm")] {
                let text = formatter.format(&VitalValue::count(amount, unit));
                assert_eq!(text.as_str(), COUNT_PLACEHOLDER);
                assert!(text.spans().is_empty());
            }
        }
    }

    #[test]
    fn test_duration_sleep_sample() {
        let text = en().format(&VitalValue::duration(27_060.0));
        let values = text.substrings(Attribute::Measurement(MeasurementPart::Value));
        assert_eq!(values, vec!["7", "31"]);
        assert_eq!(text.as_str(), "7 hr, 31 min");

        let styled = restyle(&text);
        assert_eq!(styled.text_with(Emphasis::Emphasized), "731");
    }

    #[test]
    fn test_duration_decomposition_other_locales() {
        for locale in [Locale::JaJp, Locale::DeDe] {
            let text = Formatter::new(locale).format(&VitalValue::duration(27_060.0));
            assert_eq!(
                text.substrings(Attribute::Measurement(MeasurementPart::Value)),
                vec!["7", "31"]
            );
        }
        let ja = Formatter::new(Locale::JaJp).format(&VitalValue::duration(27_060.0));
        assert_eq!(ja.as_str(), "7時間31分");
    }

    #[test]
    fn test_duration_zero_and_seconds() {
        assert_eq!(en().format(&VitalValue::duration(0.0)).as_str(), "0 sec");
        assert_eq!(
            en().format(&VitalValue::duration(3_605.0)).as_str(),
            "1 hr, 5 sec"
        );
    }

    #[test]
    fn test_temperature_spans() {
        let value = VitalValue::temperature(36.4, TemperatureUnit::Celsius);
        let text = en().format(&value);
        assert_eq!(text.as_str(), "36.4°C");

        let styled = restyle(&text);
        assert_eq!(styled.text_with(Emphasis::Emphasized), "36.4");
        assert_eq!(styled.text_with(Emphasis::Secondary), "°C");
    }

    #[test]
    fn test_temperature_locale_usage() {
        let value = VitalValue::Temperature {
            magnitude: 36.4,
            unit: TemperatureUnit::Celsius,
            usage: TemperatureUsage::Locale,
        };
        assert_eq!(en().format(&value).as_str(), "97.52°F");
        assert_eq!(
            Formatter::new(Locale::DeDe).format(&value).as_str(),
            "36,4°C"
        );
    }

    #[test]
    fn test_labels() {
        let ja = Formatter::new(Locale::JaJp);
        assert_eq!(ja.screen_title(), "バイタルデータ");
        assert_eq!(ja.title(TitleKey::HeartRate), "心拍数");
        assert_eq!(en().title(TitleKey::Sleep), "Sleep");
    }
}
