//! Locale data consumed by the formatter.
//!
//! Each supported locale carries its number symbols, percent pattern,
//! duration unit labels, relative-time phrases and the translated labels
//! for the catalog's title keys.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::data::TitleKey;
use crate::units::TemperatureUnit;

/// A supported formatting locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[value(name = "en-US")]
    #[serde(rename = "en-US")]
    EnUs,
    #[value(name = "ja-JP")]
    #[serde(rename = "ja-JP")]
    JaJp,
    #[value(name = "de-DE")]
    #[serde(rename = "de-DE")]
    DeDe,
}

/// Calendar unit used by relative time phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

/// Labels for the duration fields, abbreviated width.
#[derive(Debug, Clone, Copy)]
pub struct DurationLabels {
    pub hours: &'static str,
    pub minutes: &'static str,
    pub seconds: &'static str,
    /// Between a field's number and its unit.
    pub value_unit_separator: &'static str,
    /// Between consecutive fields.
    pub field_separator: &'static str,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::EnUs, Locale::JaJp, Locale::DeDe];

    /// BCP 47 tag.
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::JaJp => "ja-JP",
            Locale::DeDe => "de-DE",
        }
    }

    /// Next locale in [`Locale::ALL`], wrapping around.
    pub fn next(self) -> Self {
        match self {
            Locale::EnUs => Locale::JaJp,
            Locale::JaJp => Locale::DeDe,
            Locale::DeDe => Locale::EnUs,
        }
    }

    /// Best match for a POSIX locale string such as `ja_JP.UTF-8`.
    ///
    /// Matches on the language only; returns `None` for unsupported
    /// languages and for the `C`/`POSIX` locales.
    pub fn from_posix(value: &str) -> Option<Self> {
        let language = value
            .split(['_', '-', '.', '@'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match language.as_str() {
            "en" => Some(Locale::EnUs),
            "ja" => Some(Locale::JaJp),
            "de" => Some(Locale::DeDe),
            _ => None,
        }
    }

    pub fn decimal_separator(&self) -> &'static str {
        match self {
            Locale::EnUs | Locale::JaJp => ".",
            Locale::DeDe => ",",
        }
    }

    pub fn grouping_separator(&self) -> &'static str {
        match self {
            Locale::EnUs | Locale::JaJp => ",",
            Locale::DeDe => ".",
        }
    }

    /// Text between a number and its percent sign.
    pub fn percent_separator(&self) -> &'static str {
        match self {
            Locale::EnUs | Locale::JaJp => "",
            Locale::DeDe => "\u{a0}",
        }
    }

    pub fn duration_labels(&self) -> DurationLabels {
        match self {
            Locale::EnUs => DurationLabels {
                hours: "hr",
                minutes: "min",
                seconds: "sec",
                value_unit_separator: " ",
                field_separator: ", ",
            },
            Locale::JaJp => DurationLabels {
                hours: "時間",
                minutes: "分",
                seconds: "秒",
                value_unit_separator: "",
                field_separator: "",
            },
            Locale::DeDe => DurationLabels {
                hours: "Std.",
                minutes: "Min.",
                seconds: "Sek.",
                value_unit_separator: " ",
                field_separator: ", ",
            },
        }
    }

    /// Unit a temperature is converted to when shown with locale usage.
    pub fn preferred_temperature_unit(&self) -> TemperatureUnit {
        match self {
            Locale::EnUs => TemperatureUnit::Fahrenheit,
            Locale::JaJp | Locale::DeDe => TemperatureUnit::Celsius,
        }
    }

    /// Navigation title of the vitals screen.
    pub fn screen_title(&self) -> &'static str {
        match self {
            Locale::EnUs => "Vitals",
            Locale::JaJp => "バイタルデータ",
            Locale::DeDe => "Vitaldaten",
        }
    }

    pub fn title(&self, key: TitleKey) -> &'static str {
        match (self, key) {
            (Locale::EnUs, TitleKey::OxygenLevel) => "Blood Oxygen",
            (Locale::EnUs, TitleKey::HeartRate) => "Heart Rate",
            (Locale::EnUs, TitleKey::Sleep) => "Sleep",
            (Locale::EnUs, TitleKey::BodyTemperature) => "Body Temperature",
            (Locale::JaJp, TitleKey::OxygenLevel) => "取り込まれた酸素のレベル",
            (Locale::JaJp, TitleKey::HeartRate) => "心拍数",
            (Locale::JaJp, TitleKey::Sleep) => "睡眠",
            (Locale::JaJp, TitleKey::BodyTemperature) => "体温",
            (Locale::DeDe, TitleKey::OxygenLevel) => "Blutsauerstoff",
            (Locale::DeDe, TitleKey::HeartRate) => "Herzfrequenz",
            (Locale::DeDe, TitleKey::Sleep) => "Schlaf",
            (Locale::DeDe, TitleKey::BodyTemperature) => "Körpertemperatur",
        }
    }

    pub fn now_phrase(&self) -> &'static str {
        match self {
            Locale::EnUs => "now",
            Locale::JaJp => "今",
            Locale::DeDe => "jetzt",
        }
    }

    /// Named phrase for exactly one day away.
    pub fn adjacent_day_phrase(&self, past: bool) -> &'static str {
        match (self, past) {
            (Locale::EnUs, true) => "yesterday",
            (Locale::EnUs, false) => "tomorrow",
            (Locale::JaJp, true) => "昨日",
            (Locale::JaJp, false) => "明日",
            (Locale::DeDe, true) => "gestern",
            (Locale::DeDe, false) => "morgen",
        }
    }

    /// "N units ago" / "in N units".
    pub fn relative_phrase(&self, count: u64, unit: RelativeUnit, past: bool) -> String {
        match self {
            Locale::EnUs => {
                let name = english_unit(unit);
                let plural = if count == 1 { "" } else { "s" };
                if past {
                    format!("{count} {name}{plural} ago")
                } else {
                    format!("in {count} {name}{plural}")
                }
            }
            Locale::JaJp => {
                let name = japanese_unit(unit);
                let direction = if past { "前" } else { "後" };
                format!("{count}{name}{direction}")
            }
            Locale::DeDe => {
                let name = german_unit(unit, count == 1);
                if past {
                    format!("vor {count} {name}")
                } else {
                    format!("in {count} {name}")
                }
            }
        }
    }
}

fn english_unit(unit: RelativeUnit) -> &'static str {
    match unit {
        RelativeUnit::Second => "second",
        RelativeUnit::Minute => "minute",
        RelativeUnit::Hour => "hour",
        RelativeUnit::Day => "day",
        RelativeUnit::Week => "week",
        RelativeUnit::Month => "month",
        RelativeUnit::Year => "year",
    }
}

fn japanese_unit(unit: RelativeUnit) -> &'static str {
    match unit {
        RelativeUnit::Second => "秒",
        RelativeUnit::Minute => "分",
        RelativeUnit::Hour => "時間",
        RelativeUnit::Day => "日",
        RelativeUnit::Week => "週間",
        RelativeUnit::Month => "か月",
        RelativeUnit::Year => "年",
    }
}

// "vor"/"in" both take the dative.
fn german_unit(unit: RelativeUnit, singular: bool) -> &'static str {
    match (unit, singular) {
        (RelativeUnit::Second, true) => "Sekunde",
        (RelativeUnit::Second, false) => "Sekunden",
        (RelativeUnit::Minute, true) => "Minute",
        (RelativeUnit::Minute, false) => "Minuten",
        (RelativeUnit::Hour, true) => "Stunde",
        (RelativeUnit::Hour, false) => "Stunden",
        (RelativeUnit::Day, true) => "Tag",
        (RelativeUnit::Day, false) => "Tagen",
        (RelativeUnit::Week, true) => "Woche",
        (RelativeUnit::Week, false) => "Wochen",
        (RelativeUnit::Month, true) => "Monat",
        (RelativeUnit::Month, false) => "Monaten",
        (RelativeUnit::Year, true) => "Jahr",
        (RelativeUnit::Year, false) => "Jahren",
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::ALL
            .into_iter()
            .find(|locale| locale.tag().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unsupported locale: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_posix() {
        assert_eq!(Locale::from_posix("ja_JP.UTF-8"), Some(Locale::JaJp));
        assert_eq!(Locale::from_posix("de_AT"), Some(Locale::DeDe));
        assert_eq!(Locale::from_posix("en"), Some(Locale::EnUs));
        assert_eq!(Locale::from_posix("C"), None);
        assert_eq!(Locale::from_posix(""), None);
    }

    #[test]
    fn test_from_str_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(locale.tag().parse::<Locale>(), Ok(locale));
        }
        assert!("fr-FR".parse::<Locale>().is_err());
    }

    #[test]
    fn test_next_cycles_all() {
        let mut locale = Locale::EnUs;
        for _ in 0..Locale::ALL.len() {
            locale = locale.next();
        }
        assert_eq!(locale, Locale::EnUs);
    }

    #[test]
    fn test_relative_phrases() {
        assert_eq!(
            Locale::EnUs.relative_phrase(1, RelativeUnit::Hour, true),
            "1 hour ago"
        );
        assert_eq!(
            Locale::EnUs.relative_phrase(3, RelativeUnit::Day, false),
            "in 3 days"
        );
        assert_eq!(
            Locale::JaJp.relative_phrase(5, RelativeUnit::Minute, true),
            "5分前"
        );
        assert_eq!(
            Locale::DeDe.relative_phrase(2, RelativeUnit::Day, true),
            "vor 2 Tagen"
        );
    }
}
