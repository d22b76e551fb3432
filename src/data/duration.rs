use std::time::Duration;

use anyhow::{bail, Result};

/// Suffix to nanoseconds multiplier (order matters: longer suffixes first)
const UNITS: &[(&str, f64)] = &[
    ("ns", 1.0),
    ("µs", 1_000.0),
    ("us", 1_000.0),
    ("ms", 1_000_000.0),
    ("s", 1_000_000_000.0),
];

/// Parse duration strings like "250ms", "1.5s", "0ns"
pub fn parse_duration(s: &str) -> Result<Duration> {
    let s = s.trim();

    for (suffix, multiplier) in UNITS {
        if let Some(val_str) = s.strip_suffix(suffix) {
            let val: f64 = val_str.parse()?;
            if !val.is_finite() || val < 0.0 {
                bail!("Duration must be a non-negative number: {}", s);
            }
            return Ok(Duration::from_nanos((val * multiplier) as u64));
        }
    }

    bail!("Unknown duration format: {}", s)
}

/// An elapsed time broken down into hours, minutes and seconds.
///
/// Hours are not folded into days, so a 30 hour span stays `30h 0m 0s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DurationParts {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl DurationParts {
    /// Break down a span given in seconds, rounded to the nearest second.
    ///
    /// Negative and non-finite inputs collapse to zero.
    pub fn from_seconds(seconds: f64) -> Self {
        let total = if seconds.is_finite() && seconds > 0.0 {
            seconds.round() as u64
        } else {
            0
        };
        Self {
            hours: total / 3600,
            minutes: (total % 3600) / 60,
            seconds: total % 60,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seconds() {
        let d = parse_duration("1.5s").unwrap();
        assert!((d.as_secs_f64() - 1.5).abs() < 0.0001);
    }

    #[test]
    fn test_parse_milliseconds() {
        let d = parse_duration("250ms").unwrap();
        assert_eq!(d.as_millis(), 250);
    }

    #[test]
    fn test_parse_microseconds() {
        let d = parse_duration("16.958µs").unwrap();
        assert_eq!(d.as_nanos(), 16958);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_duration("soon").is_err());
        assert!(parse_duration("-5ms").is_err());
        assert!(parse_duration("10m").is_err());
    }

    #[test]
    fn test_breakdown_sleep_sample() {
        let parts = DurationParts::from_seconds(451.0 * 60.0);
        assert_eq!(
            parts,
            DurationParts {
                hours: 7,
                minutes: 31,
                seconds: 0
            }
        );
    }

    #[test]
    fn test_breakdown_rounds_and_clamps() {
        assert_eq!(DurationParts::from_seconds(59.6).minutes, 1);
        assert!(DurationParts::from_seconds(-10.0).is_zero());
        assert!(DurationParts::from_seconds(f64::NAN).is_zero());
        assert_eq!(DurationParts::from_seconds(30.0 * 3600.0).hours, 30);
    }
}
