//! Layered settings: an optional TOML file, then `VITALS_*` environment
//! variables. Command-line flags are applied on top by the binary.
//!
//! ```toml
//! locale = "ja-JP"
//! layout = "cards"
//! theme = "dark"
//! tick_rate = "250ms"
//! log_level = "debug"
//! ```

use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use config::{Config, Environment, File};
use serde::Deserialize;
use tracing_subscriber::filter::LevelFilter;

use crate::app::LayoutMode;
use crate::data::duration::parse_duration;
use crate::format::Locale;
use crate::ui::ThemeChoice;

/// Prefix for environment overrides, e.g. `VITALS_LOCALE`.
pub const ENV_PREFIX: &str = "VITALS";

/// Settings file looked up in the working directory when no path is given.
pub const DEFAULT_FILE_STEM: &str = "vitals";

const DEFAULT_TICK_RATE: &str = "250ms";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub locale: Option<Locale>,
    pub layout: LayoutMode,
    pub theme: ThemeChoice,
    pub tick_rate: String,
    pub log_level: LogLevel,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: None,
            layout: LayoutMode::default(),
            theme: ThemeChoice::default(),
            tick_rate: DEFAULT_TICK_RATE.to_string(),
            log_level: LogLevel::default(),
        }
    }
}

impl Settings {
    /// Load settings from `path` (required when given) or from an optional
    /// `vitals.*` file in the working directory, then the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_from(path, Environment::with_prefix(ENV_PREFIX))
    }

    /// Load settings with an explicit environment layer.
    pub fn load_from(path: Option<&Path>, env: Environment) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_FILE_STEM).required(false),
        };

        let settings = Config::builder()
            .add_source(file)
            .add_source(env)
            .build()
            .with_context(|| match path {
                Some(path) => format!("failed to load settings from {}", path.display()),
                None => "failed to load settings".to_string(),
            })?
            .try_deserialize::<Settings>()
            .context("invalid settings")?;

        tracing::debug!(?settings, "settings loaded");
        Ok(settings)
    }

    /// Parsed redraw interval.
    pub fn tick_rate(&self) -> Result<Duration> {
        parse_tick_rate(&self.tick_rate)
    }
}

/// Parse a redraw interval such as `250ms`. Zero would spin the event loop.
pub fn parse_tick_rate(value: &str) -> Result<Duration> {
    let tick_rate =
        parse_duration(value).with_context(|| format!("invalid tick rate '{}'", value))?;
    if tick_rate.is_zero() {
        bail!("tick rate must be greater than zero");
    }
    Ok(tick_rate)
}

/// Pick the display locale: flag, then settings, then `LANG`, then en-US.
pub fn resolve_locale(cli: Option<Locale>, settings: Option<Locale>, lang: Option<&str>) -> Locale {
    cli.or(settings)
        .or_else(|| lang.and_then(Locale::from_posix))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use config::Map;

    use super::*;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    fn settings_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.toml");
        std::fs::write(&path, "").unwrap();

        let settings = Settings::load_from(Some(&path), env(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.tick_rate().unwrap(), Duration::from_millis(250));
    }

    #[test]
    fn test_file_layer() {
        let file = settings_file(
            "locale = \"de-DE\"\nlayout = \"list\"\ntheme = \"light\"\ntick_rate = \"1s\"\n",
        );
        let settings = Settings::load_from(Some(file.path()), env(&[])).unwrap();

        assert_eq!(settings.locale, Some(Locale::DeDe));
        assert_eq!(settings.layout, LayoutMode::List);
        assert_eq!(settings.theme, ThemeChoice::Light);
        assert_eq!(settings.tick_rate().unwrap(), Duration::from_secs(1));
    }

    #[test]
    fn test_environment_overrides_file() {
        let file = settings_file("locale = \"de-DE\"\nlog_level = \"warn\"\n");
        let settings = Settings::load_from(
            Some(file.path()),
            env(&[("VITALS_LOCALE", "ja-JP"), ("VITALS_LAYOUT", "cards")]),
        )
        .unwrap();

        assert_eq!(settings.locale, Some(Locale::JaJp));
        assert_eq!(settings.layout, LayoutMode::Cards);
        assert_eq!(settings.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(Settings::load_from(Some(&missing), env(&[])).is_err());
    }

    #[test]
    fn test_bad_values_are_errors() {
        let file = settings_file("layout = \"grid\"\n");
        assert!(Settings::load_from(Some(file.path()), env(&[])).is_err());

        let settings = Settings {
            tick_rate: "soon".to_string(),
            ..Settings::default()
        };
        assert!(settings.tick_rate().is_err());
        assert!(parse_tick_rate("0ms").is_err());
    }

    #[test]
    fn test_locale_precedence() {
        assert_eq!(
            resolve_locale(Some(Locale::DeDe), Some(Locale::JaJp), Some("en_US.UTF-8")),
            Locale::DeDe
        );
        assert_eq!(
            resolve_locale(None, Some(Locale::JaJp), Some("de_DE.UTF-8")),
            Locale::JaJp
        );
        assert_eq!(resolve_locale(None, None, Some("ja_JP.UTF-8")), Locale::JaJp);
        assert_eq!(resolve_locale(None, None, Some("C")), Locale::EnUs);
        assert_eq!(resolve_locale(None, None, None), Locale::EnUs);
    }

    #[test]
    fn test_log_level_filter() {
        assert_eq!(LevelFilter::from(LogLevel::Debug), LevelFilter::DEBUG);
        assert_eq!(LevelFilter::from(LogLevel::default()), LevelFilter::INFO);
    }
}
