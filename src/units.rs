//! Unit conversion laws and the dimensions built on them.
//!
//! A conversion law maps a value expressed in some unit to the dimension's
//! base unit and back. Most units are affine ([`LinearConverter`]); a few
//! derived units such as pace are reciprocal ([`ReciprocalConverter`]).
//!
//! ```
//! use vitals_tui::units::SpeedUnit;
//!
//! // 5 min/km is 3.33 m/s
//! let mps = SpeedUnit::MINUTES_PER_KILOMETER.convert(5.0, SpeedUnit::METERS_PER_SECOND);
//! assert!((mps - 1000.0 / 300.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Meters in one kilometer.
pub const METERS_PER_KILOMETER: f64 = 1000.0;

/// Seconds in one minute.
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Offset between the Celsius and Kelvin scales.
const KELVIN_OFFSET: f64 = 273.15;

/// Errors raised when building a conversion law.
#[derive(Debug, Error, PartialEq)]
pub enum UnitError {
    #[error("conversion coefficient must be finite and non-zero, got {0}")]
    InvalidCoefficient(f64),

    #[error("conversion constant must be finite, got {0}")]
    InvalidConstant(f64),
}

/// A conversion law between a unit and its dimension's base unit.
pub trait UnitConverter {
    /// Convert a value in this unit to the base unit.
    fn to_base(&self, value: f64) -> f64;

    /// Convert a base-unit value to this unit.
    fn from_base(&self, base_value: f64) -> f64;
}

/// Affine law: `base = value * coefficient + constant`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearConverter {
    coefficient: f64,
    constant: f64,
}

impl LinearConverter {
    /// Create a linear law. The coefficient must be non-zero so the law
    /// stays invertible.
    pub fn new(coefficient: f64, constant: f64) -> Result<Self, UnitError> {
        if !coefficient.is_finite() || coefficient == 0.0 {
            return Err(UnitError::InvalidCoefficient(coefficient));
        }
        if !constant.is_finite() {
            return Err(UnitError::InvalidConstant(constant));
        }
        Ok(Self {
            coefficient,
            constant,
        })
    }

    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    pub fn constant(&self) -> f64 {
        self.constant
    }
}

impl UnitConverter for LinearConverter {
    fn to_base(&self, value: f64) -> f64 {
        value * self.coefficient + self.constant
    }

    fn from_base(&self, base_value: f64) -> f64 {
        (base_value - self.constant) / self.coefficient
    }
}

/// Reciprocal law: `base = coefficient / value` and `value = coefficient / base`.
///
/// Zero inputs are not guarded. Dividing by zero follows IEEE 754 and
/// yields an infinity (or NaN for `0 / 0`), so callers must reject zero
/// values before converting if that matters to them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReciprocalConverter {
    coefficient: f64,
}

impl ReciprocalConverter {
    /// Create a reciprocal law with a fixed, non-zero coefficient.
    pub fn new(coefficient: f64) -> Result<Self, UnitError> {
        if !coefficient.is_finite() || coefficient == 0.0 {
            return Err(UnitError::InvalidCoefficient(coefficient));
        }
        Ok(Self { coefficient })
    }

    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }
}

impl UnitConverter for ReciprocalConverter {
    fn to_base(&self, value: f64) -> f64 {
        self.coefficient / value
    }

    fn from_base(&self, base_value: f64) -> f64 {
        self.coefficient / base_value
    }
}

/// Either conversion law, so units can be declared as constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Converter {
    Linear(LinearConverter),
    Reciprocal(ReciprocalConverter),
}

impl Converter {
    const IDENTITY: Converter = Converter::Linear(LinearConverter {
        coefficient: 1.0,
        constant: 0.0,
    });
}

impl UnitConverter for Converter {
    fn to_base(&self, value: f64) -> f64 {
        match self {
            Converter::Linear(c) => c.to_base(value),
            Converter::Reciprocal(c) => c.to_base(value),
        }
    }

    fn from_base(&self, base_value: f64) -> f64 {
        match self {
            Converter::Linear(c) => c.from_base(base_value),
            Converter::Reciprocal(c) => c.from_base(base_value),
        }
    }
}

impl From<LinearConverter> for Converter {
    fn from(c: LinearConverter) -> Self {
        Converter::Linear(c)
    }
}

impl From<ReciprocalConverter> for Converter {
    fn from(c: ReciprocalConverter) -> Self {
        Converter::Reciprocal(c)
    }
}

/// A unit of speed. The base unit is meters per second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedUnit {
    symbol: &'static str,
    converter: Converter,
}

impl SpeedUnit {
    pub const METERS_PER_SECOND: SpeedUnit = SpeedUnit {
        symbol: "m/s",
        converter: Converter::IDENTITY,
    };

    pub const KILOMETERS_PER_HOUR: SpeedUnit = SpeedUnit {
        symbol: "km/h",
        converter: Converter::Linear(LinearConverter {
            coefficient: METERS_PER_KILOMETER / 3600.0,
            constant: 0.0,
        }),
    };

    /// Pace: minutes needed to cover one kilometer.
    pub const MINUTES_PER_KILOMETER: SpeedUnit = SpeedUnit {
        symbol: "min/km",
        converter: Converter::Reciprocal(ReciprocalConverter {
            coefficient: METERS_PER_KILOMETER / SECONDS_PER_MINUTE,
        }),
    };

    /// Define a custom speed unit.
    pub fn new(symbol: &'static str, converter: impl Into<Converter>) -> Self {
        Self {
            symbol,
            converter: converter.into(),
        }
    }

    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    pub fn converter(&self) -> &Converter {
        &self.converter
    }

    /// Convert `value` expressed in `self` into `target`.
    pub fn convert(&self, value: f64, target: SpeedUnit) -> f64 {
        target.converter.from_base(self.converter.to_base(value))
    }
}

/// A unit of temperature. The base unit is the kelvin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    /// Narrow-width symbol used in formatted output.
    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Kelvin => "K",
        }
    }

    pub fn converter(&self) -> Converter {
        match self {
            TemperatureUnit::Celsius => Converter::Linear(LinearConverter {
                coefficient: 1.0,
                constant: KELVIN_OFFSET,
            }),
            TemperatureUnit::Fahrenheit => Converter::Linear(LinearConverter {
                coefficient: 5.0 / 9.0,
                constant: KELVIN_OFFSET - 32.0 * 5.0 / 9.0,
            }),
            TemperatureUnit::Kelvin => Converter::IDENTITY,
        }
    }

    /// Convert `value` expressed in `self` into `target`.
    pub fn convert(&self, value: f64, target: TemperatureUnit) -> f64 {
        if *self == target {
            return value;
        }
        target.converter().from_base(self.converter().to_base(value))
    }
}
