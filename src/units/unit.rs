//! Unit types
//!
//! Each category has its own closed set of units. `Unit` wraps them so the
//! taxonomy can hand out a single ordered list per category, while the string
//! identifiers only show up at the presentation boundary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::category::ConversionCategory;

/// Errors raised when the presentation layer resolves a unit label strictly
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    #[error("Unknown unit: '{0}'")]
    UnknownUnit(String),

    #[error("Unit '{unit}' does not belong to category {category}")]
    NotInCategory {
        unit: String,
        category: ConversionCategory,
    },
}

/// Result type for strict unit resolution
pub type UnitResult<T> = Result<T, UnitError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Meters,
    Centimeters,
    Feet,
    Yards,
    Miles,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeUnit {
    Milliliters,
    Liters,
    Cups,
    Pints,
    Gallons,
}

/// A unit belonging to exactly one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Unit {
    Temperature(TemperatureUnit),
    Length(LengthUnit),
    Time(TimeUnit),
    Volume(VolumeUnit),
}

impl TemperatureUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
            TemperatureUnit::Kelvin => "kelvin",
        }
    }
}

impl LengthUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            LengthUnit::Meters => "meters",
            LengthUnit::Centimeters => "centimeters",
            LengthUnit::Feet => "feet",
            LengthUnit::Yards => "yards",
            LengthUnit::Miles => "miles",
        }
    }
}

impl TimeUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Seconds => "seconds",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
            TimeUnit::Days => "days",
        }
    }
}

impl VolumeUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            VolumeUnit::Milliliters => "milliliters",
            VolumeUnit::Liters => "liters",
            VolumeUnit::Cups => "cups",
            VolumeUnit::Pints => "pints",
            VolumeUnit::Gallons => "gallons",
        }
    }
}

impl Unit {
    /// Stable string identifier (e.g. "celsius", "meters")
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Temperature(u) => u.as_str(),
            Unit::Length(u) => u.as_str(),
            Unit::Time(u) => u.as_str(),
            Unit::Volume(u) => u.as_str(),
        }
    }

    /// Parse from a string identifier. Matching is exact.
    pub fn from_str(s: &str) -> Option<Self> {
        let unit = match s {
            "celsius" => Unit::Temperature(TemperatureUnit::Celsius),
            "fahrenheit" => Unit::Temperature(TemperatureUnit::Fahrenheit),
            "kelvin" => Unit::Temperature(TemperatureUnit::Kelvin),
            "meters" => Unit::Length(LengthUnit::Meters),
            "centimeters" => Unit::Length(LengthUnit::Centimeters),
            "feet" => Unit::Length(LengthUnit::Feet),
            "yards" => Unit::Length(LengthUnit::Yards),
            "miles" => Unit::Length(LengthUnit::Miles),
            "seconds" => Unit::Time(TimeUnit::Seconds),
            "minutes" => Unit::Time(TimeUnit::Minutes),
            "hours" => Unit::Time(TimeUnit::Hours),
            "days" => Unit::Time(TimeUnit::Days),
            "milliliters" => Unit::Volume(VolumeUnit::Milliliters),
            "liters" => Unit::Volume(VolumeUnit::Liters),
            "cups" => Unit::Volume(VolumeUnit::Cups),
            "pints" => Unit::Volume(VolumeUnit::Pints),
            "gallons" => Unit::Volume(VolumeUnit::Gallons),
            _ => return None,
        };
        Some(unit)
    }

    /// The category this unit belongs to
    pub fn category(&self) -> ConversionCategory {
        match self {
            Unit::Temperature(_) => ConversionCategory::Temperature,
            Unit::Length(_) => ConversionCategory::Length,
            Unit::Time(_) => ConversionCategory::Time,
            Unit::Volume(_) => ConversionCategory::Volume,
        }
    }

    /// Resolve a label and require it to belong to `category`
    pub fn parse_in(category: ConversionCategory, label: &str) -> UnitResult<Self> {
        let unit = Unit::from_str(label).ok_or_else(|| UnitError::UnknownUnit(label.to_string()))?;
        if unit.category() != category {
            return Err(UnitError::NotInCategory {
                unit: label.to_string(),
                category,
            });
        }
        Ok(unit)
    }

    pub fn as_temperature(&self) -> Option<TemperatureUnit> {
        match self {
            Unit::Temperature(u) => Some(*u),
            _ => None,
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_round_trip() {
        for label in ["celsius", "meters", "days", "pints", "gallons"] {
            let unit = Unit::from_str(label).unwrap();
            assert_eq!(unit.as_str(), label);
        }
    }

    #[test]
    fn test_from_str_unknown() {
        assert_eq!(Unit::from_str(""), None);
        assert_eq!(Unit::from_str("Celsius"), None);
        assert_eq!(Unit::from_str("inches"), None);
    }

    #[test]
    fn test_unit_category() {
        assert_eq!(Unit::from_str("kelvin").unwrap().category(), ConversionCategory::Temperature);
        assert_eq!(Unit::from_str("yards").unwrap().category(), ConversionCategory::Length);
        assert_eq!(Unit::from_str("minutes").unwrap().category(), ConversionCategory::Time);
        assert_eq!(Unit::from_str("liters").unwrap().category(), ConversionCategory::Volume);
    }

    #[test]
    fn test_parse_in_checks_membership() {
        assert_eq!(
            Unit::parse_in(ConversionCategory::Temperature, "celsius"),
            Ok(Unit::Temperature(TemperatureUnit::Celsius))
        );
        assert_eq!(
            Unit::parse_in(ConversionCategory::Temperature, "meters"),
            Err(UnitError::NotInCategory {
                unit: "meters".to_string(),
                category: ConversionCategory::Temperature,
            })
        );
        assert_eq!(
            Unit::parse_in(ConversionCategory::Length, "furlongs"),
            Err(UnitError::UnknownUnit("furlongs".to_string()))
        );
    }

    #[test]
    fn test_serializes_as_identifier() {
        let json = serde_json::to_string(&Unit::Volume(VolumeUnit::Milliliters)).unwrap();
        assert_eq!(json, "\"milliliters\"");
        let unit: Unit = serde_json::from_str("\"fahrenheit\"").unwrap();
        assert_eq!(unit, Unit::Temperature(TemperatureUnit::Fahrenheit));
    }
}
