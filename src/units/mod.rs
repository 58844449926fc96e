//! Unit taxonomy
//!
//! Categories, the units each one offers, and label resolution.

pub mod category;
pub mod unit;

pub use category::{resolve_category, ConversionCategory};
pub use unit::{LengthUnit, TemperatureUnit, TimeUnit, Unit, UnitError, UnitResult, VolumeUnit};

// ============================================================================
// Unit Lists (display order)
// ============================================================================

/// Temperature units in picker order
pub const TEMPERATURE_UNITS: [Unit; 3] = [
    Unit::Temperature(TemperatureUnit::Celsius),
    Unit::Temperature(TemperatureUnit::Fahrenheit),
    Unit::Temperature(TemperatureUnit::Kelvin),
];

/// Length units in picker order
pub const LENGTH_UNITS: [Unit; 5] = [
    Unit::Length(LengthUnit::Meters),
    Unit::Length(LengthUnit::Centimeters),
    Unit::Length(LengthUnit::Feet),
    Unit::Length(LengthUnit::Miles),
    Unit::Length(LengthUnit::Yards),
];

/// Time units in picker order
pub const TIME_UNITS: [Unit; 4] = [
    Unit::Time(TimeUnit::Days),
    Unit::Time(TimeUnit::Hours),
    Unit::Time(TimeUnit::Minutes),
    Unit::Time(TimeUnit::Seconds),
];

/// Volume units in picker order
pub const VOLUME_UNITS: [Unit; 5] = [
    Unit::Volume(VolumeUnit::Cups),
    Unit::Volume(VolumeUnit::Gallons),
    Unit::Volume(VolumeUnit::Liters),
    Unit::Volume(VolumeUnit::Milliliters),
    Unit::Volume(VolumeUnit::Pints),
];

/// Ordered unit list for a category. `None` has no units.
pub fn units_for(category: ConversionCategory) -> &'static [Unit] {
    match category {
        ConversionCategory::Temperature => &TEMPERATURE_UNITS,
        ConversionCategory::Length => &LENGTH_UNITS,
        ConversionCategory::Time => &TIME_UNITS,
        ConversionCategory::Volume => &VOLUME_UNITS,
        ConversionCategory::None => &[],
    }
}

/// Ordered unit identifiers for a category
pub fn unit_labels_for(category: ConversionCategory) -> Vec<&'static str> {
    units_for(category).iter().map(Unit::as_str).collect()
}
