//! Temperature conversion
//!
//! Formulas are written in the exact evaluation order the form has always
//! used, so results match bit-for-bit under `f64` arithmetic.

use crate::units::TemperatureUnit;

/// Offset between Celsius and Kelvin
pub const KELVIN_OFFSET: f64 = 273.15;
/// Fahrenheit reading at the freezing point of water
pub const FAHRENHEIT_FREEZING: f64 = 32.0;

/// Convert a temperature between two units
///
/// Only the six cross-unit pairs have a formula. Same-unit pairs yield 0.0,
/// not the input value.
pub fn convert_temperature(from: TemperatureUnit, to: TemperatureUnit, value: f64) -> f64 {
    use crate::units::TemperatureUnit::*;

    match (from, to) {
        (Celsius, Fahrenheit) => ((value * 9.0) / 5.0) + FAHRENHEIT_FREEZING,
        (Celsius, Kelvin) => value + KELVIN_OFFSET,
        (Fahrenheit, Celsius) => (value - FAHRENHEIT_FREEZING) * (5.0 / 9.0),
        (Fahrenheit, Kelvin) => ((value - FAHRENHEIT_FREEZING) * (5.0 / 9.0)) + KELVIN_OFFSET,
        (Kelvin, Celsius) => value - KELVIN_OFFSET,
        (Kelvin, Fahrenheit) => ((value - KELVIN_OFFSET) * (9.0 / 5.0)) + FAHRENHEIT_FREEZING,
        // TODO: identity pairs should probably return `value`; kept at 0.0 until confirmed
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::TemperatureUnit::*;

    #[test]
    fn test_celsius_to_fahrenheit() {
        assert_eq!(convert_temperature(Celsius, Fahrenheit, 0.0), 32.0);
        assert_eq!(convert_temperature(Celsius, Fahrenheit, 100.0), 212.0);
        assert_eq!(convert_temperature(Celsius, Fahrenheit, -40.0), -40.0);
    }

    #[test]
    fn test_celsius_to_kelvin() {
        assert_eq!(convert_temperature(Celsius, Kelvin, 0.0), 273.15);
    }

    #[test]
    fn test_fahrenheit_to_celsius() {
        assert_eq!(convert_temperature(Fahrenheit, Celsius, 32.0), 0.0);
        let c = convert_temperature(Fahrenheit, Celsius, 212.0);
        assert!((c - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_fahrenheit_to_kelvin() {
        assert_eq!(convert_temperature(Fahrenheit, Kelvin, 32.0), 273.15);
    }

    #[test]
    fn test_kelvin_to_celsius() {
        assert_eq!(convert_temperature(Kelvin, Celsius, 273.15), 0.0);
    }

    #[test]
    fn test_kelvin_to_fahrenheit() {
        assert_eq!(convert_temperature(Kelvin, Fahrenheit, 273.15), 32.0);
        let f = convert_temperature(Kelvin, Fahrenheit, 373.15);
        assert!((f - 212.0).abs() < 1e-9);
    }

    #[test]
    fn test_identity_pairs_yield_zero() {
        assert_eq!(convert_temperature(Celsius, Celsius, 50.0), 0.0);
        assert_eq!(convert_temperature(Fahrenheit, Fahrenheit, 50.0), 0.0);
        assert_eq!(convert_temperature(Kelvin, Kelvin, 50.0), 0.0);
    }

    #[test]
    fn test_fahrenheit_to_celsius_uses_float_ratio() {
        // 5/9 must not collapse to integer division
        assert!(convert_temperature(Fahrenheit, Celsius, 50.0) > 0.0);
        assert_eq!(convert_temperature(Fahrenheit, Celsius, 50.0), 18.0 * (5.0 / 9.0));
    }

    #[test]
    fn test_round_trip_celsius_fahrenheit() {
        for value in [-273.15, -40.0, 0.0, 12.5, 37.0, 100.0, 1234.5678] {
            let f = convert_temperature(Celsius, Fahrenheit, value);
            let back = convert_temperature(Fahrenheit, Celsius, f);
            assert!((back - value).abs() < 1e-9, "{} -> {} -> {}", value, f, back);
        }
    }

    #[test]
    fn test_round_trip_celsius_kelvin_and_fahrenheit_kelvin() {
        for value in [-40.0, 0.0, 25.0, 451.0] {
            let k = convert_temperature(Celsius, Kelvin, value);
            assert!((convert_temperature(Kelvin, Celsius, k) - value).abs() < 1e-9);

            let k = convert_temperature(Fahrenheit, Kelvin, value);
            assert!((convert_temperature(Kelvin, Fahrenheit, k) - value).abs() < 1e-9);
        }
    }
}
