//! Conversion engine
//!
//! Pure functions from (category, from unit, to unit, raw input) to a result.
//! Nothing here holds state; callers rebuild a request on every change.

pub mod converter;
pub mod parse;
pub mod temperature;

pub use converter::{
    convert, convert_display, convert_length, convert_time, convert_volume, ConversionRequest,
    ConversionResult,
};
pub use parse::{format_value, parse_numeric};
pub use temperature::convert_temperature;
