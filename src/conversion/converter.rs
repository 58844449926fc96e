//! Conversion dispatch
//!
//! Maps a request to the category-specific conversion. Only temperature has
//! formulas; the other categories report `Unsupported`.

use serde::Serialize;

use super::parse::{format_value, parse_numeric};
use super::temperature::convert_temperature;
use crate::units::{resolve_category, ConversionCategory, Unit};

/// A single conversion as entered on the form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionRequest {
    pub category: ConversionCategory,
    /// Source unit, `None` while nothing is selected
    pub from: Option<Unit>,
    /// Target unit, `None` while nothing is selected
    pub to: Option<Unit>,
    /// Raw text from the value field
    pub raw_input: String,
}

/// Outcome of a conversion
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ConversionResult {
    Value(f64),
    /// No conversion is defined for this category
    Unsupported,
}

impl ConversionResult {
    pub fn value(&self) -> Option<f64> {
        match self {
            ConversionResult::Value(v) => Some(*v),
            ConversionResult::Unsupported => None,
        }
    }

    pub fn is_supported(&self) -> bool {
        matches!(self, ConversionResult::Value(_))
    }

    /// Text for the result label. Unsupported renders blank.
    pub fn display(&self) -> String {
        match self {
            ConversionResult::Value(v) => format_value(*v),
            ConversionResult::Unsupported => String::new(),
        }
    }
}

impl ConversionRequest {
    pub fn new(
        category: ConversionCategory,
        from: Option<Unit>,
        to: Option<Unit>,
        raw_input: impl Into<String>,
    ) -> Self {
        Self {
            category,
            from,
            to,
            raw_input: raw_input.into(),
        }
    }

    /// Build a request from picker labels. Unknown labels become unselected.
    pub fn from_labels(category: &str, from: &str, to: &str, raw_input: &str) -> Self {
        Self::new(
            resolve_category(category),
            Unit::from_str(from),
            Unit::from_str(to),
            raw_input,
        )
    }

    pub fn value(&self) -> f64 {
        parse_numeric(&self.raw_input)
    }
}

/// Convert a request
pub fn convert(request: &ConversionRequest) -> ConversionResult {
    let value = request.value();
    let result = match request.category {
        ConversionCategory::Temperature => {
            let pair = (
                request.from.and_then(|u| u.as_temperature()),
                request.to.and_then(|u| u.as_temperature()),
            );
            match pair {
                (Some(from), Some(to)) => ConversionResult::Value(convert_temperature(from, to, value)),
                _ => ConversionResult::Value(0.0),
            }
        }
        ConversionCategory::Length => convert_length(request.from, request.to, value),
        ConversionCategory::Time => convert_time(request.from, request.to, value),
        ConversionCategory::Volume => convert_volume(request.from, request.to, value),
        ConversionCategory::None => ConversionResult::Unsupported,
    };

    tracing::debug!(
        category = %request.category,
        from = ?request.from,
        to = ?request.to,
        input = %request.raw_input,
        ?result,
        "converted"
    );
    result
}

/// Convert and format for display
pub fn convert_display(
    category: ConversionCategory,
    from: Option<Unit>,
    to: Option<Unit>,
    raw_input: &str,
) -> String {
    convert(&ConversionRequest::new(category, from, to, raw_input)).display()
}

// ============================================================================
// Categories without formulas
// ============================================================================

/// Length has units but no conversion table
pub fn convert_length(from: Option<Unit>, to: Option<Unit>, _value: f64) -> ConversionResult {
    tracing::trace!(?from, ?to, "no length formula");
    ConversionResult::Unsupported
}

/// Time has units but no conversion table
pub fn convert_time(from: Option<Unit>, to: Option<Unit>, _value: f64) -> ConversionResult {
    tracing::trace!(?from, ?to, "no time formula");
    ConversionResult::Unsupported
}

/// Volume has units but no conversion table
pub fn convert_volume(from: Option<Unit>, to: Option<Unit>, _value: f64) -> ConversionResult {
    tracing::trace!(?from, ?to, "no volume formula");
    ConversionResult::Unsupported
}
