//! Conversion categories
//!
//! The measurement domains offered by the form picker.

use serde::{Deserialize, Serialize};

/// A measurement domain grouping mutually convertible units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConversionCategory {
    Temperature,
    Length,
    Time,
    Volume,
    /// Nothing selected, or an unrecognized label
    None,
}

impl ConversionCategory {
    /// Categories offered to the user, in picker order
    pub const SELECTABLE: [ConversionCategory; 4] = [
        ConversionCategory::Temperature,
        ConversionCategory::Length,
        ConversionCategory::Time,
        ConversionCategory::Volume,
    ];

    /// Display label, as shown in the category picker
    pub fn label(&self) -> &'static str {
        match self {
            ConversionCategory::Temperature => "Temperature",
            ConversionCategory::Length => "Length",
            ConversionCategory::Time => "Time",
            ConversionCategory::Volume => "Volume",
            ConversionCategory::None => "",
        }
    }

    /// Resolve a picker label. Unknown labels map to `None`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Temperature" => ConversionCategory::Temperature,
            "Length" => ConversionCategory::Length,
            "Time" => ConversionCategory::Time,
            "Volume" => ConversionCategory::Volume,
            _ => ConversionCategory::None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, ConversionCategory::None)
    }
}

impl std::fmt::Display for ConversionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionCategory::None => f.write_str("none"),
            other => f.write_str(other.label()),
        }
    }
}

/// Resolve a category label (free-function form used by the presentation layer)
pub fn resolve_category(label: &str) -> ConversionCategory {
    ConversionCategory::from_label(label)
}
