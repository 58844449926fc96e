//! Conversion form state
//!
//! Holds the current picker selections and text field. The result is never
//! cached: every read rebuilds a request and runs the conversion again.

use serde::Serialize;

use crate::conversion::{convert, ConversionRequest, ConversionResult};
use crate::units::{resolve_category, units_for, ConversionCategory, Unit, UnitResult};

/// Current selections of a single conversion form
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionForm {
    category: ConversionCategory,
    from: Option<Unit>,
    to: Option<Unit>,
    value: String,
}

/// Serializable view of the form, including the computed result
#[derive(Debug, Clone, Serialize)]
pub struct FormSnapshot {
    pub category: ConversionCategory,
    pub categories: Vec<&'static str>,
    pub units: Vec<&'static str>,
    pub from_unit: Option<&'static str>,
    pub to_unit: Option<&'static str>,
    pub value: String,
    pub result: ConversionResult,
    pub converted_value: String,
}

impl Default for ConversionForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversionForm {
    /// A fresh form: Temperature selected, no units, empty value
    pub fn new() -> Self {
        Self::with_category(ConversionCategory::Temperature)
    }

    pub fn with_category(category: ConversionCategory) -> Self {
        Self {
            category,
            from: None,
            to: None,
            value: String::new(),
        }
    }

    pub fn category(&self) -> ConversionCategory {
        self.category
    }

    pub fn from_unit(&self) -> Option<Unit> {
        self.from
    }

    pub fn to_unit(&self) -> Option<Unit> {
        self.to
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Select a category by label. Switching category clears both units.
    pub fn select_category(&mut self, label: &str) -> ConversionCategory {
        let category = resolve_category(label);
        if category != self.category {
            tracing::debug!("Category changed: {} -> {}", self.category, category);
            self.category = category;
            self.from = None;
            self.to = None;
        }
        category
    }

    /// Select the source unit. Must belong to the current category.
    pub fn select_from(&mut self, label: &str) -> UnitResult<Unit> {
        let unit = Unit::parse_in(self.category, label)?;
        self.from = Some(unit);
        Ok(unit)
    }

    /// Select the target unit. Must belong to the current category.
    pub fn select_to(&mut self, label: &str) -> UnitResult<Unit> {
        let unit = Unit::parse_in(self.category, label)?;
        self.to = Some(unit);
        Ok(unit)
    }

    pub fn set_value(&mut self, raw: impl Into<String>) {
        self.value = raw.into();
    }

    /// Units the pickers should offer for the current category
    pub fn available_units(&self) -> &'static [Unit] {
        units_for(self.category)
    }

    pub fn request(&self) -> ConversionRequest {
        ConversionRequest::new(self.category, self.from, self.to, self.value.clone())
    }

    pub fn result(&self) -> ConversionResult {
        convert(&self.request())
    }

    /// Text for the result label
    pub fn converted_value(&self) -> String {
        self.result().display()
    }

    pub fn snapshot(&self) -> FormSnapshot {
        let result = self.result();
        FormSnapshot {
            category: self.category,
            categories: ConversionCategory::SELECTABLE.iter().map(|c| c.label()).collect(),
            units: self.available_units().iter().map(Unit::as_str).collect(),
            from_unit: self.from.map(|u| u.as_str()),
            to_unit: self.to.map(|u| u.as_str()),
            value: self.value.clone(),
            result,
            converted_value: result.display(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::UnitError;

    #[test]
    fn test_new_form_defaults() {
        let form = ConversionForm::new();
        assert_eq!(form.category(), ConversionCategory::Temperature);
        assert_eq!(form.from_unit(), None);
        assert_eq!(form.to_unit(), None);
        assert_eq!(form.value(), "");
        assert_eq!(form.available_units().len(), 3);
        // No units picked yet: temperature falls back to zero
        assert_eq!(form.converted_value(), "0.0");
    }

    #[test]
    fn test_temperature_conversion_through_form() {
        let mut form = ConversionForm::new();
        form.select_from("celsius").unwrap();
        form.select_to("fahrenheit").unwrap();
        form.set_value("100");
        assert_eq!(form.converted_value(), "212.0");

        // Recomputed on every read
        form.set_value("0");
        assert_eq!(form.converted_value(), "32.0");
        form.select_to("kelvin").unwrap();
        assert_eq!(form.converted_value(), "273.15");
    }

    #[test]
    fn test_switching_category_clears_units() {
        let mut form = ConversionForm::new();
        form.select_from("celsius").unwrap();
        form.select_to("kelvin").unwrap();
        form.set_value("10");

        assert_eq!(form.select_category("Length"), ConversionCategory::Length);
        assert_eq!(form.from_unit(), None);
        assert_eq!(form.to_unit(), None);
        assert_eq!(form.value(), "10");
        assert_eq!(form.converted_value(), "");
    }

    #[test]
    fn test_reselecting_same_category_keeps_units() {
        let mut form = ConversionForm::new();
        form.select_from("kelvin").unwrap();
        form.select_category("Temperature");
        assert_eq!(form.from_unit().map(|u| u.as_str()), Some("kelvin"));
    }

    #[test]
    fn test_rejects_unit_from_other_category() {
        let mut form = ConversionForm::new();
        let err = form.select_from("meters").unwrap_err();
        assert!(matches!(err, UnitError::NotInCategory { .. }));
        assert_eq!(form.from_unit(), None);

        let err = form.select_to("parsecs").unwrap_err();
        assert_eq!(err, UnitError::UnknownUnit("parsecs".to_string()));
    }

    #[test]
    fn test_unknown_category_has_no_units() {
        let mut form = ConversionForm::new();
        assert_eq!(form.select_category("Bogus"), ConversionCategory::None);
        assert!(form.available_units().is_empty());
        assert!(form.select_from("celsius").is_err());
        assert_eq!(form.converted_value(), "");
    }

    #[test]
    fn test_snapshot() {
        let mut form = ConversionForm::with_category(ConversionCategory::Volume);
        form.select_from("cups").unwrap();
        form.set_value("2");
        let snap = form.snapshot();
        assert_eq!(snap.category, ConversionCategory::Volume);
        assert_eq!(snap.categories, vec!["Temperature", "Length", "Time", "Volume"]);
        assert_eq!(snap.units, vec!["cups", "gallons", "liters", "milliliters", "pints"]);
        assert_eq!(snap.from_unit, Some("cups"));
        assert_eq!(snap.to_unit, None);
        assert_eq!(snap.result, ConversionResult::Unsupported);
        assert_eq!(snap.converted_value, "");
    }
}
