//! Conversion MCP Tools
//!
//! Tools for browsing the unit taxonomy, converting values, and driving the
//! session's conversion form.

use serde::Serialize;

use crate::conversion::{convert, parse_numeric, ConversionRequest};
use crate::form::{ConversionForm, FormSnapshot};
use crate::units::{resolve_category, unit_labels_for, ConversionCategory};

/// A category with its ordered units
#[derive(Debug, Serialize)]
pub struct CategoryInfo {
    pub label: &'static str,
    pub units: Vec<&'static str>,
    pub supported: bool,
}

/// Response for list_categories
#[derive(Debug, Serialize)]
pub struct ListCategoriesResponse {
    pub categories: Vec<CategoryInfo>,
}

/// Response for list_units
#[derive(Debug, Serialize)]
pub struct ListUnitsResponse {
    pub requested: String,
    pub category: ConversionCategory,
    pub units: Vec<&'static str>,
}

/// Response for convert
#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub category: ConversionCategory,
    pub from_unit: Option<&'static str>,
    pub to_unit: Option<&'static str>,
    pub input: String,
    pub parsed_value: f64,
    pub supported: bool,
    pub result: Option<f64>,
    pub converted_value: String,
}

/// Changes to apply to the session form. Fields left out keep their value.
#[derive(Debug, Default)]
pub struct FormUpdate {
    pub category: Option<String>,
    pub from_unit: Option<String>,
    pub to_unit: Option<String>,
    pub value: Option<String>,
}

/// Whether a category has conversion formulas
fn has_formulas(category: ConversionCategory) -> bool {
    matches!(category, ConversionCategory::Temperature)
}

pub fn list_categories() -> ListCategoriesResponse {
    let categories = ConversionCategory::SELECTABLE
        .iter()
        .map(|&c| CategoryInfo {
            label: c.label(),
            units: unit_labels_for(c),
            supported: has_formulas(c),
        })
        .collect();

    ListCategoriesResponse { categories }
}

pub fn list_units(category: &str) -> ListUnitsResponse {
    let resolved = resolve_category(category);
    if resolved.is_none() {
        tracing::warn!("Unknown category label '{}', no units offered", category);
    }

    ListUnitsResponse {
        requested: category.to_string(),
        category: resolved,
        units: unit_labels_for(resolved),
    }
}

/// Convert a value given picker labels
///
/// Unknown unit labels are treated as unselected rather than rejected, so the
/// result matches what the form would show for the same input.
pub fn convert_value(category: &str, from_unit: &str, to_unit: &str, value: &str) -> ConvertResponse {
    let request = ConversionRequest::from_labels(category, from_unit, to_unit, value);

    for (label, unit) in [(from_unit, request.from), (to_unit, request.to)] {
        if unit.is_none() && !label.is_empty() {
            tracing::warn!("Unknown unit label '{}', treating as unselected", label);
        }
    }

    let result = convert(&request);

    ConvertResponse {
        category: request.category,
        from_unit: request.from.map(|u| u.as_str()),
        to_unit: request.to.map(|u| u.as_str()),
        input: request.raw_input.clone(),
        parsed_value: parse_numeric(&request.raw_input),
        supported: result.is_supported(),
        result: result.value(),
        converted_value: result.display(),
    }
}

/// Apply an update to the form and return its new state
///
/// The category is applied first so unit selections are checked against the
/// category being switched to. On error the form is left unchanged.
pub fn update_form(form: &mut ConversionForm, update: FormUpdate) -> Result<FormSnapshot, String> {
    let mut next = form.clone();

    if let Some(category) = update.category.as_deref() {
        next.select_category(category);
    }
    if let Some(label) = update.from_unit.as_deref() {
        next.select_from(label).map_err(|e| format!("Invalid from_unit: {}", e))?;
    }
    if let Some(label) = update.to_unit.as_deref() {
        next.select_to(label).map_err(|e| format!("Invalid to_unit: {}", e))?;
    }
    if let Some(value) = update.value {
        next.set_value(value);
    }

    *form = next;
    Ok(form.snapshot())
}

/// Reset the form to a fresh one on `category`
pub fn reset_form(form: &mut ConversionForm, category: ConversionCategory) -> FormSnapshot {
    *form = ConversionForm::with_category(category);
    form.snapshot()
}
