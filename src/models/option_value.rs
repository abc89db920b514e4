//! Option value naming
//!
//! Renders the short name a variant is listed under: "1.5kg", "250mL",
//! "2 bunches", "500g organic".

use serde::Serialize;

use super::variant::Variant;
use crate::units::{UnitResult, VariantUnit};

/// Display amount and unit of a variant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionValue {
    pub value: f64,
    pub unit: String,
    /// Scaled units are written without a space ("1kg")
    pub scaled: bool,
}

impl OptionValue {
    pub fn to_display(&self) -> String {
        if self.scaled {
            format!("{}{}", self.value, self.unit)
        } else {
            format!("{} {}", self.value, self.unit)
        }
    }
}

/// Amount and unit to show for a variant.
///
/// Weights and volumes are shown in the largest unit of the variant's own
/// unit system that keeps the amount at 1 or more, truncated to two
/// decimal places. Returns `None` when there is no unit value, or when an
/// item variant has no item name.
pub fn option_value(variant: &Variant) -> UnitResult<Option<OptionValue>> {
    let Some(unit_value) = variant.measured_value() else {
        return Ok(None);
    };

    match variant.variant_unit {
        VariantUnit::Scaled { family, scale } => {
            let system = family.unit_system(scale)?;
            let scale = family.scale_for_system(unit_value, system);
            let unit = family.unit_name(scale)?;
            Ok(Some(OptionValue {
                value: truncate_hundredths(unit_value / scale),
                unit: unit.to_string(),
                scaled: true,
            }))
        }
        VariantUnit::Items => Ok(variant
            .variant_unit_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| OptionValue {
                value: unit_value,
                unit: pluralize(name, unit_value),
                scaled: false,
            })),
    }
}

/// Full option value name: amount with unit, then the description.
pub fn option_value_name(variant: &Variant) -> UnitResult<String> {
    let mut fields = Vec::new();

    if let Some(value) = option_value(variant)? {
        fields.push(value.to_display());
    }
    if let Some(description) = variant.unit_description.as_deref().map(str::trim) {
        if !description.is_empty() {
            fields.push(description.to_string());
        }
    }

    Ok(fields.join(" "))
}

/// English plural of an item noun for `count` items
pub fn pluralize(name: &str, count: f64) -> String {
    if count == 1.0 || name.ends_with('s') {
        return name.to_string();
    }

    let lower = name.to_lowercase();
    if ["ch", "sh", "x", "z"].iter().any(|suffix| lower.ends_with(suffix)) {
        format!("{}es", name)
    } else {
        format!("{}s", name)
    }
}

/// Truncate (not round) to two decimals, working on the shortest decimal
/// that round-trips `value`.
fn truncate_hundredths(value: f64) -> f64 {
    let text = value.to_string();
    match text.split_once('.') {
        Some((whole, fraction)) if fraction.len() > 2 => format!("{}.{}", whole, &fraction[..2])
            .parse()
            .unwrap_or(value),
        _ => value,
    }
}
