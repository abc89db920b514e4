//! Unit pricing
//!
//! Normalises a variant's price to one kilogram, pound, litre or item so
//! shoppers can compare variants of different sizes.

use super::variant::Variant;
use crate::units::{UnitFamily, UnitResult, UnitSystem, VariantUnit};

/// Grams per kilogram
pub const G_PER_KG: f64 = 1000.0;
/// Grams per pound, matching the `lb` scale of the weight table
pub const G_PER_LB: f64 = 453.6;

fn is_imperial(variant: &Variant) -> UnitResult<bool> {
    Ok(variant.variant_unit.system()? == Some(UnitSystem::Imperial))
}

/// Number of pricing units in one variant, or `None` when the variant has
/// no positive unit value. Fails when the variant's scale is not in the
/// table.
pub fn unit_price_denominator(variant: &Variant) -> UnitResult<Option<f64>> {
    let imperial = is_imperial(variant)?;
    let Some(value) = variant.measured_value().filter(|v| *v > 0.0) else {
        return Ok(None);
    };

    let denominator = match variant.variant_unit {
        VariantUnit::Scaled {
            family: UnitFamily::Weight,
            ..
        } => {
            if imperial {
                value / G_PER_LB
            } else {
                value / G_PER_KG
            }
        }
        VariantUnit::Scaled {
            family: UnitFamily::Volume,
            ..
        } => value,
        VariantUnit::Items => value,
    };
    Ok(Some(denominator))
}

/// Unit the price is expressed per
pub fn unit_price_unit(variant: &Variant) -> UnitResult<String> {
    let unit = match variant.variant_unit {
        VariantUnit::Scaled {
            family: UnitFamily::Weight,
            ..
        } => {
            if is_imperial(variant)? {
                "lb"
            } else {
                "kg"
            }
        }
        VariantUnit::Scaled {
            family: UnitFamily::Volume,
            scale,
        } => {
            UnitFamily::Volume.lookup(scale)?;
            "L"
        }
        VariantUnit::Items => variant
            .variant_unit_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or("item"),
    };
    Ok(unit.to_string())
}

/// Price per pricing unit
pub fn unit_price(price: f64, variant: &Variant) -> UnitResult<Option<f64>> {
    Ok(unit_price_denominator(variant)?.map(|denominator| price / denominator))
}
