//! Unit MCP Tools
//!
//! Request handlers behind the unit tools. Each returns a serializable
//! response or a message describing why the input was rejected.

use serde::Serialize;
use tracing::{debug, warn};

use crate::models::{
    option_value, option_value_name, unit_price, unit_price_denominator, unit_price_unit,
    OptionValue, Variant,
};
use crate::units::{self, OptionEntry, UnitError, UnitFamily, UnitSystem, VariantUnit};

fn rejected(tool: &str, err: UnitError) -> String {
    warn!(tool, error = %err, "rejected unit request");
    err.to_string()
}

/// Response for get_scale
#[derive(Debug, Serialize)]
pub struct GetScaleResponse {
    pub value: f64,
    pub family: UnitFamily,
    pub scale: f64,
    pub unit: &'static str,
    pub scaled_value: f64,
}

/// Response for get_unit_name
#[derive(Debug, Serialize)]
pub struct UnitNameResponse {
    pub family: UnitFamily,
    pub scale: f64,
    pub unit: &'static str,
    pub system: UnitSystem,
}

/// Response for unit_scales
#[derive(Debug, Serialize)]
pub struct UnitScalesResponse {
    pub family: UnitFamily,
    pub scales: Vec<f64>,
}

/// Response for variant_unit_options
#[derive(Debug, Serialize)]
pub struct VariantUnitOptionsResponse {
    pub options: Vec<OptionEntry>,
    pub total: usize,
}

/// Response for parse_option_key
#[derive(Debug, Serialize)]
pub struct ParseOptionKeyResponse {
    pub key: String,
    pub unit: VariantUnit,
    pub unit_name: Option<&'static str>,
    pub system: Option<UnitSystem>,
}

/// Response for option_value_name
#[derive(Debug, Serialize)]
pub struct OptionValueNameResponse {
    pub name: String,
    pub option_value: Option<OptionValue>,
}

/// Response for unit_price
#[derive(Debug, Serialize)]
pub struct UnitPriceResponse {
    pub price: f64,
    pub unit_price: Option<f64>,
    pub per: String,
    pub denominator: Option<f64>,
}

pub fn get_scale(value: f64, family: &str) -> Result<GetScaleResponse, String> {
    debug!(value, family, "get_scale");
    let family: UnitFamily = family.parse().map_err(|e| rejected("get_scale", e))?;
    let scale = family.scale_for(value);
    let unit = family
        .unit_name(scale)
        .map_err(|e| rejected("get_scale", e))?;

    Ok(GetScaleResponse {
        value,
        family,
        scale,
        unit,
        scaled_value: value / scale,
    })
}

pub fn get_unit_name(scale: f64, family: &str) -> Result<UnitNameResponse, String> {
    debug!(scale, family, "get_unit_name");
    let family: UnitFamily = family.parse().map_err(|e| rejected("get_unit_name", e))?;
    let entry = family
        .lookup(scale)
        .map_err(|e| rejected("get_unit_name", e))?;

    Ok(UnitNameResponse {
        family,
        scale: entry.scale,
        unit: entry.name,
        system: entry.system,
    })
}

pub fn unit_scales(family: &str) -> Result<UnitScalesResponse, String> {
    debug!(family, "unit_scales");
    let scales = units::unit_scales(family).map_err(|e| rejected("unit_scales", e))?;
    let family: UnitFamily = family.parse().map_err(|e| rejected("unit_scales", e))?;
    Ok(UnitScalesResponse { family, scales })
}

pub fn variant_unit_options() -> VariantUnitOptionsResponse {
    let options = units::variant_unit_options();
    VariantUnitOptionsResponse {
        total: options.len(),
        options,
    }
}

pub fn parse_option_key(key: &str) -> Result<ParseOptionKeyResponse, String> {
    debug!(key, "parse_option_key");
    let unit = VariantUnit::parse(key).map_err(|e| rejected("parse_option_key", e))?;
    let unit_name = match unit {
        VariantUnit::Scaled { family, scale } => Some(
            family
                .unit_name(scale)
                .map_err(|e| rejected("parse_option_key", e))?,
        ),
        VariantUnit::Items => None,
    };
    let system = unit.system().map_err(|e| rejected("parse_option_key", e))?;

    Ok(ParseOptionKeyResponse {
        key: unit.key(),
        unit,
        unit_name,
        system,
    })
}

pub fn get_option_value_name(variant: &Variant) -> Result<OptionValueNameResponse, String> {
    debug!(unit = %variant.variant_unit, "option_value_name");
    let name = option_value_name(variant).map_err(|e| rejected("option_value_name", e))?;
    let option_value = option_value(variant).map_err(|e| rejected("option_value_name", e))?;
    Ok(OptionValueNameResponse { name, option_value })
}

pub fn get_unit_price(price: f64, variant: &Variant) -> Result<UnitPriceResponse, String> {
    debug!(price, unit = %variant.variant_unit, "unit_price");
    Ok(UnitPriceResponse {
        price,
        unit_price: unit_price(price, variant).map_err(|e| rejected("unit_price", e))?,
        per: unit_price_unit(variant).map_err(|e| rejected("unit_price", e))?,
        denominator: unit_price_denominator(variant).map_err(|e| rejected("unit_price", e))?,
    })
}
