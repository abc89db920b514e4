//! Option keys
//!
//! The product form submits the chosen unit as a key: `"weight_1000"`,
//! `"volume_0.001"` or `"items"`. Scales are written with Rust's
//! shortest round-trip float formatting, so `28.34952` stays exact and
//! whole numbers carry no trailing `.0`.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::{UnitError, UnitResult};
use super::scale::{UnitFamily, UnitSystem};

/// Key of the unit-less items option
pub const ITEMS_KEY: &str = "items";

/// How a variant is measured
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum VariantUnit {
    /// Weight or volume, displayed at a fixed table scale
    Scaled { family: UnitFamily, scale: f64 },
    /// Counted items (bunches, boxes, dozens)
    Items,
}

impl VariantUnit {
    /// Decode a submitted option key.
    ///
    /// The scale must exactly match a table entry of the family.
    pub fn parse(key: &str) -> UnitResult<Self> {
        let key = key.trim();
        if key == ITEMS_KEY {
            return Ok(VariantUnit::Items);
        }

        let (family, scale) = key
            .split_once('_')
            .ok_or_else(|| UnitError::InvalidOptionKey(key.to_string()))?;
        let family: UnitFamily = family.parse()?;
        let scale: f64 = scale
            .parse()
            .map_err(|_| UnitError::InvalidOptionKey(key.to_string()))?;

        // Rejects scales that are not in the table
        family.lookup(scale)?;

        Ok(VariantUnit::Scaled { family, scale })
    }

    /// Encode as an option key
    pub fn key(&self) -> String {
        match self {
            VariantUnit::Scaled { family, scale } => format!("{}_{}", family.as_str(), scale),
            VariantUnit::Items => ITEMS_KEY.to_string(),
        }
    }

    pub fn family(&self) -> Option<UnitFamily> {
        match self {
            VariantUnit::Scaled { family, .. } => Some(*family),
            VariantUnit::Items => None,
        }
    }

    /// Unit system of the chosen scale; `None` for items. Fails when a
    /// hand-built `Scaled` carries a scale missing from the table.
    pub fn system(&self) -> UnitResult<Option<UnitSystem>> {
        match self {
            VariantUnit::Scaled { family, scale } => Ok(Some(family.unit_system(*scale)?)),
            VariantUnit::Items => Ok(None),
        }
    }
}

impl fmt::Display for VariantUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

impl FromStr for VariantUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
