//! Variant model
//!
//! The unit-related fields of a product variant.

use serde::Serialize;

use crate::units::{UnitResult, VariantUnit};

/// A sellable variant of a product
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Variant {
    /// Amount in base units: grams, litres or item count
    pub unit_value: Option<f64>,
    /// Free text shown after the amount (e.g. "bag", "organic")
    pub unit_description: Option<String>,
    /// How the product is measured
    pub variant_unit: VariantUnit,
    /// Item noun for counted products (e.g. "bunch")
    pub variant_unit_name: Option<String>,
}

impl Variant {
    /// Build a variant from a submitted option key
    pub fn from_option_key(
        key: &str,
        unit_value: Option<f64>,
        unit_description: Option<String>,
        variant_unit_name: Option<String>,
    ) -> UnitResult<Self> {
        Ok(Self {
            unit_value,
            unit_description,
            variant_unit: VariantUnit::parse(key)?,
            variant_unit_name,
        })
    }

    /// Unit value if present and usable for arithmetic
    pub fn measured_value(&self) -> Option<f64> {
        self.unit_value.filter(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{UnitError, UnitFamily};

    #[test]
    fn test_from_option_key() {
        let variant = Variant::from_option_key("weight_1000", Some(1500.0), None, None).unwrap();
        assert_eq!(
            variant.variant_unit,
            VariantUnit::Scaled {
                family: UnitFamily::Weight,
                scale: 1000.0
            }
        );
        assert_eq!(variant.measured_value(), Some(1500.0));
    }

    #[test]
    fn test_from_option_key_rejects_unknown_scale() {
        let result = Variant::from_option_key("volume_2", Some(1.0), None, None);
        assert!(matches!(result, Err(UnitError::UnknownScale { .. })));
    }

    #[test]
    fn test_measured_value_ignores_non_finite() {
        let variant = Variant::from_option_key("items", Some(f64::NAN), None, None).unwrap();
        assert_eq!(variant.measured_value(), None);
    }
}
