//! Unit scale tables and lookups
//!
//! Every variant measured by weight is stored in grams and every variant
//! measured by volume in litres. A scale is the multiplier from the base
//! unit to a display unit (1000 for kg, 0.001 for mL).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{UnitError, UnitResult};
use super::option_key::{VariantUnit, ITEMS_KEY};

/// Family of a measured quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitFamily {
    /// Base unit: gram
    Weight,
    /// Base unit: litre
    Volume,
}

/// Measurement system a display unit belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    Metric,
    Imperial,
}

/// One row of a scale table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitScale {
    pub scale: f64,
    pub name: &'static str,
    pub system: UnitSystem,
}

const fn unit(scale: f64, name: &'static str, system: UnitSystem) -> UnitScale {
    UnitScale {
        scale,
        name,
        system,
    }
}

// ============================================================================
// Scale Tables (ascending by scale)
// ============================================================================

static WEIGHT_SCALES: [UnitScale; 5] = [
    unit(1.0, "g", UnitSystem::Metric),
    unit(28.34952, "oz", UnitSystem::Imperial),
    unit(453.6, "lb", UnitSystem::Imperial),
    unit(1000.0, "kg", UnitSystem::Metric),
    unit(1_000_000.0, "T", UnitSystem::Metric),
];

static VOLUME_SCALES: [UnitScale; 3] = [
    unit(0.001, "mL", UnitSystem::Metric),
    unit(1.0, "L", UnitSystem::Metric),
    unit(1000.0, "kL", UnitSystem::Metric),
];

impl UnitFamily {
    /// All families, in option list order
    pub const ALL: [UnitFamily; 2] = [UnitFamily::Weight, UnitFamily::Volume];

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitFamily::Weight => "weight",
            UnitFamily::Volume => "volume",
        }
    }

    /// Human readable name used in option labels
    pub fn display_name(&self) -> &'static str {
        match self {
            UnitFamily::Weight => "Weight",
            UnitFamily::Volume => "Volume",
        }
    }

    /// The scale table for this family, ascending
    pub fn scales(&self) -> &'static [UnitScale] {
        match self {
            UnitFamily::Weight => &WEIGHT_SCALES,
            UnitFamily::Volume => &VOLUME_SCALES,
        }
    }

    /// Smallest scale in the table
    pub fn smallest_scale(&self) -> f64 {
        self.scales()[0].scale
    }

    /// Largest scale not exceeding `value`, or the smallest scale when
    /// `value` is below every entry (negative and NaN values included).
    pub fn scale_for(&self, value: f64) -> f64 {
        largest_not_exceeding(self.scales().iter(), value)
            .unwrap_or(self.smallest_scale())
    }

    /// Like [`scale_for`](Self::scale_for) but only considers scales of
    /// one unit system. Families without any scale in that system fall
    /// back to the unrestricted choice.
    pub fn scale_for_system(&self, value: f64, system: UnitSystem) -> f64 {
        let in_system = move || self.scales().iter().filter(move |u| u.system == system);

        match largest_not_exceeding(in_system(), value) {
            Some(scale) => scale,
            None => in_system()
                .next()
                .map_or_else(|| self.scale_for(value), |u| u.scale),
        }
    }

    /// Exact-match lookup of a table row. No tolerance is applied.
    pub fn lookup(&self, scale: f64) -> UnitResult<&'static UnitScale> {
        self.scales()
            .iter()
            .find(|u| u.scale == scale)
            .ok_or(UnitError::UnknownScale {
                family: *self,
                scale,
            })
    }

    pub fn unit_name(&self, scale: f64) -> UnitResult<&'static str> {
        Ok(self.lookup(scale)?.name)
    }

    pub fn unit_system(&self, scale: f64) -> UnitResult<UnitSystem> {
        Ok(self.lookup(scale)?.system)
    }
}

fn largest_not_exceeding<'a, I>(scales: I, value: f64) -> Option<f64>
where
    I: DoubleEndedIterator<Item = &'a UnitScale>,
{
    scales.rev().find(|u| value >= u.scale).map(|u| u.scale)
}

impl fmt::Display for UnitFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitFamily {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "weight" => Ok(UnitFamily::Weight),
            "volume" => Ok(UnitFamily::Volume),
            other => Err(UnitError::InvalidFamily(other.to_string())),
        }
    }
}

// ============================================================================
// Option List
// ============================================================================

/// A unit choice offered in the product form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionEntry {
    /// Label shown to the user, e.g. "Weight (kg)"
    pub label: String,
    /// Encoded key submitted by the form, e.g. "weight_1000"
    pub value: String,
}

// ============================================================================
// Public API (string-keyed, as received from forms)
// ============================================================================

/// Scale to display `value` with: the largest unit it still reads as
/// at least 1 in.
pub fn get_scale(value: f64, family: &str) -> UnitResult<f64> {
    Ok(family.parse::<UnitFamily>()?.scale_for(value))
}

/// Unit symbol for a scale that exactly matches a table entry
pub fn unit_name(scale: f64, family: &str) -> UnitResult<&'static str> {
    family.parse::<UnitFamily>()?.unit_name(scale)
}

/// All scales of a family, ascending
pub fn unit_scales(family: &str) -> UnitResult<Vec<f64>> {
    let family: UnitFamily = family.parse()?;
    Ok(family.scales().iter().map(|u| u.scale).collect())
}

/// The full unit option list: metric then imperial weights, volumes,
/// then the unit-less "Items" choice.
pub fn variant_unit_options() -> Vec<OptionEntry> {
    let mut options = Vec::new();

    for family in UnitFamily::ALL {
        for system in [UnitSystem::Metric, UnitSystem::Imperial] {
            for unit in family.scales().iter().filter(|u| u.system == system) {
                options.push(OptionEntry {
                    label: format!("{} ({})", family.display_name(), unit.name),
                    value: VariantUnit::Scaled {
                        family,
                        scale: unit.scale,
                    }
                    .key(),
                });
            }
        }
    }

    options.push(OptionEntry {
        label: "Items".to_string(),
        value: ITEMS_KEY.to_string(),
    });
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_scale_concrete_cases() {
        assert_eq!(get_scale(1.2, "weight"), Ok(1.0));
        assert_eq!(get_scale(1000.0, "weight"), Ok(1000.0));
        assert_eq!(get_scale(0.0012, "volume"), Ok(0.001));
        assert_eq!(get_scale(1001.0, "volume"), Ok(1000.0));
        assert_eq!(get_scale(0.4, "weight"), Ok(1.0));
    }

    #[test]
    fn test_get_scale_picks_largest_entry_not_exceeding_value() {
        assert_eq!(get_scale(28.34952, "weight"), Ok(28.34952));
        assert_eq!(get_scale(100.0, "weight"), Ok(28.34952));
        assert_eq!(get_scale(500.0, "weight"), Ok(453.6));
        assert_eq!(get_scale(999.999, "weight"), Ok(453.6));
        assert_eq!(get_scale(2_500_000.0, "weight"), Ok(1_000_000.0));
        assert_eq!(get_scale(1.0, "volume"), Ok(1.0));
        assert_eq!(get_scale(999.0, "volume"), Ok(1.0));
    }

    #[test]
    fn test_get_scale_below_smallest_falls_back_to_smallest() {
        assert_eq!(get_scale(0.0, "weight"), Ok(1.0));
        assert_eq!(get_scale(0.0, "volume"), Ok(0.001));
        assert_eq!(get_scale(0.0005, "volume"), Ok(0.001));
        assert_eq!(get_scale(-5.0, "weight"), Ok(1.0));
        assert_eq!(get_scale(f64::NAN, "volume"), Ok(0.001));
    }

    #[test]
    fn test_invalid_family() {
        assert_eq!(
            get_scale(1.0, "length"),
            Err(UnitError::InvalidFamily("length".to_string()))
        );
        assert_eq!(
            unit_name(1.0, "items"),
            Err(UnitError::InvalidFamily("items".to_string()))
        );
        assert!(matches!(
            unit_scales("Weight"),
            Err(UnitError::InvalidFamily(_))
        ));
    }

    #[test]
    fn test_unit_name() {
        assert_eq!(unit_name(1_000_000.0, "weight"), Ok("T"));
        assert_eq!(unit_name(0.001, "volume"), Ok("mL"));
        assert_eq!(unit_name(28.34952, "weight"), Ok("oz"));
        assert_eq!(unit_name(453.6, "weight"), Ok("lb"));
        assert_eq!(unit_name(1.0, "volume"), Ok("L"));
    }

    #[test]
    fn test_unit_name_requires_exact_scale() {
        assert_eq!(
            unit_name(453.6000001, "weight"),
            Err(UnitError::UnknownScale {
                family: UnitFamily::Weight,
                scale: 453.6000001,
            })
        );
        assert!(unit_name(28.3495, "weight").is_err());
        assert!(unit_name(1000.0, "weight").is_ok());
    }

    #[test]
    fn test_unit_name_accepts_every_selected_scale() {
        for family in UnitFamily::ALL {
            for value in [0.0, 0.0004, 0.5, 1.0, 27.0, 30.0, 454.0, 1200.0, 5e6] {
                let scale = family.scale_for(value);
                assert!(family.unit_name(scale).is_ok(), "{family} {value}");
            }
        }
    }

    #[test]
    fn test_unit_scales() {
        assert_eq!(
            unit_scales("weight"),
            Ok(vec![1.0, 28.34952, 453.6, 1000.0, 1_000_000.0])
        );
        assert_eq!(unit_scales("volume"), Ok(vec![0.001, 1.0, 1000.0]));
        assert_eq!(unit_scales("volume"), unit_scales("volume"));
    }

    #[test]
    fn test_scale_tables_ascending_positive_unique() {
        for family in UnitFamily::ALL {
            let scales = family.scales();
            assert!(scales.iter().all(|u| u.scale > 0.0));
            assert!(scales.windows(2).all(|w| w[0].scale < w[1].scale));
        }
    }

    #[test]
    fn test_scale_for_system() {
        let w = UnitFamily::Weight;
        assert_eq!(w.scale_for_system(1500.0, UnitSystem::Metric), 1000.0);
        assert_eq!(w.scale_for_system(500.0, UnitSystem::Metric), 1.0);
        assert_eq!(w.scale_for_system(500.0, UnitSystem::Imperial), 453.6);
        assert_eq!(w.scale_for_system(2000.0, UnitSystem::Imperial), 453.6);
        assert_eq!(w.scale_for_system(10.0, UnitSystem::Imperial), 28.34952);
        assert_eq!(
            UnitFamily::Volume.scale_for_system(2.0, UnitSystem::Imperial),
            1.0
        );
    }

    #[test]
    fn test_unit_system() {
        assert_eq!(
            UnitFamily::Weight.unit_system(28.34952),
            Ok(UnitSystem::Imperial)
        );
        assert_eq!(UnitFamily::Weight.unit_system(1000.0), Ok(UnitSystem::Metric));
        assert_eq!(UnitFamily::Volume.unit_system(1.0), Ok(UnitSystem::Metric));
    }

    #[test]
    fn test_variant_unit_options_order() {
        let options = variant_unit_options();
        let pairs: Vec<(&str, &str)> = options
            .iter()
            .map(|o| (o.label.as_str(), o.value.as_str()))
            .collect();

        assert_eq!(
            pairs,
            vec![
                ("Weight (g)", "weight_1"),
                ("Weight (kg)", "weight_1000"),
                ("Weight (T)", "weight_1000000"),
                ("Weight (oz)", "weight_28.34952"),
                ("Weight (lb)", "weight_453.6"),
                ("Volume (mL)", "volume_0.001"),
                ("Volume (L)", "volume_1"),
                ("Volume (kL)", "volume_1000"),
                ("Items", "items"),
            ]
        );
        assert_eq!(variant_unit_options(), options);
    }

    #[test]
    fn test_family_parse_and_display() {
        assert_eq!(" volume ".parse::<UnitFamily>(), Ok(UnitFamily::Volume));
        assert_eq!(UnitFamily::Weight.to_string(), "weight");
        assert_eq!(
            serde_json::to_string(&UnitFamily::Volume).unwrap(),
            "\"volume\""
        );
    }
}
