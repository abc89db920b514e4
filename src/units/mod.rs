//! Variant unit module
//!
//! Scale tables, unit names and the option keys used by product forms.

pub mod error;
pub mod option_key;
pub mod scale;

pub use error::{UnitError, UnitResult};
pub use option_key::{VariantUnit, ITEMS_KEY};
pub use scale::{
    get_scale, unit_name, unit_scales, variant_unit_options, OptionEntry, UnitFamily, UnitScale,
    UnitSystem,
};
