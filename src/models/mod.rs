//! Data models
//!
//! Product variants and the values derived from their units.

mod option_value;
mod unit_price;
mod variant;

pub use option_value::{option_value, option_value_name, pluralize, OptionValue};
pub use unit_price::{unit_price, unit_price_denominator, unit_price_unit, G_PER_KG, G_PER_LB};
pub use variant::Variant;
