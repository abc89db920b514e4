//! Variant Units Library
//!
//! Unit scaling, option keys, variant naming and unit pricing for food hub
//! product variants.

pub mod build_info;
pub mod mcp;
pub mod models;
pub mod tools;
pub mod units;
