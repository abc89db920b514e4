//! Variant Units Tools module
//!
//! MCP tool implementations for the Variant Units service.

pub mod status;
pub mod units;
