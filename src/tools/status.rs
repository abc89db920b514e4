//! Variant Units Status Tool
//!
//! Provides runtime status information and usage instructions.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Unit tool instructions for AI assistants
pub const UNIT_INSTRUCTIONS: &str = r#"
# Variant Units Instructions

Product variants are stored in base units and displayed in scaled units.

| Family | Base unit | Display units |
|--------|-----------|---------------|
| weight | gram      | g, oz, lb, kg, T |
| volume | litre     | mL, L, kL |
| items  | count     | item name (bunch, box, dozen) |

## Choosing a unit for a product

1. Call `variant_unit_options` to get the 9 choices (label + key).
2. Submit the chosen key unchanged, e.g. `weight_1000` or `items`.
3. Call `parse_option_key` to check a key before saving it.

Keys are exact. `weight_453.6` is pounds; `weight_453.59` is rejected.

## Showing a quantity

- `get_scale` picks the largest unit the value still reads as 1 or more in
  (1200 g -> kg). Values below the smallest unit use the smallest unit.
- `get_unit_name` maps a scale back to its symbol.
- `option_value_name` renders a variant's name ("1.5kg", "2 bunches").
  Imperial products (oz/lb) always render in oz or lb.

## Unit prices

`unit_price` divides the variant price by the number of kg (metric weight),
lb (imperial weight), L (volume) or items in the variant. Variants without a
positive unit value have no unit price.
"#;

/// Runtime status of the Variant Units service
#[derive(Debug, Clone, Serialize)]
pub struct UnitsStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Scale tables loaded
    pub families: usize,
    pub unit_options: usize,

    /// Process information
    pub started_at: DateTime<Utc>,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    started_at: DateTime<Utc>,
}

impl StatusTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            started_at: Utc::now(),
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> UnitsStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        UnitsStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            families: crate::units::UnitFamily::ALL.len(),
            unit_options: crate::units::variant_unit_options().len(),
            started_at: self.started_at,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reports_tables_and_process() {
        let status = StatusTracker::new().get_status();
        assert_eq!(status.families, 2);
        assert_eq!(status.unit_options, 9);
        assert_eq!(status.process_id, std::process::id());
        assert_eq!(status.version, env!("CARGO_PKG_VERSION"));
    }
}
