//! Status Tool
//!
//! Runtime status of the converter service, plus usage instructions for
//! AI assistants.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Usage instructions for AI assistants
pub const CONVERTER_INSTRUCTIONS: &str = r#"
# Shrekdroid Conversion Instructions

Every category has one base unit, the **Shrek**. Each unit stores how many of
it make one Shrek, so a conversion is a single multiplication or division.

## Categories

Call `list_categories`, then `list_units` with a category name to see the
units and their factors. Names are matched case-insensitively.

## One-off conversions

`convert` takes `category`, `unit`, `amount` and `direction`:
- `to_unit`: the amount is in Shreks, the result is in the unit
- `to_base`: the amount is in the unit, the result is in Shreks

Example: 1 Shrek in Minutes → `95.000000 min`. 190 Minutes → `2.000000 Shreks`.

`convert_between` converts between two units of the same category, for
example Meters to Centimeters.

## Session workflow

The session remembers a selected category and unit:
1. `select_category` (the unit resets to the category's first unit)
2. `select_unit`
3. `toggle_shrek_mode` to switch between entering Shreks and entering units
4. `session_convert` with the amount

`get_session` shows the current selection and the input hint.

## Notes

- Amounts must be plain numbers (`12`, `0.5`, `-3e2`). Anything else is
  reported as an error.
- Results use a fixed number of decimals and `.` as decimal separator.
- Miles and Meters share the symbol `m`; refer to units by name.
"#;

/// Runtime status of the converter service
#[derive(Debug, Clone, Serialize)]
pub struct ConverterStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Catalog information
    pub categories: usize,
    pub units: usize,

    /// Process information
    pub started_at: String,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    started_at: chrono::DateTime<chrono::Utc>,
    categories: usize,
    units: usize,
}

impl StatusTracker {
    pub fn new(categories: usize, units: usize) -> Self {
        Self {
            start_time: Instant::now(),
            started_at: chrono::Utc::now(),
            categories,
            units,
        }
    }

    pub fn get_status(&self) -> ConverterStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        ConverterStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            categories: self.categories,
            units: self.units,
            started_at: self.started_at.to_rfc3339(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
