//! Conversion Status Tool
//!
//! Provides runtime status information and usage instructions for the service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::units::ConversionCategory;

/// Usage instructions for AI assistants
pub const CONVERSION_INSTRUCTIONS: &str = r#"
# Conversion Instructions

This guide explains how to convert values with the Conversion tools.

## Overview

A conversion needs four inputs:
1. **Category** - one of `Temperature`, `Length`, `Time`, `Volume` (exact, capitalized)
2. **From unit** - a unit of that category
3. **To unit** - a unit of that category
4. **Value** - a decimal number as text, e.g. `"12.5"`

Call `list_categories` to see each category with its units in display order.

| Category | Units |
|----------|-------|
| Temperature | celsius, fahrenheit, kelvin |
| Length | meters, centimeters, feet, miles, yards |
| Time | days, hours, minutes, seconds |
| Volume | cups, gallons, liters, milliliters, pints |

---

## One-shot conversions

**Tool:** `convert`

```json
{"category": "Temperature", "from_unit": "celsius", "to_unit": "fahrenheit", "value": "100"}
```

Returns `converted_value: "212.0"`.

### What to expect

- Only **Temperature** has formulas. Length, Time and Volume return
  `supported: false` and an empty `converted_value`. This is not a zero.
- A value that is not a number (`"abc"`, `""`, `"12,5"`) is converted as `0`.
- Converting a temperature unit to itself (e.g. celsius to celsius) returns
  `0.0`, not the input.
- An unrecognized category returns no units and an empty result.

---

## Using the form

The session keeps one form, like the on-screen converter:

1. `update_form` with `category` - switching category clears both units
2. `update_form` with `from_unit`, `to_unit` - must belong to the current category
3. `update_form` with `value`
4. Read `converted_value` from the returned snapshot, or call `get_form`

Fields left out of `update_form` keep their current value. A unit from a
different category is rejected and the form is left untouched.
`reset_form` starts over on the configured default category.
"#;

/// Runtime status of the conversion service
#[derive(Debug, Clone, Serialize)]
pub struct ConversionStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Category new forms start on
    pub default_category: ConversionCategory,
    /// Conversions served since startup
    pub conversions: u64,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    default_category: ConversionCategory,
    conversions: u64,
}

impl StatusTracker {
    /// Create a new status tracker
    pub fn new(default_category: ConversionCategory) -> Self {
        Self {
            start_time: Instant::now(),
            default_category,
            conversions: 0,
        }
    }

    /// Count a served conversion
    pub fn record_conversion(&mut self) {
        self.conversions += 1;
    }

    /// Get the current status
    pub fn get_status(&self) -> ConversionStatus {
        let build_info = BuildInfo::current();

        // Get process info
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        ConversionStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            default_category: self.default_category,
            conversions: self.conversions,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
