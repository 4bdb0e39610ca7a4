//! Diagnostic snapshots of the register pool
//!
//! Purely observational: capturing a report never changes pool state. The
//! text form is for terminal dumps while debugging code generation, the
//! JSON form for programmatic analysis.

use std::fmt::Write;

use serde::Serialize;

use crate::backend::registers::{RegisterPool, RegisterState};

/// One row of a pool report
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRow {
    /// Stable pool index
    pub id: u8,
    /// Display name
    pub name: String,
    /// Semantic alias, reserved registers only
    pub alias: Option<String>,
    /// Capability flags, rendered
    pub capabilities: String,
    /// Allocation state, rendered
    pub state: String,
}

/// Snapshot of pool occupancy at one point in code generation
#[derive(Debug, Clone, Serialize)]
pub struct PoolReport {
    /// Per-register rows in id order
    pub registers: Vec<RegisterRow>,
    /// Registers currently free
    pub available: usize,
    /// Registers currently handed out
    pub allocated: usize,
    /// Reserved registers
    pub reserved: usize,
    /// Peak simultaneous allocation since creation or reset
    pub high_water: usize,
}

impl PoolReport {
    /// Capture the current state of a pool
    pub fn capture(pool: &RegisterPool) -> Self {
        let registers = pool
            .iter()
            .map(|register| RegisterRow {
                id: register.id().0,
                name: register.name().to_string(),
                alias: register.alias().map(str::to_string),
                capabilities: register.capabilities().to_string(),
                state: register.state().to_string(),
            })
            .collect();

        PoolReport {
            registers,
            available: pool.available_count(),
            allocated: pool.allocated_count(),
            reserved: pool.reserved_count(),
            high_water: pool.allocated_high_water(),
        }
    }

    /// Format report as human-readable text
    pub fn format(&self) -> String {
        let mut output = String::new();

        writeln!(output, "REGISTER POOL REPORT").unwrap();
        writeln!(
            output,
            "available: {}  allocated: {}  reserved: {}  peak: {}",
            self.available, self.allocated, self.reserved, self.high_water
        )
        .unwrap();
        writeln!(
            output,
            "---------------------------------------------------"
        )
        .unwrap();
        writeln!(
            output,
            "{:>3} {:5} {:6} {:22} {:12}",
            "ID", "NAME", "ALIAS", "CAPABILITIES", "STATE"
        )
        .unwrap();

        for row in &self.registers {
            writeln!(
                output,
                "{:>3} {:5} {:6} {:22} {:12}",
                row.id,
                row.name,
                row.alias.as_deref().unwrap_or("-"),
                row.capabilities,
                row.state
            )
            .unwrap();
        }

        output
    }

    /// Get JSON representation for programmatic analysis
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// True if any register is still allocated
    ///
    /// Useful at compilation-unit boundaries, where a non-empty answer
    /// means some construct never released its scratch register.
    pub fn has_outstanding_allocations(&self) -> bool {
        self.allocated > 0
    }

    /// Names of the registers still allocated
    pub fn outstanding(&self) -> Vec<&str> {
        let allocated = RegisterState::Allocated.to_string();
        self.registers
            .iter()
            .filter(|row| row.state == allocated)
            .map(|row| row.name.as_str())
            .collect()
    }
}
