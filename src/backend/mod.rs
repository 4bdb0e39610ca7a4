//! # Backend allocation core
//!
//! The two bookkeeping structures the code generator leans on while
//! emitting instructions:
//!
//! - [`RegisterPool`] - fixed table of machine registers with capability
//!   and availability tracking; answers acquire/release/reset requests.
//! - [`SymbolTable`] - ordered, append-only registry of named symbols with
//!   typed payloads; answers insert/lookup requests.
//!
//! Neither component calls the other. Both live in a [`CodegenContext`]
//! that is created at compilation start, passed by `&mut` into the code
//! generator, and dropped (or [`reset`](CodegenContext::reset)) at
//! compilation end - there are no process-wide globals here.
//!
//! ## Usage
//!
//! ```
//! use regsym::backend::{Capability, CodegenContext, SymbolKind, SymbolValue};
//!
//! # fn main() -> regsym::Result<()> {
//! let mut ctx = CodegenContext::new();
//!
//! let scratch = ctx.registers.acquire(Capability::GENERAL_PURPOSE)?;
//! ctx.symbols
//!     .insert("counter", SymbolKind::Integer, SymbolValue::Integer(0))?;
//!
//! // ... emit code ...
//!
//! ctx.registers.release(scratch);
//! assert_eq!(ctx.symbols.lookup("counter")?.kind(), SymbolKind::Integer);
//! # Ok(())
//! # }
//! ```

pub mod debug;
pub mod registers;
pub mod symbols;

pub use debug::{PoolReport, RegisterRow};
pub use registers::{
    Capability, Register, RegisterId, RegisterPool, RegisterState, NUM_REGISTERS,
};
pub use symbols::{FunctionSymbol, Symbol, SymbolId, SymbolKind, SymbolTable, SymbolValue};

/// Owned pair of register pool and symbol table for one compilation
///
/// Replaces what used to be two mutable globals. One context per
/// compilation; [`reset`](Self::reset) recycles it for the next unit.
#[derive(Debug, Clone, Default)]
pub struct CodegenContext {
    /// Machine register pool
    pub registers: RegisterPool,
    /// Flat symbol namespace of the current unit
    pub symbols: SymbolTable,
}

impl CodegenContext {
    /// Create a fresh context: full pool, empty table
    pub fn new() -> Self {
        CodegenContext {
            registers: RegisterPool::new(),
            symbols: SymbolTable::new(),
        }
    }

    /// Recycle the context for the next compilation unit
    ///
    /// Returns every non-reserved register to `Available` and drops all
    /// symbols.
    pub fn reset(&mut self) {
        self.registers.reset_all();
        self.symbols.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_recycles_both_components() {
        let mut ctx = CodegenContext::new();
        ctx.registers.acquire(Capability::GENERAL_PURPOSE).unwrap();
        ctx.symbols
            .insert("x", SymbolKind::Integer, SymbolValue::Integer(1))
            .unwrap();

        ctx.reset();

        assert_eq!(ctx.registers.allocated_count(), 0);
        assert!(ctx.symbols.is_empty());
    }
}
