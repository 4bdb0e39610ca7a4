//! # regsym - Register Pool and Symbol Table Core
//!
//! The allocation substrate of a small assembler backend. It answers the
//! two questions a code generator asks repeatedly:
//!
//! - *"give me a free machine register matching these capabilities"* -
//!   [`RegisterPool::acquire`]
//! - *"what value is bound to this identifier"* - [`SymbolTable::lookup`]
//!
//! ## Quick Start
//!
//! ```rust
//! use regsym::{Capability, CodegenContext, FunctionSymbol, SymbolKind, SymbolValue};
//!
//! # fn main() -> regsym::Result<()> {
//! let mut ctx = CodegenContext::new();
//!
//! // Grab a general-purpose scratch register.
//! let reg = ctx.registers.acquire(Capability::GENERAL_PURPOSE)?;
//! assert_eq!(ctx.registers.register(reg).unwrap().name(), "R0");
//!
//! // Record a function symbol with its parameter descriptors.
//! ctx.symbols.insert(
//!     "main",
//!     SymbolKind::Function,
//!     SymbolValue::Function(FunctionSymbol::new("fn_main", vec![1, 2])),
//! )?;
//!
//! let sym = ctx.symbols.lookup("main")?;
//! assert_eq!(sym.kind(), SymbolKind::Function);
//!
//! // Hand the register back when the construct is done.
//! ctx.registers.release(reg);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Code generator ──acquire/release──▶ RegisterPool   (16 fixed registers)
//!        └────────insert/lookup─────▶ SymbolTable    (append-only, ordered)
//! ```
//!
//! The machine model has 16 registers: R0-R10 are general purpose
//! ({general, integer, float}); R11-R15 carry semantic aliases (CR, SR,
//! DR, BP, SP) and are reserved - they never enter allocation traffic.
//!
//! ## Error Handling
//!
//! Register exhaustion and unresolved names are routine compilation
//! outcomes, so every expected failure comes back as a typed
//! [`Error`] value, never a panic. [`Error::classify`] separates
//! recoverable outcomes from caller contract violations.
//!
//! ## Concurrency
//!
//! Single-threaded by design: all mutating operations take `&mut self`,
//! which already gives the one-writer discipline the check-then-set scan
//! in `acquire` needs. Wrap the context in a mutex if compilation units
//! ever run concurrently.

/// Version of the regsym crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod backend;
pub mod error;

// Re-export main types
pub use backend::{
    Capability, CodegenContext, FunctionSymbol, PoolReport, Register, RegisterId, RegisterPool,
    RegisterState, Symbol, SymbolId, SymbolKind, SymbolTable, SymbolValue, NUM_REGISTERS,
};
pub use error::{Error, ErrorSeverity, Result};
