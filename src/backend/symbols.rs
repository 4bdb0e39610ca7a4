//! # Symbol Table
//!
//! Ordered, append-only registry of named symbols with typed payloads.
//! The code generator records every identifier it emits code for here and
//! resolves names back to values, including function symbols that carry an
//! ordered parameter descriptor list for call-site arity checks.
//!
//! One flat namespace per compilation unit - no scoping or shadowing. The
//! owning `Vec` replaces the hand-rolled pointer chain this started as:
//! O(1) append, insertion order preserved by index, no manual memory
//! management.

use std::fmt;

use crate::error::{Error, Result};

/// Kind tag of a symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    /// Signed 32-bit integer value
    Integer,
    /// IEEE floating-point value
    Float,
    /// Function reference with an ordered parameter list
    Function,
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolKind::Integer => write!(f, "integer"),
            SymbolKind::Float => write!(f, "float"),
            SymbolKind::Function => write!(f, "function"),
        }
    }
}

/// Function payload: a call target plus its parameter descriptors
///
/// Parameter descriptors are small integers in declaration order, owned by
/// the function symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionSymbol {
    /// Label the call site jumps to
    pub target: String,
    /// Ordered parameter descriptors
    pub params: Vec<i32>,
}

impl FunctionSymbol {
    /// Build a function payload from a target label and parameter descriptors
    pub fn new(target: impl Into<String>, params: Vec<i32>) -> Self {
        FunctionSymbol {
            target: target.into(),
            params,
        }
    }

    /// Number of parameters the function takes
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// Typed symbol payload, exactly one shape per [`SymbolKind`]
#[derive(Debug, Clone, PartialEq)]
pub enum SymbolValue {
    /// Payload of an integer symbol
    Integer(i32),
    /// Payload of a float symbol
    Float(f64),
    /// Payload of a function symbol
    Function(FunctionSymbol),
}

impl SymbolValue {
    /// Kind this payload belongs to
    pub fn kind(&self) -> SymbolKind {
        match self {
            SymbolValue::Integer(_) => SymbolKind::Integer,
            SymbolValue::Float(_) => SymbolKind::Float,
            SymbolValue::Function(_) => SymbolKind::Function,
        }
    }
}

/// Handle to a symbol: its insertion index in the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolId(pub usize);

/// One named entry in the table
///
/// Immutable after insertion; the table never removes or rewrites a symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    name: String,
    value: SymbolValue,
}

impl Symbol {
    /// Identifier this symbol was registered under
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Kind tag
    pub fn kind(&self) -> SymbolKind {
        self.value.kind()
    }

    /// Typed payload
    pub fn value(&self) -> &SymbolValue {
        &self.value
    }
}

/// Append-only, insertion-ordered symbol registry
///
/// Names are not required to be unique; `lookup` resolves to the earliest
/// insertion. Uniqueness, where wanted, is the caller's policy to enforce
/// before inserting.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
}

impl SymbolTable {
    /// Create an empty table
    pub fn new() -> Self {
        SymbolTable {
            symbols: Vec::new(),
        }
    }

    /// Append a symbol at the tail of the table
    ///
    /// Rejects empty names and payloads whose shape disagrees with the
    /// declared `kind`. No uniqueness check is performed. Returns a handle
    /// to the new symbol so the caller can refer back to it immediately.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        kind: SymbolKind,
        value: SymbolValue,
    ) -> Result<SymbolId> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::EmptySymbolName);
        }
        if value.kind() != kind {
            return Err(Error::SymbolKindMismatch {
                kind,
                payload_kind: value.kind(),
            });
        }

        let id = SymbolId(self.symbols.len());
        tracing::trace!(name = %name, %kind, "inserted symbol");
        self.symbols.push(Symbol { name, value });
        Ok(id)
    }

    /// Resolve a name to the first symbol inserted under it
    ///
    /// The walk is in insertion order and the comparison is over the full
    /// length of both names, so "R1" never matches a stored "R10" and vice
    /// versa.
    pub fn lookup(&self, name: &str) -> Result<&Symbol> {
        self.symbols
            .iter()
            .find(|symbol| symbol.name == name)
            .ok_or_else(|| Error::SymbolNotFound {
                name: name.to_string(),
            })
    }

    /// Like [`lookup`](Self::lookup), but returning the symbol's handle
    pub fn lookup_id(&self, name: &str) -> Result<SymbolId> {
        self.symbols
            .iter()
            .position(|symbol| symbol.name == name)
            .map(SymbolId)
            .ok_or_else(|| Error::SymbolNotFound {
                name: name.to_string(),
            })
    }

    /// Fetch a symbol by handle
    pub fn symbol(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(id.0)
    }

    /// Drop every symbol and return the table to empty
    pub fn reset(&mut self) {
        self.symbols.clear();
        tracing::debug!("symbol table reset");
    }

    /// Number of symbols in the table
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// True if no symbol has been inserted
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterate over symbols in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }
}
