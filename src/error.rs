//! Error types for the regsym backend core

use thiserror::Error;

use crate::backend::registers::Capability;
use crate::backend::symbols::SymbolKind;

/// Backend errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // Register pool errors
    /// No free register matches the requested capability set
    ///
    /// **Triggered by:** Every Available register failing the exact
    /// capability match, or every matching register already being Allocated
    /// **Recovery:** Classified as Recoverable - the code generator decides
    /// whether to spill or abort the current construct
    #[error("no available register matches capabilities {requested}")]
    RegisterUnavailable {
        /// Capability set the caller asked for
        requested: Capability,
    },

    // Symbol table errors
    /// Lookup walked the whole table without a full-name match
    ///
    /// **Triggered by:** Resolving an identifier that was never inserted
    /// **Recovery:** Classified as Recoverable - the caller decides whether
    /// this is an undeclared-identifier diagnostic
    #[error("symbol not found: {name}")]
    SymbolNotFound {
        /// Name that was looked up
        name: String,
    },

    /// Symbol insertion with an empty name
    #[error("symbol name must not be empty")]
    EmptySymbolName,

    /// Symbol payload shape does not match the declared kind
    ///
    /// **Triggered by:** Inserting with kind `Integer` but, say, a function
    /// payload
    #[error("symbol payload mismatch: declared kind {kind}, payload is {payload_kind}")]
    SymbolKindMismatch {
        /// Kind the caller declared
        kind: SymbolKind,
        /// Kind the payload actually has
        payload_kind: SymbolKind,
    },
}

/// Error severity classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Fatal error that cannot be recovered from
    Fatal,
    /// Recoverable error that may be retried
    Recoverable,
    /// Warning that doesn't prevent execution
    Warning,
}

impl Error {
    /// Classify error severity
    ///
    /// Register exhaustion and unresolved names are routine outcomes of
    /// code generation, not crashes. The insert contract violations are
    /// caller bugs, surfaced as typed warnings instead of the truncated-copy
    /// behavior they used to produce.
    pub fn classify(&self) -> ErrorSeverity {
        match self {
            Error::RegisterUnavailable { .. } => ErrorSeverity::Recoverable,
            Error::SymbolNotFound { .. } => ErrorSeverity::Recoverable,

            Error::EmptySymbolName => ErrorSeverity::Warning,
            Error::SymbolKindMismatch { .. } => ErrorSeverity::Warning,
        }
    }
}

/// Result type for backend operations
pub type Result<T> = std::result::Result<T, Error>;
