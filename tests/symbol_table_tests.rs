//! Integration tests for symbol table insert/lookup scenarios

use regsym::{Error, ErrorSeverity, FunctionSymbol, SymbolKind, SymbolTable, SymbolValue};

// ====================
// Round trips
// ====================

#[test]
fn test_insert_two_values_lookup_each() {
    let mut table = SymbolTable::new();
    table
        .insert("x", SymbolKind::Integer, SymbolValue::Integer(42))
        .unwrap();
    table
        .insert("y", SymbolKind::Integer, SymbolValue::Integer(7))
        .unwrap();

    assert_eq!(table.lookup("x").unwrap().value(), &SymbolValue::Integer(42));
    assert_eq!(table.lookup("y").unwrap().value(), &SymbolValue::Integer(7));

    let err = table.lookup("z").unwrap_err();
    assert_eq!(
        err,
        Error::SymbolNotFound {
            name: "z".to_string()
        }
    );
    assert_eq!(err.classify(), ErrorSeverity::Recoverable);
}

#[test]
fn test_float_payload_round_trips() {
    let mut table = SymbolTable::new();
    table
        .insert("pi", SymbolKind::Float, SymbolValue::Float(3.14159))
        .unwrap();
    assert_eq!(
        table.lookup("pi").unwrap().value(),
        &SymbolValue::Float(3.14159)
    );
}

#[test]
fn test_function_symbol_round_trips_with_ordered_params() {
    let mut table = SymbolTable::new();
    table
        .insert(
            "add",
            SymbolKind::Function,
            SymbolValue::Function(FunctionSymbol::new("fn_add", vec![1, 2])),
        )
        .unwrap();

    let sym = table.lookup("add").unwrap();
    assert_eq!(sym.kind(), SymbolKind::Function);
    let SymbolValue::Function(func) = sym.value() else {
        panic!("expected function payload");
    };
    assert_eq!(func.params, vec![1, 2]);
}

// ====================
// Name comparison
// ====================

#[test]
fn test_prefix_names_never_cross_match() {
    let mut table = SymbolTable::new();
    table
        .insert("R1", SymbolKind::Integer, SymbolValue::Integer(1))
        .unwrap();
    table
        .insert("R10", SymbolKind::Integer, SymbolValue::Integer(10))
        .unwrap();

    // Full-length comparison both directions: each name resolves to its
    // own record, never to the other's prefix/superstring.
    assert_eq!(table.lookup("R1").unwrap().value(), &SymbolValue::Integer(1));
    assert_eq!(
        table.lookup("R10").unwrap().value(),
        &SymbolValue::Integer(10)
    );
    assert!(table.lookup("R100").is_err());
    assert!(table.lookup("R").is_err());
}

#[test]
fn test_insertion_order_wins_for_duplicates() {
    let mut table = SymbolTable::new();
    table
        .insert("tmp", SymbolKind::Integer, SymbolValue::Integer(1))
        .unwrap();
    table
        .insert("tmp", SymbolKind::Float, SymbolValue::Float(2.0))
        .unwrap();

    // The table does not police uniqueness; lookup walks in insertion
    // order and takes the first match.
    assert_eq!(table.lookup("tmp").unwrap().kind(), SymbolKind::Integer);
}

// ====================
// Validation and reset
// ====================

#[test]
fn test_contract_violations_are_typed_warnings() {
    let mut table = SymbolTable::new();

    let empty = table
        .insert("", SymbolKind::Integer, SymbolValue::Integer(0))
        .unwrap_err();
    assert_eq!(empty, Error::EmptySymbolName);
    assert_eq!(empty.classify(), ErrorSeverity::Warning);

    let mismatch = table
        .insert(
            "f",
            SymbolKind::Function,
            SymbolValue::Integer(5),
        )
        .unwrap_err();
    assert_eq!(
        mismatch,
        Error::SymbolKindMismatch {
            kind: SymbolKind::Function,
            payload_kind: SymbolKind::Integer,
        }
    );
    assert_eq!(mismatch.classify(), ErrorSeverity::Warning);

    // Nothing was appended by the rejected inserts.
    assert!(table.is_empty());
}

#[test]
fn test_reset_then_reuse_across_units() {
    let mut table = SymbolTable::new();
    table
        .insert("unit1_sym", SymbolKind::Integer, SymbolValue::Integer(1))
        .unwrap();
    table.reset();

    table
        .insert("unit2_sym", SymbolKind::Integer, SymbolValue::Integer(2))
        .unwrap();
    assert_eq!(table.len(), 1);
    assert!(table.lookup("unit1_sym").is_err());
    assert!(table.lookup("unit2_sym").is_ok());
}

#[test]
fn test_iteration_preserves_insertion_order() {
    let mut table = SymbolTable::new();
    for (i, name) in ["a", "b", "c"].into_iter().enumerate() {
        table
            .insert(name, SymbolKind::Integer, SymbolValue::Integer(i as i32))
            .unwrap();
    }
    let names: Vec<_> = table.iter().map(|s| s.name().to_string()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}
