//! JSON shape of the result records exposed over HTTP.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use pulsesim_core::model::{
    OperationResult, TransactionPath, TransactionResult, TransactionType,
};

#[test]
fn operation_success_serializes_flat() {
    let r = OperationResult::succeeded("fast operation completed".into(), 137);
    let v = serde_json::to_value(&r).unwrap();

    assert_eq!(v["success"], true);
    assert_eq!(v["message"], "fast operation completed");
    assert_eq!(v["processing_time_ms"], 137);
    // RFC 3339 timestamp, UTC
    let ts = v["timestamp"].as_str().unwrap();
    assert!(ts.contains('T'));
}

#[test]
fn operation_failure_zeroes_processing_time() {
    let r = OperationResult::failed("simulated error during slow operation".into());
    let v = serde_json::to_value(&r).unwrap();

    assert_eq!(v["success"], false);
    assert_eq!(v["processing_time_ms"], 0);
}

#[test]
fn transaction_enums_serialize_lowercase() {
    let r = TransactionResult::succeeded(
        "0AF31B2C".into(),
        1500.0,
        TransactionType::Debit,
        TransactionPath::Premium,
        212,
        "debit transaction processed".into(),
    );
    let v = serde_json::to_value(&r).unwrap();

    assert_eq!(v["transaction_id"], "0AF31B2C");
    assert_eq!(v["transaction_type"], "debit");
    assert_eq!(v["path"], "premium");
    assert_eq!(v["amount"], 1500.0);
}

#[test]
fn transaction_failure_carries_unknown_and_error() {
    let r = TransactionResult::failed("0AF31B2C".into(), 250.0, "simulated error".into());
    let v = serde_json::to_value(&r).unwrap();

    assert_eq!(v["success"], false);
    assert_eq!(v["transaction_type"], "unknown");
    assert_eq!(v["path"], "error");
    assert_eq!(v["processing_time_ms"], 0);
    // id and amount survive the failure branch
    assert_eq!(v["transaction_id"], "0AF31B2C");
    assert_eq!(v["amount"], 250.0);
}

#[test]
fn label_strings_match_serde_rendering() {
    for (ty, s) in [
        (TransactionType::Debit, "debit"),
        (TransactionType::Credit, "credit"),
        (TransactionType::Unknown, "unknown"),
    ] {
        assert_eq!(ty.as_str(), s);
        assert_eq!(serde_json::to_value(ty).unwrap(), s);
    }
    for (path, s) in [
        (TransactionPath::Premium, "premium"),
        (TransactionPath::Standard, "standard"),
        (TransactionPath::Error, "error"),
    ] {
        assert_eq!(path.as_str(), s);
        assert_eq!(serde_json::to_value(path).unwrap(), s);
    }
}
