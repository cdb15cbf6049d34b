//! Best-effort translation of the kit's opaque result payload.
//!
//! The kit's result shape is not a stable contract, so every probe lives in
//! this one function with an explicit priority order:
//!
//! 1. A `steps` array with named entries: `burn` supplies the source hash,
//!    `mint` the receive hash, and `approve` is a source-hash fallback when
//!    no burn hash was present.
//! 2. Flat fields: `txHash` as the source hash, then
//!    `sourceTxHash` / `sourceTransactionHash` / `fromTxHash`, and
//!    `receiveTxHash` / `receiveTransactionHash` / `toTxHash` /
//!    `destinationTxHash`.
//!
//! Absent fields yield `None`; a success with no receive hash is still a
//! success, and this never errors.

use serde_json::Value;

/// Transaction hashes recovered from a resolved bridge result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TxHashes {
    pub source: Option<String>,
    pub receive: Option<String>,
}

/// Extract source/receive transaction hashes from the opaque result.
pub fn extract_tx_hashes(result: &Value) -> TxHashes {
    if let Some(steps) = result.get("steps").and_then(Value::as_array) {
        return from_steps(steps);
    }

    tracing::debug!("no steps array in bridge result, probing flat fields");
    let mut hashes = TxHashes::default();

    if let Some(hash) = str_field(result, "txHash") {
        hashes.source = Some(hash);
    }
    for key in ["sourceTxHash", "sourceTransactionHash", "fromTxHash"] {
        if let Some(hash) = str_field(result, key) {
            hashes.source = Some(hash);
            break;
        }
    }
    for key in [
        "receiveTxHash",
        "receiveTransactionHash",
        "toTxHash",
        "destinationTxHash",
    ] {
        if let Some(hash) = str_field(result, key) {
            hashes.receive = Some(hash);
            break;
        }
    }

    hashes
}

fn from_steps(steps: &[Value]) -> TxHashes {
    let mut hashes = TxHashes::default();
    let mut approve_hash = None;

    for step in steps {
        let name = step.get("name").and_then(Value::as_str).unwrap_or("");
        let tx_hash = str_field(step, "txHash");
        tracing::debug!(step = name, has_hash = tx_hash.is_some(), "bridge result step");

        match (name, tx_hash) {
            ("burn", Some(hash)) => hashes.source = Some(hash),
            ("mint", Some(hash)) => hashes.receive = Some(hash),
            ("approve", Some(hash)) => approve_hash = Some(hash),
            _ => {}
        }
    }

    // The approval hash only stands in when the burn step gave nothing.
    if hashes.source.is_none() {
        hashes.source = approve_hash;
    }

    hashes
}

fn str_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
