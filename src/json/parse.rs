//! Purpose: Provide the internal runtime JSON decode entrypoint for codec inputs.
//! Exports: `value_from_str`.
//! Role: Parser boundary that centralizes simd-json usage details.
//! Invariants: Raw-text codec entry points decode through this boundary.
//! Invariants: Input buffers are copied once to satisfy simd-json's mutable-slice API.
//! Notes: Error mapping is done by callsites so domain context stays explicit.

use serde_json::Value;

/// Decode one JSON value from text. Temporal inputs are scalars, but the
/// boundary accepts any value so callsites can report shape errors themselves.
pub(crate) fn value_from_str(input: &str) -> Result<Value, simd_json::Error> {
    let mut bytes = input.as_bytes().to_vec();
    simd_json::serde::from_slice(&mut bytes)
}
