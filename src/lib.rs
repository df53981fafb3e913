//! Purpose: Policy-driven JSON encoding and decoding for date/time values.
//! Exports: `api` (stable surface), `core` (policies, codecs, errors), `json` (decode seam).
//! Role: Library layered over serde_json values; owns no I/O and no process-wide state.
//! Invariants: Configuration objects are immutable once built and are shared by `Arc`.
//! Invariants: Core modules prefer explicit inputs/outputs over hidden state.
pub mod api;
pub mod core;
pub(crate) mod json;
