//! Purpose: Map-key variants of the temporal codecs.
//! Exports: `encode_key`, `decode_key`.
//! Role: Same per-type policies, but the output is a bare field-name string.
//! Invariants: JSON-level escaping belongs to the surrounding writer, not here.
//! Invariants: The empty string is the sentinel for a `null` key, both ways.

use crate::core::decode;
use crate::core::encode;
use crate::core::error::{Error, ErrorKind};
use crate::core::settings::JsonSettings;
use crate::core::temporal::{Temporal, TemporalKind};
use serde_json::Value;

pub fn encode_key(value: Option<&Temporal>, settings: &JsonSettings) -> Result<String, Error> {
    let Some(value) = value else {
        return Ok(String::new());
    };
    let encoded = encode::temporal(value, settings.policy(value.kind()), settings)?;
    match encoded {
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        other => Err(Error::new(ErrorKind::Internal)
            .with_message("temporal encoding produced a non-scalar value")
            .with_target(value.kind().name())
            .with_text(other.to_string())),
    }
}

pub fn decode_key(
    kind: TemporalKind,
    text: &str,
    settings: &JsonSettings,
) -> Result<Option<Temporal>, Error> {
    if text.is_empty() {
        return Ok(None);
    }
    let value = Value::String(text.to_string());
    decode::temporal(kind, &value, settings.policy(kind), settings).map(Some)
}
