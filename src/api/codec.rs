//! Purpose: Bind immutable settings to a ready-to-use codec object.
//! Exports: `TemporalCodec`, `Serialized`.
//! Role: The operational surface callers hold; one instance per configuration.
//! Invariants: A codec never mutates its settings; clones share them by `Arc`.
//! Invariants: Raw-text entry points decode through the crate JSON boundary.

use crate::core::decode;
use crate::core::encode;
use crate::core::error::{Error, ErrorKind};
use crate::core::keys;
use crate::core::policy::FormatPolicy;
use crate::core::settings::JsonSettings;
use crate::core::temporal::{OffsetDateTime, OffsetTime, Temporal, TemporalKind};
use jiff::civil::{Date, DateTime, Time};
use jiff::{Timestamp, Zoned};
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct TemporalCodec {
    settings: Arc<JsonSettings>,
}

impl TemporalCodec {
    pub fn new(settings: Arc<JsonSettings>) -> Self {
        Self { settings }
    }

    pub fn from_settings(settings: JsonSettings) -> Self {
        Self::new(Arc::new(settings))
    }

    pub fn settings(&self) -> &JsonSettings {
        &self.settings
    }

    pub fn encode(&self, value: &Temporal) -> Result<Value, Error> {
        encode::temporal(value, self.settings.policy(value.kind()), &self.settings)
    }

    /// Encode under a per-call policy instead of the installed one.
    pub fn encode_with(&self, value: &Temporal, policy: &FormatPolicy) -> Result<Value, Error> {
        encode::temporal(value, policy, &self.settings)
    }

    pub fn decode(&self, kind: TemporalKind, value: &Value) -> Result<Temporal, Error> {
        decode::temporal(kind, value, self.settings.policy(kind), &self.settings)
    }

    /// Decode under a per-call policy instead of the installed one.
    pub fn decode_with(
        &self,
        kind: TemporalKind,
        value: &Value,
        policy: &FormatPolicy,
    ) -> Result<Temporal, Error> {
        decode::temporal(kind, value, policy, &self.settings)
    }

    /// Decode straight from JSON text, e.g. one scalar lifted from a document.
    pub fn decode_json_text(&self, kind: TemporalKind, input: &str) -> Result<Temporal, Error> {
        let value = crate::json::parse::value_from_str(input).map_err(|err| {
            Error::new(ErrorKind::Format)
                .with_message("invalid JSON input")
                .with_target(kind.name())
                .with_text(input)
                .with_source(err)
        })?;
        self.decode(kind, &value)
    }

    pub fn encode_key(&self, value: Option<&Temporal>) -> Result<String, Error> {
        keys::encode_key(value, &self.settings)
    }

    pub fn decode_key(&self, kind: TemporalKind, text: &str) -> Result<Option<Temporal>, Error> {
        keys::decode_key(kind, text, &self.settings)
    }

    pub fn encode_instant(&self, value: Timestamp) -> Result<Value, Error> {
        encode::instant(value, self.settings.policy(TemporalKind::Instant), &self.settings)
    }

    pub fn encode_date(&self, value: Date) -> Result<Value, Error> {
        encode::date(value, self.settings.policy(TemporalKind::Date), &self.settings)
    }

    pub fn encode_time(&self, value: Time) -> Result<Value, Error> {
        encode::time(value, self.settings.policy(TemporalKind::Time), &self.settings)
    }

    pub fn encode_datetime(&self, value: DateTime) -> Result<Value, Error> {
        encode::datetime(value, self.settings.policy(TemporalKind::DateTime), &self.settings)
    }

    pub fn encode_offset_time(&self, value: OffsetTime) -> Result<Value, Error> {
        encode::offset_time(value, self.settings.policy(TemporalKind::OffsetTime), &self.settings)
    }

    pub fn encode_offset_datetime(&self, value: OffsetDateTime) -> Result<Value, Error> {
        encode::offset_datetime(
            value,
            self.settings.policy(TemporalKind::OffsetDateTime),
            &self.settings,
        )
    }

    pub fn encode_zoned(&self, value: &Zoned) -> Result<Value, Error> {
        encode::zoned(value, self.settings.policy(TemporalKind::Zoned), &self.settings)
    }

    pub fn decode_instant(&self, value: &Value) -> Result<Timestamp, Error> {
        decode::instant(value, self.settings.policy(TemporalKind::Instant), &self.settings)
    }

    pub fn decode_date(&self, value: &Value) -> Result<Date, Error> {
        decode::date(value, self.settings.policy(TemporalKind::Date), &self.settings)
    }

    pub fn decode_time(&self, value: &Value) -> Result<Time, Error> {
        decode::time(value, self.settings.policy(TemporalKind::Time), &self.settings)
    }

    pub fn decode_datetime(&self, value: &Value) -> Result<DateTime, Error> {
        decode::datetime(value, self.settings.policy(TemporalKind::DateTime), &self.settings)
    }

    pub fn decode_offset_time(&self, value: &Value) -> Result<OffsetTime, Error> {
        decode::offset_time(value, self.settings.policy(TemporalKind::OffsetTime), &self.settings)
    }

    pub fn decode_offset_datetime(&self, value: &Value) -> Result<OffsetDateTime, Error> {
        decode::offset_datetime(
            value,
            self.settings.policy(TemporalKind::OffsetDateTime),
            &self.settings,
        )
    }

    pub fn decode_zoned(&self, value: &Value) -> Result<Zoned, Error> {
        decode::zoned(value, self.settings.policy(TemporalKind::Zoned), &self.settings)
    }

    /// Wrap a value so it serializes through this codec inside any serde tree.
    pub fn serialized<'a>(&'a self, value: &'a Temporal) -> Serialized<'a> {
        Serialized { codec: self, value }
    }
}

pub struct Serialized<'a> {
    codec: &'a TemporalCodec,
    value: &'a Temporal,
}

impl Serialize for Serialized<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let encoded = self
            .codec
            .encode(self.value)
            .map_err(serde::ser::Error::custom)?;
        encoded.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::TemporalCodec;
    use crate::core::policy::FormatPolicy;
    use crate::core::settings::JsonSettings;
    use crate::core::temporal::{Temporal, TemporalKind};
    use jiff::Timestamp;
    use serde_json::json;

    fn codec() -> TemporalCodec {
        TemporalCodec::from_settings(JsonSettings::new())
    }

    #[test]
    fn decode_json_text_routes_through_the_json_boundary() {
        let out = codec()
            .decode_json_text(TemporalKind::Instant, r#""2023-12-10T19:22:40Z""#)
            .expect("decode");
        let expected: Timestamp = "2023-12-10T19:22:40Z".parse().expect("instant");
        assert_eq!(out, Temporal::Instant(expected));
    }

    #[test]
    fn decode_json_text_reports_malformed_json() {
        let err = codec()
            .decode_json_text(TemporalKind::Instant, r#"{"broken":"#)
            .expect_err("must fail");
        assert_eq!(err.target(), Some("Instant"));
    }

    #[test]
    fn per_call_policy_overrides_the_installed_one() {
        let codec = codec();
        let ts: Timestamp = "2023-12-10T19:22:40Z".parse().expect("instant");
        let value = Temporal::Instant(ts);

        let installed = codec.encode(&value).expect("encode");
        assert!(installed.is_string());

        let override_policy = FormatPolicy::new().with_timestamp(true);
        let overridden = codec.encode_with(&value, &override_policy).expect("encode");
        assert_eq!(overridden, json!(1_702_236_160_000i64));
    }

    #[test]
    fn serialized_adapter_emits_the_policy_output() {
        let codec = TemporalCodec::from_settings(JsonSettings::new().with_policy(
            TemporalKind::Instant,
            FormatPolicy::new().with_timestamp(true),
        ));
        let ts: Timestamp = "2023-12-10T19:22:40Z".parse().expect("instant");
        let value = Temporal::Instant(ts);
        let out = serde_json::to_value(codec.serialized(&value)).expect("serialize");
        assert_eq!(out, json!(1_702_236_160_000i64));
    }
}
