//! Purpose: Aggregate per-type policies, zone rewriting, and decode behavior.
//! Exports: `JsonSettings`, `WeirdValueHandler`.
//! Role: The one configuration object every codec operation reads from.
//! Invariants: Built once, never mutated in place; reconfiguration clones.
//! Invariants: Safe to share across threads behind `Arc` without locking.

use crate::core::policy::{FormatPolicy, MapperFeatures};
use crate::core::temporal::{Temporal, TemporalKind};
use crate::core::zone::ZoneModifier;
use jiff::tz::TimeZone;
use std::fmt;
use std::sync::Arc;

/// Caller-supplied recovery hook consulted when text input fails to parse.
/// Returning `None` (or a value of the wrong kind) declines recovery and the
/// original parse error propagates.
pub type WeirdValueHandler = Arc<dyn Fn(TemporalKind, &str) -> Option<Temporal> + Send + Sync>;

#[derive(Clone)]
pub struct JsonSettings {
    instant: FormatPolicy,
    date: FormatPolicy,
    time: FormatPolicy,
    datetime: FormatPolicy,
    offset_time: FormatPolicy,
    offset_datetime: FormatPolicy,
    zoned: FormatPolicy,
    features: MapperFeatures,
    context_zone: Option<TimeZone>,
    lenient: bool,
    weird_value: Option<WeirdValueHandler>,
}

impl JsonSettings {
    pub fn new() -> Self {
        Self {
            instant: FormatPolicy::new(),
            date: FormatPolicy::new(),
            time: FormatPolicy::new(),
            datetime: FormatPolicy::new(),
            offset_time: FormatPolicy::new(),
            offset_datetime: FormatPolicy::new(),
            zoned: FormatPolicy::new(),
            features: MapperFeatures::default(),
            context_zone: None,
            lenient: false,
            weird_value: None,
        }
    }

    /// Replace the policy for one temporal type.
    pub fn with_policy(mut self, kind: TemporalKind, policy: FormatPolicy) -> Self {
        *self.policy_slot(kind) = policy;
        self
    }

    /// Install one zone modifier uniformly across every per-type policy.
    pub fn with_zone_modifier(mut self, modifier: ZoneModifier) -> Self {
        for kind in ALL_KINDS {
            let slot = self.policy_slot(kind);
            *slot = slot.clone().with_zone_modifier(modifier.clone());
        }
        self
    }

    pub fn with_features(mut self, features: MapperFeatures) -> Self {
        self.features = features;
        self
    }

    pub fn with_context_zone(mut self, zone: TimeZone) -> Self {
        self.context_zone = Some(zone);
        self
    }

    pub fn with_lenient(mut self, lenient: bool) -> Self {
        self.lenient = lenient;
        self
    }

    pub fn with_weird_value_handler(mut self, handler: WeirdValueHandler) -> Self {
        self.weird_value = Some(handler);
        self
    }

    pub fn policy(&self, kind: TemporalKind) -> &FormatPolicy {
        match kind {
            TemporalKind::Instant => &self.instant,
            TemporalKind::Date => &self.date,
            TemporalKind::Time => &self.time,
            TemporalKind::DateTime => &self.datetime,
            TemporalKind::OffsetTime => &self.offset_time,
            TemporalKind::OffsetDateTime => &self.offset_datetime,
            TemporalKind::Zoned => &self.zoned,
        }
    }

    pub fn features(&self) -> &MapperFeatures {
        &self.features
    }

    pub fn context_zone(&self) -> Option<&TimeZone> {
        self.context_zone.as_ref()
    }

    pub fn lenient(&self) -> bool {
        self.lenient
    }

    pub fn weird_value_handler(&self) -> Option<&WeirdValueHandler> {
        self.weird_value.as_ref()
    }

    /// Context zone to encode in, when the write feature enables it.
    pub(crate) fn encode_context_zone(&self) -> Option<&TimeZone> {
        if self.features.write_dates_with_context_time_zone {
            self.context_zone.as_ref()
        } else {
            None
        }
    }

    /// Context zone to decode into, when the adjust feature enables it.
    pub(crate) fn decode_context_zone(&self) -> Option<&TimeZone> {
        if self.features.adjust_dates_to_context_time_zone {
            self.context_zone.as_ref()
        } else {
            None
        }
    }

    fn policy_slot(&mut self, kind: TemporalKind) -> &mut FormatPolicy {
        match kind {
            TemporalKind::Instant => &mut self.instant,
            TemporalKind::Date => &mut self.date,
            TemporalKind::Time => &mut self.time,
            TemporalKind::DateTime => &mut self.datetime,
            TemporalKind::OffsetTime => &mut self.offset_time,
            TemporalKind::OffsetDateTime => &mut self.offset_datetime,
            TemporalKind::Zoned => &mut self.zoned,
        }
    }
}

impl Default for JsonSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for JsonSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonSettings")
            .field("instant", &self.instant)
            .field("date", &self.date)
            .field("time", &self.time)
            .field("datetime", &self.datetime)
            .field("offset_time", &self.offset_time)
            .field("offset_datetime", &self.offset_datetime)
            .field("zoned", &self.zoned)
            .field("features", &self.features)
            .field("context_zone", &self.context_zone)
            .field("lenient", &self.lenient)
            .field("weird_value", &self.weird_value.as_ref().map(|_| "<handler>"))
            .finish()
    }
}

const ALL_KINDS: [TemporalKind; 7] = [
    TemporalKind::Instant,
    TemporalKind::Date,
    TemporalKind::Time,
    TemporalKind::DateTime,
    TemporalKind::OffsetTime,
    TemporalKind::OffsetDateTime,
    TemporalKind::Zoned,
];

#[cfg(test)]
mod tests {
    use super::JsonSettings;
    use crate::core::policy::{FormatPolicy, MapperFeatures};
    use crate::core::temporal::TemporalKind;
    use crate::core::zone::ZoneModifier;
    use jiff::tz::TimeZone;

    #[test]
    fn zone_modifier_applies_to_every_policy() {
        let settings = JsonSettings::new().with_zone_modifier(ZoneModifier::ConvertToUtc);
        for kind in super::ALL_KINDS {
            let zone = settings
                .policy(kind)
                .zone_modifier()
                .apply(&TimeZone::get("Asia/Singapore").expect("tzdb zone"));
            assert_eq!(zone, TimeZone::UTC, "kind {kind:?}");
        }
    }

    #[test]
    fn per_type_policy_replacement_is_scoped() {
        let settings = JsonSettings::new()
            .with_policy(TemporalKind::Instant, FormatPolicy::new().with_timestamp(true));
        let features = MapperFeatures::default();
        assert!(settings.policy(TemporalKind::Instant).effective_timestamp(&features));
        assert!(!settings.policy(TemporalKind::Zoned).effective_timestamp(&features));
    }

    #[test]
    fn context_zone_is_gated_by_features() {
        let zone = TimeZone::get("Asia/Singapore").expect("tzdb zone");
        let plain = JsonSettings::new().with_context_zone(zone.clone());
        assert!(plain.encode_context_zone().is_none());
        assert!(plain.decode_context_zone().is_none());

        let features = MapperFeatures {
            write_dates_with_context_time_zone: true,
            ..MapperFeatures::default()
        };
        let enabled = plain.with_features(features);
        assert!(enabled.encode_context_zone().is_some());
        assert!(enabled.decode_context_zone().is_none());
    }
}
