//! Purpose: Per-type formatting decisions and the host mapper's global toggles.
//! Exports: `Formatter`, `FormatPolicy`, `MapperFeatures`.
//! Role: Immutable policy bundle consulted by every encode/decode operation.
//! Invariants: Policies are copy-on-write; `with_*` returns a new value, never mutates.
//! Invariants: Timestamp mode always wins over an explicit formatter for output shape.
//! Invariants: Unset per-policy flags defer to `MapperFeatures` at use time.

use crate::core::zone::ZoneModifier;
use jiff::tz::TimeZone;

/// An explicit strftime pattern, optionally pinned to a fixed zone. A pinned
/// zone overrides the policy's zone modifier.
#[derive(Clone, Debug)]
pub struct Formatter {
    pattern: String,
    zone: Option<TimeZone>,
}

impl Formatter {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            zone: None,
        }
    }

    pub fn with_zone(mut self, zone: TimeZone) -> Self {
        self.zone = Some(zone);
        self
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn zone(&self) -> Option<&TimeZone> {
        self.zone.as_ref()
    }
}

/// Feature toggles owned by the host mapper and read at encode/decode time.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MapperFeatures {
    pub write_dates_as_timestamps: bool,
    pub write_date_timestamps_as_nanoseconds: bool,
    pub write_dates_with_zone_id: bool,
    pub write_dates_with_context_time_zone: bool,
    pub adjust_dates_to_context_time_zone: bool,
}

#[derive(Clone, Debug, Default)]
pub struct FormatPolicy {
    formatter: Option<Formatter>,
    zone: ZoneModifier,
    truncate_to_seconds: bool,
    use_nanoseconds: Option<bool>,
    use_timestamp: Option<bool>,
    write_zone_id: Option<bool>,
}

impl FormatPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = Some(formatter);
        self
    }

    pub fn with_zone_modifier(mut self, zone: ZoneModifier) -> Self {
        self.zone = zone;
        self
    }

    pub fn with_timestamp(mut self, enabled: bool) -> Self {
        self.use_timestamp = Some(enabled);
        self
    }

    pub fn with_nanoseconds(mut self, enabled: bool) -> Self {
        self.use_nanoseconds = Some(enabled);
        self
    }

    pub fn with_truncate_to_seconds(mut self, enabled: bool) -> Self {
        self.truncate_to_seconds = enabled;
        self
    }

    pub fn with_zone_id(mut self, enabled: bool) -> Self {
        self.write_zone_id = Some(enabled);
        self
    }

    pub fn formatter(&self) -> Option<&Formatter> {
        self.formatter.as_ref()
    }

    pub fn zone_modifier(&self) -> &ZoneModifier {
        &self.zone
    }

    pub fn truncate_to_seconds(&self) -> bool {
        self.truncate_to_seconds
    }

    pub fn effective_timestamp(&self, features: &MapperFeatures) -> bool {
        self.use_timestamp
            .unwrap_or(features.write_dates_as_timestamps)
    }

    pub fn effective_nanoseconds(&self, features: &MapperFeatures) -> bool {
        self.use_nanoseconds
            .unwrap_or(features.write_date_timestamps_as_nanoseconds)
    }

    pub fn effective_zone_id(&self, features: &MapperFeatures) -> bool {
        self.write_zone_id.unwrap_or(features.write_dates_with_zone_id)
    }

    /// Sub-second digits kept on the default (non-explicit-formatter) path:
    /// none when truncating to seconds, all nine in nanosecond mode,
    /// milliseconds otherwise.
    pub(crate) fn truncate_subsec(&self, nanos: i32, features: &MapperFeatures) -> i32 {
        if self.truncate_to_seconds {
            0
        } else if self.effective_nanoseconds(features) {
            nanos
        } else {
            nanos - nanos % 1_000_000
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FormatPolicy, Formatter, MapperFeatures};

    #[test]
    fn with_methods_leave_the_original_untouched() {
        let base = FormatPolicy::new();
        let derived = base.clone().with_timestamp(true).with_nanoseconds(true);
        let features = MapperFeatures::default();

        assert!(!base.effective_timestamp(&features));
        assert!(derived.effective_timestamp(&features));
        assert!(derived.effective_nanoseconds(&features));
    }

    #[test]
    fn unset_flags_defer_to_features() {
        let policy = FormatPolicy::new();
        let features = MapperFeatures {
            write_dates_as_timestamps: true,
            write_date_timestamps_as_nanoseconds: true,
            ..MapperFeatures::default()
        };
        assert!(policy.effective_timestamp(&features));
        assert!(policy.effective_nanoseconds(&features));

        let pinned = policy.with_timestamp(false);
        assert!(!pinned.effective_timestamp(&features));
    }

    #[test]
    fn subsec_truncation_rule() {
        let features = MapperFeatures::default();
        let default = FormatPolicy::new();
        assert_eq!(default.truncate_subsec(758_927_123, &features), 758_000_000);

        let seconds_only = FormatPolicy::new().with_truncate_to_seconds(true);
        assert_eq!(seconds_only.truncate_subsec(758_927_123, &features), 0);

        let nanos = FormatPolicy::new().with_nanoseconds(true);
        assert_eq!(nanos.truncate_subsec(758_927_123, &features), 758_927_123);
    }

    #[test]
    fn formatter_zone_is_optional() {
        let plain = Formatter::new("%Y-%m-%d");
        assert!(plain.zone().is_none());
        assert_eq!(plain.pattern(), "%Y-%m-%d");
    }
}
