//! Purpose: Turn temporal values into JSON values under a format policy.
//! Exports: one encode operation per temporal type, plus the `temporal` dispatch.
//! Role: The write half of the codec core; owns the timestamp/text decision.
//! Invariants: Timestamp mode always yields a numeric form, never formatted text.
//! Invariants: Zone resolution and truncation are total; only formatter patterns
//! and out-of-range instants can fail.
//! Invariants: Nanosecond timestamps are decimal `seconds.nanoseconds` strings so
//! no precision is lost to floating point.

use crate::core::error::{Error, ErrorKind};
use crate::core::policy::{FormatPolicy, Formatter, MapperFeatures};
use crate::core::settings::JsonSettings;
use crate::core::temporal::{
    NANOS_PER_SECOND, OffsetDateTime, OffsetTime, Temporal, format_offset, nanos_of_day,
};
use jiff::civil::{Date, DateTime, Time};
use jiff::fmt::strtime::BrokenDownTime;
use jiff::tz::{Offset, TimeZone};
use jiff::{Timestamp, Zoned};
use serde_json::Value;

pub fn temporal(value: &Temporal, policy: &FormatPolicy, settings: &JsonSettings) -> Result<Value, Error> {
    match value {
        Temporal::Instant(v) => instant(*v, policy, settings),
        Temporal::Date(v) => date(*v, policy, settings),
        Temporal::Time(v) => time(*v, policy, settings),
        Temporal::DateTime(v) => datetime(*v, policy, settings),
        Temporal::OffsetTime(v) => offset_time(*v, policy, settings),
        Temporal::OffsetDateTime(v) => offset_datetime(*v, policy, settings),
        Temporal::Zoned(v) => zoned(v, policy, settings),
    }
}

pub fn instant(value: Timestamp, policy: &FormatPolicy, settings: &JsonSettings) -> Result<Value, Error> {
    let features = settings.features();
    if policy.effective_timestamp(features) {
        return Ok(numeric_instant(value, policy, features));
    }
    if let Some(formatter) = policy.formatter() {
        let zone = match formatter.zone() {
            Some(zone) => zone.clone(),
            None => resolve_zone(policy, settings, &TimeZone::UTC),
        };
        return format_pattern(formatter, &value.to_zoned(zone)).map(Value::String);
    }
    let zone = resolve_zone(policy, settings, &TimeZone::UTC);
    let value = truncate_timestamp(value, policy, features)?;
    Ok(Value::String(iso_instant(value, zone)))
}

pub fn date(value: Date, policy: &FormatPolicy, settings: &JsonSettings) -> Result<Value, Error> {
    if policy.effective_timestamp(settings.features()) {
        return Ok(Value::from(epoch_day(value)?));
    }
    if let Some(formatter) = policy.formatter() {
        return format_pattern(formatter, value).map(Value::String);
    }
    Ok(Value::String(value.to_string()))
}

pub fn time(value: Time, policy: &FormatPolicy, settings: &JsonSettings) -> Result<Value, Error> {
    let features = settings.features();
    if policy.effective_timestamp(features) {
        return Ok(numeric_time_of_day(value, policy, features));
    }
    if let Some(formatter) = policy.formatter() {
        return format_pattern(formatter, value).map(Value::String);
    }
    let value = truncate_time(value, policy, features)?;
    Ok(Value::String(value.to_string()))
}

pub fn datetime(value: DateTime, policy: &FormatPolicy, settings: &JsonSettings) -> Result<Value, Error> {
    let features = settings.features();
    if policy.effective_timestamp(features) {
        let ts = TimeZone::UTC.to_timestamp(value).map_err(|err| {
            Error::new(ErrorKind::Range)
                .with_message("date-time is outside the representable instant range")
                .with_source(err)
        })?;
        return Ok(numeric_instant(ts, policy, features));
    }
    if let Some(formatter) = policy.formatter() {
        return format_pattern(formatter, value).map(Value::String);
    }
    let out = DateTime::from_parts(value.date(), truncate_time(value.time(), policy, features)?);
    Ok(Value::String(out.to_string()))
}

pub fn offset_time(value: OffsetTime, policy: &FormatPolicy, settings: &JsonSettings) -> Result<Value, Error> {
    let features = settings.features();
    if policy.effective_timestamp(features) {
        let shifted = value.with_offset_same_instant(resolve_offset(policy, settings, value.offset))?;
        return Ok(numeric_time_of_day(shifted.time, policy, features));
    }
    let target = match policy.formatter().and_then(Formatter::zone) {
        Some(zone) => zone.to_fixed_offset().unwrap_or(value.offset),
        None => resolve_offset(policy, settings, value.offset),
    };
    let shifted = value.with_offset_same_instant(target)?;
    if let Some(formatter) = policy.formatter() {
        // Pattern formatting borrows the epoch date; time-only patterns are
        // the expected use for this type.
        let dt = DateTime::from_parts(jiff::civil::date(1970, 1, 1), shifted.time);
        let zone = TimeZone::fixed(shifted.offset);
        let ts = zone.to_timestamp(dt).map_err(|err| {
            Error::new(ErrorKind::Internal)
                .with_message("epoch-anchored time could not be resolved")
                .with_source(err)
        })?;
        return format_pattern(formatter, &ts.to_zoned(zone)).map(Value::String);
    }
    let out = OffsetTime::new(truncate_time(shifted.time, policy, features)?, shifted.offset);
    Ok(Value::String(out.to_string()))
}

pub fn offset_datetime(
    value: OffsetDateTime,
    policy: &FormatPolicy,
    settings: &JsonSettings,
) -> Result<Value, Error> {
    let features = settings.features();
    if policy.effective_timestamp(features) {
        return Ok(numeric_instant(value.to_timestamp()?, policy, features));
    }
    let ts = value.to_timestamp()?;
    if let Some(formatter) = policy.formatter() {
        let zone = match formatter.zone() {
            Some(zone) => zone.clone(),
            None => resolve_zone(policy, settings, &TimeZone::fixed(value.offset)),
        };
        return format_pattern(formatter, &ts.to_zoned(zone)).map(Value::String);
    }
    let zone = resolve_zone(policy, settings, &TimeZone::fixed(value.offset));
    let target = ts.to_zoned(zone).offset();
    let shifted = value.with_offset_same_instant(target)?;
    let out = OffsetDateTime::new(
        DateTime::from_parts(
            shifted.datetime.date(),
            truncate_time(shifted.datetime.time(), policy, features)?,
        ),
        shifted.offset,
    );
    Ok(Value::String(out.to_string()))
}

pub fn zoned(value: &Zoned, policy: &FormatPolicy, settings: &JsonSettings) -> Result<Value, Error> {
    let features = settings.features();
    if policy.effective_timestamp(features) {
        return Ok(numeric_instant(value.timestamp(), policy, features));
    }
    if let Some(formatter) = policy.formatter() {
        let zone = match formatter.zone() {
            Some(zone) => zone.clone(),
            None => resolve_zone(policy, settings, value.time_zone()),
        };
        return format_pattern(formatter, &value.timestamp().to_zoned(zone)).map(Value::String);
    }
    let zone = resolve_zone(policy, settings, value.time_zone());
    let ts = truncate_timestamp(value.timestamp(), policy, features)?;
    let shifted = ts.to_zoned(zone);
    let mut out = iso_instant(shifted.timestamp(), shifted.time_zone().clone());
    if policy.effective_zone_id(features) {
        if let Some(name) = shifted.time_zone().iana_name() {
            out.push('[');
            out.push_str(name);
            out.push(']');
        }
    }
    Ok(Value::String(out))
}

/// Effective zone for instant-like values: the context zone when the write
/// feature enables one, else the policy's modifier applied to `original`.
fn resolve_zone(policy: &FormatPolicy, settings: &JsonSettings, original: &TimeZone) -> TimeZone {
    if let Some(context) = settings.encode_context_zone() {
        return context.clone();
    }
    policy.zone_modifier().apply(original)
}

fn resolve_offset(policy: &FormatPolicy, settings: &JsonSettings, original: Offset) -> Offset {
    if let Some(context) = settings.encode_context_zone() {
        if let Ok(offset) = context.to_fixed_offset() {
            return offset;
        }
    }
    policy.zone_modifier().apply_offset(original)
}

fn numeric_instant(value: Timestamp, policy: &FormatPolicy, features: &MapperFeatures) -> Value {
    if policy.effective_nanoseconds(features) {
        Value::String(decimal_seconds(value))
    } else {
        Value::from(value.as_millisecond())
    }
}

fn numeric_time_of_day(value: Time, policy: &FormatPolicy, features: &MapperFeatures) -> Value {
    let nanos = nanos_of_day(value);
    if policy.effective_nanoseconds(features) {
        Value::from(nanos)
    } else {
        Value::from(nanos / NANOS_PER_SECOND)
    }
}

/// Decimal `seconds.nanoseconds` rendering, sign-magnitude so pre-epoch
/// instants read naturally.
pub(crate) fn decimal_seconds(value: Timestamp) -> String {
    let total = value.as_nanosecond();
    let sign = if total < 0 { "-" } else { "" };
    let magnitude = total.unsigned_abs();
    let seconds = magnitude / NANOS_PER_SECOND as u128;
    let nanos = magnitude % NANOS_PER_SECOND as u128;
    format!("{sign}{seconds}.{nanos:09}")
}

fn iso_instant(value: Timestamp, zone: TimeZone) -> String {
    let zoned = value.to_zoned(zone);
    format!("{}{}", zoned.datetime(), format_offset(zoned.offset()))
}

pub(crate) fn epoch_day(value: Date) -> Result<i64, Error> {
    let ts = TimeZone::UTC.to_timestamp(value.at(0, 0, 0, 0)).map_err(|err| {
        Error::new(ErrorKind::Range)
            .with_message("date is outside the representable instant range")
            .with_source(err)
    })?;
    Ok(ts.as_second().div_euclid(86_400))
}

fn truncate_timestamp(
    value: Timestamp,
    policy: &FormatPolicy,
    features: &MapperFeatures,
) -> Result<Timestamp, Error> {
    let total = value.as_nanosecond();
    let subsec = total.rem_euclid(NANOS_PER_SECOND as i128) as i32;
    let keep = policy.truncate_subsec(subsec, features);
    if keep == subsec {
        return Ok(value);
    }
    Timestamp::from_nanosecond(total - i128::from(subsec - keep)).map_err(|err| {
        Error::new(ErrorKind::Internal)
            .with_message("sub-second truncation left the instant range")
            .with_source(err)
    })
}

fn truncate_time(value: Time, policy: &FormatPolicy, features: &MapperFeatures) -> Result<Time, Error> {
    let keep = policy.truncate_subsec(value.subsec_nanosecond(), features);
    if keep == value.subsec_nanosecond() {
        return Ok(value);
    }
    Time::new(value.hour(), value.minute(), value.second(), keep).map_err(|err| {
        Error::new(ErrorKind::Internal)
            .with_message("sub-second truncation produced an invalid time")
            .with_source(err)
    })
}

fn format_pattern<T>(formatter: &Formatter, value: T) -> Result<String, Error>
where
    BrokenDownTime: From<T>,
{
    jiff::fmt::strtime::format(formatter.pattern(), BrokenDownTime::from(value)).map_err(|err| {
        Error::new(ErrorKind::Config)
            .with_message("formatter pattern failed")
            .with_text(formatter.pattern())
            .with_source(err)
    })
}

#[cfg(test)]
mod tests {
    use super::{decimal_seconds, epoch_day, instant, time, zoned};
    use crate::core::policy::FormatPolicy;
    use crate::core::settings::JsonSettings;
    use crate::core::zone::ZoneModifier;
    use jiff::civil;
    use jiff::tz::TimeZone;
    use jiff::Timestamp;
    use serde_json::Value;

    #[test]
    fn nanosecond_timestamps_are_decimal_strings() {
        let ts: Timestamp = "2023-12-10T19:22:40.758927Z".parse().expect("instant");
        let policy = FormatPolicy::new().with_timestamp(true).with_nanoseconds(true);
        let out = instant(ts, &policy, &JsonSettings::new()).expect("encode");
        assert_eq!(out, Value::String("1702236160.758927000".to_string()));
    }

    #[test]
    fn millisecond_timestamps_are_numbers() {
        let ts: Timestamp = "2023-12-10T19:22:40.758Z".parse().expect("instant");
        let policy = FormatPolicy::new().with_timestamp(true);
        let out = instant(ts, &policy, &JsonSettings::new()).expect("encode");
        assert_eq!(out, Value::from(1_702_236_160_758i64));
    }

    #[test]
    fn timestamp_mode_wins_over_formatter() {
        let ts: Timestamp = "2023-12-10T19:22:40Z".parse().expect("instant");
        let policy = FormatPolicy::new()
            .with_formatter(crate::core::policy::Formatter::new("%Y"))
            .with_timestamp(true);
        let out = instant(ts, &policy, &JsonSettings::new()).expect("encode");
        assert!(out.is_number(), "formatter must not shape timestamp output: {out:?}");
    }

    #[test]
    fn default_text_truncates_to_milliseconds() {
        let ts: Timestamp = "2023-12-10T19:22:40.758927123Z".parse().expect("instant");
        let out = instant(ts, &FormatPolicy::new(), &JsonSettings::new()).expect("encode");
        let text = out.as_str().expect("string");
        assert!(text.starts_with("2023-12-10T19:22:40.758"), "{text}");
        assert!(!text.contains("758927"), "{text}");
    }

    #[test]
    fn epoch_day_matches_known_date() {
        assert_eq!(epoch_day(civil::date(1970, 1, 2)).expect("epoch day"), 1);
        assert_eq!(epoch_day(civil::date(1969, 12, 31)).expect("epoch day"), -1);
    }

    #[test]
    fn time_of_day_numeric_forms() {
        let value = civil::time(1, 2, 3, 500_000_000);
        let seconds_policy = FormatPolicy::new().with_timestamp(true);
        let out = time(value, &seconds_policy, &JsonSettings::new()).expect("encode");
        assert_eq!(out, Value::from(3_723i64));

        let nanos_policy = seconds_policy.with_nanoseconds(true);
        let out = time(value, &nanos_policy, &JsonSettings::new()).expect("encode");
        assert_eq!(out, Value::from(3_723_500_000_000i64));
    }

    #[test]
    fn zone_id_suffix_is_opt_in() {
        let zone = TimeZone::get("Asia/Singapore").expect("tzdb zone");
        let value = civil::date(2023, 12, 3)
            .at(18, 39, 20, 0)
            .to_zoned(zone)
            .expect("zoned");
        let settings = JsonSettings::new();

        let plain = zoned(&value, &FormatPolicy::new(), &settings).expect("encode");
        assert!(!plain.as_str().expect("string").contains('['), "{plain:?}");

        let tagged = zoned(&value, &FormatPolicy::new().with_zone_id(true), &settings).expect("encode");
        assert!(
            tagged.as_str().expect("string").ends_with("[Asia/Singapore]"),
            "{tagged:?}"
        );
    }

    #[test]
    fn modifier_rewrites_the_value_zone() {
        let value = civil::date(2023, 12, 3)
            .at(10, 39, 20, 187_000_000)
            .to_zoned(TimeZone::fixed(jiff::tz::Offset::constant(3)))
            .expect("zoned");
        let singapore = TimeZone::get("Asia/Singapore").expect("tzdb zone");
        let policy = FormatPolicy::new().with_zone_modifier(ZoneModifier::ConvertToZone(singapore));
        let out = zoned(&value, &policy, &JsonSettings::new()).expect("encode");
        assert_eq!(
            out.as_str().expect("string"),
            "2023-12-03T15:39:20.187+08:00"
        );
    }

    #[test]
    fn decimal_rendering_is_sign_magnitude() {
        let ts = Timestamp::from_nanosecond(-1_500_000_000i128).expect("instant");
        assert_eq!(decimal_seconds(ts), "-1.500000000");
    }
}
