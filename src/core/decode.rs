//! Purpose: Turn JSON values back into temporal values under a format policy.
//! Exports: one decode operation per temporal type, plus the `temporal` dispatch.
//! Role: The read half of the codec core; owns text/number detection and leniency.
//! Invariants: Parse failures are never swallowed; declined recovery propagates
//! the original cause with target type and offending text attached.
//! Invariants: Numeric input is epoch-based; decimal forms always carry
//! `seconds.nanoseconds` so no precision is lost.

use crate::core::error::{Error, ErrorKind};
use crate::core::policy::{FormatPolicy, Formatter, MapperFeatures};
use crate::core::settings::JsonSettings;
use crate::core::temporal::{
    NANOS_PER_SECOND, OffsetDateTime, OffsetTime, Temporal, TemporalKind, time_from_nanos_of_day,
};
use jiff::civil::{Date, DateTime, Time};
use jiff::fmt::strtime::{self, BrokenDownTime};
use jiff::tz::{Offset, TimeZone};
use jiff::{Timestamp, Zoned};
use serde_json::Value;

pub fn temporal(
    kind: TemporalKind,
    value: &Value,
    policy: &FormatPolicy,
    settings: &JsonSettings,
) -> Result<Temporal, Error> {
    match kind {
        TemporalKind::Instant => instant(value, policy, settings).map(Temporal::Instant),
        TemporalKind::Date => date(value, policy, settings).map(Temporal::Date),
        TemporalKind::Time => time(value, policy, settings).map(Temporal::Time),
        TemporalKind::DateTime => datetime(value, policy, settings).map(Temporal::DateTime),
        TemporalKind::OffsetTime => offset_time(value, policy, settings).map(Temporal::OffsetTime),
        TemporalKind::OffsetDateTime => {
            offset_datetime(value, policy, settings).map(Temporal::OffsetDateTime)
        }
        TemporalKind::Zoned => zoned(value, policy, settings).map(Temporal::Zoned),
    }
}

pub fn instant(value: &Value, policy: &FormatPolicy, settings: &JsonSettings) -> Result<Timestamp, Error> {
    let kind = TemporalKind::Instant;
    match value {
        Value::Number(number) => instant_numeric(numeric_from_number(number)?, policy, settings.features()),
        Value::String(text) => {
            let text = text.trim();
            if let Some(numeric) = numeric_from_text(text) {
                return instant_numeric(numeric, policy, settings.features());
            }
            match instant_text(text, policy, settings) {
                Ok(parsed) => Ok(parsed),
                Err(err) => match recover(kind, text, err, settings)? {
                    Temporal::Instant(parsed) => Ok(parsed),
                    other => Err(mismatched_recovery(kind, &other)),
                },
            }
        }
        other => Err(unsupported(kind, other)),
    }
}

pub fn date(value: &Value, policy: &FormatPolicy, settings: &JsonSettings) -> Result<Date, Error> {
    let kind = TemporalKind::Date;
    match value {
        Value::Number(number) => date_numeric(numeric_from_number(number)?),
        Value::String(text) => {
            let text = text.trim();
            if let Some(numeric) = numeric_from_text(text) {
                return date_numeric(numeric);
            }
            match date_text(text, policy) {
                Ok(parsed) => Ok(parsed),
                Err(err) => match recover(kind, text, err, settings)? {
                    Temporal::Date(parsed) => Ok(parsed),
                    other => Err(mismatched_recovery(kind, &other)),
                },
            }
        }
        other => Err(unsupported(kind, other)),
    }
}

pub fn time(value: &Value, policy: &FormatPolicy, settings: &JsonSettings) -> Result<Time, Error> {
    let kind = TemporalKind::Time;
    match value {
        Value::Number(number) => {
            time_numeric(numeric_from_number(number)?, policy, settings.features())
        }
        Value::String(text) => {
            let text = text.trim();
            if let Some(numeric) = numeric_from_text(text) {
                return time_numeric(numeric, policy, settings.features());
            }
            match time_text(text, policy) {
                Ok(parsed) => Ok(parsed),
                Err(err) => match recover(kind, text, err, settings)? {
                    Temporal::Time(parsed) => Ok(parsed),
                    other => Err(mismatched_recovery(kind, &other)),
                },
            }
        }
        other => Err(unsupported(kind, other)),
    }
}

pub fn datetime(value: &Value, policy: &FormatPolicy, settings: &JsonSettings) -> Result<DateTime, Error> {
    let kind = TemporalKind::DateTime;
    match value {
        Value::Number(number) => {
            datetime_numeric(numeric_from_number(number)?, policy, settings.features())
        }
        Value::String(text) => {
            let text = text.trim();
            if let Some(numeric) = numeric_from_text(text) {
                return datetime_numeric(numeric, policy, settings.features());
            }
            match datetime_text(text, policy, settings) {
                Ok(parsed) => Ok(parsed),
                Err(err) => match recover(kind, text, err, settings)? {
                    Temporal::DateTime(parsed) => Ok(parsed),
                    other => Err(mismatched_recovery(kind, &other)),
                },
            }
        }
        other => Err(unsupported(kind, other)),
    }
}

pub fn offset_time(
    value: &Value,
    policy: &FormatPolicy,
    settings: &JsonSettings,
) -> Result<OffsetTime, Error> {
    let kind = TemporalKind::OffsetTime;
    match value {
        Value::Number(number) => {
            let time = time_numeric(numeric_from_number(number)?, policy, settings.features())?;
            Ok(OffsetTime::new(time, Offset::UTC))
        }
        Value::String(text) => {
            let text = text.trim();
            if let Some(numeric) = numeric_from_text(text) {
                let time = time_numeric(numeric, policy, settings.features())?;
                return Ok(OffsetTime::new(time, Offset::UTC));
            }
            match offset_time_text(text, policy, settings) {
                Ok(parsed) => Ok(parsed),
                Err(err) => match recover(kind, text, err, settings)? {
                    Temporal::OffsetTime(parsed) => Ok(parsed),
                    other => Err(mismatched_recovery(kind, &other)),
                },
            }
        }
        other => Err(unsupported(kind, other)),
    }
}

pub fn offset_datetime(
    value: &Value,
    policy: &FormatPolicy,
    settings: &JsonSettings,
) -> Result<OffsetDateTime, Error> {
    let kind = TemporalKind::OffsetDateTime;
    match value {
        Value::Number(number) => {
            let ts = instant_numeric(numeric_from_number(number)?, policy, settings.features())?;
            Ok(OffsetDateTime::new(TimeZone::UTC.to_datetime(ts), Offset::UTC))
        }
        Value::String(text) => {
            let text = text.trim();
            if let Some(numeric) = numeric_from_text(text) {
                let ts = instant_numeric(numeric, policy, settings.features())?;
                return Ok(OffsetDateTime::new(TimeZone::UTC.to_datetime(ts), Offset::UTC));
            }
            match offset_datetime_text(text, policy, settings) {
                Ok(parsed) => Ok(parsed),
                Err(err) => match recover(kind, text, err, settings)? {
                    Temporal::OffsetDateTime(parsed) => Ok(parsed),
                    other => Err(mismatched_recovery(kind, &other)),
                },
            }
        }
        other => Err(unsupported(kind, other)),
    }
}

pub fn zoned(value: &Value, policy: &FormatPolicy, settings: &JsonSettings) -> Result<Zoned, Error> {
    let kind = TemporalKind::Zoned;
    match value {
        Value::Number(number) => {
            let ts = instant_numeric(numeric_from_number(number)?, policy, settings.features())?;
            Ok(ts.to_zoned(numeric_target_zone(settings)))
        }
        Value::String(text) => {
            let text = text.trim();
            if let Some(numeric) = numeric_from_text(text) {
                let ts = instant_numeric(numeric, policy, settings.features())?;
                return Ok(ts.to_zoned(numeric_target_zone(settings)));
            }
            match zoned_text(text, policy, settings) {
                Ok(parsed) => Ok(parsed),
                Err(err) => match recover(kind, text, err, settings)? {
                    Temporal::Zoned(parsed) => Ok(parsed),
                    other => Err(mismatched_recovery(kind, &other)),
                },
            }
        }
        other => Err(unsupported(kind, other)),
    }
}

// ---- text parsing ----

fn instant_text(text: &str, policy: &FormatPolicy, settings: &JsonSettings) -> Result<Timestamp, Error> {
    if let Some(formatter) = policy.formatter() {
        let tm = parse_pattern(formatter, text)?;
        return match tm.to_timestamp() {
            Ok(ts) => Ok(ts),
            Err(err) => {
                if settings.lenient() {
                    if let Ok(dt) = tm.to_datetime() {
                        return system_timestamp(dt, text);
                    }
                }
                Err(parse_error(text, err))
            }
        };
    }
    match text.parse::<Timestamp>() {
        Ok(ts) => Ok(ts),
        Err(err) => {
            if settings.lenient() {
                if let Ok(dt) = text.parse::<DateTime>() {
                    return system_timestamp(dt, text);
                }
            }
            Err(parse_error(text, err))
        }
    }
}

fn date_text(text: &str, policy: &FormatPolicy) -> Result<Date, Error> {
    if let Some(formatter) = policy.formatter() {
        let tm = parse_pattern(formatter, text)?;
        return tm.to_date().map_err(|err| parse_error(text, err));
    }
    // The canonical parser accepts full date-time text and keeps the date.
    text.parse::<Date>().map_err(|err| parse_error(text, err))
}

fn time_text(text: &str, policy: &FormatPolicy) -> Result<Time, Error> {
    if let Some(formatter) = policy.formatter() {
        let tm = parse_pattern(formatter, text)?;
        return tm.to_time().map_err(|err| parse_error(text, err));
    }
    text.parse::<Time>().map_err(|err| parse_error(text, err))
}

fn datetime_text(text: &str, policy: &FormatPolicy, settings: &JsonSettings) -> Result<DateTime, Error> {
    if let Some(formatter) = policy.formatter() {
        let tm = parse_pattern(formatter, text)?;
        return match tm.to_datetime() {
            Ok(dt) => Ok(dt),
            Err(err) => {
                if settings.lenient() {
                    if let Ok(date) = tm.to_date() {
                        return Ok(date.at(0, 0, 0, 0));
                    }
                }
                Err(parse_error(text, err))
            }
        };
    }
    text.parse::<DateTime>().map_err(|err| parse_error(text, err))
}

fn offset_time_text(
    text: &str,
    policy: &FormatPolicy,
    settings: &JsonSettings,
) -> Result<OffsetTime, Error> {
    if let Some(formatter) = policy.formatter() {
        let tm = parse_pattern(formatter, text)?;
        let time = tm.to_time().map_err(|err| parse_error(text, err))?;
        return match tm.offset() {
            Some(offset) => Ok(OffsetTime::new(time, offset)),
            None if settings.lenient() => {
                tracing::debug!(input = text, "no offset in input; using the system zone offset");
                Ok(OffsetTime::new(time, system_fixed_offset()))
            }
            None => Err(missing_offset(text)),
        };
    }
    match text.parse::<OffsetTime>() {
        Ok(parsed) => Ok(parsed),
        Err(err) => {
            if settings.lenient() {
                if let Ok(time) = text.parse::<Time>() {
                    tracing::debug!(input = text, "no offset in input; using the system zone offset");
                    return Ok(OffsetTime::new(time, system_fixed_offset()));
                }
            }
            Err(err)
        }
    }
}

fn offset_datetime_text(
    text: &str,
    policy: &FormatPolicy,
    settings: &JsonSettings,
) -> Result<OffsetDateTime, Error> {
    if let Some(formatter) = policy.formatter() {
        let tm = parse_pattern(formatter, text)?;
        let dt = tm.to_datetime().map_err(|err| parse_error(text, err))?;
        return match tm.offset() {
            Some(offset) => Ok(OffsetDateTime::new(dt, offset)),
            None if settings.lenient() => system_offset_datetime(dt, text),
            None => Err(missing_offset(text)),
        };
    }
    match text.parse::<OffsetDateTime>() {
        Ok(parsed) => Ok(parsed),
        Err(err) => {
            if settings.lenient() {
                if let Ok(dt) = text.parse::<DateTime>() {
                    return system_offset_datetime(dt, text);
                }
            }
            Err(err)
        }
    }
}

fn zoned_text(text: &str, policy: &FormatPolicy, settings: &JsonSettings) -> Result<Zoned, Error> {
    if let Some(formatter) = policy.formatter() {
        let tm = parse_pattern(formatter, text)?;
        return match tm.to_zoned() {
            Ok(parsed) => Ok(parsed),
            Err(err) => {
                if let (Ok(dt), Some(offset)) = (tm.to_datetime(), tm.offset()) {
                    let zone = TimeZone::fixed(offset);
                    let ts = zone.to_timestamp(dt).map_err(|err| parse_error(text, err))?;
                    return Ok(ts.to_zoned(zone));
                }
                if settings.lenient() {
                    if let Ok(dt) = tm.to_datetime() {
                        return system_zoned(dt, text);
                    }
                }
                Err(parse_error(text, err))
            }
        };
    }
    match text.parse::<Zoned>() {
        Ok(parsed) => Ok(parsed),
        Err(err) => {
            // RFC 3339 text without the bracketed zone annotation still names
            // an unambiguous instant; keep the offset as a fixed zone.
            if let Ok(odt) = text.parse::<OffsetDateTime>() {
                let zone = TimeZone::fixed(odt.offset);
                let ts = odt.to_timestamp()?;
                return Ok(ts.to_zoned(zone));
            }
            if settings.lenient() {
                if let Ok(dt) = text.parse::<DateTime>() {
                    return system_zoned(dt, text);
                }
            }
            Err(parse_error(text, err))
        }
    }
}

// ---- numeric parsing ----

enum Numeric {
    Int(i64),
    /// Total nanoseconds decoded from a decimal `seconds.nanoseconds` form.
    DecimalNanos(i128),
}

fn numeric_from_number(number: &serde_json::Number) -> Result<Numeric, Error> {
    if let Some(int) = number.as_i64() {
        return Ok(Numeric::Int(int));
    }
    if let Some(float) = number.as_f64() {
        return Ok(Numeric::DecimalNanos((float * NANOS_PER_SECOND as f64) as i128));
    }
    Err(Error::new(ErrorKind::Range)
        .with_message("numeric input out of range")
        .with_text(number.to_string()))
}

/// Numeric-looking text: optional sign, digits, optional fraction. Anything
/// carrying date/time punctuation falls through to the text parsers.
fn numeric_from_text(text: &str) -> Option<Numeric> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits, None),
    };
    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match frac_part {
        None => {
            let value: i64 = int_part.parse().ok()?;
            Some(Numeric::Int(if negative { -value } else { value }))
        }
        Some(frac) if !frac.is_empty() && frac.bytes().all(|b| b.is_ascii_digit()) => {
            let seconds: i128 = int_part.parse().ok()?;
            let mut nanos = 0i128;
            let mut taken = 0u32;
            for byte in frac.bytes().take(9) {
                nanos = nanos * 10 + i128::from(byte - b'0');
                taken += 1;
            }
            nanos *= 10i128.pow(9 - taken);
            let total = seconds * i128::from(NANOS_PER_SECOND) + nanos;
            Some(Numeric::DecimalNanos(if negative { -total } else { total }))
        }
        Some(_) => None,
    }
}

fn instant_numeric(
    numeric: Numeric,
    policy: &FormatPolicy,
    features: &MapperFeatures,
) -> Result<Timestamp, Error> {
    match numeric {
        Numeric::Int(value) => {
            if policy.effective_nanoseconds(features) {
                Timestamp::from_second(value)
            } else {
                Timestamp::from_millisecond(value)
            }
            .map_err(|err| epoch_range_error(value.to_string(), err))
        }
        Numeric::DecimalNanos(total) => Timestamp::from_nanosecond(total)
            .map_err(|err| epoch_range_error(total.to_string(), err)),
    }
}

fn date_numeric(numeric: Numeric) -> Result<Date, Error> {
    match numeric {
        Numeric::Int(day) => {
            let seconds = day.checked_mul(86_400).ok_or_else(|| {
                epoch_day_range_error(day)
            })?;
            let ts = Timestamp::from_second(seconds)
                .map_err(|_| epoch_day_range_error(day))?;
            Ok(TimeZone::UTC.to_datetime(ts).date())
        }
        Numeric::DecimalNanos(total) => Err(Error::new(ErrorKind::Format)
            .with_message("epoch-day input cannot be fractional")
            .with_text(total.to_string())),
    }
}

fn time_numeric(
    numeric: Numeric,
    policy: &FormatPolicy,
    features: &MapperFeatures,
) -> Result<Time, Error> {
    let nanos = match numeric {
        Numeric::Int(value) => {
            if policy.effective_nanoseconds(features) {
                i128::from(value)
            } else {
                i128::from(value) * i128::from(NANOS_PER_SECOND)
            }
        }
        Numeric::DecimalNanos(total) => total,
    };
    let nanos = i64::try_from(nanos).map_err(|_| {
        Error::new(ErrorKind::Range)
            .with_message("time-of-day input out of range")
            .with_text(nanos.to_string())
    })?;
    time_from_nanos_of_day(nanos)
}

fn datetime_numeric(
    numeric: Numeric,
    policy: &FormatPolicy,
    features: &MapperFeatures,
) -> Result<DateTime, Error> {
    let ts = instant_numeric(numeric, policy, features)?;
    Ok(TimeZone::UTC.to_datetime(ts))
}

// ---- shared helpers ----

fn recover(
    kind: TemporalKind,
    text: &str,
    err: Error,
    settings: &JsonSettings,
) -> Result<Temporal, Error> {
    if let Some(handler) = settings.weird_value_handler() {
        if let Some(substitute) = handler(kind, text) {
            if substitute.kind() == kind {
                tracing::debug!(kind = kind.name(), input = text, "recovery hook substituted a value");
                return Ok(substitute);
            }
            tracing::debug!(
                kind = kind.name(),
                got = substitute.kind().name(),
                "recovery hook returned a mismatched kind; declining"
            );
        }
    }
    Err(err.with_target(kind.name()).with_text(text))
}

fn mismatched_recovery(kind: TemporalKind, got: &Temporal) -> Error {
    Error::new(ErrorKind::Internal)
        .with_message("recovery produced a value of the wrong kind")
        .with_target(kind.name())
        .with_text(got.kind().name())
}

fn unsupported(kind: TemporalKind, value: &Value) -> Error {
    Error::new(ErrorKind::Format)
        .with_message("expected a JSON string or number")
        .with_target(kind.name())
        .with_text(value.to_string())
}

fn parse_pattern(formatter: &Formatter, text: &str) -> Result<BrokenDownTime, Error> {
    strtime::parse(formatter.pattern(), text).map_err(|err| {
        Error::new(ErrorKind::Format)
            .with_message("does not match the configured pattern")
            .with_text(text)
            .with_hint(format!("expected pattern `{}`", formatter.pattern()))
            .with_source(err)
    })
}

fn parse_error(text: &str, err: jiff::Error) -> Error {
    Error::new(ErrorKind::Format)
        .with_message("does not match the canonical form")
        .with_text(text)
        .with_source(err)
}

fn missing_offset(text: &str) -> Error {
    Error::new(ErrorKind::Format)
        .with_message("missing UTC offset")
        .with_text(text)
}

fn epoch_range_error(text: String, err: jiff::Error) -> Error {
    Error::new(ErrorKind::Range)
        .with_message("epoch input outside the representable instant range")
        .with_text(text)
        .with_source(err)
}

fn epoch_day_range_error(day: i64) -> Error {
    Error::new(ErrorKind::Range)
        .with_message("epoch-day input outside the representable date range")
        .with_text(day.to_string())
}

fn system_timestamp(dt: DateTime, text: &str) -> Result<Timestamp, Error> {
    tracing::debug!(input = text, "no offset in input; resolving in the system zone");
    TimeZone::system()
        .to_timestamp(dt)
        .map_err(|err| parse_error(text, err))
}

fn system_offset_datetime(dt: DateTime, text: &str) -> Result<OffsetDateTime, Error> {
    tracing::debug!(input = text, "no offset in input; using the system zone offset");
    let zone = TimeZone::system();
    let ts = zone.to_timestamp(dt).map_err(|err| parse_error(text, err))?;
    Ok(OffsetDateTime::new(dt, ts.to_zoned(zone).offset()))
}

fn system_zoned(dt: DateTime, text: &str) -> Result<Zoned, Error> {
    tracing::debug!(input = text, "no zone in input; resolving in the system zone");
    TimeZone::system()
        .to_zoned(dt)
        .map_err(|err| parse_error(text, err))
}

fn system_fixed_offset() -> Offset {
    TimeZone::system().to_fixed_offset().unwrap_or(Offset::UTC)
}

fn numeric_target_zone(settings: &JsonSettings) -> TimeZone {
    settings
        .decode_context_zone()
        .cloned()
        .unwrap_or(TimeZone::UTC)
}

#[cfg(test)]
mod tests {
    use super::{Numeric, date, instant, numeric_from_text, time, zoned};
    use crate::core::policy::FormatPolicy;
    use crate::core::settings::JsonSettings;
    use jiff::Timestamp;
    use jiff::civil;
    use serde_json::{Value, json};

    #[test]
    fn numeric_text_detection_skips_dates() {
        assert!(numeric_from_text("1702236160758").is_some());
        assert!(numeric_from_text("-120").is_some());
        assert!(numeric_from_text("1702236160.758927000").is_some());
        assert!(numeric_from_text("2023-12-10").is_none());
        assert!(numeric_from_text("10:39:20").is_none());
        assert!(numeric_from_text("").is_none());
        assert!(numeric_from_text("1.2.3").is_none());
    }

    #[test]
    fn decimal_text_keeps_full_precision() {
        match numeric_from_text("1702236160.758927").expect("numeric") {
            Numeric::DecimalNanos(total) => assert_eq!(total, 1_702_236_160_758_927_000),
            Numeric::Int(_) => panic!("expected a decimal"),
        }
    }

    #[test]
    fn instant_accepts_millis_and_decimal_strings() {
        let settings = JsonSettings::new();
        let policy = FormatPolicy::new();

        let from_number = instant(&json!(1_702_236_160_758i64), &policy, &settings).expect("decode");
        assert_eq!(from_number.as_millisecond(), 1_702_236_160_758);

        let from_text = instant(
            &Value::String("1702236160.758927000".to_string()),
            &policy,
            &settings,
        )
        .expect("decode");
        let expected: Timestamp = "2023-12-10T19:22:40.758927Z".parse().expect("instant");
        assert_eq!(from_text, expected);
    }

    #[test]
    fn instant_parses_canonical_text() {
        let settings = JsonSettings::new();
        let out = instant(
            &Value::String("2023-12-10T19:22:40.758927Z".to_string()),
            &FormatPolicy::new(),
            &settings,
        )
        .expect("decode");
        assert_eq!(out.subsec_nanosecond(), 758_927_000);
    }

    #[test]
    fn date_accepts_epoch_days() {
        let settings = JsonSettings::new();
        let policy = FormatPolicy::new();
        assert_eq!(
            date(&json!(1), &policy, &settings).expect("decode"),
            civil::date(1970, 1, 2)
        );
        assert_eq!(
            date(&json!(-1), &policy, &settings).expect("decode"),
            civil::date(1969, 12, 31)
        );
    }

    #[test]
    fn time_of_day_numeric_respects_nanosecond_mode() {
        let settings = JsonSettings::new();
        let seconds = time(&json!(3_723), &FormatPolicy::new(), &settings).expect("decode");
        assert_eq!(seconds, civil::time(1, 2, 3, 0));

        let nanos_policy = FormatPolicy::new().with_nanoseconds(true);
        let nanos = time(&json!(3_723_500_000_000i64), &nanos_policy, &settings).expect("decode");
        assert_eq!(nanos, civil::time(1, 2, 3, 500_000_000));
    }

    #[test]
    fn zoned_text_without_annotation_keeps_the_offset() {
        let settings = JsonSettings::new();
        let out = zoned(
            &Value::String("2023-12-03T10:39:20.187+03:00".to_string()),
            &FormatPolicy::new(),
            &settings,
        )
        .expect("decode");
        assert_eq!(out.offset().seconds(), 3 * 3_600);
        assert_eq!(out.datetime(), civil::date(2023, 12, 3).at(10, 39, 20, 187_000_000));
    }

    #[test]
    fn malformed_text_is_a_format_error_with_context() {
        let settings = JsonSettings::new();
        let err = instant(
            &Value::String("not-a-date".to_string()),
            &FormatPolicy::new(),
            &settings,
        )
        .expect_err("must fail");
        assert_eq!(err.kind(), crate::core::error::ErrorKind::Format);
        assert_eq!(err.target(), Some("Instant"));
        assert_eq!(err.text(), Some("not-a-date"));
    }
}
