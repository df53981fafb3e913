//! Purpose: Define the temporal value types the codec family operates on.
//! Exports: `Temporal`, `TemporalKind`, `OffsetTime`, `OffsetDateTime`.
//! Role: Tagged union plus the two offset-carrying types jiff does not model.
//! Invariants: Values are immutable; every transformation returns a new value.
//! Invariants: Instant-preserving shifts never change the point on the timeline.

use crate::core::error::{Error, ErrorKind};
use jiff::civil::{Date, DateTime, Time};
use jiff::tz::{Offset, TimeZone};
use jiff::{Timestamp, Zoned};
use std::fmt;
use std::str::FromStr;

pub(crate) const NANOS_PER_SECOND: i64 = 1_000_000_000;
pub(crate) const NANOS_PER_DAY: i64 = 86_400 * NANOS_PER_SECOND;

/// A civil time paired with a UTC offset, e.g. `10:39:20.187+03:00`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OffsetTime {
    pub time: Time,
    pub offset: Offset,
}

impl OffsetTime {
    pub fn new(time: Time, offset: Offset) -> Self {
        Self { time, offset }
    }

    /// Shift to `target`, keeping the same position within the day's timeline.
    /// The time-of-day wraps across midnight when the shift crosses it.
    pub fn with_offset_same_instant(&self, target: Offset) -> Result<Self, Error> {
        let delta = i64::from(target.seconds()) - i64::from(self.offset.seconds());
        let nanos = (nanos_of_day(self.time) + delta * NANOS_PER_SECOND).rem_euclid(NANOS_PER_DAY);
        Ok(Self {
            time: time_from_nanos_of_day(nanos)?,
            offset: target,
        })
    }
}

impl fmt::Display for OffsetTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.time, format_offset(self.offset))
    }
}

/// A civil date-time paired with a UTC offset, e.g. `2023-12-03T10:39:20+03:00`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OffsetDateTime {
    pub datetime: DateTime,
    pub offset: Offset,
}

impl OffsetDateTime {
    pub fn new(datetime: DateTime, offset: Offset) -> Self {
        Self { datetime, offset }
    }

    pub fn to_timestamp(&self) -> Result<Timestamp, Error> {
        TimeZone::fixed(self.offset)
            .to_timestamp(self.datetime)
            .map_err(|err| {
                Error::new(ErrorKind::Range)
                    .with_message("date-time is outside the representable instant range")
                    .with_source(err)
            })
    }

    /// Shift to `target`, preserving the instant on the timeline.
    pub fn with_offset_same_instant(&self, target: Offset) -> Result<Self, Error> {
        let ts = self.to_timestamp()?;
        Ok(Self {
            datetime: TimeZone::fixed(target).to_datetime(ts),
            offset: target,
        })
    }
}

impl fmt::Display for OffsetDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.datetime, format_offset(self.offset))
    }
}

impl FromStr for OffsetTime {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Error> {
        let (head, offset) = split_offset(input).ok_or_else(|| {
            Error::new(ErrorKind::Format)
                .with_message("missing UTC offset")
                .with_text(input)
        })?;
        let time: Time = head.parse().map_err(|err| text_error(input, err))?;
        Ok(Self::new(time, parse_offset(offset)?))
    }
}

impl FromStr for OffsetDateTime {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Error> {
        let (head, offset) = split_offset(input).ok_or_else(|| {
            Error::new(ErrorKind::Format)
                .with_message("missing UTC offset")
                .with_text(input)
        })?;
        let datetime: DateTime = head.parse().map_err(|err| text_error(input, err))?;
        Ok(Self::new(datetime, parse_offset(offset)?))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Temporal {
    Instant(Timestamp),
    Date(Date),
    Time(Time),
    DateTime(DateTime),
    OffsetTime(OffsetTime),
    OffsetDateTime(OffsetDateTime),
    Zoned(Zoned),
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TemporalKind {
    Instant,
    Date,
    Time,
    DateTime,
    OffsetTime,
    OffsetDateTime,
    Zoned,
}

impl TemporalKind {
    pub fn name(self) -> &'static str {
        match self {
            TemporalKind::Instant => "Instant",
            TemporalKind::Date => "Date",
            TemporalKind::Time => "Time",
            TemporalKind::DateTime => "DateTime",
            TemporalKind::OffsetTime => "OffsetTime",
            TemporalKind::OffsetDateTime => "OffsetDateTime",
            TemporalKind::Zoned => "Zoned",
        }
    }
}

impl Temporal {
    pub fn kind(&self) -> TemporalKind {
        match self {
            Temporal::Instant(_) => TemporalKind::Instant,
            Temporal::Date(_) => TemporalKind::Date,
            Temporal::Time(_) => TemporalKind::Time,
            Temporal::DateTime(_) => TemporalKind::DateTime,
            Temporal::OffsetTime(_) => TemporalKind::OffsetTime,
            Temporal::OffsetDateTime(_) => TemporalKind::OffsetDateTime,
            Temporal::Zoned(_) => TemporalKind::Zoned,
        }
    }
}

impl From<Timestamp> for Temporal {
    fn from(value: Timestamp) -> Self {
        Temporal::Instant(value)
    }
}

impl From<Date> for Temporal {
    fn from(value: Date) -> Self {
        Temporal::Date(value)
    }
}

impl From<Time> for Temporal {
    fn from(value: Time) -> Self {
        Temporal::Time(value)
    }
}

impl From<DateTime> for Temporal {
    fn from(value: DateTime) -> Self {
        Temporal::DateTime(value)
    }
}

impl From<OffsetTime> for Temporal {
    fn from(value: OffsetTime) -> Self {
        Temporal::OffsetTime(value)
    }
}

impl From<OffsetDateTime> for Temporal {
    fn from(value: OffsetDateTime) -> Self {
        Temporal::OffsetDateTime(value)
    }
}

impl From<Zoned> for Temporal {
    fn from(value: Zoned) -> Self {
        Temporal::Zoned(value)
    }
}

pub(crate) fn nanos_of_day(time: Time) -> i64 {
    i64::from(time.hour()) * 3_600 * NANOS_PER_SECOND
        + i64::from(time.minute()) * 60 * NANOS_PER_SECOND
        + i64::from(time.second()) * NANOS_PER_SECOND
        + i64::from(time.subsec_nanosecond())
}

pub(crate) fn time_from_nanos_of_day(nanos: i64) -> Result<Time, Error> {
    if !(0..NANOS_PER_DAY).contains(&nanos) {
        return Err(Error::new(ErrorKind::Range)
            .with_message("nanoseconds-of-day outside 0..86400s")
            .with_text(nanos.to_string()));
    }
    let seconds = nanos / NANOS_PER_SECOND;
    let subsec = (nanos % NANOS_PER_SECOND) as i32;
    Time::new(
        (seconds / 3_600) as i8,
        ((seconds / 60) % 60) as i8,
        (seconds % 60) as i8,
        subsec,
    )
    .map_err(|err| {
        Error::new(ErrorKind::Internal)
            .with_message("time-of-day reassembly failed")
            .with_source(err)
    })
}

/// Render a UTC offset as `Z`-free `±HH:MM[:SS]` text.
pub(crate) fn format_offset(offset: Offset) -> String {
    let total = offset.seconds();
    let sign = if total < 0 { '-' } else { '+' };
    let total = total.unsigned_abs();
    let (hours, minutes, seconds) = (total / 3_600, (total / 60) % 60, total % 60);
    if seconds == 0 {
        format!("{sign}{hours:02}:{minutes:02}")
    } else {
        format!("{sign}{hours:02}:{minutes:02}:{seconds:02}")
    }
}

pub(crate) fn parse_offset(text: &str) -> Result<Offset, Error> {
    if text == "Z" || text == "z" {
        return Ok(Offset::UTC);
    }
    let bad = || {
        Error::new(ErrorKind::Format)
            .with_message("malformed UTC offset")
            .with_text(text)
    };
    let (sign, rest) = match text.split_at_checked(1) {
        Some(("+", rest)) => (1i32, rest),
        Some(("-", rest)) => (-1i32, rest),
        _ => return Err(bad()),
    };
    let mut parts = rest.split(':');
    let hours: i32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(bad)?;
    let minutes: i32 = match parts.next() {
        Some(p) => p.parse().map_err(|_| bad())?,
        None => 0,
    };
    let seconds: i32 = match parts.next() {
        Some(p) => p.parse().map_err(|_| bad())?,
        None => 0,
    };
    if parts.next().is_some() || minutes >= 60 || seconds >= 60 {
        return Err(bad());
    }
    Offset::from_seconds(sign * (hours * 3_600 + minutes * 60 + seconds)).map_err(|err| {
        Error::new(ErrorKind::Range)
            .with_message("UTC offset out of range")
            .with_text(text)
            .with_source(err)
    })
}

/// Split `10:39:20.187+03:00` into the civil head and its offset suffix.
/// The suffix starts at a trailing `Z` or at a `+`/`-` that follows a time
/// component (so date separators like `2023-12-03` are never split on).
pub(crate) fn split_offset(input: &str) -> Option<(&str, &str)> {
    if let Some(head) = input.strip_suffix('Z').or_else(|| input.strip_suffix('z')) {
        return Some((head, "Z"));
    }
    if let Some(at) = input.rfind('+') {
        return Some(input.split_at(at));
    }
    // A negative offset must sit after the first time colon; earlier '-' are
    // date separators.
    let first_colon = input.find(':')?;
    let at = input[first_colon..].rfind('-')? + first_colon;
    Some(input.split_at(at))
}

fn text_error(input: &str, err: jiff::Error) -> Error {
    Error::new(ErrorKind::Format)
        .with_message("does not match the canonical form")
        .with_text(input)
        .with_source(err)
}

#[cfg(test)]
mod tests {
    use super::{OffsetDateTime, OffsetTime, format_offset, parse_offset, split_offset};
    use jiff::civil;
    use jiff::tz::Offset;

    #[test]
    fn offset_time_shift_wraps_across_midnight() {
        let value = OffsetTime::new(civil::time(23, 30, 0, 0), Offset::UTC);
        let shifted = value
            .with_offset_same_instant(Offset::constant(3))
            .expect("shift");
        assert_eq!(shifted.time, civil::time(2, 30, 0, 0));
        assert_eq!(shifted.offset, Offset::constant(3));
    }

    #[test]
    fn offset_datetime_shift_preserves_instant() {
        let value = OffsetDateTime::new(civil::date(2023, 12, 3).at(10, 39, 20, 187_000_000), Offset::constant(3));
        let shifted = value
            .with_offset_same_instant(Offset::constant(8))
            .expect("shift");
        assert_eq!(shifted.datetime, civil::date(2023, 12, 3).at(15, 39, 20, 187_000_000));
        assert_eq!(
            shifted.to_timestamp().expect("ts"),
            value.to_timestamp().expect("ts")
        );
    }

    #[test]
    fn display_and_parse_round_trip() {
        let value = OffsetDateTime::new(civil::date(2023, 12, 3).at(10, 39, 20, 187_000_000), Offset::constant(3));
        let text = value.to_string();
        assert_eq!(text, "2023-12-03T10:39:20.187+03:00");
        let parsed: OffsetDateTime = text.parse().expect("parse");
        assert_eq!(parsed, value);
    }

    #[test]
    fn split_offset_ignores_date_separators() {
        assert_eq!(
            split_offset("2023-12-03T10:39:20-05:00"),
            Some(("2023-12-03T10:39:20", "-05:00"))
        );
        assert_eq!(split_offset("2023-12-03T10:39:20"), None);
        assert_eq!(split_offset("10:20:30Z"), Some(("10:20:30", "Z")));
    }

    #[test]
    fn offset_text_forms() {
        assert_eq!(format_offset(Offset::constant(-5)), "-05:00");
        assert_eq!(
            parse_offset("+08:00").expect("parse").seconds(),
            8 * 3_600
        );
        assert_eq!(parse_offset("Z").expect("parse"), Offset::UTC);
        assert!(parse_offset("08:00").is_err());
    }
}
