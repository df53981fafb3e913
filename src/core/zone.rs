//! Purpose: Zone-rewriting policy applied uniformly at encode time.
//! Exports: `ZoneModifier`.
//! Role: Pure `TimeZone -> TimeZone` rewrite shared by every temporal policy.
//! Invariants: `apply` is total; it never fails and never inspects the instant.
//! Invariants: Modifiers are stateless values configured once and reused.

use jiff::tz::{Offset, TimeZone};

#[derive(Clone, Debug, Default)]
pub enum ZoneModifier {
    /// Keep the zone the value already carries.
    #[default]
    UseOriginal,
    ConvertToUtc,
    ConvertToZone(TimeZone),
}

impl ZoneModifier {
    pub fn apply(&self, original: &TimeZone) -> TimeZone {
        match self {
            ZoneModifier::UseOriginal => original.clone(),
            ZoneModifier::ConvertToUtc => TimeZone::UTC,
            ZoneModifier::ConvertToZone(zone) => zone.clone(),
        }
    }

    /// Rewrite for values that carry only a UTC offset and no date. A target
    /// zone without a fixed offset cannot be resolved for such values, so the
    /// original offset is kept in that case.
    pub fn apply_offset(&self, original: Offset) -> Offset {
        match self {
            ZoneModifier::UseOriginal => original,
            ZoneModifier::ConvertToUtc => Offset::UTC,
            ZoneModifier::ConvertToZone(zone) => {
                zone.to_fixed_offset().unwrap_or(original)
            }
        }
    }
}
