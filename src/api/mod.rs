//! Purpose: Define the stable public API boundary for Horolite.
//! Exports: Codec, policy, settings, and value types needed by callers.
//! Role: Public, additive-only surface; hides internal parsing modules.
//! Invariants: This module is the only public path callers need to import from.
//! Invariants: Internal JSON decode seams remain private and are not exposed.

mod codec;

pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::ident::{EnumIdent, IdentDecoder, IdentRegistry, encode_ident};
pub use crate::core::policy::{FormatPolicy, Formatter, MapperFeatures};
pub use crate::core::settings::{JsonSettings, WeirdValueHandler};
pub use crate::core::temporal::{OffsetDateTime, OffsetTime, Temporal, TemporalKind};
pub use crate::core::zone::ZoneModifier;
pub use codec::{Serialized, TemporalCodec};
