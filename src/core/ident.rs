//! Purpose: Enum-to-string identity mapping with explicit registration.
//! Exports: `EnumIdent`, `IdentRegistry`, `encode_ident`.
//! Role: Replaces reflective factory discovery with a caller-supplied map.
//! Invariants: At most one decoder is constructed per type; all callers share it.
//! Invariants: Ambiguous and missing registrations fail at first use, lazily.

use crate::core::error::{Error, ErrorKind};
use serde_json::Value;
use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex, MutexGuard};

/// Types that map to and from a stable string identity.
pub trait EnumIdent: Sized + Send + Sync + 'static {
    fn ident(&self) -> &str;
    fn from_ident(text: &str) -> Option<Self>;
}

pub fn encode_ident<T: EnumIdent>(value: &T) -> Value {
    Value::String(value.ident().to_string())
}

/// Parses one registered type from its identity string.
pub struct IdentDecoder<T> {
    marker: PhantomData<fn() -> T>,
}

impl<T: EnumIdent> IdentDecoder<T> {
    fn new() -> Self {
        Self { marker: PhantomData }
    }

    pub fn parse(&self, text: &str) -> Result<T, Error> {
        T::from_ident(text).ok_or_else(|| {
            Error::new(ErrorKind::Format)
                .with_message("no variant with this identity")
                .with_target(type_name::<T>())
                .with_text(text)
        })
    }
}

type Shared = Arc<dyn Any + Send + Sync>;

struct Registration {
    build: Box<dyn Fn() -> Shared + Send + Sync>,
}

#[derive(Default)]
struct Inner {
    registrations: HashMap<TypeId, Vec<Registration>>,
    resolved: HashMap<TypeId, Shared>,
}

/// Registration map plus decoder memo cache. One lock guards both so decoder
/// construction happens at most once per type.
#[derive(Default)]
pub struct IdentRegistry {
    inner: Mutex<Inner>,
}

impl IdentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `T` participates in identity mapping. Registering the same
    /// type from two places is a misconfiguration surfaced on first use.
    pub fn register<T: EnumIdent>(&self) {
        self.lock()
            .registrations
            .entry(TypeId::of::<T>())
            .or_default()
            .push(Registration {
                build: Box::new(|| Arc::new(IdentDecoder::<T>::new())),
            });
    }

    /// Resolve the decoder for `T`, constructing it on first use.
    pub fn resolve<T: EnumIdent>(&self) -> Result<Arc<IdentDecoder<T>>, Error> {
        let id = TypeId::of::<T>();
        let mut inner = self.lock();
        if let Some(existing) = inner.resolved.get(&id) {
            return downcast::<T>(existing.clone());
        }
        let shared = match inner.registrations.get(&id).map(Vec::as_slice) {
            None | Some([]) => {
                return Err(Error::new(ErrorKind::Config)
                    .with_message("no identity registration for this type")
                    .with_target(type_name::<T>())
                    .with_hint("register the type on the IdentRegistry before decoding"));
            }
            Some([single]) => (single.build)(),
            Some(_) => {
                return Err(Error::new(ErrorKind::Config)
                    .with_message("multiple identity registrations for this type")
                    .with_target(type_name::<T>())
                    .with_hint("remove the duplicate registration; ambiguity is never resolved silently"));
            }
        };
        inner.resolved.insert(id, shared.clone());
        downcast::<T>(shared)
    }

    pub fn decode<T: EnumIdent>(&self, value: &Value) -> Result<T, Error> {
        let decoder = self.resolve::<T>()?;
        match value {
            Value::String(text) => decoder.parse(text),
            other => Err(Error::new(ErrorKind::Format)
                .with_message("expected a JSON string identity")
                .with_target(type_name::<T>())
                .with_text(other.to_string())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

fn downcast<T: EnumIdent>(shared: Shared) -> Result<Arc<IdentDecoder<T>>, Error> {
    shared.downcast::<IdentDecoder<T>>().map_err(|_| {
        Error::new(ErrorKind::Internal)
            .with_message("identity cache held a decoder of the wrong type")
            .with_target(type_name::<T>())
    })
}

#[cfg(test)]
mod tests {
    use super::{EnumIdent, IdentRegistry, encode_ident};
    use crate::core::error::ErrorKind;
    use serde_json::{Value, json};
    use std::sync::Arc;

    #[derive(Debug, Eq, PartialEq)]
    enum Fruit {
        Apple,
        Banana,
    }

    impl EnumIdent for Fruit {
        fn ident(&self) -> &str {
            match self {
                Fruit::Apple => "apple",
                Fruit::Banana => "banana",
            }
        }

        fn from_ident(text: &str) -> Option<Self> {
            match text {
                "apple" => Some(Fruit::Apple),
                "banana" => Some(Fruit::Banana),
                _ => None,
            }
        }
    }

    #[test]
    fn identity_round_trip() {
        let registry = IdentRegistry::new();
        registry.register::<Fruit>();

        assert_eq!(encode_ident(&Fruit::Apple), json!("apple"));
        let decoded: Fruit = registry.decode(&json!("banana")).expect("decode");
        assert_eq!(decoded, Fruit::Banana);
    }

    #[test]
    fn missing_registration_fails_at_first_use() {
        let registry = IdentRegistry::new();
        let err = registry.decode::<Fruit>(&json!("apple")).expect_err("must fail");
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn duplicate_registration_is_fatal_not_silent() {
        let registry = IdentRegistry::new();
        registry.register::<Fruit>();
        registry.register::<Fruit>();
        let err = registry.decode::<Fruit>(&json!("apple")).expect_err("must fail");
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn unknown_identity_is_a_format_error_with_text() {
        let registry = IdentRegistry::new();
        registry.register::<Fruit>();
        let err = registry.decode::<Fruit>(&json!("durian")).expect_err("must fail");
        assert_eq!(err.kind(), ErrorKind::Format);
        assert_eq!(err.text(), Some("durian"));
    }

    #[test]
    fn resolution_is_cached_and_shared() {
        let registry = Arc::new(IdentRegistry::new());
        registry.register::<Fruit>();

        let first = registry.resolve::<Fruit>().expect("resolve");
        let second = registry.resolve::<Fruit>().expect("resolve");
        assert!(Arc::ptr_eq(&first, &second));

        let registry_clone = Arc::clone(&registry);
        let handle = std::thread::spawn(move || registry_clone.resolve::<Fruit>().expect("resolve"));
        let third = handle.join().expect("thread");
        assert!(Arc::ptr_eq(&first, &third));
    }

    #[test]
    fn non_string_identity_input_is_rejected() {
        let registry = IdentRegistry::new();
        registry.register::<Fruit>();
        let err = registry.decode::<Fruit>(&Value::from(7)).expect_err("must fail");
        assert_eq!(err.kind(), ErrorKind::Format);
    }
}
