/// Serde utility functions for common patterns
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::marker::PhantomData;

use crate::db::FieldUpdate;

/// Deserialize a present field into `FieldUpdate::Set`, rejecting `null`.
///
/// - Missing field → `Unset` (via `#[serde(default)]` on the containing field)
/// - Field is `null` → error
/// - Field has value → `Set(value)`
impl<'de, T: Deserialize<'de>> Deserialize<'de> for FieldUpdate<T> {
    fn deserialize<D>(de: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FieldUpdateVisitor<T> {
            _inner: PhantomData<T>,
        }

        impl<'de, T: Deserialize<'de>> serde::de::Visitor<'de> for FieldUpdateVisitor<T> {
            type Value = FieldUpdate<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a value (omit the field to leave it unchanged)")
            }

            fn visit_none<E>(self) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Err(E::custom(
                    "null is not allowed; omit the field to leave it unchanged",
                ))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                self.visit_none()
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                T::deserialize(deserializer).map(FieldUpdate::Set)
            }
        }

        de.deserialize_option(FieldUpdateVisitor {
            _inner: PhantomData,
        })
    }
}

/// Deserialize a string, treating `null` like a missing field.
///
/// Pair with `#[serde(default)]` so both cases yield an empty string.
pub(crate) fn null_as_empty<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(de).map(Option::unwrap_or_default)
}
