//! Serde helper for nullable fields whose key must still be present.
//!
//! Serde normally treats a missing `Option<T>` field as `None`. Routing the
//! field through `deserialize_with` disables that, so a missing key becomes a
//! `missing field` error while an explicit `null` is still accepted.

use serde::{Deserialize, Deserializer};

/// Deserialize `Option<T>` without the implicit missing-field default.
pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}
