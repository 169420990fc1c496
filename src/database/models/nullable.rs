use serde::{Deserialize, Deserializer};

/// Deserializer for clearable update fields. Paired with `#[serde(default)]`,
/// a missing key stays `None` while an explicit `null` becomes `Some(None)`.
pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
