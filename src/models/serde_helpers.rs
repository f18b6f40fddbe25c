use serde::{Deserialize, Deserializer};

/// Reads an optional string field, treating `null` the same as a missing
/// value. Pair with `#[serde(default)]` so absent keys also become `""`.
pub fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
