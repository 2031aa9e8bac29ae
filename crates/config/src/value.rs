use serde::Deserialize;

/// Keeps an explicit `null` distinct from a missing key.
///
/// Pair with `#[serde(default)]`: a missing key stays `None` while a key set
/// to `~` becomes `Some(Value::Null)`.
pub(crate) fn present<'de, D>(deserializer: D) -> Result<Option<crate::Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    crate::Value::deserialize(deserializer).map(Some)
}

/// A string, or `None` for anything else.
pub(crate) fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match crate::Value::deserialize(deserializer)? {
        crate::Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// `true` only for a literal `true`.
pub(crate) fn strict_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    crate::Value::deserialize(deserializer).map(|value| value == crate::Value::Bool(true))
}

/// JavaScript truthiness: `null`, `false`, `0`, `NaN` and `""` are false.
pub(crate) fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    crate::Value::deserialize(deserializer).map(|value| is_truthy(&value))
}

fn is_truthy(value: &crate::Value) -> bool {
    match value {
        crate::Value::Null => false,
        crate::Value::Bool(b) => *b,
        crate::Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        crate::Value::String(s) => !s.is_empty(),
        crate::Value::Array(_) | crate::Value::Object(_) => true,
    }
}

/// A nested record that is empty unless given as a mapping.
pub(crate) fn record<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::de::DeserializeOwned,
{
    Ok(parse_record(crate::Value::deserialize(deserializer)?))
}

/// An optional record: absent when falsy, empty when not a mapping.
pub(crate) fn optional_record<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::de::DeserializeOwned,
{
    let value = crate::Value::deserialize(deserializer)?;
    Ok(is_truthy(&value).then(|| parse_record(value)))
}

fn parse_record<T>(value: crate::Value) -> T
where
    T: Default + serde::de::DeserializeOwned,
{
    match value {
        crate::Value::Object(_) => serde_json::from_value(value).unwrap_or_else(|e| {
            log::debug!("Ignoring malformed record: {e}");
            T::default()
        }),
        _ => T::default(),
    }
}
