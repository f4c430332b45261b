//! Field deserializers for hand-edited data files. A leaf that is `null` or of
//! the wrong type becomes its default instead of failing the enclosing struct.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Strings as-is, numbers and booleans as their text, anything else empty.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text_of(&Value::deserialize(deserializer)?).unwrap_or_default())
}

/// Like [`text`], but `null` and unusable values stay `None`.
pub fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text_of(&Value::deserialize(deserializer)?))
}

pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_bool().unwrap_or(false))
}

pub fn opt_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_f64())
}

/// String items of a list; other items are dropped.
pub fn texts<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.iter().filter_map(text_of).collect(),
        _ => Vec::new(),
    })
}

pub fn object<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(map) => map,
        _ => Map::new(),
    })
}

/// Any value that deserializes as `T`, otherwise `None`.
pub fn opt<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    Ok(T::deserialize(value).ok())
}

/// A list deserialized item by item.
pub fn items<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(items_of(&Value::deserialize(deserializer)?, "list"))
}

/// Like [`items`], but a missing or `null` list stays `None`.
pub fn opt_items<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        value @ Value::Array(_) => Some(items_of(&value, "list")),
        _ => None,
    })
}

/// Deserialize every element of an array on its own, skipping the ones that
/// fail. Anything but an array yields an empty list.
pub fn items_of<T: DeserializeOwned>(value: &Value, what: &str) -> Vec<T> {
    match value {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .filter_map(|(i, item)| match T::deserialize(item) {
                Ok(v) => Some(v),
                Err(e) => {
                    log::warn!("Skipping malformed {}[{}] in portfolio data: {}", what, i, e);
                    None
                }
            })
            .collect(),
        Value::Null => Vec::new(),
        _ => {
            log::warn!("Ignoring `{}` in portfolio data: expected a list", what);
            Vec::new()
        }
    }
}

fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Row {
        #[serde(deserialize_with = "text")]
        label: String,
        #[serde(deserialize_with = "opt_text")]
        note: Option<String>,
        #[serde(deserialize_with = "flag")]
        on: bool,
        #[serde(deserialize_with = "texts")]
        tags: Vec<String>,
    }

    #[test]
    fn wrong_leaves_fall_back() {
        let row: Row = serde_json::from_value(json!({
            "label": null,
            "note": 3.5,
            "on": "yes",
            "tags": ["a", null, 2, {"x": 1}]
        }))
        .unwrap();
        assert_eq!(row.label, "");
        assert_eq!(row.note.as_deref(), Some("3.5"));
        assert!(!row.on);
        assert_eq!(row.tags, vec!["a", "2"]);
    }

    #[test]
    fn items_skip_bad_elements() {
        let rows: Vec<Row> = items_of(&json!([{"label": "one"}, "two", {"label": "three"}]), "rows");
        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["one", "three"]);
        assert!(items_of::<Row>(&json!({"label": "x"}), "rows").is_empty());
    }
}
