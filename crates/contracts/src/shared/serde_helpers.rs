//! Identifier fields arrive as strings from some endpoints and as numbers
//! from others; both deserialize into `String`.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Int(i64),
    Uint(u64),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Text(s) => s,
            RawId::Int(n) => n.to_string(),
            RawId::Uint(n) => n.to_string(),
        }
    }
}

pub fn id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    RawId::deserialize(deserializer).map(RawId::into_string)
}

pub fn opt_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let raw = Option::<RawId>::deserialize(deserializer)?;
    Ok(raw.map(RawId::into_string).filter(|s| !s.is_empty()))
}

pub fn id_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let raw = Option::<Vec<RawId>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(RawId::into_string)
        .collect())
}

/// `null` and a missing field both become `T::default()`
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Row {
        #[serde(deserialize_with = "super::id")]
        id: String,
        #[serde(default, deserialize_with = "super::opt_id")]
        parent: Option<String>,
        #[serde(default, deserialize_with = "super::id_list")]
        tags: Vec<String>,
        #[serde(default, deserialize_with = "super::null_as_default")]
        notes: Vec<String>,
        #[serde(default = "super::default_true")]
        active: bool,
    }

    #[test]
    fn test_numeric_and_text_ids() {
        let row: Row = serde_json::from_str(r#"{"id": 42, "parent": "7", "tags": [1, "x"]}"#).unwrap();
        assert_eq!(row.id, "42");
        assert_eq!(row.parent.as_deref(), Some("7"));
        assert_eq!(row.tags, vec!["1", "x"]);
        assert!(row.active);
    }

    #[test]
    fn test_null_collection_defaults() {
        let row: Row = serde_json::from_str(r#"{"id": "a", "notes": null, "active": false}"#).unwrap();
        assert!(row.notes.is_empty());
        assert!(!row.active);
    }

    #[test]
    fn test_missing_and_null_optional() {
        let row: Row = serde_json::from_str(r#"{"id": "a", "parent": null, "tags": null}"#).unwrap();
        assert_eq!(row.parent, None);
        assert!(row.tags.is_empty());

        let row: Row = serde_json::from_str(r#"{"id": "a"}"#).unwrap();
        assert_eq!(row.parent, None);
    }
}
