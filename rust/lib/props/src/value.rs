use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One typed value in a property bag.
///
/// Serialized adjacently tagged so JSON input stays unambiguous:
///
/// ```json
/// {"type": "int", "value": 1}
/// {"type": "map", "value": {"owner": {"type": "string", "value": "ops"}}}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum PropertyValue {
    String(String),
    Int(i32),
    Long(i64),
    Boolean(bool),
    Double(f64),
    Date(DateTime<Utc>),
    /// Symbolic name of an enumeration value (e.g. `ASCENDING`).
    Enum(String),
    Array(Vec<PropertyValue>),
    Map(IndexMap<String, PropertyValue>),
}

impl PropertyValue {
    /// Short label for log messages.
    pub fn type_label(&self) -> &'static str {
        match self {
            PropertyValue::String(_) => "string",
            PropertyValue::Int(_) => "int",
            PropertyValue::Long(_) => "long",
            PropertyValue::Boolean(_) => "boolean",
            PropertyValue::Double(_) => "double",
            PropertyValue::Date(_) => "date",
            PropertyValue::Enum(_) => "enum",
            PropertyValue::Array(_) => "array",
            PropertyValue::Map(_) => "map",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Text form of a primitive value. `None` for arrays and maps.
    pub fn render(&self) -> Option<String> {
        match self {
            PropertyValue::String(s) | PropertyValue::Enum(s) => Some(s.clone()),
            PropertyValue::Int(v) => Some(v.to_string()),
            PropertyValue::Long(v) => Some(v.to_string()),
            PropertyValue::Boolean(v) => Some(v.to_string()),
            PropertyValue::Double(v) => Some(v.to_string()),
            PropertyValue::Date(v) => Some(v.to_rfc3339()),
            PropertyValue::Array(_) | PropertyValue::Map(_) => None,
        }
    }

    /// Build a map value from string pairs, e.g. for `additionalProperties`.
    pub fn string_map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        PropertyValue::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), PropertyValue::String(v.into())))
                .collect(),
        )
    }

    /// Build an array value from strings.
    pub fn string_array<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PropertyValue::Array(
            items
                .into_iter()
                .map(|s| PropertyValue::String(s.into()))
                .collect(),
        )
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::String(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_string())
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        PropertyValue::Int(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Long(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Boolean(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Double(value)
    }
}

impl From<DateTime<Utc>> for PropertyValue {
    fn from(value: DateTime<Utc>) -> Self {
        PropertyValue::Date(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn render_primitives() {
        assert_eq!(PropertyValue::from("x").render().as_deref(), Some("x"));
        assert_eq!(PropertyValue::Int(-1).render().as_deref(), Some("-1"));
        assert_eq!(PropertyValue::Boolean(true).render().as_deref(), Some("true"));
        assert_eq!(
            PropertyValue::Enum("ASCENDING".into()).render().as_deref(),
            Some("ASCENDING")
        );
        let date = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(
            PropertyValue::Date(date).render().as_deref(),
            Some("2024-03-01T12:00:00+00:00")
        );
        assert_eq!(PropertyValue::string_array(["a"]).render(), None);
    }

    #[test]
    fn tagged_json() {
        let v: PropertyValue = serde_json::from_str(r#"{"type": "int", "value": 1}"#).unwrap();
        assert_eq!(v, PropertyValue::Int(1));

        let v: PropertyValue = serde_json::from_str(
            r#"{"type": "map", "value": {"k": {"type": "string", "value": "v"}}}"#,
        )
        .unwrap();
        assert_eq!(v, PropertyValue::string_map([("k", "v")]));

        let json = serde_json::to_string(&PropertyValue::Long(7)).unwrap();
        assert_eq!(json, r#"{"type":"long","value":7}"#);
    }
}
