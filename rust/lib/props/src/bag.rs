use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::decode::Decode;
use crate::enums::MetadataEnum;
use crate::value::PropertyValue;

/// Property bag attached to one element, classification or relationship.
///
/// Keys are unique and keep insertion order. `get_*` reads never modify the
/// bag; `remove_*` reads always consume the entry. A value of the wrong type
/// is discarded (logged at debug) and the read falls back to its default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceProperties {
    properties: IndexMap<String, PropertyValue>,
}

impl InstanceProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace a value. Replacing keeps the original position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<PropertyValue>) {
        self.properties.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    /// Remove and return a value, keeping the order of the rest.
    pub fn remove(&mut self, name: &str) -> Option<PropertyValue> {
        self.properties.shift_remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Drain every remaining entry, leaving the bag empty.
    pub fn take_remaining(&mut self) -> IndexMap<String, PropertyValue> {
        std::mem::take(&mut self.properties)
    }

    // ── Generic typed access ──

    pub fn get_as<T: Decode>(&self, name: &str) -> Option<T> {
        self.properties.get(name).and_then(T::decode)
    }

    pub fn remove_as<T: Decode>(&mut self, name: &str) -> Option<T> {
        let value = self.properties.shift_remove(name)?;
        let decoded = T::decode(&value);
        if decoded.is_none() {
            debug!(
                "property '{}' holds a {} value; discarded",
                name,
                value.type_label()
            );
        }
        decoded
    }

    pub fn get_enum<E: MetadataEnum>(&self, name: &str) -> Option<E> {
        self.properties.get(name).and_then(E::from_value)
    }

    pub fn remove_enum<E: MetadataEnum>(&mut self, name: &str) -> Option<E> {
        let value = self.properties.shift_remove(name)?;
        let decoded = E::from_value(&value);
        if decoded.is_none() {
            debug!(
                "property '{}' is not a known {} value ({:?}); discarded",
                name,
                E::TYPE_NAME,
                value
            );
        }
        decoded
    }

    // ── Scalars ──

    pub fn get_string(&self, name: &str) -> Option<String> {
        self.get_as(name)
    }

    pub fn remove_string(&mut self, name: &str) -> Option<String> {
        self.remove_as(name)
    }

    /// Missing or mistyped ints read as `0`.
    pub fn get_int(&self, name: &str) -> i32 {
        self.get_as(name).unwrap_or(0)
    }

    pub fn remove_int(&mut self, name: &str) -> i32 {
        self.remove_as(name).unwrap_or(0)
    }

    pub fn get_long(&self, name: &str) -> i64 {
        self.get_as(name).unwrap_or(0)
    }

    pub fn remove_long(&mut self, name: &str) -> i64 {
        self.remove_as(name).unwrap_or(0)
    }

    /// Missing or mistyped booleans read as `false`.
    pub fn get_boolean(&self, name: &str) -> bool {
        self.get_as(name).unwrap_or(false)
    }

    pub fn remove_boolean(&mut self, name: &str) -> bool {
        self.remove_as(name).unwrap_or(false)
    }

    pub fn get_double(&self, name: &str) -> f64 {
        self.get_as(name).unwrap_or(0.0)
    }

    pub fn remove_double(&mut self, name: &str) -> f64 {
        self.remove_as(name).unwrap_or(0.0)
    }

    pub fn get_date(&self, name: &str) -> Option<DateTime<Utc>> {
        self.get_as(name)
    }

    pub fn remove_date(&mut self, name: &str) -> Option<DateTime<Utc>> {
        self.remove_as(name)
    }

    // ── Collections ──

    pub fn get_string_array(&self, name: &str) -> Option<Vec<String>> {
        self.get_as(name)
    }

    pub fn remove_string_array(&mut self, name: &str) -> Option<Vec<String>> {
        self.remove_as(name)
    }

    pub fn get_string_map(&self, name: &str) -> Option<IndexMap<String, String>> {
        self.get_as(name)
    }

    pub fn remove_string_map(&mut self, name: &str) -> Option<IndexMap<String, String>> {
        self.remove_as(name)
    }

    pub fn get_integer_map(&self, name: &str) -> Option<IndexMap<String, i32>> {
        self.get_as(name)
    }

    pub fn remove_integer_map(&mut self, name: &str) -> Option<IndexMap<String, i32>> {
        self.remove_as(name)
    }

    pub fn get_long_map(&self, name: &str) -> Option<IndexMap<String, i64>> {
        self.get_as(name)
    }

    pub fn remove_long_map(&mut self, name: &str) -> Option<IndexMap<String, i64>> {
        self.remove_as(name)
    }

    pub fn get_boolean_map(&self, name: &str) -> Option<IndexMap<String, bool>> {
        self.get_as(name)
    }

    pub fn remove_boolean_map(&mut self, name: &str) -> Option<IndexMap<String, bool>> {
        self.remove_as(name)
    }

    pub fn get_double_map(&self, name: &str) -> Option<IndexMap<String, f64>> {
        self.get_as(name)
    }

    pub fn remove_double_map(&mut self, name: &str) -> Option<IndexMap<String, f64>> {
        self.remove_as(name)
    }

    pub fn get_date_map(&self, name: &str) -> Option<IndexMap<String, DateTime<Utc>>> {
        self.get_as(name)
    }

    pub fn remove_date_map(&mut self, name: &str) -> Option<IndexMap<String, DateTime<Utc>>> {
        self.remove_as(name)
    }

    /// Raw map value, members untouched.
    pub fn get_map(&self, name: &str) -> Option<IndexMap<String, PropertyValue>> {
        match self.properties.get(name) {
            Some(PropertyValue::Map(entries)) => Some(entries.clone()),
            _ => None,
        }
    }

    pub fn remove_map(&mut self, name: &str) -> Option<IndexMap<String, PropertyValue>> {
        match self.properties.shift_remove(name)? {
            PropertyValue::Map(entries) => Some(entries),
            other => {
                debug!("property '{}' holds a {} value; discarded", name, other.type_label());
                None
            }
        }
    }
}

impl From<IndexMap<String, PropertyValue>> for InstanceProperties {
    fn from(properties: IndexMap<String, PropertyValue>) -> Self {
        Self { properties }
    }
}

impl<K: Into<String>> FromIterator<(K, PropertyValue)> for InstanceProperties {
    fn from_iter<I: IntoIterator<Item = (K, PropertyValue)>>(iter: I) -> Self {
        Self {
            properties: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn bag() -> InstanceProperties {
        InstanceProperties::new()
            .with("qualifiedName", "x::y")
            .with("minCardinality", 1)
            .with("isDeprecated", true)
            .with("fileSize", 42_i64)
            .with("aliases", PropertyValue::string_array(["a", "b"]))
            .with("additionalProperties", PropertyValue::string_map([("k", "v")]))
    }

    #[test]
    fn remove_is_destructive() {
        let mut props = bag();
        assert_eq!(props.remove_string("qualifiedName").as_deref(), Some("x::y"));
        assert_eq!(props.remove_string("qualifiedName"), None);
        assert_eq!(props.remove_int("minCardinality"), 1);
        assert_eq!(props.remove_int("minCardinality"), 0);
        assert!(props.remove_boolean("isDeprecated"));
        assert!(!props.remove_boolean("isDeprecated"));
    }

    #[test]
    fn get_is_idempotent() {
        let props = bag();
        let before = props.clone();
        assert_eq!(props.get_long("fileSize"), 42);
        assert_eq!(props.get_long("fileSize"), 42);
        assert_eq!(
            props.get_string_array("aliases"),
            Some(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(props, before);
    }

    #[test]
    fn absent_defaults() {
        let mut props = InstanceProperties::new();
        assert_eq!(props.remove_string("x"), None);
        assert_eq!(props.remove_int("x"), 0);
        assert_eq!(props.remove_long("x"), 0);
        assert!(!props.remove_boolean("x"));
        assert_eq!(props.remove_double("x"), 0.0);
        assert_eq!(props.remove_date("x"), None);
        assert_eq!(props.remove_string_map("x"), None);
        assert_eq!(props.remove_map("x"), None);
    }

    #[test]
    fn mistyped_value_is_consumed() {
        let mut props = InstanceProperties::new()
            .with("minCardinality", "one")
            .with("createTime", "yesterday");
        assert_eq!(props.get_int("minCardinality"), 0);
        assert!(props.contains("minCardinality"));
        assert_eq!(props.remove_int("minCardinality"), 0);
        assert!(!props.contains("minCardinality"));
        assert_eq!(props.remove_date("createTime"), None);
        assert!(props.is_empty());
    }

    #[test]
    fn remove_keeps_order_of_rest() {
        let mut props = bag();
        props.remove("minCardinality");
        let names: Vec<&str> = props.names().collect();
        assert_eq!(
            names,
            vec!["qualifiedName", "isDeprecated", "fileSize", "aliases", "additionalProperties"]
        );
    }

    #[test]
    fn typed_maps() {
        let date = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let mut flags = IndexMap::new();
        flags.insert("nullable".to_string(), PropertyValue::Boolean(true));
        let mut dates = IndexMap::new();
        dates.insert("first".to_string(), PropertyValue::Date(date));
        let mut counts = IndexMap::new();
        counts.insert("a".to_string(), PropertyValue::Int(3));

        let mut props = InstanceProperties::new()
            .with("flags", PropertyValue::Map(flags))
            .with("dates", PropertyValue::Map(dates))
            .with("counts", PropertyValue::Map(counts));

        assert_eq!(props.remove_boolean_map("flags").unwrap()["nullable"], true);
        assert_eq!(props.remove_date_map("dates").unwrap()["first"], date);
        assert_eq!(props.get_long_map("counts").unwrap()["a"], 3);
        assert_eq!(props.get_double_map("counts").unwrap()["a"], 3.0);
        assert_eq!(props.remove_integer_map("counts").unwrap()["a"], 3);
        assert!(props.is_empty());
    }

    #[test]
    fn raw_map() {
        let mut props = bag();
        let raw = props.remove_map("additionalProperties").unwrap();
        assert_eq!(raw["k"], PropertyValue::from("v"));
        assert!(!props.contains("additionalProperties"));
        assert_eq!(props.remove_map("qualifiedName"), None);
        assert!(!props.contains("qualifiedName"));
    }

    #[test]
    fn take_remaining_empties_bag() {
        let mut props = bag();
        props.remove_string("qualifiedName");
        let rest = props.take_remaining();
        assert_eq!(rest.len(), 5);
        assert!(props.is_empty());
    }

    #[test]
    fn transparent_json() {
        let props: InstanceProperties = serde_json::from_str(
            r#"{"qualifiedName": {"type": "string", "value": "a"}, "position": {"type": "int", "value": 2}}"#,
        )
        .unwrap();
        assert_eq!(props.get_string("qualifiedName").as_deref(), Some("a"));
        assert_eq!(props.get_int("position"), 2);
    }
}
