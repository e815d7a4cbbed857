//! Decoding stored values into accessor target types.
//!
//! A value that does not decode yields `None`; the accessor falls back to
//! its default.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use openmeta_ir::PropertyType;

use crate::value::PropertyValue;

/// A Rust type a property value can be decoded into.
pub trait Decode: Sized {
    /// `None` when the stored value has an incompatible type.
    fn decode(value: &PropertyValue) -> Option<Self>;

    /// Declared property type this target corresponds to.
    fn property_type() -> PropertyType;
}

impl<T: Decode> Decode for Option<T> {
    fn decode(value: &PropertyValue) -> Option<Self> {
        T::decode(value).map(Some)
    }

    fn property_type() -> PropertyType {
        T::property_type()
    }
}

impl Decode for String {
    fn decode(value: &PropertyValue) -> Option<Self> {
        value.as_str().map(str::to_string)
    }

    fn property_type() -> PropertyType {
        PropertyType::String
    }
}

impl Decode for i32 {
    fn decode(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Int(v) => Some(*v),
            PropertyValue::Long(v) => i32::try_from(*v).ok(),
            _ => None,
        }
    }

    fn property_type() -> PropertyType {
        PropertyType::Int
    }
}

impl Decode for i64 {
    fn decode(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Int(v) => Some(i64::from(*v)),
            PropertyValue::Long(v) => Some(*v),
            _ => None,
        }
    }

    fn property_type() -> PropertyType {
        PropertyType::Long
    }
}

impl Decode for bool {
    fn decode(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    fn property_type() -> PropertyType {
        PropertyType::Boolean
    }
}

impl Decode for f64 {
    fn decode(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Double(v) => Some(*v),
            PropertyValue::Int(v) => Some(f64::from(*v)),
            PropertyValue::Long(v) => Some(*v as f64),
            _ => None,
        }
    }

    fn property_type() -> PropertyType {
        PropertyType::Double
    }
}

impl Decode for DateTime<Utc> {
    fn decode(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Date(v) => Some(*v),
            _ => None,
        }
    }

    fn property_type() -> PropertyType {
        PropertyType::Date
    }
}

/// Arrays of strings accept any primitive members, rendered to text.
impl Decode for Vec<String> {
    fn decode(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Array(items) => items.iter().map(PropertyValue::render).collect(),
            _ => None,
        }
    }

    fn property_type() -> PropertyType {
        PropertyType::string_array()
    }
}

fn decode_map<T>(
    value: &PropertyValue,
    member: impl Fn(&PropertyValue) -> Option<T>,
) -> Option<IndexMap<String, T>> {
    match value {
        PropertyValue::Map(entries) => entries
            .iter()
            .map(|(k, v)| member(v).map(|d| (k.clone(), d)))
            .collect(),
        _ => None,
    }
}

fn map_type(inner: PropertyType) -> PropertyType {
    PropertyType::Map(Box::new(inner))
}

/// String maps accept any primitive members, rendered to text.
impl Decode for IndexMap<String, String> {
    fn decode(value: &PropertyValue) -> Option<Self> {
        decode_map(value, PropertyValue::render)
    }

    fn property_type() -> PropertyType {
        PropertyType::string_map()
    }
}

impl Decode for IndexMap<String, i32> {
    fn decode(value: &PropertyValue) -> Option<Self> {
        decode_map(value, i32::decode)
    }

    fn property_type() -> PropertyType {
        map_type(PropertyType::Int)
    }
}

impl Decode for IndexMap<String, i64> {
    fn decode(value: &PropertyValue) -> Option<Self> {
        decode_map(value, i64::decode)
    }

    fn property_type() -> PropertyType {
        map_type(PropertyType::Long)
    }
}

impl Decode for IndexMap<String, bool> {
    fn decode(value: &PropertyValue) -> Option<Self> {
        decode_map(value, bool::decode)
    }

    fn property_type() -> PropertyType {
        map_type(PropertyType::Boolean)
    }
}

impl Decode for IndexMap<String, f64> {
    fn decode(value: &PropertyValue) -> Option<Self> {
        decode_map(value, f64::decode)
    }

    fn property_type() -> PropertyType {
        map_type(PropertyType::Double)
    }
}

impl Decode for IndexMap<String, DateTime<Utc>> {
    fn decode(value: &PropertyValue) -> Option<Self> {
        decode_map(value, DateTime::<Utc>::decode)
    }

    fn property_type() -> PropertyType {
        map_type(PropertyType::Date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_accepts_in_range_long() {
        assert_eq!(i32::decode(&PropertyValue::Long(5)), Some(5));
        assert_eq!(i32::decode(&PropertyValue::Long(i64::MAX)), None);
        assert_eq!(i32::decode(&PropertyValue::from("5")), None);
        assert_eq!(i64::decode(&PropertyValue::Int(5)), Some(5));
    }

    #[test]
    fn double_widens_ints_and_longs() {
        assert_eq!(f64::decode(&PropertyValue::Int(3)), Some(3.0));
        assert_eq!(f64::decode(&PropertyValue::Long(1 << 40)), Some(1_099_511_627_776.0));
        assert_eq!(f64::decode(&PropertyValue::Boolean(true)), None);

        let mut entries = IndexMap::new();
        entries.insert("rows".to_string(), PropertyValue::Long(12));
        entries.insert("ratio".to_string(), PropertyValue::Double(0.5));
        let decoded = IndexMap::<String, f64>::decode(&PropertyValue::Map(entries)).unwrap();
        assert_eq!(decoded["rows"], 12.0);
        assert_eq!(decoded["ratio"], 0.5);
    }

    #[test]
    fn string_is_strict() {
        assert_eq!(String::decode(&PropertyValue::Int(1)), None);
        assert_eq!(String::decode(&PropertyValue::Enum("A".into())), None);
    }

    #[test]
    fn string_map_renders_primitives() {
        let mut entries = IndexMap::new();
        entries.insert("a".to_string(), PropertyValue::from("x"));
        entries.insert("b".to_string(), PropertyValue::Int(2));
        let decoded = IndexMap::<String, String>::decode(&PropertyValue::Map(entries)).unwrap();
        assert_eq!(decoded["a"], "x");
        assert_eq!(decoded["b"], "2");
    }

    #[test]
    fn typed_map_requires_every_member() {
        let mut entries = IndexMap::new();
        entries.insert("a".to_string(), PropertyValue::Long(1));
        entries.insert("b".to_string(), PropertyValue::from("x"));
        assert_eq!(IndexMap::<String, i64>::decode(&PropertyValue::Map(entries)), None);
    }

    #[test]
    fn option_wraps_inner() {
        assert_eq!(Option::<String>::decode(&PropertyValue::from("x")), Some(Some("x".into())));
        assert_eq!(Option::<String>::decode(&PropertyValue::Int(1)), None);
        assert_eq!(Option::<Vec<String>>::property_type(), PropertyType::string_array());
    }
}
