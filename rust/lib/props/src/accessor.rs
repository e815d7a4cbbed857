//! Const accessors: one property name, one target type, one default.
//!
//! ```ignore
//! pub const MAX_CARDINALITY: Accessor<i32> = Accessor::new("maxCardinality", -1);
//!
//! let max = MAX_CARDINALITY.remove(Some(&mut props));
//! ```
//!
//! Every accessor is total: an absent bag, a missing key and a value of the
//! wrong type all resolve to the default. `get` never touches the bag;
//! `remove` always consumes the entry.

use std::marker::PhantomData;

use openmeta_ir::PropertyType;

use crate::bag::InstanceProperties;
use crate::decode::Decode;
use crate::enums::MetadataEnum;

/// Name and declared type of an accessor, independent of its target type.
pub trait PropertyAccessor {
    fn name(&self) -> &'static str;

    fn property_type(&self) -> PropertyType;
}

/// Accessor for a scalar, date, array or map property.
#[derive(Debug, Clone)]
pub struct Accessor<T> {
    name: &'static str,
    default: T,
}

impl<T> Accessor<T> {
    pub const fn new(name: &'static str, default: T) -> Self {
        Self { name, default }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> Accessor<Option<T>> {
    /// Accessor whose absent value is `None`.
    pub const fn optional(name: &'static str) -> Self {
        Self::new(name, None)
    }
}

impl<T: Decode + Clone> Accessor<T> {
    pub fn default_value(&self) -> T {
        self.default.clone()
    }

    pub fn get(&self, props: Option<&InstanceProperties>) -> T {
        props
            .and_then(|p| p.get_as::<T>(self.name))
            .unwrap_or_else(|| self.default_value())
    }

    pub fn remove(&self, props: Option<&mut InstanceProperties>) -> T {
        props
            .and_then(|p| p.remove_as::<T>(self.name))
            .unwrap_or_else(|| self.default_value())
    }
}

impl<T: Decode> PropertyAccessor for Accessor<T> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn property_type(&self) -> PropertyType {
        T::property_type()
    }
}

/// Accessor for an enum property without a sentinel: unknown values and
/// missing keys both read as `None`.
#[derive(Debug, Clone, Copy)]
pub struct EnumAccessor<E> {
    name: &'static str,
    _enum: PhantomData<E>,
}

impl<E> EnumAccessor<E> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _enum: PhantomData,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<E: MetadataEnum> EnumAccessor<E> {
    pub fn get(&self, props: Option<&InstanceProperties>) -> Option<E> {
        props.and_then(|p| p.get_enum::<E>(self.name))
    }

    pub fn remove(&self, props: Option<&mut InstanceProperties>) -> Option<E> {
        props.and_then(|p| p.remove_enum::<E>(self.name))
    }
}

impl<E: MetadataEnum> PropertyAccessor for EnumAccessor<E> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn property_type(&self) -> PropertyType {
        E::property_type()
    }
}

/// Accessor for an enum property with a sentinel: unknown values and
/// missing keys both read as the sentinel.
#[derive(Debug, Clone, Copy)]
pub struct SentinelEnumAccessor<E> {
    name: &'static str,
    sentinel: E,
}

impl<E> SentinelEnumAccessor<E> {
    pub const fn new(name: &'static str, sentinel: E) -> Self {
        Self { name, sentinel }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<E: MetadataEnum> SentinelEnumAccessor<E> {
    pub fn sentinel(&self) -> E {
        self.sentinel
    }

    pub fn get(&self, props: Option<&InstanceProperties>) -> E {
        props
            .and_then(|p| p.get_enum::<E>(self.name))
            .unwrap_or(self.sentinel)
    }

    pub fn remove(&self, props: Option<&mut InstanceProperties>) -> E {
        props
            .and_then(|p| p.remove_enum::<E>(self.name))
            .unwrap_or(self.sentinel)
    }
}

impl<E: MetadataEnum> PropertyAccessor for SentinelEnumAccessor<E> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn property_type(&self) -> PropertyType {
        E::property_type()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::PropertyValue;

    crate::metadata_enum! {
        pub enum SortOrder {
            Ascending = "ASCENDING",
            Unsorted = "UNSORTED",
        }
    }

    const MAX_CARDINALITY: Accessor<i32> = Accessor::new("maxCardinality", -1);
    const ALLOWS_DUPLICATES: Accessor<bool> = Accessor::new("allowsDuplicateValues", true);
    const QUALIFIED_NAME: Accessor<Option<String>> = Accessor::optional("qualifiedName");
    const SORT: SentinelEnumAccessor<SortOrder> =
        SentinelEnumAccessor::new("sortOrder", SortOrder::Unsorted);
    const STATUS: EnumAccessor<SortOrder> = EnumAccessor::new("status");

    #[test]
    fn absent_bag_reads_default() {
        assert_eq!(MAX_CARDINALITY.get(None), -1);
        assert_eq!(MAX_CARDINALITY.remove(None), -1);
        assert!(ALLOWS_DUPLICATES.get(None));
        assert_eq!(QUALIFIED_NAME.get(None), None);
        assert_eq!(SORT.get(None), SortOrder::Unsorted);
        assert_eq!(STATUS.get(None), None);
    }

    #[test]
    fn remove_then_default() {
        let mut props = InstanceProperties::new()
            .with("maxCardinality", 5)
            .with("qualifiedName", "a");
        assert_eq!(MAX_CARDINALITY.remove(Some(&mut props)), 5);
        assert_eq!(MAX_CARDINALITY.remove(Some(&mut props)), -1);
        assert_eq!(QUALIFIED_NAME.remove(Some(&mut props)).as_deref(), Some("a"));
        assert_eq!(QUALIFIED_NAME.remove(Some(&mut props)), None);
        assert!(props.is_empty());
    }

    #[test]
    fn get_leaves_bag_alone() {
        let props = InstanceProperties::new().with("allowsDuplicateValues", false);
        assert!(!ALLOWS_DUPLICATES.get(Some(&props)));
        assert!(!ALLOWS_DUPLICATES.get(Some(&props)));
        assert_eq!(props.len(), 1);
    }

    #[test]
    fn enum_sentinel_and_null() {
        let mut props = InstanceProperties::new()
            .with("sortOrder", PropertyValue::Enum("SIDEWAYS".into()))
            .with("status", PropertyValue::Enum("SIDEWAYS".into()));
        assert_eq!(SORT.remove(Some(&mut props)), SortOrder::Unsorted);
        assert_eq!(STATUS.remove(Some(&mut props)), None);
        assert!(props.is_empty());

        let mut props =
            InstanceProperties::new().with("sortOrder", PropertyValue::Enum("ASCENDING".into()));
        assert_eq!(SORT.remove(Some(&mut props)), SortOrder::Ascending);
        assert!(props.is_empty());
    }

    #[test]
    fn declared_types() {
        assert_eq!(PropertyAccessor::property_type(&MAX_CARDINALITY), PropertyType::Int);
        assert_eq!(PropertyAccessor::property_type(&QUALIFIED_NAME), PropertyType::String);
        assert_eq!(
            PropertyAccessor::property_type(&SORT),
            PropertyType::Enum("SortOrder".into())
        );
        assert_eq!(PropertyAccessor::name(&STATUS), "status");
    }
}
