//! Schema elements, schema types and schema attributes.

use openmeta_props::{Accessor, SentinelEnumAccessor};

use super::referenceable::{DATA_TYPE, LENGTH, USAGE};
use crate::enums::DataItemSortOrder;

pub const IS_DEPRECATED: Accessor<bool> = Accessor::new("isDeprecated", false);

pub const VERSION_NUMBER: Accessor<Option<String>> = Accessor::optional("versionNumber");
pub const AUTHOR: Accessor<Option<String>> = Accessor::optional("author");
pub const ENCODING_STANDARD: Accessor<Option<String>> = Accessor::optional("encodingStandard");
pub const NAMESPACE: Accessor<Option<String>> = Accessor::optional("namespace");

pub const DEFAULT_VALUE: Accessor<Option<String>> = Accessor::optional("defaultValue");
pub const FIXED_VALUE: Accessor<Option<String>> = Accessor::optional("fixedValue");

pub const POSITION: Accessor<i32> = Accessor::new("position", 0);
pub const MIN_CARDINALITY: Accessor<i32> = Accessor::new("minCardinality", 0);
pub const MAX_CARDINALITY: Accessor<i32> = Accessor::new("maxCardinality", -1);
pub const ALLOWS_DUPLICATE_VALUES: Accessor<bool> = Accessor::new("allowsDuplicateValues", true);
pub const ORDERED_VALUES: Accessor<bool> = Accessor::new("orderedValues", false);
pub const SORT_ORDER: SentinelEnumAccessor<DataItemSortOrder> =
    SentinelEnumAccessor::new("sortOrder", DataItemSortOrder::Unsorted);
pub const MINIMUM_LENGTH: Accessor<i32> = Accessor::new("minimumLength", 0);
pub const PRECISION: Accessor<i32> = Accessor::new("precision", 0);
pub const IS_NULLABLE: Accessor<bool> = Accessor::new("isNullable", true);
pub const DEFAULT_VALUE_OVERRIDE: Accessor<Option<String>> =
    Accessor::optional("defaultValueOverride");
pub const NATIVE_CLASS: Accessor<Option<String>> = Accessor::optional("nativeClass");
pub const ALIASES: Accessor<Option<Vec<String>>> = Accessor::optional("aliases");

property_set! {
    pub struct SchemaElementProperties {
        is_deprecated: bool = IS_DEPRECATED,
    }
}

property_set! {
    pub struct SchemaTypeProperties {
        version_number: Option<String> = VERSION_NUMBER,
        author: Option<String> = AUTHOR,
        usage: Option<String> = USAGE,
        encoding_standard: Option<String> = ENCODING_STANDARD,
        namespace: Option<String> = NAMESPACE,
    }
}

property_set! {
    pub struct PrimitiveSchemaTypeProperties {
        data_type: Option<String> = DATA_TYPE,
        default_value: Option<String> = DEFAULT_VALUE,
    }
}

property_set! {
    pub struct LiteralSchemaTypeProperties {
        data_type: Option<String> = DATA_TYPE,
        fixed_value: Option<String> = FIXED_VALUE,
    }
}

property_set! {
    pub struct SchemaAttributeProperties {
        position: i32 = POSITION,
        min_cardinality: i32 = MIN_CARDINALITY,
        max_cardinality: i32 = MAX_CARDINALITY,
        allows_duplicate_values: bool = ALLOWS_DUPLICATE_VALUES,
        ordered_values: bool = ORDERED_VALUES,
        sort_order: DataItemSortOrder = SORT_ORDER,
        minimum_length: i32 = MINIMUM_LENGTH,
        length: i32 = LENGTH,
        precision: i32 = PRECISION,
        is_nullable: bool = IS_NULLABLE,
        default_value_override: Option<String> = DEFAULT_VALUE_OVERRIDE,
        native_class: Option<String> = NATIVE_CLASS,
        aliases: Option<Vec<String>> = ALIASES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use openmeta_props::{InstanceProperties, PropertyValue};

    #[test]
    fn absent_attribute_defaults() {
        let attribute = SchemaAttributeProperties::get_from(None);
        assert_eq!(attribute.position, 0);
        assert_eq!(attribute.min_cardinality, 0);
        assert_eq!(attribute.max_cardinality, -1);
        assert!(attribute.allows_duplicate_values);
        assert!(!attribute.ordered_values);
        assert_eq!(attribute.sort_order, DataItemSortOrder::Unsorted);
        assert!(attribute.is_nullable);
        assert_eq!(attribute.length, 0);
        assert_eq!(attribute.aliases, None);
        assert!(!SchemaElementProperties::default().is_deprecated);
    }

    #[test]
    fn stored_values_override_defaults() {
        let mut props = InstanceProperties::new()
            .with("maxCardinality", 3)
            .with("allowsDuplicateValues", false)
            .with("sortOrder", PropertyValue::Enum("DESCENDING".into()))
            .with("aliases", PropertyValue::string_array(["a", "b"]));
        let attribute = SchemaAttributeProperties::remove_from(&mut props);
        assert_eq!(attribute.max_cardinality, 3);
        assert!(!attribute.allows_duplicate_values);
        assert_eq!(attribute.sort_order, DataItemSortOrder::Descending);
        assert_eq!(attribute.aliases, Some(vec!["a".to_string(), "b".to_string()]));
        assert!(props.is_empty());
    }

    #[test]
    fn unknown_sort_order_reads_unsorted() {
        let mut props =
            InstanceProperties::new().with("sortOrder", PropertyValue::Enum("SIDEWAYS".into()));
        assert_eq!(SORT_ORDER.remove(Some(&mut props)), DataItemSortOrder::Unsorted);
        assert!(props.is_empty());
    }
}
