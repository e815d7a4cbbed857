//! Properties every `Referenceable` carries, plus accessors shared by
//! several families.

use indexmap::IndexMap;
use openmeta_props::Accessor;

pub const QUALIFIED_NAME: Accessor<Option<String>> = Accessor::optional("qualifiedName");
pub const DISPLAY_NAME: Accessor<Option<String>> = Accessor::optional("displayName");
pub const DESCRIPTION: Accessor<Option<String>> = Accessor::optional("description");
pub const ADDITIONAL_PROPERTIES: Accessor<Option<IndexMap<String, String>>> =
    Accessor::optional("additionalProperties");

pub const NAME: Accessor<Option<String>> = Accessor::optional("name");
pub const FORMULA: Accessor<Option<String>> = Accessor::optional("formula");
pub const FORMULA_TYPE: Accessor<Option<String>> = Accessor::optional("formulaType");
pub const DATA_TYPE: Accessor<Option<String>> = Accessor::optional("dataType");
pub const USAGE: Accessor<Option<String>> = Accessor::optional("usage");
pub const SUMMARY: Accessor<Option<String>> = Accessor::optional("summary");
pub const LABEL: Accessor<Option<String>> = Accessor::optional("label");
pub const LENGTH: Accessor<i32> = Accessor::new("length", 0);

// Stewardship fields shared by governance classifications and semantic
// assignments.
pub const CONFIDENCE: Accessor<i32> = Accessor::new("confidence", 0);
pub const STEWARD: Accessor<Option<String>> = Accessor::optional("steward");
pub const STEWARD_TYPE_NAME: Accessor<Option<String>> = Accessor::optional("stewardTypeName");
pub const STEWARD_PROPERTY_NAME: Accessor<Option<String>> =
    Accessor::optional("stewardPropertyName");
pub const SOURCE: Accessor<Option<String>> = Accessor::optional("source");
pub const NOTES: Accessor<Option<String>> = Accessor::optional("notes");

property_set! {
    pub struct ReferenceableProperties {
        qualified_name: Option<String> = QUALIFIED_NAME,
        display_name: Option<String> = DISPLAY_NAME,
        description: Option<String> = DESCRIPTION,
        additional_properties: Option<IndexMap<String, String>> = ADDITIONAL_PROPERTIES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use openmeta_props::{InstanceProperties, PropertyValue};

    #[test]
    fn remove_from_consumes_known_keys() {
        let mut props = InstanceProperties::new()
            .with("qualifiedName", "x::y")
            .with("additionalProperties", PropertyValue::string_map([("k", "v")]))
            .with("customField123", "z");
        let referenceable = ReferenceableProperties::remove_from(&mut props);
        assert_eq!(referenceable.qualified_name.as_deref(), Some("x::y"));
        assert_eq!(referenceable.display_name, None);
        assert_eq!(referenceable.additional_properties.unwrap()["k"], "v");
        assert_eq!(props.names().collect::<Vec<_>>(), vec!["customField123"]);
    }

    #[test]
    fn get_from_leaves_bag_alone() {
        let props = InstanceProperties::new().with("displayName", "Y");
        let first = ReferenceableProperties::get_from(Some(&props));
        let second = ReferenceableProperties::get_from(Some(&props));
        assert_eq!(first, second);
        assert_eq!(props.len(), 1);
    }

    #[test]
    fn default_is_all_absent() {
        assert_eq!(
            ReferenceableProperties::default(),
            ReferenceableProperties::get_from(None)
        );
        assert_eq!(
            ReferenceableProperties::property_names(),
            vec!["qualifiedName", "displayName", "description", "additionalProperties"]
        );
    }
}
