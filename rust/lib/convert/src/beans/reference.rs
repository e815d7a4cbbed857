//! Valid values, solution ports and locations.

use openmeta_props::{Accessor, SentinelEnumAccessor};

use super::referenceable::DATA_TYPE;
use crate::enums::SolutionPortDirection;

pub const CATEGORY: Accessor<Option<String>> = Accessor::optional("category");
pub const PREFERRED_VALUE: Accessor<Option<String>> = Accessor::optional("preferredValue");
pub const SCOPE: Accessor<Option<String>> = Accessor::optional("scope");
pub const IS_CASE_SENSITIVE: Accessor<bool> = Accessor::new("isCaseSensitive", false);

pub const DIRECTION: SentinelEnumAccessor<SolutionPortDirection> =
    SentinelEnumAccessor::new("direction", SolutionPortDirection::Unknown);

pub const IDENTIFIER: Accessor<Option<String>> = Accessor::optional("identifier");

property_set! {
    pub struct ValidValueDefinitionProperties {
        category: Option<String> = CATEGORY,
        preferred_value: Option<String> = PREFERRED_VALUE,
        data_type: Option<String> = DATA_TYPE,
        scope: Option<String> = SCOPE,
        is_case_sensitive: bool = IS_CASE_SENSITIVE,
    }
}

property_set! {
    pub struct SolutionPortProperties {
        direction: SolutionPortDirection = DIRECTION,
    }
}

property_set! {
    pub struct LocationProperties {
        identifier: Option<String> = IDENTIFIER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use openmeta_props::{InstanceProperties, PropertyValue};

    #[test]
    fn port_direction() {
        assert_eq!(DIRECTION.get(None), SolutionPortDirection::Unknown);

        let props = InstanceProperties::new().with("direction", PropertyValue::Enum("INOUT".into()));
        assert_eq!(DIRECTION.get(Some(&props)), SolutionPortDirection::InOut);

        let props = InstanceProperties::new().with("direction", "sideways");
        assert_eq!(DIRECTION.get(Some(&props)), SolutionPortDirection::Unknown);
    }

    #[test]
    fn case_sensitivity_defaults_off() {
        assert!(!ValidValueDefinitionProperties::default().is_case_sensitive);
    }
}
