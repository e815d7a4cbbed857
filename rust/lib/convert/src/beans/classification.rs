//! Classification property sets: governance levels, retention, location,
//! anchors, templates and mementos.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use openmeta_props::{Accessor, EnumAccessor};

use super::referenceable::{
    ADDITIONAL_PROPERTIES, CONFIDENCE, DESCRIPTION, NAME, NOTES, SOURCE, STEWARD,
    STEWARD_PROPERTY_NAME, STEWARD_TYPE_NAME,
};
use crate::enums::GovernanceClassificationStatus;

pub const GOVERNANCE_STATUS: EnumAccessor<GovernanceClassificationStatus> =
    EnumAccessor::new("status");
pub const LEVEL_IDENTIFIER: Accessor<i32> = Accessor::new("levelIdentifier", 0);

pub const ASSOCIATED_GUID: Accessor<Option<String>> = Accessor::optional("associatedGUID");
pub const ARCHIVE_AFTER: Accessor<Option<DateTime<Utc>>> = Accessor::optional("archiveAfter");
pub const DELETE_AFTER: Accessor<Option<DateTime<Utc>>> = Accessor::optional("deleteAfter");

pub const COORDINATES: Accessor<Option<String>> = Accessor::optional("coordinates");
pub const MAP_PROJECTION: Accessor<Option<String>> = Accessor::optional("mapProjection");
pub const POSTAL_ADDRESS: Accessor<Option<String>> = Accessor::optional("postalAddress");
pub const TIMEZONE: Accessor<Option<String>> = Accessor::optional("timezone");

pub const ANCHOR_GUID: Accessor<Option<String>> = Accessor::optional("anchorGUID");
pub const ANCHOR_TYPE_NAME: Accessor<Option<String>> = Accessor::optional("anchorTypeName");
pub const ANCHOR_DOMAIN_NAME: Accessor<Option<String>> = Accessor::optional("anchorDomainName");
pub const ANCHOR_SCOPE_GUID: Accessor<Option<String>> = Accessor::optional("anchorScopeGUID");

pub const VERSION_IDENTIFIER: Accessor<Option<String>> = Accessor::optional("versionIdentifier");

pub const ARCHIVE_DATE: Accessor<Option<DateTime<Utc>>> = Accessor::optional("archiveDate");
pub const ARCHIVE_USER: Accessor<Option<String>> = Accessor::optional("archiveUser");
pub const ARCHIVE_PROCESS: Accessor<Option<String>> = Accessor::optional("archiveProcess");
pub const ARCHIVE_SERVICE: Accessor<Option<String>> = Accessor::optional("archiveService");
pub const ARCHIVE_METHOD: Accessor<Option<String>> = Accessor::optional("archiveMethod");
pub const ARCHIVE_PROPERTIES: Accessor<Option<IndexMap<String, String>>> =
    Accessor::optional("archiveProperties");

property_set! {
    /// Shared by every governance level classification.
    pub struct GovernanceClassificationProperties {
        status: Option<GovernanceClassificationStatus> = GOVERNANCE_STATUS,
        confidence: i32 = CONFIDENCE,
        steward: Option<String> = STEWARD,
        steward_type_name: Option<String> = STEWARD_TYPE_NAME,
        steward_property_name: Option<String> = STEWARD_PROPERTY_NAME,
        source: Option<String> = SOURCE,
        notes: Option<String> = NOTES,
        level_identifier: i32 = LEVEL_IDENTIFIER,
    }
}

property_set! {
    pub struct RetentionProperties {
        associated_guid: Option<String> = ASSOCIATED_GUID,
        archive_after: Option<DateTime<Utc>> = ARCHIVE_AFTER,
        delete_after: Option<DateTime<Utc>> = DELETE_AFTER,
    }
}

property_set! {
    pub struct FixedLocationProperties {
        coordinates: Option<String> = COORDINATES,
        map_projection: Option<String> = MAP_PROJECTION,
        postal_address: Option<String> = POSTAL_ADDRESS,
        timezone: Option<String> = TIMEZONE,
    }
}

property_set! {
    pub struct AnchorsProperties {
        anchor_guid: Option<String> = ANCHOR_GUID,
        anchor_type_name: Option<String> = ANCHOR_TYPE_NAME,
        anchor_domain_name: Option<String> = ANCHOR_DOMAIN_NAME,
        anchor_scope_guid: Option<String> = ANCHOR_SCOPE_GUID,
    }
}

property_set! {
    pub struct TemplateProperties {
        name: Option<String> = NAME,
        description: Option<String> = DESCRIPTION,
        version_identifier: Option<String> = VERSION_IDENTIFIER,
        additional_properties: Option<IndexMap<String, String>> = ADDITIONAL_PROPERTIES,
    }
}

property_set! {
    pub struct MementoProperties {
        archive_date: Option<DateTime<Utc>> = ARCHIVE_DATE,
        archive_user: Option<String> = ARCHIVE_USER,
        archive_process: Option<String> = ARCHIVE_PROCESS,
        archive_service: Option<String> = ARCHIVE_SERVICE,
        archive_method: Option<String> = ARCHIVE_METHOD,
        archive_properties: Option<IndexMap<String, String>> = ARCHIVE_PROPERTIES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use openmeta_props::{InstanceProperties, PropertyValue};

    #[test]
    fn unknown_status_is_none() {
        let mut props = InstanceProperties::new()
            .with("status", PropertyValue::Enum("RUMOURED".into()))
            .with("confidence", 80);
        let governance = GovernanceClassificationProperties::remove_from(&mut props);
        assert_eq!(governance.status, None);
        assert_eq!(governance.confidence, 80);
        assert_eq!(governance.level_identifier, 0);
        assert!(!props.contains("status"));
    }

    #[test]
    fn coordinates_read_under_their_own_name() {
        let props = InstanceProperties::new()
            .with("coordinates", "51.5,-0.1")
            .with("timezone", "Europe/London");
        let location = FixedLocationProperties::get_from(Some(&props));
        assert_eq!(location.coordinates.as_deref(), Some("51.5,-0.1"));
        assert_eq!(location.map_projection, None);
        assert_eq!(location.timezone.as_deref(), Some("Europe/London"));
    }
}
