use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use openmeta_props::PropertyValue;
use serde::{Deserialize, Serialize};

/// Structural fields every converted instance carries, around the typed
/// properties of its shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bean<P> {
    pub type_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_from: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_to: Option<DateTime<Utc>>,

    pub properties: P,

    /// Every property no accessor of the resolved shape claimed, unchanged.
    #[serde(default)]
    pub extended_properties: IndexMap<String, PropertyValue>,
}
