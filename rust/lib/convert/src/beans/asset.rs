//! Assets: data sets, data stores, files and processes.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use openmeta_props::Accessor;

use super::referenceable::{FORMULA, FORMULA_TYPE};

pub const DEPLOYED_IMPLEMENTATION_TYPE: Accessor<Option<String>> =
    Accessor::optional("deployedImplementationType");
pub const RESOURCE_NAME: Accessor<Option<String>> = Accessor::optional("resourceName");

pub const PATH_NAME: Accessor<Option<String>> = Accessor::optional("pathName");
pub const STORE_CREATE_TIME: Accessor<Option<DateTime<Utc>>> =
    Accessor::optional("storeCreateTime");
pub const STORE_UPDATE_TIME: Accessor<Option<DateTime<Utc>>> =
    Accessor::optional("storeUpdateTime");
pub const ENCODING_TYPE: Accessor<Option<String>> = Accessor::optional("encodingType");
pub const ENCODING_LANGUAGE: Accessor<Option<String>> = Accessor::optional("encodingLanguage");
pub const ENCODING_DESCRIPTION: Accessor<Option<String>> =
    Accessor::optional("encodingDescription");
pub const ENCODING_PROPERTIES: Accessor<Option<IndexMap<String, String>>> =
    Accessor::optional("encodingProperties");

pub const FILE_NAME: Accessor<Option<String>> = Accessor::optional("fileName");
pub const FILE_TYPE: Accessor<Option<String>> = Accessor::optional("fileType");
pub const FILE_EXTENSION: Accessor<Option<String>> = Accessor::optional("fileExtension");
pub const FILE_SIZE: Accessor<i64> = Accessor::new("fileSize", 0);

pub const IMPLEMENTATION_LANGUAGE: Accessor<Option<String>> =
    Accessor::optional("implementationLanguage");

property_set! {
    pub struct AssetProperties {
        deployed_implementation_type: Option<String> = DEPLOYED_IMPLEMENTATION_TYPE,
        resource_name: Option<String> = RESOURCE_NAME,
    }
}

property_set! {
    pub struct DataSetProperties {
        formula: Option<String> = FORMULA,
        formula_type: Option<String> = FORMULA_TYPE,
    }
}

property_set! {
    pub struct DataStoreProperties {
        path_name: Option<String> = PATH_NAME,
        store_create_time: Option<DateTime<Utc>> = STORE_CREATE_TIME,
        store_update_time: Option<DateTime<Utc>> = STORE_UPDATE_TIME,
        encoding_type: Option<String> = ENCODING_TYPE,
        encoding_language: Option<String> = ENCODING_LANGUAGE,
        encoding_description: Option<String> = ENCODING_DESCRIPTION,
        encoding_properties: Option<IndexMap<String, String>> = ENCODING_PROPERTIES,
    }
}

property_set! {
    pub struct DataFileProperties {
        file_name: Option<String> = FILE_NAME,
        file_type: Option<String> = FILE_TYPE,
        file_extension: Option<String> = FILE_EXTENSION,
        file_size: i64 = FILE_SIZE,
    }
}

property_set! {
    pub struct ProcessProperties {
        formula: Option<String> = FORMULA,
        formula_type: Option<String> = FORMULA_TYPE,
        implementation_language: Option<String> = IMPLEMENTATION_LANGUAGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use openmeta_props::InstanceProperties;

    #[test]
    fn file_size_accepts_int_and_long() {
        let mut props = InstanceProperties::new().with("fileSize", 10);
        assert_eq!(FILE_SIZE.remove(Some(&mut props)), 10);

        let mut props = InstanceProperties::new().with("fileSize", 10_000_000_000_i64);
        assert_eq!(FILE_SIZE.remove(Some(&mut props)), 10_000_000_000);
        assert_eq!(FILE_SIZE.remove(Some(&mut props)), 0);
    }

    #[test]
    fn store_dates() {
        let created = Utc.with_ymd_and_hms(2023, 1, 2, 3, 4, 5).unwrap();
        let mut props = InstanceProperties::new()
            .with("storeCreateTime", created)
            .with("storeUpdateTime", "yesterday");
        let store = DataStoreProperties::remove_from(&mut props);
        assert_eq!(store.store_create_time, Some(created));
        assert_eq!(store.store_update_time, None);
        assert!(props.is_empty());
    }
}
