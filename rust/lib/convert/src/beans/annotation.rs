//! Discovery annotations.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use openmeta_props::Accessor;

use super::referenceable::{LENGTH, SUMMARY};

pub const ANNOTATION_TYPE: Accessor<Option<String>> = Accessor::optional("annotationType");
pub const CONFIDENCE_LEVEL: Accessor<i32> = Accessor::new("confidenceLevel", 0);
pub const EXPRESSION: Accessor<Option<String>> = Accessor::optional("expression");
pub const EXPLANATION: Accessor<Option<String>> = Accessor::optional("explanation");
pub const ANALYSIS_STEP: Accessor<Option<String>> = Accessor::optional("analysisStep");
pub const JSON_PROPERTIES: Accessor<Option<String>> = Accessor::optional("jsonProperties");

pub const INFERRED_DATA_TYPE: Accessor<Option<String>> = Accessor::optional("inferredDataType");
pub const INFERRED_FORMAT: Accessor<Option<String>> = Accessor::optional("inferredFormat");
pub const INFERRED_LENGTH: Accessor<i32> = Accessor::new("inferredLength", 0);
pub const INFERRED_PRECISION: Accessor<i32> = Accessor::new("inferredPrecision", 0);
pub const INFERRED_SCALE: Accessor<i32> = Accessor::new("inferredScale", 0);
pub const PROFILE_PROPERTIES: Accessor<Option<IndexMap<String, String>>> =
    Accessor::optional("profileProperties");
pub const PROFILE_FLAGS: Accessor<Option<IndexMap<String, bool>>> =
    Accessor::optional("profileFlags");
pub const PROFILE_COUNTS: Accessor<Option<IndexMap<String, i64>>> =
    Accessor::optional("profileCounts");
pub const PROFILE_DOUBLES: Accessor<Option<IndexMap<String, f64>>> =
    Accessor::optional("profileDoubles");
pub const PROFILE_DATES: Accessor<Option<IndexMap<String, DateTime<Utc>>>> =
    Accessor::optional("profileDates");
pub const VALUE_LIST: Accessor<Option<Vec<String>>> = Accessor::optional("valueList");
pub const VALUE_COUNT: Accessor<Option<IndexMap<String, i32>>> = Accessor::optional("valueCount");
pub const VALUE_RANGE_FROM: Accessor<Option<String>> = Accessor::optional("valueRangeFrom");
pub const VALUE_RANGE_TO: Accessor<Option<String>> = Accessor::optional("valueRangeTo");
pub const AVERAGE_VALUE: Accessor<Option<String>> = Accessor::optional("averageValue");

property_set! {
    pub struct AnnotationProperties {
        annotation_type: Option<String> = ANNOTATION_TYPE,
        summary: Option<String> = SUMMARY,
        confidence_level: i32 = CONFIDENCE_LEVEL,
        expression: Option<String> = EXPRESSION,
        explanation: Option<String> = EXPLANATION,
        analysis_step: Option<String> = ANALYSIS_STEP,
        json_properties: Option<String> = JSON_PROPERTIES,
    }
}

property_set! {
    pub struct ResourceProfileAnnotationProperties {
        length: i32 = LENGTH,
        inferred_data_type: Option<String> = INFERRED_DATA_TYPE,
        inferred_format: Option<String> = INFERRED_FORMAT,
        inferred_length: i32 = INFERRED_LENGTH,
        inferred_precision: i32 = INFERRED_PRECISION,
        inferred_scale: i32 = INFERRED_SCALE,
        profile_properties: Option<IndexMap<String, String>> = PROFILE_PROPERTIES,
        profile_flags: Option<IndexMap<String, bool>> = PROFILE_FLAGS,
        profile_counts: Option<IndexMap<String, i64>> = PROFILE_COUNTS,
        profile_doubles: Option<IndexMap<String, f64>> = PROFILE_DOUBLES,
        profile_dates: Option<IndexMap<String, DateTime<Utc>>> = PROFILE_DATES,
        value_list: Option<Vec<String>> = VALUE_LIST,
        value_count: Option<IndexMap<String, i32>> = VALUE_COUNT,
        value_range_from: Option<String> = VALUE_RANGE_FROM,
        value_range_to: Option<String> = VALUE_RANGE_TO,
        average_value: Option<String> = AVERAGE_VALUE,
    }
}
