//! Enumerations referenced by bean properties.

use openmeta_props::metadata_enum;

metadata_enum! {
    /// Ordering of the values held by a schema attribute.
    pub enum DataItemSortOrder {
        Ascending = "ASCENDING",
        Descending = "DESCENDING",
        Unsorted = "UNSORTED",
        Ignored = "IGNORED",
    }
}

metadata_enum! {
    /// Flow of data through a solution port.
    pub enum SolutionPortDirection {
        Unknown = "UNKNOWN",
        Output = "OUTPUT",
        Input = "INPUT",
        InOut = "INOUT",
        Other = "OTHER",
    }
}

metadata_enum! {
    pub enum GovernanceClassificationStatus {
        Discovered = "DISCOVERED",
        Proposed = "PROPOSED",
        Imported = "IMPORTED",
        Validated = "VALIDATED",
        Deprecated = "DEPRECATED",
        Obsolete = "OBSOLETE",
        Other = "OTHER",
    }
}

metadata_enum! {
    pub enum TermAssignmentStatus {
        Discovered = "DISCOVERED",
        Proposed = "PROPOSED",
        Imported = "IMPORTED",
        Validated = "VALIDATED",
        Deprecated = "DEPRECATED",
        Obsolete = "OBSOLETE",
        Other = "OTHER",
    }
}

metadata_enum! {
    /// Role a linked element plays for the specification of its parent.
    pub enum SpecificationPropertyType {
        PlaceholderProperty = "placeholderProperties",
        ReplacementAttribute = "replacementAttributes",
        SupportedTemplate = "supportedTemplates",
        SupportedRequestType = "supportedRequestTypes",
        SupportedRequestParameter = "supportedRequestParameters",
        SupportedActionTarget = "supportedActionTargets",
        SupportedAnalysisStep = "supportedAnalysisSteps",
        SupportedConfigurationProperty = "supportedConfigurationProperties",
        ProducedRequestParameter = "producedRequestParameters",
        ProducedActionTarget = "producedActionTargets",
        ProducedGuard = "producedGuards",
        ProducedAnnotationType = "producedAnnotationTypes",
    }
}
