use openmeta_props::Accessor;

use super::referenceable::{SUMMARY, USAGE};

pub const LANGUAGE: Accessor<Option<String>> = Accessor::optional("language");
pub const EXAMPLES: Accessor<Option<String>> = Accessor::optional("examples");
pub const ABBREVIATION: Accessor<Option<String>> = Accessor::optional("abbreviation");

property_set! {
    pub struct GlossaryProperties {
        language: Option<String> = LANGUAGE,
        usage: Option<String> = USAGE,
    }
}

property_set! {
    pub struct GlossaryTermProperties {
        summary: Option<String> = SUMMARY,
        examples: Option<String> = EXAMPLES,
        abbreviation: Option<String> = ABBREVIATION,
        usage: Option<String> = USAGE,
    }
}
