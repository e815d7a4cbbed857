//! Actor profiles. Only `Person` declares its own properties.

use openmeta_props::Accessor;

pub const FULL_NAME: Accessor<Option<String>> = Accessor::optional("fullName");
pub const JOB_TITLE: Accessor<Option<String>> = Accessor::optional("jobTitle");
pub const COURTESY_TITLE: Accessor<Option<String>> = Accessor::optional("courtesyTitle");
pub const INITIALS: Accessor<Option<String>> = Accessor::optional("initials");
pub const GIVEN_NAMES: Accessor<Option<String>> = Accessor::optional("givenNames");
pub const SURNAME: Accessor<Option<String>> = Accessor::optional("surname");
pub const PRONOUNS: Accessor<Option<String>> = Accessor::optional("pronouns");
pub const EMPLOYEE_NUMBER: Accessor<Option<String>> = Accessor::optional("employeeNumber");
pub const EMPLOYEE_TYPE: Accessor<Option<String>> = Accessor::optional("employeeType");
pub const PREFERRED_LANGUAGE: Accessor<Option<String>> = Accessor::optional("preferredLanguage");
pub const RESIDENT_COUNTRY: Accessor<Option<String>> = Accessor::optional("residentCountry");
pub const IS_PUBLIC: Accessor<bool> = Accessor::new("isPublic", false);

property_set! {
    pub struct PersonProperties {
        full_name: Option<String> = FULL_NAME,
        job_title: Option<String> = JOB_TITLE,
        courtesy_title: Option<String> = COURTESY_TITLE,
        initials: Option<String> = INITIALS,
        given_names: Option<String> = GIVEN_NAMES,
        surname: Option<String> = SURNAME,
        pronouns: Option<String> = PRONOUNS,
        employee_number: Option<String> = EMPLOYEE_NUMBER,
        employee_type: Option<String> = EMPLOYEE_TYPE,
        preferred_language: Option<String> = PREFERRED_LANGUAGE,
        resident_country: Option<String> = RESIDENT_COUNTRY,
        is_public: bool = IS_PUBLIC,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use openmeta_props::InstanceProperties;

    #[test]
    fn courtesy_title_read_under_its_own_name() {
        let props = InstanceProperties::new()
            .with("courtesyTitle", "Dr")
            .with("isPublic", true);
        let person = PersonProperties::get_from(Some(&props));
        assert_eq!(person.courtesy_title.as_deref(), Some("Dr"));
        assert!(person.is_public);
        assert!(!PersonProperties::default().is_public);
    }
}
