//! Enumerations stored in property bags by canonical name.

use openmeta_ir::PropertyType;

use crate::value::PropertyValue;

/// A closed set of candidate values, matched by canonical name.
pub trait MetadataEnum: Sized + Copy + 'static {
    /// Enumeration type name as declared in the type schema.
    const TYPE_NAME: &'static str;

    /// Every candidate, in declaration order.
    fn variants() -> &'static [Self];

    fn canonical_name(self) -> &'static str;

    /// Exact, case-sensitive match against the canonical names.
    fn from_canonical_name(name: &str) -> Option<Self> {
        Self::variants()
            .iter()
            .copied()
            .find(|v| v.canonical_name() == name)
    }

    /// Enum and string values both carry a symbolic name.
    fn from_value(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Enum(name) | PropertyValue::String(name) => {
                Self::from_canonical_name(name)
            }
            _ => None,
        }
    }

    fn property_type() -> PropertyType {
        PropertyType::Enum(Self::TYPE_NAME.to_string())
    }
}

/// Declare a [`MetadataEnum`] with explicit canonical names.
///
/// ```ignore
/// metadata_enum! {
///     /// Sort order of a schema attribute.
///     pub enum DataItemSortOrder {
///         Ascending = "ASCENDING",
///         Unsorted = "UNSORTED",
///     }
/// }
/// ```
///
/// Generates serde (as the canonical name), `Display` and the
/// `MetadataEnum` impl.
#[macro_export]
macro_rules! metadata_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $canonical:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $canonical)]
                $variant,
            )+
        }

        impl $crate::MetadataEnum for $name {
            const TYPE_NAME: &'static str = stringify!($name);

            fn variants() -> &'static [Self] {
                &[$( $name::$variant ),+]
            }

            fn canonical_name(self) -> &'static str {
                match self {
                    $( $name::$variant => $canonical, )+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::MetadataEnum::canonical_name(*self))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::metadata_enum! {
        /// Test-only direction.
        pub enum Direction {
            Unknown = "UNKNOWN",
            In = "INPUT",
            Out = "OUTPUT",
        }
    }

    #[test]
    fn canonical_lookup() {
        assert_eq!(Direction::from_canonical_name("INPUT"), Some(Direction::In));
        assert_eq!(Direction::from_canonical_name("input"), None);
        assert_eq!(Direction::from_canonical_name("SIDEWAYS"), None);
        assert_eq!(Direction::variants().len(), 3);
    }

    #[test]
    fn from_value_accepts_enum_and_string() {
        assert_eq!(
            Direction::from_value(&PropertyValue::Enum("OUTPUT".into())),
            Some(Direction::Out)
        );
        assert_eq!(
            Direction::from_value(&PropertyValue::from("UNKNOWN")),
            Some(Direction::Unknown)
        );
        assert_eq!(Direction::from_value(&PropertyValue::Int(1)), None);
    }

    #[test]
    fn display_and_serde_use_canonical_name() {
        assert_eq!(Direction::Out.to_string(), "OUTPUT");
        assert_eq!(serde_json::to_string(&Direction::In).unwrap(), "\"INPUT\"");
        assert_eq!(
            Direction::property_type(),
            PropertyType::Enum("Direction".into())
        );
    }
}
