//! Accessor layer: concrete accessors grouped into property sets, one set
//! per metadata type level.
//!
//! A property set is declared once with [`property_set!`]:
//!
//! ```ignore
//! property_set! {
//!     pub struct DataFileProperties {
//!         file_name: Option<String> = FILE_NAME,
//!         file_size: i64 = FILE_SIZE,
//!     }
//! }
//! ```
//!
//! which generates the struct plus `remove_from` (consuming read),
//! `get_from` (non-destructive read), `property_names`, `property_schema`
//! and a `Default` equal to reading an absent bag.

macro_rules! property_set {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $( $(#[$fmeta:meta])* $field:ident : $ty:ty = $accessor:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            $( $(#[$fmeta])* pub $field: $ty, )+
        }

        impl $name {
            pub fn remove_from(props: &mut ::openmeta_props::InstanceProperties) -> Self {
                Self {
                    $( $field: $accessor.remove(Some(&mut *props)), )+
                }
            }

            pub fn get_from(props: Option<&::openmeta_props::InstanceProperties>) -> Self {
                Self {
                    $( $field: $accessor.get(props), )+
                }
            }

            pub fn property_names() -> Vec<&'static str> {
                vec![$( ::openmeta_props::PropertyAccessor::name(&$accessor) ),+]
            }

            pub fn property_schema() -> Vec<(&'static str, ::openmeta_ir::PropertyType)> {
                vec![$(
                    (
                        ::openmeta_props::PropertyAccessor::name(&$accessor),
                        ::openmeta_props::PropertyAccessor::property_type(&$accessor),
                    )
                ),+]
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::get_from(None)
            }
        }
    };
}

pub mod actor;
pub mod annotation;
pub mod asset;
pub mod classification;
pub mod glossary;
pub mod reference;
pub mod referenceable;
pub mod relationship;
pub mod schema;
