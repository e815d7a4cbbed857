//! Property bags for open metadata instances.
//!
//! A property bag is the schema-less `name → value` map attached to an
//! element, classification or relationship before it becomes a typed bean.
//!
//! - [`PropertyValue`]: one typed value
//! - [`InstanceProperties`]: the bag, with typed `get_*` / `remove_*`
//! - [`Accessor`], [`EnumAccessor`], [`SentinelEnumAccessor`]: const
//!   bindings of one property name to one target type and default
//! - [`MetadataEnum`]: enumerations stored by canonical name

pub mod accessor;
pub mod bag;
pub mod decode;
pub mod enums;
pub mod value;

pub use accessor::{Accessor, EnumAccessor, PropertyAccessor, SentinelEnumAccessor};
pub use bag::InstanceProperties;
pub use decode::Decode;
pub use enums::MetadataEnum;
pub use value::PropertyValue;
