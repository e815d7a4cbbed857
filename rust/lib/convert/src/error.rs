use thiserror::Error;

/// The only failure raised by conversion: a bean was requested for an
/// instance that was never supplied.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error(
        "{service_name}.{method_name}: cannot build {bean_type} because no {source_type} was supplied"
    )]
    MissingMetadataInstance {
        bean_type: String,
        source_type: String,
        service_name: String,
        method_name: String,
    },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
