use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum HalError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    InvalidArgument(#[from] ArgumentError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Encoding(#[from] EncodingError),
}

/// Rejected input while assembling a document.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("Link relation requires a name")]
    #[diagnostic(
        code(relation::empty_name),
        help("Pass a non-empty relation name such as \"self\" or \"item\".")
    )]
    EmptyRelationName,

    #[error("CURIE link {href:?} has no name")]
    #[diagnostic(
        code(relation::unnamed_curie),
        help("The name of a CURIE link is its prefix. Set it with `LinkObject::with_name`.")
    )]
    UnnamedCurie { href: String },

    #[error("Resource data must serialize to an object, found {found}")]
    #[diagnostic(
        code(resource::non_object_data),
        help("Only structs and maps can be merged into resource properties.")
    )]
    NonObjectData { found: String },
}

/// Failure reported by the serializer behind an encoder.
#[derive(Error, Debug, Diagnostic)]
pub enum EncodingError {
    #[error("JSON encoding failed")]
    #[diagnostic(code(encoder::json))]
    Json(#[from] serde_json::Error),

    #[error("YAML encoding failed")]
    #[diagnostic(code(encoder::yaml))]
    Yaml(#[from] serde_yaml::Error),

    #[error("Writing the encoded document failed")]
    #[diagnostic(
        code(encoder::io),
        help("Check that the destination is writable.")
    )]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for HalError {
    fn from(err: serde_json::Error) -> Self {
        HalError::Encoding(EncodingError::Json(err))
    }
}

impl From<serde_yaml::Error> for HalError {
    fn from(err: serde_yaml::Error) -> Self {
        HalError::Encoding(EncodingError::Yaml(err))
    }
}

impl From<std::io::Error> for HalError {
    fn from(err: std::io::Error) -> Self {
        HalError::Encoding(EncodingError::Io(err))
    }
}
