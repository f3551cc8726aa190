use crate::traits::TypeLabel;
use thiserror::Error as ThisError;

///
/// ReflectError
///
/// Raised synchronously at the point of violation; never caught, retried,
/// or logged internally.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ReflectError {
    #[error("entity must not be null")]
    NullEntity,

    #[error("property path must not be empty")]
    EmptyPath,

    #[error(
        "get_value doesn't support lists; first obtain the list, then call get_value on each item"
    )]
    SequencePath { field: String },

    #[error("field `{field}` not found on `{label}`")]
    FieldNotFound { label: TypeLabel, field: String },

    #[error("value at `{path}` does not convert to the requested type")]
    TypeMismatch { path: String },
}

impl ReflectError {
    pub(crate) fn field_not_found(label: TypeLabel, field: impl Into<String>) -> Self {
        Self::FieldNotFound {
            label,
            field: field.into(),
        }
    }

    pub(crate) fn sequence_path(field: impl Into<String>) -> Self {
        Self::SequencePath {
            field: field.into(),
        }
    }
}
