use crate::fields::Field;
use thiserror::Error;

/// Failure taxonomy for record operations.
///
/// The `Display` output of each variant is part of the console contract:
/// clients print `err.to_string()` verbatim, so the wording and spacing
/// here (including the double space around an empty value) is load-bearing.
#[derive(Error, Debug)]
pub enum StaffError {
    /// The backing collection file does not exist at the resolved path.
    #[error("No such file {0}")]
    MissingStorage(String),

    #[error("No arguments provided")]
    NoArguments,

    #[error("No such operation")]
    UnknownOperation,

    /// A field Add cannot do without was never supplied.
    #[error("No value for property: {0} provided")]
    MissingRequiredField(Field),

    /// A supplied value failed validation for its field.
    #[error("Invalid value( {value} ) for property: {field}")]
    InvalidFieldValue { field: Field, value: String },

    /// Update was asked to change nothing beyond the Id.
    #[error("Request has no valid values")]
    NoValidUpdate,

    #[error("There is no Employee with Id = {0}")]
    RecordNotFound(i64),

    #[error("List of Employees is empty")]
    EmptyCollection,

    /// Writing the collection back to storage failed.
    #[error("Failed to save changes: {0}")]
    PersistenceFailure(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StaffError {
    pub fn invalid_value(field: Field, value: &str) -> Self {
        StaffError::InvalidFieldValue {
            field,
            value: value.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StaffError>;
