use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown allergen: {0}")]
    UnknownAllergen(String),

    #[error("Invalid severity: {0}")]
    InvalidSeverity(String),

    #[error("Allergy profile not found")]
    ProfileNotFound,

    #[error("Text extraction failed: {0}")]
    Extraction(String),

    #[error("Persistence failed: {0}")]
    Persistence(String),

    #[error("Not found")]
    NotFound,

    #[error("Internal server error")]
    InternalServerError,
}
