use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Transport, HTTP status or timeout failure while reaching the provider.
    #[error("Provider error: {0}")]
    ProviderError(String),

    /// The provider answered but no JSON object could be extracted.
    /// `raw` keeps the offending text for diagnostics.
    #[error("Failed to extract recipe from provider response: {message}")]
    ParseError { message: String, raw: String },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Persistence error: {0}")]
    PersistenceError(String),

    #[error("Not found")]
    NotFound,

    #[error("Internal server error")]
    InternalServerError,
}
