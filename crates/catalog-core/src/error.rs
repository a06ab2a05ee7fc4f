//! Catalog Errors

use thiserror::Error;

/// Failure talking to the catalog endpoint.
///
/// A 404 is never an error: it is mapped to an empty page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Non-success HTTP status other than 404
    #[error("API error: {status}")]
    Http { status: u16 },

    /// Request never produced a response
    #[error("network error: {0}")]
    Network(String),

    /// Response body was not a valid page envelope
    #[error("malformed response: {0}")]
    Decode(String),
}

impl CatalogError {
    /// Transport and status failures are recoverable by showing an empty page.
    /// Decode failures mean the payload contract is broken.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, CatalogError::Decode(_))
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
