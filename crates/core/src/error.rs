//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business failures. Storage failures live
/// with the repositories.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// An order quantity was not a positive integer.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// The product was not available when it was added to an order.
    #[error("product \"{0}\" is not available")]
    ProductUnavailable(String),

    /// An amount no longer fits in minor currency units.
    #[error("amount overflow: {0}")]
    AmountOverflow(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn overflow(msg: impl Into<String>) -> Self {
        Self::AmountOverflow(msg.into())
    }

    pub fn unavailable(product_name: impl Into<String>) -> Self {
        Self::ProductUnavailable(product_name.into())
    }
}
