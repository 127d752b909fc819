//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Coarse error taxonomy exposed to callers that only care about the kind of
/// failure, not the exact condition.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An argument was rejected (bad price, bad capacity, duplicate or unknown code).
    InvalidArgument,
    /// The catalog had no room left.
    Overflow,
}

/// Domain-level error.
///
/// Every failure aborts the requested operation without partial mutation.
/// Variants stay distinct so callers can tell the conditions apart; use
/// [`DomainError::kind`] for the two-kind view.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Price was zero, negative, or not a finite number.
    #[error("invalid price: {price}")]
    InvalidPrice { price: f64 },

    /// Catalog capacity was zero or negative.
    #[error("invalid catalog capacity: {max_products}")]
    InvalidCapacity { max_products: i64 },

    /// A product with this code is already in the catalog.
    #[error("product code already exists: {0}")]
    DuplicateCode(String),

    /// No product with this code is in the catalog.
    #[error("product code does not exist: {0}")]
    CodeNotFound(String),

    /// Insertion attempted while the catalog was at capacity.
    #[error("catalog overflow: capacity of {max_products} reached")]
    Overflow { max_products: usize },

    /// A configuration value could not be interpreted.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl DomainError {
    pub fn invalid_price(price: f64) -> Self {
        Self::InvalidPrice { price }
    }

    pub fn invalid_capacity(max_products: i64) -> Self {
        Self::InvalidCapacity { max_products }
    }

    pub fn duplicate_code(code: impl Into<String>) -> Self {
        Self::DuplicateCode(code.into())
    }

    pub fn code_not_found(code: impl Into<String>) -> Self {
        Self::CodeNotFound(code.into())
    }

    pub fn overflow(max_products: usize) -> Self {
        Self::Overflow { max_products }
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Overflow { .. } => ErrorKind::Overflow,
            Self::InvalidPrice { .. }
            | Self::InvalidCapacity { .. }
            | Self::DuplicateCode(_)
            | Self::CodeNotFound(_)
            | Self::Configuration(_) => ErrorKind::InvalidArgument,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }

    pub fn is_overflow(&self) -> bool {
        self.kind() == ErrorKind::Overflow
    }
}
