//! Unified error types for the domain layer
//!
//! Two families live here:
//! - [`DomainError`] for construction, validation, and parsing failures
//! - [`DamageError`] for the expected boundary outcomes of a damage track

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Wound tier bands do not partition the damage range
    #[error("Invalid tier configuration: {0}")]
    InvalidTierConfiguration(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// Use this when a value handed to the domain is outside its allowed
    /// range, such as a stored damage count above the track capacity.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an invalid tier configuration error
    pub fn invalid_tiers(msg: impl Into<String>) -> Self {
        Self::InvalidTierConfiguration(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// # Example
    /// ```ignore
    /// impl FromStr for Stat {
    ///     type Err = DomainError;
    ///     fn from_str(s: &str) -> Result<Self, Self::Err> {
    ///         match s {
    ///             "REF" => Ok(Self::Ref),
    ///             _ => Err(DomainError::parse(format!("Unknown stat: {}", s))),
    ///         }
    ///     }
    /// }
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

/// Rejected damage track mutation.
///
/// Both variants are ordinary outcomes at the ends of the track. The track is
/// left untouched whenever one is returned.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DamageError {
    /// Every damage cell is already marked
    #[error("Cannot exceed max damage of {max}")]
    MaxDamageExceeded { max: u32 },

    /// No damage cell is marked
    #[error("Cannot go below zero damage")]
    BelowZero,
}

impl DamageError {
    /// Whether this is an at-the-edge condition a caller may ignore.
    ///
    /// Every current variant is; callers that match on this stay correct if
    /// a non-boundary variant is ever added.
    pub fn is_boundary(&self) -> bool {
        matches!(self, Self::MaxDamageExceeded { .. } | Self::BelowZero)
    }
}
