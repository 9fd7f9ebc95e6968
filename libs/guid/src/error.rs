//! Error types for identifier repair, conversion, and configuration.

use thiserror::Error;

/// Reasons an identifier cannot be turned into a valid compact/verbose pair.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GuidError {
    /// The candidate is not 22 symbols long after all artifact stripping.
    #[error("compact identifier must be 22 symbols after repair, got {length}")]
    UnrepairableLength { length: usize },

    /// The candidate contains a character outside the compact alphabet.
    #[error("invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    /// Several wrap hyphens could be the inserted connector and removing
    /// different ones yields different identifiers.
    #[error("cannot tell which of {connectors} wrap hyphens to remove")]
    AmbiguousRepair { connectors: usize },

    /// The 4 trailing padding bits are nonzero.
    ///
    /// Only returned as an error under strict padding; otherwise reported
    /// through [`Conversion::padding_anomaly`](crate::Conversion::padding_anomaly).
    #[error("nonzero padding bits {bits:#06b} in compact identifier")]
    PaddingAnomaly { bits: u8 },

    /// The verbose (8-4-4-4-12 hex) form could not be parsed.
    #[error("invalid verbose identifier: {0}")]
    InvalidVerbose(String),
}

impl GuidError {
    /// Returns true if the candidate had the wrong length.
    pub fn is_length_error(&self) -> bool {
        matches!(self, GuidError::UnrepairableLength { .. })
    }

    /// Returns true if the candidate contained a non-alphabet character.
    pub fn is_symbol_error(&self) -> bool {
        matches!(self, GuidError::InvalidSymbol { .. })
    }

    /// Returns true if wrap hyphens could not be resolved.
    pub fn is_ambiguous_repair(&self) -> bool {
        matches!(self, GuidError::AmbiguousRepair { .. })
    }

    /// Returns true if the failure was caused by nonzero padding bits.
    pub fn is_padding_anomaly(&self) -> bool {
        matches!(self, GuidError::PaddingAnomaly { .. })
    }
}

/// A failed conversion.
///
/// Carries the cleaned candidate produced by the repair phase so callers can
/// report the partial result next to the reason it was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("cannot convert {cleaned:?}: {error}")]
pub struct ConversionFailure {
    cleaned: String,
    #[source]
    error: GuidError,
}

impl ConversionFailure {
    pub(crate) fn new(cleaned: String, error: GuidError) -> Self {
        Self { cleaned, error }
    }

    /// The candidate after repair (whitespace and wrap connectors removed).
    pub fn cleaned(&self) -> &str {
        &self.cleaned
    }

    /// Why the candidate was rejected.
    pub fn error(&self) -> &GuidError {
        &self.error
    }

    /// Consumes the failure, returning the underlying error.
    pub fn into_error(self) -> GuidError {
        self.error
    }
}

/// Errors raised while loading [`ConvertOptions`](crate::ConvertOptions).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OptionsError {
    /// An environment variable held a value that could not be interpreted.
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}
