use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised when a scenario or a cost formula leaves its valid domain.
///
/// Any of these is fatal for a run: nothing meaningful can be reported
/// and no output should be written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{field} must be positive, got {value}")]
    NonPositiveParameter { field: &'static str, value: Decimal },

    #[error("premium percentage must lie in [0, 1], got {0}")]
    PremiumOutOfRange(Decimal),

    #[error("exchange rate must be positive, got {0}")]
    NonPositiveRate(Decimal),

    #[error("rate grid needs at least 2 points, got {0}")]
    TooFewGridPoints(usize),

    #[error("rate grid is empty")]
    EmptyGrid,

    #[error("rate grid bounds must satisfy 0 < min < max, got [{min}, {max}]")]
    InvalidGridBounds { min: Decimal, max: Decimal },

    #[error("rate grid must be strictly increasing: {previous} is followed by {next}")]
    NonIncreasingGrid { previous: Decimal, next: Decimal },

    #[error("{0} exceeds the representable decimal range")]
    Overflow(&'static str),
}

/// Fail with `NonPositiveParameter` unless `value > 0`.
pub(crate) fn ensure_positive(field: &'static str, value: Decimal) -> Result<Decimal, DomainError> {
    if value <= Decimal::ZERO {
        return Err(DomainError::NonPositiveParameter { field, value });
    }
    Ok(value)
}
