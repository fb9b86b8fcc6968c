use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    /// Caller supplied a malformed descriptor or precision.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("unknown formula: {0}")]
    UnknownFormula(String),

    #[error("precision controller lock poisoned")]
    LockPoisoned,
}
