use thiserror::Error;

/// Errors raised while formatting, parsing, or registering locale data
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompactNumberError {
    #[error("Input must be a finite number.")]
    InvalidInput,

    #[error("Fraction digits must be non-negative numbers.")]
    NegativeFractionDigits,

    #[error("minimumFractionDigits cannot be greater than maximumFractionDigits.")]
    FractionDigitsOrder,

    #[error(
        "Locale \"{0}\" has not been registered. Please register it using \"LocaleStore::register()\"."
    )]
    LocaleNotRegistered(String),

    #[error("Invalid rounding mode: {0}")]
    InvalidRoundingMode(String),

    #[error("Invalid style: {0}")]
    InvalidStyle(String),

    #[error("Input must be a non-empty string.")]
    EmptyInput,

    #[error("Invalid number format.")]
    InvalidNumberFormat,

    #[error("Unknown symbol: \"{0}\"")]
    UnknownSymbol(String),

    #[error("Default locale \"en\" is not registered.")]
    DefaultLocaleMissing,

    #[error("Invalid format options: {0}")]
    InvalidOptions(String),

    #[error("Invalid locale data: {0}")]
    InvalidLocaleData(String),
}

/// Result type for every fallible operation in this crate
pub type CompactResult<T> = Result<T, CompactNumberError>;
