use thiserror::Error as ThisError;

/// Base Error for the fallible parts of the crate.
///
/// The conversion and formatting functions never return these; they degrade
/// to zero instead. Only strict parsing, configuration and initialization do.
#[derive(ThisError, Debug)]
pub enum Error {
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),

    #[error("Exponent {0} is out of range.")]
    ExponentOutOfRange(i64),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("Logging could not be initialized: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, Error>;
