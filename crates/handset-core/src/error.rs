use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // Identifier errors
    #[error("Invalid device id: {0}")]
    InvalidDeviceId(String),

    // Request body errors
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

pub type Result<T> = std::result::Result<T, Error>;
