//! Error handling for the munging pipeline.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MungeError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Malformed row: {reason}")]
    MalformedRow { reason: String },

    #[error("Invalid record set: {}", .messages.join("; "))]
    InvalidRecord { messages: Vec<String> },

    #[error("No records to aggregate")]
    EmptyInput,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MungeError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        MungeError::MalformedRow {
            reason: reason.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        MungeError::InvalidArgument(message.into())
    }
}

pub type Result<T> = std::result::Result<T, MungeError>;
