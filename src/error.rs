use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    EmptyInput,
    InvalidNumber,
    OutOfRange,
    TrashEmpty,
    Io,
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct TidytaskError {
    pub code: ErrorCode,
    pub message: String,
}

impl TidytaskError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn empty_input() -> Self {
        Self::new(ErrorCode::EmptyInput, "Task description cannot be empty.")
    }

    pub fn invalid_number() -> Self {
        Self::new(ErrorCode::InvalidNumber, "Please enter a valid number.")
    }

    pub fn out_of_range() -> Self {
        Self::new(ErrorCode::OutOfRange, "Invalid task number.")
    }

    pub fn trash_empty() -> Self {
        Self::new(ErrorCode::TrashEmpty, "Trash is empty. Nothing to restore.")
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Io, message)
    }
}

impl From<std::io::Error> for TidytaskError {
    fn from(e: std::io::Error) -> Self {
        Self::io(e.to_string())
    }
}
