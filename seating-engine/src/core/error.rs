use shared::error::{AppError, ErrorCategory, ErrorCode};
use shared::seating::{CommandError, CommandErrorCode};
use thiserror::Error;

/// Engine errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SeatingError {
    #[error("Table not found: {0}")]
    TableNotFound(String),

    #[error("Guest not found: {0}")]
    GuestNotFound(String),

    #[error("Table is full: {0}")]
    TableFull(String),

    #[error("Invalid capacity for table {table_id}: {capacity}")]
    InvalidCapacity { table_id: String, capacity: u32 },

    #[error("A drag gesture is already in progress on table {0}")]
    GestureInProgress(String),

    #[error("Guest {0} is armed for placement")]
    GuestArmed(String),

    #[error("No guest is armed for placement")]
    NoGuestArmed,
}

impl SeatingError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            SeatingError::TableNotFound(_) => ErrorCode::TableNotFound,
            SeatingError::GuestNotFound(_) => ErrorCode::GuestNotFound,
            SeatingError::TableFull(_) => ErrorCode::TableFull,
            SeatingError::InvalidCapacity { .. } => ErrorCode::InvalidCapacity,
            SeatingError::GestureInProgress(_) => ErrorCode::GestureInProgress,
            SeatingError::GuestArmed(_) => ErrorCode::GuestArmed,
            SeatingError::NoGuestArmed => ErrorCode::NoGuestArmed,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        self.error_code().into()
    }
}

impl From<SeatingError> for CommandError {
    fn from(err: SeatingError) -> Self {
        let code = match &err {
            SeatingError::TableNotFound(_) => CommandErrorCode::TableNotFound,
            SeatingError::GuestNotFound(_) => CommandErrorCode::GuestNotFound,
            SeatingError::TableFull(_) => CommandErrorCode::TableFull,
            SeatingError::InvalidCapacity { .. } => CommandErrorCode::InvalidCapacity,
            SeatingError::GestureInProgress(_) => CommandErrorCode::GestureInProgress,
            SeatingError::GuestArmed(_) => CommandErrorCode::GuestArmed,
            SeatingError::NoGuestArmed => CommandErrorCode::NoGuestArmed,
        };
        CommandError::new(code, err.to_string())
    }
}

impl From<SeatingError> for AppError {
    fn from(err: SeatingError) -> Self {
        let app = AppError::with_message(err.error_code(), err.to_string());
        match err {
            SeatingError::TableNotFound(id) | SeatingError::TableFull(id) => {
                app.with_detail("table_id", id)
            }
            SeatingError::GuestNotFound(id) | SeatingError::GuestArmed(id) => {
                app.with_detail("guest_id", id)
            }
            SeatingError::InvalidCapacity { table_id, capacity } => app
                .with_detail("table_id", table_id)
                .with_detail("capacity", capacity),
            SeatingError::GestureInProgress(id) => app.with_detail("table_id", id),
            SeatingError::NoGuestArmed => app,
        }
    }
}

pub type SeatingResult<T> = Result<T, SeatingError>;
