use crate::seating::ingest::IngestError;
use crate::seating::storage::StorageError;
use shared::error::{AppError, ErrorCode};
use shared::models::GuestId;
use shared::seating::CommandError;
use thiserror::Error;

/// Manager errors
#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error("Guest {0} appears more than once")]
    DuplicateGuest(GuestId),
}

pub type ManagerResult<T> = Result<T, ManagerError>;

impl ManagerError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ManagerError::Storage(StorageError::Serialization(_)) => {
                ErrorCode::SerializationError
            }
            ManagerError::Storage(_) => ErrorCode::DatabaseError,
            ManagerError::Ingest(IngestError::NoValidGuests { .. }) => ErrorCode::NoValidGuests,
            ManagerError::DuplicateGuest(_) => ErrorCode::DuplicateGuest,
        }
    }
}

impl From<ManagerError> for CommandError {
    fn from(err: ManagerError) -> Self {
        let code = err.code();
        if code.is_system() {
            tracing::error!(error = %err, error_code = %code, "Seating command failed");
        }
        CommandError::new(code, err.to_string())
    }
}

impl From<ManagerError> for AppError {
    fn from(err: ManagerError) -> Self {
        let code = err.code();
        let mut app = AppError::with_message(code, err.to_string());
        if let ManagerError::DuplicateGuest(id) = &err {
            app = app.with_detail("guest_id", id.as_str());
        }
        app
    }
}
