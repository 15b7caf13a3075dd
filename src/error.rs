use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadError {
    /// Inputs violated a record constraint; nothing was written.
    #[error("validation failed: {0}")]
    Validation(String),
    /// The datastore was unreachable or rejected the insert.
    #[error("datastore write failed")]
    Persistence(#[from] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, UploadError>;
