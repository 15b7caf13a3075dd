use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::UploadError;

pub const MAX_BATCH_CHARS: usize = 20;
pub const MAX_MESSAGE_CHARS: usize = 1000;

/// One audit row in the `uploads` table: the outcome of processing a single
/// uploaded CSV file. Rows are only ever appended, never updated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadRecord {
    pub batch: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub records: i64,
    pub pass: bool,
    pub message: String,
}

impl UploadRecord {
    /// Builds a record, enforcing the table constraints before any write is
    /// attempted. Oversized messages are truncated to [`MAX_MESSAGE_CHARS`]
    /// on a char boundary rather than rejected.
    pub fn new(
        batch: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        records: i64,
        pass: bool,
        message: impl Into<String>,
    ) -> Result<Self, UploadError> {
        let batch = batch.into();
        if batch.is_empty() {
            return Err(UploadError::Validation("batch must not be empty".into()));
        }
        if batch.chars().count() > MAX_BATCH_CHARS {
            return Err(UploadError::Validation(format!(
                "batch exceeds {} characters: {}",
                MAX_BATCH_CHARS, batch
            )));
        }

        if end < start {
            return Err(UploadError::Validation(format!(
                "end {} precedes start {}",
                end, start
            )));
        }

        if records < 0 {
            return Err(UploadError::Validation(format!(
                "records must be non-negative, got {}",
                records
            )));
        }

        let mut message = message.into();
        if message.chars().count() > MAX_MESSAGE_CHARS {
            message = message.chars().take(MAX_MESSAGE_CHARS).collect();
        }

        Ok(Self {
            batch,
            start,
            end,
            records,
            pass,
            message,
        })
    }
}
