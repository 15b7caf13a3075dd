mod record_upload;
mod schema;

use lambda_runtime::tracing;
#[allow(unused_imports)]
use mockall::automock;

#[cfg(not(test))]
pub use DBClient as DB;

#[cfg(test)]
pub use MockDBClient as DB;

use crate::error::UploadError;
use crate::model::record::UploadRecord;

#[derive(Clone)]
pub struct DBClient {
    inner: sqlx::Pool<sqlx::Postgres>,
}

#[cfg_attr(test, automock)]
impl DBClient {
    pub fn new(inner: sqlx::Pool<sqlx::Postgres>) -> Self {
        Self { inner }
    }

    /// Creates the `uploads` table on first run.
    #[tracing::instrument(skip(self))]
    pub async fn ensure_schema(&self) -> Result<(), UploadError> {
        schema::ensure_schema(self.inner.clone()).await
    }

    /// Appends exactly one audit row. Never updates or deletes; invoking
    /// twice with identical inputs produces two rows.
    #[tracing::instrument(skip(self))]
    pub async fn record_upload(&self, record: &UploadRecord) -> Result<(), UploadError> {
        record_upload::record_upload(self.inner.clone(), record).await
    }
}
