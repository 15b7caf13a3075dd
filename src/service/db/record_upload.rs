use lambda_runtime::tracing;
use sqlx::{Pool, Postgres};

use crate::error::UploadError;
use crate::model::record::UploadRecord;

#[tracing::instrument(skip(db))]
pub async fn record_upload(db: Pool<Postgres>, record: &UploadRecord) -> Result<(), UploadError> {
    sqlx::query(
        r#"
        INSERT INTO uploads (batch, "start", "end", records, pass, message)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(&record.batch)
    .bind(record.start)
    .bind(record.end)
    .bind(record.records)
    .bind(record.pass)
    .bind(&record.message)
    .execute(&db)
    .await?;

    Ok(())
}
