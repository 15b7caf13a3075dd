use lambda_runtime::tracing;
use sqlx::{Pool, Postgres};

use crate::error::UploadError;

const UPLOADS_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS uploads (
    batch   VARCHAR(20)   NOT NULL,
    "start" TIMESTAMPTZ   NOT NULL,
    "end"   TIMESTAMPTZ   NOT NULL,
    records BIGINT        NOT NULL,
    pass    BOOLEAN       NOT NULL,
    message VARCHAR(1000) NOT NULL
)
"#;

#[tracing::instrument(skip(db))]
pub async fn ensure_schema(db: Pool<Postgres>) -> Result<(), UploadError> {
    sqlx::query(UPLOADS_DDL).execute(&db).await?;
    Ok(())
}
