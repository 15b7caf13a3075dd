pub mod summarize;

use std::sync::Arc;

use anyhow::Context;
use aws_lambda_events::event::s3::{S3Event, S3EventRecord};
use chrono::Utc;
use lambda_runtime::{
    tracing::{self},
    Error, LambdaEvent,
};

use crate::model::key::UploadKey;
use crate::model::record::UploadRecord;
use crate::service;

/// Handles the S3 object-created event.
///
/// Each record in the event is one uploaded file and is processed
/// independently: a failure on one file is logged and does not stop the
/// remaining files from being fetched, classified, and recorded. The
/// invocation is reported as failed afterwards if any file failed.
#[tracing::instrument(skip_all)]
pub async fn handler(
    db: Arc<service::db::DB>,
    s3_client: Arc<service::s3::S3>,
    event: LambdaEvent<S3Event>,
) -> Result<(), Error> {
    tracing::trace!("processing event");

    let records = &event.payload.records;
    let mut failed = 0usize;

    for record in records.iter() {
        if let Err(e) = process_record(db.as_ref(), s3_client.as_ref(), record).await {
            tracing::error!(error=?e, "error processing uploaded file");
            failed += 1;
        }
    }

    if failed > 0 {
        return Err(format!(
            "{} of {} uploaded file(s) failed processing",
            failed,
            records.len()
        )
        .into());
    }

    Ok(())
}

/// Processes one uploaded file: fetch, classify, append its audit row —
/// including a `pass = false` row when classification fails. Errors are
/// isolated by the caller so the event's other files still get processed.
#[tracing::instrument(skip_all)]
async fn process_record(
    db: &service::db::DB,
    s3_client: &service::s3::S3,
    record: &S3EventRecord,
) -> Result<(), Error> {
    let bucket = record
        .s3
        .bucket
        .name
        .clone()
        .context("missing bucket name in s3 event")?;
    let raw_key = record
        .s3
        .object
        .key
        .clone()
        .context("missing object key in s3 event")?;

    let key = match UploadKey::from_s3_key(&raw_key) {
        Ok(key) => key,
        Err(e) => {
            tracing::warn!(error=?e, key=%raw_key, "unable to derive batch label, skipping");
            return Ok(());
        }
    };

    if !key.is_csv() {
        tracing::info!(key=%key.key, "skipping non csv file");
        return Ok(());
    }

    let start = Utc::now();

    let object = s3_client
        .get_upload_object(&bucket, &key.key)
        .await
        .map_err(|e| {
            tracing::error!(error=?e, key=%key.key, "unable to fetch uploaded object");
            e
        })?;

    if !object.is_csv() {
        tracing::info!(key=%key.key, content_type=?object.content_type, "skipping non csv file");
        return Ok(());
    }

    let summary = summarize::summarize(&object.bytes);
    let end = Utc::now();

    let row = UploadRecord::new(
        key.batch.clone(),
        start,
        end,
        summary.records,
        summary.pass,
        summary.message,
    )?;

    db.record_upload(&row).await.map_err(|e| {
        tracing::error!(error=?e, batch=%row.batch, "unable to record upload");
        e
    })?;

    tracing::info!(batch=%row.batch, records=row.records, pass=row.pass, "upload recorded");

    Ok(())
}
