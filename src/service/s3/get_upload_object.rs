use anyhow::Result;
use aws_sdk_s3 as s3;
use lambda_runtime::tracing;

use super::UploadObject;

#[tracing::instrument(skip(client))]
pub async fn get_upload_object(
    client: &s3::Client,
    bucket: &str,
    key: &str,
) -> Result<UploadObject> {
    let resp = client.get_object().bucket(bucket).key(key).send().await?;

    let content_type = resp.content_type().map(str::to_string);
    let body = resp.body.collect().await?;

    Ok(UploadObject {
        bytes: body.into_bytes().to_vec(),
        content_type,
    })
}
