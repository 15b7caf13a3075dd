mod get_upload_object;

use anyhow::Result;
use aws_sdk_s3 as s3;
use lambda_runtime::tracing;
#[allow(unused_imports)]
use mockall::automock;

#[cfg(test)]
pub use MockS3Client as S3;
#[cfg(not(test))]
pub use S3Client as S3;

/// An uploaded object as fetched from S3: its bytes plus the content type
/// the store reported for it.
#[derive(Clone, Debug)]
pub struct UploadObject {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

impl UploadObject {
    /// Whether the stored content type says this is a CSV file. An absent
    /// content type is trusted; the key-extension check has already run.
    pub fn is_csv(&self) -> bool {
        match self.content_type.as_deref() {
            Some(content_type) => {
                content_type
                    .split(';')
                    .next()
                    .unwrap_or(content_type)
                    .trim()
                    == "text/csv"
            }
            None => true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct S3Client {
    /// Inner S3 client
    inner: s3::Client,
}

#[cfg_attr(test, automock)]
impl S3Client {
    pub fn new(inner: s3::Client) -> Self {
        Self { inner }
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_upload_object(&self, bucket: &str, key: &str) -> Result<UploadObject> {
        get_upload_object::get_upload_object(&self.inner, bucket, key).await
    }
}
