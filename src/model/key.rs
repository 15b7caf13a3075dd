use lambda_runtime::tracing;

use crate::error::UploadError;
use crate::model::record::MAX_BATCH_CHARS;

/// An uploaded object's key, URL-decoded, plus the batch label derived from
/// its file stem. Event notifications percent-encode the key, so the decoded
/// form is the one used for both the S3 fetch and the audit row.
#[derive(Debug, PartialEq)]
pub struct UploadKey {
    pub key: String,
    pub batch: String,
}

impl UploadKey {
    #[tracing::instrument]
    pub fn from_s3_key(raw: &str) -> Result<Self, UploadError> {
        let key = urlencoding::decode(raw)
            .map_err(|_| UploadError::Validation(format!("object key is not valid UTF-8: {}", raw)))?
            .to_string();

        // incoming/2024-01-01-a.csv -> 2024-01-01-a
        let name = key.rsplit('/').next().unwrap_or(key.as_str());
        let stem = match name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => name,
        };

        if stem.is_empty() {
            return Err(UploadError::Validation(format!(
                "no batch label can be derived from key: {}",
                key
            )));
        }

        let batch = stem.chars().take(MAX_BATCH_CHARS).collect();

        Ok(Self { key, batch })
    }

    pub fn is_csv(&self) -> bool {
        mime_guess::from_path(&self.key)
            .first()
            .map(|mime| mime.essence_str() == "text/csv")
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_is_the_file_stem() {
        let key = UploadKey::from_s3_key("incoming/2024-01-01-a.csv").unwrap();
        assert_eq!(key.key, "incoming/2024-01-01-a.csv");
        assert_eq!(key.batch, "2024-01-01-a");
        assert!(key.is_csv());
    }

    #[test]
    fn keys_are_url_decoded() {
        let key = UploadKey::from_s3_key("incoming%2F2024%20jan.csv").unwrap();
        assert_eq!(key.key, "incoming/2024 jan.csv");
        assert_eq!(key.batch, "2024 jan");
    }

    #[test]
    fn long_stems_are_truncated_to_the_batch_limit() {
        let key = UploadKey::from_s3_key("a-very-long-batch-label-indeed.csv").unwrap();
        assert_eq!(key.batch.chars().count(), MAX_BATCH_CHARS);
        assert_eq!(key.batch, "a-very-long-batch-la");
    }

    #[test]
    fn key_without_a_stem_is_rejected() {
        let err = UploadKey::from_s3_key("incoming/").unwrap_err();
        assert!(matches!(err, UploadError::Validation(_)));
    }

    #[test]
    fn non_csv_extensions_are_not_csv() {
        let key = UploadKey::from_s3_key("incoming/photo.png").unwrap();
        assert!(!key.is_csv());

        let key = UploadKey::from_s3_key("incoming/noextension").unwrap();
        assert!(!key.is_csv());
    }
}
