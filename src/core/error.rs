use thiserror::Error;

#[derive(Error, Debug)]
pub enum CollectionError {
    #[error("Codec error: {0}")]
    Codec(String),

    #[error("Json error: {0}")]
    Json(String),
}

pub type Result<T> = std::result::Result<T, CollectionError>;

impl From<rmp_serde::encode::Error> for CollectionError {
    fn from(err: rmp_serde::encode::Error) -> Self {
        Self::Codec(err.to_string())
    }
}

impl From<rmp_serde::decode::Error> for CollectionError {
    fn from(err: rmp_serde::decode::Error) -> Self {
        Self::Codec(err.to_string())
    }
}

impl From<base64::DecodeError> for CollectionError {
    fn from(err: base64::DecodeError) -> Self {
        Self::Codec(err.to_string())
    }
}

impl From<serde_json::Error> for CollectionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Entry in the polled error log of a collection.
///
/// Validation and decode failures never interrupt control flow; they are
/// appended here and the caller checks `has_errors()` when convenient.
#[derive(Debug, Clone)]
pub struct ErrorEntry<T> {
    pub message: String,
    pub index: Option<usize>,
    pub data: Option<T>,
    pub rule: Option<String>,
}

impl<T> ErrorEntry<T> {
    pub(crate) fn validation(index: Option<usize>, data: T, rule: impl Into<String>) -> Self {
        Self {
            message: "validation_mismatch".to_string(),
            index,
            data: Some(data),
            rule: Some(rule.into()),
        }
    }

    pub(crate) fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            index: None,
            data: None,
            rule: None,
        }
    }
}
