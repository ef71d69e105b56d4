use thiserror::Error;

#[derive(Debug, Error)]
pub enum TitleError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Request error: {0}")]
    RequestError(String),

    #[error("Provider returned {status}: {body}")]
    ProviderError { status: u16, body: String },

    #[error("Response error: {0}")]
    ResponseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("AWS error: {0}")]
    AwsError(String),

    #[error("AWS service error: {0}")]
    AwsServiceError(String),
}

impl From<reqwest::Error> for TitleError {
    fn from(e: reqwest::Error) -> Self {
        TitleError::RequestError(e.to_string())
    }
}

impl From<serde_json::Error> for TitleError {
    fn from(e: serde_json::Error) -> Self {
        TitleError::SerializationError(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TitleError>;
