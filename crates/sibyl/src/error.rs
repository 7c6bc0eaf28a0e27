use thiserror::Error;

/// Errors from talking to the generative collaborator
#[derive(Error, Debug)]
pub enum SibylError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Parsing(String),
    #[error("Empty response from {model}")]
    EmptyResponse { model: String },
    #[error("Stream interrupted: {0}")]
    Stream(String),
}

impl From<reqwest::Error> for SibylError {
    fn from(err: reqwest::Error) -> Self {
        // request URLs stay out of messages that end up in logs
        SibylError::Request(err.without_url().to_string())
    }
}

impl From<serde_json::Error> for SibylError {
    fn from(err: serde_json::Error) -> Self {
        SibylError::Parsing(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SibylError>;
