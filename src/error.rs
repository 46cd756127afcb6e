use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("API request failed: {0}")]
    Http(#[from] Box<ureq::Error>),

    #[error("Unexpected response from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },
}

impl From<ureq::Error> for AppError {
    fn from(e: ureq::Error) -> Self {
        AppError::Http(Box::new(e))
    }
}
