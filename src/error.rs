use thiserror::Error;

/// Reasons a generation attempt can fail. All of them end the attempt
/// without an image and without consuming quota.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("Daily limit of {limit} generations reached, come back tomorrow")]
    QuotaExceeded { limit: u32 },

    #[error("API error: {status_text}")]
    Http { status_text: String },

    #[error("{0}")]
    Network(String),
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}
