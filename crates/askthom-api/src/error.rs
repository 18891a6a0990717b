use thiserror::Error;

/// Why a request to the assistant service produced no usable answer
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection refused, DNS failure, broken body, invalid URL...
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("request timed out")]
    Timeout,

    /// Any status outside 2xx
    #[error("service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// A 2xx whose body is not an answer
    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("assistant service unavailable")]
    Unavailable,
}

impl ApiError {
    /// Short label for log lines
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Transport(_) => "transport",
            ApiError::Timeout => "timeout",
            ApiError::Status { .. } => "status",
            ApiError::Malformed(_) => "malformed",
            ApiError::Unavailable => "unavailable",
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Transport(err)
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Malformed(err.to_string())
    }
}
