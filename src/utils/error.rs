use thiserror::Error;

// Display text never names the target; it is kept in a field for logs.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("{status_text}")]
    Status {
        target: String,
        status: u16,
        status_text: String,
    },

    #[error("invalid JSON: {source}")]
    Parse {
        target: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("request failed: {source}")]
    Transport {
        target: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid request target '{value}': {reason}")]
    InvalidTarget { value: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Status,
    Parse,
    Transport,
    Configuration,
}

impl FetchError {
    /// Wraps a reqwest error, stripping the URL reqwest would otherwise print.
    pub fn transport(target: impl Into<String>, source: reqwest::Error) -> Self {
        FetchError::Transport {
            target: target.into(),
            source: source.without_url(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            FetchError::Status { .. } => ErrorCategory::Status,
            FetchError::Parse { .. } => ErrorCategory::Parse,
            FetchError::Transport { .. } => ErrorCategory::Transport,
            FetchError::InvalidTarget { .. } => ErrorCategory::Configuration,
        }
    }

    /// The target the failure originated from.
    pub fn target(&self) -> &str {
        match self {
            FetchError::Status { target, .. }
            | FetchError::Parse { target, .. }
            | FetchError::Transport { target, .. } => target,
            FetchError::InvalidTarget { value, .. } => value,
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
