pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Failed to decode {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Response for {0} carried no data")]
    MissingData(String),

    #[error("Invalid access token: {0}")]
    Token(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Request was cancelled")]
    Cancelled,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn decode(context: impl Into<String>, source: serde_json::Error) -> Self {
        Error::Decode {
            context: context.into(),
            source,
        }
    }

    /// Fallback text for a non-2xx response whose body carried no usable message.
    pub fn http_fallback(action: &str, status: u16) -> Self {
        Error::Api {
            status,
            message: format!("{} failed (HTTP {})", action, status),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }

    /// Text suitable for a blocking alert. Transport failures get a generic
    /// retry hint; API failures surface the backend's own message.
    pub fn user_message(&self) -> String {
        match self {
            Error::Transport(_) => "Network error, please retry".to_string(),
            other => other.to_string(),
        }
    }
}
