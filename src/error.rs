use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Unsupported locale: {input}")]
    UnsupportedLocale { input: String },

    #[error("Invalid theme \"{input}\" (expected light or dark)")]
    InvalidTheme { input: String },

    #[error("No dashboard view matches \"{path}\"")]
    UnknownRoute { path: String },

    #[error("Failed to load {what}: {source}")]
    Fetch {
        what: String,
        #[source]
        source: FetchError,
    },

    #[error("Failed to save {path}: {source}")]
    SaveState {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Jq(#[from] JqError),
}

/// Failure of a single JSON request
#[derive(Debug, Error)]
pub(crate) enum FetchError {
    /// The server answered with a non-2xx status
    #[error("HTTP {status}")]
    Request { status: u16 },

    /// The request never produced a response
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("invalid JSON response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FetchError {
    pub(crate) fn transport<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        FetchError::Transport(Box::new(err))
    }

    pub(crate) fn status(&self) -> Option<u16> {
        match self {
            FetchError::Request { status } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum JqError {
    #[error("jq not found. Please install jq to use --jq option.")]
    NotFound,

    #[error("Failed to run jq: {0}")]
    Spawn(std::io::Error),

    #[error("Failed to write to jq stdin: {0}")]
    Stdin(std::io::Error),

    #[error("Failed to wait for jq: {0}")]
    Wait(std::io::Error),

    #[error("Invalid UTF-8 from jq: {0}")]
    Utf8(std::string::FromUtf8Error),

    #[error("jq error: {0}")]
    Filter(String),
}
