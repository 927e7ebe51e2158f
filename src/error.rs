use reqwest::StatusCode;

/// Errors returned by [`Client`](crate::Client) operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The server answered with anything other than `200 OK`.
    #[error("API request failed: HTTP {status} for url ({url})\n{body}")]
    Http {
        status: StatusCode,
        url: String,
        /// Response body, truncated when very large.
        body: String,
    },

    /// Connection, DNS, timeout or client construction failure.
    #[error("request failed")]
    Transport(#[from] reqwest::Error),

    /// A `200 OK` response whose body did not decode into the expected shape.
    #[error("failed to parse API JSON (url={url})")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// HTTP status of an [`Error::Http`], if this is one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_http(&self) -> bool {
        matches!(self, Error::Http { .. })
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
