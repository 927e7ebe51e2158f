use std::time::Duration;

/// Production base URL of the Tesouro Nacional API gateway.
pub const BASE_URL: &str = "https://apiapex.tesouro.gov.br/aria";

pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Settings used to build a [`Client`](crate::Client).
///
/// Configuration is purely programmatic: nothing is read from the
/// environment or from files.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base API URL, `https://apiapex.tesouro.gov.br/aria` by default.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

fn default_user_agent() -> String {
    format!("tesouro-rs/{}", env!("CARGO_PKG_VERSION"))
}
