/// All errors that can occur while talking to the stats API or working with ranks.
#[derive(thiserror::Error, Debug)]
pub enum OwError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code without an error payload.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// The body was not JSON, or did not have the expected shape.
    #[error("failed to decode response from {url}: {source}")]
    Json {
        url: String,
        source: serde_json::Error,
    },

    /// The API answered with an `{"error": ...}` payload.
    #[error("api error for {url}: {message}")]
    Api { url: String, message: String },

    /// A request URL could not be built from the configured base URL.
    #[error("invalid url {url}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    /// The base URL cannot take path segments (e.g. `mailto:`).
    #[error("base url cannot be extended with a path: {url}")]
    BaseUrl { url: String },

    /// A required field was missing from an otherwise well-formed response.
    #[error("response from {url} is missing `{field}`")]
    MissingField { url: String, field: &'static str },

    #[error("player identifier is empty")]
    EmptyIdentifier,

    /// Unknown competitive bracket name.
    #[error("unknown bracket: {0}")]
    InvalidBracket(String),

    /// Tiers run from 1 (best) to 5.
    #[error("tier {0} is outside 1..=5")]
    InvalidTier(u8),

    /// A rank string that is not of the form `"Gold 3"`.
    #[error("invalid rank: {0}")]
    InvalidRank(String),

    /// A skill rating was compared against a tiered rank.
    #[error("cannot compare a {left} rating with a {right} rating")]
    IncompatibleRatings {
        left: &'static str,
        right: &'static str,
    },
}

impl OwError {
    /// Whether this error was caused by a request or body read running out of time.
    pub fn is_timeout(&self) -> bool {
        match self {
            OwError::Http { source, .. } | OwError::ResponseBody { source, .. } => {
                source.is_timeout()
            }
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, OwError>;
