use ::scraper::error::SelectorErrorKind;

/// All errors that can occur while scraping GosuGamers.
#[derive(thiserror::Error, Debug)]
pub enum GosuError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// A CSS selector string could not be parsed.
    #[error("invalid CSS selector: {0}")]
    Selector(String),

    /// A pattern used to pick values out of hrefs could not be compiled.
    #[error("invalid pattern: {0}")]
    Regex(#[from] regex::Error),

    /// The configured base domain is not a valid absolute URL.
    #[error("invalid base url {url}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
}

impl<'a> From<SelectorErrorKind<'a>> for GosuError {
    fn from(err: SelectorErrorKind<'a>) -> Self {
        GosuError::Selector(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GosuError>;
