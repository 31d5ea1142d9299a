use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum QtError {
    /// An error occurred while sending the HTTP request (connect, transport, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response headers arrived but the body could not be read to the end.
    #[error("failed to read response body from {url}: {source}")]
    Read {
        /// The URL whose body could not be read.
        url: String,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The response body was not valid GBK.
    #[error("GBK decoding failed at byte {offset}: {message}")]
    Decode {
        /// Byte position of the first malformed sequence.
        offset: usize,
        /// What went wrong.
        message: String,
    },

    /// A record had fewer columns than the schema addresses.
    #[error("malformed record for '{code}': {columns} columns, need at least {required}")]
    Parse {
        /// The instrument code of the record (may be empty).
        code: String,
        /// Number of columns found.
        columns: usize,
        /// Number of columns the schema requires.
        required: usize,
    },

    /// A ticker handed to the profile was empty or contained unsupported characters.
    #[error("invalid ticker: '{0}'")]
    InvalidTicker(String),
}
