use thiserror::Error;

/// Failures talking to the configuration service.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Connection refused, DNS failure, timeout, or a body that could not be read.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The body was not the JSON envelope the endpoint promises.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The service answered with a non-success status and an error envelope.
    #[error("HTTP Error {status}: {message}")]
    Server { status: String, message: String },
}

pub type Result<T> = std::result::Result<T, ClientError>;
