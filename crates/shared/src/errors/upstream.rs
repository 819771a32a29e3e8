use thiserror::Error;

/// Failures talking to the remote inventory service. The gateway is a
/// single-attempt pass-through: no variant here is ever retried.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Upstream answered with a non-2xx status; the code is forwarded
    /// to the browser unchanged.
    #[error("upstream returned {code}: {message}")]
    Status { code: u16, message: String },

    #[error("failed to reach inventory service: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to decode upstream response: {0}")]
    Decode(String),
}
