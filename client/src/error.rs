use counterdex_protocol::ParseError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("{url} returned status {status}")]
    Status { status: u16, url: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl ClientError {
    /// True when upstream answered 404
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}
