use thiserror::Error;

/// Failure of a single explorer operation. None of these are retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExplorerError {
    /// The search text is not a block number, transaction hash or address
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The node answered `null` for a well-formed identifier
    #[error("{0} not found")]
    NotFound(String),

    /// Transport, HTTP or JSON failure while talking to the node
    #[error("RPC error: {0}")]
    Rpc(String),
}

impl ExplorerError {
    /// Notices the user should see as plain information rather than a failure
    pub fn is_notice(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::NotFound(_))
    }
}

impl From<reqwest::Error> for ExplorerError {
    fn from(err: reqwest::Error) -> Self {
        Self::Rpc(err.to_string())
    }
}

impl From<serde_json::Error> for ExplorerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Rpc(format!("malformed JSON: {err}"))
    }
}
