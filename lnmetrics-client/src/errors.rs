use thiserror::Error;

pub type Result<T> = std::result::Result<T, LNMetricsError>;

#[derive(Debug, Error)]
pub enum LNMetricsError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unable to parse the service url: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("graphql error: {0}")]
    Graphql(String),

    #[error("server error: {0}")]
    ErrorEnvelope(String),

    #[error("missing result field `{0}` in the server response")]
    ContractViolation(String),

    #[error("unable to coerce `{name}` to an integer: {value}")]
    Coercion { name: &'static str, value: String },

    #[error("unable to decode the response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl LNMetricsError {
    /// True when the failure originated before or on the wire, as opposed
    /// to an error reported inside a well-formed server payload.
    pub fn is_transport(&self) -> bool {
        matches!(self, LNMetricsError::Transport(_))
    }
}
