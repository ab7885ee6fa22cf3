use graphx_isomorphism::MatchError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("link endpoint {endpoint} is not a node of {graph}")]
    UnknownEndpoint { endpoint: String, graph: String },

    #[error(transparent)]
    Match(#[from] MatchError),
}
