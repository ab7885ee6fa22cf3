use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Node not found: {node}")]
    NodeNotFound { node: String },
}

pub type Result<T> = std::result::Result<T, GraphError>;
