use thiserror::Error;

pub type Result<T> = std::result::Result<T, MatchError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error(
        "orientation mismatch: matcher expects {} graphs, got g1 directed = {g1_directed}, g2 directed = {g2_directed}",
        if *.expected_directed { "directed" } else { "undirected" }
    )]
    OrientationMismatch {
        expected_directed: bool,
        g1_directed: bool,
        g2_directed: bool,
    },
}
