use thiserror::Error;

/// Failures at the decoded-tree boundary. Layout and interaction never fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error("node {name:?} has negative cumulative weight {cumulative}")]
    NegativeWeight { name: String, cumulative: i64 },
    #[error("tree has more nodes than can be addressed")]
    TooManyNodes,
    #[error("failed to read profile: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode profile: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write csv: {0}")]
    Csv(#[from] csv::Error),
}
