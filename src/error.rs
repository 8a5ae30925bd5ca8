use thiserror::Error;

/// errors reported synchronously to the immediate caller.
/// the core never logs, retries, or swallows one of these internally.
#[derive(Debug, Error, PartialEq)]
pub enum ColorMstError {
    /// raised at graph construction when no usable edge is supplied
    #[error("invalid graph: {0}")]
    InvalidGraph(String),
    /// raised by the exact search before any work begins when the
    /// instance exceeds the caller-supplied vertex limit
    #[error("exact search blocked: {n} vertices exceeds the limit {limit}")]
    ResourceLimit {
        /// number of vertices of the rejected instance
        n: usize,
        /// caller-supplied vertex limit
        limit: usize,
    },
    /// raised by name-based dispatch when the algorithm does not exist
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}
