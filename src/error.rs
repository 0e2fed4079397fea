use thiserror::Error;

/// Errors returned by mutations of a road network.
/// Lookups and removals that find nothing signal it through `Option`/`bool`
/// return values instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("town {0:?} is not part of the network")]
    UnknownTown(String),
    #[error("{0:?} and {1:?} are already connected by a road")]
    AlreadyConnected(String, String),
}

/// Errors raised while reading a route file.
/// Parse errors carry the 1-based line number of the offending record.
#[derive(Error, Debug)]
pub enum RouteFileError {
    #[error("route file I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: malformed road record {record:?}")]
    MalformedRecord { line: usize, record: String },
    #[error("line {line}: invalid distance {value:?}")]
    InvalidDistance { line: usize, value: String },
}
