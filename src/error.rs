use thiserror::Error;

#[derive(Error, Debug)]
pub enum QError {
    #[error("{0}")]
    IoError(#[from] std::io::Error),
    #[error("generic error: {0}")]
    GenericError(String),
    #[error("{format} format: not enough lines (expected {expected}, got {got})")]
    UnexpectedEof {
        format: String,
        expected: usize,
        got: usize,
    },
    #[error("unknown format: {0}")]
    UnknownFormat(String),
    #[error("Failed to parse float: {0}")]
    ParseFloatError(#[from] std::num::ParseFloatError),
    #[error("connectivity row has {row} entries for {atoms} atoms")]
    ConnectivityMismatch { atoms: usize, row: usize },
}
