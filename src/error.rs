use thiserror::Error;

// Everything that can fail in this crate.
// Build and query are deterministic, so none of these are retryable;
// a failure is terminal for that call but never corrupts a built tree.
#[derive(Error, Debug)]
pub enum KnnError {
    #[error("cannot build a tree from an empty dataset")]
    EmptyDataset,

    #[error("query attempted on a tree with no root")]
    EmptyTree,

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("failed to parse label: {0}")]
    ParseLabel(#[from] std::num::ParseIntError),

    #[error("failed to parse pixel: {0}")]
    ParsePixel(#[from] std::num::ParseFloatError),
}

pub type Result<T> = std::result::Result<T, KnnError>;
