use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransectError {
    #[error("numerical or file line input not yet supported")]
    UnsupportedInput,

    #[error("'{0}' is not a resource within the {1} directory")]
    ResourceNotFound(String, PathBuf),

    #[error("line {0} has no stations")]
    EmptyLine(String),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Csv(#[from] csv::Error),
}
