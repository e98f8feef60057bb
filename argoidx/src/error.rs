use std::path::PathBuf;
use thiserror::Error;
use transect::TransectError;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("missing required parameter '{0}'")]
    Builder(&'static str),

    #[error("no index file at {0}")]
    Path(PathBuf),

    #[error("'{0}' is not a yyyy-mm or yyyy-mm-dd date")]
    DateFormat(String),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Csv(#[from] csv::Error),

    #[error("{0}")]
    Transect(#[from] TransectError),
}
