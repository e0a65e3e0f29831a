use thiserror::Error;

#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("Column '{0}' not found in input header")]
    ColumnNotFound(String),

    #[error("Input file contains no header row")]
    MissingHeader,

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to persist output file: {0}")]
    PersistError(#[from] tempfile::PersistError),

    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type NormalizeResult<T> = Result<T, NormalizeError>;
