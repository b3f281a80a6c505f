use thiserror::Error;

pub type SeedResult<T> = Result<T, SeedError>;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Excel error: {0}")]
    Excel(String),

    #[error("required columns are missing from the roster: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}
