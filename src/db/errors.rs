use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("Receipt not found: {0}")]
    NotFound(String),

    #[error("Receipt id already stored: {0}")]
    DuplicateId(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
