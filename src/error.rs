use crate::domain::rules::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReceiptError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("No receipt found for id {0}")]
    NotFound(String),
    #[error("Invalid id format: {0:?}")]
    InvalidId(String),
}

pub type Result<T> = std::result::Result<T, ReceiptError>;
