use thiserror::Error;

#[derive(Error, Debug)]
pub enum FacetError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("History error: {0}")]
    History(String),
}

pub type Result<T> = std::result::Result<T, FacetError>;
