use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown job flexibility: {0}")]
    UnknownFlexibility(String),
    #[error("unknown offer status: {0}")]
    UnknownOfferStatus(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
