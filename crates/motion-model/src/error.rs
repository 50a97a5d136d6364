use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown dominant hand: {0} (expected RHA or LHA)")]
    UnknownDominantHand(String),
    #[error("invalid segment id: {0}")]
    InvalidSegmentId(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
