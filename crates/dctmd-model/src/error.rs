use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    /// A path was requested that the compiled instance list does not contain.
    /// This signals a model/consumer mismatch, not a data-entry problem.
    #[error("unknown instance path: {0}")]
    UnknownPath(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
