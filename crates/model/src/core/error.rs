use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown result format: {0}")]
    UnknownFormat(String),

    #[error("invalid time zone: '{0}'")]
    InvalidZone(String),
}
