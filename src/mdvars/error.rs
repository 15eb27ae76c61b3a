use thiserror::Error;

#[derive(Error, Debug)]
pub enum MdvarsError {
    /// The host handed us a document path the path convention cannot be
    /// applied to. This is the only failure this crate surfaces; missing
    /// configuration is never an error.
    #[error("Malformed document path: {0}")]
    MalformedPath(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MdvarsError>;
