/// Failures of the collaborators a group row talks to.
#[derive(Debug, thiserror::Error)]
pub enum GroupError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Dispatch error: {0}")]
    Dispatch(String),

    #[error("Invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GroupError>;
