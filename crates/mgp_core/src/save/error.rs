use thiserror::Error;

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("storage error: {0}")]
    Storage(String),

    #[error("save file not found: {name}")]
    NotFound { name: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("no season in progress to save")]
    NothingToSave,
}

impl SaveError {
    /// Whether the caller can sensibly retry (different name, fixed storage).
    pub fn is_recoverable(&self) -> bool {
        match self {
            SaveError::Storage(_) => true,
            SaveError::NotFound { .. } => true,
            SaveError::NothingToSave => true,
            SaveError::Serialization(_) => false,
            SaveError::InvalidSnapshot(_) => false,
        }
    }
}
