use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValorError {
    #[error("Failed to load records from {location}: {reason}")]
    Load { location: String, reason: String },

    #[error("Record not found: {0}")]
    RecordNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl ValorError {
    pub fn load(location: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        ValorError::Load {
            location: location.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether this error puts a page into its error state.
    ///
    /// A failed transport, an unparsable document and a detail lookup for an
    /// unknown id all end the same way for the reader.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            ValorError::Load { .. } | ValorError::RecordNotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ValorError>;
