use thiserror::Error;

/// Why a file could not be decoded as a card record.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("missing header start marker")]
    MissingStartMarker,

    #[error("missing header end marker")]
    MissingEndMarker,

    #[error("record is not valid UTF-8")]
    NotUtf8,

    #[error("invalid header: {0}")]
    Header(#[from] serde_yaml::Error),
}

#[derive(Error, Debug)]
pub enum CardError {
    #[error("Malformed record: {0}")]
    Format(#[from] FormatError),

    #[error("Card not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not allocate a file name for \"{base}\"")]
    AllocationExhausted { base: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CardError {
    /// Allocation exhaustion is a filesystem failure as far as callers are concerned.
    pub fn is_io(&self) -> bool {
        matches!(self, CardError::Io(_) | CardError::AllocationExhausted { .. })
    }
}

pub type Result<T> = std::result::Result<T, CardError>;
