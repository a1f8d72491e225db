use thiserror::Error;

#[derive(Error, Debug)]
pub enum KartkiError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to load vocabulary data: {0}")]
    FailedToLoadFile(String),

    #[error("KartkiError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for KartkiError {
    fn from(error: std::io::Error) -> Self {
        KartkiError::Io(Box::new(error))
    }
}
