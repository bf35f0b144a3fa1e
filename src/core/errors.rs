use thiserror::Error;

#[derive(Error, Debug)]
pub enum PawdeckError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("The cat source returned no cats")]
    EmptyPool,

    #[error("PawdeckError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for PawdeckError {
    fn from(error: std::io::Error) -> Self {
        PawdeckError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for PawdeckError {
    fn from(error: reqwest::Error) -> Self {
        PawdeckError::Reqwest(Box::new(error))
    }
}
