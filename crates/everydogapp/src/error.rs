use thiserror::Error;

#[derive(Error, Debug)]
pub enum EverydogError {
    #[error("Breed not found: {0}")]
    BreedNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Catalog source answered with status {0}")]
    Status(u16),

    #[error("Malformed catalog: {0}")]
    Malformed(String),

    #[error("Catalog unavailable: {0}")]
    Unavailable(String),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, EverydogError>;
