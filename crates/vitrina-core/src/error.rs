use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Markup parsing error: {0}")]
    Markup(String),

    #[error("Scenario error: {0}")]
    Scenario(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid selector: {0}")]
    Selector(String),

    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
