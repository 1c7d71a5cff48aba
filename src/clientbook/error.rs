use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientbookError {
    #[error("Client not found: {0}")]
    ClientNotFound(u64),

    #[error("Invalid phone: {0} (digits only, at least 10 including area code)")]
    InvalidPhone(String),

    #[error("Field cannot be empty: {0}")]
    EmptyField(&'static str),

    #[error("No client ids left to assign (last id: {0})")]
    IdSpaceExhausted(u64),

    #[error("Invalid ID: {0}")]
    InvalidId(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ClientbookError>;
