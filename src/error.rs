use thiserror::Error;

#[derive(Error, Debug)]
pub enum MeterError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("sender not found: {name}")]
    SenderNotFound { name: String },
}

pub type Result<T> = std::result::Result<T, MeterError>;
