use thiserror::Error;

#[derive(Error, Debug)]
pub enum PulseError {
    #[error("invalid sprint window: {0}")]
    Validation(String),

    #[error("empty input: {0}")]
    EmptyInput(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("input path not found: {0}")]
    InputNotFound(String),

    #[error("input parse error: {0}")]
    InputParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PulseError>;
