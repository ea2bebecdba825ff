use thiserror::Error;

#[derive(Error, Debug)]
pub enum FragMapperError {
    #[error("config error: {0}")]
    Config(String),

    #[error("schema violation: {0}")]
    Schema(String),

    #[error("matcher contract violation: {0}")]
    MatcherContract(String),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FragMapperError>;
