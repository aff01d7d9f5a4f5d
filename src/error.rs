use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarketSeerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Analysis error: {0}")]
    Analysis(String),
}

impl MarketSeerError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn analysis_error(msg: impl Into<String>) -> Self {
        Self::Analysis(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, MarketSeerError>;
