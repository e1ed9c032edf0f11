use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to initialize logging: {0}")]
    LoggingInit(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
    #[error("failed to open log file at {path}: {source}")]
    LogFileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to start the store runtime: {0}")]
    StoreRuntime(#[source] std::io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
