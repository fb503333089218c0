//! 命令行程序错误定义

use crate::script::EventKind;
use circseg_core::error::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Config(#[from] ConfigError),

    #[error("Event #{index} ({kind:?}) is missing coordinates")]
    MissingCoordinate { index: usize, kind: EventKind },
}
