//! 配置错误定义

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid discriminant epsilon: {0} (must be finite and >= 0)")]
    InvalidEpsilon(f64),

    #[error("Invalid circle segment count: {0} (need at least 3)")]
    InvalidSegmentCount(usize),

    #[error("Invalid viewport size: {width} x {height}")]
    InvalidViewport { width: f64, height: f64 },
}
