//! 引擎配置

use crate::frame::Palette;
use crate::viewport::Viewport;
use circseg_core::error::ConfigError;
use circseg_core::intersection::SolverConfig;
use serde::{Deserialize, Serialize};

/// 圆轮廓默认离散段数
pub const DEFAULT_CIRCLE_SEGMENTS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// 求交判别式策略
    pub solver: SolverConfig,
    /// 圆轮廓离散段数
    pub circle_segments: usize,
    /// 画布尺寸（用于像素坐标转换）
    pub viewport: Viewport,
    pub palette: Palette,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            solver: SolverConfig::default(),
            circle_segments: DEFAULT_CIRCLE_SEGMENTS,
            viewport: Viewport::default(),
            palette: Palette::default(),
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.solver.validate()?;
        if self.circle_segments < 3 {
            return Err(ConfigError::InvalidSegmentCount(self.circle_segments));
        }
        self.viewport.validate()
    }
}
