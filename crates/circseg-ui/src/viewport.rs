//! 画布像素坐标与 NDC 的转换
//!
//! 像素坐标原点在画布左上角，y 向下；NDC 原点在画布中心，y 向上。

use circseg_core::error::ConfigError;
use circseg_core::math::Point2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 700.0,
            height: 700.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Result<Self, ConfigError> {
        let viewport = Self { width, height };
        viewport.validate()?;
        Ok(viewport)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(self.width) && valid(self.height) {
            Ok(())
        } else {
            Err(ConfigError::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }

    /// 像素坐标 -> NDC
    pub fn to_ndc(&self, px: f64, py: f64) -> Point2 {
        Point2::new(
            (px / self.width) * 2.0 - 1.0,
            -((py / self.height) * 2.0 - 1.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_and_center() {
        let vp = Viewport::new(700.0, 500.0).unwrap();
        assert_eq!(vp.to_ndc(0.0, 0.0), Point2::new(-1.0, 1.0));
        assert_eq!(vp.to_ndc(700.0, 500.0), Point2::new(1.0, -1.0));
        assert_eq!(vp.to_ndc(350.0, 250.0), Point2::new(0.0, 0.0));
    }

    #[test]
    fn test_quarter_points() {
        let vp = Viewport::default();
        assert_eq!(vp.to_ndc(175.0, 525.0), Point2::new(-0.5, -0.5));
        assert_eq!(vp.to_ndc(525.0, 175.0), Point2::new(0.5, 0.5));
    }

    #[test]
    fn test_invalid_size() {
        assert!(Viewport::new(0.0, 100.0).is_err());
        assert!(Viewport::new(100.0, f64::INFINITY).is_err());
        assert!(Viewport::new(-1.0, -1.0).is_err());
    }
}
