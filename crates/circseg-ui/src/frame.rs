//! 每帧绘制快照
//!
//! 渲染端每帧拉取一次，只读。

use crate::status::StatusOverlay;
use circseg_core::math::Point2;
use serde::{Deserialize, Serialize};

/// RGBA 颜色
pub type Rgba = [f32; 4];

/// 形状的显示样式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeStyle {
    /// 仍在跟随指针
    Tentative,
    /// 已确定
    Final,
}

/// 调色板
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub tentative_circle: Rgba,
    pub final_circle: Rgba,
    pub tentative_segment: Rgba,
    pub final_segment: Rgba,
    pub intersection: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            tentative_circle: [0.7, 0.7, 0.7, 1.0],
            final_circle: [0.96, 0.0, 0.96, 1.0],
            tentative_segment: [0.5, 0.5, 0.5, 1.0],
            final_segment: [0.47, 0.51, 0.75, 1.0],
            intersection: [1.0, 1.0, 0.0, 1.0],
        }
    }
}

impl Palette {
    pub fn circle(&self, style: ShapeStyle) -> Rgba {
        match style {
            ShapeStyle::Tentative => self.tentative_circle,
            ShapeStyle::Final => self.final_circle,
        }
    }

    pub fn segment(&self, style: ShapeStyle) -> Rgba {
        match style {
            ShapeStyle::Tentative => self.tentative_segment,
            ShapeStyle::Final => self.final_segment,
        }
    }
}

/// 圆的轮廓（line loop）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircleOutline {
    pub vertices: Vec<Point2>,
    pub style: ShapeStyle,
    pub color: Rgba,
}

/// 线段（两个顶点）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentStroke {
    pub vertices: [Point2; 2],
    pub style: ShapeStyle,
    pub color: Rgba,
}

/// 交点标记
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointMarkers {
    pub points: Vec<Point2>,
    pub color: Rgba,
}

/// 一帧的全部绘制内容
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub circle: Option<CircleOutline>,
    pub segment: Option<SegmentStroke>,
    pub intersections: Option<PointMarkers>,
    pub status: StatusOverlay,
}

impl FrameSnapshot {
    /// 是否没有任何可绘制的图元
    pub fn is_blank(&self) -> bool {
        self.circle.is_none() && self.segment.is_none() && self.intersections.is_none()
    }
}
