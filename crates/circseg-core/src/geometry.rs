//! 几何图元定义
//!
//! 支持的基本图元：
//! - 圆 (Circle)
//! - 线段 (Segment)

use crate::math::{distance, Point2, Vector2};
use serde::{Deserialize, Serialize};

/// 圆
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point2,
    pub radius: f64,
}

impl Circle {
    /// 创建圆，负半径（以及 NaN）按 0 处理
    pub fn new(center: Point2, radius: f64) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
        }
    }

    /// 以 `center` 为圆心、经过 `rim` 的圆
    pub fn through(center: Point2, rim: Point2) -> Self {
        Self::new(center, distance(&center, &rim))
    }

    /// 计算点到圆周的距离（负值表示在圆内）
    pub fn distance_to_point(&self, point: &Point2) -> f64 {
        distance(point, &self.center) - self.radius
    }

    /// 点是否在圆周上（考虑容差）
    pub fn is_on_boundary(&self, point: &Point2, tolerance: f64) -> bool {
        self.distance_to_point(point).abs() < tolerance
    }

    /// 获取圆上指定角度的点
    pub fn point_at_angle(&self, angle: f64) -> Point2 {
        Point2::new(
            self.center.x + self.radius * angle.cos(),
            self.center.y + self.radius * angle.sin(),
        )
    }

    /// 离散化为闭合折线（首尾不重复，按 line loop 绘制）
    pub fn tessellate(&self, segments: usize) -> Vec<Point2> {
        (0..segments)
            .map(|i| {
                let theta = 2.0 * std::f64::consts::PI * (i as f64 / segments as f64);
                self.point_at_angle(theta)
            })
            .collect()
    }
}

/// 线段，参数化为 `start + t·(end − start)`，`t ∈ [0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
}

impl Segment {
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// 方向向量 `end − start`（未归一化）
    pub fn delta(&self) -> Vector2 {
        self.end - self.start
    }

    /// 计算线段长度
    pub fn length(&self) -> f64 {
        self.delta().norm()
    }

    /// 零长度线段
    pub fn is_degenerate(&self) -> bool {
        self.delta().norm_squared() == 0.0
    }

    /// 参数 `t` 处的点
    pub fn point_at(&self, t: f64) -> Point2 {
        Point2::new(
            self.start.x + t * (self.end.x - self.start.x),
            self.start.y + t * (self.end.y - self.start.y),
        )
    }

    /// 点在线段所在直线上的投影参数，零长度线段返回 `None`
    pub fn parameter_of(&self, point: &Point2) -> Option<f64> {
        let d = self.delta();
        let len_sq = d.norm_squared();
        if len_sq == 0.0 {
            return None;
        }
        Some((point - self.start).dot(&d) / len_sq)
    }
}
