//! 状态文本
//!
//! 三行叠加文本：圆信息、线段信息、交点信息。数值保留两位小数。

use circseg_core::geometry::{Circle, Segment};
use circseg_core::intersection::IntersectionResult;
use circseg_core::math::Point2;
use serde::Serialize;

/// 屏幕上的三行状态文本，未确定前为空
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusOverlay {
    pub circle: String,
    pub segment: String,
    pub intersection: String,
}

impl StatusOverlay {
    /// 按显示顺序返回三行文本
    pub fn lines(&self) -> [&str; 3] {
        [&self.circle, &self.segment, &self.intersection]
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// 两位小数，恰好落在中间值时远离零取整，`-0.00` 显示为 `0.00`
fn fixed2(value: f64) -> String {
    // 第三位小数恰为 5 的二进制值只有 k/8（k 为奇数）
    let eighths = value * 8.0;
    let rounded = if eighths.fract() == 0.0 && eighths.rem_euclid(2.0) == 1.0 {
        value.signum() * (value.abs() * 100.0 + 0.5).floor() / 100.0
    } else {
        value
    };
    // -0.0 + 0.0 == +0.0
    format!("{:.2}", rounded + 0.0)
}

fn point_text(p: &Point2) -> String {
    format!("({}, {})", fixed2(p.x), fixed2(p.y))
}

pub fn circle_status(circle: &Circle) -> String {
    format!(
        "Circle: center {} radius = {}",
        point_text(&circle.center),
        fixed2(circle.radius)
    )
}

pub fn segment_status(segment: &Segment) -> String {
    format!(
        "Line segment: {} ~ {}",
        point_text(&segment.start),
        point_text(&segment.end)
    )
}

pub fn intersection_status(result: &IntersectionResult) -> String {
    if result.is_empty() {
        return "No intersection".to_string();
    }

    let points: Vec<String> = result
        .points()
        .enumerate()
        .map(|(i, point)| format!("Point {}: {}", i + 1, point_text(&point)))
        .collect();
    format!("Intersection Points: {} {}", result.len(), points.join(" "))
}
