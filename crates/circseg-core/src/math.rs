//! 数学基础类型
//!
//! 所有坐标都位于归一化设备坐标空间 `[-1, 1] × [-1, 1]`。

/// 二维点
pub type Point2 = nalgebra::Point2<f64>;

/// 二维向量
pub type Vector2 = nalgebra::Vector2<f64>;

/// 通用浮点容差
pub const EPSILON: f64 = 1e-10;

/// 两点间距离
pub fn distance(a: &Point2, b: &Point2) -> f64 {
    nalgebra::distance(a, b)
}
