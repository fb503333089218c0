//! circseg 核心几何
//!
//! 提供归一化设备坐标（NDC）下的圆、线段图元，以及圆与有限线段的解析求交。
//!
//! # 示例
//!
//! ```rust
//! use circseg_core::prelude::*;
//!
//! let circle = Circle::new(Point2::origin(), 1.0);
//! let segment = Segment::new(Point2::new(-2.0, 0.0), Point2::new(2.0, 0.0));
//!
//! let result = circle_segment_intersection(&circle, &segment);
//! assert_eq!(result.len(), 2);
//! ```

pub mod error;
pub mod geometry;
pub mod intersection;
pub mod math;

pub mod prelude {
    //! 常用类型的便捷导入
    pub use crate::error::ConfigError;
    pub use crate::geometry::{Circle, Segment};
    pub use crate::intersection::{
        circle_segment_intersection, CircleSegmentSolver, DiscriminantTest, Hit,
        IntersectionResult, SolverConfig,
    };
    pub use crate::math::{Point2, Vector2, EPSILON};
}
