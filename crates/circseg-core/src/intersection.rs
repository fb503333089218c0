//! 圆与有限线段求交
//!
//! 线段参数化为 `P(t) = P1 + t·(P2 − P1)`，代入圆方程得到关于 `t` 的二次方程
//! `A·t² + B·t + C = 0`：
//!
//! - `A = dx² + dy²`
//! - `B = 2·(dx·(x1 − cx) + dy·(y1 − cy))`
//! - `C = (x1 − cx)² + (y1 − cy)² − r²`
//!
//! 只保留 `t ∈ [0, 1]` 的根。两个根按 `t1 = (−B + √disc) / 2A`、
//! `t2 = (−B − √disc) / 2A` 的计算顺序输出，不按几何位置排序。

use crate::error::ConfigError;
use crate::geometry::{Circle, Segment};
use crate::math::Point2;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 判别式分类方式
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DiscriminantTest {
    /// 严格比较：`disc < 0` 无交点，`disc == 0` 相切
    #[default]
    Strict,
    /// 容差比较：`|disc| <= epsilon` 视为相切
    Tolerant { epsilon: f64 },
}

impl DiscriminantTest {
    fn classify(&self, disc: f64) -> RootClass {
        match *self {
            DiscriminantTest::Strict => {
                if disc < 0.0 {
                    RootClass::None
                } else if disc == 0.0 {
                    RootClass::Tangent
                } else {
                    RootClass::Secant
                }
            }
            DiscriminantTest::Tolerant { epsilon } => {
                if disc.abs() <= epsilon {
                    RootClass::Tangent
                } else if disc < 0.0 {
                    RootClass::None
                } else {
                    RootClass::Secant
                }
            }
        }
    }
}

/// 根的类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RootClass {
    None,
    Tangent,
    Secant,
}

/// 求解器配置
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub discriminant: DiscriminantTest,
}

impl SolverConfig {
    /// 容差模式
    pub fn tolerant(epsilon: f64) -> Self {
        Self {
            discriminant: DiscriminantTest::Tolerant { epsilon },
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.discriminant {
            DiscriminantTest::Tolerant { epsilon } if !(epsilon.is_finite() && epsilon >= 0.0) => {
                Err(ConfigError::InvalidEpsilon(epsilon))
            }
            _ => Ok(()),
        }
    }
}

/// 单个交点及其线段参数
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hit {
    pub point: Point2,
    pub t: f64,
}

/// 求交结果：0、1 或 2 个交点
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IntersectionResult {
    hits: Vec<Hit>,
    /// 唯一交点来自判别式为零的分支
    tangent: bool,
}

impl IntersectionResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn is_tangent(&self) -> bool {
        self.tangent
    }

    pub fn hits(&self) -> &[Hit] {
        &self.hits
    }

    /// 按求根顺序输出交点
    pub fn points(&self) -> impl Iterator<Item = Point2> + '_ {
        self.hits.iter().map(|h| h.point)
    }
}

/// 圆-线段求交器
#[derive(Debug, Clone, Copy, Default)]
pub struct CircleSegmentSolver {
    config: SolverConfig,
}

impl CircleSegmentSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// 求交，永不失败；退化输入返回空结果
    pub fn solve(&self, circle: &Circle, segment: &Segment) -> IntersectionResult {
        let (cx, cy, r) = (circle.center.x, circle.center.y, circle.radius);
        let (x1, y1) = (segment.start.x, segment.start.y);
        let (x2, y2) = (segment.end.x, segment.end.y);

        let dx = x2 - x1;
        let dy = y2 - y1;
        let a = dx * dx + dy * dy;
        let b = 2.0 * (dx * (x1 - cx) + dy * (y1 - cy));
        let c = (x1 - cx) * (x1 - cx) + (y1 - cy) * (y1 - cy) - r * r;

        // 零长度线段
        if a == 0.0 {
            debug!("degenerate segment, no intersection");
            return IntersectionResult::empty();
        }

        let disc = b * b - 4.0 * a * c;
        let class = self.config.discriminant.classify(disc);
        debug!(disc, ?class, "classified discriminant");

        let hit_at = |t: f64| {
            (0.0..=1.0).contains(&t).then(|| Hit {
                point: Point2::new(x1 + t * dx, y1 + t * dy),
                t,
            })
        };

        match class {
            RootClass::None => IntersectionResult::empty(),
            RootClass::Tangent => {
                let t = -b / (2.0 * a);
                match hit_at(t) {
                    Some(hit) => IntersectionResult {
                        hits: vec![hit],
                        tangent: true,
                    },
                    None => IntersectionResult::empty(),
                }
            }
            RootClass::Secant => {
                let sqrt_disc = disc.sqrt();
                let t1 = (-b + sqrt_disc) / (2.0 * a);
                let t2 = (-b - sqrt_disc) / (2.0 * a);
                IntersectionResult {
                    hits: [t1, t2].into_iter().filter_map(hit_at).collect(),
                    tangent: false,
                }
            }
        }
    }
}

/// 使用严格判别式的求交
pub fn circle_segment_intersection(circle: &Circle, segment: &Segment) -> IntersectionResult {
    CircleSegmentSolver::default().solve(circle, segment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::EPSILON;

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
        Segment::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    fn unit_circle() -> Circle {
        Circle::new(Point2::origin(), 1.0)
    }

    #[test]
    fn test_secant_root_order() {
        let result = circle_segment_intersection(&unit_circle(), &seg(-2.0, 0.0, 2.0, 0.0));
        let pts: Vec<_> = result.points().collect();
        assert_eq!(pts.len(), 2);
        assert!(!result.is_tangent());
        // t1 = 0.75 先于 t2 = 0.25
        assert!((pts[0].x - 1.0).abs() < EPSILON);
        assert!((pts[1].x + 1.0).abs() < EPSILON);
        assert_eq!(result.hits()[0].t, 0.75);
        assert_eq!(result.hits()[1].t, 0.25);
    }

    #[test]
    fn test_line_above_circle() {
        let result = circle_segment_intersection(&unit_circle(), &seg(-2.0, 2.0, 2.0, 2.0));
        assert!(result.is_empty());
    }

    #[test]
    fn test_tangent() {
        let result = circle_segment_intersection(&unit_circle(), &seg(-1.0, 1.0, 1.0, 1.0));
        assert_eq!(result.len(), 1);
        assert!(result.is_tangent());
        let p = result.hits()[0].point;
        assert!(p.x.abs() < EPSILON);
        assert!((p.y - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_tangent_outside_span() {
        // 切点 (0, 1) 在线段延长线上
        let result = circle_segment_intersection(&unit_circle(), &seg(0.5, 1.0, 2.0, 1.0));
        assert!(result.is_empty());
    }

    #[test]
    fn test_far_away() {
        let circle = Circle::new(Point2::new(5.0, 5.0), 0.5);
        let result = circle_segment_intersection(&circle, &seg(0.0, 0.0, 1.0, 1.0));
        assert!(result.is_empty());
    }

    #[test]
    fn test_segment_inside_circle() {
        let result = circle_segment_intersection(&unit_circle(), &seg(-0.2, 0.1, 0.3, 0.1));
        assert!(result.is_empty());
    }

    #[test]
    fn test_one_endpoint_inside() {
        // 只有 t1 落在线段上
        let result = circle_segment_intersection(&unit_circle(), &seg(0.0, 0.0, 2.0, 0.0));
        assert_eq!(result.len(), 1);
        assert!(!result.is_tangent());
        assert!((result.hits()[0].point.x - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_degenerate_segment() {
        let result = circle_segment_intersection(&unit_circle(), &seg(1.0, 0.0, 1.0, 0.0));
        assert!(result.is_empty());
    }

    #[test]
    fn test_validate_epsilon() {
        assert!(SolverConfig::default().validate().is_ok());
        assert!(SolverConfig::tolerant(1e-9).validate().is_ok());
        assert_eq!(
            SolverConfig::tolerant(-1.0).validate(),
            Err(ConfigError::InvalidEpsilon(-1.0))
        );
        assert!(SolverConfig::tolerant(f64::NAN).validate().is_err());
    }
}
