//! 两阶段输入状态机
//!
//! 先画圆（按下定圆心，拖动定半径，松开确定），再画线段（按下定起点，
//! 拖动定终点，松开确定并求交）。阶段只能向前推进，不会回到已经离开的阶段。
//!
//! 每个阶段只携带该阶段可能存在的形状数据，
//! 因此“圆未确定时已有线段”这类状态无法构造。

use circseg_core::geometry::{Circle, Segment};
use circseg_core::intersection::{CircleSegmentSolver, IntersectionResult};
use circseg_core::math::Point2;
use serde::{Deserialize, Serialize};

/// 指针事件（坐标已转换为 NDC）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down(Point2),
    Move(Point2),
    Up(Point2),
}

impl PointerEvent {
    pub fn position(&self) -> Point2 {
        match *self {
            PointerEvent::Down(p) | PointerEvent::Move(p) | PointerEvent::Up(p) => p,
        }
    }
}

/// 阶段名称
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseKind {
    AwaitingCircleStart,
    DraggingCircle,
    AwaitingLineStart,
    DraggingLine,
    Done,
}

impl PhaseKind {
    /// 当前阶段的提示文本
    pub fn prompt(&self) -> &'static str {
        match self {
            PhaseKind::AwaitingCircleStart => "Press to place the circle center",
            PhaseKind::DraggingCircle => "Drag to set the radius, release to confirm",
            PhaseKind::AwaitingLineStart => "Press to place the segment start",
            PhaseKind::DraggingLine => "Drag to set the segment end, release to confirm",
            PhaseKind::Done => "Done",
        }
    }
}

/// 输入阶段及其形状数据
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InputPhase {
    /// 等待设置圆心
    #[default]
    AwaitingCircleStart,
    /// 拖动中，半径跟随指针
    DraggingCircle { circle: Circle },
    /// 圆已确定，等待线段起点
    AwaitingLineStart { circle: Circle },
    /// 拖动中，终点跟随指针（尚未移动时为 `None`）
    DraggingLine {
        circle: Circle,
        start: Point2,
        end: Option<Point2>,
    },
    /// 全部确定，交点已计算
    Done {
        circle: Circle,
        segment: Segment,
        result: IntersectionResult,
    },
}

/// 单个事件对状态的影响
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    /// 当前阶段不处理该事件
    Ignored,
    /// 开始拖动，尚无可绘制内容
    Started,
    /// 拖动中的形状发生变化
    Changed,
    /// 圆已确定
    CircleFinalized,
    /// 线段已确定，交点已计算
    SegmentFinalized,
}

impl EventResponse {
    /// 是否需要重绘
    pub fn needs_redraw(&self) -> bool {
        matches!(
            self,
            EventResponse::Changed | EventResponse::CircleFinalized | EventResponse::SegmentFinalized
        )
    }

    pub fn is_applied(&self) -> bool {
        !matches!(self, EventResponse::Ignored)
    }
}

/// 状态转移结果
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub phase: InputPhase,
    pub response: EventResponse,
}

impl Transition {
    fn to(phase: InputPhase, response: EventResponse) -> Self {
        Self { phase, response }
    }

    fn ignored(phase: InputPhase) -> Self {
        Self::to(phase, EventResponse::Ignored)
    }
}

impl InputPhase {
    pub fn kind(&self) -> PhaseKind {
        match self {
            InputPhase::AwaitingCircleStart => PhaseKind::AwaitingCircleStart,
            InputPhase::DraggingCircle { .. } => PhaseKind::DraggingCircle,
            InputPhase::AwaitingLineStart { .. } => PhaseKind::AwaitingLineStart,
            InputPhase::DraggingLine { .. } => PhaseKind::DraggingLine,
            InputPhase::Done { .. } => PhaseKind::Done,
        }
    }

    /// 当前的圆（拖动中或已确定）
    pub fn circle(&self) -> Option<&Circle> {
        match self {
            InputPhase::AwaitingCircleStart => None,
            InputPhase::DraggingCircle { circle }
            | InputPhase::AwaitingLineStart { circle }
            | InputPhase::DraggingLine { circle, .. }
            | InputPhase::Done { circle, .. } => Some(circle),
        }
    }

    /// 圆是否已确定
    pub fn is_circle_final(&self) -> bool {
        matches!(
            self,
            InputPhase::AwaitingLineStart { .. }
                | InputPhase::DraggingLine { .. }
                | InputPhase::Done { .. }
        )
    }

    /// 当前的线段，拖动中但尚未移动时返回 `None`
    pub fn segment(&self) -> Option<Segment> {
        match self {
            InputPhase::DraggingLine {
                start,
                end: Some(end),
                ..
            } => Some(Segment::new(*start, *end)),
            InputPhase::Done { segment, .. } => Some(*segment),
            _ => None,
        }
    }

    /// 线段起点（包括尚未移动的拖动）
    pub fn segment_start(&self) -> Option<Point2> {
        match self {
            InputPhase::DraggingLine { start, .. } => Some(*start),
            InputPhase::Done { segment, .. } => Some(segment.start),
            _ => None,
        }
    }

    /// 求交结果，仅在 `Done` 阶段存在
    pub fn result(&self) -> Option<&IntersectionResult> {
        match self {
            InputPhase::Done { result, .. } => Some(result),
            _ => None,
        }
    }

    /// 纯状态转移函数
    pub fn step(self, event: PointerEvent, solver: &CircleSegmentSolver) -> Transition {
        match (self, event) {
            (InputPhase::AwaitingCircleStart, PointerEvent::Down(p)) => Transition::to(
                InputPhase::DraggingCircle {
                    circle: Circle::new(p, 0.0),
                },
                EventResponse::Started,
            ),
            (InputPhase::DraggingCircle { circle }, PointerEvent::Move(p)) => Transition::to(
                InputPhase::DraggingCircle {
                    circle: Circle::through(circle.center, p),
                },
                EventResponse::Changed,
            ),
            // 半径保持最后一次移动时的值
            (InputPhase::DraggingCircle { circle }, PointerEvent::Up(_)) => Transition::to(
                InputPhase::AwaitingLineStart { circle },
                EventResponse::CircleFinalized,
            ),
            (InputPhase::AwaitingLineStart { circle }, PointerEvent::Down(p)) => Transition::to(
                InputPhase::DraggingLine {
                    circle,
                    start: p,
                    end: None,
                },
                EventResponse::Started,
            ),
            (InputPhase::DraggingLine { circle, start, .. }, PointerEvent::Move(p)) => {
                Transition::to(
                    InputPhase::DraggingLine {
                        circle,
                        start,
                        end: Some(p),
                    },
                    EventResponse::Changed,
                )
            }
            // 没有移动过（尚无终点）时忽略松开，继续拖动
            (
                InputPhase::DraggingLine {
                    circle,
                    start,
                    end: Some(end),
                },
                PointerEvent::Up(_),
            ) => {
                let segment = Segment::new(start, end);
                let result = solver.solve(&circle, &segment);
                Transition::to(
                    InputPhase::Done {
                        circle,
                        segment,
                        result,
                    },
                    EventResponse::SegmentFinalized,
                )
            }
            (phase, _) => Transition::ignored(phase),
        }
    }
}
