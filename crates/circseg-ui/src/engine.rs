//! 交互引擎
//!
//! 持有输入阶段、求交器和状态文本。所有修改都经由指针事件处理函数完成，
//! 渲染端通过只读访问器或 [`ShapeInputEngine::frame`] 拉取数据。

use crate::config::EngineConfig;
use crate::frame::{CircleOutline, FrameSnapshot, PointMarkers, SegmentStroke, ShapeStyle};
use crate::phase::{EventResponse, InputPhase, PhaseKind, PointerEvent, Transition};
use crate::status::{circle_status, intersection_status, segment_status, StatusOverlay};
use circseg_core::error::ConfigError;
use circseg_core::geometry::{Circle, Segment};
use circseg_core::intersection::{CircleSegmentSolver, IntersectionResult};
use circseg_core::math::Point2;
use tracing::{debug, info};

/// 圆-线段交互引擎
#[derive(Debug, Clone)]
pub struct ShapeInputEngine {
    config: EngineConfig,
    solver: CircleSegmentSolver,
    phase: InputPhase,
    status: StatusOverlay,
}

impl Default for ShapeInputEngine {
    fn default() -> Self {
        let config = EngineConfig::default();
        Self {
            config,
            solver: CircleSegmentSolver::new(config.solver),
            phase: InputPhase::default(),
            status: StatusOverlay::default(),
        }
    }
}

impl ShapeInputEngine {
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            solver: CircleSegmentSolver::new(config.solver),
            phase: InputPhase::default(),
            status: StatusOverlay::default(),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ========== 事件处理 ==========

    pub fn on_pointer_down(&mut self, p: Point2) -> EventResponse {
        self.handle(PointerEvent::Down(p))
    }

    pub fn on_pointer_move(&mut self, p: Point2) -> EventResponse {
        self.handle(PointerEvent::Move(p))
    }

    pub fn on_pointer_up(&mut self, p: Point2) -> EventResponse {
        self.handle(PointerEvent::Up(p))
    }

    /// 以画布像素坐标输入事件
    pub fn handle_pixels(&mut self, event: PointerEvent) -> EventResponse {
        let p = event.position();
        let ndc = self.config.viewport.to_ndc(p.x, p.y);
        self.handle(match event {
            PointerEvent::Down(_) => PointerEvent::Down(ndc),
            PointerEvent::Move(_) => PointerEvent::Move(ndc),
            PointerEvent::Up(_) => PointerEvent::Up(ndc),
        })
    }

    pub fn handle(&mut self, event: PointerEvent) -> EventResponse {
        let from = self.phase.kind();
        let Transition { phase, response } = std::mem::take(&mut self.phase).step(event, &self.solver);
        self.phase = phase;

        if !response.is_applied() {
            debug!(phase = ?from, ?event, "event ignored");
            return response;
        }

        let to = self.phase.kind();
        if from != to {
            debug!(?from, ?to, "phase transition");
        }

        match (&self.phase, response) {
            (InputPhase::AwaitingLineStart { circle }, EventResponse::CircleFinalized) => {
                self.status.circle = circle_status(circle);
                info!("{}", self.status.circle);
            }
            (
                InputPhase::Done {
                    segment, result, ..
                },
                EventResponse::SegmentFinalized,
            ) => {
                self.status.segment = segment_status(segment);
                self.status.intersection = intersection_status(result);
                info!(length = segment.length(), "{}", self.status.segment);
                info!(tangent = result.is_tangent(), "{}", self.status.intersection);
            }
            _ => {}
        }

        response
    }

    /// 回到初始状态
    pub fn reset(&mut self) {
        debug!(from = ?self.phase.kind(), "reset");
        self.phase = InputPhase::default();
        self.status.clear();
    }

    // ========== 只读访问 ==========

    pub fn phase(&self) -> &InputPhase {
        &self.phase
    }

    pub fn phase_kind(&self) -> PhaseKind {
        self.phase.kind()
    }

    pub fn is_done(&self) -> bool {
        self.phase.kind() == PhaseKind::Done
    }

    pub fn circle(&self) -> Option<&Circle> {
        self.phase.circle()
    }

    pub fn segment(&self) -> Option<Segment> {
        self.phase.segment()
    }

    pub fn result(&self) -> Option<&IntersectionResult> {
        self.phase.result()
    }

    pub fn status(&self) -> &StatusOverlay {
        &self.status
    }

    pub fn prompt(&self) -> &'static str {
        self.phase.kind().prompt()
    }

    /// 生成当前帧的绘制快照
    pub fn frame(&self) -> FrameSnapshot {
        let palette = &self.config.palette;
        let style_of = |is_final: bool| {
            if is_final {
                ShapeStyle::Final
            } else {
                ShapeStyle::Tentative
            }
        };

        let circle = self
            .phase
            .circle()
            .filter(|c| c.radius > 0.0)
            .map(|c| {
                let style = style_of(self.phase.is_circle_final());
                CircleOutline {
                    vertices: c.tessellate(self.config.circle_segments),
                    style,
                    color: palette.circle(style),
                }
            });

        let segment = self.phase.segment().map(|s| {
            let style = style_of(self.is_done());
            SegmentStroke {
                vertices: [s.start, s.end],
                style,
                color: palette.segment(style),
            }
        });

        let intersections = self
            .phase
            .result()
            .filter(|r| !r.is_empty())
            .map(|r| PointMarkers {
                points: r.points().collect(),
                color: palette.intersection,
            });

        FrameSnapshot {
            circle,
            segment,
            intersections,
            status: self.status.clone(),
        }
    }
}
