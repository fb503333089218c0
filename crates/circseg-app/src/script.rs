//! 指针事件脚本
//!
//! ```json
//! {
//!   "space": "pixels",
//!   "events": [
//!     { "kind": "down", "x": 350, "y": 350 },
//!     { "kind": "move", "x": 525, "y": 350 },
//!     { "kind": "up",   "x": 525, "y": 350 },
//!     { "kind": "reset" }
//!   ]
//! }
//! ```

use crate::error::AppError;
use circseg_core::math::Point2;
use circseg_ui::{PointerEvent, ShapeInputEngine};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// 脚本坐标空间
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateSpace {
    /// 归一化设备坐标
    #[default]
    Ndc,
    /// 画布像素坐标，按配置的视口转换
    Pixels,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Down,
    Move,
    Up,
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScriptEvent {
    pub kind: EventKind,
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
}

impl ScriptEvent {
    fn at(kind: EventKind, x: f64, y: f64) -> Self {
        Self {
            kind,
            x: Some(x),
            y: Some(y),
        }
    }

    /// 按事件类型解析，只有 `reset` 不需要坐标
    fn action(&self, index: usize) -> Result<ScriptAction, AppError> {
        let make: fn(Point2) -> PointerEvent = match self.kind {
            EventKind::Down => PointerEvent::Down,
            EventKind::Move => PointerEvent::Move,
            EventKind::Up => PointerEvent::Up,
            EventKind::Reset => return Ok(ScriptAction::Reset),
        };
        match (self.x, self.y) {
            (Some(x), Some(y)) => Ok(ScriptAction::Pointer(make(Point2::new(x, y)))),
            _ => Err(AppError::MissingCoordinate {
                index,
                kind: self.kind,
            }),
        }
    }
}

enum ScriptAction {
    Pointer(PointerEvent),
    Reset,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub space: CoordinateSpace,
    pub events: Vec<ScriptEvent>,
}

/// 回放统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub applied: usize,
    pub ignored: usize,
    pub redraws: usize,
    pub resets: usize,
}

impl Script {
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let script: Script = serde_json::from_str(json)?;
        script.validate()?;
        Ok(script)
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let script = Self::from_json(&std::fs::read_to_string(path)?)?;
        info!(
            "Loaded {} events from: {}",
            script.events.len(),
            path.display()
        );
        Ok(script)
    }

    /// 内置演示：半径 0.5 的圆与一条横穿的线段
    pub fn demo() -> Self {
        use EventKind::*;
        Self {
            space: CoordinateSpace::Ndc,
            events: vec![
                ScriptEvent::at(Down, 0.0, 0.0),
                ScriptEvent::at(Move, 0.25, 0.0),
                ScriptEvent::at(Move, 0.5, 0.0),
                ScriptEvent::at(Up, 0.5, 0.0),
                ScriptEvent::at(Down, -0.8, 0.1),
                ScriptEvent::at(Move, 0.0, 0.1),
                ScriptEvent::at(Move, 0.8, 0.1),
                ScriptEvent::at(Up, 0.8, 0.1),
            ],
        }
    }

    fn actions(&self) -> Result<Vec<ScriptAction>, AppError> {
        self.events
            .iter()
            .enumerate()
            .map(|(index, event)| event.action(index))
            .collect()
    }

    fn validate(&self) -> Result<(), AppError> {
        self.actions().map(|_| ())
    }

    /// 依次送入引擎，脚本无效时不触碰引擎
    pub fn replay(&self, engine: &mut ShapeInputEngine) -> Result<ReplaySummary, AppError> {
        let actions = self.actions()?;
        let mut summary = ReplaySummary::default();

        for action in actions {
            let pointer = match action {
                ScriptAction::Pointer(pointer) => pointer,
                ScriptAction::Reset => {
                    engine.reset();
                    summary.resets += 1;
                    continue;
                }
            };

            let response = match self.space {
                CoordinateSpace::Ndc => engine.handle(pointer),
                CoordinateSpace::Pixels => engine.handle_pixels(pointer),
            };
            debug!(?pointer, ?response, "replayed");

            if response.is_applied() {
                summary.applied += 1;
            } else {
                summary.ignored += 1;
            }
            if response.needs_redraw() {
                summary.redraws += 1;
            }
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use circseg_ui::PhaseKind;

    #[test]
    fn test_demo_replay() {
        let mut engine = ShapeInputEngine::default();
        let summary = Script::demo().replay(&mut engine).unwrap();

        assert!(engine.is_done());
        assert_eq!(summary.applied, 8);
        assert_eq!(summary.ignored, 0);
        assert_eq!(summary.redraws, 6);
        assert_eq!(
            engine.status().lines(),
            [
                "Circle: center (0.00, 0.00) radius = 0.50",
                "Line segment: (-0.80, 0.10) ~ (0.80, 0.10)",
                "Intersection Points: 2 Point 1: (0.49, 0.10) Point 2: (-0.49, 0.10)",
            ]
        );
    }

    #[test]
    fn test_pixel_script() {
        let script = Script::from_json(
            r#"{
                "space": "pixels",
                "events": [
                    { "kind": "down", "x": 350, "y": 350 },
                    { "kind": "move", "x": 525, "y": 350 },
                    { "kind": "up", "x": 525, "y": 350 }
                ]
            }"#,
        )
        .unwrap();

        let mut engine = ShapeInputEngine::default();
        script.replay(&mut engine).unwrap();
        assert_eq!(engine.phase_kind(), PhaseKind::AwaitingLineStart);
        assert_eq!(
            engine.status().circle,
            "Circle: center (0.00, 0.00) radius = 0.50"
        );
    }

    #[test]
    fn test_reset_event() {
        let script = Script::from_json(
            r#"{
                "events": [
                    { "kind": "down", "x": 0.1, "y": 0.1 },
                    { "kind": "up", "x": 0.1, "y": 0.1 },
                    { "kind": "reset" },
                    { "kind": "up", "x": 0.1, "y": 0.1 }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(script.space, CoordinateSpace::Ndc);

        let mut engine = ShapeInputEngine::default();
        let summary = script.replay(&mut engine).unwrap();
        assert_eq!(summary.resets, 1);
        assert_eq!(summary.ignored, 1);
        assert_eq!(engine.phase_kind(), PhaseKind::AwaitingCircleStart);
    }

    #[test]
    fn test_missing_coordinate() {
        let err = Script::from_json(r#"{ "events": [ { "kind": "move", "x": 0.5 } ] }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::MissingCoordinate {
                index: 0,
                kind: EventKind::Move
            }
        ));
    }

    #[test]
    fn test_replay_rejects_pointer_event_without_coordinates() {
        let script = Script {
            space: CoordinateSpace::Ndc,
            events: vec![
                ScriptEvent::at(EventKind::Down, 0.0, 0.0),
                ScriptEvent {
                    kind: EventKind::Up,
                    x: None,
                    y: Some(0.0),
                },
            ],
        };

        let mut engine = ShapeInputEngine::default();
        engine.on_pointer_down(Point2::new(0.3, 0.3));
        engine.on_pointer_move(Point2::new(0.6, 0.3));

        let err = script.replay(&mut engine).unwrap_err();
        assert!(matches!(
            err,
            AppError::MissingCoordinate {
                index: 1,
                kind: EventKind::Up
            }
        ));
        // 没有被当作 reset，引擎保持原状
        assert_eq!(engine.phase_kind(), PhaseKind::DraggingCircle);
        assert!(engine.circle().is_some());
    }

    #[test]
    fn test_reset_ignores_stray_coordinates() {
        let script = Script {
            space: CoordinateSpace::Ndc,
            events: vec![
                ScriptEvent::at(EventKind::Down, 0.0, 0.0),
                ScriptEvent::at(EventKind::Reset, 0.4, 0.4),
            ],
        };

        let mut engine = ShapeInputEngine::default();
        let summary = script.replay(&mut engine).unwrap();
        assert_eq!(summary.applied, 1);
        assert_eq!(summary.resets, 1);
        assert_eq!(engine.phase_kind(), PhaseKind::AwaitingCircleStart);
    }
}
