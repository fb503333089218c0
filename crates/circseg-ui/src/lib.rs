//! circseg 交互层
//!
//! 把指针按下/移动/松开事件串行化为两阶段输入：先画圆，再画线段，
//! 线段确定后立即求交。与具体 UI 框架无关，渲染端每帧拉取一次快照。

pub mod config;
pub mod engine;
pub mod frame;
pub mod phase;
pub mod status;
pub mod viewport;

pub use config::EngineConfig;
pub use engine::ShapeInputEngine;
pub use frame::{FrameSnapshot, Palette, ShapeStyle};
pub use phase::{EventResponse, InputPhase, PhaseKind, PointerEvent, Transition};
pub use status::StatusOverlay;
pub use viewport::Viewport;
