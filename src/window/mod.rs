//! Window gesture controllers
//!
//! - `MoveController`: drag the window around inside a containment area
//! - `ResizeController`: drag an edge or corner to resize, previewed on a
//!   frame overlay and committed on release
//!
//! Both hold only per-gesture session state; the rects they drive are owned
//! by the host and handed in as [`RectTransform`](crate::layout::RectTransform)
//! handles.

mod move_controller;
mod resize_controller;

pub use move_controller::MoveController;
pub use resize_controller::{HorizontalEdge, ResizeController, ResizeHandle, VerticalEdge};

use macroquad::math::Vec2;
use thiserror::Error;

/// Something that can be shown and hidden (click blocker, frame preview)
pub trait Overlay {
    fn set_active(&mut self, active: bool);
    fn is_active(&self) -> bool;
}

/// Stand-in for an absent click blocker
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOverlay;

impl Overlay for NoOverlay {
    fn set_active(&mut self, _active: bool) {}

    fn is_active(&self) -> bool {
        false
    }
}

/// Invalid controller configuration, reported at construction
#[derive(Debug, Error, PartialEq)]
pub enum ControllerError {
    #[error("minimum frame size must be finite and non-negative, got {0:?}")]
    InvalidMinSize(Vec2),
    #[error("resize handle has no active edge on either axis")]
    NoResizeAxis,
}

/// Componentwise divisor that skips degenerate (non-positive) scale axes
fn safe_scale(scale: Vec2) -> Vec2 {
    Vec2::new(
        if scale.x > 0.0 { scale.x } else { 1.0 },
        if scale.y > 0.0 { scale.y } else { 1.0 },
    )
}
