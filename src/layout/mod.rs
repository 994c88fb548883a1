//! Rectangle transform layer
//!
//! The controllers never touch a concrete engine type. Everything they need
//! from the host's layout tree is expressed by [`RectTransform`]:
//! - size (with the current anchors), size delta
//! - anchored position, pivot, anchor min/max
//! - world position of the pivot and the world (lossy) scale
//!
//! [`LayoutRect`] is the reference implementation used by the demo host and
//! the tests. World space is y-up.

mod pivot;
mod shared;
mod transform;

pub use pivot::set_pivot_keeping_position;
pub use shared::{shared, SharedRect};
pub use transform::{LayoutRect, ParentSpace};

use macroquad::math::Vec2;
use crate::ui::Rect;

/// Layout axis, used when resizing one dimension at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Component index into a `Vec2`
    pub fn index(self) -> usize {
        match self {
            Axis::Horizontal => 0,
            Axis::Vertical => 1,
        }
    }
}

/// Capability set of a host-owned rectangle transform
pub trait RectTransform {
    /// Current rect size in local units
    fn size(&self) -> Vec2;

    /// Resize one axis while keeping the anchors and the pivot point fixed
    fn set_size_with_current_anchors(&mut self, axis: Axis, size: f32);

    /// Size relative to the anchor span (equals `size()` for point anchors)
    fn size_delta(&self) -> Vec2;

    fn anchored_position(&self) -> Vec2;
    fn set_anchored_position(&mut self, position: Vec2);

    /// Normalized origin. Setting it directly moves the rect visually,
    /// see [`set_pivot_keeping_position`] for the compensating version.
    fn pivot(&self) -> Vec2;
    fn set_pivot(&mut self, pivot: Vec2);

    fn anchor_min(&self) -> Vec2;
    fn set_anchor_min(&mut self, anchor: Vec2);
    fn anchor_max(&self) -> Vec2;
    fn set_anchor_max(&mut self, anchor: Vec2);

    /// World position of the pivot
    fn position(&self) -> Vec2;
    fn set_position(&mut self, position: Vec2);

    /// Accumulated world scale
    fn lossy_scale(&self) -> Vec2;

    /// Resize both axes with the current anchors
    fn set_size(&mut self, size: Vec2) {
        self.set_size_with_current_anchors(Axis::Horizontal, size.x);
        self.set_size_with_current_anchors(Axis::Vertical, size.y);
    }

    /// Axis-aligned bounds in world space (x, y is the min corner)
    fn world_rect(&self) -> Rect {
        let world_size = self.size() * self.lossy_scale();
        let min = self.position() - self.pivot() * world_size;
        Rect::new(min.x, min.y, world_size.x, world_size.y)
    }
}
