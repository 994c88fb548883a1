//! Reference rect transform with anchor/pivot semantics

use macroquad::math::Vec2;
use crate::window::Overlay;
use super::{Axis, RectTransform};

/// World-space description of a parent rect, as seen by its children
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParentSpace {
    /// World position of the parent's min corner
    pub origin: Vec2,
    /// Parent size in its own local units
    pub size: Vec2,
    /// World scale applied to the children's local units
    pub scale: Vec2,
}

impl ParentSpace {
    pub fn new(origin: Vec2, size: Vec2, scale: Vec2) -> Self {
        Self { origin, size, scale }
    }

    /// Root canvas covering a screen of `screen_size` pixels at a uniform
    /// scale factor
    pub fn canvas(screen_size: Vec2, scale_factor: f32) -> Self {
        let scale = if scale_factor > 0.0 { scale_factor } else { 1.0 };
        Self::new(Vec2::ZERO, screen_size / scale, Vec2::splat(scale))
    }
}

/// A rect positioned inside a [`ParentSpace`] through anchors and a pivot.
///
/// `size = parent.size * (anchor_max - anchor_min) + size_delta`, and the
/// pivot sits at `anchored_position` from the anchor reference point
/// (the anchor span interpolated by the pivot).
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutRect {
    parent: ParentSpace,
    anchor_min: Vec2,
    anchor_max: Vec2,
    pivot: Vec2,
    anchored_position: Vec2,
    size_delta: Vec2,
    /// Visibility flag (the rect doubles as an overlay)
    active: bool,
}

impl LayoutRect {
    /// Centered 100x100 rect
    pub fn new(parent: ParentSpace) -> Self {
        Self {
            parent,
            anchor_min: Vec2::splat(0.5),
            anchor_max: Vec2::splat(0.5),
            pivot: Vec2::splat(0.5),
            anchored_position: Vec2::ZERO,
            size_delta: Vec2::splat(100.0),
            active: true,
        }
    }

    /// Rect that exactly fills its parent
    pub fn stretched(parent: ParentSpace) -> Self {
        Self {
            anchor_min: Vec2::ZERO,
            anchor_max: Vec2::ONE,
            size_delta: Vec2::ZERO,
            ..Self::new(parent)
        }
    }

    pub fn with_anchors(mut self, min: Vec2, max: Vec2) -> Self {
        self.anchor_min = min;
        self.anchor_max = max;
        self
    }

    pub fn with_pivot(mut self, pivot: Vec2) -> Self {
        self.pivot = pivot;
        self
    }

    pub fn with_anchored_position(mut self, position: Vec2) -> Self {
        self.anchored_position = position;
        self
    }

    /// Set the final size; call after the anchors are in place
    pub fn with_size(mut self, size: Vec2) -> Self {
        self.set_size(size);
        self
    }

    pub fn parent(&self) -> ParentSpace {
        self.parent
    }

    /// Re-parent without touching the local layout values
    pub fn set_parent(&mut self, parent: ParentSpace) {
        self.parent = parent;
    }

    /// Space handed to children of this rect
    pub fn child_space(&self) -> ParentSpace {
        let bounds = self.world_rect();
        ParentSpace::new(bounds.min(), self.size(), self.lossy_scale())
    }

    fn anchor_span(&self) -> Vec2 {
        self.parent.size * (self.anchor_max - self.anchor_min)
    }

    /// Pivot-interpolated anchor point, in parent local units from its min corner
    fn reference_point(&self) -> Vec2 {
        self.parent.size * (self.anchor_min + (self.anchor_max - self.anchor_min) * self.pivot)
    }
}

impl RectTransform for LayoutRect {
    fn size(&self) -> Vec2 {
        self.anchor_span() + self.size_delta
    }

    fn set_size_with_current_anchors(&mut self, axis: Axis, size: f32) {
        let i = axis.index();
        self.size_delta[i] = size - self.anchor_span()[i];
    }

    fn size_delta(&self) -> Vec2 {
        self.size_delta
    }

    fn anchored_position(&self) -> Vec2 {
        self.anchored_position
    }

    fn set_anchored_position(&mut self, position: Vec2) {
        self.anchored_position = position;
    }

    fn pivot(&self) -> Vec2 {
        self.pivot
    }

    fn set_pivot(&mut self, pivot: Vec2) {
        self.pivot = pivot;
    }

    fn anchor_min(&self) -> Vec2 {
        self.anchor_min
    }

    fn set_anchor_min(&mut self, anchor: Vec2) {
        self.anchor_min = anchor;
    }

    fn anchor_max(&self) -> Vec2 {
        self.anchor_max
    }

    fn set_anchor_max(&mut self, anchor: Vec2) {
        self.anchor_max = anchor;
    }

    fn position(&self) -> Vec2 {
        self.parent.origin + (self.reference_point() + self.anchored_position) * self.parent.scale
    }

    fn set_position(&mut self, position: Vec2) {
        let local = position - self.parent.origin;
        let reference = self.reference_point();
        for i in 0..2 {
            // Degenerate parent scale: the axis can't be mapped back
            if self.parent.scale[i] != 0.0 {
                self.anchored_position[i] = local[i] / self.parent.scale[i] - reference[i];
            }
        }
    }

    fn lossy_scale(&self) -> Vec2 {
        self.parent.scale
    }
}

impl Overlay for LayoutRect {
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}
