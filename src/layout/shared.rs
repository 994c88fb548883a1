//! Shared handles to host-owned rects
//!
//! A window is usually driven by several controllers at once (one mover and
//! a resizer per handle) while the host keeps reading it for rendering, so
//! the controllers accept `Rc<RefCell<_>>` handles as rects and overlays.

use std::cell::RefCell;
use std::rc::Rc;
use macroquad::math::Vec2;
use crate::window::Overlay;
use super::{Axis, LayoutRect, RectTransform};

/// Shared handle to a reference rect
pub type SharedRect = Rc<RefCell<LayoutRect>>;

pub fn shared(rect: LayoutRect) -> SharedRect {
    Rc::new(RefCell::new(rect))
}

impl<T: RectTransform> RectTransform for Rc<RefCell<T>> {
    fn size(&self) -> Vec2 {
        self.borrow().size()
    }

    fn set_size_with_current_anchors(&mut self, axis: Axis, size: f32) {
        self.borrow_mut().set_size_with_current_anchors(axis, size)
    }

    fn size_delta(&self) -> Vec2 {
        self.borrow().size_delta()
    }

    fn anchored_position(&self) -> Vec2 {
        self.borrow().anchored_position()
    }

    fn set_anchored_position(&mut self, position: Vec2) {
        self.borrow_mut().set_anchored_position(position)
    }

    fn pivot(&self) -> Vec2 {
        self.borrow().pivot()
    }

    fn set_pivot(&mut self, pivot: Vec2) {
        self.borrow_mut().set_pivot(pivot)
    }

    fn anchor_min(&self) -> Vec2 {
        self.borrow().anchor_min()
    }

    fn set_anchor_min(&mut self, anchor: Vec2) {
        self.borrow_mut().set_anchor_min(anchor)
    }

    fn anchor_max(&self) -> Vec2 {
        self.borrow().anchor_max()
    }

    fn set_anchor_max(&mut self, anchor: Vec2) {
        self.borrow_mut().set_anchor_max(anchor)
    }

    fn position(&self) -> Vec2 {
        self.borrow().position()
    }

    fn set_position(&mut self, position: Vec2) {
        self.borrow_mut().set_position(position)
    }

    fn lossy_scale(&self) -> Vec2 {
        self.borrow().lossy_scale()
    }
}

impl<T: Overlay> Overlay for Rc<RefCell<T>> {
    fn set_active(&mut self, active: bool) {
        self.borrow_mut().set_active(active)
    }

    fn is_active(&self) -> bool {
        self.borrow().is_active()
    }
}
