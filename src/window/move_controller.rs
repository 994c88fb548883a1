//! Drag-to-move, clamped to a containment area

use macroquad::logging::{debug, warn};
use macroquad::math::Vec2;
use crate::layout::{set_pivot_keeping_position, RectTransform};
use crate::ui::PointerHandler;
use super::{NoOverlay, Overlay};

/// Per-gesture state, valid from pointer-down to pointer-up
#[derive(Debug, Clone, Copy)]
struct MoveSession {
    start_touch: Vec2,
    start_window_position: Vec2,
    /// Latest pointer position, unclamped
    last_touch: Vec2,
    /// Pointer range that keeps the window inside the area
    min_touch: Vec2,
    max_touch: Vec2,
}

/// Moves `window` by pointer drags without letting it leave `area`
pub struct MoveController<W, A, B = NoOverlay> {
    window: W,
    area: A,
    click_blocker: Option<B>,
    session: Option<MoveSession>,
}

impl<W: RectTransform, A: RectTransform> MoveController<W, A, NoOverlay> {
    pub fn new(window: W, area: A) -> Self {
        Self {
            window,
            area,
            click_blocker: None,
            session: None,
        }
    }
}

impl<W: RectTransform, A: RectTransform, B: Overlay> MoveController<W, A, B> {
    /// Attach an overlay shown for the duration of each gesture. It starts hidden.
    pub fn with_click_blocker<C: Overlay>(self, mut blocker: C) -> MoveController<W, A, C> {
        blocker.set_active(false);
        MoveController {
            window: self.window,
            area: self.area,
            click_blocker: Some(blocker),
            session: self.session,
        }
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Legal pointer range of the active gesture, as (min, max)
    pub fn touch_range(&self) -> Option<(Vec2, Vec2)> {
        self.session.map(|s| (s.min_touch, s.max_touch))
    }

    /// Pointer range for a gesture touching at `pos`, against the current layout
    fn measure(&mut self, pos: Vec2) -> MoveSession {
        // Measure from the far corner: with pivot (1, 1) the window position
        // is its max corner
        let pivot = self.window.pivot();
        set_pivot_keeping_position(&mut self.window, Vec2::ONE);
        let far_corner = self.window.position();
        let world_size = self.window.size() * self.window.lossy_scale();
        set_pivot_keeping_position(&mut self.window, pivot);

        let area = self.area.world_rect();
        let near_corner = far_corner - world_size;
        MoveSession {
            start_touch: pos,
            start_window_position: self.window.position(),
            last_touch: pos,
            min_touch: pos - (near_corner - area.min()),
            max_touch: pos + (area.max() - far_corner),
        }
    }

    pub fn on_pointer_down(&mut self, pos: Vec2) {
        let session = self.measure(pos);
        self.session = Some(session);

        if let Some(blocker) = self.click_blocker.as_mut() {
            blocker.set_active(true);
        }
        debug!("move start at {:?}, pointer range {:?}..{:?}", pos, session.min_touch, session.max_touch);
    }

    /// Re-derive the pointer range after the window or area was laid out
    /// again mid-gesture, and pull the window back inside the area
    pub fn remeasure(&mut self) {
        let Some(session) = self.session else {
            return;
        };
        let touch = session.last_touch;
        self.session = Some(self.measure(touch));
        self.on_drag(touch);
        debug!("move range remeasured at {:?}", touch);
    }

    pub fn on_drag(&mut self, pos: Vec2) {
        let Some(session) = self.session.as_mut() else {
            warn!("move drag at {:?} without pointer-down, ignored", pos);
            return;
        };
        session.last_touch = pos;

        // Min bound first, then max: if the window is larger than the area
        // the max bound wins
        let clamped = pos.max(session.min_touch).min(session.max_touch);
        let diff = clamped - session.start_touch;
        self.window.set_position(session.start_window_position + diff);
    }

    pub fn on_pointer_up(&mut self, _pos: Vec2) {
        if let Some(blocker) = self.click_blocker.as_mut() {
            blocker.set_active(false);
        }
        if self.session.take().is_some() {
            debug!("move end at {:?}", self.window.position());
        }
    }
}

impl<W: RectTransform, A: RectTransform, B: Overlay> PointerHandler for MoveController<W, A, B> {
    fn on_pointer_down(&mut self, pos: Vec2) {
        MoveController::on_pointer_down(self, pos)
    }

    fn on_drag(&mut self, pos: Vec2) {
        MoveController::on_drag(self, pos)
    }

    fn on_pointer_up(&mut self, pos: Vec2) {
        MoveController::on_pointer_up(self, pos)
    }
}
