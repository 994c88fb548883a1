//! Drag-to-resize through a frame overlay
//!
//! On pointer-down the frame becomes a copy of the window, pivoted on the
//! corner opposite the dragged edges so it grows away from that corner.
//! Drags resize only the frame; pointer-up commits the frame onto the window.

use macroquad::logging::{debug, info, warn};
use macroquad::math::Vec2;
use serde::{Deserialize, Serialize};
use crate::layout::{set_pivot_keeping_position, Axis, RectTransform};
use crate::ui::{PointerHandler, Rect};
use super::{safe_scale, ControllerError, NoOverlay, Overlay};

/// Minimum frame size used when none is configured
pub const DEFAULT_MIN_FRAME_SIZE: Vec2 = Vec2::new(300.0, 400.0);

/// Horizontal edge being dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HorizontalEdge {
    /// Width is locked
    None,
    #[default]
    Left,
    Right,
}

/// Vertical edge being dragged (y-up: Top is the max-y edge)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VerticalEdge {
    /// Height is locked
    None,
    Top,
    #[default]
    Bottom,
}

/// Which edge or corner a resize gesture drags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResizeHandle {
    pub horizontal: HorizontalEdge,
    pub vertical: VerticalEdge,
}

impl ResizeHandle {
    pub const fn new(horizontal: HorizontalEdge, vertical: VerticalEdge) -> Self {
        Self { horizontal, vertical }
    }

    /// Neither axis can change
    pub fn is_locked(&self) -> bool {
        self.horizontal == HorizontalEdge::None && self.vertical == VerticalEdge::None
    }

    /// Pivot of the corner that stays fixed while resizing
    pub fn anchor_pivot(&self) -> Vec2 {
        Vec2::new(
            if self.horizontal == HorizontalEdge::Right { 0.0 } else { 1.0 },
            if self.vertical == VerticalEdge::Top { 0.0 } else { 1.0 },
        )
    }

    /// Per-axis sign turning "pointer moved toward min" into growth
    fn growth_sign(&self) -> Vec2 {
        Vec2::new(
            if self.horizontal == HorizontalEdge::Right { -1.0 } else { 1.0 },
            if self.vertical == VerticalEdge::Top { -1.0 } else { 1.0 },
        )
    }

    /// Grab area on `window` (world bounds): a strip along each dragged edge,
    /// a square where two dragged edges meet
    pub fn hit_rect(&self, window: Rect, thickness: f32) -> Rect {
        let half = thickness * 0.5;
        let (min, max) = (window.min(), window.max());
        let (x0, x1) = match self.horizontal {
            HorizontalEdge::None => (min.x + half, max.x - half),
            HorizontalEdge::Left => (min.x - half, min.x + half),
            HorizontalEdge::Right => (max.x - half, max.x + half),
        };
        let (y0, y1) = match self.vertical {
            VerticalEdge::None => (min.y + half, max.y - half),
            VerticalEdge::Bottom => (min.y - half, min.y + half),
            VerticalEdge::Top => (max.y - half, max.y + half),
        };
        Rect::from_min_max(Vec2::new(x0, y0), Vec2::new(x1.max(x0), y1.max(y0)))
    }
}

#[derive(Debug, Clone, Copy)]
struct ResizeSession {
    start_touch: Vec2,
    start_frame_size: Vec2,
    max_frame_size: Vec2,
    last_touch: Vec2,
}

/// Resizes `window` by dragging one of its edges or corners, bounded by
/// `min_frame_size` and the containment `area`
pub struct ResizeController<W, A, F, B = NoOverlay> {
    window: W,
    area: A,
    frame: F,
    click_blocker: Option<B>,
    handle: ResizeHandle,
    min_frame_size: Vec2,
    session: Option<ResizeSession>,
}

impl<W, A, F> ResizeController<W, A, F, NoOverlay>
where
    W: RectTransform,
    A: RectTransform,
    F: RectTransform + Overlay,
{
    pub fn new(
        window: W,
        area: A,
        mut frame: F,
        handle: ResizeHandle,
        min_frame_size: Vec2,
    ) -> Result<Self, ControllerError> {
        if !min_frame_size.is_finite() || min_frame_size.x < 0.0 || min_frame_size.y < 0.0 {
            return Err(ControllerError::InvalidMinSize(min_frame_size));
        }
        if handle.is_locked() {
            return Err(ControllerError::NoResizeAxis);
        }
        frame.set_active(false);
        Ok(Self {
            window,
            area,
            frame,
            click_blocker: None,
            handle,
            min_frame_size,
            session: None,
        })
    }
}

impl<W, A, F, B> ResizeController<W, A, F, B>
where
    W: RectTransform,
    A: RectTransform,
    F: RectTransform + Overlay,
    B: Overlay,
{
    /// Attach an overlay shown for the duration of each gesture. It starts hidden.
    pub fn with_click_blocker<C: Overlay>(self, mut blocker: C) -> ResizeController<W, A, F, C> {
        blocker.set_active(false);
        ResizeController {
            window: self.window,
            area: self.area,
            frame: self.frame,
            click_blocker: Some(blocker),
            handle: self.handle,
            min_frame_size: self.min_frame_size,
            session: self.session,
        }
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    pub fn frame(&self) -> &F {
        &self.frame
    }

    /// Upper size bound of the active gesture
    pub fn max_frame_size(&self) -> Option<Vec2> {
        self.session.map(|s| s.max_frame_size)
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Fill the containment area, keeping the window's pivot
    pub fn set_max_window(&mut self) {
        let pivot = self.window.pivot();
        let area = self.area.world_rect();
        self.window.set_pivot(Vec2::splat(0.5));
        self.window.set_size(area.size() / safe_scale(self.window.lossy_scale()));
        self.window.set_position(area.center());
        set_pivot_keeping_position(&mut self.window, pivot);
        info!("window maximized to {:?}", area);
    }

    /// Room between the frame's fixed corner and the far area edge, in
    /// frame units
    fn measure_max_frame_size(&self) -> Vec2 {
        let fixed = self.frame.position();
        let area = self.area.world_rect();
        let room = Vec2::new(
            match self.handle.horizontal {
                HorizontalEdge::Right => area.max().x - fixed.x,
                _ => fixed.x - area.min().x,
            },
            match self.handle.vertical {
                VerticalEdge::Top => area.max().y - fixed.y,
                _ => fixed.y - area.min().y,
            },
        );
        (room / safe_scale(self.frame.lossy_scale())).max(Vec2::ZERO)
    }

    pub fn on_pointer_down(&mut self, pos: Vec2) {
        self.frame.set_anchor_min(self.window.anchor_min());
        self.frame.set_anchor_max(self.window.anchor_max());
        self.frame.set_pivot(self.window.pivot());
        self.frame.set_size(self.window.size());
        self.frame.set_position(self.window.position());
        set_pivot_keeping_position(&mut self.frame, self.handle.anchor_pivot());

        let start_frame_size = self.frame.size();
        let max_frame_size = self.measure_max_frame_size();
        self.session = Some(ResizeSession {
            start_touch: pos,
            start_frame_size,
            max_frame_size,
            last_touch: pos,
        });

        if let Some(blocker) = self.click_blocker.as_mut() {
            blocker.set_active(true);
        }
        self.frame.set_active(true);
        debug!(
            "resize {:?} start at {:?}, size {:?} max {:?}",
            self.handle, pos, start_frame_size, max_frame_size
        );
    }

    /// Re-derive the size limit after the area was laid out again
    /// mid-gesture, keeping the preview's progress
    pub fn remeasure(&mut self) {
        let Some(session) = self.session else {
            return;
        };
        let max_frame_size = self.measure_max_frame_size();
        self.session = Some(ResizeSession { max_frame_size, ..session });
        self.on_drag(session.last_touch);
        debug!("resize {:?} max remeasured to {:?}", self.handle, max_frame_size);
    }

    pub fn on_drag(&mut self, pos: Vec2) {
        let Some(session) = self.session.as_mut() else {
            warn!("resize drag at {:?} without pointer-down, ignored", pos);
            return;
        };
        session.last_touch = pos;
        let session = *session;

        let diff = (session.start_touch - pos) / safe_scale(self.frame.lossy_scale()) * self.handle.growth_sign();
        // Min bound first, then max: the area limit wins over the minimum
        let size = (session.start_frame_size + diff)
            .max(self.min_frame_size)
            .min(session.max_frame_size);

        if self.handle.horizontal != HorizontalEdge::None {
            self.frame.set_size_with_current_anchors(Axis::Horizontal, size.x);
        }
        if self.handle.vertical != VerticalEdge::None {
            self.frame.set_size_with_current_anchors(Axis::Vertical, size.y);
        }
    }

    pub fn on_pointer_up(&mut self, _pos: Vec2) {
        if self.session.take().is_some() {
            set_pivot_keeping_position(&mut self.frame, self.window.pivot());
            self.window.set_size(self.frame.size());
            self.window.set_position(self.frame.position());
            debug!("resize end, window size {:?}", self.window.size());
        }

        if let Some(blocker) = self.click_blocker.as_mut() {
            blocker.set_active(false);
        }
        self.frame.set_active(false);
    }
}

impl<W, A, F, B> PointerHandler for ResizeController<W, A, F, B>
where
    W: RectTransform,
    A: RectTransform,
    F: RectTransform + Overlay,
    B: Overlay,
{
    fn on_pointer_down(&mut self, pos: Vec2) {
        ResizeController::on_pointer_down(self, pos)
    }

    fn on_drag(&mut self, pos: Vec2) {
        ResizeController::on_drag(self, pos)
    }

    fn on_pointer_up(&mut self, pos: Vec2) {
        ResizeController::on_pointer_up(self, pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{shared, LayoutRect, ParentSpace};

    fn assert_vec(a: Vec2, b: Vec2) {
        assert!((a - b).length() < 0.001, "{:?} != {:?}", a, b);
    }

    fn area(scale: f32) -> LayoutRect {
        let canvas = ParentSpace::new(Vec2::ZERO, Vec2::new(800.0, 600.0), Vec2::splat(scale));
        LayoutRect::stretched(canvas)
    }

    fn window_in(area: &LayoutRect, size: Vec2, at: Vec2) -> LayoutRect {
        LayoutRect::new(area.child_space())
            .with_anchors(Vec2::ZERO, Vec2::ZERO)
            .with_pivot(Vec2::ZERO)
            .with_size(size)
            .with_anchored_position(at)
    }

    fn frame_in(area: &LayoutRect) -> LayoutRect {
        LayoutRect::new(area.child_space())
    }

    const ALL_HORIZONTAL: [HorizontalEdge; 3] = [HorizontalEdge::None, HorizontalEdge::Left, HorizontalEdge::Right];
    const ALL_VERTICAL: [VerticalEdge; 3] = [VerticalEdge::None, VerticalEdge::Top, VerticalEdge::Bottom];

    #[test]
    fn test_shrink_clamps_to_min_width() {
        let area = area(1.0);
        let window = window_in(&area, Vec2::new(500.0, 500.0), Vec2::new(100.0, 50.0));
        let frame = frame_in(&area);
        let handle = ResizeHandle::new(HorizontalEdge::Left, VerticalEdge::Bottom);
        let mut resizer = ResizeController::new(window, area, frame, handle, Vec2::new(300.0, 400.0)).unwrap();

        resizer.on_pointer_down(Vec2::new(100.0, 300.0));
        // Left edge pulled 250 right, bottom edge pulled 50 down
        resizer.on_drag(Vec2::new(350.0, 250.0));

        assert_vec(resizer.frame().size(), Vec2::new(300.0, 550.0));
        // Window untouched until release
        assert_vec(resizer.window().size(), Vec2::new(500.0, 500.0));

        resizer.on_pointer_up(Vec2::new(350.0, 250.0));

        let rect = resizer.window().world_rect();
        assert_vec(rect.min(), Vec2::new(300.0, 0.0));
        assert_vec(rect.max(), Vec2::new(600.0, 550.0));
        assert_vec(resizer.window().pivot(), Vec2::ZERO);
    }

    #[test]
    fn test_top_right_grows_away_from_bottom_left() {
        let area = area(1.0);
        let window = window_in(&area, Vec2::new(200.0, 200.0), Vec2::new(100.0, 100.0));
        let handle = ResizeHandle::new(HorizontalEdge::Right, VerticalEdge::Top);
        let mut resizer = ResizeController::new(window, area.clone(), frame_in(&area), handle, Vec2::new(50.0, 50.0)).unwrap();

        resizer.on_pointer_down(Vec2::new(300.0, 300.0));
        assert_vec(resizer.max_frame_size().unwrap(), Vec2::new(700.0, 500.0));

        resizer.on_drag(Vec2::new(450.0, 350.0));
        assert_vec(resizer.frame().size(), Vec2::new(350.0, 250.0));

        resizer.on_drag(Vec2::new(5000.0, 5000.0));
        resizer.on_pointer_up(Vec2::new(5000.0, 5000.0));

        let rect = resizer.window().world_rect();
        assert_vec(rect.min(), Vec2::new(100.0, 100.0));
        assert_vec(rect.max(), Vec2::new(800.0, 600.0));
    }

    #[test]
    fn test_every_handle_respects_bounds() {
        let min = Vec2::new(100.0, 100.0);
        let start = Vec2::new(400.0, 300.0);
        let deltas = [-1000.0, -120.0, -10.0, 0.0, 10.0, 120.0, 1000.0];

        for horizontal in ALL_HORIZONTAL {
            for vertical in ALL_VERTICAL {
                let handle = ResizeHandle::new(horizontal, vertical);
                if handle.is_locked() {
                    continue;
                }
                let area = area(1.0);
                let bounds = area.world_rect();
                let window = window_in(&area, start, Vec2::new(200.0, 150.0));
                let mut resizer = ResizeController::new(window, area.clone(), frame_in(&area), handle, min).unwrap();

                let down = Vec2::new(400.0, 300.0);
                resizer.on_pointer_down(down);
                let max = resizer.max_frame_size().unwrap();

                for dx in deltas {
                    for dy in deltas {
                        resizer.on_drag(down + Vec2::new(dx, dy));
                        let size = resizer.frame().size();
                        if horizontal == HorizontalEdge::None {
                            assert!((size.x - start.x).abs() < 0.001, "{:?} changed locked width", handle);
                        } else {
                            assert!(size.x >= min.x - 0.001 && size.x <= max.x + 0.001, "{:?} width {}", handle, size.x);
                        }
                        if vertical == VerticalEdge::None {
                            assert!((size.y - start.y).abs() < 0.001, "{:?} changed locked height", handle);
                        } else {
                            assert!(size.y >= min.y - 0.001 && size.y <= max.y + 0.001, "{:?} height {}", handle, size.y);
                        }
                        assert!(bounds.encloses(&resizer.frame().world_rect()), "{:?} frame left the area", handle);
                    }
                }
            }
        }
    }

    #[test]
    fn test_drag_delta_divided_by_frame_scale() {
        let area = area(2.0);
        let window = window_in(&area, Vec2::new(200.0, 200.0), Vec2::new(100.0, 100.0));
        let handle = ResizeHandle::new(HorizontalEdge::Right, VerticalEdge::None);
        let mut resizer = ResizeController::new(window, area.clone(), frame_in(&area), handle, Vec2::ZERO).unwrap();

        resizer.on_pointer_down(Vec2::new(600.0, 400.0));
        // Max is measured in frame units: (1600 - 200) / 2
        assert!((resizer.max_frame_size().unwrap().x - 700.0).abs() < 0.001);

        resizer.on_drag(Vec2::new(700.0, 0.0));
        assert_vec(resizer.frame().size(), Vec2::new(250.0, 200.0));
    }

    #[test]
    fn test_max_wins_over_min() {
        let area = area(1.0);
        let window = window_in(&area, Vec2::new(200.0, 200.0), Vec2::new(100.0, 100.0));
        let handle = ResizeHandle::new(HorizontalEdge::Right, VerticalEdge::None);
        let mut resizer = ResizeController::new(window, area.clone(), frame_in(&area), handle, Vec2::new(1000.0, 0.0)).unwrap();

        resizer.on_pointer_down(Vec2::new(300.0, 200.0));
        resizer.on_drag(Vec2::new(310.0, 200.0));

        assert!((resizer.frame().size().x - 700.0).abs() < 0.001);
    }

    #[test]
    fn test_remeasure_after_area_shrinks() {
        let area = shared(area(1.0));
        let window = shared(window_in(&area.borrow(), Vec2::new(200.0, 200.0), Vec2::new(100.0, 100.0)));
        let frame = shared(frame_in(&area.borrow()));
        let handle = ResizeHandle::new(HorizontalEdge::Right, VerticalEdge::None);
        let mut resizer = ResizeController::new(window.clone(), area.clone(), frame.clone(), handle, Vec2::new(50.0, 50.0)).unwrap();

        resizer.on_pointer_down(Vec2::new(300.0, 200.0));
        resizer.on_drag(Vec2::new(900.0, 200.0));
        assert!((frame.size().x - 700.0).abs() < 0.001);

        let canvas = ParentSpace::new(Vec2::ZERO, Vec2::new(500.0, 600.0), Vec2::ONE);
        area.borrow_mut().set_parent(canvas);
        let space = area.borrow().child_space();
        window.borrow_mut().set_parent(space);
        frame.borrow_mut().set_parent(space);
        resizer.remeasure();

        assert_vec(resizer.max_frame_size().unwrap(), Vec2::new(400.0, 300.0));
        assert!((frame.size().x - 400.0).abs() < 0.001);
        assert!(area.world_rect().encloses(&frame.world_rect()));

        resizer.on_pointer_up(Vec2::new(900.0, 200.0));
        assert_vec(window.world_rect().max(), Vec2::new(500.0, 300.0));
    }

    #[test]
    fn test_set_max_window_fills_area() {
        let area = area(1.0);
        let bounds = area.world_rect();
        let window = window_in(&area, Vec2::new(200.0, 200.0), Vec2::new(100.0, 100.0))
            .with_pivot(Vec2::new(0.2, 0.7));
        let handle = ResizeHandle::default();
        let mut resizer = ResizeController::new(window, area.clone(), frame_in(&area), handle, DEFAULT_MIN_FRAME_SIZE).unwrap();

        resizer.set_max_window();

        let rect = resizer.window().world_rect();
        assert_vec(rect.min(), bounds.min());
        assert_vec(rect.max(), bounds.max());
        assert_vec(resizer.window().pivot(), Vec2::new(0.2, 0.7));
    }

    #[test]
    fn test_overlays_follow_gesture() {
        let area = area(1.0);
        let window = window_in(&area, Vec2::new(400.0, 450.0), Vec2::new(100.0, 100.0));
        let frame = shared(frame_in(&area));
        let blocker = shared(LayoutRect::stretched(area.child_space()));
        let mut resizer = ResizeController::new(window, area, frame.clone(), ResizeHandle::default(), DEFAULT_MIN_FRAME_SIZE)
            .unwrap()
            .with_click_blocker(blocker.clone());
        assert!(!frame.is_active());
        assert!(!blocker.is_active());

        resizer.on_pointer_down(Vec2::new(100.0, 100.0));
        assert!(frame.is_active());
        assert!(blocker.is_active());
        assert_vec(frame.world_rect().min(), Vec2::new(100.0, 100.0));
        assert_vec(frame.pivot(), Vec2::ONE);

        resizer.on_pointer_up(Vec2::new(100.0, 100.0));
        assert!(!frame.is_active());
        assert!(!blocker.is_active());
        assert_vec(resizer.window().size(), Vec2::new(400.0, 450.0));
    }

    #[test]
    fn test_pointer_up_without_gesture_keeps_window() {
        let area = area(1.0);
        let window = window_in(&area, Vec2::new(400.0, 450.0), Vec2::new(100.0, 100.0));
        let mut resizer = ResizeController::new(window, area.clone(), frame_in(&area), ResizeHandle::default(), DEFAULT_MIN_FRAME_SIZE).unwrap();

        resizer.on_drag(Vec2::new(10.0, 10.0));
        resizer.on_pointer_up(Vec2::new(10.0, 10.0));

        assert_vec(resizer.window().world_rect().min(), Vec2::new(100.0, 100.0));
        assert_vec(resizer.window().size(), Vec2::new(400.0, 450.0));
    }

    #[test]
    fn test_invalid_configuration() {
        let area = area(1.0);
        let window = window_in(&area, Vec2::new(400.0, 450.0), Vec2::ZERO);
        let locked = ResizeHandle::new(HorizontalEdge::None, VerticalEdge::None);

        let err = ResizeController::new(window.clone(), area.clone(), frame_in(&area), locked, DEFAULT_MIN_FRAME_SIZE);
        assert_eq!(err.err(), Some(ControllerError::NoResizeAxis));

        let err = ResizeController::new(window, area.clone(), frame_in(&area), ResizeHandle::default(), Vec2::new(-1.0, 10.0));
        assert!(matches!(err, Err(ControllerError::InvalidMinSize(_))));
    }

    #[test]
    fn test_hit_rects() {
        let window = Rect::new(100.0, 100.0, 200.0, 100.0);
        let corner = ResizeHandle::new(HorizontalEdge::Left, VerticalEdge::Bottom).hit_rect(window, 10.0);
        assert_vec(corner.min(), Vec2::new(95.0, 95.0));
        assert_vec(corner.max(), Vec2::new(105.0, 105.0));

        let top = ResizeHandle::new(HorizontalEdge::None, VerticalEdge::Top).hit_rect(window, 10.0);
        assert_vec(top.min(), Vec2::new(105.0, 195.0));
        assert_vec(top.max(), Vec2::new(295.0, 205.0));
    }
}
