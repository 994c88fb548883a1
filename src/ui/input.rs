//! Pointer input routing
//!
//! Gesture handlers are registered as a triple of callbacks together with a
//! hit test. The dispatcher turns per-frame mouse snapshots into a strictly
//! ordered pointer-down, drag*, pointer-up sequence for the captured target.

use std::cell::RefCell;
use std::rc::Rc;
use macroquad::logging::debug;
use macroquad::math::Vec2;

/// Mouse button state for one frame, pointer in world (y-up) space
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseState {
    pub pos: Vec2,
    pub left_down: bool,
    pub left_pressed: bool,  // Just pressed this frame
    pub left_released: bool, // Just released this frame
}

impl MouseState {
    pub fn pressed_at(pos: Vec2) -> Self {
        Self { pos, left_down: true, left_pressed: true, left_released: false }
    }

    pub fn held_at(pos: Vec2) -> Self {
        Self { pos, left_down: true, left_pressed: false, left_released: false }
    }

    pub fn released_at(pos: Vec2) -> Self {
        Self { pos, left_down: false, left_pressed: false, left_released: true }
    }
}

/// Receiver of one gesture's pointer events
pub trait PointerHandler {
    fn on_pointer_down(&mut self, pos: Vec2);
    fn on_drag(&mut self, pos: Vec2);
    fn on_pointer_up(&mut self, pos: Vec2);
}

/// The three callbacks of a gesture target
pub struct GestureCallbacks {
    pub on_pointer_down: Box<dyn FnMut(Vec2)>,
    pub on_drag: Box<dyn FnMut(Vec2)>,
    pub on_pointer_up: Box<dyn FnMut(Vec2)>,
}

impl GestureCallbacks {
    pub fn new(
        on_pointer_down: impl FnMut(Vec2) + 'static,
        on_drag: impl FnMut(Vec2) + 'static,
        on_pointer_up: impl FnMut(Vec2) + 'static,
    ) -> Self {
        Self {
            on_pointer_down: Box::new(on_pointer_down),
            on_drag: Box::new(on_drag),
            on_pointer_up: Box::new(on_pointer_up),
        }
    }

    /// Forward all three events to a shared handler
    pub fn from_handler<H: PointerHandler + 'static>(handler: Rc<RefCell<H>>) -> Self {
        let down = Rc::clone(&handler);
        let drag = Rc::clone(&handler);
        Self::new(
            move |pos| down.borrow_mut().on_pointer_down(pos),
            move |pos| drag.borrow_mut().on_drag(pos),
            move |pos| handler.borrow_mut().on_pointer_up(pos),
        )
    }
}

/// Opaque id returned by [`PointerDispatcher::register`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

struct Target {
    id: HandlerId,
    hit_test: Box<dyn Fn(Vec2) -> bool>,
    callbacks: GestureCallbacks,
}

/// Routes pointer events to the registered target under the pointer
pub struct PointerDispatcher {
    targets: Vec<Target>,
    /// Target that received pointer-down and owns the gesture
    captured: Option<HandlerId>,
    last_pos: Vec2,
    id_counter: u64,
}

impl PointerDispatcher {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            captured: None,
            last_pos: Vec2::ZERO,
            id_counter: 0,
        }
    }

    /// Register a target. Later registrations sit on top of earlier ones.
    pub fn register(
        &mut self,
        hit_test: impl Fn(Vec2) -> bool + 'static,
        callbacks: GestureCallbacks,
    ) -> HandlerId {
        self.id_counter += 1;
        let id = HandlerId(self.id_counter);
        self.targets.push(Target { id, hit_test: Box::new(hit_test), callbacks });
        id
    }

    /// Remove a target. A gesture it owned ends without a pointer-up.
    pub fn unregister(&mut self, id: HandlerId) {
        self.targets.retain(|t| t.id != id);
        if self.captured == Some(id) {
            self.captured = None;
        }
    }

    /// Target currently owning a gesture
    pub fn captured(&self) -> Option<HandlerId> {
        self.captured
    }

    /// Topmost target whose hit test accepts `pos`
    pub fn hit(&self, pos: Vec2) -> Option<HandlerId> {
        self.targets.iter().rev().find(|t| (t.hit_test)(pos)).map(|t| t.id)
    }

    /// Feed one frame of mouse state. Returns true if a target consumed it.
    pub fn dispatch(&mut self, mouse: &MouseState) -> bool {
        if let Some(id) = self.captured {
            let Some(target) = self.targets.iter_mut().find(|t| t.id == id) else {
                self.captured = None;
                return false;
            };
            if mouse.left_pressed {
                // Missed release: close the old gesture, then hit-test the press
                (target.callbacks.on_pointer_up)(self.last_pos);
                self.captured = None;
                debug!("press while captured, released target {:?}", id);
                return self.press(mouse);
            }
            if mouse.left_released || !mouse.left_down {
                (target.callbacks.on_pointer_up)(mouse.pos);
                self.captured = None;
                debug!("pointer up, released target {:?}", id);
            } else if mouse.pos != self.last_pos {
                (target.callbacks.on_drag)(mouse.pos);
            }
            self.last_pos = mouse.pos;
            return true;
        }

        if !mouse.left_pressed {
            return false;
        }
        self.press(mouse)
    }

    fn press(&mut self, mouse: &MouseState) -> bool {
        let Some(id) = self.hit(mouse.pos) else {
            return false;
        };
        if let Some(target) = self.targets.iter_mut().find(|t| t.id == id) {
            debug!("pointer down at {:?}, captured target {:?}", mouse.pos, id);
            (target.callbacks.on_pointer_down)(mouse.pos);
            self.captured = Some(id);
            self.last_pos = mouse.pos;
        }
        true
    }
}

impl Default for PointerDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
