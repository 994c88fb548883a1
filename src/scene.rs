//! Reference host scene
//!
//! Builds canvas -> containment area -> window from a [`SceneConfig`], wires
//! a move controller to the window's title bar and one resize controller per
//! configured handle, and routes pointer input through a [`PointerDispatcher`].

use std::cell::RefCell;
use std::rc::Rc;
use macroquad::logging::info;
use macroquad::math::Vec2;
use thiserror::Error;
use crate::config::{ConfigError, SceneConfig};
use crate::layout::{shared, LayoutRect, ParentSpace, RectTransform, SharedRect};
use crate::ui::{GestureCallbacks, HandlerId, MouseState, PointerDispatcher, Rect};
use crate::window::{
    ControllerError, HorizontalEdge, MoveController, Overlay, ResizeController, ResizeHandle, VerticalEdge,
};

#[derive(Debug, Error)]
pub enum SceneError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Controller(#[from] ControllerError),
}

type SceneMover = MoveController<SharedRect, SharedRect, SharedRect>;
type SceneResizer = ResizeController<SharedRect, SharedRect, SharedRect, SharedRect>;

/// What a pointer position would grab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneTarget {
    TitleBar,
    Resize(ResizeHandle),
}

struct ResizeBinding {
    id: HandlerId,
    handle: ResizeHandle,
    controller: Rc<RefCell<SceneResizer>>,
}

/// One draggable, resizable window inside a containment area
pub struct WindowScene {
    config: SceneConfig,
    area: SharedRect,
    window: SharedRect,
    frame: SharedRect,
    click_blocker: SharedRect,
    mover_id: HandlerId,
    mover: Rc<RefCell<SceneMover>>,
    resizers: Vec<ResizeBinding>,
    /// Unregistered resizer that only serves `maximize`
    maximizer: ResizeController<SharedRect, SharedRect, SharedRect>,
    dispatcher: PointerDispatcher,
}

/// Title bar strip of a window, in world space
fn title_bar_rect(window: &LayoutRect, height: f32) -> Rect {
    window.world_rect().slice_top(height * window.lossy_scale().y)
}

/// Resize grab area of a window, in world space
fn handle_rect(window: &LayoutRect, handle: ResizeHandle, thickness: f32) -> Rect {
    handle.hit_rect(window.world_rect(), thickness * window.lossy_scale().x)
}

impl WindowScene {
    pub fn new(config: SceneConfig, screen_size: Vec2) -> Result<Self, SceneError> {
        config.validate()?;

        let canvas = ParentSpace::canvas(screen_size, config.canvas_scale);
        let area = shared(config.area.build(canvas));
        let area_space = area.borrow().child_space();
        let window = shared(config.window.build(area_space));
        let frame = shared(LayoutRect::new(area_space));
        let click_blocker = shared(LayoutRect::stretched(canvas));
        let min_frame_size = config.min_frame_size();

        let mut dispatcher = PointerDispatcher::new();

        let mover = Rc::new(RefCell::new(
            MoveController::new(window.clone(), area.clone()).with_click_blocker(click_blocker.clone()),
        ));
        let mover_id = {
            let window = window.clone();
            let height = config.title_bar_height;
            dispatcher.register(
                move |p| title_bar_rect(&window.borrow(), height).contains(p),
                GestureCallbacks::from_handler(mover.clone()),
            )
        };

        // Edges first so the corner squares sit on top of them
        let mut handles = config.handles.clone();
        handles.sort_by_key(|h| {
            h.horizontal != HorizontalEdge::None && h.vertical != VerticalEdge::None
        });

        let mut resizers = Vec::with_capacity(handles.len());
        for handle in handles {
            let controller = Rc::new(RefCell::new(
                ResizeController::new(window.clone(), area.clone(), frame.clone(), handle, min_frame_size)?
                    .with_click_blocker(click_blocker.clone()),
            ));
            let hit_window = window.clone();
            let thickness = config.handle_thickness;
            let id = dispatcher.register(
                move |p| handle_rect(&hit_window.borrow(), handle, thickness).contains(p),
                GestureCallbacks::from_handler(controller.clone()),
            );
            resizers.push(ResizeBinding { id, handle, controller });
        }

        let maximizer = ResizeController::new(
            window.clone(),
            area.clone(),
            shared(LayoutRect::new(area_space)),
            ResizeHandle::default(),
            min_frame_size,
        )?;

        info!(
            "scene ready: area {:?}, window {:?}, {} resize handles",
            area.world_rect(),
            window.world_rect(),
            resizers.len()
        );

        Ok(Self {
            config,
            area,
            window,
            frame,
            click_blocker,
            mover_id,
            mover,
            resizers,
            maximizer,
            dispatcher,
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Feed one frame of pointer input. Returns true if a gesture consumed it.
    pub fn handle_pointer(&mut self, mouse: &MouseState) -> bool {
        self.dispatcher.dispatch(mouse)
    }

    /// Grow the window to the whole containment area
    pub fn maximize(&mut self) {
        self.maximizer.set_max_window();
    }

    /// Re-layout after the host screen changed size. A gesture in progress
    /// keeps going against the new area.
    pub fn set_screen_size(&mut self, screen_size: Vec2) {
        let canvas = ParentSpace::canvas(screen_size, self.config.canvas_scale);
        self.area.borrow_mut().set_parent(canvas);
        let area_space = self.area.borrow().child_space();
        self.window.borrow_mut().set_parent(area_space);
        self.frame.borrow_mut().set_parent(area_space);
        self.click_blocker.borrow_mut().set_parent(canvas);

        self.mover.borrow_mut().remeasure();
        for resizer in &self.resizers {
            resizer.controller.borrow_mut().remeasure();
        }
    }

    /// What a press at `pos` would start
    pub fn target_at(&self, pos: Vec2) -> Option<SceneTarget> {
        let id = self.dispatcher.hit(pos)?;
        self.target_of(id)
    }

    /// Gesture in progress, if any
    pub fn active_target(&self) -> Option<SceneTarget> {
        self.target_of(self.dispatcher.captured()?)
    }

    fn target_of(&self, id: HandlerId) -> Option<SceneTarget> {
        if id == self.mover_id {
            return Some(SceneTarget::TitleBar);
        }
        self.resizers.iter().find(|r| r.id == id).map(|r| SceneTarget::Resize(r.handle))
    }

    pub fn is_moving(&self) -> bool {
        self.mover.borrow().is_dragging()
    }

    pub fn is_resizing(&self) -> bool {
        self.resizers.iter().any(|r| r.controller.borrow().is_dragging())
    }

    pub fn area_rect(&self) -> Rect {
        self.area.world_rect()
    }

    pub fn window_rect(&self) -> Rect {
        self.window.world_rect()
    }

    pub fn title_bar_rect(&self) -> Rect {
        title_bar_rect(&self.window.borrow(), self.config.title_bar_height)
    }

    pub fn handle_rect(&self, handle: ResizeHandle) -> Rect {
        handle_rect(&self.window.borrow(), handle, self.config.handle_thickness)
    }

    /// Resize preview, while visible
    pub fn frame_rect(&self) -> Option<Rect> {
        self.frame.is_active().then(|| self.frame.world_rect())
    }

    pub fn click_blocker_rect(&self) -> Option<Rect> {
        self.click_blocker.is_active().then(|| self.click_blocker.world_rect())
    }
}
