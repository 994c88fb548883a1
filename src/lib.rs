//! Draggable and resizable window panels
//!
//! A window is moved by dragging its title bar and resized by dragging an
//! edge or corner. Both gestures keep it inside a containment area:
//! - `window::MoveController` clamps the pointer to the range that keeps the
//!   window inside the area
//! - `window::ResizeController` previews the new size on a frame overlay
//!   pivoted at the opposite corner and commits it on release
//!
//! The controllers only need the `layout::RectTransform` capability set, so
//! any host layout tree can drive them. `layout::LayoutRect`, the
//! `ui::PointerDispatcher` and `scene::WindowScene` form a reference host,
//! used by the macroquad demo binary.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod layout;
pub mod scene;
pub mod ui;
pub mod window;

pub use layout::{set_pivot_keeping_position, LayoutRect, ParentSpace, RectTransform};
pub use scene::{SceneError, SceneTarget, WindowScene};
pub use window::{ControllerError, MoveController, ResizeController, ResizeHandle};
