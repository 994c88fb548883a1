//! UI primitives shared by the controllers and the demo host
//!
//! - `Rect`: axis-aligned bounds, hit testing
//! - `PointerDispatcher`: routes pointer-down/drag/up to registered gestures
//! - `theme`: demo colors

mod rect;
mod input;
pub mod theme;

pub use rect::*;
pub use input::*;
