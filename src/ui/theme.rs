//! UI Theme - Shared colors and sizes for the demo host

use macroquad::prelude::Color;

// =============================================================================
// Base UI Colors
// =============================================================================

/// Dark background color
pub const BG_COLOR: Color = Color::new(0.11, 0.11, 0.13, 1.0);

/// Containment area fill
pub const AREA_COLOR: Color = Color::new(0.15, 0.15, 0.18, 1.0);

/// Containment area outline
pub const AREA_BORDER: Color = Color::new(0.314, 0.314, 0.314, 1.0); // ~80, 80, 80

/// Primary text color
pub const TEXT_COLOR: Color = Color::new(0.8, 0.8, 0.85, 1.0);

/// Dimmed/secondary text
pub const TEXT_DIM: Color = Color::new(0.4, 0.4, 0.45, 1.0);

// =============================================================================
// Window Colors
// =============================================================================

/// Window body
pub const WINDOW_BG: Color = Color::new(0.176, 0.176, 0.196, 1.0); // ~45, 45, 50

/// Window title bar
pub const TITLE_BAR: Color = Color::new(0.196, 0.196, 0.235, 1.0); // ~50, 50, 60

/// Title bar while being dragged
pub const TITLE_BAR_ACTIVE: Color = Color::new(0.235, 0.314, 0.392, 1.0); // ~60, 80, 100

/// Resize handle highlight
pub const HANDLE_HOVER: Color = Color::new(0.39, 0.59, 1.0, 1.0); // ~100, 150, 255

/// Frame preview outline during resize
pub const FRAME_COLOR: Color = Color::new(0.3, 0.5, 0.8, 0.8);

/// Click blocker tint
pub const BLOCKER_TINT: Color = Color::new(0.0, 0.0, 0.0, 0.25);

// =============================================================================
// Font Sizes
// =============================================================================

/// Title text size
pub const FONT_SIZE_HEADER: f32 = 16.0;

/// Status line text size
pub const FONT_SIZE_SMALL: f32 = 12.0;
