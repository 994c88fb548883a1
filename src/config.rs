//! Scene configuration
//!
//! Uses RON (Rusty Object Notation) for a human-readable description of the
//! demo scene: the containment area, the window, and the resize handles.
//! Every field is optional in the file; missing ones take the defaults.

use std::fs;
use std::path::Path;
use macroquad::logging::info;
use macroquad::math::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::layout::{LayoutRect, ParentSpace};
use crate::window::{HorizontalEdge, ResizeHandle, VerticalEdge};

/// Error type for config loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Serialize error: {0}")]
    Serialize(#[from] ron::Error),
    #[error("Validation error: {0}")]
    Invalid(String),
}

/// Layout values of one rect, relative to its parent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RectConfig {
    pub anchor_min: (f32, f32),
    pub anchor_max: (f32, f32),
    pub pivot: (f32, f32),
    pub anchored_position: (f32, f32),
    /// Size beyond the anchor span (the full size for point anchors)
    pub size_delta: (f32, f32),
}

impl Default for RectConfig {
    fn default() -> Self {
        Self {
            anchor_min: (0.5, 0.5),
            anchor_max: (0.5, 0.5),
            pivot: (0.5, 0.5),
            anchored_position: (0.0, 0.0),
            size_delta: (100.0, 100.0),
        }
    }
}

impl RectConfig {
    pub fn build(&self, parent: ParentSpace) -> LayoutRect {
        let span = parent.size * (vec(self.anchor_max) - vec(self.anchor_min));
        LayoutRect::new(parent)
            .with_anchors(vec(self.anchor_min), vec(self.anchor_max))
            .with_pivot(vec(self.pivot))
            .with_size(span + vec(self.size_delta))
            .with_anchored_position(vec(self.anchored_position))
    }

    fn values(&self) -> [f32; 10] {
        [
            self.anchor_min.0, self.anchor_min.1,
            self.anchor_max.0, self.anchor_max.1,
            self.pivot.0, self.pivot.1,
            self.anchored_position.0, self.anchored_position.1,
            self.size_delta.0, self.size_delta.1,
        ]
    }
}

/// Demo scene description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Canvas units to screen pixels
    pub canvas_scale: f32,
    /// Containment area, child of the canvas
    pub area: RectConfig,
    /// Window, child of the area
    pub window: RectConfig,
    pub title: String,
    pub min_frame_size: (f32, f32),
    pub title_bar_height: f32,
    /// Width of the edge strips and corner squares that start a resize
    pub handle_thickness: f32,
    pub handles: Vec<ResizeHandle>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        use HorizontalEdge as H;
        use VerticalEdge as V;
        Self {
            canvas_scale: 1.0,
            area: RectConfig {
                anchor_min: (0.0, 0.0),
                anchor_max: (1.0, 1.0),
                size_delta: (-40.0, -40.0),
                ..RectConfig::default()
            },
            // Top-left corner of the area, y-up
            window: RectConfig {
                anchor_min: (0.0, 1.0),
                anchor_max: (0.0, 1.0),
                pivot: (0.0, 1.0),
                anchored_position: (40.0, -40.0),
                size_delta: (480.0, 420.0),
            },
            title: String::from("Window"),
            min_frame_size: (300.0, 400.0),
            title_bar_height: 24.0,
            handle_thickness: 10.0,
            handles: vec![
                ResizeHandle::new(H::Left, V::None),
                ResizeHandle::new(H::Right, V::None),
                ResizeHandle::new(H::None, V::Top),
                ResizeHandle::new(H::None, V::Bottom),
                ResizeHandle::new(H::Left, V::Top),
                ResizeHandle::new(H::Right, V::Top),
                ResizeHandle::new(H::Left, V::Bottom),
                ResizeHandle::new(H::Right, V::Bottom),
            ],
        }
    }
}

impl SceneConfig {
    pub fn min_frame_size(&self) -> Vec2 {
        vec(self.min_frame_size)
    }

    /// Reject values the scene can't be built from
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.canvas_scale.is_finite() && self.canvas_scale > 0.0) {
            return Err(ConfigError::Invalid(format!("canvas_scale must be positive, got {}", self.canvas_scale)));
        }
        for (name, rect) in [("area", &self.area), ("window", &self.window)] {
            if rect.values().iter().any(|v| !v.is_finite()) {
                return Err(ConfigError::Invalid(format!("{}: non-finite layout value", name)));
            }
        }
        let min = self.min_frame_size();
        if !min.is_finite() || min.x < 0.0 || min.y < 0.0 {
            return Err(ConfigError::Invalid(format!("min_frame_size must be non-negative, got {:?}", min)));
        }
        if !(self.title_bar_height >= 0.0) {
            return Err(ConfigError::Invalid(format!("title_bar_height must be non-negative, got {}", self.title_bar_height)));
        }
        if !(self.handle_thickness > 0.0) {
            return Err(ConfigError::Invalid(format!("handle_thickness must be positive, got {}", self.handle_thickness)));
        }
        if let Some(i) = self.handles.iter().position(|h| h.is_locked()) {
            return Err(ConfigError::Invalid(format!("handles[{}]: no active edge", i)));
        }
        Ok(())
    }
}

fn vec(v: (f32, f32)) -> Vec2 {
    Vec2::new(v.0, v.1)
}

/// Parse and validate a config from RON text
pub fn parse_config(s: &str) -> Result<SceneConfig, ConfigError> {
    let config: SceneConfig = ron::from_str(s)?;
    config.validate()?;
    Ok(config)
}

/// Load and validate a config file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SceneConfig, ConfigError> {
    let contents = fs::read_to_string(path.as_ref())?;
    let config = parse_config(&contents)?;
    info!("loaded scene config from {}", path.as_ref().display());
    Ok(config)
}

pub fn config_to_string(config: &SceneConfig) -> Result<String, ConfigError> {
    let pretty = ron::ser::PrettyConfig::new()
        .depth_limit(4)
        .indentor("  ".to_string());
    Ok(ron::ser::to_string_pretty(config, pretty)?)
}

pub fn save_config<P: AsRef<Path>>(config: &SceneConfig, path: P) -> Result<(), ConfigError> {
    fs::write(path, config_to_string(config)?)?;
    Ok(())
}
