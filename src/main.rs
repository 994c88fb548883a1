//! window-drag demo
//!
//! One window inside a containment area:
//! - drag the title bar to move it
//! - drag an edge or corner to resize it
//! - press M to maximize it
//!
//! Screen space is y-down, the scene is y-up; the pointer and every rect
//! are flipped at this boundary.

use std::path::PathBuf;
use clap::Parser;
use macroquad::logging::{error, info, warn};
use macroquad::prelude::*;
use window_drag::config::{load_config, save_config, SceneConfig};
use window_drag::ui::{theme, MouseState, Rect};
use window_drag::{SceneTarget, WindowScene, VERSION};

#[derive(Parser)]
#[command(name = "window-drag")]
#[command(about = "Draggable, resizable window demo")]
struct Cli {
    /// Scene description (RON)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Write the default scene description to this path and exit
    #[arg(long)]
    write_default: Option<PathBuf>,
}

fn window_conf() -> Conf {
    Conf {
        window_title: format!("window-drag v{}", VERSION),
        window_width: 1280,
        window_height: 720,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

fn scene_config(cli: &Cli) -> SceneConfig {
    let Some(path) = &cli.config else {
        return SceneConfig::default();
    };
    match load_config(path) {
        Ok(config) => config,
        Err(e) => {
            warn!("can't use {}: {}, falling back to the default scene", path.display(), e);
            SceneConfig::default()
        }
    }
}

fn fill(rect: Rect, screen_h: f32, color: Color) {
    let r = rect.flip_y(screen_h);
    draw_rectangle(r.x, r.y, r.w, r.h, color);
}

fn outline(rect: Rect, screen_h: f32, thickness: f32, color: Color) {
    let r = rect.flip_y(screen_h);
    draw_rectangle_lines(r.x, r.y, r.w, r.h, thickness, color);
}

fn draw_scene(scene: &WindowScene, screen_h: f32, pointer: Vec2) {
    let area = scene.area_rect();
    fill(area, screen_h, theme::AREA_COLOR);
    outline(area, screen_h, 1.0, theme::AREA_BORDER);

    let window = scene.window_rect();
    fill(window, screen_h, theme::WINDOW_BG);
    outline(window, screen_h, 1.0, theme::AREA_BORDER);

    let bar = scene.title_bar_rect();
    let bar_color = if scene.is_moving() { theme::TITLE_BAR_ACTIVE } else { theme::TITLE_BAR };
    fill(bar, screen_h, bar_color);
    let bar_screen = bar.flip_y(screen_h);
    draw_text(
        &scene.config().title,
        bar_screen.x + 6.0,
        bar_screen.y + bar_screen.h * 0.5 + theme::FONT_SIZE_HEADER * 0.35,
        theme::FONT_SIZE_HEADER,
        theme::TEXT_COLOR,
    );

    let size = window.size();
    draw_text(
        &format!("{:.0} x {:.0}", size.x, size.y),
        bar_screen.x + 6.0,
        bar_screen.y + bar_screen.h + theme::FONT_SIZE_SMALL + 4.0,
        theme::FONT_SIZE_SMALL,
        theme::TEXT_DIM,
    );

    // Highlight the handle under the pointer, or the one being dragged
    let target = scene.active_target().or_else(|| scene.target_at(pointer));
    if let Some(SceneTarget::Resize(handle)) = target {
        fill(scene.handle_rect(handle), screen_h, theme::HANDLE_HOVER);
    }

    if let Some(blocker) = scene.click_blocker_rect() {
        fill(blocker, screen_h, theme::BLOCKER_TINT);
    }
    if let Some(frame) = scene.frame_rect() {
        outline(frame, screen_h, 2.0, theme::FRAME_COLOR);
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let cli = Cli::parse();

    if let Some(path) = &cli.write_default {
        match save_config(&SceneConfig::default(), path) {
            Ok(()) => info!("wrote default scene to {}", path.display()),
            Err(e) => error!("failed to write {}: {}", path.display(), e),
        }
        return;
    }

    let mut screen = vec2(screen_width(), screen_height());
    let mut scene = match WindowScene::new(scene_config(&cli), screen) {
        Ok(scene) => scene,
        Err(e) => {
            error!("invalid scene: {}", e);
            return;
        }
    };

    loop {
        let current = vec2(screen_width(), screen_height());
        if current != screen {
            screen = current;
            scene.set_screen_size(screen);
        }

        let (mx, my) = mouse_position();
        let mouse = MouseState {
            pos: vec2(mx, screen.y - my),
            left_down: is_mouse_button_down(MouseButton::Left),
            left_pressed: is_mouse_button_pressed(MouseButton::Left),
            left_released: is_mouse_button_released(MouseButton::Left),
        };
        scene.handle_pointer(&mouse);

        if is_key_pressed(KeyCode::M) {
            scene.maximize();
        }

        clear_background(theme::BG_COLOR);
        draw_scene(&scene, screen.y, mouse.pos);
        draw_text(
            "drag title bar: move | drag edge/corner: resize | M: maximize",
            10.0,
            screen.y - 8.0,
            theme::FONT_SIZE_SMALL,
            theme::TEXT_DIM,
        );

        next_frame().await
    }
}
