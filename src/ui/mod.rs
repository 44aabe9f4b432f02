//! Terminal rendering: scene onto a half-block canvas, text HUD around it.

pub mod hud;
pub mod pixel_canvas;
pub mod scene;
pub mod surface;

pub use pixel_canvas::PixelCanvas;
pub use surface::{Glow, Gradient, Paint, Surface};

use crate::core::color::Rgb;
use crate::core::session::Session;
use ratatui::{layout::Rect, Frame};

const INFO_PANEL_WIDTH: u16 = 18;

/// Largest rect inside `area` whose half-block pixel grid keeps the world's
/// aspect ratio, centered. Each cell is one pixel wide and two tall.
pub fn fit_play_area(area: Rect, world_width: f64, world_height: f64) -> Rect {
    if area.width == 0 || area.height == 0 || world_width <= 0.0 || world_height <= 0.0 {
        return Rect::new(area.x, area.y, 0, 0);
    }
    let aspect = world_width / world_height;
    let max_px_h = area.height as f64 * 2.0;

    let cols = (area.width as f64).min((max_px_h * aspect).floor()).max(1.0);
    let rows = ((cols / aspect) / 2.0).round().clamp(1.0, area.height as f64);

    let (cols, rows) = (cols as u16, rows as u16);
    Rect::new(
        area.x + (area.width - cols) / 2,
        area.y + (area.height - rows) / 2,
        cols,
        rows,
    )
}

/// Draw one full frame: border layout, scene, overlays, status bar, info.
pub fn draw_ui(frame: &mut Frame, session: &Session, canvas: &mut PixelCanvas) {
    let area = frame.size();
    let layout = hud::create_game_layout(frame, area, INFO_PANEL_WIDTH);
    let config = session.config();

    let play = fit_play_area(layout.content, config.world_width, config.world_height);
    canvas.resize(play.width as usize, play.height as usize * 2);
    canvas.clear(Rgb::BLACK);
    scene::draw_scene(canvas, session.world(), config);
    frame.render_widget(&*canvas, play);

    hud::render_overlays(frame, play, session.score(), session.overlays());

    let (status, color, controls) = hud::status_for(session.phase(), session.score());
    hud::render_status_bar(frame, layout.status_bar, &status, color, controls);
    hud::render_info_panel(frame, layout.info_panel, session.score(), session.overlays());
}
