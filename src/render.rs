use crate::field;
use crate::model::WaveParams;
use crate::pos::Pos;
use crate::rings;
use crate::sources::SourceSet;
use crate::surface::Surface;

pub const MARKER_RADIUS: f32 = 10.0;
/// Distance between scale ticks, px.
pub const SCALE_STEP: usize = 50;
const TICK_LENGTH: f32 = 5.0;

/// One frame: rings always, the interference field on top when enabled.
pub fn render_frame<S: Surface>(
    surface: &mut S,
    sources: &SourceSet,
    params: &WaveParams,
    elapsed_secs: f32,
) {
    surface.clear();
    rings::draw(surface, sources, params, elapsed_secs);
    if params.show_interference {
        field::draw(surface, sources, params.wavelength_px());
    }
}

pub fn draw_markers<S: Surface>(surface: &mut S, sources: &SourceSet) {
    for source in sources.iter() {
        surface.fill_circle(source.pos(), MARKER_RADIUS);
    }
}

/// Tick marks with pixel labels along the bottom and left edges.
pub fn draw_scale<S: Surface>(surface: &mut S) {
    let (width, height) = surface.size();
    let h = height as f32;

    for x in (0..=width as usize).step_by(SCALE_STEP) {
        let x_px = x as f32;
        surface.stroke_line(Pos::new(x_px, h - TICK_LENGTH), Pos::new(x_px, h));
        surface.text(&format!("{}px", x), Pos::new(x_px, h - 10.0));
    }

    for y in (0..=height as usize).step_by(SCALE_STEP) {
        let y_px = y as f32;
        surface.stroke_line(Pos::new(0.0, y_px), Pos::new(TICK_LENGTH, y_px));
        surface.text(&format!("{}px", y), Pos::new(10.0, y_px + 5.0));
    }
}
