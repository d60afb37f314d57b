//! Travelling wavefront rings.
//!
//! Every frame each source gets a fresh set of concentric circles. The rings
//! appear to move outwards only because all radii are shifted by a phase that
//! grows with time; no ring state survives between frames.

use crate::model::WaveParams;
use crate::render;
use crate::sources::SourceSet;
use crate::surface::{Stroke, Surface, RING_DASH};

/// `(wave_speed * elapsed) mod wavelength`, shared by every ring in a frame.
pub fn phase(params: &WaveParams, elapsed_secs: f32) -> f32 {
    (params.wave_speed * elapsed_secs).rem_euclid(params.wavelength_px())
}

/// Solid for the first half of each wavelength, dashed for the second.
pub fn ring_stroke(radius: f32, wavelength: f32) -> Stroke {
    if radius.rem_euclid(wavelength) < wavelength / 2.0 {
        Stroke::Solid
    } else {
        RING_DASH
    }
}

/// Radii and strokes of one source's rings. Base radii step by a tenth of the
/// wavelength while below `extent`, then get the phase added.
pub fn rings(
    params: &WaveParams,
    phase: f32,
    extent: f32,
) -> impl Iterator<Item = (f32, Stroke)> {
    let wavelength = params.wavelength_px();
    let step = wavelength / 10.0;
    (0..)
        .map(move |k| k as f32 * step)
        .take_while(move |r| *r < extent)
        .map(move |r| {
            let radius = r + phase;
            (radius, ring_stroke(radius, wavelength))
        })
}

/// Draws the rings of every source, then markers and scale on top.
pub fn draw<S: Surface>(
    surface: &mut S,
    sources: &SourceSet,
    params: &WaveParams,
    elapsed_secs: f32,
) {
    let (width, height) = surface.size();
    let extent = width.max(height) as f32;
    let phase = phase(params, elapsed_secs);

    for source in sources.iter() {
        for (radius, stroke) in rings(params, phase, extent) {
            surface.stroke_circle(source.pos(), radius, stroke);
        }
    }

    render::draw_markers(surface, sources);
    render::draw_scale(surface);
}
