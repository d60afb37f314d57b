//! Interference overlay.
//!
//! For every pixel the sine contributions of all sources are summed and the
//! pixel is painted only when the sum sits near zero (destructive) or near its
//! two-source maximum (constructive). Everything is recomputed each frame.

use std::f64::consts::TAU;

use nannou::image::{Rgba, RgbaImage};

use crate::pos::Pos;
use crate::render;
use crate::sources::{SourceSet, WaveSource};
use crate::surface::Surface;

pub const DESTRUCTIVE_BELOW: f64 = 0.1;
pub const CONSTRUCTIVE_ABOVE: f64 = 1.9;

pub const DESTRUCTIVE_COLOR: Rgba<u8> = Rgba([0, 0, 255, 255]);
pub const CONSTRUCTIVE_COLOR: Rgba<u8> = Rgba([255, 0, 0, 255]);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Band {
    Destructive,
    Constructive,
    Neither,
}

impl Band {
    pub fn color(self) -> Option<Rgba<u8>> {
        match self {
            Band::Destructive => Some(DESTRUCTIVE_COLOR),
            Band::Constructive => Some(CONSTRUCTIVE_COLOR),
            Band::Neither => None,
        }
    }
}

/// Sum over sources of `sin(2π · distance / wavelength)` at `p`.
///
/// Accumulates in f64 so the classification does not depend on source order.
pub fn superpose(p: Pos, sources: &[WaveSource], wavelength: f32) -> f64 {
    let (px, py) = (p.x as f64, p.y as f64);
    sources
        .iter()
        .map(|source| {
            let distance = (px - source.x as f64).hypot(py - source.y as f64);
            (distance / wavelength as f64 * TAU).sin()
        })
        .sum()
}

pub fn classify(sum: f64) -> Band {
    let magnitude = sum.abs();
    if magnitude < DESTRUCTIVE_BELOW {
        Band::Destructive
    } else if magnitude > CONSTRUCTIVE_ABOVE {
        Band::Constructive
    } else {
        Band::Neither
    }
}

/// Builds the overlay image. Pixels outside both bands stay fully transparent.
pub fn compute(width: u32, height: u32, sources: &[WaveSource], wavelength: f32) -> RgbaImage {
    let mut image = RgbaImage::new(width, height);
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let sum = superpose(Pos::new(x as f32, y as f32), sources, wavelength);
        if let Some(color) = classify(sum).color() {
            *pixel = color;
        }
    }
    image
}

/// Paints the overlay over the rings, then markers and scale on top of it.
pub fn draw<S: Surface>(surface: &mut S, sources: &SourceSet, wavelength: f32) {
    let (width, height) = surface.size();
    surface.put_image(compute(width, height, sources.as_slice(), wavelength));
    render::draw_markers(surface, sources);
    render::draw_scale(surface);
}
