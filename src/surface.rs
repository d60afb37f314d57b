//! The 2D raster context the renderers draw on.
//!
//! Renderers speak surface-local coordinates (origin top-left, y down).
//! `NannouSurface` maps them onto nannou's centred, y-up `Draw`.

use std::f32::consts::TAU;

use nannou::image::{DynamicImage, RgbaImage};
use nannou::prelude::*;

use crate::pos::Pos;

/// How a circle outline is stroked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Stroke {
    Solid,
    /// Alternating drawn/skipped lengths along the outline, in pixels.
    Dashed { on: f32, off: f32 },
}

/// The 5-on/5-off pattern used for rings out of phase.
pub const RING_DASH: Stroke = Stroke::Dashed { on: 5.0, off: 5.0 };

pub trait Surface {
    fn size(&self) -> (u32, u32);
    fn clear(&mut self);
    fn stroke_circle(&mut self, center: Pos, radius: f32, stroke: Stroke);
    fn fill_circle(&mut self, center: Pos, radius: f32);
    fn stroke_line(&mut self, from: Pos, to: Pos);
    fn text(&mut self, text: &str, at: Pos);
    /// Composites a full-surface image over what is already drawn.
    fn put_image(&mut self, image: RgbaImage);
}

/// Angle ranges `(start, end)` in radians covered by the drawn parts of a
/// dashed circle. The pattern starts at angle 0 and runs along the arc length.
pub fn dash_arcs(radius: f32, on: f32, off: f32) -> Vec<(f32, f32)> {
    let circumference = TAU * radius;
    let period = on + off;
    if radius <= 0.0 || on <= 0.0 || period <= 0.0 {
        return vec![];
    }

    let mut arcs = Vec::with_capacity((circumference / period).ceil() as usize);
    let mut s = 0.0;
    while s < circumference {
        let end = (s + on).min(circumference);
        arcs.push((s / radius, end / radius));
        s += period;
    }
    arcs
}

/// Width and height of the box a scale label is laid out in, px.
pub const LABEL_BOX: (f32, f32) = (60.0, 12.0);

/// Centre of the label box whose bottom-left corner sits on the text anchor,
/// so text reads left to right from `at` with its baseline on `at.y`.
pub fn label_box_center(at: Pos) -> Pos {
    let (w, h) = LABEL_BOX;
    Pos::new(at.x + w / 2.0, at.y - h / 2.0)
}

/// Converts a point in nannou window coordinates into surface-local ones.
pub fn surface_local(rect: Rect, point: Point2) -> Pos {
    Pos::new(point.x - rect.left(), rect.top() - point.y)
}

pub struct NannouSurface<'a> {
    app: &'a App,
    draw: &'a Draw,
    rect: Rect,
}

impl<'a> NannouSurface<'a> {
    pub fn new(app: &'a App, draw: &'a Draw, rect: Rect) -> Self {
        NannouSurface { app, draw, rect }
    }

    fn to_window(&self, p: Pos) -> Point2 {
        pt2(self.rect.left() + p.x, self.rect.top() - p.y)
    }

    fn arc_points(&self, center: Pos, radius: f32, from: f32, to: f32) -> Vec<Point2> {
        // One vertex every ~2px keeps short dashes smooth.
        let steps = ((to - from) * radius / 2.0).ceil().max(1.0) as usize;
        (0..=steps)
            .map(|i| {
                let angle = from + (to - from) * i as f32 / steps as f32;
                self.to_window(center.on_circle(radius, angle))
            })
            .collect()
    }
}

impl<'a> Surface for NannouSurface<'a> {
    fn size(&self) -> (u32, u32) {
        (self.rect.w().round() as u32, self.rect.h().round() as u32)
    }

    fn clear(&mut self) {
        self.draw.background().color(WHITE);
    }

    fn stroke_circle(&mut self, center: Pos, radius: f32, stroke: Stroke) {
        if radius <= 0.0 {
            return;
        }
        match stroke {
            Stroke::Solid => {
                self.draw
                    .ellipse()
                    .xy(self.to_window(center))
                    .radius(radius)
                    .no_fill()
                    .stroke(BLACK)
                    .stroke_weight(1.0);
            }
            Stroke::Dashed { on, off } => {
                for (from, to) in dash_arcs(radius, on, off) {
                    self.draw
                        .polyline()
                        .weight(1.0)
                        .points(self.arc_points(center, radius, from, to))
                        .color(BLACK);
                }
            }
        }
    }

    fn fill_circle(&mut self, center: Pos, radius: f32) {
        self.draw
            .ellipse()
            .xy(self.to_window(center))
            .radius(radius)
            .color(BLACK);
    }

    fn stroke_line(&mut self, from: Pos, to: Pos) {
        self.draw
            .line()
            .start(self.to_window(from))
            .end(self.to_window(to))
            .weight(1.0)
            .color(BLACK);
    }

    fn text(&mut self, text: &str, at: Pos) {
        let (w, h) = LABEL_BOX;
        self.draw
            .text(text)
            .xy(self.to_window(label_box_center(at)))
            .w_h(w, h)
            .left_justify()
            .align_text_bottom()
            .font_size(10)
            .color(BLACK);
    }

    fn put_image(&mut self, image: RgbaImage) {
        let texture = nannou::wgpu::Texture::from_image(self.app, &DynamicImage::ImageRgba8(image));
        self.draw
            .texture(&texture)
            .xy(self.rect.xy())
            .w_h(self.rect.w(), self.rect.h());
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn dash_arcs_follow_arc_length() {
        // Circumference 100px: ten 5px dashes.
        let radius = 100.0 / TAU;
        let arcs = dash_arcs(radius, 5.0, 5.0);
        assert_eq!(arcs.len(), 10);
        assert_approx_eq!(arcs[0].0, 0.0);
        assert_approx_eq!(arcs[0].1, 5.0 / radius, 1e-5);
        assert_approx_eq!(arcs[1].0, 10.0 / radius, 1e-5);
    }

    #[test]
    fn dash_arcs_clip_last_dash() {
        // Circumference 12px: a full dash, then one clipped to 2px.
        let radius = 12.0 / TAU;
        let arcs = dash_arcs(radius, 5.0, 5.0);
        assert_eq!(arcs.len(), 2);
        assert_approx_eq!(arcs[1].1, TAU, 1e-5);
    }

    #[test]
    fn dash_arcs_empty_for_degenerate_circle() {
        assert!(dash_arcs(0.0, 5.0, 5.0).is_empty());
    }

    #[test]
    fn label_box_starts_at_anchor() {
        let (w, h) = LABEL_BOX;
        let center = label_box_center(Pos::new(0.0, 590.0));
        assert_approx_eq!(center.x - w / 2.0, 0.0);
        assert_approx_eq!(center.y + h / 2.0, 590.0);
    }

    #[test]
    fn surface_local_flips_y_around_top_left() {
        let rect = Rect::from_w_h(800.0, 600.0);
        let p = surface_local(rect, pt2(0.0, 0.0));
        assert_approx_eq!(p.x, 400.0);
        assert_approx_eq!(p.y, 300.0);
        let p = surface_local(rect, pt2(-400.0, 300.0));
        assert_approx_eq!(p.x, 0.0);
        assert_approx_eq!(p.y, 0.0);
    }
}
