/// A point in surface-local coordinates: origin top-left, y grows downwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pos {
    pub x: f32,
    pub y: f32,
}

impl Pos {
    pub fn new(x: f32, y: f32) -> Self {
        Pos { x, y }
    }

    pub fn distance(&self, other: &Pos) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Point on the circle around `self` at `angle` radians, measured clockwise on screen.
    pub fn on_circle(&self, radius: f32, angle: f32) -> Pos {
        Pos::new(self.x + radius * angle.cos(), self.y + radius * angle.sin())
    }
}
