use rand::Rng;

use super::random_coord;
use crate::{
    foundation::core::{Canvas, Point, Rgba8},
    foundation::math::{linear_falloff, reflect_velocity},
    render::{primitives, surface::Surface},
};

/// Dots closer than this are linked.
pub const LINK_THRESHOLD: f64 = 40.0;
pub const RADIUS: f64 = 4.0;

const COLOR: Rgba8 = Rgba8::hex(0x8b5cf6);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackingDot {
    pub pos: Point,
    pub vx: f64,
    pub vy: f64,
}

impl TrackingDot {
    pub fn spawn<R: Rng + ?Sized>(canvas: Canvas, rng: &mut R) -> Self {
        Self {
            pos: Point::new(random_coord(rng, canvas.w()), random_coord(rng, canvas.h())),
            vx: rng.gen_range(-1.0..1.0),
            vy: rng.gen_range(-1.0..1.0),
        }
    }

    pub fn update(&mut self, canvas: Canvas) {
        self.pos.x += self.vx;
        self.pos.y += self.vy;
        self.vx = reflect_velocity(self.pos.x, self.vx, canvas.w());
        self.vy = reflect_velocity(self.pos.y, self.vy, canvas.h());
    }

    pub fn draw(&self, surface: &mut Surface) {
        primitives::fill_circle(surface, self.pos, RADIUS, COLOR);
    }
}

/// Opacity of the link between two dots `distance` apart; 0 means no link is drawn.
pub fn link_opacity(distance: f64) -> f64 {
    linear_falloff(distance, LINK_THRESHOLD)
}

/// One 1px line per pair of dots within [`LINK_THRESHOLD`].
pub fn draw_links(dots: &[TrackingDot], surface: &mut Surface) {
    for (i, a) in dots.iter().enumerate() {
        for b in &dots[i + 1..] {
            let opacity = link_opacity(a.pos.distance(b.pos));
            if opacity > 0.0 {
                primitives::line(surface, a.pos, b.pos, 1.0, COLOR.with_alpha(opacity));
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/entity/tracking_dot.rs"]
mod tests;
