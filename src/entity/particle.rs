use rand::Rng;

use super::random_coord;
use crate::{
    foundation::core::{Canvas, Point, Rgba8},
    foundation::math::{perspective_scale, reflect_velocity},
    render::{primitives, surface::Surface},
};

/// Depth a particle is born at (and reset to).
pub const FAR_PLANE: f64 = 1000.0;
/// Depth at or below which a particle has flown past the viewer and respawns.
pub const NEAR_PLANE: f64 = 1.0;

const COLOR: Rgba8 = Rgba8::rgb(37, 99, 235);
const BASE_RADIUS: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq)]
/// Hero background particle flying toward the viewer.
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub vx: f64,
    pub vy: f64,
    pub vz: f64,
}

impl Particle {
    pub fn spawn<R: Rng + ?Sized>(canvas: Canvas, rng: &mut R) -> Self {
        Self {
            x: random_coord(rng, canvas.w()),
            y: random_coord(rng, canvas.h()),
            z: rng.gen_range(0.0..FAR_PLANE),
            vx: rng.gen_range(-0.25..0.25),
            vy: rng.gen_range(-0.25..0.25),
            vz: rng.gen_range(1.0..3.0),
        }
    }

    pub fn update<R: Rng + ?Sized>(&mut self, canvas: Canvas, rng: &mut R) {
        self.z -= self.vz;
        self.x += self.vx;
        self.y += self.vy;

        if self.z <= NEAR_PLANE {
            self.z = FAR_PLANE;
            self.x = random_coord(rng, canvas.w());
            self.y = random_coord(rng, canvas.h());
        }

        self.vx = reflect_velocity(self.x, self.vx, canvas.w());
        self.vy = reflect_velocity(self.y, self.vy, canvas.h());
    }

    pub fn scale(&self) -> f64 {
        perspective_scale(FAR_PLANE, self.z)
    }

    /// Perspective projection around the surface center.
    pub fn projected(&self, canvas: Canvas) -> Point {
        let c = canvas.center();
        let s = self.scale();
        Point::new((self.x - c.x) * s + c.x, (self.y - c.y) * s + c.y)
    }

    pub fn opacity(&self) -> f64 {
        (1.0 - self.z / FAR_PLANE).clamp(0.0, 1.0)
    }

    pub fn draw(&self, surface: &mut Surface) {
        let canvas = surface.canvas();
        primitives::fill_circle(
            surface,
            self.projected(canvas),
            BASE_RADIUS * self.scale(),
            COLOR.with_alpha(self.opacity()),
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/entity/particle.rs"]
mod tests;
