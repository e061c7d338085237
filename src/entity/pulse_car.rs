use crate::{
    foundation::core::{FrameCounter, Point, Rect, Rgba8},
    render::{primitives, surface::Surface},
};

pub const COLUMNS: usize = 4;
pub const BODY_W: f64 = 10.0;
pub const BODY_H: f64 = 16.0;

const BODY: Rgba8 = Rgba8::hex(0xef4444);
const HEADLIGHT: Rgba8 = Rgba8::hex(0xfbbf24);
const BOB_SPEED: f64 = 0.05;
const BOB_AMPLITUDE: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq)]
/// Queued car in the congestion icon, bobbing in place.
pub struct PulseCar {
    pub x: f64,
    pub base_y: f64,
    pub y: f64,
    pub phase: f64,
}

impl PulseCar {
    /// Car `index` of a grid laid out four to a row.
    pub fn grid(index: usize) -> Self {
        let x = (index % COLUMNS) as f64 * 12.0 + 8.0;
        let base_y = (index / COLUMNS) as f64 * 20.0 + 15.0;
        Self {
            x,
            base_y,
            y: base_y,
            phase: index as f64,
        }
    }

    pub fn update(&mut self, frame: FrameCounter) {
        self.y = self.base_y + (frame.as_f64() * BOB_SPEED + self.phase).sin() * BOB_AMPLITUDE;
    }

    pub fn draw(&self, surface: &mut Surface) {
        let body = Rect::from_origin_size(Point::new(self.x, self.y), (BODY_W, BODY_H));
        primitives::fill_rect(surface, body, BODY);
        for dx in [1.0, 6.0] {
            let lamp = Rect::from_origin_size(Point::new(self.x + dx, self.y + 13.0), (3.0, 2.0));
            primitives::fill_rect(surface, lamp, HEADLIGHT);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/entity/pulse_car.rs"]
mod tests;
