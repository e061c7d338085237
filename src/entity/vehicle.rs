use rand::Rng;

use super::random_coord;
use crate::{
    foundation::core::{Canvas, Point, Rect, Rgba8},
    render::{ops::TextAlign, primitives, surface::Surface},
};

pub const LANES: u8 = 3;
pub const WIDTH: f64 = 40.0;
pub const HEIGHT: f64 = 70.0;
/// Distance above the top / below the bottom edge where vehicles enter and leave.
pub const EDGE_MARGIN: f64 = 50.0;

pub const PALETTE: [Rgba8; 5] = [
    Rgba8::hex(0x3b82f6),
    Rgba8::hex(0x8b5cf6),
    Rgba8::hex(0x06b6d4),
    Rgba8::hex(0x10b981),
    Rgba8::hex(0xf59e0b),
];

const DETECTION_GREEN: Rgba8 = Rgba8::hex(0x10b981);
const BOX_PAD: f64 = 5.0;
const LABEL_W: f64 = 40.0;
const LABEL_H: f64 = 15.0;

#[derive(Clone, Debug, PartialEq)]
/// A car scrolling down the monitor road, dressed up as a detector hit.
pub struct Vehicle {
    pub lane: u8,
    pub x: f64,
    pub y: f64,
    pub speed: f64,
    pub color: Rgba8,
    pub id: u32,
}

impl Vehicle {
    pub fn spawn<R: Rng + ?Sized>(canvas: Canvas, rng: &mut R) -> Self {
        Self {
            lane: rng.gen_range(0..LANES),
            x: random_coord(rng, canvas.w()),
            y: -EDGE_MARGIN,
            speed: rng.gen_range(1.0..3.0),
            color: PALETTE[rng.gen_range(0..PALETTE.len())],
            id: rng.gen_range(0..1000),
        }
    }

    pub fn update<R: Rng + ?Sized>(&mut self, canvas: Canvas, rng: &mut R) {
        self.y += self.speed;
        if self.y > canvas.h() + EDGE_MARGIN {
            self.y = -EDGE_MARGIN;
            self.x = random_coord(rng, canvas.w());
        }
    }

    pub fn body(&self) -> Rect {
        Rect::from_center_size(Point::new(self.x, self.y), (WIDTH, HEIGHT))
    }

    /// Detection box drawn around the body.
    pub fn bounding_box(&self) -> Rect {
        self.body().inflate(BOX_PAD, BOX_PAD)
    }

    pub fn label(&self) -> String {
        format!("ID:{}", self.id)
    }

    pub fn draw(&self, surface: &mut Surface) {
        let body = self.body();
        primitives::fill_rect(surface, body, self.color);

        let window = Rect::new(
            body.x0 + 5.0,
            body.y0 + 5.0,
            body.x1 - 5.0,
            body.y0 + 25.0,
        );
        primitives::fill_rect(surface, window, Rgba8::WHITE.with_alpha(0.3));

        let bbox = self.bounding_box();
        primitives::stroke_rect(surface, bbox, 2.0, DETECTION_GREEN);

        let tag = Rect::new(
            bbox.x0,
            body.y0 - 20.0,
            bbox.x0 + LABEL_W,
            body.y0 - 20.0 + LABEL_H,
        );
        primitives::fill_rect(surface, tag, DETECTION_GREEN);
        primitives::bold_text(
            surface,
            Point::new(body.x0, body.y0 - 8.0),
            self.label(),
            10.0,
            Rgba8::BLACK,
            TextAlign::Start,
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/entity/vehicle.rs"]
mod tests;
