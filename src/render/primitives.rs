//! Stateless draw routines. Each call records exactly one [`DrawOp`] on the surface.

use crate::{
    foundation::core::{Point, Rect, Rgba8},
    render::ops::{Dash, DrawOp, LinearGradient, Paint, TextAlign},
    render::surface::Surface,
};

pub fn clear(surface: &mut Surface) {
    surface.push(DrawOp::Clear);
}

/// Translucent wash over the whole surface; repeated every frame it leaves fading trails.
pub fn fade(surface: &mut Surface, color: Rgba8) {
    let rect = surface.canvas().rect();
    fill_rect(surface, rect, color);
}

pub fn fill_rect(surface: &mut Surface, rect: Rect, paint: impl Into<Paint>) {
    surface.push(DrawOp::FillRect {
        rect,
        paint: paint.into(),
    });
}

pub fn fill_rect_gradient(surface: &mut Surface, rect: Rect, gradient: LinearGradient) {
    fill_rect(surface, rect, gradient);
}

pub fn stroke_rect(surface: &mut Surface, rect: Rect, width: f64, color: Rgba8) {
    surface.push(DrawOp::StrokeRect { rect, width, color });
}

pub fn fill_circle(surface: &mut Surface, center: Point, radius: f64, paint: impl Into<Paint>) {
    surface.push(DrawOp::FillCircle {
        center,
        radius,
        paint: paint.into(),
    });
}

pub fn fill_circle_gradient(
    surface: &mut Surface,
    center: Point,
    radius: f64,
    gradient: LinearGradient,
) {
    fill_circle(surface, center, radius, gradient);
}

pub fn stroke_circle(surface: &mut Surface, center: Point, radius: f64, width: f64, color: Rgba8) {
    surface.push(DrawOp::StrokeCircle {
        center,
        radius,
        width,
        color,
    });
}

pub fn fill_triangle(surface: &mut Surface, a: Point, b: Point, c: Point, color: Rgba8) {
    fill_polygon(surface, vec![a, b, c], color);
}

/// Closed polygon; fewer than three points draws nothing.
pub fn fill_polygon(surface: &mut Surface, points: Vec<Point>, color: Rgba8) {
    surface.push(DrawOp::FillPolygon { points, color });
}

pub fn line(surface: &mut Surface, from: Point, to: Point, width: f64, color: Rgba8) {
    surface.push(DrawOp::Line {
        from,
        to,
        width,
        color,
        dash: None,
    });
}

pub fn dashed_line(
    surface: &mut Surface,
    from: Point,
    to: Point,
    width: f64,
    color: Rgba8,
    dash: Dash,
) {
    surface.push(DrawOp::Line {
        from,
        to,
        width,
        color,
        dash: Some(dash),
    });
}

pub fn text(
    surface: &mut Surface,
    origin: Point,
    content: impl Into<String>,
    size_px: f32,
    color: Rgba8,
    align: TextAlign,
) {
    surface.push(DrawOp::Text {
        origin,
        content: content.into(),
        size_px,
        bold: false,
        color,
        align,
    });
}

pub fn bold_text(
    surface: &mut Surface,
    origin: Point,
    content: impl Into<String>,
    size_px: f32,
    color: Rgba8,
    align: TextAlign,
) {
    surface.push(DrawOp::Text {
        origin,
        content: content.into(),
        size_px,
        bold: true,
        color,
        align,
    });
}

#[cfg(test)]
#[path = "../../tests/unit/render/primitives.rs"]
mod tests;
