use crate::{
    foundation::core::{Canvas, Rgba8},
    foundation::error::{TrafficError, TrafficResult},
    render::ops::{DrawOp, Paint},
};

/// Largest width or height a backend pixmap can hold.
pub const MAX_SIDE: u32 = u16::MAX as u32;

/// Contribution below which content buried under stacked washes no longer shows in 8-bit output.
const BURIED: f64 = 0.5 / 255.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Identifier of a mounted widget's surface, assigned by the scheduler.
pub struct SurfaceId(pub u32);

#[derive(Clone, Debug)]
/// A widget's drawing target: current size plus the ops recorded since the last present.
pub struct Surface {
    canvas: Canvas,
    ops: Vec<DrawOp>,
}

impl Surface {
    pub fn new(canvas: Canvas) -> TrafficResult<Self> {
        check_size(canvas)?;
        Ok(Self {
            canvas,
            ops: Vec::new(),
        })
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Point-in-time resize. Like a 2D canvas, the backing pixels are discarded by the backend.
    ///
    /// A rejected size leaves the surface untouched.
    pub fn resize(&mut self, width: u32, height: u32) -> TrafficResult<()> {
        let canvas = Canvas::new(width, height)?;
        check_size(canvas)?;
        if canvas != self.canvas {
            tracing::debug!(width, height, "surface resized");
            self.canvas = canvas;
            self.ops.clear();
        }
        Ok(())
    }

    pub fn push(&mut self, op: DrawOp) {
        // Everything recorded before a clear or an opaque cover would be erased anyway.
        if op.is_clear() || self.wash_color(&op).is_some_and(|c| c.a == u8::MAX) {
            self.ops.clear();
        }
        let wash = self.wash_color(&op);
        self.ops.push(op);
        if let Some(color) = wash {
            self.fold_washes(color);
        }
    }

    /// Color of a solid fill covering the whole surface.
    fn wash_color(&self, op: &DrawOp) -> Option<Rgba8> {
        match op {
            DrawOp::FillRect {
                rect,
                paint: Paint::Solid(color),
            } if rect.x0 <= 0.0
                && rect.y0 <= 0.0
                && rect.x1 >= self.canvas.w()
                && rect.y1 >= self.canvas.h() =>
            {
                Some(*color)
            }
            _ => None,
        }
    }

    /// Collapse ops buried under enough same-colored translucent washes into an opaque fill.
    ///
    /// Widgets that fade instead of clearing would otherwise grow their op list every frame
    /// until the next present.
    fn fold_washes(&mut self, color: Rgba8) {
        if color.a == 0 || color.a == u8::MAX {
            return;
        }
        let keep = 1.0 - f64::from(color.a) / 255.0;
        let mut residue = 1.0;
        for idx in (0..self.ops.len()).rev() {
            match self.wash_color(&self.ops[idx]) {
                Some(c) if c == color => {
                    residue *= keep;
                    if residue < BURIED {
                        let cover = DrawOp::FillRect {
                            rect: self.canvas.rect(),
                            paint: Paint::Solid(Rgba8 { a: u8::MAX, ..color }),
                        };
                        self.ops.splice(..=idx, [DrawOp::Clear, cover]);
                        return;
                    }
                }
                Some(_) => return,
                None => {}
            }
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Hand the pending ops to a backend, leaving the surface empty.
    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }
}

fn check_size(canvas: Canvas) -> TrafficResult<()> {
    if canvas.is_empty() {
        return Err(TrafficError::render("surface must have a non-zero size"));
    }
    if canvas.width > MAX_SIDE || canvas.height > MAX_SIDE {
        return Err(TrafficError::render(format!(
            "surface {}x{} exceeds {MAX_SIDE} pixels per side",
            canvas.width, canvas.height
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
