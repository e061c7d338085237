use std::collections::HashMap;

use rayon::prelude::*;
use vello_cpu::kurbo::Shape as _;

use crate::{
    foundation::core::{Canvas, Point, Rect, Rgba8},
    foundation::error::{TrafficError, TrafficResult},
    render::backend::{FrameRGBA, RenderBackend, RenderSettings, SurfaceFrame},
    render::composite::{fill_pixels, over_in_place},
    render::ops::{DrawOp, Paint},
    render::surface::SurfaceId,
    render::text::{ShapedText, TextShaper},
};

/// Rasterizes recorded ops with `vello_cpu`.
///
/// Each surface keeps its pixels between presents, so a translucent full-surface fill fades
/// older content instead of replacing it, the way a browser canvas behaves.
pub struct CpuBackend {
    settings: RenderSettings,
    text: Option<CpuText>,
    surfaces: HashMap<SurfaceId, CpuSurface>,
}

struct CpuText {
    shaper: TextShaper,
    font: vello_cpu::peniko::FontData,
}

struct CpuSurface {
    width: u16,
    height: u16,
    pixels: Vec<u8>,
}

enum PreparedOp {
    Draw(DrawOp),
    Glyphs(ShapedText),
}

struct Job {
    id: SurfaceId,
    surface: CpuSurface,
    reset: bool,
    ops: Vec<PreparedOp>,
}

impl CpuBackend {
    pub fn new(settings: RenderSettings) -> TrafficResult<Self> {
        let text = match settings.font_bytes.as_ref() {
            Some(bytes) => {
                let shaper = TextShaper::new(bytes.as_slice())?;
                tracing::debug!(family = shaper.family_name(), "text font registered");
                let font = vello_cpu::peniko::FontData::new(
                    vello_cpu::peniko::Blob::from(bytes.as_ref().clone()),
                    0,
                );
                Some(CpuText { shaper, font })
            }
            None => None,
        };
        Ok(Self {
            settings,
            text,
            surfaces: HashMap::new(),
        })
    }

    pub fn has_font(&self) -> bool {
        self.text.is_some()
    }

    fn clear_premul(&self) -> [u8; 4] {
        self.settings
            .clear_rgba
            .map(|[r, g, b, a]| Rgba8::rgba(r, g, b, a).to_premul())
            .unwrap_or([0, 0, 0, 0])
    }

    /// Take the retained surface out of the map, reallocating it if the size changed.
    fn checkout(&mut self, id: SurfaceId, canvas: Canvas) -> TrafficResult<CpuSurface> {
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| TrafficError::render("surface width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| TrafficError::render("surface height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(TrafficError::render("surface must have a non-zero size"));
        }

        match self.surfaces.remove(&id) {
            Some(s) if s.width == width && s.height == height => Ok(s),
            _ => {
                let mut pixels = vec![0u8; usize::from(width) * usize::from(height) * 4];
                fill_pixels(&mut pixels, self.clear_premul());
                Ok(CpuSurface {
                    width,
                    height,
                    pixels,
                })
            }
        }
    }

    /// Shape text serially so rasterization can run in parallel without a shared shaper.
    ///
    /// The retained surface is only checked out once everything else succeeded, so a failure
    /// leaves it in place.
    fn prepare(&mut self, frame: SurfaceFrame) -> TrafficResult<Job> {
        let mut ops = frame.ops;
        let last_clear = ops.iter().rposition(DrawOp::is_clear);
        let reset = last_clear.is_some();
        if let Some(idx) = last_clear {
            ops.drain(..=idx);
        }

        let mut prepared = Vec::with_capacity(ops.len());
        let mut skipped_text = 0usize;
        for op in ops {
            match op {
                DrawOp::Text {
                    origin,
                    content,
                    size_px,
                    bold,
                    color,
                    align,
                } => match self.text.as_mut() {
                    Some(t) => {
                        let shaped = t
                            .shaper
                            .shape(&content, size_px, bold, color, origin, align)?;
                        prepared.push(PreparedOp::Glyphs(shaped));
                    }
                    None => skipped_text += 1,
                },
                other => prepared.push(PreparedOp::Draw(other)),
            }
        }
        if skipped_text > 0 {
            tracing::debug!(surface = frame.id.0, skipped_text, "no font configured, text skipped");
        }

        let surface = self.checkout(frame.id, frame.canvas)?;
        Ok(Job {
            id: frame.id,
            surface,
            reset,
            ops: prepared,
        })
    }
}

impl RenderBackend for CpuBackend {
    #[tracing::instrument(skip(self, frame), fields(surface = frame.id.0, ops = frame.ops.len()))]
    fn render_surface(&mut self, frame: SurfaceFrame) -> TrafficResult<FrameRGBA> {
        let mut job = self.prepare(frame)?;
        let clear = self.clear_premul();
        let font = self.text.as_ref().map(|t| &t.font);
        let res = rasterize(&mut job, clear, font).map(|()| snapshot(&job.surface));
        self.surfaces.insert(job.id, job.surface);
        res
    }

    #[tracing::instrument(skip(self, frames), fields(surfaces = frames.len()))]
    fn render_all(
        &mut self,
        frames: Vec<SurfaceFrame>,
    ) -> TrafficResult<Vec<(SurfaceId, FrameRGBA)>> {
        let mut jobs = Vec::with_capacity(frames.len());
        for frame in frames {
            let id = frame.id;
            match self.prepare(frame) {
                Ok(job) => jobs.push(job),
                Err(e) => tracing::warn!(surface = id.0, error = %e, "surface skipped"),
            }
        }

        let clear = self.clear_premul();
        let font = self.text.as_ref().map(|t| &t.font);
        let results: Vec<(Job, TrafficResult<FrameRGBA>)> = jobs
            .into_par_iter()
            .map(|mut job| {
                let res = rasterize(&mut job, clear, font).map(|()| snapshot(&job.surface));
                (job, res)
            })
            .collect();

        let mut out = Vec::with_capacity(results.len());
        for (job, res) in results {
            match res {
                Ok(frame) => out.push((job.id, frame)),
                Err(e) => tracing::warn!(surface = job.id.0, error = %e, "surface skipped"),
            }
            self.surfaces.insert(job.id, job.surface);
        }
        Ok(out)
    }

    fn release(&mut self, id: SurfaceId) {
        self.surfaces.remove(&id);
    }
}

fn snapshot(surface: &CpuSurface) -> FrameRGBA {
    FrameRGBA {
        width: u32::from(surface.width),
        height: u32::from(surface.height),
        data: surface.pixels.clone(),
        premultiplied: true,
    }
}

fn rasterize(
    job: &mut Job,
    clear: [u8; 4],
    font: Option<&vello_cpu::peniko::FontData>,
) -> TrafficResult<()> {
    if job.reset {
        fill_pixels(&mut job.surface.pixels, clear);
    }
    if job.ops.is_empty() {
        return Ok(());
    }

    let (w, h) = (job.surface.width, job.surface.height);
    let mut ctx = vello_cpu::RenderContext::new(w, h);
    for op in &job.ops {
        draw_op(&mut ctx, op, font);
    }
    ctx.flush();

    let mut layer = vello_cpu::Pixmap::new(w, h);
    ctx.render_to_pixmap(&mut layer);
    over_in_place(&mut job.surface.pixels, layer.data_as_u8_slice(), 1.0)
}

fn draw_op(
    ctx: &mut vello_cpu::RenderContext,
    op: &PreparedOp,
    font: Option<&vello_cpu::peniko::FontData>,
) {
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

    let op = match op {
        PreparedOp::Draw(op) => op,
        PreparedOp::Glyphs(shaped) => {
            let Some(font) = font else {
                return;
            };
            ctx.set_paint(color_to_cpu(shaped.color));
            let glyphs = shaped.glyphs.iter().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(font)
                .font_size(shaped.size_px)
                .fill_glyphs(glyphs);
            return;
        }
    };

    match op {
        DrawOp::Clear | DrawOp::Text { .. } => {}
        DrawOp::FillRect { rect, paint } => {
            set_paint(ctx, paint);
            ctx.fill_rect(&rect_to_cpu(*rect));
        }
        DrawOp::StrokeRect { rect, width, color } => {
            ctx.set_stroke(vello_cpu::kurbo::Stroke::new(*width));
            ctx.set_paint(color_to_cpu(*color));
            ctx.stroke_rect(&rect_to_cpu(*rect));
        }
        DrawOp::FillCircle {
            center,
            radius,
            paint,
        } => {
            if *radius <= 0.0 {
                return;
            }
            set_paint(ctx, paint);
            ctx.fill_path(&circle_path(*center, *radius));
        }
        DrawOp::StrokeCircle {
            center,
            radius,
            width,
            color,
        } => {
            if *radius <= 0.0 {
                return;
            }
            ctx.set_stroke(vello_cpu::kurbo::Stroke::new(*width));
            ctx.set_paint(color_to_cpu(*color));
            ctx.stroke_path(&circle_path(*center, *radius));
        }
        DrawOp::FillPolygon { points, color } => {
            let mut iter = points.iter();
            let Some(first) = iter.next() else {
                return;
            };
            let mut path = vello_cpu::kurbo::BezPath::new();
            path.move_to(point_to_cpu(*first));
            for p in iter {
                path.line_to(point_to_cpu(*p));
            }
            path.close_path();
            ctx.set_paint(color_to_cpu(*color));
            ctx.fill_path(&path);
        }
        DrawOp::Line {
            from,
            to,
            width,
            color,
            dash,
        } => {
            let mut stroke = vello_cpu::kurbo::Stroke::new(*width);
            if let Some(d) = dash
                && d.period() > 0.0
            {
                // A positive phase scrolls dashes toward the line end, as a negative
                // `lineDashOffset` does on a 2D canvas.
                let offset = (-d.offset).rem_euclid(d.period());
                stroke = stroke.with_dashes(offset, [d.on, d.off]);
            }
            let mut path = vello_cpu::kurbo::BezPath::new();
            path.move_to(point_to_cpu(*from));
            path.line_to(point_to_cpu(*to));
            ctx.set_stroke(stroke);
            ctx.set_paint(color_to_cpu(*color));
            ctx.stroke_path(&path);
        }
    }
}

fn set_paint(ctx: &mut vello_cpu::RenderContext, paint: &Paint) {
    match paint {
        Paint::Solid(c) => ctx.set_paint(color_to_cpu(*c)),
        Paint::Linear(g) => {
            let gradient =
                vello_cpu::peniko::Gradient::new_linear(point_to_cpu(g.start), point_to_cpu(g.end))
                    .with_stops([color_to_cpu(g.from), color_to_cpu(g.to)]);
            ctx.set_paint(gradient);
        }
    }
}

fn circle_path(center: Point, radius: f64) -> vello_cpu::kurbo::BezPath {
    vello_cpu::kurbo::Circle::new(point_to_cpu(center), radius).to_path(0.1)
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}
