use crate::{
    foundation::core::Canvas,
    foundation::error::TrafficResult,
    render::cpu::CpuBackend,
    render::composite::unpremultiply,
    render::ops::DrawOp,
    render::surface::SurfaceId,
};

#[derive(Clone, Debug)]
/// One rendered surface in premultiplied RGBA8, row-major.
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl FrameRGBA {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Straight-alpha copy of the pixel data (what PNG expects).
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        if !self.premultiplied {
            return self.data.clone();
        }
        let mut out = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(4) {
            out.extend_from_slice(&unpremultiply([px[0], px[1], px[2], px[3]]));
        }
        out
    }
}

#[derive(Clone, Debug, Default)]
pub struct RenderSettings {
    /// Color a surface starts from after allocation or a `Clear` op (straight RGBA).
    pub clear_rgba: Option<[u8; 4]>,
    /// Font used for every text op. Without it text ops are skipped.
    pub font_bytes: Option<std::sync::Arc<Vec<u8>>>,
}

#[derive(Clone, Debug)]
/// Ops recorded by one widget since it was last presented.
pub struct SurfaceFrame {
    pub id: SurfaceId,
    pub canvas: Canvas,
    pub ops: Vec<DrawOp>,
}

pub trait RenderBackend {
    fn render_surface(&mut self, frame: SurfaceFrame) -> TrafficResult<FrameRGBA>;

    /// Render a batch of independent surfaces. Results keep the input order.
    ///
    /// A surface that fails is logged and left out of the result; the rest still render.
    fn render_all(
        &mut self,
        frames: Vec<SurfaceFrame>,
    ) -> TrafficResult<Vec<(SurfaceId, FrameRGBA)>> {
        let mut out = Vec::with_capacity(frames.len());
        for frame in frames {
            let id = frame.id;
            match self.render_surface(frame) {
                Ok(rgba) => out.push((id, rgba)),
                Err(e) => tracing::warn!(surface = id.0, error = %e, "surface skipped"),
            }
        }
        Ok(out)
    }

    /// Forget retained pixels for a surface that is no longer mounted.
    fn release(&mut self, id: SurfaceId);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackendKind {
    #[default]
    Cpu,
}

pub fn create_backend(
    kind: BackendKind,
    settings: &RenderSettings,
) -> TrafficResult<Box<dyn RenderBackend>> {
    match kind {
        BackendKind::Cpu => Ok(Box::new(CpuBackend::new(settings.clone())?)),
    }
}
