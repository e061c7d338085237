use crate::{
    foundation::core::{Point, Rgba8},
    foundation::error::{TrafficError, TrafficResult},
    render::ops::TextAlign,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color carried through Parley layouts.
pub struct TextBrushRgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl From<Rgba8> for TextBrushRgba8 {
    fn from(c: Rgba8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionedGlyph {
    pub id: u32,
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Debug)]
/// Text already shaped and placed in surface coordinates.
pub struct ShapedText {
    pub glyphs: Vec<PositionedGlyph>,
    pub size_px: f32,
    pub color: Rgba8,
}

/// Parley-backed shaper bound to a single font face.
pub struct TextShaper {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    family_name: String,
}

impl TextShaper {
    /// Register `font_bytes` and resolve its family name.
    pub fn new(font_bytes: &[u8]) -> TrafficResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            TrafficError::validation("no font families registered from font bytes")
        })?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| TrafficError::validation("registered font family has no name"))?
            .to_string();

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
        })
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    pub fn shape(
        &mut self,
        content: &str,
        size_px: f32,
        bold: bool,
        color: Rgba8,
        origin: Point,
        align: TextAlign,
    ) -> TrafficResult<ShapedText> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(TrafficError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, content, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(color.into()));
        if bold {
            builder.push_default(parley::style::StyleProperty::FontWeight(
                parley::style::FontWeight::BOLD,
            ));
        }

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(content);
        layout.break_all_lines(None);

        let width = f64::from(layout.width());
        let height = f64::from(layout.height());
        let baseline = layout
            .lines()
            .next()
            .map(|l| f64::from(l.metrics().baseline))
            .unwrap_or(0.0);

        let (dx, dy) = match align {
            TextAlign::Start => (origin.x, origin.y - baseline),
            TextAlign::Center => (origin.x - width / 2.0, origin.y - baseline),
            TextAlign::CenterMiddle => (origin.x - width / 2.0, origin.y - height / 2.0),
        };

        let mut glyphs = Vec::new();
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                glyphs.extend(run.positioned_glyphs().map(|g| PositionedGlyph {
                    id: u32::from(g.id),
                    x: g.x + dx as f32,
                    y: g.y + dy as f32,
                }));
            }
        }

        Ok(ShapedText {
            glyphs,
            size_px,
            color,
        })
    }
}

impl std::fmt::Debug for TextShaper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextShaper")
            .field("family_name", &self.family_name)
            .finish_non_exhaustive()
    }
}
