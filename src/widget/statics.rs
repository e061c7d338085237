//! Widgets that draw a single frame and then finish.

use std::f64::consts::PI;

use crate::{
    foundation::core::{Point, Rect, Rgba8},
    foundation::error::TrafficResult,
    glue::nav::initials,
    render::{
        ops::{LinearGradient, TextAlign},
        primitives,
        surface::Surface,
    },
    widget::{FrameCtx, StepOutcome, Widget, WidgetKind},
};

const BRAND_BLUE: Rgba8 = Rgba8::hex(0x2563eb);
const BRAND_VIOLET: Rgba8 = Rgba8::hex(0x8b5cf6);
const SLATE_900: Rgba8 = Rgba8::hex(0x1e293b);
const SLATE_700: Rgba8 = Rgba8::hex(0x334155);
const ACCENT_CYAN: Rgba8 = Rgba8::hex(0x06b6d4);
/// Segments used to approximate the shoulders arc.
const ARC_SEGMENTS: usize = 24;

/// Head-and-shoulders glyph in the profile button.
#[derive(Clone, Debug, Default)]
pub struct ProfileIcon;

impl Widget for ProfileIcon {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Profile
    }

    fn step(&mut self, surface: &mut Surface, _ctx: &mut FrameCtx<'_>) -> TrafficResult<StepOutcome> {
        let c = surface.canvas().center();
        primitives::clear(surface);
        primitives::fill_circle(surface, Point::new(c.x, c.y - 3.0), 8.0, BRAND_BLUE);

        let base = Point::new(c.x, c.y + 12.0);
        let shoulders = (0..=ARC_SEGMENTS)
            .map(|i| {
                let theta = PI + PI * i as f64 / ARC_SEGMENTS as f64;
                Point::new(base.x + 12.0 * theta.cos(), base.y + 12.0 * theta.sin())
            })
            .collect();
        primitives::fill_polygon(surface, shoulders, BRAND_BLUE);
        Ok(StepOutcome::Done)
    }
}

/// Team member avatar: gradient disc with initials.
#[derive(Clone, Debug)]
pub struct Avatar {
    name: String,
}

impl Avatar {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

impl Widget for Avatar {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Avatar
    }

    fn label(&self) -> String {
        let slug: Vec<String> = self
            .name
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();
        format!("avatar_{}", slug.join("_"))
    }

    fn step(&mut self, surface: &mut Surface, _ctx: &mut FrameCtx<'_>) -> TrafficResult<StepOutcome> {
        let canvas = surface.canvas();
        let c = canvas.center();
        let r = canvas.w() / 2.0;
        let gradient = LinearGradient {
            start: Point::ZERO,
            end: Point::new(canvas.w(), canvas.h()),
            from: BRAND_BLUE,
            to: BRAND_VIOLET,
        };
        primitives::clear(surface);
        primitives::fill_circle_gradient(surface, c, r, gradient);
        primitives::fill_circle(surface, c, r - 5.0, Rgba8::WHITE.with_alpha(0.2));
        primitives::bold_text(
            surface,
            c,
            self.initials(),
            48.0,
            Rgba8::WHITE,
            TextAlign::CenterMiddle,
        );
        Ok(StepOutcome::Done)
    }
}

/// The pipeline steps shown in the about section, top to bottom.
pub const METHODOLOGY_STEPS: [(&str, f64); 5] = [
    ("Upload Video", 50.0),
    ("Extract Frames", 100.0),
    ("YOLO-V4 Detection", 150.0),
    ("Deep SORT Tracking", 200.0),
    ("Display Results", 250.0),
];

/// Flowchart of the detection pipeline.
#[derive(Clone, Debug, Default)]
pub struct MethodologyChart;

impl MethodologyChart {
    pub fn step_box(y: f64) -> Rect {
        Rect::new(50.0, y - 15.0, 350.0, y + 15.0)
    }
}

impl Widget for MethodologyChart {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Methodology
    }

    fn step(&mut self, surface: &mut Surface, _ctx: &mut FrameCtx<'_>) -> TrafficResult<StepOutcome> {
        let bg = surface.canvas().rect();
        primitives::clear(surface);
        primitives::fill_rect(surface, bg, SLATE_900);

        for (i, &(label, y)) in METHODOLOGY_STEPS.iter().enumerate() {
            let step = Self::step_box(y);
            primitives::fill_rect(surface, step, SLATE_700);
            primitives::stroke_rect(surface, step, 2.0, ACCENT_CYAN);
            primitives::bold_text(
                surface,
                Point::new(200.0, y + 5.0),
                label,
                14.0,
                Rgba8::WHITE,
                TextAlign::Center,
            );

            if let Some(&(_, next_y)) = METHODOLOGY_STEPS.get(i + 1) {
                let tip = Point::new(200.0, next_y - 15.0);
                primitives::line(surface, Point::new(200.0, y + 15.0), tip, 2.0, ACCENT_CYAN);
                primitives::fill_triangle(
                    surface,
                    tip,
                    Point::new(195.0, next_y - 22.0),
                    Point::new(205.0, next_y - 22.0),
                    ACCENT_CYAN,
                );
            }
        }
        Ok(StepOutcome::Done)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widget/statics.rs"]
mod tests;
