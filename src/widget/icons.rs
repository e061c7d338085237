//! Animated feature-card icons.

use std::f64::consts::TAU;

use rand::Rng;

use crate::{
    entity::{
        bar_value::BarValue,
        pulse_car::PulseCar,
        tracking_dot::{TrackingDot, draw_links},
    },
    foundation::core::{Canvas, Point, Rect, Rgba8},
    foundation::error::TrafficResult,
    render::{primitives, surface::Surface},
    widget::{FrameCtx, StepOutcome, Widget, WidgetKind},
};

const DETECT_GREEN: Rgba8 = Rgba8::hex(0x10b981);
const BAR_CYAN: Rgba8 = Rgba8::hex(0x06b6d4);

/// Concentric target rings with a rotating scan line.
#[derive(Clone, Debug, Default)]
pub struct DetectionIcon;

impl DetectionIcon {
    pub const RINGS: usize = 3;
    pub const SCAN_LENGTH: f64 = 25.0;

    pub fn ring_radius(i: usize) -> f64 {
        15.0 + 8.0 * i as f64
    }

    pub fn ring_opacity(i: usize) -> f64 {
        1.0 - 0.3 * i as f64
    }

    pub fn scan_angle(frame: f64) -> f64 {
        (frame * 0.05) % TAU
    }
}

impl Widget for DetectionIcon {
    fn kind(&self) -> WidgetKind {
        WidgetKind::DetectionIcon
    }

    fn step(&mut self, surface: &mut Surface, ctx: &mut FrameCtx<'_>) -> TrafficResult<StepOutcome> {
        let c = surface.canvas().center();
        primitives::clear(surface);
        for i in 0..Self::RINGS {
            primitives::stroke_circle(
                surface,
                c,
                Self::ring_radius(i),
                2.0,
                DETECT_GREEN.with_alpha(Self::ring_opacity(i)),
            );
        }

        let angle = Self::scan_angle(ctx.frame.as_f64());
        let tip = Point::new(
            c.x + Self::SCAN_LENGTH * angle.cos(),
            c.y + Self::SCAN_LENGTH * angle.sin(),
        );
        primitives::line(surface, c, tip, 3.0, DETECT_GREEN);
        Ok(StepOutcome::Continue)
    }
}

/// Wandering dots linked when close.
#[derive(Clone, Debug)]
pub struct TrackingIcon {
    dots: Vec<TrackingDot>,
}

impl TrackingIcon {
    pub const DOTS: usize = 5;

    pub fn new<R: Rng + ?Sized>(canvas: Canvas, rng: &mut R) -> Self {
        Self {
            dots: (0..Self::DOTS)
                .map(|_| TrackingDot::spawn(canvas, rng))
                .collect(),
        }
    }

    pub fn dots(&self) -> &[TrackingDot] {
        &self.dots
    }
}

impl Widget for TrackingIcon {
    fn kind(&self) -> WidgetKind {
        WidgetKind::TrackingIcon
    }

    fn step(&mut self, surface: &mut Surface, _ctx: &mut FrameCtx<'_>) -> TrafficResult<StepOutcome> {
        let canvas = surface.canvas();
        primitives::clear(surface);
        for d in &mut self.dots {
            d.update(canvas);
        }
        for d in &self.dots {
            d.draw(surface);
        }
        draw_links(&self.dots, surface);
        Ok(StepOutcome::Continue)
    }
}

/// Bar chart whose bars grow in from zero.
#[derive(Clone, Debug)]
pub struct AnalyticsIcon {
    bars: Vec<BarValue>,
}

impl AnalyticsIcon {
    pub const TARGETS: [f64; 5] = [20.0, 35.0, 25.0, 40.0, 30.0];

    pub fn new() -> Self {
        Self {
            bars: Self::TARGETS.iter().map(|&t| BarValue::new(t)).collect(),
        }
    }

    pub fn bars(&self) -> &[BarValue] {
        &self.bars
    }

    /// Bottom-anchored rect of bar `i` at `height`.
    pub fn bar_rect(canvas: Canvas, i: usize, height: f64) -> Rect {
        let width = canvas.w() / 6.0;
        let spacing = width / 5.0;
        let x = spacing + i as f64 * (width + spacing);
        Rect::new(x, canvas.h() - height, x + width, canvas.h())
    }
}

impl Default for AnalyticsIcon {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for AnalyticsIcon {
    fn kind(&self) -> WidgetKind {
        WidgetKind::AnalyticsIcon
    }

    fn step(&mut self, surface: &mut Surface, _ctx: &mut FrameCtx<'_>) -> TrafficResult<StepOutcome> {
        let canvas = surface.canvas();
        primitives::clear(surface);
        for (i, bar) in self.bars.iter_mut().enumerate() {
            bar.update();
            if bar.height > 0.0 {
                primitives::fill_rect(surface, Self::bar_rect(canvas, i, bar.height), BAR_CYAN);
            }
        }
        Ok(StepOutcome::Continue)
    }
}

/// Two rows of queued cars bobbing in place.
#[derive(Clone, Debug)]
pub struct CongestionIcon {
    cars: Vec<PulseCar>,
}

impl CongestionIcon {
    pub const CARS: usize = 8;

    pub fn new() -> Self {
        Self {
            cars: (0..Self::CARS).map(PulseCar::grid).collect(),
        }
    }

    pub fn cars(&self) -> &[PulseCar] {
        &self.cars
    }
}

impl Default for CongestionIcon {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for CongestionIcon {
    fn kind(&self) -> WidgetKind {
        WidgetKind::CongestionIcon
    }

    fn step(&mut self, surface: &mut Surface, ctx: &mut FrameCtx<'_>) -> TrafficResult<StepOutcome> {
        primitives::clear(surface);
        for car in &mut self.cars {
            car.update(ctx.frame);
            car.draw(surface);
        }
        Ok(StepOutcome::Continue)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widget/icons.rs"]
mod tests;
