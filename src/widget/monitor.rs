use crate::{
    foundation::core::{Point, Rgba8},
    foundation::error::TrafficResult,
    render::{ops::Dash, ops::LinearGradient, primitives, surface::Surface},
    widget::{FrameCtx, StepOutcome, Widget, WidgetKind},
};

pub const LANE_MARKINGS: usize = 4;
const ROAD_TOP: Rgba8 = Rgba8::hex(0x374151);
const ROAD_BOTTOM: Rgba8 = Rgba8::hex(0x1f2937);
const MARKING: Rgba8 = Rgba8::hex(0xfbbf24);
const MARKING_WIDTH: f64 = 3.0;
const DASH_ON: f64 = 20.0;
const DASH_OFF: f64 = 15.0;
/// Offset advance per marking drawn.
const OFFSET_STEP: f64 = 2.0;

/// Live monitor feed: a scrolling road with the synchronizer's vehicle pool on it.
#[derive(Clone, Debug, Default)]
pub struct TrafficMonitor {
    road_offset: f64,
}

impl TrafficMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn road_offset(&self) -> f64 {
        self.road_offset
    }

    fn advance_offset(&mut self) -> f64 {
        self.road_offset = (self.road_offset + OFFSET_STEP) % (DASH_ON + DASH_OFF);
        self.road_offset
    }

    fn draw_road(&mut self, surface: &mut Surface) {
        let canvas = surface.canvas();
        let gradient = LinearGradient {
            start: Point::ZERO,
            end: Point::new(0.0, canvas.h()),
            from: ROAD_TOP,
            to: ROAD_BOTTOM,
        };
        primitives::fill_rect_gradient(surface, canvas.rect(), gradient);

        let spacing = canvas.w() / LANE_MARKINGS as f64;
        for i in 0..LANE_MARKINGS {
            let dash = Dash {
                on: DASH_ON,
                off: DASH_OFF,
                offset: self.advance_offset(),
            };
            let x = spacing * i as f64;
            primitives::dashed_line(
                surface,
                Point::new(x, 0.0),
                Point::new(x, canvas.h()),
                MARKING_WIDTH,
                MARKING,
                dash,
            );
        }
    }
}

impl Widget for TrafficMonitor {
    fn kind(&self) -> WidgetKind {
        WidgetKind::TrafficMonitor
    }

    fn step(&mut self, surface: &mut Surface, ctx: &mut FrameCtx<'_>) -> TrafficResult<StepOutcome> {
        let canvas = surface.canvas();
        ctx.traffic.set_monitor_canvas(canvas);

        primitives::clear(surface);
        self.draw_road(surface);

        let pool = ctx.traffic.pool_mut();
        pool.update(canvas, &mut ctx.rng.0);
        pool.draw(surface);
        Ok(StepOutcome::Continue)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widget/monitor.rs"]
mod tests;
