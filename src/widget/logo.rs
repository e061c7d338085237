use crate::{
    foundation::core::{FrameCounter, Point, Rect, Rgba8},
    foundation::error::{TrafficError, TrafficResult},
    render::{primitives, surface::Surface},
    widget::{FrameCtx, StepOutcome, Widget, WidgetKind},
};

const HOUSING: Rgba8 = Rgba8::hex(0x1e293b);
const UNLIT: Rgba8 = Rgba8::hex(0x334155);
const LAMP_RADIUS: f64 = 4.0;
const GLOW_RADIUS: f64 = 8.0;
const LAMP_Y: [f64; 3] = [10.0, 20.0, 30.0];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightPhase {
    Red,
    Amber,
    Green,
}

impl LightPhase {
    pub const ORDER: [Self; 3] = [Self::Red, Self::Amber, Self::Green];

    /// Phase under the default 180-frame cycle.
    pub fn at(frame: FrameCounter) -> Self {
        LightCycle::default().phase(frame)
    }

    pub fn color(self) -> Rgba8 {
        match self {
            Self::Red => Rgba8::hex(0xef4444),
            Self::Amber => Rgba8::hex(0xf59e0b),
            Self::Green => Rgba8::hex(0x10b981),
        }
    }
}

/// Timing of the red/amber/green cycle in frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LightCycle {
    pub period: u64,
    pub phase_len: u64,
}

impl Default for LightCycle {
    fn default() -> Self {
        Self {
            period: 180,
            phase_len: 60,
        }
    }
}

impl LightCycle {
    pub fn validate(&self) -> TrafficResult<()> {
        if self.phase_len == 0 {
            return Err(TrafficError::validation("light phase length must be > 0"));
        }
        if self.period < self.phase_len {
            return Err(TrafficError::validation(
                "light cycle period must cover at least one phase",
            ));
        }
        Ok(())
    }

    /// Red then amber for one phase each; green holds for the rest of the period.
    pub fn phase(&self, frame: FrameCounter) -> LightPhase {
        let t = frame.phase(self.period);
        match t.checked_div(self.phase_len).unwrap_or(0) {
            0 => LightPhase::Red,
            1 => LightPhase::Amber,
            _ => LightPhase::Green,
        }
    }
}

/// Nav-bar logo: a three-lamp traffic light.
#[derive(Clone, Debug, Default)]
pub struct TrafficLightLogo {
    cycle: LightCycle,
}

impl TrafficLightLogo {
    pub fn new(cycle: LightCycle) -> TrafficResult<Self> {
        cycle.validate()?;
        Ok(Self { cycle })
    }

    pub fn cycle(&self) -> LightCycle {
        self.cycle
    }
}

impl Widget for TrafficLightLogo {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Logo
    }

    fn step(&mut self, surface: &mut Surface, ctx: &mut FrameCtx<'_>) -> TrafficResult<StepOutcome> {
        let cx = surface.canvas().center().x;
        primitives::clear(surface);
        primitives::fill_rect(surface, Rect::new(cx - 8.0, 5.0, cx + 8.0, 35.0), HOUSING);

        let lit = self.cycle.phase(ctx.frame);
        for (phase, y) in LightPhase::ORDER.into_iter().zip(LAMP_Y) {
            let center = Point::new(cx, y);
            if phase == lit {
                primitives::fill_circle(surface, center, GLOW_RADIUS, phase.color().with_alpha(0.35));
                primitives::fill_circle(surface, center, LAMP_RADIUS, phase.color());
            } else {
                primitives::fill_circle(surface, center, LAMP_RADIUS, UNLIT);
            }
        }
        Ok(StepOutcome::Continue)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widget/logo.rs"]
mod tests;
