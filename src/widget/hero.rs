use rand::Rng;

use crate::{
    entity::particle::Particle,
    foundation::core::{Canvas, Rgba8},
    foundation::error::TrafficResult,
    render::{primitives, surface::Surface},
    widget::{FrameCtx, StepOutcome, Widget, WidgetKind},
};

pub const PARTICLES: usize = 100;

/// Trails come from washing the previous frame instead of clearing it.
const WASH: Rgba8 = Rgba8::rgba(15, 23, 42, 26);

/// Hero banner: a field of particles drifting toward the viewer.
#[derive(Clone, Debug)]
pub struct HeroField {
    particles: Vec<Particle>,
}

impl HeroField {
    pub fn new<R: Rng + ?Sized>(canvas: Canvas, rng: &mut R) -> Self {
        Self::with_count(PARTICLES, canvas, rng)
    }

    pub fn with_count<R: Rng + ?Sized>(count: usize, canvas: Canvas, rng: &mut R) -> Self {
        Self {
            particles: (0..count).map(|_| Particle::spawn(canvas, rng)).collect(),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

impl Widget for HeroField {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Hero
    }

    fn step(&mut self, surface: &mut Surface, ctx: &mut FrameCtx<'_>) -> TrafficResult<StepOutcome> {
        let canvas = surface.canvas();
        primitives::fade(surface, WASH);
        for p in &mut self.particles {
            p.update(canvas, &mut ctx.rng.0);
        }
        for p in &self.particles {
            p.draw(surface);
        }
        Ok(StepOutcome::Continue)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widget/hero.rs"]
mod tests;
