use rand::Rng;

use crate::{
    entity::vehicle::Vehicle,
    foundation::core::Canvas,
    render::surface::Surface,
};

/// Vehicles animated on the monitor road. The length tracks the active level's target.
#[derive(Clone, Debug, Default)]
pub struct VehiclePool {
    vehicles: Vec<Vehicle>,
}

impl VehiclePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grow by spawning at the end or shrink by dropping from the end.
    pub fn resize_to<R: Rng + ?Sized>(&mut self, target: usize, canvas: Canvas, rng: &mut R) {
        if self.vehicles.len() > target {
            self.vehicles.truncate(target);
            return;
        }
        while self.vehicles.len() < target {
            self.vehicles.push(Vehicle::spawn(canvas, rng));
        }
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn update<R: Rng + ?Sized>(&mut self, canvas: Canvas, rng: &mut R) {
        for v in &mut self.vehicles {
            v.update(canvas, rng);
        }
    }

    pub fn draw(&self, surface: &mut Surface) {
        for v in &self.vehicles {
            v.draw(surface);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/traffic/pool.rs"]
mod tests;
