use std::fmt;

use rand::Rng;

use crate::{
    foundation::core::Canvas,
    traffic::display::{DisplaySink, LevelControls, TrafficDisplay},
    traffic::level::TrafficLevel,
    traffic::pool::VehiclePool,
};

/// Owns the selected level and the monitor's vehicle pool, and fans display updates out to
/// subscribed sinks.
pub struct TrafficSynchronizer {
    level: TrafficLevel,
    pool: VehiclePool,
    /// Bounds new vehicles spawn into; follows the monitor surface.
    monitor: Canvas,
    sinks: Vec<Box<dyn DisplaySink>>,
    last: Option<TrafficDisplay>,
}

impl TrafficSynchronizer {
    /// Starts at Low with the pool already sized, so the road animates before the first sync.
    pub fn new<R: Rng + ?Sized>(monitor: Canvas, rng: &mut R) -> Self {
        let level = TrafficLevel::default();
        let mut pool = VehiclePool::new();
        pool.resize_to(level.profile().pool_target, monitor, rng);
        Self {
            level,
            pool,
            monitor,
            sinks: Vec::new(),
            last: None,
        }
    }

    pub fn level(&self) -> TrafficLevel {
        self.level
    }

    pub fn pool(&self) -> &VehiclePool {
        &self.pool
    }

    pub fn pool_mut(&mut self) -> &mut VehiclePool {
        &mut self.pool
    }

    pub fn monitor_canvas(&self) -> Canvas {
        self.monitor
    }

    pub fn set_monitor_canvas(&mut self, canvas: Canvas) {
        self.monitor = canvas;
    }

    pub fn controls(&self) -> LevelControls {
        LevelControls::for_level(self.level)
    }

    pub fn last_display(&self) -> Option<&TrafficDisplay> {
        self.last.as_ref()
    }

    pub fn subscribe(&mut self, sink: Box<dyn DisplaySink>) {
        self.sinks.push(sink);
    }

    /// Switch level, resize the pool, and publish a fresh readout.
    ///
    /// The vehicle count is drawn again on every call, even when the level is unchanged.
    #[tracing::instrument(skip(self, rng), fields(previous = %self.level))]
    pub fn set_level<R: Rng + ?Sized>(&mut self, level: TrafficLevel, rng: &mut R) -> TrafficDisplay {
        self.level = level;
        let profile = level.profile();
        self.pool.resize_to(profile.pool_target, self.monitor, rng);

        let (lo, hi) = profile.vehicles;
        let display = TrafficDisplay {
            level,
            status_text: profile.label.to_string(),
            vehicle_count: rng.gen_range(lo..=hi),
            fps: profile.fps,
            precision: profile.precision.to_string(),
            density_text: format!("{}%", profile.density_pct),
            congestion_text: profile.congestion.to_string(),
            density_bar_pct: profile.density_pct,
            congestion_bar_pct: profile.congestion_pct,
            theme: profile.theme.to_string(),
        };
        let vehicles = display.vehicle_count;
        tracing::debug!(
            pool = self.pool.len(),
            vehicles,
            sinks = self.sinks.len(),
            "traffic display synced"
        );

        for sink in &mut self.sinks {
            sink.show(&display);
        }
        self.last = Some(display.clone());
        display
    }
}

impl fmt::Debug for TrafficSynchronizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrafficSynchronizer")
            .field("level", &self.level)
            .field("pool", &self.pool.len())
            .field("monitor", &self.monitor)
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/traffic/sync.rs"]
mod tests;
