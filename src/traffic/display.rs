use std::sync::mpsc;

use crate::traffic::level::TrafficLevel;

/// Everything the monitor readout shows for one level selection.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TrafficDisplay {
    pub level: TrafficLevel,
    pub status_text: String,
    pub vehicle_count: u32,
    pub fps: u32,
    pub precision: String,
    /// Density readout, e.g. `"60%"`.
    pub density_text: String,
    pub congestion_text: String,
    pub density_bar_pct: u8,
    pub congestion_bar_pct: u8,
    pub theme: String,
}

/// Something that renders [`TrafficDisplay`] records.
pub trait DisplaySink {
    fn show(&mut self, display: &TrafficDisplay);
}

/// In-memory sink keeping the latest record.
#[derive(Clone, Debug, Default)]
pub struct DisplayBoard {
    last: Option<TrafficDisplay>,
    updates: usize,
}

impl DisplayBoard {
    pub fn last(&self) -> Option<&TrafficDisplay> {
        self.last.as_ref()
    }

    pub fn updates(&self) -> usize {
        self.updates
    }
}

impl DisplaySink for DisplayBoard {
    fn show(&mut self, display: &TrafficDisplay) {
        self.last = Some(display.clone());
        self.updates += 1;
    }
}

impl DisplaySink for mpsc::Sender<TrafficDisplay> {
    fn show(&mut self, display: &TrafficDisplay) {
        // A dropped receiver just means nobody is watching anymore.
        let _ = self.send(display.clone());
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct LevelButton {
    pub level: TrafficLevel,
    pub active: bool,
}

/// State of the level-selection buttons; exactly one is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct LevelControls {
    pub buttons: [LevelButton; 3],
}

impl LevelControls {
    pub fn for_level(active: TrafficLevel) -> Self {
        Self {
            buttons: TrafficLevel::ALL.map(|level| LevelButton {
                level,
                active: level == active,
            }),
        }
    }

    pub fn active(&self) -> TrafficLevel {
        self.buttons
            .iter()
            .find(|b| b.active)
            .map(|b| b.level)
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/traffic/display.rs"]
mod tests;
