use std::{fmt, str::FromStr};

use crate::foundation::error::TrafficError;

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TrafficLevel {
    #[default]
    Low,
    Medium,
    High,
}

/// Fixed presentation values for one level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrafficLevelProfile {
    pub label: &'static str,
    /// Inclusive range for the displayed vehicle count.
    pub vehicles: (u32, u32),
    pub fps: u32,
    pub precision: &'static str,
    pub density_pct: u8,
    pub congestion: &'static str,
    pub congestion_pct: u8,
    /// Number of vehicles animated on the monitor road.
    pub pool_target: usize,
    pub theme: &'static str,
}

const LOW: TrafficLevelProfile = TrafficLevelProfile {
    label: "LOW TRAFFIC",
    vehicles: (8, 12),
    fps: 60,
    precision: "98.5%",
    density_pct: 25,
    congestion: "Low",
    congestion_pct: 25,
    pool_target: 5,
    theme: "low-traffic",
};

const MEDIUM: TrafficLevelProfile = TrafficLevelProfile {
    label: "MEDIUM TRAFFIC",
    vehicles: (20, 29),
    fps: 55,
    precision: "96.2%",
    density_pct: 60,
    congestion: "Medium",
    congestion_pct: 60,
    pool_target: 15,
    theme: "medium-traffic",
};

const HIGH: TrafficLevelProfile = TrafficLevelProfile {
    label: "HIGH TRAFFIC",
    vehicles: (40, 54),
    fps: 45,
    precision: "94.8%",
    density_pct: 95,
    congestion: "High",
    congestion_pct: 95,
    pool_target: 30,
    theme: "high-traffic",
};

impl TrafficLevel {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn profile(self) -> &'static TrafficLevelProfile {
        match self {
            Self::Low => &LOW,
            Self::Medium => &MEDIUM,
            Self::High => &HIGH,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for TrafficLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrafficLevel {
    type Err = TrafficError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(TrafficError::unknown_level(s)),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/traffic/level.rs"]
mod tests;
