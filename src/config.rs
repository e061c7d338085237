use std::path::{Path, PathBuf};

use crate::{
    foundation::core::Canvas,
    foundation::error::{TrafficError, TrafficResult},
    foundation::rng::{DEFAULT_SEED, SiteRng},
    render::surface::MAX_SIDE,
    widget::logo::LightCycle,
};

/// Surface size per widget. `None` (or a zero size) leaves that widget unmounted.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WidgetSizes {
    pub hero: Option<Canvas>,
    pub logo: Option<Canvas>,
    pub monitor: Option<Canvas>,
    /// Shared by the four feature icons.
    pub icon: Option<Canvas>,
    pub profile: Option<Canvas>,
    pub avatar: Option<Canvas>,
    pub methodology: Option<Canvas>,
}

impl Default for WidgetSizes {
    fn default() -> Self {
        let size = |width, height| Some(Canvas { width, height });
        Self {
            hero: size(1280, 720),
            logo: size(40, 40),
            monitor: size(800, 450),
            icon: size(80, 80),
            profile: size(40, 40),
            avatar: size(120, 120),
            methodology: size(400, 300),
        }
    }
}

impl WidgetSizes {
    fn entries(&self) -> [(&'static str, Option<Canvas>); 7] {
        [
            ("hero", self.hero),
            ("logo", self.logo),
            ("monitor", self.monitor),
            ("icon", self.icon),
            ("profile", self.profile),
            ("avatar", self.avatar),
            ("methodology", self.methodology),
        ]
    }

    pub fn validate(&self) -> TrafficResult<()> {
        for (name, size) in self.entries() {
            if let Some(c) = size
                && (c.width > MAX_SIDE || c.height > MAX_SIDE)
            {
                return Err(TrafficError::config(format!(
                    "sizes.{name}: {}x{} exceeds {MAX_SIDE} pixels per side",
                    c.width, c.height
                )));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub sizes: WidgetSizes,
    /// Names on the team avatars, one avatar each.
    pub team: Vec<String>,
    pub seed: u64,
    /// Display refresh rate that `Site::tick` stands in for.
    pub refresh_hz: u32,
    /// Delay before the first traffic display sync.
    pub initial_sync_delay_ms: u64,
    pub light_cycle: LightCycle,
    /// TTF/OTF used for vehicle labels, initials and flowchart text.
    pub font_path: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            sizes: WidgetSizes::default(),
            team: vec![
                "Alex Morgan".to_string(),
                "Sam Rivera".to_string(),
                "Jordan Lee".to_string(),
            ],
            seed: DEFAULT_SEED,
            refresh_hz: 60,
            initial_sync_delay_ms: 500,
            light_cycle: LightCycle::default(),
            font_path: None,
        }
    }
}

impl SiteConfig {
    pub fn validate(&self) -> TrafficResult<()> {
        if self.refresh_hz == 0 {
            return Err(TrafficError::config("refresh_hz must be > 0"));
        }
        self.sizes.validate()?;
        self.light_cycle
            .validate()
            .map_err(|e| TrafficError::config(format!("light_cycle: {e}")))?;
        if let Some(path) = &self.font_path
            && path.as_os_str().is_empty()
        {
            return Err(TrafficError::config("font_path must not be empty"));
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> TrafficResult<Self> {
        let cfg: Self = serde_json::from_str(json)
            .map_err(|e| TrafficError::config(format!("parse site config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_path(path: &Path) -> TrafficResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            TrafficError::config(format!("read site config '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&json)
    }

    /// Configured seed unless `TRAFFIC_AI_SEED` overrides it.
    pub fn effective_seed(&self) -> u64 {
        SiteRng::seed_from_env(self.seed)
    }

    /// Ticks until the initial sync, rounded up so the delay is never shortened.
    pub fn initial_sync_ticks(&self) -> u64 {
        let hz = u64::from(self.refresh_hz);
        (self.initial_sync_delay_ms.saturating_mul(hz)).div_ceil(1000)
    }

    pub fn read_font(&self) -> TrafficResult<Option<Vec<u8>>> {
        let Some(path) = &self.font_path else {
            return Ok(None);
        };
        std::fs::read(path)
            .map(Some)
            .map_err(|e| TrafficError::config(format!("read font '{}': {e}", path.display())))
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
