//! Composition root: config, widgets, scheduler and shared traffic state in one place.

use crate::{
    config::SiteConfig,
    foundation::core::Canvas,
    foundation::error::TrafficResult,
    foundation::rng::SiteRng,
    glue::auth::AuthState,
    render::backend::{FrameRGBA, RenderBackend},
    render::surface::Surface,
    scheduler::{AnimationScheduler, TaskHandle},
    traffic::display::{DisplaySink, LevelControls, TrafficDisplay},
    traffic::level::TrafficLevel,
    traffic::sync::TrafficSynchronizer,
    widget::{
        Widget,
        hero::HeroField,
        icons::{AnalyticsIcon, CongestionIcon, DetectionIcon, TrackingIcon},
        logo::TrafficLightLogo,
        monitor::TrafficMonitor,
        statics::{Avatar, MethodologyChart, ProfileIcon},
    },
};

/// Bounds used for pool spawns when the monitor is not mounted.
const FALLBACK_MONITOR: Canvas = Canvas {
    width: 800,
    height: 450,
};

/// One widget's rendered frame.
#[derive(Clone, Debug)]
pub struct RenderedWidget {
    pub label: String,
    pub frame: FrameRGBA,
}

pub struct Site {
    config: SiteConfig,
    scheduler: AnimationScheduler,
    traffic: TrafficSynchronizer,
    rng: SiteRng,
    auth: AuthState,
    handles: Vec<(String, TaskHandle)>,
    ticks: u64,
    /// Tick count at which the deferred Low sync fires, until it has.
    initial_sync_at: Option<u64>,
}

impl Site {
    pub fn new(config: SiteConfig) -> TrafficResult<Self> {
        config.validate()?;
        let seed = config.effective_seed();
        let mut rng = SiteRng::from_seed_u64(seed);
        let monitor = config.sizes.monitor.filter(|c| !c.is_empty()).unwrap_or(FALLBACK_MONITOR);
        let traffic = TrafficSynchronizer::new(monitor, &mut rng.0);
        let initial_sync_at = Some(config.initial_sync_ticks());
        tracing::debug!(seed, ?initial_sync_at, "site created");

        let mut site = Self {
            config,
            scheduler: AnimationScheduler::new(),
            traffic,
            rng,
            auth: AuthState::default(),
            handles: Vec::new(),
            ticks: 0,
            initial_sync_at,
        };
        site.mount_all()?;
        Ok(site)
    }

    fn mount_all(&mut self) -> TrafficResult<()> {
        let sizes = self.config.sizes.clone();
        let cycle = self.config.light_cycle;

        let logo = TrafficLightLogo::new(cycle)?;
        self.mount(sizes.logo, move |_, _| Box::new(logo));
        self.mount(sizes.profile, |_, _| Box::new(ProfileIcon));
        self.mount(sizes.hero, |c, rng| Box::new(HeroField::new(c, &mut rng.0)));
        self.mount(sizes.monitor, |_, _| Box::new(TrafficMonitor::new()));
        self.mount(sizes.icon, |_, _| Box::new(DetectionIcon));
        self.mount(sizes.icon, |c, rng| Box::new(TrackingIcon::new(c, &mut rng.0)));
        self.mount(sizes.icon, |_, _| Box::new(AnalyticsIcon::new()));
        self.mount(sizes.icon, |_, _| Box::new(CongestionIcon::new()));
        for name in self.config.team.clone() {
            self.mount(sizes.avatar, move |_, _| Box::new(Avatar::new(name)));
        }
        self.mount(sizes.methodology, |_, _| Box::new(MethodologyChart));
        Ok(())
    }

    /// Build and mount a widget if it has a usable surface.
    fn mount(
        &mut self,
        size: Option<Canvas>,
        build: impl FnOnce(Canvas, &mut SiteRng) -> Box<dyn Widget>,
    ) {
        let surface = size.and_then(|c| Surface::new(c).ok());
        let widget = match surface.as_ref() {
            Some(s) => build(s.canvas(), &mut self.rng),
            None => {
                tracing::debug!(?size, "widget has no drawing surface, skipped");
                return;
            }
        };
        if let Some(handle) = self.scheduler.mount(widget, surface)
            && let Some(label) = self.scheduler.label(handle.id())
        {
            self.handles.push((label.to_string(), handle));
        }
    }

    /// One display refresh.
    pub fn tick(&mut self) {
        self.scheduler.tick(&mut self.traffic, &mut self.rng);
        self.ticks += 1;
        if let Some(at) = self.initial_sync_at
            && self.ticks >= at
        {
            self.initial_sync_at = None;
            self.traffic.set_level(TrafficLevel::Low, &mut self.rng.0);
        }
    }

    pub fn run(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.tick();
        }
    }

    /// A level button press. Supersedes a still-pending initial sync.
    pub fn select_level(&mut self, level: TrafficLevel) -> TrafficDisplay {
        self.initial_sync_at = None;
        self.traffic.set_level(level, &mut self.rng.0)
    }

    pub fn subscribe(&mut self, sink: Box<dyn DisplaySink>) {
        self.traffic.subscribe(sink);
    }

    /// Resize the widget mounted under `label`. Returns false if no such widget.
    pub fn resize(&mut self, label: &str, width: u32, height: u32) -> TrafficResult<bool> {
        let Some(handle) = self.handle(label).cloned() else {
            return Ok(false);
        };
        self.scheduler.resize(&handle, width, height)?;
        Ok(true)
    }

    pub fn handle(&self, label: &str) -> Option<&TaskHandle> {
        self.handles
            .iter()
            .find(|(l, h)| l == label && !h.is_stopped())
            .map(|(_, h)| h)
    }

    /// Labels of widgets still mounted, in mount order.
    pub fn widgets(&self) -> Vec<&str> {
        self.handles
            .iter()
            .filter(|(_, h)| !h.is_stopped())
            .map(|(l, _)| l.as_str())
            .collect()
    }

    /// Present every mounted widget through `backend`.
    pub fn render(&mut self, backend: &mut dyn RenderBackend) -> TrafficResult<Vec<RenderedWidget>> {
        for id in self.scheduler.take_released() {
            backend.release(id);
        }
        self.handles.retain(|(_, h)| !h.is_stopped());

        let frames = self.scheduler.drain_frames();
        let rendered = backend.render_all(frames)?;
        Ok(rendered
            .into_iter()
            .map(|(id, frame)| RenderedWidget {
                label: self
                    .scheduler
                    .label(id)
                    .map_or_else(|| format!("surface_{}", id.0), str::to_string),
                frame,
            })
            .collect())
    }

    pub fn level(&self) -> TrafficLevel {
        self.traffic.level()
    }

    pub fn display(&self) -> Option<&TrafficDisplay> {
        self.traffic.last_display()
    }

    pub fn controls(&self) -> LevelControls {
        self.traffic.controls()
    }

    pub fn traffic(&self) -> &TrafficSynchronizer {
        &self.traffic
    }

    pub fn auth(&self) -> &AuthState {
        &self.auth
    }

    pub fn auth_mut(&mut self) -> &mut AuthState {
        &mut self.auth
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }
}
