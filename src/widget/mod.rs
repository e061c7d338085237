//! Visual widgets. Each owns its entities and draws one frame per [`Widget::step`].

use crate::{
    foundation::core::FrameCounter,
    foundation::error::TrafficResult,
    foundation::rng::SiteRng,
    render::surface::Surface,
    traffic::sync::TrafficSynchronizer,
};

pub mod hero;
pub mod icons;
pub mod logo;
pub mod monitor;
pub mod statics;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    Hero,
    Logo,
    TrafficMonitor,
    DetectionIcon,
    TrackingIcon,
    AnalyticsIcon,
    CongestionIcon,
    Profile,
    Avatar,
    Methodology,
}

impl WidgetKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Logo => "logo",
            Self::TrafficMonitor => "traffic_monitor",
            Self::DetectionIcon => "detection_icon",
            Self::TrackingIcon => "tracking_icon",
            Self::AnalyticsIcon => "analytics_icon",
            Self::CongestionIcon => "congestion_icon",
            Self::Profile => "profile",
            Self::Avatar => "avatar",
            Self::Methodology => "methodology",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Schedule another step next tick.
    Continue,
    /// The widget has drawn its final frame.
    Done,
}

/// Per-step view of shared site state. `frame` is the stepping widget's own counter.
pub struct FrameCtx<'a> {
    pub frame: FrameCounter,
    pub traffic: &'a mut TrafficSynchronizer,
    pub rng: &'a mut SiteRng,
}

pub trait Widget {
    fn kind(&self) -> WidgetKind;

    /// Output name, unique among mounted widgets.
    fn label(&self) -> String {
        self.kind().name().to_string()
    }

    fn step(&mut self, surface: &mut Surface, ctx: &mut FrameCtx<'_>) -> TrafficResult<StepOutcome>;
}
