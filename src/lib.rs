//! Headless animation core for the traffic-AI product site.
//!
//! Every canvas on the page is a [`Widget`] that records draw ops into its own [`Surface`]
//! once per display refresh. An [`AnimationScheduler`] steps the widgets, a
//! [`TrafficSynchronizer`] owns the selected [`TrafficLevel`] and the monitor's vehicle pool,
//! and a [`RenderBackend`] turns the recorded ops into RGBA frames.
//!
//! - Build a [`Site`] from a [`SiteConfig`]
//! - Call [`Site::tick`] once per refresh and [`Site::select_level`] on button presses
//! - Present with [`Site::render`] on a [`CpuBackend`]
#![forbid(unsafe_code)]

mod foundation;

pub mod config;
pub mod entity;
pub mod glue;
pub mod render;
pub mod scheduler;
pub mod site;
pub mod traffic;
pub mod widget;

pub use crate::foundation::core::{Canvas, FrameCounter, Point, Rect, Rgba8, Vec2};
pub use crate::foundation::error::{TrafficError, TrafficResult};
pub use crate::foundation::rng::{DEFAULT_SEED, SEED_ENV, SiteRng};

pub use crate::config::{SiteConfig, WidgetSizes};
pub use crate::glue::auth::{AuthState, AuthView, User};
pub use crate::glue::nav::{Section, active_section, initials, navbar_scrolled};
pub use crate::render::backend::{
    BackendKind, FrameRGBA, RenderBackend, RenderSettings, SurfaceFrame, create_backend,
};
pub use crate::render::cpu::CpuBackend;
pub use crate::render::ops::{Dash, DrawOp, LinearGradient, Paint, TextAlign};
pub use crate::render::surface::{Surface, SurfaceId};
pub use crate::scheduler::{AnimationScheduler, TaskHandle};
pub use crate::site::{RenderedWidget, Site};
pub use crate::traffic::display::{
    DisplayBoard, DisplaySink, LevelButton, LevelControls, TrafficDisplay,
};
pub use crate::traffic::level::{TrafficLevel, TrafficLevelProfile};
pub use crate::traffic::pool::VehiclePool;
pub use crate::traffic::sync::TrafficSynchronizer;
pub use crate::widget::{FrameCtx, StepOutcome, Widget, WidgetKind};
