//! Display-refresh driver: one repeating task per mounted widget.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use crate::{
    foundation::core::FrameCounter,
    foundation::error::TrafficResult,
    foundation::rng::SiteRng,
    render::backend::SurfaceFrame,
    render::surface::{Surface, SurfaceId},
    traffic::sync::TrafficSynchronizer,
    widget::{FrameCtx, StepOutcome, Widget},
};

/// Cancellation handle returned by [`AnimationScheduler::mount`].
#[derive(Clone, Debug)]
pub struct TaskHandle {
    id: SurfaceId,
    stopped: Arc<AtomicBool>,
}

impl TaskHandle {
    pub fn id(&self) -> SurfaceId {
        self.id
    }

    /// The task will not step again; it is dropped on the next tick.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }
}

struct Task {
    id: SurfaceId,
    label: String,
    widget: Box<dyn Widget>,
    surface: Surface,
    frame: FrameCounter,
    stopped: Arc<AtomicBool>,
    finished: bool,
}

impl Task {
    fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }
}

#[derive(Default)]
pub struct AnimationScheduler {
    tasks: Vec<Task>,
    next_id: u32,
    released: Vec<SurfaceId>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start stepping `widget` every tick. Without a surface the widget is skipped.
    pub fn mount(&mut self, widget: Box<dyn Widget>, surface: Option<Surface>) -> Option<TaskHandle> {
        let label = widget.label();
        let Some(surface) = surface else {
            tracing::debug!(widget = %label, "no drawing surface, widget not mounted");
            return None;
        };

        let id = SurfaceId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        let stopped = Arc::new(AtomicBool::new(false));
        tracing::debug!(widget = %label, surface = id.0, "widget mounted");
        self.tasks.push(Task {
            id,
            label,
            widget,
            surface,
            frame: FrameCounter::default(),
            stopped: Arc::clone(&stopped),
            finished: false,
        });
        Some(TaskHandle { id, stopped })
    }

    /// Run one step of every live task, in mount order.
    pub fn tick(&mut self, traffic: &mut TrafficSynchronizer, rng: &mut SiteRng) {
        let released = &mut self.released;
        self.tasks.retain(|t| {
            if t.is_stopped() {
                released.push(t.id);
                false
            } else {
                true
            }
        });

        for task in &mut self.tasks {
            if task.finished {
                continue;
            }
            let mut ctx = FrameCtx {
                frame: task.frame,
                traffic: &mut *traffic,
                rng: &mut *rng,
            };
            match task.widget.step(&mut task.surface, &mut ctx) {
                Ok(StepOutcome::Continue) => task.frame.advance(),
                Ok(StepOutcome::Done) => {
                    task.frame.advance();
                    task.finished = true;
                }
                Err(err) => {
                    tracing::warn!(widget = %task.label, error = %err, "widget step failed, task stopped");
                    task.stopped.store(true, Ordering::Relaxed);
                }
            }
        }
    }

    /// Resize a mounted widget's surface. A finished widget draws again at the new size.
    pub fn resize(&mut self, handle: &TaskHandle, width: u32, height: u32) -> TrafficResult<()> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == handle.id) else {
            return Ok(());
        };
        let before = task.surface.canvas();
        task.surface.resize(width, height)?;
        if task.surface.canvas() != before {
            task.finished = false;
        }
        Ok(())
    }

    /// Hand every live surface's pending ops to the renderer.
    pub fn drain_frames(&mut self) -> Vec<SurfaceFrame> {
        self.tasks
            .iter_mut()
            .filter(|t| !t.is_stopped())
            .map(|t| SurfaceFrame {
                id: t.id,
                canvas: t.surface.canvas(),
                ops: t.surface.take_ops(),
            })
            .collect()
    }

    /// Surfaces whose tasks were dropped since the last call.
    pub fn take_released(&mut self) -> Vec<SurfaceId> {
        std::mem::take(&mut self.released)
    }

    pub fn label(&self, id: SurfaceId) -> Option<&str> {
        self.tasks
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.label.as_str())
    }

    pub fn frame(&self, id: SurfaceId) -> Option<FrameCounter> {
        self.tasks.iter().find(|t| t.id == id).map(|t| t.frame)
    }

    pub fn surface(&self, id: SurfaceId) -> Option<&Surface> {
        self.tasks.iter().find(|t| t.id == id).map(|t| &t.surface)
    }

    /// Tasks still scheduled to step (not stopped, not finished).
    pub fn running(&self) -> usize {
        self.tasks
            .iter()
            .filter(|t| !t.finished && !t.is_stopped())
            .count()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
#[path = "../tests/unit/scheduler.rs"]
mod tests;
