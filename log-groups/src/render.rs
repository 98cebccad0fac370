//! Renderer composition
//!
//! The human-readable output of a run is produced by a [`Renderer`]. A
//! [`GroupedRenderer`] wraps one with a [`GroupTracker`] so that the markers
//! for an event always land in the sink before that event's rendered output.

use crate::config::GroupConfig;
use crate::sink::LineSink;
use crate::tracker::GroupTracker;
use crate::types::{LifecycleEvent, Result};

/// Downstream output for lifecycle events
pub trait Renderer {
    /// Render an event into zero or more lines
    fn render(&mut self, event: &LifecycleEvent, out: &mut dyn LineSink) -> Result<()>;
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, event: &LifecycleEvent, out: &mut dyn LineSink) -> Result<()> {
        (**self).render(event, out)
    }
}

/// Renderer that prints nothing (markers only)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _event: &LifecycleEvent, _out: &mut dyn LineSink) -> Result<()> {
        Ok(())
    }
}

/// Group tracker composed in front of a renderer
pub struct GroupedRenderer<S: LineSink, R: Renderer> {
    tracker: GroupTracker<S>,
    renderer: R,
}

impl<S: LineSink, R: Renderer> GroupedRenderer<S, R> {
    pub fn new(config: GroupConfig, sink: S, renderer: R) -> Self {
        Self {
            tracker: GroupTracker::new(config, sink),
            renderer,
        }
    }

    /// Emit markers for the event, then render it into the same sink
    pub fn handle(&mut self, event: &LifecycleEvent) -> Result<()> {
        self.tracker.observe(event)?;
        self.renderer.render(event, self.tracker.sink_mut())
    }

    /// Forward a raw output line; grouping state is untouched
    pub fn passthrough(&mut self, line: &str) -> Result<()> {
        self.tracker.sink_mut().emit(line)
    }

    pub fn tracker(&self) -> &GroupTracker<S> {
        &self.tracker
    }

    /// Hand back the sink once the run is over
    pub fn finish(self) -> S {
        self.tracker.into_sink()
    }
}
