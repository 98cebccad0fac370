//! Grouping state machine
//!
//! The tracker is fed lifecycle events in the order they happen and decides,
//! event by event, whether to close the current group and whether to open a
//! new one. In role mode the grouping key is the role owning each task; in
//! play mode every play start closes the previous group and opens its own.
//!
//! Role mode states are `Closed` and `Open(role)`; every run that reaches
//! [`GroupTracker::on_run_stats`] ends `Closed`.

use crate::config::GroupConfig;
use crate::sink::LineSink;
use crate::types::{LifecycleEvent, Result};

/// Emits start/end markers around plays or roles
pub struct GroupTracker<S: LineSink> {
    config: GroupConfig,
    sink: S,
    /// True while a start marker is unmatched
    group_open: bool,
    /// Role of the last task seen; empty means "no role"
    current_key: String,
}

impl<S: LineSink> GroupTracker<S> {
    /// Create a tracker with nothing open
    pub fn new(config: GroupConfig, sink: S) -> Self {
        Self {
            config,
            sink,
            group_open: false,
            current_key: String::new(),
        }
    }

    /// A play begins: close whatever is open, forget the current role, and
    /// in play mode open a group for this play
    pub fn on_play_start(&mut self, play_name: &str) -> Result<()> {
        self.close_group()?;
        self.current_key.clear();

        if self.config.group_by_play {
            self.open_group(&format!("PLAY [{}]", play_name))?;
        }
        Ok(())
    }

    /// A task begins: in role mode, switch groups when the owning role
    /// differs from the previous task's role (`""` for no role)
    pub fn on_task_start(&mut self, role_name: &str) -> Result<()> {
        if self.config.group_by_play || role_name == self.current_key {
            return Ok(());
        }

        self.close_group()?;
        if !role_name.is_empty() {
            self.open_group(&format!("ROLE [{}]", role_name))?;
        }

        // Tracked even when grouping is disabled; only emission is gated
        self.current_key.clear();
        self.current_key.push_str(role_name);
        Ok(())
    }

    /// The run is over: close the last group, if any
    pub fn on_run_stats(&mut self) -> Result<()> {
        self.close_group()
    }

    /// Dispatch a lifecycle event to the matching handler
    pub fn observe(&mut self, event: &LifecycleEvent) -> Result<()> {
        match event {
            LifecycleEvent::PlayStart { name } => self.on_play_start(name),
            LifecycleEvent::TaskStart { .. } => self.on_task_start(event.role_name()),
            LifecycleEvent::RunStats { .. } => self.on_run_stats(),
        }
    }

    pub fn is_group_open(&self) -> bool {
        self.group_open
    }

    pub fn current_key(&self) -> &str {
        &self.current_key
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn open_group(&mut self, label: &str) -> Result<()> {
        if !self.config.grouping_enabled {
            return Ok(());
        }

        log::debug!("Opening group: {}", label);
        let line = self.config.markers.start_line(label);
        self.sink.emit(&line)?;
        self.group_open = true;
        Ok(())
    }

    fn close_group(&mut self) -> Result<()> {
        if !self.group_open {
            return Ok(());
        }

        log::debug!("Closing group");
        self.sink.emit(self.config.markers.end_line())?;
        self.group_open = false;
        Ok(())
    }
}
