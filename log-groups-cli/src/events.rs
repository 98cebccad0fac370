//! Event stream input
//!
//! Reads the newline-delimited JSON stream emitted by the automation run and
//! feeds it through a [`GroupedRenderer`]. One record per line, tagged by
//! `"event"`:
//!
//! ```text
//! {"event": "play_start", "name": "Deploy"}
//! {"event": "task_start", "name": "Install packages", "role": "web"}
//! {"event": "output", "line": "ok: [host1]"}
//! {"event": "stats", "hosts": {"host1": {"ok": 3, "changed": 1}}}
//! ```

use log_groups::{GroupedRenderer, HostStats, LifecycleEvent, LineSink, Renderer};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io::BufRead;

/// Errors raised while reading or annotating the stream
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    #[error("Failed to read input at line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid event at line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write output: {0}")]
    Write(#[from] log_groups::GroupError),
}

/// One record of the input stream
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum StreamRecord {
    PlayStart {
        #[serde(default)]
        name: String,
    },
    TaskStart {
        #[serde(default)]
        name: String,
        #[serde(default)]
        role: Option<String>,
    },
    Output {
        line: String,
    },
    Stats {
        #[serde(default)]
        hosts: BTreeMap<String, HostStats>,
    },
}

/// A record sorted into what the grouped renderer consumes
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Event(LifecycleEvent),
    Line(String),
}

impl From<StreamRecord> for Item {
    fn from(record: StreamRecord) -> Self {
        match record {
            StreamRecord::PlayStart { name } => Item::Event(LifecycleEvent::PlayStart { name }),
            StreamRecord::TaskStart { name, role } => Item::Event(LifecycleEvent::TaskStart {
                name,
                // An empty role is the same as no role
                role: role.filter(|r| !r.is_empty()),
            }),
            StreamRecord::Output { line } => Item::Line(line),
            StreamRecord::Stats { hosts } => Item::Event(LifecycleEvent::RunStats { hosts }),
        }
    }
}

/// Iterator over the records of an input stream; blank lines are skipped
pub struct EventReader<R: BufRead> {
    reader: R,
    line_no: usize,
    buf: String,
}

impl<R: BufRead> EventReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_no: 0,
            buf: String::new(),
        }
    }
}

impl<R: BufRead> Iterator for EventReader<R> {
    type Item = Result<Item, StreamError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            self.line_no += 1;

            match self.reader.read_line(&mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(source) => {
                    return Some(Err(StreamError::Read {
                        line: self.line_no,
                        source,
                    }))
                }
            }

            let text = self.buf.trim();
            if text.is_empty() {
                continue;
            }

            let parsed = serde_json::from_str::<StreamRecord>(text)
                .map(Item::from)
                .map_err(|source| StreamError::Parse {
                    line: self.line_no,
                    source,
                });
            return Some(parsed);
        }
    }
}

/// Totals for one annotated stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamSummary {
    pub events: usize,
    pub lines: usize,
    pub finished: bool,
}

/// Run every record of `reader` through the grouped renderer
///
/// A stream that ends without a stats record leaves its last group open;
/// that is reported, not repaired.
pub fn annotate<R, S, T>(
    reader: R,
    grouped: &mut GroupedRenderer<S, T>,
) -> Result<StreamSummary, StreamError>
where
    R: BufRead,
    S: LineSink,
    T: Renderer,
{
    let mut summary = StreamSummary::default();

    for item in EventReader::new(reader) {
        match item? {
            Item::Event(event) => {
                log::trace!("Event: {:?}", event);
                summary.finished = matches!(event, LifecycleEvent::RunStats { .. });
                grouped.handle(&event)?;
                summary.events += 1;
            }
            Item::Line(line) => {
                grouped.passthrough(&line)?;
                summary.lines += 1;
            }
        }
    }

    if !summary.finished {
        log::warn!(
            "Input ended without a stats event{}",
            if grouped.tracker().is_group_open() {
                "; last group left open"
            } else {
                ""
            }
        );
    }

    Ok(summary)
}
