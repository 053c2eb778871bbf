//! Event recorder threaded through the instrumented sorts.

use serde::{Deserialize, Serialize};

use crate::events::{SortEvent, Stats, Value};

/// Accumulates events and counters for a single generation pass.
///
/// Every algorithm receives the recorder by `&mut` and appends to it; the
/// event list only ever grows until [`Recorder::finish`] seals it.
#[derive(Debug, Default)]
pub struct Recorder {
    events: Vec<SortEvent>,
    stats: Stats,
}

impl Recorder {
    /// Create an empty recorder with zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current counter values.
    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Events recorded so far.
    pub fn events(&self) -> &[SortEvent] {
        &self.events
    }

    pub fn line(&mut self, line: usize) {
        self.events.push(SortEvent::Line { line });
    }

    pub fn compare(&mut self, i: usize, j: usize) {
        self.events.push(SortEvent::Compare { i, j });
    }

    pub fn swap(&mut self, i: usize, j: usize) {
        self.events.push(SortEvent::Swap { i, j });
    }

    pub fn overwrite(&mut self, i: usize, value: Value) {
        self.events.push(SortEvent::Overwrite { i, value });
    }

    /// Mark the closed range `[l, r]` as settled.
    pub fn pivot(&mut self, l: usize, r: usize) {
        self.events.push(SortEvent::Pivot {
            indices: (l..=r).collect(),
        });
    }

    /// Emit a `complexity` event with the current counters.
    pub fn snapshot(&mut self) {
        self.events.push(SortEvent::Complexity {
            comparisons: self.stats.comparisons,
            swaps: self.stats.swaps,
        });
    }

    pub fn count_compare(&mut self) {
        self.stats.compare();
    }

    pub fn count_swap(&mut self) {
        self.stats.swap();
    }

    pub fn count_read(&mut self) {
        self.stats.read();
    }

    pub fn count_writes(&mut self, count: u64) {
        self.stats.write(count);
    }

    /// Append the terminal `clear` and hand back the finished recording.
    pub fn finish(mut self) -> Recording {
        self.events.push(SortEvent::Clear);
        Recording {
            events: self.events,
            stats: self.stats,
        }
    }
}

/// The immutable output of one generation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recording {
    pub events: Vec<SortEvent>,
    pub stats: Stats,
}

impl Recording {
    /// Number of events of the given tag.
    pub fn count(&self, tag: &str) -> usize {
        self.events.iter().filter(|e| e.tag() == tag).count()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
