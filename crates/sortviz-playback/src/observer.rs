//! Hooks for side channels of playback.

use sortviz_core::SortEvent;
use tracing::trace;

use crate::display::Cue;

/// Receives every applied event and every requested audio cue.
///
/// Called while the driver holds its state lock: implementations must not
/// call back into the driver.
pub trait PlaybackObserver: Send + Sync {
    /// `event` was applied at position `index` of the event list.
    fn applied(&self, _index: usize, _event: &SortEvent) {}

    /// Automatic playback asks for an audible cue. Step mode never does.
    fn cue(&self, _cue: Cue) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl PlaybackObserver for NullObserver {}

/// Observer that logs cues at trace level, for headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl PlaybackObserver for TracingObserver {
    fn cue(&self, cue: Cue) {
        trace!(frequency = cue.frequency(), ?cue, "cue");
    }
}
