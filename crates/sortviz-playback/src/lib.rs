//! Sortviz Playback
//!
//! Replays generated sorting events onto an observable display at a
//! user-controlled pace.
//!
//! # Architecture
//!
//! - **Display**: the sequence, highlights, listing line and live complexity
//!   a viewer sees at the current cursor
//! - **Driver**: generates a run, then applies its events one at a time with
//!   pause, resume, stop and single-step control
//! - **Gate**: the pause gate and abort signal the playback task suspends on
//! - **Observer**: injected hook for applied events and audio cues
//!
//! # Usage
//!
//! ```ignore
//! let driver = PlaybackDriver::new(RunConfig::default());
//! driver.start().await;
//! driver.pause().await;
//! driver.resume().await;
//! driver.finished().await;
//! ```

mod display;
mod driver;
mod gate;
mod observer;

pub use display::{Cue, DisplayState};
pub use driver::{PlaybackDriver, PlaybackState, PlaybackStatus};
pub use gate::{AbortSignal, PauseGate};
pub use observer::{NullObserver, PlaybackObserver, TracingObserver};
