//! Playback driver for generated sorting events.
//!
//! The driver owns the displayed sequence and the run configuration. A run
//! generates its whole event list up front, then a single task applies the
//! events one at a time with a configurable delay between them.
//!
//! # States
//!
//! ```text
//! Idle ──start──▶ Running ◀──resume── Paused
//!  │                │  └────pause───────▶│
//!  │                ▼                    │
//!  │            Finished                 │
//!  └──step──▶ Stepping ──(last)──▶ Finished
//!
//! Running | Paused | Stepping ──stop──▶ Idle
//! ```
//!
//! Control calls that do not fit the current state are ignored and return
//! `false`.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use sortviz_core::{generate, random_sequence, Algorithm, RunConfig, SortEvent, Stats, Value};
use tokio::sync::{watch, Mutex};
use tracing::{debug, info, trace};

use crate::display::DisplayState;
use crate::gate::{AbortSignal, PauseGate};
use crate::observer::{NullObserver, PlaybackObserver};

/// Lifecycle state of the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackState {
    /// No run in progress
    Idle,
    /// Events are being applied automatically
    Running,
    /// Automatic playback is suspended
    Paused,
    /// Manual one-event-at-a-time mode
    Stepping,
    /// Every event of the run has been applied
    Finished,
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Running => write!(f, "Running"),
            Self::Paused => write!(f, "Paused"),
            Self::Stepping => write!(f, "Stepping"),
            Self::Finished => write!(f, "Finished"),
        }
    }
}

/// Playback status for sending to frontends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackStatus {
    pub state: PlaybackState,
    pub cursor: usize,
    pub total: usize,
    pub progress: f64,
    pub algorithm: Algorithm,
    pub delay_ms: u64,
    /// Final counters of the generated run
    pub stats: Stats,
}

/// Signals belonging to one automatic run.
#[derive(Debug, Clone, Default)]
struct RunHandle {
    gate: Arc<PauseGate>,
    abort: AbortSignal,
}

struct Run {
    state: PlaybackState,
    config: RunConfig,
    display: DisplayState,
    events: Vec<SortEvent>,
    stats: Stats,
    cursor: usize,
    handle: Option<RunHandle>,
    rng: StdRng,
}

impl Run {
    fn status(&self) -> PlaybackStatus {
        let total = self.events.len();
        let progress = if total == 0 {
            0.0
        } else {
            self.cursor as f64 / total as f64
        };
        PlaybackStatus {
            state: self.state,
            cursor: self.cursor,
            total,
            progress,
            algorithm: self.config.algorithm(),
            delay_ms: self.config.delay().as_millis() as u64,
            stats: self.stats,
        }
    }

    /// Install a new displayed sequence and return to `Idle`.
    fn load(&mut self, values: Vec<Value>) {
        self.display = DisplayState::new(values);
        self.events.clear();
        self.stats = Stats::default();
        self.cursor = 0;
        self.handle = None;
        self.state = PlaybackState::Idle;
    }

    /// Generate the event list for the displayed sequence.
    fn prepare(&mut self) {
        let algorithm = self.config.algorithm();
        let recording = generate(&self.display.sequence, algorithm);
        debug!(
            %algorithm,
            len = self.display.sequence.len(),
            events = recording.len(),
            comparisons = recording.stats.comparisons,
            swaps = recording.stats.swaps,
            "generated events"
        );
        self.events = recording.events;
        self.stats = recording.stats;
        self.cursor = 0;
        self.display.clear_highlights();
    }
}

enum Advance {
    Applied,
    Held,
    Done,
}

struct Inner {
    run: Mutex<Run>,
    observer: Arc<dyn PlaybackObserver>,
    status: watch::Sender<PlaybackStatus>,
}

impl Inner {
    fn publish(&self, run: &Run) {
        self.status.send_replace(run.status());
    }

    /// Apply the event under the cursor, finishing the run after the last one.
    fn apply_next(&self, run: &mut Run, audible: bool) {
        let algorithm = run.config.algorithm();
        let index = run.cursor;
        if let Some(event) = run.events.get(index) {
            let cue = run.display.apply(event, algorithm);
            trace!(index, tag = event.tag(), "applied event");
            self.observer.applied(index, event);
            if let Some(cue) = cue.filter(|_| audible) {
                self.observer.cue(cue);
            }
            run.cursor += 1;
        }

        if run.cursor >= run.events.len() {
            run.state = PlaybackState::Finished;
            run.handle = None;
            info!(
                %algorithm,
                events = run.events.len(),
                comparisons = run.stats.comparisons,
                swaps = run.stats.swaps,
                "playback finished"
            );
        }
        self.publish(run);
    }

    async fn advance(&self, handle: &RunHandle) -> Advance {
        let mut run = self.run.lock().await;
        // Checked under the lock: once `stop` returns nothing more is applied
        if handle.abort.is_aborted() {
            return Advance::Done;
        }
        match run.state {
            PlaybackState::Paused => Advance::Held,
            PlaybackState::Running => {
                self.apply_next(&mut run, true);
                if run.state == PlaybackState::Finished {
                    Advance::Done
                } else {
                    Advance::Applied
                }
            }
            _ => Advance::Done,
        }
    }

    async fn play(self: Arc<Self>, handle: RunHandle, delay: Duration) {
        loop {
            handle.gate.wait(&handle.abort).await;
            if handle.abort.is_aborted() {
                break;
            }

            match self.advance(&handle).await {
                Advance::Applied => {}
                Advance::Held => continue,
                Advance::Done => break,
            }

            if handle.abort.is_aborted() {
                break;
            }
            tokio::select! {
                _ = tokio::time::sleep(delay) => {}
                _ = handle.abort.aborted() => {}
            }
        }
        trace!("playback task exited");
    }
}

/// Pausable, abortable playback of one sequence's sorting events.
///
/// Cloning yields another handle to the same driver.
#[derive(Clone)]
pub struct PlaybackDriver {
    inner: Arc<Inner>,
}

impl fmt::Debug for PlaybackDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaybackDriver")
            .field("status", &*self.inner.status.borrow())
            .finish()
    }
}

impl PlaybackDriver {
    /// Create a driver with a random sequence of the configured length.
    pub fn new(config: RunConfig) -> Self {
        Self::with_observer(config, None, Arc::new(NullObserver))
    }

    /// Create a driver with an optional RNG seed and an observer for applied
    /// events and audio cues.
    pub fn with_observer(
        config: RunConfig,
        seed: Option<u64>,
        observer: Arc<dyn PlaybackObserver>,
    ) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let sequence = random_sequence(config.length(), &mut rng);
        let run = Run {
            state: PlaybackState::Idle,
            config,
            display: DisplayState::new(sequence),
            events: Vec::new(),
            stats: Stats::default(),
            cursor: 0,
            handle: None,
            rng,
        };
        let (status, _) = watch::channel(run.status());

        Self {
            inner: Arc::new(Inner {
                run: Mutex::new(run),
                observer,
                status,
            }),
        }
    }

    /// Current status.
    pub async fn status(&self) -> PlaybackStatus {
        self.inner.run.lock().await.status()
    }

    pub async fn state(&self) -> PlaybackState {
        self.inner.run.lock().await.state
    }

    /// Current display state.
    pub async fn display(&self) -> DisplayState {
        self.inner.run.lock().await.display.clone()
    }

    pub async fn config(&self) -> RunConfig {
        self.inner.run.lock().await.config
    }

    /// The generated events of the current run.
    pub async fn events(&self) -> Vec<SortEvent> {
        self.inner.run.lock().await.events.clone()
    }

    /// Receive a status update after every applied event and transition.
    pub fn subscribe(&self) -> watch::Receiver<PlaybackStatus> {
        self.inner.status.subscribe()
    }

    /// Resolve once no run is active (`Idle` or `Finished`).
    pub async fn finished(&self) {
        let mut rx = self.subscribe();
        let _ = rx
            .wait_for(|s| matches!(s.state, PlaybackState::Idle | PlaybackState::Finished))
            .await;
    }

    /// Generate events for the displayed sequence and play them.
    ///
    /// Must be called within a Tokio runtime. Only valid from `Idle`.
    pub async fn start(&self) -> bool {
        let mut run = self.inner.run.lock().await;
        if run.state != PlaybackState::Idle {
            debug!(state = %run.state, "start ignored");
            return false;
        }

        run.prepare();
        let handle = RunHandle::default();
        run.handle = Some(handle.clone());
        run.state = PlaybackState::Running;
        let delay = run.config.delay();
        info!(algorithm = %run.config.algorithm(), events = run.events.len(), ?delay, "playback started");
        self.inner.publish(&run);
        drop(run);

        tokio::spawn(Arc::clone(&self.inner).play(handle, delay));
        true
    }

    /// Suspend automatic playback before the next event. Only valid from `Running`.
    pub async fn pause(&self) -> bool {
        let mut run = self.inner.run.lock().await;
        if run.state != PlaybackState::Running {
            debug!(state = %run.state, "pause ignored");
            return false;
        }
        if let Some(handle) = &run.handle {
            handle.gate.pause();
        }
        run.state = PlaybackState::Paused;
        info!(cursor = run.cursor, "playback paused");
        self.inner.publish(&run);
        true
    }

    /// Continue from the same cursor. Only valid from `Paused`.
    pub async fn resume(&self) -> bool {
        let mut run = self.inner.run.lock().await;
        if run.state != PlaybackState::Paused {
            debug!(state = %run.state, "resume ignored");
            return false;
        }
        run.state = PlaybackState::Running;
        if let Some(handle) = &run.handle {
            handle.gate.resume();
        }
        info!(cursor = run.cursor, "playback resumed");
        self.inner.publish(&run);
        true
    }

    /// Halt at the current cursor and discard the remaining events.
    ///
    /// Valid from `Running`, `Paused` and `Stepping`. Applied effects stay.
    pub async fn stop(&self) -> bool {
        let mut run = self.inner.run.lock().await;
        if !matches!(
            run.state,
            PlaybackState::Running | PlaybackState::Paused | PlaybackState::Stepping
        ) {
            debug!(state = %run.state, "stop ignored");
            return false;
        }
        if let Some(handle) = run.handle.take() {
            handle.abort.abort();
            handle.gate.release();
        }
        let cursor = run.cursor;
        let discarded = run.events.len() - cursor;
        run.events.truncate(cursor);
        run.display.clear_highlights();
        run.state = PlaybackState::Idle;
        info!(cursor, discarded, "playback stopped");
        self.inner.publish(&run);
        true
    }

    /// Apply exactly one event without delay or audio cue.
    ///
    /// From `Idle` this generates the event list and enters `Stepping`;
    /// the last event moves to `Finished`.
    pub async fn step(&self) -> bool {
        let mut run = self.inner.run.lock().await;
        match run.state {
            PlaybackState::Idle => {
                run.prepare();
                run.state = PlaybackState::Stepping;
                info!(algorithm = %run.config.algorithm(), events = run.events.len(), "step mode entered");
            }
            PlaybackState::Stepping => {}
            state => {
                debug!(%state, "step ignored");
                return false;
            }
        }
        self.inner.apply_next(&mut run, false);
        true
    }

    /// Replace the displayed sequence with fresh random values.
    ///
    /// Only valid when no run is active; returns to `Idle`.
    pub async fn reset_sequence(&self) -> bool {
        let mut run = self.inner.run.lock().await;
        if !matches!(run.state, PlaybackState::Idle | PlaybackState::Finished) {
            debug!(state = %run.state, "reset ignored");
            return false;
        }
        let len = run.config.length();
        let values = random_sequence(len, &mut run.rng);
        run.load(values);
        debug!(len, "sequence reset");
        self.inner.publish(&run);
        true
    }

    /// Display explicit values. Only valid when no run is active.
    pub async fn set_sequence(&self, values: Vec<Value>) -> bool {
        let mut run = self.inner.run.lock().await;
        if !matches!(run.state, PlaybackState::Idle | PlaybackState::Finished) {
            debug!(state = %run.state, "set_sequence ignored");
            return false;
        }
        run.load(values);
        self.inner.publish(&run);
        true
    }

    /// Change the run configuration. Only valid when no run is active.
    ///
    /// A new length regenerates the sequence; otherwise it is kept.
    pub async fn set_config(&self, config: RunConfig) -> bool {
        let mut run = self.inner.run.lock().await;
        if !matches!(run.state, PlaybackState::Idle | PlaybackState::Finished) {
            debug!(state = %run.state, "set_config ignored");
            return false;
        }
        let values = if config.length() != run.config.length() {
            random_sequence(config.length(), &mut run.rng)
        } else {
            run.display.sequence.clone()
        };
        run.config = config;
        run.load(values);
        info!(query = %config.to_query(), "configuration changed");
        self.inner.publish(&run);
        true
    }
}
