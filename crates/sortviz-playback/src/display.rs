//! Observable display state rebuilt event by event.

use serde::{Deserialize, Serialize};
use sortviz_core::{estimate, Algorithm, SortEvent, Value};

/// An audible cue requested while applying an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Cue {
    /// Two bars are being compared; `value` is the first bar's height
    Compare { value: Value },
    /// Two bars exchanged places; `value` is the height now at the first slot
    Swap { value: Value },
}

impl Cue {
    /// Tone frequency in Hz, scaled by bar height.
    pub fn frequency(&self) -> u32 {
        match self {
            Cue::Compare { value } => 200 + value,
            Cue::Swap { value } => 400 + value,
        }
    }
}

/// What a viewer sees at a given playback cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayState {
    /// Displayed sequence values
    pub sequence: Vec<Value>,
    /// Positions currently being compared
    pub compared: Vec<usize>,
    /// Positions marked settled by the last `pivot`
    pub settled: Vec<usize>,
    /// Listing line currently highlighted
    pub current_line: Option<usize>,
    /// Human-readable live big-O estimate
    pub live_complexity: Option<String>,
}

impl DisplayState {
    /// Fresh display for a sequence, with nothing highlighted.
    pub fn new(sequence: Vec<Value>) -> Self {
        Self {
            sequence,
            ..Default::default()
        }
    }

    /// Rebuild the display from `initial` by applying the first `up_to` events.
    pub fn from_events(
        initial: &[Value],
        events: &[SortEvent],
        up_to: usize,
        algorithm: Algorithm,
    ) -> Self {
        let mut display = Self::new(initial.to_vec());
        for event in events.iter().take(up_to) {
            display.apply(event, algorithm);
        }
        display
    }

    /// Drop every highlight, keeping the sequence.
    pub fn clear_highlights(&mut self) {
        self.compared.clear();
        self.settled.clear();
        self.current_line = None;
        self.live_complexity = None;
    }

    /// Apply one event and report the cue it would sound.
    ///
    /// Out-of-range positions and unknown events leave the display unchanged.
    pub fn apply(&mut self, event: &SortEvent, algorithm: Algorithm) -> Option<Cue> {
        let len = self.sequence.len();
        match event {
            SortEvent::Compare { i, j } => {
                self.compared = vec![*i, *j];
                self.sequence.get(*i).map(|&value| Cue::Compare { value })
            }
            SortEvent::Swap { i, j } if *i < len && *j < len => {
                self.sequence.swap(*i, *j);
                Some(Cue::Swap {
                    value: self.sequence[*i],
                })
            }
            SortEvent::Overwrite { i, value } if *i < len => {
                self.sequence[*i] = *value;
                None
            }
            SortEvent::Pivot { indices } => {
                self.settled = indices.clone();
                None
            }
            SortEvent::Clear => {
                self.compared.clear();
                self.settled.clear();
                None
            }
            SortEvent::Line { line } => {
                self.current_line = Some(*line);
                None
            }
            SortEvent::Complexity { comparisons, swaps } => {
                let live = estimate(algorithm, *comparisons, *swaps, len);
                self.live_complexity = Some(live.to_string());
                None
            }
            _ => None,
        }
    }
}
