//! Animation events recorded while a sort runs.

use serde::{Deserialize, Serialize};

/// A single element of a sequence being sorted.
pub type Value = u32;

/// One discrete, replayable effect of a sorting step.
///
/// Index fields always refer to positions in the sequence the events were
/// generated from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SortEvent {
    /// Two positions are being compared
    Compare { i: usize, j: usize },

    /// Two positions exchange their values
    Swap { i: usize, j: usize },

    /// One position receives an explicit value
    Overwrite { i: usize, value: Value },

    /// A set of positions is settled (merged range)
    Pivot { indices: Vec<usize> },

    /// The listing line currently executing (0-based)
    Line { line: usize },

    /// Running counters, for live complexity estimation
    Complexity { comparisons: u64, swaps: u64 },

    /// Clears all highlight state; always the final event
    Clear,

    /// Any tag this build does not understand. Applying it is a no-op.
    #[serde(other)]
    Unknown,
}

impl SortEvent {
    /// The wire tag of this event.
    pub fn tag(&self) -> &'static str {
        match self {
            SortEvent::Compare { .. } => "compare",
            SortEvent::Swap { .. } => "swap",
            SortEvent::Overwrite { .. } => "overwrite",
            SortEvent::Pivot { .. } => "pivot",
            SortEvent::Line { .. } => "line",
            SortEvent::Complexity { .. } => "complexity",
            SortEvent::Clear => "clear",
            SortEvent::Unknown => "unknown",
        }
    }

    /// Whether applying this event changes sequence values.
    pub fn mutates_sequence(&self) -> bool {
        matches!(self, SortEvent::Swap { .. } | SortEvent::Overwrite { .. })
    }
}

/// Aggregate counters of algorithmic work for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub comparisons: u64,
    pub swaps: u64,
    pub reads: u64,
    pub writes: u64,
}

impl Stats {
    pub fn compare(&mut self) {
        self.comparisons += 1;
    }

    pub fn swap(&mut self) {
        self.swaps += 1;
    }

    pub fn read(&mut self) {
        self.reads += 1;
    }

    pub fn write(&mut self, count: u64) {
        self.writes += count;
    }

    /// Comparisons plus swaps, the quantity the live estimate is based on.
    pub fn operations(&self) -> u64 {
        self.comparisons + self.swaps
    }
}

/// Apply the sequence-mutating events of `events` to a copy of `initial`.
///
/// Events that only highlight are skipped. Out-of-range indices are ignored
/// the same way playback ignores them.
pub fn replay(initial: &[Value], events: &[SortEvent]) -> Vec<Value> {
    let mut values = initial.to_vec();
    for event in events {
        match *event {
            SortEvent::Swap { i, j } if i < values.len() && j < values.len() => {
                values.swap(i, j);
            }
            SortEvent::Overwrite { i, value } if i < values.len() => {
                values[i] = value;
            }
            _ => {}
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_serialization() {
        let event = SortEvent::Overwrite { i: 3, value: 42 };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"overwrite\""));
        assert!(json.contains("42"));

        let parsed: SortEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
    }

    #[test]
    fn clear_has_no_payload() {
        let json = serde_json::to_string(&SortEvent::Clear).unwrap();
        assert_eq!(json, r#"{"type":"clear"}"#);
    }

    #[test]
    fn unrecognized_tag_becomes_unknown() {
        let parsed: SortEvent = serde_json::from_str(r#"{"type":"sparkle"}"#).unwrap();
        assert_eq!(parsed, SortEvent::Unknown);
        assert_eq!(parsed.tag(), "unknown");
    }

    #[test]
    fn stats_counters() {
        let mut stats = Stats::default();
        stats.compare();
        stats.compare();
        stats.swap();
        stats.read();
        stats.write(2);

        assert_eq!(stats.comparisons, 2);
        assert_eq!(stats.swaps, 1);
        assert_eq!(stats.reads, 1);
        assert_eq!(stats.writes, 2);
        assert_eq!(stats.operations(), 3);
    }

    #[test]
    fn replay_applies_only_mutations() {
        let events = vec![
            SortEvent::Compare { i: 0, j: 1 },
            SortEvent::Swap { i: 0, j: 1 },
            SortEvent::Line { line: 2 },
            SortEvent::Overwrite { i: 2, value: 9 },
            SortEvent::Swap { i: 0, j: 99 },
            SortEvent::Clear,
        ];

        assert_eq!(replay(&[1, 2, 3], &events), vec![2, 1, 9]);
    }
}
