//! Sortviz Core
//!
//! Instrumented sorting algorithms that record a linear, replayable list of
//! animation events.
//!
//! # Architecture
//!
//! - **Sorts**: bubble, selection, insertion and merge, each reporting every
//!   visible step to a [`Recorder`]
//! - **Generator**: runs one sort over a private copy of the input and seals
//!   the recording with a terminal `clear`
//! - **Complexity**: turns `complexity` snapshots into a live big-O estimate
//! - **Config**: run settings, clamping, and the shareable query form
//!
//! # Usage
//!
//! ```
//! use sortviz_core::{generate, replay, Algorithm};
//!
//! let input = vec![5, 3, 1, 4, 2];
//! let recording = generate(&input, Algorithm::Bubble);
//!
//! assert_eq!(replay(&input, &recording.events), vec![1, 2, 3, 4, 5]);
//! assert_eq!(recording.stats.comparisons, 10);
//! ```

mod algorithm;
mod complexity;
mod config;
mod error;
mod events;
mod generator;
mod recorder;
mod sequence;
pub mod sorts;

pub use algorithm::{Algorithm, AlgorithmInfo, Catalog, CheatSheet};
pub use complexity::{estimate, ComplexityClass, LiveComplexity};
pub use config::{
    RunConfig, DEFAULT_LENGTH, DEFAULT_SPEED, MAX_LENGTH, MAX_SPEED, MIN_LENGTH, MIN_SPEED,
};
pub use error::{Error, Result};
pub use events::{replay, SortEvent, Stats, Value};
pub use generator::{generate, generate_by_id};
pub use recorder::{Recorder, Recording};
pub use sequence::{random_sequence, MAX_VALUE, MIN_VALUE};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bubble_comparisons_are_n_choose_two() {
        for n in [0usize, 1, 5, 17, 40] {
            let input: Vec<Value> = (0..n as Value).rev().collect();
            let recording = generate(&input, Algorithm::Bubble);
            assert_eq!(recording.stats.comparisons, (n * n.saturating_sub(1) / 2) as u64);
        }
    }

    #[test]
    fn random_sequences_sort_under_every_algorithm() {
        use rand::{rngs::StdRng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(2024);
        for len in [MIN_LENGTH, DEFAULT_LENGTH, MAX_LENGTH] {
            let input = random_sequence(len, &mut rng);
            let mut expected = input.clone();
            expected.sort_unstable();
            for algorithm in Algorithm::ALL {
                let recording = generate(&input, algorithm);
                assert_eq!(replay(&input, &recording.events), expected, "{algorithm}");
            }
        }
    }
}
