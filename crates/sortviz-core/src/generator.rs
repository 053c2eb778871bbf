//! Event generation: run an instrumented sort and collect its recording.

use crate::algorithm::Algorithm;
use crate::events::Value;
use crate::recorder::{Recorder, Recording};
use crate::sorts::{bubble_sort, insertion_sort, merge_sort, selection_sort};

/// Run `algorithm` over a copy of `sequence` and return every recorded event
/// plus the final counters. The input is never mutated.
pub fn generate(sequence: &[Value], algorithm: Algorithm) -> Recording {
    let mut working = sequence.to_vec();
    let mut rec = Recorder::new();

    match algorithm {
        Algorithm::Bubble => bubble_sort(&mut working, &mut rec),
        Algorithm::Selection => selection_sort(&mut working, &mut rec),
        Algorithm::Insertion => insertion_sort(&mut working, &mut rec),
        Algorithm::Merge => merge_sort(&mut working, &mut rec),
    }

    rec.finish()
}

/// Generate by algorithm id. An unrecognized id yields only the terminal
/// `clear`.
pub fn generate_by_id(sequence: &[Value], id: &str) -> Recording {
    match id.parse::<Algorithm>() {
        Ok(algorithm) => generate(sequence, algorithm),
        Err(_) => Recorder::new().finish(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{replay, SortEvent};
    use proptest::prelude::*;

    #[test]
    fn input_is_untouched() {
        let input = vec![3, 1, 2];
        for algorithm in Algorithm::ALL {
            let _ = generate(&input, algorithm);
            assert_eq!(input, vec![3, 1, 2]);
        }
    }

    #[test]
    fn clear_is_last_even_when_empty() {
        for algorithm in Algorithm::ALL {
            for len in 0..4 {
                let input: Vec<Value> = (0..len).rev().collect();
                let recording = generate(&input, algorithm);
                assert_eq!(recording.events.last(), Some(&SortEvent::Clear));
                assert_eq!(recording.count("clear"), 1);
            }
        }
    }

    #[test]
    fn unknown_id_yields_only_clear() {
        let recording = generate_by_id(&[2, 1], "bogosort");
        assert_eq!(recording.events, vec![SortEvent::Clear]);
        assert_eq!(recording.stats, Default::default());
    }

    #[test]
    fn known_id_matches_typed_generation() {
        assert_eq!(
            generate_by_id(&[2, 1, 3], "merge"),
            generate(&[2, 1, 3], Algorithm::Merge)
        );
    }

    #[test]
    fn deterministic() {
        let input = vec![9, 4, 7, 1, 8, 2];
        for algorithm in Algorithm::ALL {
            assert_eq!(generate(&input, algorithm), generate(&input, algorithm));
        }
    }

    #[test]
    fn worked_bubble_example() {
        let input = vec![5, 3, 1, 4, 2];
        let recording = generate(&input, Algorithm::Bubble);
        assert_eq!(replay(&input, &recording.events), vec![1, 2, 3, 4, 5]);
        assert_eq!(recording.stats.comparisons, 10);
    }

    #[test]
    fn complexity_snapshots_never_decrease() {
        let input = vec![7, 3, 9, 1, 5, 5, 2];
        for algorithm in Algorithm::ALL {
            let recording = generate(&input, algorithm);
            let mut last = (0, 0);
            for event in &recording.events {
                if let SortEvent::Complexity { comparisons, swaps } = *event {
                    assert!(comparisons >= last.0 && swaps >= last.1);
                    last = (comparisons, swaps);
                }
            }
            assert_eq!(last, (recording.stats.comparisons, recording.stats.swaps));
        }
    }

    proptest! {
        #[test]
        fn replay_sorts_any_input(
            input in prop::collection::vec(0u32..500, 0..40),
            which in 0usize..4,
        ) {
            let algorithm = Algorithm::ALL[which];
            let recording = generate(&input, algorithm);

            let mut expected = input.clone();
            expected.sort_unstable();
            prop_assert_eq!(replay(&input, &recording.events), expected);
            prop_assert_eq!(recording.events.last(), Some(&SortEvent::Clear));
        }

        #[test]
        fn indices_stay_in_bounds(input in prop::collection::vec(0u32..50, 0..30)) {
            for algorithm in Algorithm::ALL {
                let recording = generate(&input, algorithm);
                for event in &recording.events {
                    match event {
                        SortEvent::Compare { i, j } | SortEvent::Swap { i, j } => {
                            prop_assert!(*i < input.len() && *j < input.len());
                        }
                        SortEvent::Overwrite { i, .. } => prop_assert!(*i < input.len()),
                        SortEvent::Pivot { indices } => {
                            prop_assert!(indices.iter().all(|i| *i < input.len()));
                        }
                        _ => {}
                    }
                }
            }
        }
    }
}
