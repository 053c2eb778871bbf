//! Selection sort.

use crate::events::Value;
use crate::recorder::Recorder;

/// Sort `values` in place by repeatedly selecting the minimum of the
/// unsorted suffix.
pub fn selection_sort(values: &mut [Value], rec: &mut Recorder) {
    let n = values.len();
    rec.line(0);
    for i in 0..n {
        rec.line(1);
        let mut min_idx = i;
        rec.line(2);
        for j in i + 1..n {
            rec.line(3);
            rec.compare(min_idx, j);
            rec.count_compare();
            rec.snapshot();
            if values[j] < values[min_idx] {
                min_idx = j;
            }
        }
        rec.line(5);
        if min_idx != i {
            values.swap(i, min_idx);
            rec.swap(i, min_idx);
            rec.count_swap();
            rec.snapshot();
            rec.count_writes(2);
            rec.snapshot();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::SortEvent;

    #[test]
    fn sorts_and_counts() {
        let mut values = vec![5, 3, 1, 4, 2];
        let mut rec = Recorder::new();
        selection_sort(&mut values, &mut rec);
        let recording = rec.finish();

        assert_eq!(values, vec![1, 2, 3, 4, 5]);
        assert_eq!(recording.stats.comparisons, 10);
        assert_eq!(recording.stats.swaps, 3);
        assert_eq!(recording.stats.writes, 6);
    }

    #[test]
    fn compare_tracks_running_minimum() {
        let mut values = vec![3, 1, 2];
        let mut rec = Recorder::new();
        selection_sort(&mut values, &mut rec);

        let compares: Vec<_> = rec
            .events()
            .iter()
            .filter(|e| matches!(e, SortEvent::Compare { .. }))
            .cloned()
            .collect();
        assert_eq!(
            compares,
            vec![
                SortEvent::Compare { i: 0, j: 1 },
                SortEvent::Compare { i: 1, j: 2 },
                SortEvent::Compare { i: 1, j: 2 },
            ]
        );
    }

    #[test]
    fn no_swap_when_minimum_in_place() {
        let mut values = vec![1, 2, 3, 4];
        let mut rec = Recorder::new();
        selection_sort(&mut values, &mut rec);
        let recording = rec.finish();

        assert_eq!(recording.count("swap"), 0);
        assert_eq!(recording.stats.comparisons, 6);
    }
}
