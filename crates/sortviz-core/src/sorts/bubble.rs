//! Bubble sort.

use crate::events::Value;
use crate::recorder::Recorder;

/// Sort `values` in place by adjacent exchanges.
pub fn bubble_sort(values: &mut [Value], rec: &mut Recorder) {
    let n = values.len();
    rec.line(0);
    for i in 0..n.saturating_sub(1) {
        rec.line(1);
        for j in 0..n - i - 1 {
            rec.line(2);
            rec.compare(j, j + 1);
            rec.count_compare();
            rec.snapshot();
            if values[j] > values[j + 1] {
                rec.line(3);
                values.swap(j, j + 1);
                rec.swap(j, j + 1);
                rec.count_swap();
                rec.snapshot();
                rec.count_writes(2);
                rec.snapshot();
            }
        }
    }
}
