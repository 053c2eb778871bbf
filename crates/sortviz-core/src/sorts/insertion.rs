//! Insertion sort.

use crate::events::Value;
use crate::recorder::Recorder;

/// Sort `values` in place by shifting each key left into its slot.
///
/// Comparisons are only counted for loop-condition re-checks after a shift,
/// so an already sorted input records none.
pub fn insertion_sort(values: &mut [Value], rec: &mut Recorder) {
    let n = values.len();
    rec.line(0);
    for i in 1..n {
        rec.line(1);
        let key = values[i];
        rec.count_read();
        // `hole` is the slot right of the element under inspection
        let mut hole = i;
        rec.line(3);
        while hole > 0 && values[hole - 1] > key {
            rec.line(4);
            let shifted = values[hole - 1];
            values[hole] = shifted;
            rec.overwrite(hole, shifted);
            rec.count_writes(1);
            rec.snapshot();
            hole -= 1;
            if hole > 0 {
                rec.line(3);
                rec.count_compare();
                rec.snapshot();
            }
        }
        rec.line(6);
        values[hole] = key;
        rec.overwrite(hole, key);
        rec.count_writes(1);
        rec.snapshot();
    }
}
