//! Top-down merge sort.

use crate::events::Value;
use crate::recorder::Recorder;

/// Sort `values` in place with recursive halving.
///
/// Every merged range `[l, r]` with `l < r` is reported as one `pivot`;
/// single-element ranges are not.
pub fn merge_sort(values: &mut [Value], rec: &mut Recorder) {
    if values.is_empty() {
        return;
    }
    let r = values.len() - 1;
    sort_range(values, 0, r, rec);
}

fn sort_range(values: &mut [Value], l: usize, r: usize, rec: &mut Recorder) {
    if l >= r {
        return;
    }
    rec.line(2);
    let mid = l + (r - l) / 2;
    rec.line(3);
    sort_range(values, l, mid, rec);
    rec.line(4);
    sort_range(values, mid + 1, r, rec);
    rec.line(5);
    merge(values, l, mid, r, rec);
}

fn merge(values: &mut [Value], l: usize, mid: usize, r: usize, rec: &mut Recorder) {
    let left = values[l..=mid].to_vec();
    let right = values[mid + 1..=r].to_vec();
    let (mut i, mut j, mut k) = (0, 0, l);

    while i < left.len() && j < right.len() {
        rec.compare(l + i, mid + 1 + j);
        rec.count_compare();
        rec.snapshot();
        // Ties take the left run, which keeps the sort stable
        let value = if left[i] <= right[j] {
            i += 1;
            left[i - 1]
        } else {
            j += 1;
            right[j - 1]
        };
        place(values, k, value, rec);
        k += 1;
    }

    for &value in left[i..].iter().chain(&right[j..]) {
        place(values, k, value, rec);
        k += 1;
    }

    rec.pivot(l, r);
}

fn place(values: &mut [Value], k: usize, value: Value, rec: &mut Recorder) {
    values[k] = value;
    rec.overwrite(k, value);
    rec.count_writes(1);
    rec.snapshot();
}
