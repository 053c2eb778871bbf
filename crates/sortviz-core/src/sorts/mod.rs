//! Instrumented sorting algorithms.
//!
//! Each sort works on its own copy of the input and reports every visible
//! step to a [`Recorder`](crate::Recorder). Line numbers refer to the
//! algorithm's listing in the [`Catalog`](crate::Catalog).

mod bubble;
mod insertion;
mod merge;
mod selection;

pub use bubble::bubble_sort;
pub use insertion::insertion_sort;
pub use merge::merge_sort;
pub use selection::selection_sort;
