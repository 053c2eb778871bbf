//! Live big-O estimation from running counters.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::algorithm::Algorithm;

/// Growth class reported by the live estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityClass {
    Linear,
    Linearithmic,
    Quadratic,
}

impl ComplexityClass {
    pub fn label(&self) -> &'static str {
        match self {
            ComplexityClass::Linear => "O(n)",
            ComplexityClass::Linearithmic => "O(n log n)",
            ComplexityClass::Quadratic => "O(n²)",
        }
    }
}

/// A live estimate derived from one `complexity` snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveComplexity {
    pub class: ComplexityClass,
    pub operations: u64,
    pub n: usize,
}

impl fmt::Display for LiveComplexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} after {} ops (n = {})",
            self.class.label(),
            self.operations,
            self.n
        )
    }
}

/// Estimate the growth class of `algorithm` after `comparisons + swaps`
/// operations on a sequence of length `n`.
pub fn estimate(algorithm: Algorithm, comparisons: u64, swaps: u64, n: usize) -> LiveComplexity {
    let operations = comparisons + swaps;
    let n_f = n as f64;
    let ops = operations as f64;

    let class = match algorithm {
        Algorithm::Bubble if ops > 0.8 * n_f * n_f => ComplexityClass::Quadratic,
        // Few exchanges: near the linear best case
        Algorithm::Bubble => ComplexityClass::Linear,
        Algorithm::Selection => ComplexityClass::Quadratic,
        Algorithm::Insertion if ops < 1.5 * n_f => ComplexityClass::Linear,
        Algorithm::Insertion => ComplexityClass::Quadratic,
        Algorithm::Merge => ComplexityClass::Linearithmic,
    };

    LiveComplexity { class, operations, n }
}
