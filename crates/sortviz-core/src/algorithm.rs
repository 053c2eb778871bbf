//! Supported algorithms and their presentation data.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A sorting algorithm the generator can instrument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Bubble,
    Selection,
    Insertion,
    Merge,
}

impl Algorithm {
    /// All algorithms, in menu order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
    ];

    /// Lowercase identifier used in queries and on the wire.
    pub fn id(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Merge => "merge",
        }
    }

    /// Parse an id, falling back to [`Algorithm::Bubble`] when unrecognized.
    pub fn parse_or_default(id: &str) -> Self {
        id.parse().unwrap_or_default()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}

/// Cheat-sheet facts for one algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheatSheet {
    pub time: String,
    pub space: String,
    pub stable: bool,
}

/// Presentation data for one algorithm: its listing and cheat sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmInfo {
    pub algorithm: Algorithm,
    /// Source lines indexed by `line` events.
    pub listing: Vec<String>,
    pub cheat_sheet: CheatSheet,
}

/// Lookup table of presentation data, injected wherever it is displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    entries: BTreeMap<Algorithm, AlgorithmInfo>,
}

impl Catalog {
    /// Build a catalog from explicit entries.
    pub fn new(entries: impl IntoIterator<Item = AlgorithmInfo>) -> Self {
        Self {
            entries: entries.into_iter().map(|info| (info.algorithm, info)).collect(),
        }
    }

    pub fn get(&self, algorithm: Algorithm) -> Option<&AlgorithmInfo> {
        self.entries.get(&algorithm)
    }

    /// Text of a listing line, if both the algorithm and the line exist.
    pub fn line(&self, algorithm: Algorithm, line: usize) -> Option<&str> {
        self.get(algorithm)
            .and_then(|info| info.listing.get(line))
            .map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AlgorithmInfo> {
        self.entries.values()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        fn info(
            algorithm: Algorithm,
            listing: &[&str],
            time: &str,
            space: &str,
            stable: bool,
        ) -> AlgorithmInfo {
            AlgorithmInfo {
                algorithm,
                listing: listing.iter().map(|l| l.to_string()).collect(),
                cheat_sheet: CheatSheet {
                    time: time.to_string(),
                    space: space.to_string(),
                    stable,
                },
            }
        }

        Catalog::new([
            info(
                Algorithm::Bubble,
                &[
                    "for (let i = 0; i < n - 1; i++) {",
                    "  for (let j = 0; j < n - i - 1; j++) {",
                    "    if (arr[j] > arr[j + 1]) {",
                    "      swap(arr, j, j + 1);",
                    "    }",
                    "  }",
                    "}",
                ],
                "O(n²)",
                "O(1)",
                true,
            ),
            info(
                Algorithm::Selection,
                &[
                    "for (let i = 0; i < n; i++) {",
                    "  let minIdx = i;",
                    "  for (let j = i + 1; j < n; j++) {",
                    "    if (arr[j] < arr[minIdx]) minIdx = j;",
                    "  }",
                    "  swap(arr, i, minIdx);",
                    "}",
                ],
                "O(n²)",
                "O(1)",
                false,
            ),
            info(
                Algorithm::Insertion,
                &[
                    "for (let i = 1; i < n; i++) {",
                    "  let key = arr[i];",
                    "  let j = i - 1;",
                    "  while (j >= 0 && arr[j] > key) {",
                    "    arr[j + 1] = arr[j];",
                    "    j--;",
                    "  }",
                    "  arr[j + 1] = key;",
                    "}",
                ],
                "O(n²) – O(n)",
                "O(1)",
                true,
            ),
            info(
                Algorithm::Merge,
                &[
                    "function mergeSort(arr, l, r) {",
                    "  if (l >= r) return;",
                    "  const mid = Math.floor((l + r) / 2);",
                    "  mergeSort(arr, l, mid);",
                    "  mergeSort(arr, mid + 1, r);",
                    "  merge(arr, l, mid, r);",
                    "}",
                ],
                "O(n log n)",
                "O(n)",
                true,
            ),
        ])
    }
}
