//! Run configuration and its query-string form.
//!
//! Configuration never fails outright: setters clamp into range and query
//! parsing falls back to the default of each field it cannot use.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::algorithm::Algorithm;
use crate::error::Result;

pub const MIN_LENGTH: usize = 5;
pub const MAX_LENGTH: usize = 150;
pub const DEFAULT_LENGTH: usize = 40;

pub const MIN_SPEED: u32 = 1;
pub const MAX_SPEED: u32 = 200;
pub const DEFAULT_SPEED: u32 = 100;

/// Settings fixed for the duration of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunConfig {
    algorithm: Algorithm,
    length: usize,
    speed: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            length: DEFAULT_LENGTH,
            speed: DEFAULT_SPEED,
        }
    }
}

/// Raw query fields, kept as strings so one bad value only resets itself.
#[derive(Debug, Default, Deserialize)]
struct QueryFields {
    algo: Option<String>,
    size: Option<String>,
    speed: Option<String>,
}

impl RunConfig {
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the sequence length, clamped to `[MIN_LENGTH, MAX_LENGTH]`.
    #[must_use]
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length.clamp(MIN_LENGTH, MAX_LENGTH);
        self
    }

    /// Set the speed, clamped to `[MIN_SPEED, MAX_SPEED]`.
    #[must_use]
    pub fn with_speed(mut self, speed: u32) -> Self {
        self.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
        self
    }

    /// Pause between automatically applied events. Faster speeds wait less.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(u64::from(MAX_SPEED + MIN_SPEED - self.speed))
    }

    /// Render as `algo=<id>&size=<n>&speed=<s>`.
    pub fn to_query(&self) -> String {
        format!(
            "algo={}&size={}&speed={}",
            self.algorithm, self.length, self.speed
        )
    }

    /// Parse a query string, rejecting only undecodable input.
    ///
    /// Unknown keys are ignored. Unknown or out-of-range values take the
    /// field's default rather than being clamped.
    pub fn try_from_query(query: &str) -> Result<Self> {
        let query = query.trim_start_matches('?');
        let fields: QueryFields = serde_urlencoded::from_str(query)?;
        let defaults = Self::default();

        let algorithm = fields
            .algo
            .and_then(|id| id.parse().ok())
            .unwrap_or(defaults.algorithm);
        let length = fields
            .size
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|n| (MIN_LENGTH..=MAX_LENGTH).contains(n))
            .unwrap_or(defaults.length);
        let speed = fields
            .speed
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|s| (MIN_SPEED..=MAX_SPEED).contains(s))
            .unwrap_or(defaults.speed);

        Ok(Self {
            algorithm,
            length,
            speed,
        })
    }

    /// Like [`RunConfig::try_from_query`], but undecodable input yields the defaults.
    pub fn from_query(query: &str) -> Self {
        Self::try_from_query(query).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = RunConfig::default();
        assert_eq!(config.algorithm(), Algorithm::Bubble);
        assert_eq!(config.length(), 40);
        assert_eq!(config.speed(), 100);
        assert_eq!(config.delay(), Duration::from_millis(101));
    }

    #[test]
    fn setters_clamp() {
        let config = RunConfig::default().with_length(2).with_speed(0);
        assert_eq!(config.length(), MIN_LENGTH);
        assert_eq!(config.speed(), MIN_SPEED);

        let config = config.with_length(1_000).with_speed(999);
        assert_eq!(config.length(), MAX_LENGTH);
        assert_eq!(config.speed(), MAX_SPEED);
    }

    #[test]
    fn delay_spans_one_to_two_hundred_ms() {
        let fastest = RunConfig::default().with_speed(MAX_SPEED);
        let slowest = RunConfig::default().with_speed(MIN_SPEED);
        assert_eq!(fastest.delay(), Duration::from_millis(1));
        assert_eq!(slowest.delay(), Duration::from_millis(200));
    }

    #[test]
    fn query_round_trip() {
        let config = RunConfig::default()
            .with_algorithm(Algorithm::Merge)
            .with_length(64)
            .with_speed(180);
        let query = config.to_query();
        assert_eq!(query, "algo=merge&size=64&speed=180");
        assert_eq!(RunConfig::from_query(&query), config);
        assert_eq!(RunConfig::from_query(&format!("?{query}")), config);
    }

    #[test]
    fn bad_values_fall_back_per_field() {
        let config = RunConfig::from_query("algo=bogo&size=64&speed=500&theme=neon");
        assert_eq!(config.algorithm(), Algorithm::Bubble);
        assert_eq!(config.length(), 64);
        assert_eq!(config.speed(), DEFAULT_SPEED);

        let config = RunConfig::from_query("algo=insertion&size=3&speed=fast");
        assert_eq!(config.algorithm(), Algorithm::Insertion);
        assert_eq!(config.length(), DEFAULT_LENGTH);
        assert_eq!(config.speed(), DEFAULT_SPEED);
    }

    #[test]
    fn empty_query_is_default() {
        assert_eq!(RunConfig::from_query(""), RunConfig::default());
    }

    #[test]
    fn duplicate_keys_are_rejected_then_defaulted() {
        assert!(RunConfig::try_from_query("algo=merge&algo=bubble").is_err());
        assert_eq!(RunConfig::from_query("algo=merge&algo=bubble"), RunConfig::default());
    }
}
