//! Server configuration from the environment and command line.

use std::net::SocketAddr;

use sortviz_core::RunConfig;
use tracing::warn;

const DEFAULT_ADDR: &str = "0.0.0.0:3000";

/// Configuration for the visualization server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisConfig {
    /// HTTP listen address
    pub addr: SocketAddr,

    /// Initial run configuration
    pub run: RunConfig,

    /// Seed for reproducible sequences
    pub seed: Option<u64>,
}

impl Default for VisConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            run: RunConfig::default(),
            seed: None,
        }
    }
}

impl VisConfig {
    /// Create config from environment variables with sensible defaults.
    ///
    /// `SORTVIZ_ADDR`, `SORTVIZ_QUERY` and `SORTVIZ_SEED`. Values that do not
    /// parse are logged and replaced by their default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let addr_text = lookup("SORTVIZ_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_text.parse().unwrap_or_else(|_| {
            warn!(value = %addr_text, "Invalid SORTVIZ_ADDR, using default");
            Self::default().addr
        });

        let run = lookup("SORTVIZ_QUERY")
            .map(|q| RunConfig::from_query(&q))
            .unwrap_or_default();

        let seed = lookup("SORTVIZ_SEED").and_then(|s| match s.parse() {
            Ok(seed) => Some(seed),
            Err(_) => {
                warn!(value = %s, "Invalid SORTVIZ_SEED, ignoring");
                None
            }
        });

        Self { addr, run, seed }
    }

    /// Apply positional arguments: `[query] [port]`.
    #[must_use]
    pub fn with_args(mut self, args: &[String]) -> Self {
        if let Some(query) = args.first() {
            self.run = RunConfig::from_query(query);
        }
        if let Some(port) = args.get(1).and_then(|p| p.parse().ok()) {
            self.addr.set_port(port);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortviz_core::Algorithm;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_is_default() {
        assert_eq!(VisConfig::from_lookup(lookup(&[])), VisConfig::default());
    }

    #[test]
    fn environment_overrides() {
        let config = VisConfig::from_lookup(lookup(&[
            ("SORTVIZ_ADDR", "127.0.0.1:8080"),
            ("SORTVIZ_QUERY", "algo=insertion&size=25"),
            ("SORTVIZ_SEED", "99"),
        ]));

        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.run.algorithm(), Algorithm::Insertion);
        assert_eq!(config.run.length(), 25);
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn bad_environment_values_fall_back() {
        let config = VisConfig::from_lookup(lookup(&[
            ("SORTVIZ_ADDR", "not-an-addr"),
            ("SORTVIZ_SEED", "x"),
        ]));
        assert_eq!(config.addr, VisConfig::default().addr);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn positional_args() {
        let args = vec!["algo=selection&speed=150".to_string(), "4000".to_string()];
        let config = VisConfig::default().with_args(&args);
        assert_eq!(config.run.algorithm(), Algorithm::Selection);
        assert_eq!(config.run.speed(), 150);
        assert_eq!(config.addr.port(), 4000);
    }
}
