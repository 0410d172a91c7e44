//! Config module - engine settings with `BLOCKFALL_*` environment overrides

use std::str::FromStr;

use blockfall_core::types::{BoardSize, DEFAULT_LINE_CLEAR_DELAY_MS};

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub board: BoardSize,
    pub initial_level: u32,
    /// Piece supply seed; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// Pause between landing a piece that completes rows and clearing them
    pub line_clear_delay_ms: u32,
    /// Write `[Engine]` lines to stderr on phase changes
    pub log_events: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board: BoardSize::standard(),
            initial_level: 0,
            seed: None,
            line_clear_delay_ms: DEFAULT_LINE_CLEAR_DELAY_MS,
            log_events: false,
        }
    }
}

impl EngineConfig {
    /// Create from `BLOCKFALL_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary key lookup
    ///
    /// Missing or unparseable values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let width = parsed(&lookup, "BLOCKFALL_WIDTH").unwrap_or(defaults.board.width);
        let height = parsed(&lookup, "BLOCKFALL_HEIGHT").unwrap_or(defaults.board.height);
        let initial_level =
            parsed(&lookup, "BLOCKFALL_LEVEL").unwrap_or(defaults.initial_level);
        let seed = parsed(&lookup, "BLOCKFALL_SEED");
        let line_clear_delay_ms =
            parsed(&lookup, "BLOCKFALL_LINE_CLEAR_MS").unwrap_or(defaults.line_clear_delay_ms);

        let log_events = lookup("BLOCKFALL_LOG")
            .map(|s| matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true"))
            .unwrap_or(defaults.log_events);

        Self {
            board: BoardSize::new(width, height),
            initial_level,
            seed,
            line_clear_delay_ms,
            log_events,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(EngineConfig::from_lookup(lookup(&[])), EngineConfig::default());
    }

    #[test]
    fn values_are_parsed() {
        let config = EngineConfig::from_lookup(lookup(&[
            ("BLOCKFALL_WIDTH", "8"),
            ("BLOCKFALL_HEIGHT", " 16 "),
            ("BLOCKFALL_LEVEL", "5"),
            ("BLOCKFALL_SEED", "42"),
            ("BLOCKFALL_LINE_CLEAR_MS", "0"),
            ("BLOCKFALL_LOG", "TRUE"),
        ]));
        assert_eq!(config.board, BoardSize::new(8, 16));
        assert_eq!(config.initial_level, 5);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.line_clear_delay_ms, 0);
        assert!(config.log_events);
    }

    #[test]
    fn garbage_falls_back() {
        let config = EngineConfig::from_lookup(lookup(&[
            ("BLOCKFALL_WIDTH", "wide"),
            ("BLOCKFALL_SEED", "-1"),
            ("BLOCKFALL_LOG", "yes please"),
        ]));
        assert_eq!(config.board.width, 10);
        assert_eq!(config.seed, None);
        assert!(!config.log_events);
    }

    #[test]
    fn from_env_does_not_panic() {
        let _config = EngineConfig::from_env();
    }
}
