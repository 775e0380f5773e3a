//! Engine tuning knobs.
//!
//! Defaults reproduce the stock behavior: duplicates start their search one
//! cell right and down of the source, and the spiral search may walk as far
//! as the larger grid dimension. Both can be overridden from the environment;
//! a missing or unparsable value silently keeps the default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts::{DEFAULT_DUPLICATE_OFFSET, ENV_DUPLICATE_OFFSET, ENV_MAX_SEARCH_RADIUS};
use crate::item::Grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Diagonal offset from a duplicated item to its search start.
    pub duplicate_offset: i32,
    /// Upper bound on the spiral search radius. `None` searches the whole grid.
    pub max_search_radius: Option<i32>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { duplicate_offset: DEFAULT_DUPLICATE_OFFSET, max_search_radius: None }
    }
}

impl EngineConfig {
    /// Defaults overlaid with `BINPLAN_DUPLICATE_OFFSET` and `BINPLAN_MAX_SEARCH_RADIUS`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`EngineConfig::from_env`] but reading variables through `lookup`.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            duplicate_offset: parse_or(lookup(ENV_DUPLICATE_OFFSET), DEFAULT_DUPLICATE_OFFSET),
            max_search_radius: parse(lookup(ENV_MAX_SEARCH_RADIUS)).map(|radius: i32| radius.max(0)),
        }
    }

    /// Effective spiral radius on `grid`: the configured cap, never past `max(grid.x, grid.y)`.
    #[must_use]
    pub fn search_radius(&self, grid: Grid) -> i32 {
        let full = grid.max_radius();
        self.max_search_radius.map_or(full, |cap| cap.min(full))
    }
}

fn parse<T: std::str::FromStr>(raw: Option<String>) -> Option<T> {
    raw.and_then(|value| value.trim().parse::<T>().ok())
}

fn parse_or<T: std::str::FromStr>(raw: Option<String>, default: T) -> T {
    parse(raw).unwrap_or(default)
}
