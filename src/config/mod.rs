/*!
Configuration of a refutation.

The passes of the [transform](crate::transform) module have nothing to configure, and so configuration concerns only the [resolution engine](crate::procedures::resolution).

Each budget is optional, and when set is a safety valve against inputs with many atoms, as the number of clauses over a vocabulary grows exponentially with the size of the vocabulary.
When a budget is exceeded a refutation ends with [Unknown](crate::reports::Report::Unknown).

```rust
# use otter_resolution::config::Config;
let config = Config {
    round_limit: Some(16),
    workers: 4,
    ..Config::default()
};
assert!(config.time_limit.is_none());
```
*/

pub mod defaults;

/// Count of scans over the clause set.
pub type RoundCount = usize;

/// Count of clauses in the clause set.
pub type ClauseCount = usize;

/// Count of threads used when scanning the clause set.
pub type WorkerCount = usize;

/// The primary configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    /// The time limit for a refutation.
    pub time_limit: Option<std::time::Duration>,

    /// The maximum number of scans of the clause set.
    pub round_limit: Option<RoundCount>,

    /// The maximum number of clauses held in the clause set.
    pub clause_limit: Option<ClauseCount>,

    /// The number of threads used to scan pairs of clauses.
    /// A value of one (or zero) scans on the calling thread.
    pub workers: WorkerCount,
}

impl Default for Config {
    fn default() -> Self {
        use defaults::*;
        Config {
            time_limit: TIME_LIMIT,
            round_limit: ROUND_LIMIT,
            clause_limit: CLAUSE_LIMIT,
            workers: WORKERS,
        }
    }
}

impl Config {
    /// Whether scans should be split across threads.
    pub fn parallel(&self) -> bool {
        self.workers > 1
    }
}
